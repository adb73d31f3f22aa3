//! Integration tests for densmap.
//!
//! These run the full load-render-save pipeline against generated NetCDF
//! fixtures.

mod common;

use common::{image_utils, test_data};
use std::path::{Path, PathBuf};

use densmap::{config::output_path_for, run, Args, DensmapError};

fn args_for(path: &Path) -> Args {
    Args {
        netcdf_file: path.to_path_buf(),
        token1: "NATL".to_string(),
        token2: "1980-2005".to_string(),
        quantity: "track".to_string(),
        log_level: "error".to_string(),
    }
}

#[test]
fn test_well_formed_input_produces_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("run01.nc");
    test_data::create_global_density_nc(&input, 72, 37, 0.2).unwrap();

    let output = run(&args_for(&input)).unwrap();

    assert_eq!(output, dir.path().join("run01_plot.png"));
    assert!(output.exists());
    assert!(std::fs::metadata(&output).unwrap().len() > 0);

    let image = image_utils::load_image(&output).unwrap();
    image_utils::assert_image_nonempty(&image);
}

#[test]
fn test_output_name_strips_only_last_extension() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.b.nc");
    test_data::create_global_density_nc(&input, 36, 19, 0.1).unwrap();

    let output = run(&args_for(&input)).unwrap();

    assert_eq!(output, dir.path().join("a.b_plot.png"));
    assert!(output.exists());
}

#[test]
fn test_values_above_top_level_are_clipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("hot.nc");
    // Peak 0.5 exceeds the top contour level 0.275
    test_data::create_global_density_nc(&input, 72, 37, 0.5).unwrap();

    let output = run(&args_for(&input)).unwrap();
    assert!(output.exists());

    let image = image_utils::load_image(&output).unwrap();
    image_utils::assert_image_nonempty(&image);
}

#[test]
fn test_descending_lat_renders_like_ascending() {
    let dir = tempfile::tempdir().unwrap();

    let ascending = dir.path().join("asc.nc");
    test_data::create_global_density_nc(&ascending, 72, 37, 0.2).unwrap();
    let descending = dir.path().join("desc.nc");
    test_data::create_descending_lat_density_nc(&descending, 72, 37, 0.2).unwrap();

    let asc_out = run(&args_for(&ascending)).unwrap();
    let desc_out = run(&args_for(&descending)).unwrap();

    // Same physical field, so the maps must match pixel for pixel
    let asc_img = image_utils::load_image(&asc_out).unwrap().to_rgba8();
    let desc_img = image_utils::load_image(&desc_out).unwrap().to_rgba8();
    assert_eq!(asc_img.dimensions(), desc_img.dimensions());
    assert!(asc_img.pixels().eq(desc_img.pixels()));
}

#[test]
fn test_shape_mismatch_fails_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("mismatch.nc");
    test_data::create_shape_mismatch_nc(&input).unwrap();

    let result = run(&args_for(&input));
    assert!(matches!(result, Err(DensmapError::ShapeMismatch { .. })));

    let output = output_path_for(&input);
    assert!(!output.exists(), "no output file may exist on failure");
}

#[test]
fn test_missing_dens_variable_fails_before_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nodens.nc");
    test_data::create_missing_dens_nc(&input).unwrap();

    let result = run(&args_for(&input));
    match result {
        Err(DensmapError::DataNotFound { message }) => assert!(message.contains("dens")),
        other => panic!("Expected DataNotFound, got {:?}", other),
    }

    assert!(!output_path_for(&input).exists());
}

#[test]
fn test_missing_input_file_fails() {
    let missing = PathBuf::from("/nonexistent/never.nc");
    let result = run(&args_for(&missing));
    assert!(result.is_err());
}

#[test]
fn test_title_uses_cli_arguments_verbatim() {
    let args = args_for(Path::new("run01.nc"));
    assert_eq!(args.title(), "track density for NATL 1980-2005");
}
