//! Coastline outlines.
//!
//! A low-resolution world coastline embedded as polyline vertex tables,
//! (longitude, latitude) in degrees with longitudes in [0, 360). Arcs that
//! cross the prime meridian are pre-split at longitude 0 so no segment
//! spans the map seam; the drawing loop still skips any segment wider than
//! 180 degrees as a guard.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;
use tracing::debug;

use crate::render::Projection;

/// Eurasia: English Channel east through Scandinavia, Siberia, east and
/// south Asia, Arabia, the Mediterranean north shore, ending at the
/// Spanish east coast near longitude 0.
const EURASIA: &[(f32, f32)] = &[
    (1.5, 51.0),
    (8.0, 55.0),
    (10.5, 57.5),
    (5.5, 60.5),
    (13.5, 67.0),
    (25.0, 71.0),
    (40.0, 67.5),
    (55.0, 69.0),
    (70.0, 73.0),
    (90.0, 76.0),
    (110.0, 77.0),
    (130.0, 72.0),
    (150.0, 70.0),
    (170.0, 70.0),
    (185.0, 66.0),
    (179.0, 62.0),
    (170.0, 60.0),
    (162.0, 56.5),
    (156.5, 51.0),
    (153.5, 56.5),
    (150.0, 59.5),
    (138.0, 54.0),
    (132.0, 43.0),
    (128.0, 38.5),
    (126.5, 34.5),
    (125.5, 37.5),
    (121.5, 39.0),
    (120.5, 32.0),
    (114.0, 22.5),
    (108.0, 21.0),
    (106.5, 17.0),
    (105.0, 9.0),
    (100.0, 13.5),
    (103.0, 1.5),
    (100.0, 6.0),
    (98.0, 14.0),
    (94.0, 16.0),
    (91.0, 22.0),
    (87.0, 21.0),
    (80.0, 13.5),
    (77.5, 8.0),
    (73.0, 16.0),
    (70.0, 21.5),
    (67.0, 24.0),
    (60.0, 25.0),
    (56.5, 27.0),
    (50.0, 30.0),
    (48.0, 29.0),
    (51.5, 24.0),
    (56.5, 22.0),
    (52.0, 15.5),
    (43.5, 12.0),
    (39.0, 20.5),
    (35.0, 28.0),
    (32.5, 30.0),
    (34.5, 31.5),
    (36.0, 36.0),
    (30.5, 36.5),
    (26.5, 38.5),
    (24.0, 38.0),
    (22.0, 37.0),
    (20.0, 39.5),
    (19.0, 41.5),
    (13.5, 45.5),
    (12.5, 44.0),
    (15.5, 41.5),
    (18.0, 40.0),
    (15.6, 38.0),
    (10.5, 43.5),
    (7.5, 43.7),
    (3.0, 42.3),
    (0.2, 39.0),
];

/// Iberia south of the Valencia gap, down to Gibraltar.
const IBERIA_SOUTH: &[(f32, f32)] = &[(359.5, 38.7), (356.5, 36.7), (354.6, 36.1)];

/// Atlantic Europe: Gibraltar north past Portugal and Biscay to the
/// Channel, ending near longitude 0.
const ATLANTIC_EUROPE: &[(f32, f32)] = &[
    (354.6, 36.1),
    (351.0, 37.0),
    (351.4, 41.0),
    (351.0, 43.5),
    (356.5, 43.4),
    (358.8, 46.0),
    (355.3, 48.6),
    (359.0, 49.7),
];

/// North Africa west of Greenwich: Ceuta along the Moroccan Mediterranean
/// shore toward Algeria.
const MAGHREB: &[(f32, f32)] = &[(354.7, 35.8), (357.0, 35.3), (359.9, 35.8)];

/// Africa east of Greenwich: the Algerian coast east to Suez, down the Red
/// Sea, around the Horn and the Cape, back up into the Gulf of Guinea.
const AFRICA_EAST: &[(f32, f32)] = &[
    (0.1, 35.9),
    (3.0, 36.8),
    (10.0, 37.2),
    (11.0, 35.0),
    (15.0, 32.4),
    (20.0, 32.5),
    (25.0, 31.8),
    (31.0, 31.2),
    (32.3, 31.0),
    (32.5, 29.9),
    (34.0, 28.0),
    (37.5, 21.5),
    (38.5, 18.0),
    (43.0, 11.5),
    (51.0, 12.0),
    (50.0, 8.0),
    (46.0, 4.5),
    (40.5, -2.0),
    (39.0, -7.0),
    (36.0, -18.0),
    (35.0, -22.0),
    (32.5, -28.5),
    (27.0, -33.5),
    (20.0, -34.5),
    (18.3, -33.0),
    (14.5, -26.5),
    (13.0, -12.0),
    (9.0, 0.0),
    (8.3, 4.5),
    (3.0, 6.2),
    (0.1, 5.8),
];

/// West Africa: the Gulf of Guinea west and north to Morocco, ending at
/// Gibraltar.
const WEST_AFRICA: &[(f32, f32)] = &[
    (359.9, 5.8),
    (356.0, 5.2),
    (352.0, 4.5),
    (347.5, 7.5),
    (343.0, 12.0),
    (342.5, 14.7),
    (344.0, 20.0),
    (346.0, 24.5),
    (350.0, 31.0),
    (353.5, 33.5),
    (354.6, 35.8),
];

/// The Americas, one closed outline.
const AMERICAS: &[(f32, f32)] = &[
    (192.0, 66.0),
    (203.0, 71.0),
    (235.0, 70.0),
    (265.0, 72.0),
    (280.0, 68.0),
    (298.0, 60.0),
    (305.0, 52.0),
    (290.0, 45.0),
    (286.0, 40.5),
    (280.5, 35.0),
    (278.5, 26.0),
    (270.0, 30.0),
    (263.0, 26.0),
    (262.5, 19.0),
    (273.0, 18.5),
    (277.0, 9.5),
    (280.0, 9.0),
    (285.0, 11.0),
    (299.0, 10.5),
    (308.0, 5.5),
    (325.0, -5.0),
    (321.5, -13.0),
    (312.0, -23.0),
    (307.0, -34.0),
    (295.0, -41.0),
    (292.0, -50.0),
    (291.0, -54.5),
    (286.5, -53.0),
    (287.5, -46.0),
    (288.5, -37.0),
    (289.0, -30.0),
    (283.5, -15.0),
    (279.0, -5.0),
    (280.0, 2.0),
    (282.5, 8.5),
    (270.5, 14.0),
    (255.0, 20.0),
    (245.5, 28.0),
    (240.0, 34.3),
    (236.0, 41.0),
    (237.5, 48.4),
    (228.0, 56.0),
    (212.0, 60.0),
    (195.5, 58.5),
    (192.0, 66.0),
];

/// Greenland, closed.
const GREENLAND: &[(f32, f32)] = &[
    (315.0, 60.0),
    (302.0, 66.5),
    (290.0, 76.0),
    (298.0, 82.0),
    (325.0, 83.5),
    (340.0, 70.0),
    (318.0, 61.5),
    (315.0, 60.0),
];

/// Great Britain, closed (its small extent east of Greenwich is dropped).
const BRITAIN: &[(f32, f32)] = &[
    (358.7, 50.8),
    (354.3, 51.3),
    (353.7, 54.6),
    (355.0, 58.6),
    (358.5, 57.3),
    (359.8, 52.9),
    (358.7, 50.8),
];

/// Ireland, closed.
const IRELAND: &[(f32, f32)] = &[
    (352.0, 51.8),
    (349.9, 53.5),
    (352.7, 55.3),
    (354.0, 54.0),
    (352.0, 51.8),
];

/// Iceland, closed.
const ICELAND: &[(f32, f32)] = &[
    (336.5, 64.0),
    (340.5, 63.5),
    (345.5, 64.5),
    (342.0, 66.2),
    (337.5, 65.5),
    (336.5, 64.0),
];

/// Australia, closed.
const AUSTRALIA: &[(f32, f32)] = &[
    (113.5, -22.0),
    (122.0, -17.0),
    (130.0, -12.5),
    (136.5, -12.0),
    (141.0, -17.0),
    (142.5, -11.0),
    (146.0, -19.0),
    (153.5, -27.0),
    (150.0, -37.0),
    (144.0, -38.5),
    (140.0, -36.0),
    (131.0, -31.5),
    (124.0, -33.0),
    (115.0, -34.5),
    (113.0, -26.0),
    (113.5, -22.0),
];

/// New Guinea, closed.
const NEW_GUINEA: &[(f32, f32)] = &[
    (131.0, -1.5),
    (136.0, -2.5),
    (141.0, -3.0),
    (147.5, -6.0),
    (150.5, -10.0),
    (143.0, -8.5),
    (138.0, -7.5),
    (132.0, -4.0),
    (131.0, -1.5),
];

/// Borneo, closed.
const BORNEO: &[(f32, f32)] = &[
    (109.5, 1.5),
    (114.5, 4.5),
    (119.0, 1.0),
    (116.0, -3.5),
    (110.0, -1.5),
    (109.5, 1.5),
];

/// Sumatra, closed.
const SUMATRA: &[(f32, f32)] = &[
    (95.5, 5.5),
    (103.0, -2.0),
    (106.0, -6.0),
    (101.5, -3.0),
    (95.5, 5.5),
];

/// Japan main islands as one rough arc.
const JAPAN: &[(f32, f32)] = &[
    (130.5, 31.5),
    (133.0, 34.0),
    (136.5, 35.0),
    (140.0, 35.5),
    (141.0, 39.0),
    (140.5, 43.0),
    (143.0, 44.0),
    (145.0, 43.5),
];

/// Madagascar, closed.
const MADAGASCAR: &[(f32, f32)] = &[
    (44.0, -12.0),
    (50.0, -15.5),
    (47.0, -25.0),
    (43.5, -21.5),
    (44.0, -12.0),
];

/// New Zealand, both islands as one arc.
const NEW_ZEALAND: &[(f32, f32)] = &[
    (173.0, -35.0),
    (176.0, -38.0),
    (174.5, -41.5),
    (170.5, -44.0),
    (166.8, -46.0),
    (171.5, -42.0),
];

/// Cuba.
const CUBA: &[(f32, f32)] = &[(276.0, 22.5), (280.0, 22.0), (284.5, 20.3)];

/// Antarctica, split at Greenwich.
const ANTARCTICA: &[(f32, f32)] = &[
    (0.5, -69.5),
    (30.0, -69.0),
    (60.0, -66.5),
    (90.0, -66.5),
    (120.0, -66.0),
    (150.0, -68.0),
    (180.0, -77.0),
    (210.0, -75.0),
    (240.0, -72.0),
    (270.0, -74.0),
    (297.0, -63.5),
    (300.0, -68.5),
    (330.0, -70.5),
    (359.5, -69.7),
];

/// All embedded coastline arcs.
pub const COASTLINES: &[&[(f32, f32)]] = &[
    EURASIA,
    IBERIA_SOUTH,
    ATLANTIC_EUROPE,
    MAGHREB,
    AFRICA_EAST,
    WEST_AFRICA,
    AMERICAS,
    GREENLAND,
    BRITAIN,
    IRELAND,
    ICELAND,
    AUSTRALIA,
    NEW_GUINEA,
    BORNEO,
    SUMATRA,
    JAPAN,
    MADAGASCAR,
    NEW_ZEALAND,
    CUBA,
    ANTARCTICA,
];

/// Draw the coastline arcs onto the figure.
pub fn draw_coastlines(img: &mut RgbaImage, proj: &Projection, color: [u8; 4]) {
    let mut segments = 0usize;

    for arc in COASTLINES {
        for pair in arc.windows(2) {
            let (lon0, lat0) = pair[0];
            let (lon1, lat1) = pair[1];

            // A jump wider than half the globe would wrap across the seam
            if (lon1 - lon0).abs() > 180.0 {
                continue;
            }

            let start = proj.to_pixel(lon0 as f64, lat0 as f64);
            let end = proj.to_pixel(lon1 as f64, lat1 as f64);
            draw_line_segment_mut(img, start, end, Rgba(color));
            segments += 1;
        }
    }

    debug!(segments = segments, "Coastlines drawn");
}
