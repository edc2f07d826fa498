//! Geocentric ecliptic longitude of the Moon.
//!
//! Truncated ELP-2000/82 series as given in Meeus, *Astronomical
//! Algorithms* (2nd ed.), Chapter 47: the 60 largest periodic terms in
//! longitude plus the Venus, Jupiter and flattening additive terms.
//! Accuracy is about 10″ in longitude over several centuries around J2000.
//!
//! The result is referred to the mean equinox of date and excludes
//! nutation, which is what a mean-ayanamsha subtraction expects.

use dasa_frames::delaunay_arguments;
use dasa_time::jd_to_centuries;

/// Periodic terms in longitude: `[D, M, M', F, Σl]`, Σl in 1e-6 degrees.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i32; 5]; 60] = [
    [0,  0,  1,  0, 6288774], [2,  0, -1,  0, 1274027], [2,  0,  0,  0,  658314],
    [0,  0,  2,  0,  213618], [0,  1,  0,  0, -185116], [0,  0,  0,  2, -114332],
    [2,  0, -2,  0,   58793], [2, -1, -1,  0,   57066], [2,  0,  1,  0,   53322],
    [2, -1,  0,  0,   45758], [0,  1, -1,  0,  -40923], [1,  0,  0,  0,  -34720],
    [0,  1,  1,  0,  -30383], [2,  0,  0, -2,   15327], [0,  0,  1,  2,  -12528],
    [0,  0,  1, -2,   10980], [4,  0, -1,  0,   10675], [0,  0,  3,  0,   10034],
    [4,  0, -2,  0,    8548], [2,  1, -1,  0,   -7888], [2,  1,  0,  0,   -6766],
    [1,  0, -1,  0,   -5163], [1,  1,  0,  0,    4987], [2, -1,  1,  0,    4036],
    [2,  0,  2,  0,    3994], [4,  0,  0,  0,    3861], [2,  0, -3,  0,    3665],
    [0,  1, -2,  0,   -2689], [2,  0, -1,  2,   -2602], [2, -1, -2,  0,    2390],
    [1,  0,  1,  0,   -2348], [2, -2,  0,  0,    2236], [0,  1,  2,  0,   -2120],
    [0,  2,  0,  0,   -2069], [2, -2, -1,  0,    2048], [2,  0,  1, -2,   -1773],
    [2,  0,  0,  2,   -1595], [4, -1, -1,  0,    1215], [0,  0,  2,  2,   -1110],
    [3,  0, -1,  0,    -892], [2,  1,  1,  0,    -810], [4, -1, -2,  0,     759],
    [0,  2, -1,  0,    -713], [2,  2, -1,  0,    -700], [2,  1, -2,  0,     691],
    [2, -1,  0, -2,     596], [4,  0,  1,  0,     549], [0,  0,  4,  0,     537],
    [4, -1,  0,  0,     520], [1,  0, -2,  0,    -487], [2,  1,  0, -2,    -399],
    [0,  0,  2, -2,    -381], [1,  1,  1,  0,     351], [3,  0, -2,  0,    -340],
    [4,  0, -3,  0,     330], [2, -1,  2,  0,     327], [0,  2,  1,  0,    -323],
    [1,  1, -1,  0,     299], [2,  0,  3,  0,     294], [2,  0, -1, -2,       0],
];

/// Moon's geocentric ecliptic longitude, degrees in [0, 360), mean equinox of date.
pub fn moon_longitude_deg(jd_tt: f64) -> f64 {
    let t = jd_to_centuries(jd_tt);
    let args = delaunay_arguments(t);
    let mean_lon = args.moon_mean_longitude();

    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();

    // Eccentricity of Earth's orbit scales every term containing M.
    let e = 1.0 - t * (0.002516 + t * 0.0000074);

    let mut sigma_l: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&[cd, cm, cmp, cf, coeff]| {
            let arg = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
            let scale = match cm.abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            coeff as f64 * scale * arg.sin()
        })
        .sum();

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sigma_l += 3958.0 * a1.sin()
        + 1962.0 * (mean_lon - args.latitude_argument).to_radians().sin()
        + 318.0 * a2.sin();

    (mean_lon + sigma_l * 1e-6).rem_euclid(360.0)
}
