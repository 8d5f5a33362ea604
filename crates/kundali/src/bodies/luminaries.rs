//! Sun and Moon longitude from mean elements plus periodic corrections.

use crate::coordinates::normalize_degrees;
use crate::time::centuries_since_j2000;

/// Geometric longitude of the Sun, in degrees.
///
/// Mean longitude plus the equation of center (three harmonics of the
/// mean anomaly).
pub fn sun_longitude(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let mean_longitude = normalize_degrees(280.46646 + 36000.76983 * t);
    let m = normalize_degrees(357.52911 + 35999.05029 * t).to_radians();

    let equation_of_center = (1.914602 - 0.004817 * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    normalize_degrees(mean_longitude + equation_of_center)
}

/// Longitude of the Moon, in degrees.
///
/// Mean longitude plus the six largest periodic terms, driven by the
/// mean elongation (D), solar anomaly (M), lunar anomaly (M') and
/// argument of latitude (F).
pub fn moon_longitude(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let mean_longitude = normalize_degrees(218.3164477 + 481267.88123421 * t);
    let d = normalize_degrees(297.8501921 + 445267.1114034 * t).to_radians();
    let m = normalize_degrees(357.5291092 + 35999.0502909 * t).to_radians();
    let m_prime = normalize_degrees(134.9633964 + 477198.8675055 * t).to_radians();
    let f = normalize_degrees(93.2720950 + 483202.0175233 * t).to_radians();

    let correction = 6.288774 * m_prime.sin()
        + 1.274027 * (2.0 * d - m_prime).sin()
        + 0.658314 * (2.0 * d).sin()
        + 0.213618 * (2.0 * m_prime).sin()
        - 0.185116 * m.sin()
        - 0.114332 * (2.0 * f).sin();

    normalize_degrees(mean_longitude + correction)
}
