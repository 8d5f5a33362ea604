//! Ascendant (Lagna) from local sidereal time and the obliquity of the ecliptic.
//!
//! `tan(latitude)` diverges at the geographic poles, where the ascendant
//! is undefined. Inputs at exactly +/-90 degrees are rejected when a
//! [`crate::BirthInstant`] is built; the functions here do not guard.

use crate::coordinates::normalize_degrees;
use crate::time::{centuries_since_j2000, days_since_j2000};

/// Latitude beyond which the ascendant changes very fast with time.
pub const POLAR_CIRCLE_LATITUDE_DEG: f64 = 66.5;

/// Greenwich Mean Sidereal Time in degrees [0, 360).
pub fn greenwich_mean_sidereal_time_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    normalize_degrees(
        280.46061837 + 360.98564736629 * days_since_j2000(jd) + 0.000387933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Local Sidereal Time in degrees; `longitude` is east-positive.
pub fn local_sidereal_time_deg(jd: f64, longitude: f64) -> f64 {
    normalize_degrees(greenwich_mean_sidereal_time_deg(jd) + longitude)
}

/// Mean obliquity of the ecliptic in degrees (linear in centuries).
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    23.439291 - 0.0130042 * centuries_since_j2000(jd)
}

/// Tropical ecliptic longitude of the ascendant, in degrees [0, 360).
///
/// `asc = atan2(cos(LST), -sin(eps)*tan(lat) - cos(eps)*sin(LST))`
pub fn ascendant_longitude(jd: f64, latitude: f64, longitude: f64) -> f64 {
    let lst = local_sidereal_time_deg(jd, longitude).to_radians();
    let eps = mean_obliquity_deg(jd).to_radians();
    let phi = latitude.to_radians();

    let asc = lst
        .cos()
        .atan2(-eps.sin() * phi.tan() - eps.cos() * lst.sin());
    normalize_degrees(asc.to_degrees())
}
