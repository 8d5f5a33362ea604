//! Mean lunar nodes.

use crate::coordinates::normalize_degrees;
use crate::time::days_since_j2000;

/// Mean ascending node longitude at J2000.0, in degrees.
pub const RAHU_AT_J2000_DEG: f64 = 125.0445479;

/// Mean regression of the node, in degrees per day.
pub const RAHU_DAILY_MOTION_DEG: f64 = -0.0529539;

/// Mean ascending node (Rahu), in degrees.
pub fn rahu_longitude(jd: f64) -> f64 {
    normalize_degrees(RAHU_AT_J2000_DEG + RAHU_DAILY_MOTION_DEG * days_since_j2000(jd))
}

/// Descending node (Ketu): always opposite Rahu.
pub fn ketu_longitude(jd: f64) -> f64 {
    normalize_degrees(rahu_longitude(jd) + 180.0)
}
