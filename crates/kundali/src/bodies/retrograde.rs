//! Retrograde flag from elongation bands.
//!
//! This is a geometric approximation, not a velocity sign. An inner
//! planet is flagged within 30 degrees of inferior conjunction, an outer
//! planet within 30 degrees of opposition. Flags can disagree with true
//! stations near the band edges.

use crate::bodies::Body;
use crate::coordinates::normalize_degrees;

/// Half-width of the retrograde band around inferior conjunction or opposition.
pub const RETROGRADE_BAND_DEG: f64 = 30.0;

/// Elongation of a body from the Sun, measured eastward in [0, 360).
pub fn elongation_from_sun(body_longitude: f64, sun_longitude: f64) -> f64 {
    normalize_degrees(body_longitude - sun_longitude)
}

/// Heuristic retrograde flag for Mercury through Saturn.
///
/// Band edges are exclusive. Other bodies are never flagged here; the
/// nodes get their flag from their own model.
pub fn is_retrograde_by_elongation(body: Body, body_longitude: f64, sun_longitude: f64) -> bool {
    let elongation = elongation_from_sun(body_longitude, sun_longitude);
    if body.is_inferior() {
        elongation < RETROGRADE_BAND_DEG || elongation > 360.0 - RETROGRADE_BAND_DEG
    } else if body.is_superior() {
        elongation > 180.0 - RETROGRADE_BAND_DEG && elongation < 180.0 + RETROGRADE_BAND_DEG
    } else {
        false
    }
}
