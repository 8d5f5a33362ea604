//! Tropical to sidereal conversion.

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Sidereal longitude from a tropical longitude and the ayanamsa, both in degrees.
pub fn tropical_to_sidereal(tropical: f64, ayanamsa: f64) -> f64 {
    normalize_degrees(tropical - ayanamsa)
}
