//! Mean-motion longitudes for Mercury through Saturn.
//!
//! Linear in time: reference longitude at J2000.0 plus a constant rate.
//! Eccentricity and perturbations are ignored.

use crate::bodies::Body;
use crate::coordinates::normalize_degrees;
use crate::time::centuries_since_j2000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    /// Mean longitude at J2000.0, degrees
    pub longitude_at_j2000: f64,
    /// Degrees per Julian century
    pub rate: f64,
}

impl MeanElements {
    pub fn longitude(&self, jd: f64) -> f64 {
        normalize_degrees(self.longitude_at_j2000 + self.rate * centuries_since_j2000(jd))
    }
}

pub const MERCURY: MeanElements = MeanElements {
    longitude_at_j2000: 252.250906,
    rate: 149472.6746358,
};
pub const VENUS: MeanElements = MeanElements {
    longitude_at_j2000: 181.979801,
    rate: 58517.8156760,
};
pub const MARS: MeanElements = MeanElements {
    longitude_at_j2000: 355.433000,
    rate: 19140.2993039,
};
pub const JUPITER: MeanElements = MeanElements {
    longitude_at_j2000: 34.351519,
    rate: 3034.9056606,
};
pub const SATURN: MeanElements = MeanElements {
    longitude_at_j2000: 50.077444,
    rate: 1222.1138488,
};

/// Mean elements of a classical planet; `None` for the luminaries and nodes.
pub fn mean_elements(body: Body) -> Option<MeanElements> {
    match body {
        Body::Mercury => Some(MERCURY),
        Body::Venus => Some(VENUS),
        Body::Mars => Some(MARS),
        Body::Jupiter => Some(JUPITER),
        Body::Saturn => Some(SATURN),
        Body::Sun | Body::Moon | Body::Rahu | Body::Ketu => None,
    }
}

/// Mean longitude of one of the five classical planets, in degrees.
/// The luminaries and nodes have their own models and give `None`.
pub fn mean_planet_longitude(body: Body, jd: f64) -> Option<f64> {
    mean_elements(body).map(|elements| elements.longitude(jd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

    #[test]
    fn test_reference_longitudes() {
        assert_eq!(mean_planet_longitude(Body::Mercury, J2000_JD), Some(252.250906));
        assert_eq!(mean_planet_longitude(Body::Saturn, J2000_JD), Some(50.077444));
    }

    #[test]
    fn test_jupiter_orbital_period() {
        // One sidereal revolution of Jupiter is about 11.86 years
        let period_years = 360.0 / JUPITER.rate * DAYS_PER_JULIAN_CENTURY / 365.25;
        assert!((period_years - 11.86).abs() < 0.01);
    }

    #[test]
    fn test_only_classical_planets_have_elements() {
        for body in Body::ALL {
            let expected = body.is_inferior() || body.is_superior();
            assert_eq!(mean_elements(body).is_some(), expected, "{body}");
            assert_eq!(mean_planet_longitude(body, J2000_JD).is_some(), expected, "{body}");
        }
    }
}
