//! Tropical longitude models for the nine Vedic grahas.
//!
//! Every model is a closed-form function of the Julian Day. Accuracy is
//! that of mean elements plus a few periodic terms: good enough for sign
//! and nakshatra placement, not for observational work.

pub mod luminaries;
pub mod nodes;
pub mod planets;
pub mod retrograde;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use luminaries::{moon_longitude, sun_longitude};
pub use nodes::{ketu_longitude, rahu_longitude};
pub use planets::mean_planet_longitude;
pub use retrograde::is_retrograde_by_elongation;

/// The nine bodies used by Vedic charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

impl Body {
    /// Chart order: luminaries, the five planets, then the nodes.
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Rahu,
        Body::Ketu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Mercury and Venus orbit inside the Earth's orbit.
    pub fn is_inferior(self) -> bool {
        matches!(self, Self::Mercury | Self::Venus)
    }

    pub fn is_superior(self) -> bool {
        matches!(self, Self::Mars | Self::Jupiter | Self::Saturn)
    }

    pub fn is_lunar_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Body::ALL
            .iter()
            .copied()
            .find(|body| body.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown body '{}'", s))
    }
}

/// Tropical ecliptic longitude of a body plus its retrograde flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyLongitude {
    /// Longitude in degrees (0-360)
    pub longitude: f64,
    pub retrograde: bool,
}

/// Tropical position of a single body at the given Julian Day.
pub fn tropical_position(body: Body, jd: f64) -> BodyLongitude {
    match body {
        Body::Sun => BodyLongitude {
            longitude: sun_longitude(jd),
            retrograde: false,
        },
        Body::Moon => BodyLongitude {
            longitude: moon_longitude(jd),
            retrograde: false,
        },
        Body::Mercury => planet_position(body, &planets::MERCURY, jd),
        Body::Venus => planet_position(body, &planets::VENUS, jd),
        Body::Mars => planet_position(body, &planets::MARS, jd),
        Body::Jupiter => planet_position(body, &planets::JUPITER, jd),
        Body::Saturn => planet_position(body, &planets::SATURN, jd),
        // Mean nodes always regress
        Body::Rahu => BodyLongitude {
            longitude: rahu_longitude(jd),
            retrograde: true,
        },
        Body::Ketu => BodyLongitude {
            longitude: ketu_longitude(jd),
            retrograde: true,
        },
    }
}

fn planet_position(body: Body, elements: &planets::MeanElements, jd: f64) -> BodyLongitude {
    let longitude = elements.longitude(jd);
    BodyLongitude {
        longitude,
        retrograde: is_retrograde_by_elongation(body, longitude, sun_longitude(jd)),
    }
}

/// Tropical positions of all nine bodies, in [`Body::ALL`] order.
pub fn all_tropical_positions(jd: f64) -> [(Body, BodyLongitude); 9] {
    Body::ALL.map(|body| (body, tropical_position(body, jd)))
}
