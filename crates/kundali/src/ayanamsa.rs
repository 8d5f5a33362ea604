//! Ayanamsa: the precession offset between the tropical and sidereal zodiacs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::settings::SettingsError;
use crate::time::{DAYS_PER_JULIAN_YEAR, J1900_JD};

/// Lahiri ayanamsa at the 1900 reference epoch, in degrees.
pub const LAHIRI_AT_1900_DEG: f64 = 22.460148;

/// Mean annual precession, in arcseconds.
pub const PRECESSION_ARCSEC_PER_YEAR: f64 = 50.29;

/// Supported ayanamsa models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AyanamsaModel {
    /// Lahiri value at 1900 advanced at a constant precession rate.
    #[default]
    LahiriLinear,
}

const AYANAMSA_MODELS: &[(&str, AyanamsaModel)] = &[
    ("lahiri_linear", AyanamsaModel::LahiriLinear),
    ("lahiri", AyanamsaModel::LahiriLinear),
];

impl AyanamsaModel {
    /// Display name echoed into every chart.
    pub fn name(self) -> &'static str {
        match self {
            Self::LahiriLinear => "Lahiri",
        }
    }

    /// Ayanamsa in degrees at the given Julian Day.
    pub fn ayanamsa_deg(self, jd: f64) -> f64 {
        match self {
            Self::LahiriLinear => lahiri_ayanamsa_deg(jd),
        }
    }
}

impl fmt::Display for AyanamsaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AyanamsaModel {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        AYANAMSA_MODELS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, model)| *model)
            .ok_or_else(|| SettingsError::UnknownAyanamsa {
                name: s.to_string(),
                valid: AYANAMSA_MODELS.iter().map(|(name, _)| name.to_string()).collect(),
            })
    }
}

/// Linear Lahiri ayanamsa in degrees.
pub fn lahiri_ayanamsa_deg(jd: f64) -> f64 {
    let years = (jd - J1900_JD) / DAYS_PER_JULIAN_YEAR;
    LAHIRI_AT_1900_DEG + years * PRECESSION_ARCSEC_PER_YEAR / 3600.0
}
