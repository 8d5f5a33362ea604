//! Engine settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ayanamsa::AyanamsaModel;
use crate::dasha::{DashaSettings, MAX_FULL_CYCLES};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("Unknown ayanamsa model: {name}. Valid models: {valid:?}")]
    UnknownAyanamsa { name: String, valid: Vec<String> },
    #[error("dasha.max_periods must be at least 1")]
    NoDashaPeriods,
    #[error("dasha.full_cycles is {value}; at most {max} cycles are generated")]
    TooManyDashaCycles { value: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub ayanamsa_model: AyanamsaModel,
    pub dasha: DashaSettings,
    /// Shift the birth clock time by the record's UTC offset before
    /// computing the Julian Day. Off by default: the local clock time is
    /// used as if it were UT.
    pub apply_utc_offset: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            ayanamsa_model: AyanamsaModel::default(),
            dasha: DashaSettings::default(),
            apply_utc_offset: false,
        }
    }
}

impl EngineSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.dasha.max_periods == 0 {
            return Err(SettingsError::NoDashaPeriods);
        }
        if self.dasha.full_cycles > MAX_FULL_CYCLES {
            return Err(SettingsError::TooManyDashaCycles {
                value: self.dasha.full_cycles,
                max: MAX_FULL_CYCLES,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::DashaLevel;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.ayanamsa_model, AyanamsaModel::LahiriLinear);
        assert_eq!(settings.dasha.full_cycles, 2);
        assert_eq!(settings.dasha.max_periods, 10);
        assert_eq!(settings.dasha.depth, DashaLevel::Primary);
        assert!(!settings.apply_utc_offset);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_periods_rejected() {
        let mut settings = EngineSettings::default();
        settings.dasha.max_periods = 0;
        assert_eq!(settings.validate(), Err(SettingsError::NoDashaPeriods));
    }

    #[test]
    fn test_oversized_horizon_rejected() {
        let mut settings = EngineSettings::default();
        settings.dasha.full_cycles = 2500;
        settings.dasha.max_periods = 30_000;
        assert_eq!(
            settings.validate(),
            Err(SettingsError::TooManyDashaCycles { value: 2500, max: MAX_FULL_CYCLES })
        );

        settings.dasha.full_cycles = MAX_FULL_CYCLES;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: EngineSettings =
            serde_json::from_str(r#"{"dasha": {"depth": "sub"}}"#).unwrap();
        assert_eq!(settings.dasha.depth, DashaLevel::Sub);
        assert_eq!(settings.dasha.max_periods, 10);
        assert_eq!(settings.ayanamsa_model, AyanamsaModel::LahiriLinear);
    }
}
