//! Birth chart assembly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::ascendant::{ascendant_longitude, POLAR_CIRCLE_LATITUDE_DEG};
use crate::bodies::{all_tropical_positions, moon_longitude, Body};
use crate::birth::BirthInstant;
use crate::coordinates::tropical_to_sidereal;
use crate::dasha::{compute_vimshottari_dasha, DashaTimeline};
use crate::houses::{house_for_sign, whole_sign_houses, House};
use crate::settings::{EngineSettings, SettingsError};
use crate::time::julian_day_from_datetime;
use crate::zodiac::{classify, ZodiacPlacement};

/// A point placed on the chart: the ascendant or one of the nine bodies.
///
/// The ascendant is its own variant so it can never be mistaken for a
/// body's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChartPoint {
    Ascendant,
    Body(Body),
}

impl ChartPoint {
    pub fn name(self) -> &'static str {
        match self {
            Self::Ascendant => "Ascendant",
            Self::Body(body) => body.name(),
        }
    }

    pub fn body(self) -> Option<Body> {
        match self {
            Self::Ascendant => None,
            Self::Body(body) => Some(body),
        }
    }
}

impl fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ascendant") {
            return Ok(Self::Ascendant);
        }
        s.parse::<Body>().map(Self::Body)
    }
}

impl From<ChartPoint> for String {
    fn from(point: ChartPoint) -> Self {
        point.name().to_string()
    }
}

impl TryFrom<String> for ChartPoint {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Flat record for the ascendant or a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointPlacement {
    pub name: ChartPoint,
    #[serde(flatten)]
    pub zodiac: ZodiacPlacement,
    pub tropical_longitude: f64,
    pub house: u8,
    pub is_retrograde: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChart {
    pub id: Uuid,
    #[serde(flatten)]
    pub birth: BirthInstant,
    pub julian_day: f64,
    pub ascendant: PointPlacement,
    pub bodies: Vec<PointPlacement>,
    pub houses: Vec<House>,
    #[serde(rename = "dashaPeriods")]
    pub dashas: DashaTimeline,
    pub ayanamsa: f64,
    pub ayanamsa_model: String,
    pub computed_at: DateTime<Utc>,
}

impl BirthChart {
    pub fn body(&self, body: Body) -> Option<&PointPlacement> {
        self.bodies
            .iter()
            .find(|placement| placement.name == ChartPoint::Body(body))
    }

    pub fn house(&self, number: u8) -> Option<&House> {
        self.houses.iter().find(|house| house.number == number)
    }
}

/// Stateless chart calculator. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    settings: EngineSettings,
}

impl Default for ChartEngine {
    fn default() -> Self {
        Self {
            settings: EngineSettings::default(),
        }
    }
}

impl ChartEngine {
    pub fn new(settings: EngineSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Compute a chart with a fresh id and the current time as its timestamp.
    pub fn calculate(&self, birth: &BirthInstant) -> BirthChart {
        self.calculate_with(birth, Uuid::new_v4(), Utc::now())
    }

    /// Compute a chart with a caller-supplied id and timestamp.
    ///
    /// Everything except those two fields is a pure function of `birth`
    /// and the engine settings.
    pub fn calculate_with(
        &self,
        birth: &BirthInstant,
        id: Uuid,
        computed_at: DateTime<Utc>,
    ) -> BirthChart {
        let settings = &self.settings;
        let universal = birth.universal_datetime(settings.apply_utc_offset);
        let jd = julian_day_from_datetime(&universal);
        let ayanamsa = settings.ayanamsa_model.ayanamsa_deg(jd);

        if birth.latitude().abs() > POLAR_CIRCLE_LATITUDE_DEG {
            log::warn!(
                "Chart at latitude {:.4}: ascendant is unstable inside the polar circles",
                birth.latitude()
            );
        }

        let asc_tropical = ascendant_longitude(jd, birth.latitude(), birth.longitude());
        let asc_zodiac = classify(tropical_to_sidereal(asc_tropical, ayanamsa));
        let asc_sign = asc_zodiac.sign_index;
        let ascendant = PointPlacement {
            name: ChartPoint::Ascendant,
            zodiac: asc_zodiac,
            tropical_longitude: asc_tropical,
            house: 1,
            is_retrograde: false,
        };

        let bodies: Vec<PointPlacement> = all_tropical_positions(jd)
            .into_iter()
            .map(|(body, position)| {
                let zodiac = classify(tropical_to_sidereal(position.longitude, ayanamsa));
                log::trace!(
                    "{}: tropical {:.6}, sidereal {:.6} ({} {:.4})",
                    body,
                    position.longitude,
                    zodiac.longitude,
                    zodiac.sign,
                    zodiac.degree_in_sign
                );
                PointPlacement {
                    name: ChartPoint::Body(body),
                    house: house_for_sign(zodiac.sign_index, asc_sign),
                    zodiac,
                    tropical_longitude: position.longitude,
                    is_retrograde: position.retrograde,
                }
            })
            .collect();

        let body_signs: Vec<(Body, u8)> = bodies
            .iter()
            .filter_map(|p| p.name.body().map(|body| (body, p.zodiac.sign_index)))
            .collect();
        let houses = whole_sign_houses(asc_sign, &body_signs);

        let moon_sidereal = tropical_to_sidereal(moon_longitude(jd), ayanamsa);
        let dashas = compute_vimshottari_dasha(
            birth.birth_moment(settings.apply_utc_offset),
            moon_sidereal,
            &settings.dasha,
        );

        log::debug!(
            "Assembled chart {} (jd {:.6}, ayanamsa {:.6}, ascendant {} {:.4}, {} dasha periods)",
            id,
            jd,
            ayanamsa,
            ascendant.zodiac.sign,
            ascendant.zodiac.degree_in_sign,
            dashas.len()
        );

        BirthChart {
            id,
            birth: birth.clone(),
            julian_day: jd,
            ascendant,
            bodies,
            houses,
            dashas,
            ayanamsa,
            ayanamsa_model: settings.ayanamsa_model.name().to_string(),
            computed_at,
        }
    }
}

/// Compute a chart with default settings.
pub fn calculate_chart(birth: &BirthInstant) -> BirthChart {
    ChartEngine::default().calculate(birth)
}
