//! Vedic birth-chart engine.
//!
//! Turns a birth date, clock time and place into sidereal body positions,
//! whole-sign houses and a Vimshottari dasha timeline. All calculations
//! are closed-form and side-effect free.

pub mod ascendant;
pub mod ayanamsa;
pub mod birth;
pub mod bodies;
pub mod chart;
pub mod coordinates;
pub mod dasha;
pub mod error;
pub mod houses;
pub mod settings;
pub mod time;
pub mod zodiac;

pub use ayanamsa::AyanamsaModel;
pub use birth::{BirthInstant, BirthRecord};
pub use bodies::{Body, BodyLongitude};
pub use chart::{calculate_chart, BirthChart, ChartEngine, ChartPoint, PointPlacement};
pub use dasha::{DashaLevel, DashaPeriod, DashaSettings, DashaTimeline};
pub use error::ChartError;
pub use houses::House;
pub use settings::{EngineSettings, SettingsError};
pub use zodiac::{Sign, ZodiacPlacement};
