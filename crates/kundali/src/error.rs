use thiserror::Error;

/// Errors raised while validating a birth record.
///
/// The calculation itself cannot fail; everything here is rejected
/// before a Julian Day is ever computed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid birth date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("Invalid birth time '{value}': expected 24-hour HH:MM")]
    InvalidTime { value: String },
    #[error("{coordinate} {value} is not a finite number")]
    NonFiniteCoordinate { coordinate: &'static str, value: f64 },
    #[error("Latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange { value: f64 },
    #[error("Latitude {value} is at a geographic pole, where the ascendant is undefined")]
    PolarLatitude { value: f64 },
    #[error("Longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange { value: f64 },
    #[error("Invalid UTC offset '{value}': expected +HH:MM or -HH:MM")]
    InvalidUtcOffset { value: String },
}
