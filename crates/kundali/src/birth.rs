//! Birth records: the validated input of every chart calculation.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Wire form of a birth record, as received from a request or a CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthRecord {
    pub birth_date: String,
    pub birth_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
}

/// A validated birth date, clock time and place.
///
/// The timezone name is carried for display. Only an explicit UTC offset
/// can move the clock time, and only when the engine is told to apply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BirthRecord", into = "BirthRecord")]
pub struct BirthInstant {
    date: NaiveDate,
    time: NaiveTime,
    latitude: f64,
    longitude: f64,
    timezone: String,
    utc_offset: Option<FixedOffset>,
}

impl BirthInstant {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        latitude: f64,
        longitude: f64,
        timezone: impl Into<String>,
    ) -> Result<Self, ChartError> {
        for (coordinate, value) in [("Latitude", latitude), ("Longitude", longitude)] {
            if !value.is_finite() {
                return Err(ChartError::NonFiniteCoordinate { coordinate, value });
            }
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ChartError::LatitudeOutOfRange { value: latitude });
        }
        if latitude.abs() == 90.0 {
            return Err(ChartError::PolarLatitude { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(ChartError::LongitudeOutOfRange { value: longitude });
        }
        // Clock times are minute-resolution
        let time = time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time);

        Ok(Self {
            date,
            time,
            latitude,
            longitude,
            timezone: timezone.into(),
            utc_offset: None,
        })
    }

    /// Build from `YYYY-MM-DD` and 24-hour `HH:MM` strings.
    pub fn parse(
        date: &str,
        time: &str,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<Self, ChartError> {
        Self::new(parse_date(date)?, parse_time(time)?, latitude, longitude, timezone)
    }

    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset
    }

    /// Local clock date-time, as written on the birth record.
    pub fn local_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// The date-time fed to the Julian Day conversion.
    ///
    /// With `apply_offset` and a known offset this is UT; otherwise it is
    /// the local clock time unchanged.
    pub fn universal_datetime(&self, apply_offset: bool) -> NaiveDateTime {
        let local = self.local_datetime();
        match (apply_offset, self.utc_offset) {
            (true, Some(offset)) => {
                local - chrono::Duration::seconds(offset.local_minus_utc() as i64)
            }
            _ => local,
        }
    }

    /// Birth moment on the UTC timeline, the origin of the dasha timeline.
    pub fn birth_moment(&self, apply_offset: bool) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.universal_datetime(apply_offset))
    }
}

impl TryFrom<BirthRecord> for BirthInstant {
    type Error = ChartError;

    fn try_from(record: BirthRecord) -> Result<Self, Self::Error> {
        let instant = Self::parse(
            &record.birth_date,
            &record.birth_time,
            record.latitude,
            record.longitude,
            &record.timezone,
        )?;
        match record.utc_offset.as_deref() {
            Some(offset) => Ok(instant.with_utc_offset(parse_utc_offset(offset)?)),
            None => Ok(instant),
        }
    }
}

impl From<BirthInstant> for BirthRecord {
    fn from(instant: BirthInstant) -> Self {
        Self {
            birth_date: instant.date.format(DATE_FORMAT).to_string(),
            birth_time: instant.time.format(TIME_FORMAT).to_string(),
            latitude: instant.latitude,
            longitude: instant.longitude,
            timezone: instant.timezone,
            utc_offset: instant.utc_offset.map(|offset| offset.to_string()),
        }
    }
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ChartError> {
    let err = || ChartError::InvalidDate {
        value: value.to_string(),
    };
    if value.len() != 10 {
        return Err(err());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| err())
}

/// Parse a strict 24-hour `HH:MM` time.
pub fn parse_time(value: &str) -> Result<NaiveTime, ChartError> {
    let err = || ChartError::InvalidTime {
        value: value.to_string(),
    };
    if value.len() != 5 {
        return Err(err());
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| err())
}

/// Parse a `+HH:MM` / `-HH:MM` offset east of UTC.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset, ChartError> {
    let err = || ChartError::InvalidUtcOffset {
        value: value.to_string(),
    };
    let trimmed = value.trim();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'+') => (1, &trimmed[1..]),
        Some(b'-') => (-1, &trimmed[1..]),
        _ => return Err(err()),
    };
    let (hours, minutes) = rest.split_once(':').ok_or_else(err)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(err());
    }
    let hours: i32 = hours.parse().map_err(|_| err())?;
    let minutes: i32 = minutes.parse().map_err(|_| err())?;
    if hours > 14 || minutes > 59 {
        return Err(err());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(err)
}
