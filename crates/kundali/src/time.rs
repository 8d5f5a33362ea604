//! Civil calendar to Julian Day conversion.
//!
//! The Julian Day is the continuous day count every other model in this
//! crate is driven by. The fractional part encodes the time of day, with
//! the day boundary at noon.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of 1900-01-00 12:00, the ayanamsa reference epoch.
pub const J1900_JD: f64 = 2_415_020.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Gregorian calendar date plus decimal clock hour to Julian Day.
///
/// January and February count as months 13 and 14 of the previous year
/// so the leap day falls at the end of the computational year. Callers
/// must pass a valid Gregorian date; nothing is checked here.
pub fn julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;

    let century = (y / 100.0).floor();
    let gregorian_correction = 2.0 - century + (century / 4.0).floor();

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day as f64
        + gregorian_correction
        - 1524.5
        + hour / 24.0
}

/// Julian Day of a naive date-time, read as UT.
pub fn julian_day_from_datetime(dt: &NaiveDateTime) -> f64 {
    let hour = dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    julian_day(dt.year(), dt.month(), dt.day(), hour)
}

/// Days elapsed since J2000.0.
pub fn days_since_j2000(jd: f64) -> f64 {
    jd - J2000_JD
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    days_since_j2000(jd) / DAYS_PER_JULIAN_CENTURY
}
