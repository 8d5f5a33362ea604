//! Vimshottari dasha timeline.
//!
//! Dashas are periods ruled by one of nine bodies in a fixed 120-year
//! cycle. The cycle is entered at the lord of the Moon's birth nakshatra,
//! and the first period is shortened by the share of that nakshatra the
//! Moon has already crossed.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::bodies::Body;
use crate::zodiac::classify;

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;
pub const VIMSHOTTARI_YEAR_DAYS: f64 = 365.25;

/// Upper bound on `DashaSettings::full_cycles`.
pub const MAX_FULL_CYCLES: u32 = 10;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

type BodyYears = (Body, f64);

/// Cycle order and length in years. Entry `i` is the lord of nakshatras
/// `i`, `i + 9` and `i + 18`.
pub const VIMSHOTTARI_SEQUENCE: [BodyYears; 9] = [
    (Body::Ketu, 7.0),
    (Body::Venus, 20.0),
    (Body::Sun, 6.0),
    (Body::Moon, 10.0),
    (Body::Mars, 7.0),
    (Body::Rahu, 18.0),
    (Body::Jupiter, 16.0),
    (Body::Saturn, 19.0),
    (Body::Mercury, 17.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaLevel {
    /// Mahadasha
    #[default]
    Primary,
    /// Antardasha
    Sub,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashaSettings {
    /// Complete 9-period cycles generated after the birth period.
    pub full_cycles: u32,
    /// Periods kept, counting the birth period.
    pub max_periods: usize,
    /// Deepest level generated.
    pub depth: DashaLevel,
}

impl Default for DashaSettings {
    fn default() -> Self {
        Self {
            full_cycles: 2,
            max_periods: 10,
            depth: DashaLevel::Primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaPeriod {
    pub ruling_body: Body,
    #[serde(rename = "startDate")]
    pub start: DateTime<Utc>,
    #[serde(rename = "endDate")]
    pub end: DateTime<Utc>,
    pub duration_years: f64,
    pub level: DashaLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    /// Whether `instant` falls in `[start, end)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Where the Moon's nakshatra puts the birth moment inside the cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaBalance {
    /// Index into [`VIMSHOTTARI_SEQUENCE`].
    pub sequence_index: usize,
    pub ruling_body: Body,
    /// Share of the birth nakshatra already crossed, [0, 1).
    pub fraction_elapsed: f64,
    /// Years of the birth period left after birth.
    pub remaining_years: f64,
}

impl DashaBalance {
    /// Balance at the very start of the following lord's period.
    fn next_lord(self) -> DashaBalance {
        let sequence_index = (self.sequence_index + 1) % VIMSHOTTARI_SEQUENCE.len();
        let (ruling_body, years) = VIMSHOTTARI_SEQUENCE[sequence_index];
        DashaBalance {
            sequence_index,
            ruling_body,
            fraction_elapsed: 0.0,
            remaining_years: years,
        }
    }
}

/// Birth-period balance from the Moon's sidereal longitude.
pub fn dasha_balance(moon_sidereal_longitude: f64) -> DashaBalance {
    let placement = classify(moon_sidereal_longitude);
    let sequence_index = placement.lunar_mansion as usize % VIMSHOTTARI_SEQUENCE.len();
    let fraction_elapsed = placement.mansion_progress().clamp(0.0, 1.0);
    let (ruling_body, years) = VIMSHOTTARI_SEQUENCE[sequence_index];

    DashaBalance {
        sequence_index,
        ruling_body,
        fraction_elapsed,
        remaining_years: years * (1.0 - fraction_elapsed),
    }
}

/// Ordered, gapless sequence of primary periods from birth.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashaTimeline {
    periods: Vec<DashaPeriod>,
}

impl DashaTimeline {
    pub fn periods(&self) -> &[DashaPeriod] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DashaPeriod> {
        self.periods.iter()
    }

    /// Primary period running at `instant`, if the timeline covers it.
    pub fn period_at(&self, instant: DateTime<Utc>) -> Option<&DashaPeriod> {
        self.periods.iter().find(|period| period.contains(instant))
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.periods.first().map(|period| period.start)
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.periods.last().map(|period| period.end)
    }
}

impl<'a> IntoIterator for &'a DashaTimeline {
    type Item = &'a DashaPeriod;
    type IntoIter = std::slice::Iter<'a, DashaPeriod>;

    fn into_iter(self) -> Self::IntoIter {
        self.periods.iter()
    }
}

/// Convert Vimshottari years to a calendar offset, rounded to the millisecond.
pub fn years_to_duration(years: f64) -> Duration {
    Duration::milliseconds((years * VIMSHOTTARI_YEAR_DAYS * MILLIS_PER_DAY).round() as i64)
}

/// Compute the Vimshottari timeline from the Moon's sidereal longitude.
///
/// The birth period is partial; after it come `full_cycles` complete
/// cycles, starting with the body after the birth lord. The result is cut
/// to `max_periods` entries, and ends early if a period would run past the
/// last representable date.
pub fn compute_vimshottari_dasha(
    birth: DateTime<Utc>,
    moon_sidereal_longitude: f64,
    settings: &DashaSettings,
) -> DashaTimeline {
    let mut balance = dasha_balance(moon_sidereal_longitude);
    if years_to_duration(balance.remaining_years).num_milliseconds() == 0 {
        // Moon a rounding error short of the next nakshatra: nothing of the
        // birth period is left, so the cycle starts at the next lord.
        balance = balance.next_lord();
    }

    let sequence_len = VIMSHOTTARI_SEQUENCE.len();
    let total = 1 + settings.full_cycles as usize * sequence_len;
    let count = total.min(settings.max_periods);

    let mut periods: Vec<DashaPeriod> = Vec::with_capacity(count);
    let mut current_start = birth;

    for offset in 0..count {
        let seq_index = (balance.sequence_index + offset) % sequence_len;
        let (body, years) = VIMSHOTTARI_SEQUENCE[seq_index];

        let period = if offset == 0 {
            build_birth_period(body, birth, years, balance, settings.depth)
        } else {
            build_period(body, current_start, years, seq_index, settings.depth)
        };
        let Some(period) = period else {
            log::warn!(
                "Dasha timeline stops after {} periods: {} period from {} is out of date range",
                periods.len(),
                body,
                current_start
            );
            break;
        };
        current_start = period.end;
        periods.push(period);
    }

    DashaTimeline { periods }
}

fn build_period(
    body: Body,
    start: DateTime<Utc>,
    duration_years: f64,
    sequence_index: usize,
    depth: DashaLevel,
) -> Option<DashaPeriod> {
    let end = start.checked_add_signed(years_to_duration(duration_years))?;
    let children = match depth {
        DashaLevel::Primary => Vec::new(),
        DashaLevel::Sub => sub_periods(start, end, duration_years, sequence_index),
    };

    Some(DashaPeriod {
        ruling_body: body,
        start,
        end,
        duration_years,
        level: DashaLevel::Primary,
        children,
    })
}

/// The birth period is the tail of a full period that began before birth.
/// Its sub-periods are that full period's sub-periods, minus the ones that
/// ended before birth, with the straddling one clipped to start at birth.
fn build_birth_period(
    body: Body,
    birth: DateTime<Utc>,
    full_years: f64,
    balance: DashaBalance,
    depth: DashaLevel,
) -> Option<DashaPeriod> {
    let mut period = build_period(
        body,
        birth,
        balance.remaining_years,
        balance.sequence_index,
        DashaLevel::Primary,
    )?;
    if depth == DashaLevel::Primary {
        return Some(period);
    }

    let elapsed_years = full_years - balance.remaining_years;
    let virtual_start = birth.checked_sub_signed(years_to_duration(elapsed_years))?;
    let mut children = sub_periods(virtual_start, period.end, full_years, balance.sequence_index);
    children.retain(|child| child.end > birth);
    if let Some(first) = children.first_mut() {
        if first.start < birth {
            let clipped_ms = (birth - first.start).num_milliseconds() as f64;
            first.duration_years -= clipped_ms / MILLIS_PER_DAY / VIMSHOTTARI_YEAR_DAYS;
            first.start = birth;
        }
    }
    period.children = children;
    Some(period)
}

/// Nine sub-periods chained from `start`, beginning with the parent's own
/// body. The last one ends exactly at `end`.
fn sub_periods(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    parent_years: f64,
    sequence_index: usize,
) -> Vec<DashaPeriod> {
    let sequence_len = VIMSHOTTARI_SEQUENCE.len();
    let mut children = Vec::with_capacity(sequence_len);
    let mut child_start = start;

    for offset in 0..sequence_len {
        let child_index = (sequence_index + offset) % sequence_len;
        let (child_body, child_years) = VIMSHOTTARI_SEQUENCE[child_index];
        let duration_years = parent_years * child_years / VIMSHOTTARI_TOTAL_YEARS;
        let child_end = if offset + 1 == sequence_len {
            end
        } else {
            child_start
                .checked_add_signed(years_to_duration(duration_years))
                .unwrap_or(end)
        };

        children.push(DashaPeriod {
            ruling_body: child_body,
            start: child_start,
            end: child_end,
            duration_years,
            level: DashaLevel::Sub,
            children: Vec::new(),
        });
        child_start = child_end;
    }

    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const NAKSHATRA_HALF: f64 = crate::zodiac::NAKSHATRA_SEGMENT_SIZE / 2.0;

    fn birth() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_cycle_totals_120_years() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|(_, years)| years).sum();
        assert_eq!(total, VIMSHOTTARI_TOTAL_YEARS);
    }

    #[test]
    fn test_sequence_matches_nakshatra_lords() {
        for (index, (body, _)) in VIMSHOTTARI_SEQUENCE.iter().enumerate() {
            assert_eq!(crate::zodiac::nakshatra_lord(index as u8), *body);
        }
    }

    #[test]
    fn test_balance_at_mansion_start() {
        let balance = dasha_balance(0.0);
        assert_eq!(balance.ruling_body, Body::Ketu);
        assert_eq!(balance.fraction_elapsed, 0.0);
        assert_eq!(balance.remaining_years, 7.0);
    }

    #[test]
    fn test_default_horizon() {
        let timeline = compute_vimshottari_dasha(birth(), 0.0, &DashaSettings::default());
        assert_eq!(timeline.len(), 10);
        assert_eq!(timeline.periods()[0].ruling_body, Body::Ketu);
        assert_eq!(timeline.periods()[1].ruling_body, Body::Venus);
        assert_eq!(timeline.periods()[9].ruling_body, Body::Ketu);
    }

    #[test]
    fn test_untruncated_horizon() {
        let settings = DashaSettings {
            full_cycles: 2,
            max_periods: usize::MAX,
            depth: DashaLevel::Primary,
        };
        let timeline = compute_vimshottari_dasha(birth(), 100.0, &settings);
        assert_eq!(timeline.len(), 19);
    }

    #[test]
    fn test_period_at() {
        let timeline = compute_vimshottari_dasha(birth(), 0.0, &DashaSettings::default());
        let first = &timeline.periods()[0];
        assert_eq!(timeline.period_at(birth()).unwrap().ruling_body, Body::Ketu);
        assert_eq!(timeline.period_at(first.end).unwrap().ruling_body, Body::Venus);
        assert!(timeline.period_at(birth() - Duration::days(1)).is_none());
        assert!(timeline.period_at(timeline.end().unwrap()).is_none());
    }

    #[test]
    fn test_years_to_duration() {
        assert_eq!(years_to_duration(1.0), Duration::milliseconds(31_557_600_000));
        assert_eq!(years_to_duration(0.0), Duration::zero());
    }

    #[test]
    fn test_sub_periods_fill_parent() {
        let settings = DashaSettings {
            depth: DashaLevel::Sub,
            ..DashaSettings::default()
        };
        let timeline = compute_vimshottari_dasha(birth(), 0.0, &settings);
        let ketu = &timeline.periods()[0];
        assert_eq!(ketu.children.len(), 9);
        assert_eq!(ketu.children[0].ruling_body, Body::Ketu);
        assert_eq!(ketu.children[0].start, ketu.start);
        assert_eq!(ketu.children[8].end, ketu.end);
        let years: f64 = ketu.children.iter().map(|c| c.duration_years).sum();
        assert!((years - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_timeline_stops_at_end_of_date_range() {
        let last_day = Utc.from_utc_datetime(&chrono::NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap());
        let start = last_day - Duration::days(365 * 30);
        let settings = DashaSettings {
            depth: DashaLevel::Sub,
            ..DashaSettings::default()
        };
        // Ketu (7y) and Venus (20y) fit, Sun (6y) would not
        let timeline = compute_vimshottari_dasha(start, 0.0, &settings);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.periods()[1].ruling_body, Body::Venus);
        assert!(timeline.end().unwrap() <= last_day);
    }

    #[test]
    fn test_birth_period_before_start_of_date_range() {
        let first_day = Utc.from_utc_datetime(&chrono::NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap());
        let settings = DashaSettings {
            depth: DashaLevel::Sub,
            ..DashaSettings::default()
        };
        // Half of Ketu's period lies before the earliest date
        let moon = NAKSHATRA_HALF;
        assert!(compute_vimshottari_dasha(first_day, moon, &settings).is_empty());
        let primary = compute_vimshottari_dasha(first_day, moon, &DashaSettings::default());
        assert_eq!(primary.len(), 10);
    }

    #[test]
    fn test_vanishing_birth_period_moves_to_next_lord() {
        let boundary = 5.0 * crate::zodiac::NAKSHATRA_SEGMENT_SIZE;
        let moon = f64::from_bits(boundary.to_bits() - 1);
        assert_eq!(dasha_balance(moon).ruling_body, Body::Mars);

        let balance = dasha_balance(moon).next_lord();
        assert_eq!(balance.ruling_body, Body::Rahu);
        assert_eq!(balance.remaining_years, 18.0);
    }
}
