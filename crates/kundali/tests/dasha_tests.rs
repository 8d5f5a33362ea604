use approx::assert_abs_diff_eq;
use chrono::{DateTime, Duration, TimeZone, Utc};
use kundali::dasha::{
    compute_vimshottari_dasha, dasha_balance, years_to_duration, VIMSHOTTARI_SEQUENCE,
    VIMSHOTTARI_TOTAL_YEARS,
};
use kundali::zodiac::NAKSHATRA_SEGMENT_SIZE;
use kundali::{Body, DashaLevel, DashaPeriod, DashaSettings};
use proptest::prelude::*;

fn birth() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1985, 7, 23, 6, 15, 0).unwrap()
}

fn assert_chained(periods: &[DashaPeriod]) {
    for pair in periods.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
}

#[test]
fn test_mansion_start_gives_full_first_period() {
    let timeline = compute_vimshottari_dasha(birth(), 0.0, &DashaSettings::default());
    let first = &timeline.periods()[0];
    // Nakshatra 0 maps to sequence entry 0 % 9
    assert_eq!(first.ruling_body, VIMSHOTTARI_SEQUENCE[0].0);
    assert_eq!(first.duration_years, 7.0);
    assert_eq!(first.end - first.start, years_to_duration(7.0));
}

#[test]
fn test_mansion_midpoint_gives_half_first_period() {
    for mansion in 0..27usize {
        let moon = (mansion as f64 + 0.5) * NAKSHATRA_SEGMENT_SIZE;
        let timeline = compute_vimshottari_dasha(birth(), moon, &DashaSettings::default());
        let first = &timeline.periods()[0];
        let (body, years) = VIMSHOTTARI_SEQUENCE[mansion % 9];
        assert_eq!(first.ruling_body, body);
        assert_abs_diff_eq!(first.duration_years, years / 2.0, epsilon = 1e-9);
        let span = first.end - first.start;
        assert!((span - years_to_duration(years / 2.0)).num_milliseconds().abs() <= 1);
    }
}

#[test]
fn test_full_periods_follow_cycle() {
    let settings = DashaSettings {
        full_cycles: 2,
        max_periods: 19,
        depth: DashaLevel::Primary,
    };
    // Moon in Rohini (index 3, lord Moon)
    let timeline = compute_vimshottari_dasha(birth(), 45.0, &settings);
    assert_eq!(timeline.len(), 19);
    assert_eq!(timeline.periods()[0].ruling_body, Body::Moon);

    let full = &timeline.periods()[1..];
    let first_cycle: f64 = full[..9].iter().map(|p| p.duration_years).sum();
    let second_cycle: f64 = full[9..].iter().map(|p| p.duration_years).sum();
    assert_eq!(first_cycle, VIMSHOTTARI_TOTAL_YEARS);
    assert_eq!(second_cycle, VIMSHOTTARI_TOTAL_YEARS);
    assert_eq!(full[0].ruling_body, Body::Mars);
    assert_eq!(full[8].ruling_body, Body::Moon);
}

#[test]
fn test_truncation() {
    let settings = DashaSettings {
        max_periods: 3,
        ..DashaSettings::default()
    };
    let timeline = compute_vimshottari_dasha(birth(), 200.0, &settings);
    assert_eq!(timeline.len(), 3);

    let none = DashaSettings {
        full_cycles: 0,
        ..DashaSettings::default()
    };
    assert_eq!(compute_vimshottari_dasha(birth(), 200.0, &none).len(), 1);
}

#[test]
fn test_period_at_across_timeline() {
    let timeline = compute_vimshottari_dasha(birth(), 123.4, &DashaSettings::default());
    for period in &timeline {
        assert_eq!(timeline.period_at(period.start), Some(period));
        assert_eq!(timeline.period_at(period.end - Duration::milliseconds(1)), Some(period));
    }
    assert_eq!(timeline.start(), Some(birth()));
}

#[test]
fn test_moon_just_below_mansion_boundary() {
    // One ulp short of Ardra leaves a sub-millisecond Mars balance
    let moon = f64::from_bits((5.0 * NAKSHATRA_SEGMENT_SIZE).to_bits() - 1);
    let settings = DashaSettings {
        depth: DashaLevel::Sub,
        ..DashaSettings::default()
    };
    let timeline = compute_vimshottari_dasha(birth(), moon, &settings);
    let first = &timeline.periods()[0];
    assert_eq!(first.ruling_body, Body::Rahu);
    assert_eq!(first.duration_years, 18.0);
    assert_eq!(first.start, birth());
    assert_eq!(first.children.len(), 9);
    assert_eq!(first.children[0].start, first.start);
    assert_eq!(first.children[8].end, first.end);
    assert_eq!(timeline.len(), 10);
    assert_chained(timeline.periods());
}

proptest! {
    #[test]
    fn prop_timeline_is_gapless(
        moon in prop_oneof![
            0.0f64..360.0,
            (0u32..27, 0u64..4).prop_map(|(mansion, ulps)| {
                f64::from_bits((mansion as f64 * NAKSHATRA_SEGMENT_SIZE).to_bits().saturating_sub(ulps))
            }),
        ],
        offset_days in -20_000i64..20_000,
    ) {
        let start = birth() + Duration::days(offset_days);
        let settings = DashaSettings {
            full_cycles: 2,
            max_periods: usize::MAX,
            depth: DashaLevel::Sub,
        };
        let timeline = compute_vimshottari_dasha(start, moon, &settings);
        prop_assert_eq!(timeline.len(), 19);
        prop_assert_eq!(timeline.periods()[0].start, start);
        assert_chained(timeline.periods());
        for period in &timeline {
            prop_assert!(period.start < period.end || period.duration_years < 1e-6);
            prop_assert_eq!(period.children.first().unwrap().start, period.start);
            prop_assert_eq!(period.children.last().unwrap().end, period.end);
            assert_chained(&period.children);
        }
    }

    #[test]
    fn prop_birth_period_balance(moon in 0.0f64..360.0) {
        let balance = dasha_balance(moon);
        let (body, years) = VIMSHOTTARI_SEQUENCE[balance.sequence_index];
        prop_assert_eq!(balance.ruling_body, body);
        prop_assert!((0.0..1.0).contains(&balance.fraction_elapsed));
        prop_assert!(balance.remaining_years > 0.0 && balance.remaining_years <= years);
    }
}
