//! Integration tests for calendar ranges and coaching advice.
//!
//! History: a light week (June 24-30, 60 min at level 1) after three heavy
//! weeks (June 3-22, 120 min at level 5), viewed on June 30.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use condition_coach::advice::{condition_label, training_advice, AdviceContext};
use condition_coach::condition::{
    month_grid, phase_segments, CalendarFilter, ConditionError, DayMarker, MonthStats,
};
use condition_coach::{ConditionClassifier, DayBoundary, DayType, PhaseType, UserRole, WorkoutRecord};

fn ymd(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, m, d).unwrap()
}

fn session(m: u32, d: u32, minutes: i64, load_level: u8) -> WorkoutRecord {
    let date: DateTime<Utc> = Utc.with_ymd_and_hms(2025, m, d, 0, 0, 0).unwrap();
    let start = date + Duration::hours(6);
    WorkoutRecord::new(date, start, start + Duration::minutes(minutes), load_level)
}

fn light_after_heavy() -> Vec<WorkoutRecord> {
    let mut workouts: Vec<_> = (24..=30).map(|d| session(6, d, 60, 1)).collect();
    workouts.extend((3..=22).map(|d| session(6, d, 120, 5)));
    workouts
}

#[test]
fn test_classify_last_week() {
    let workouts = light_after_heavy();
    let days = ConditionClassifier::new()
        .classify_range(&workouts, None, ymd(6, 24), ymd(6, 30))
        .unwrap();

    assert_eq!(days.len(), 7);
    assert_eq!(days[0].day, ymd(6, 24));
    assert_eq!(days[6].day, ymd(6, 30));

    // June 24 sits at 0.89, June 25 starts the run on its own.
    assert_eq!(days[0].result.day_type, DayType::Normal);
    assert_eq!(days[0].result.phase_type, PhaseType::Normal);
    assert_eq!(days[1].result.day_type, DayType::Good);
    assert_eq!(days[1].result.phase_type, PhaseType::Normal);
    for entry in &days[2..] {
        assert_eq!(entry.result.phase_type, PhaseType::Build, "{}", entry.day);
        assert_eq!(entry.result.day_type, DayType::Normal);
    }

    let markers: Vec<_> = days.iter().map(|d| DayMarker::for_result(&d.result)).collect();
    assert_eq!(markers[0], None);
    assert_eq!(markers[1], Some(DayMarker::GoodDot));
    assert!(markers[2..].iter().all(|m| *m == Some(DayMarker::BuildBar)));
}

#[test]
fn test_range_matches_single_day_classification() {
    let workouts = light_after_heavy();
    let classifier = ConditionClassifier::new();
    let days = classifier
        .classify_range(&workouts, None, ymd(6, 20), ymd(7, 2))
        .unwrap();

    for entry in &days {
        let single = classifier.judge_condition_safe_on(&workouts, None, entry.day);
        assert_eq!(entry.result, single, "{}", entry.day);
    }
}

#[test]
fn test_phase_segments_and_filters() {
    let workouts = light_after_heavy();
    let days = ConditionClassifier::new()
        .classify_range(&workouts, None, ymd(6, 24), ymd(6, 30))
        .unwrap();

    let segments = phase_segments(&days);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].phase, PhaseType::Build);
    assert_eq!(segments[0].start, ymd(6, 26));
    assert_eq!(segments[0].end, ymd(6, 30));
    assert_eq!(segments[0].len_days(), 5);
    assert!(segments[0].contains(ymd(6, 28)));

    let heavy = days.iter().filter(|d| CalendarFilter::Heavy.matches(&d.result)).count();
    let good: Vec<_> = days
        .iter()
        .filter(|d| CalendarFilter::Good.matches(&d.result))
        .map(|d| d.day)
        .collect();
    assert_eq!(heavy, 5);
    assert_eq!(good, vec![ymd(6, 25)]);
    assert!(!days.iter().any(|d| CalendarFilter::Rest.matches(&d.result)));
}

#[test]
fn test_insufficient_range_has_no_markers() {
    let workouts: Vec<_> = (1..=3).map(|d| session(6, d, 60, 3)).collect();
    let days = ConditionClassifier::new()
        .classify_range(&workouts, None, ymd(6, 1), ymd(6, 7))
        .unwrap();

    assert!(days.iter().all(|d| d.result.is_insufficient()));
    assert!(days.iter().all(|d| DayMarker::for_result(&d.result).is_none()));
    assert!(phase_segments(&days).is_empty());
}

#[test]
fn test_reversed_range_is_an_error() {
    let err = ConditionClassifier::new()
        .classify_range(&[], None, ymd(6, 30), ymd(6, 1))
        .unwrap_err();
    assert!(matches!(err, ConditionError::InvalidRange(_)));
}

#[test]
fn test_month_view() {
    let workouts = light_after_heavy();

    // June 2025 starts on a Sunday and ends on a Monday.
    let (start, end) = month_grid(2025, 6).unwrap();
    assert_eq!(start, ymd(6, 1));
    assert_eq!(end, ymd(7, 5));

    let days = ConditionClassifier::new()
        .classify_range(&workouts, None, start, end)
        .unwrap();
    assert_eq!(days.len(), 35);

    let stats = MonthStats::compute(&workouts, 2025, 6, DayBoundary::utc());
    assert_eq!(stats.training_days, 27);
    let average = stats.average_load_level.unwrap();
    assert!((average - 107.0 / 27.0).abs() < 1e-12);

    let july = MonthStats::compute(&workouts, 2025, 7, DayBoundary::utc());
    assert_eq!(july.training_days, 0);
    assert_eq!(july.average_load_level, None);
}

#[test]
fn test_advice_for_build_phase() {
    let workouts = light_after_heavy();
    let classifier = ConditionClassifier::new();
    let today = ymd(6, 30);
    let result = classifier.judge_condition_safe_on(&workouts, None, today);

    assert_eq!(condition_label(&result).as_deref(), Some("Build phase, day 5"));

    let ctx = AdviceContext::for_day(
        &result,
        today,
        today,
        &workouts,
        classifier.day_boundary(),
        UserRole::Athlete,
    );
    assert_eq!(training_advice(&ctx), "Light training for 1h. Excellent work!");

    let ctx = AdviceContext::for_day(
        &result,
        today,
        today,
        &workouts,
        classifier.day_boundary(),
        UserRole::Trainer,
    );
    assert_eq!(
        training_advice(&ctx),
        "Light training for 1h. You're making the most of their form!"
    );
}

#[test]
fn test_advice_for_past_good_day() {
    let workouts = light_after_heavy();
    let classifier = ConditionClassifier::new();
    let day = ymd(6, 25);
    let result = classifier.judge_condition_safe_on(&workouts, None, day);

    assert_eq!(condition_label(&result).as_deref(), Some("Good day"));

    // June 25 is day 176 of the year.
    let ctx = AdviceContext::for_day(
        &result,
        day,
        ymd(6, 30),
        &workouts,
        classifier.day_boundary(),
        UserRole::Athlete,
    );
    assert_eq!(training_advice(&ctx), "You were in form: light training for 1h.");
}
