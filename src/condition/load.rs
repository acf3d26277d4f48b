//! Session and daily load aggregation.
//!
//! Session load is `duration_minutes * load_level`. Daily load is the sum of
//! session loads keyed by the calendar day of each record's `workout_date`.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};

use crate::workouts::WorkoutRecord;

/// Minimum number of records before a classification is attempted.
pub const MIN_WORKOUT_RECORDS: usize = 5;
/// Minimum number of distinct workout days before a classification is attempted.
pub const MIN_DISTINCT_DAYS: usize = 7;

/// Daily load keyed by calendar day. Days without sessions have no entry.
pub type DailyLoadMap = HashMap<NaiveDate, f64>;

/// The UTC offset at which calendar days start.
///
/// Workout dates and the reference "today" are both truncated through the
/// same boundary so classification never straddles two conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBoundary {
    offset: FixedOffset,
}

impl DayBoundary {
    /// Days start at midnight UTC.
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    /// Days start at midnight in a fixed offset from UTC.
    pub fn from_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Days start at midnight `minutes` east of UTC. `None` when out of range.
    pub fn from_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::from_offset)
    }

    /// The configured offset.
    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Calendar day containing `instant`.
    pub fn day_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.offset).date_naive()
    }
}

impl Default for DayBoundary {
    fn default() -> Self {
        Self::utc()
    }
}

/// Training load of one session.
///
/// A record whose end precedes its start contributes zero.
pub fn session_load(workout: &WorkoutRecord) -> f64 {
    let minutes = workout.duration_minutes();
    if minutes < 0 {
        tracing::debug!(minutes, "Clamping negative session duration to zero load");
        return 0.0;
    }
    (minutes * i64::from(workout.load_level)) as f64
}

/// Sum session loads per calendar day of `workout_date`.
pub fn daily_loads(workouts: &[WorkoutRecord], boundary: DayBoundary) -> DailyLoadMap {
    let mut map = DailyLoadMap::new();
    for workout in workouts {
        let day = boundary.day_of(workout.workout_date);
        *map.entry(day).or_insert(0.0) += session_load(workout);
    }
    map
}

/// Number of distinct calendar days that have at least one record.
pub fn distinct_days(workouts: &[WorkoutRecord], boundary: DayBoundary) -> usize {
    workouts
        .iter()
        .map(|w| boundary.day_of(w.workout_date))
        .collect::<HashSet<_>>()
        .len()
}

/// Whether the history is large enough to classify.
///
/// Requires at least [`MIN_WORKOUT_RECORDS`] records spread over at least
/// [`MIN_DISTINCT_DAYS`] calendar days.
pub fn is_data_sufficient(workouts: &[WorkoutRecord], boundary: DayBoundary) -> bool {
    if workouts.len() < MIN_WORKOUT_RECORDS {
        return false;
    }
    distinct_days(workouts, boundary) >= MIN_DISTINCT_DAYS
}
