//! Workout record types.
//!
//! A [`WorkoutRecord`] is one logged training session as supplied by the data
//! layer. Records are read-only input to the condition classifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::condition::error::{ConditionError, ConditionResult};
use crate::condition::load::DayBoundary;

/// Lowest perceived-exertion level a session can be logged with.
pub const MIN_LOAD_LEVEL: u8 = 1;
/// Highest perceived-exertion level a session can be logged with.
pub const MAX_LOAD_LEVEL: u8 = 5;
/// Maximum length of a training name in characters.
pub const MAX_TRAINING_NAME_LEN: usize = 100;
/// Maximum length of a memo in characters.
pub const MAX_MEMO_LEN: usize = 500;

/// A single logged workout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Nominal calendar date of the session (only its day is significant)
    pub workout_date: DateTime<Utc>,
    /// Session start
    pub start_time: DateTime<Utc>,
    /// Session end
    pub end_time: DateTime<Utc>,
    /// Perceived exertion, 1 (light) to 5 (very hard)
    pub load_level: u8,
    /// Display name of the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_name: Option<String>,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl WorkoutRecord {
    /// Create a record without name or memo.
    pub fn new(
        workout_date: DateTime<Utc>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        load_level: u8,
    ) -> Self {
        Self {
            workout_date,
            start_time,
            end_time,
            load_level,
            training_name: None,
            memo: None,
        }
    }

    /// Attach a training name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.training_name = Some(name.into());
        self
    }

    /// Attach a memo.
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Whole minutes between start and end, truncated toward zero.
    ///
    /// Negative for malformed records whose end precedes their start.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Check the record the way the entry form does before it is stored.
    ///
    /// The classifier does not depend on this; it tolerates malformed records.
    pub fn validate(&self, now: DateTime<Utc>, boundary: DayBoundary) -> ConditionResult<()> {
        if !(MIN_LOAD_LEVEL..=MAX_LOAD_LEVEL).contains(&self.load_level) {
            return Err(ConditionError::InvalidWorkout(format!(
                "load level must be between {} and {}, got {}",
                MIN_LOAD_LEVEL, MAX_LOAD_LEVEL, self.load_level
            )));
        }

        if self.end_time <= self.start_time {
            return Err(ConditionError::InvalidWorkout(
                "end time must be after start time".to_string(),
            ));
        }

        if boundary.day_of(self.workout_date) > boundary.day_of(now) {
            return Err(ConditionError::InvalidWorkout(
                "workout date cannot be in the future".to_string(),
            ));
        }

        if self.start_time > now || self.end_time > now {
            return Err(ConditionError::InvalidWorkout(
                "session times cannot be in the future".to_string(),
            ));
        }

        if let Some(name) = &self.training_name {
            let len = name.chars().count();
            if len == 0 || len > MAX_TRAINING_NAME_LEN {
                return Err(ConditionError::InvalidWorkout(format!(
                    "training name must be 1 to {} characters",
                    MAX_TRAINING_NAME_LEN
                )));
            }
        }

        if let Some(memo) = &self.memo {
            if memo.chars().count() > MAX_MEMO_LEN {
                return Err(ConditionError::InvalidWorkout(format!(
                    "memo must be at most {} characters",
                    MAX_MEMO_LEN
                )));
            }
        }

        Ok(())
    }
}
