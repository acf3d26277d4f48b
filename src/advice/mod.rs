//! Coaching advice for a calendar day.
//!
//! Combines the day's condition classification, whether the day is past,
//! today or ahead, what was trained that day, and who is reading, into a
//! short piece of advice. Phrasing rotates by day of year so a given day
//! always reads the same.

mod messages;
pub mod summary;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::athlete::UserRole;
use crate::condition::{ClassificationResult, DayBoundary, DayType, PhaseType};
use crate::workouts::WorkoutRecord;
use messages::MessageSet;

pub use summary::{Intensity, WorkoutSummary};

/// Mean load level at or above which training during recovery counts as overworking.
pub const OVERWORK_LOAD_LEVEL: f64 = 3.0;

/// Where the day sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timing {
    /// Before today
    Past,
    /// Today itself
    Today,
    /// After today
    Future,
}

impl Timing {
    /// Compare `day` against `today`.
    pub fn of(day: NaiveDate, today: NaiveDate) -> Self {
        match day.cmp(&today) {
            std::cmp::Ordering::Less => Timing::Past,
            std::cmp::Ordering::Equal => Timing::Today,
            std::cmp::Ordering::Greater => Timing::Future,
        }
    }
}

/// Which family of advice a classification falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionBucket {
    /// Good day or build phase
    Good,
    /// Caution day or rest phase
    Caution,
    /// Everything else, including insufficient data
    Normal,
}

impl ConditionBucket {
    /// Bucket a classification.
    pub fn of(result: &ClassificationResult) -> Self {
        if result.day_type == DayType::Good || result.phase_type == PhaseType::Build {
            ConditionBucket::Good
        } else if result.day_type == DayType::Caution || result.phase_type == PhaseType::Rest {
            ConditionBucket::Caution
        } else {
            ConditionBucket::Normal
        }
    }
}

/// Everything the advice depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceContext<'a> {
    /// Classification of `day`
    pub result: &'a ClassificationResult,
    /// The day being advised on
    pub day: NaiveDate,
    /// The reader's current day
    pub today: NaiveDate,
    /// Summary of the workouts logged on `day`
    pub summary: Option<WorkoutSummary>,
    /// Who is reading
    pub role: UserRole,
}

impl<'a> AdviceContext<'a> {
    /// Build a context from the workouts logged on `day`.
    pub fn new(
        result: &'a ClassificationResult,
        day: NaiveDate,
        today: NaiveDate,
        day_workouts: &[WorkoutRecord],
        role: UserRole,
    ) -> Self {
        Self {
            result,
            day,
            today,
            summary: WorkoutSummary::from_workouts(day_workouts),
            role,
        }
    }

    /// Build a context, picking `day`'s workouts out of a full history.
    pub fn for_day(
        result: &'a ClassificationResult,
        day: NaiveDate,
        today: NaiveDate,
        workouts: &[WorkoutRecord],
        boundary: DayBoundary,
        role: UserRole,
    ) -> Self {
        let summary = WorkoutSummary::from_workouts(
            workouts
                .iter()
                .filter(|w| boundary.day_of(w.workout_date) == day),
        );
        Self {
            result,
            day,
            today,
            summary,
            role,
        }
    }

    fn is_overworking(&self) -> bool {
        ConditionBucket::of(self.result) == ConditionBucket::Caution
            && self
                .summary
                .is_some_and(|s| s.average_load_level >= OVERWORK_LOAD_LEVEL)
    }
}

fn select_messages(ctx: &AdviceContext<'_>) -> &'static MessageSet {
    let trained = ctx.summary.is_some();
    let overworking = ctx.is_overworking();

    match (ConditionBucket::of(ctx.result), Timing::of(ctx.day, ctx.today)) {
        (ConditionBucket::Good, Timing::Past) if trained => &messages::GOOD_PAST_TRAINED,
        (ConditionBucket::Good, Timing::Past) => &messages::GOOD_PAST_UNUSED,
        (ConditionBucket::Good, Timing::Future) => &messages::GOOD_FUTURE,
        (ConditionBucket::Good, Timing::Today) if trained => &messages::GOOD_TODAY_TRAINED,
        (ConditionBucket::Good, Timing::Today) => &messages::GOOD_TODAY_OPEN,

        (ConditionBucket::Caution, Timing::Past) if overworking => {
            &messages::CAUTION_PAST_OVERWORKED
        }
        (ConditionBucket::Caution, Timing::Past) if trained => &messages::CAUTION_PAST_TRAINED,
        (ConditionBucket::Caution, Timing::Past) => &messages::CAUTION_PAST_RESTED,
        (ConditionBucket::Caution, Timing::Future) => &messages::CAUTION_FUTURE,
        (ConditionBucket::Caution, Timing::Today) if overworking => {
            &messages::CAUTION_TODAY_OVERWORKED
        }
        (ConditionBucket::Caution, Timing::Today) if trained => &messages::CAUTION_TODAY_TRAINED,
        (ConditionBucket::Caution, Timing::Today) => &messages::CAUTION_TODAY_OPEN,

        (ConditionBucket::Normal, Timing::Past) if trained => &messages::NORMAL_PAST_TRAINED,
        (ConditionBucket::Normal, Timing::Past) => &messages::NORMAL_PAST_RESTED,
        (ConditionBucket::Normal, Timing::Future) => &messages::NORMAL_FUTURE,
        (ConditionBucket::Normal, Timing::Today) if trained => &messages::NORMAL_TODAY_TRAINED,
        (ConditionBucket::Normal, Timing::Today) => &messages::NORMAL_TODAY_OPEN,
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Advice text for a day.
pub fn training_advice(ctx: &AdviceContext<'_>) -> String {
    let template = select_messages(ctx).pick(ctx.role, ctx.day.ordinal() as usize);
    let summary = ctx.summary.map(|s| s.describe()).unwrap_or_default();
    capitalize_first(&template.replace("{summary}", &summary))
}

/// Headline for the condition card, `None` for unremarkable days.
///
/// Phases are counted from day 1 on the second consecutive day.
pub fn condition_label(result: &ClassificationResult) -> Option<String> {
    let phase_day = result.streak_days.unwrap_or(0).saturating_sub(1);
    match (result.phase_type, result.day_type) {
        (PhaseType::Build, _) => Some(format!("Build phase, day {}", phase_day)),
        (PhaseType::Rest, _) => Some(format!("Rest phase, day {}", phase_day)),
        (_, DayType::Good) => Some("Good day".to_string()),
        (_, DayType::Caution) => Some("Recovery day".to_string()),
        _ => None,
    }
}
