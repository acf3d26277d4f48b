//! Weekly load targets by activity level.

use serde::{Deserialize, Serialize};

use crate::athlete::{ActivityLevel, AthleteProfile};

/// Message shown to beginners instead of a numeric target.
pub const BEGINNER_GUIDE_MESSAGE: &str =
    "Start by building more movement into your everyday routine.";

/// Load target shown while there is not yet enough history to classify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingGuide {
    /// No numeric target, just encouragement.
    NoTarget {
        /// Guidance text
        message: String,
    },
    /// A weekly load target split evenly across training days.
    PerTrainingDay {
        /// Total session load to aim for per week
        weekly_target: u32,
        /// Planned training days per week
        training_days_per_week: u32,
        /// Session load to aim for on each training day
        per_training_day_target: f64,
    },
}

impl TrainingGuide {
    fn per_training_day(weekly_target: u32, training_days_per_week: u32) -> Self {
        TrainingGuide::PerTrainingDay {
            weekly_target,
            training_days_per_week,
            per_training_day_target: f64::from(weekly_target) / f64::from(training_days_per_week),
        }
    }
}

/// Select the guide for a profile. `None` without a profile.
pub fn training_guide(profile: Option<&AthleteProfile>) -> Option<TrainingGuide> {
    let profile = profile?;

    let guide = match profile.activity_level {
        ActivityLevel::Beginner => TrainingGuide::NoTarget {
            message: BEGINNER_GUIDE_MESSAGE.to_string(),
        },
        ActivityLevel::Intermediate => TrainingGuide::per_training_day(2000, 2),
        ActivityLevel::Advanced => TrainingGuide::per_training_day(3000, 7),
    };

    Some(guide)
}
