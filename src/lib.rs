//! Condition Coach - training condition analysis for workout logs
//!
//! Classifies an athlete's daily training condition from their logged
//! workouts using the acute:chronic workload ratio, detects multi-day build
//! and rest phases, and turns the result into calendar markers and coaching
//! advice for athletes and their trainers.

pub mod advice;
pub mod athlete;
pub mod condition;
pub mod config;
pub mod workouts;

// Re-export commonly used types
pub use athlete::{ActivityLevel, AthleteProfile, UserRole};
pub use condition::{
    judge_condition, judge_condition_safe, ClassificationResult, ConditionClassifier, DayBoundary,
    DayType, PhaseType, TrainingGuide,
};
pub use config::AppConfig;
pub use workouts::WorkoutRecord;
