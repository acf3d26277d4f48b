//! Training condition analysis.
//!
//! Turns a workout history into a daily condition and a multi-day phase
//! using the acute:chronic workload ratio:
//! - Session and daily load aggregation
//! - Trailing 7-day (acute) and 28-day (chronic) averages over days with data
//! - Day classification (good / normal / caution) and build/rest phase detection
//! - Training guides while history is still too short
//! - Calendar ranges, phase segments and month stats

pub mod calendar;
pub mod classifier;
pub mod error;
pub mod guide;
pub mod load;
pub mod rolling;

// Re-exports for convenience
pub use calendar::{
    month_grid, phase_segments, CalendarFilter, DayClassification, DayMarker, MonthStats,
    PhaseSegment,
};
pub use classifier::{
    judge_condition, judge_condition_safe, judge_condition_safe_now, ClassificationResult,
    ConditionClassifier, DayType, PhaseType,
};
pub use error::{ConditionError, ConditionResult};
pub use guide::{training_guide, TrainingGuide};
pub use load::{daily_loads, is_data_sufficient, session_load, DailyLoadMap, DayBoundary};
pub use rolling::{profile_factor, rolling_average, Workload, ACUTE_WINDOW_DAYS, CHRONIC_WINDOW_DAYS};
