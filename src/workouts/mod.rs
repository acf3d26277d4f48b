//! Workout log records consumed by the condition classifier.

pub mod types;

pub use types::{WorkoutRecord, MAX_LOAD_LEVEL, MIN_LOAD_LEVEL};
