//! Athlete profile and account role.

use serde::{Deserialize, Serialize};

use crate::condition::error::{ConditionError, ConditionResult};

/// Self-reported training experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    /// Little or no structured training
    Beginner,
    /// Regular training a couple of times per week
    Intermediate,
    /// Daily or near-daily training
    Advanced,
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityLevel::Beginner => write!(f, "Beginner"),
            ActivityLevel::Intermediate => write!(f, "Intermediate"),
            ActivityLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

/// Who is looking at the athlete's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// The athlete themself
    #[default]
    Athlete,
    /// A coach linked to the athlete
    Trainer,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Athlete => write!(f, "Athlete"),
            UserRole::Trainer => write!(f, "Trainer"),
        }
    }
}

/// Youngest accepted athlete age.
pub const MIN_AGE: u16 = 5;
/// Oldest accepted athlete age.
pub const MAX_AGE: u16 = 120;

/// Profile data that adjusts load magnitudes and selects a training guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Training experience
    pub activity_level: ActivityLevel,
    /// Age in years
    pub age: u16,
}

impl AthleteProfile {
    /// Create a profile.
    pub fn new(activity_level: ActivityLevel, age: u16) -> Self {
        Self {
            activity_level,
            age,
        }
    }

    /// Check the profile the way onboarding does.
    pub fn validate(&self) -> ConditionResult<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ConditionError::InvalidProfile(format!(
                "age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, self.age
            )));
        }
        Ok(())
    }
}
