//! One-line summaries of a day's workouts.

use serde::{Deserialize, Serialize};

use crate::workouts::WorkoutRecord;

/// Coarse intensity derived from the mean load level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Mean load level below 3
    Light,
    /// Mean load level 3 to below 4
    Moderate,
    /// Mean load level 4 and above
    High,
}

impl Intensity {
    /// Bucket a mean load level.
    pub fn from_average_load(average_load_level: f64) -> Self {
        if average_load_level >= 4.0 {
            Intensity::High
        } else if average_load_level >= 3.0 {
            Intensity::Moderate
        } else {
            Intensity::Light
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Light => write!(f, "light"),
            Intensity::Moderate => write!(f, "moderate-intensity"),
            Intensity::High => write!(f, "high-intensity"),
        }
    }
}

/// Totals over a set of workouts, usually those of one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Number of sessions
    pub count: usize,
    /// Sum of session durations, each rounded to the nearest minute
    pub total_minutes: i64,
    /// Mean load level across sessions
    pub average_load_level: f64,
}

impl WorkoutSummary {
    /// Summarize workouts. `None` when there are none.
    pub fn from_workouts<'a, I>(workouts: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a WorkoutRecord>,
    {
        let mut count = 0usize;
        let mut total_minutes = 0i64;
        let mut total_level = 0u32;

        for w in workouts {
            let seconds = (w.end_time - w.start_time).num_seconds().max(0);
            total_minutes += (seconds as f64 / 60.0).round() as i64;
            total_level += u32::from(w.load_level);
            count += 1;
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            count,
            total_minutes,
            average_load_level: f64::from(total_level) / count as f64,
        })
    }

    /// Intensity bucket of the summary.
    pub fn intensity(&self) -> Intensity {
        Intensity::from_average_load(self.average_load_level)
    }

    /// Render as e.g. `"2 sessions, moderate-intensity training for 1h 30m"`.
    pub fn describe(&self) -> String {
        let hours = self.total_minutes / 60;
        let mins = self.total_minutes % 60;
        let time = match (hours, mins) {
            (0, m) => format!("{}m", m),
            (h, 0) => format!("{}h", h),
            (h, m) => format!("{}h {}m", h, m),
        };

        let sessions = if self.count > 1 {
            format!("{} sessions, ", self.count)
        } else {
            String::new()
        };

        format!("{}{} training for {}", sessions, self.intensity(), time)
    }
}
