//! Trailing-window load averages and the athlete profile factor.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::load::DailyLoadMap;
use crate::athlete::{ActivityLevel, AthleteProfile};

/// Acute window length in days, inclusive of the reference day.
pub const ACUTE_WINDOW_DAYS: u32 = 7;
/// Chronic window length in days, inclusive of the reference day.
pub const CHRONIC_WINDOW_DAYS: u32 = 28;

/// Mean daily load over the `window_days` days ending at `reference`.
///
/// Only days present in `daily_loads` contribute to either the sum or the
/// count, so the result is the mean over days with data. An empty window
/// averages to zero.
pub fn rolling_average(daily_loads: &DailyLoadMap, window_days: u32, reference: NaiveDate) -> f64 {
    let (sum, count) = (0..window_days)
        .filter_map(|offset| reference.checked_sub_days(Days::new(u64::from(offset))))
        .filter_map(|day| daily_loads.get(&day))
        .fold((0.0, 0u32), |(sum, count), load| (sum + load, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Multiplier applied to both acute and chronic averages.
///
/// Scales by activity level (0.9 / 1.0 / 1.1) and then by age (0.9 at 50+,
/// 0.95 from 40 to 49). Without a profile the factor is 1.0.
pub fn profile_factor(profile: Option<&AthleteProfile>) -> f64 {
    let Some(profile) = profile else {
        return 1.0;
    };

    let mut factor = 1.0;

    factor *= match profile.activity_level {
        ActivityLevel::Beginner => 0.9,
        ActivityLevel::Intermediate => 1.0,
        ActivityLevel::Advanced => 1.1,
    };

    if profile.age >= 50 {
        factor *= 0.9;
    } else if profile.age >= 40 {
        factor *= 0.95;
    }

    factor
}

/// Acute and chronic averages anchored at one reference day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// Acute average scaled by the profile factor
    pub acute: f64,
    /// Chronic average scaled by the profile factor
    pub chronic: f64,
}

impl Workload {
    /// Evaluate both windows ending at `reference`.
    pub fn at(daily_loads: &DailyLoadMap, reference: NaiveDate, factor: f64) -> Self {
        Self {
            acute: rolling_average(daily_loads, ACUTE_WINDOW_DAYS, reference) * factor,
            chronic: rolling_average(daily_loads, CHRONIC_WINDOW_DAYS, reference) * factor,
        }
    }

    /// Acute:chronic ratio, or 0.0 when there is no chronic load.
    pub fn ratio(&self) -> f64 {
        if self.chronic == 0.0 {
            0.0
        } else {
            self.acute / self.chronic
        }
    }
}
