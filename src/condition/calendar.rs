//! Calendar views over daily classifications.
//!
//! Classifies every day of a range, groups consecutive build/rest days into
//! phase segments, and picks the marker each calendar cell shows.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::classifier::{ClassificationResult, ConditionClassifier, DayType, PhaseType};
use super::error::{ConditionError, ConditionResult};
use super::guide::training_guide;
use super::load::{daily_loads, is_data_sufficient, DayBoundary};
use crate::athlete::AthleteProfile;
use crate::workouts::WorkoutRecord;

/// Classification of one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayClassification {
    /// The calendar day
    pub day: NaiveDate,
    /// Its classification
    pub result: ClassificationResult,
}

/// A run of consecutive days in the same build or rest phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSegment {
    /// [`PhaseType::Build`] or [`PhaseType::Rest`]
    pub phase: PhaseType,
    /// First day of the run
    pub start: NaiveDate,
    /// Last day of the run, inclusive
    pub end: NaiveDate,
}

impl PhaseSegment {
    /// Whether `day` falls inside the segment.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days in the segment.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// What a calendar cell shows for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMarker {
    /// Isolated good day
    GoodDot,
    /// Isolated caution day
    CautionDot,
    /// Part of a build phase bar
    BuildBar,
    /// Part of a rest phase bar
    RestBar,
}

impl DayMarker {
    /// Marker for a classification, `None` when nothing is shown.
    pub fn for_result(result: &ClassificationResult) -> Option<Self> {
        if result.is_insufficient() {
            return None;
        }
        match (result.phase_type, result.day_type) {
            (PhaseType::Build, _) => Some(DayMarker::BuildBar),
            (PhaseType::Rest, _) => Some(DayMarker::RestBar),
            (_, DayType::Good) => Some(DayMarker::GoodDot),
            (_, DayType::Caution) => Some(DayMarker::CautionDot),
            _ => None,
        }
    }
}

/// Calendar highlight filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarFilter {
    /// Isolated good days
    Good,
    /// Isolated caution days
    Care,
    /// Build phase days
    Heavy,
    /// Rest phase days
    Rest,
}

impl CalendarFilter {
    /// Whether a day's classification passes the filter.
    pub fn matches(&self, result: &ClassificationResult) -> bool {
        match self {
            CalendarFilter::Good => result.day_type == DayType::Good && !result.in_phase(),
            CalendarFilter::Care => result.day_type == DayType::Caution && !result.in_phase(),
            CalendarFilter::Heavy => result.phase_type == PhaseType::Build,
            CalendarFilter::Rest => result.phase_type == PhaseType::Rest,
        }
    }
}

impl ConditionClassifier {
    /// Classify every day from `start` to `end` inclusive.
    ///
    /// Equivalent to calling [`ConditionClassifier::judge_condition_safe_on`]
    /// per day, but aggregates the history once.
    pub fn classify_range(
        &self,
        workouts: &[WorkoutRecord],
        profile: Option<&AthleteProfile>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ConditionResult<Vec<DayClassification>> {
        if start > end {
            return Err(ConditionError::InvalidRange(format!(
                "start {} is after end {}",
                start, end
            )));
        }

        let sufficient = is_data_sufficient(workouts, self.day_boundary());
        let loads = daily_loads(workouts, self.day_boundary());

        let days: Vec<DayClassification> = start
            .iter_days()
            .take_while(|day| *day <= end)
            .map(|day| {
                let result = if sufficient {
                    self.classify_day(&loads, profile, day)
                } else {
                    ClassificationResult::insufficient(training_guide(profile))
                };
                DayClassification { day, result }
            })
            .collect();

        tracing::debug!(%start, %end, days = days.len(), sufficient, "Classified calendar range");
        Ok(days)
    }
}

/// Group consecutive build/rest days into segments.
///
/// `days` must be in ascending day order. A switch from one phase straight
/// to the other closes the first segment and opens a new one.
pub fn phase_segments(days: &[DayClassification]) -> Vec<PhaseSegment> {
    let mut segments = Vec::new();
    let mut current: Option<PhaseSegment> = None;

    for entry in days {
        let phase = entry.result.phase_type;
        let in_phase = matches!(phase, PhaseType::Build | PhaseType::Rest);

        if in_phase {
            if let Some(segment) = current.as_mut().filter(|s| s.phase == phase) {
                segment.end = entry.day;
                continue;
            }
        }

        if let Some(segment) = current.take() {
            segments.push(segment);
        }
        if in_phase {
            current = Some(PhaseSegment {
                phase,
                start: entry.day,
                end: entry.day,
            });
        }
    }

    if let Some(segment) = current {
        segments.push(segment);
    }

    segments
}

/// Day range of a Sunday-first month grid.
///
/// Pads the month with the trailing days of the previous month and the
/// leading days of the next so the range covers whole weeks.
pub fn month_grid(year: i32, month: u32) -> ConditionResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ConditionError::InvalidRange(format!("no such month {}-{}", year, month)))?;
    let last = first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| ConditionError::InvalidRange(format!("month {}-{} out of range", year, month)))?;

    let lead = u64::from(first.weekday().num_days_from_sunday());
    let trail = u64::from(6 - last.weekday().num_days_from_sunday());

    let start = first
        .checked_sub_days(Days::new(lead))
        .ok_or_else(|| ConditionError::InvalidRange("grid start out of range".to_string()))?;
    let end = last
        .checked_add_days(Days::new(trail))
        .ok_or_else(|| ConditionError::InvalidRange("grid end out of range".to_string()))?;

    Ok((start, end))
}

/// Training summary for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthStats {
    /// Distinct days with at least one workout
    pub training_days: usize,
    /// Mean load level over the month's workouts
    pub average_load_level: Option<f64>,
}

impl MonthStats {
    /// Compute stats for workouts whose date falls in `year`-`month`.
    pub fn compute(
        workouts: &[WorkoutRecord],
        year: i32,
        month: u32,
        boundary: DayBoundary,
    ) -> Self {
        let in_month: Vec<(NaiveDate, u8)> = workouts
            .iter()
            .map(|w| (boundary.day_of(w.workout_date), w.load_level))
            .filter(|(day, _)| day.year() == year && day.month() == month)
            .collect();

        let mut days: Vec<NaiveDate> = in_month.iter().map(|(day, _)| *day).collect();
        days.sort_unstable();
        days.dedup();

        let average_load_level = if in_month.is_empty() {
            None
        } else {
            let total: u32 = in_month.iter().map(|(_, level)| u32::from(*level)).sum();
            Some(f64::from(total) / in_month.len() as f64)
        };

        Self {
            training_days: days.len(),
            average_load_level,
        }
    }
}
