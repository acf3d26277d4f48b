//! Acute:chronic workload ratio (ACWR) condition classifier.
//!
//! Classifies a reference day from the ratio of its 7-day to 28-day mean
//! daily load:
//! - ratio in (0, 0.8): good day (undertrained relative to baseline, room to push)
//! - ratio above 1.3: caution day (load spike, recover)
//! - anything else: normal day
//!
//! Two or more consecutive good days ending at the reference day form a build
//! phase; two or more consecutive caution days form a rest phase. Inside a
//! phase the day itself is reported as normal so it is not shown twice.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::guide::{training_guide, TrainingGuide};
use super::load::{daily_loads, is_data_sufficient, DailyLoadMap, DayBoundary};
use super::rolling::{profile_factor, Workload};
use crate::athlete::AthleteProfile;
use crate::workouts::WorkoutRecord;

/// Ratios strictly below this (and above zero) are good days.
pub const GOOD_RATIO_CEILING: f64 = 0.8;
/// Ratios strictly above this are caution days.
pub const CAUTION_RATIO_FLOOR: f64 = 1.3;
/// Consecutive days needed before a run is reported as a phase.
pub const MIN_PHASE_STREAK: u32 = 2;
/// Reference days scanned when counting streaks, starting at today.
pub const STREAK_LOOKBACK_DAYS: u32 = 28;

/// Single-day classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    /// Acute load well below baseline
    Good,
    /// Acute load near baseline
    Normal,
    /// Acute load spiking above baseline
    Caution,
    /// Not enough history to classify
    InsufficientData,
}

/// Multi-day classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhaseType {
    /// Run of good days: a window for harder training
    Build,
    /// No run in progress
    Normal,
    /// Run of caution days: a window for recovery
    Rest,
    /// Not enough history to classify
    InsufficientData,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Good => write!(f, "Good"),
            DayType::Normal => write!(f, "Normal"),
            DayType::Caution => write!(f, "Caution"),
            DayType::InsufficientData => write!(f, "Insufficient data"),
        }
    }
}

impl std::fmt::Display for PhaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseType::Build => write!(f, "Build"),
            PhaseType::Normal => write!(f, "Normal"),
            PhaseType::Rest => write!(f, "Rest"),
            PhaseType::InsufficientData => write!(f, "Insufficient data"),
        }
    }
}

/// Classification of one reference day.
///
/// When `day_type` is [`DayType::InsufficientData`] only `guide` is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Day classification
    pub day_type: DayType,
    /// Phase classification
    pub phase_type: PhaseType,
    /// Acute (7-day) mean daily load, profile adjusted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acute: Option<f64>,
    /// Chronic (28-day) mean daily load, profile adjusted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chronic: Option<f64>,
    /// Acute:chronic ratio (0 when there is no chronic load)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ratio: Option<f64>,
    /// 1-based day count of the current phase, 0 outside a phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak_days: Option<u32>,
    /// Load target, only while history is insufficient or has no chronic load
    pub guide: Option<TrainingGuide>,
}

impl ClassificationResult {
    pub(crate) fn insufficient(guide: Option<TrainingGuide>) -> Self {
        Self {
            day_type: DayType::InsufficientData,
            phase_type: PhaseType::InsufficientData,
            acute: None,
            chronic: None,
            ratio: None,
            streak_days: None,
            guide,
        }
    }

    /// Whether the history was too short to classify.
    pub fn is_insufficient(&self) -> bool {
        self.day_type == DayType::InsufficientData
    }

    /// Whether the day belongs to a build or rest phase.
    pub fn in_phase(&self) -> bool {
        matches!(self.phase_type, PhaseType::Build | PhaseType::Rest)
    }

    /// Serialize for consumers that read fields by name.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn is_good_ratio(ratio: f64) -> bool {
    ratio > 0.0 && ratio < GOOD_RATIO_CEILING
}

fn is_caution_ratio(ratio: f64) -> bool {
    ratio > CAUTION_RATIO_FLOOR
}

/// Count leading ratios matching `predicate`. A zero ratio (no data) ends the run.
fn count_streak(ratios: &[f64], predicate: fn(f64) -> bool) -> u32 {
    ratios
        .iter()
        .take_while(|&&ratio| ratio != 0.0 && predicate(ratio))
        .count() as u32
}

fn day_type_for(ratio: f64) -> DayType {
    if is_good_ratio(ratio) {
        DayType::Good
    } else if is_caution_ratio(ratio) {
        DayType::Caution
    } else {
        DayType::Normal
    }
}

/// Condition classifier bound to a day-boundary convention.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionClassifier {
    day_boundary: DayBoundary,
}

impl ConditionClassifier {
    /// Classifier with UTC day boundaries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier whose days start at the given boundary.
    pub fn with_day_boundary(day_boundary: DayBoundary) -> Self {
        Self { day_boundary }
    }

    /// The day-boundary convention in use.
    pub fn day_boundary(&self) -> DayBoundary {
        self.day_boundary
    }

    /// Classify the day containing `today`, gated on data sufficiency.
    ///
    /// This is the canonical entry point: with fewer than 5 records or fewer
    /// than 7 distinct workout days it returns an insufficient-data result
    /// carrying the profile's training guide.
    pub fn judge_condition_safe(
        &self,
        workouts: &[WorkoutRecord],
        profile: Option<&AthleteProfile>,
        today: DateTime<Utc>,
    ) -> ClassificationResult {
        self.judge_condition_safe_on(workouts, profile, self.day_boundary.day_of(today))
    }

    /// [`Self::judge_condition_safe`] for the current day.
    pub fn judge_condition_safe_now(
        &self,
        workouts: &[WorkoutRecord],
        profile: Option<&AthleteProfile>,
    ) -> ClassificationResult {
        self.judge_condition_safe(workouts, profile, Utc::now())
    }

    /// [`Self::judge_condition_safe`] for an already-truncated calendar day.
    pub fn judge_condition_safe_on(
        &self,
        workouts: &[WorkoutRecord],
        profile: Option<&AthleteProfile>,
        today: NaiveDate,
    ) -> ClassificationResult {
        if !is_data_sufficient(workouts, self.day_boundary) {
            tracing::debug!(records = workouts.len(), "Insufficient workout history");
            return ClassificationResult::insufficient(training_guide(profile));
        }

        let loads = daily_loads(workouts, self.day_boundary);
        self.classify_day(&loads, profile, today)
    }

    /// Classify the day containing `today` without the sufficiency gate.
    ///
    /// Never reports insufficient data and carries no streak count or guide.
    pub fn judge_condition(
        &self,
        workouts: &[WorkoutRecord],
        profile: Option<&AthleteProfile>,
        today: DateTime<Utc>,
    ) -> ClassificationResult {
        let loads = daily_loads(workouts, self.day_boundary);
        let mut result = self.classify_day(&loads, profile, self.day_boundary.day_of(today));
        result.streak_days = None;
        result.guide = None;
        result
    }

    /// Classify one day against a prebuilt daily load map.
    pub(crate) fn classify_day(
        &self,
        loads: &DailyLoadMap,
        profile: Option<&AthleteProfile>,
        today: NaiveDate,
    ) -> ClassificationResult {
        let factor = profile_factor(profile);
        let workload = Workload::at(loads, today, factor);

        if workload.chronic == 0.0 {
            tracing::debug!(%today, "No chronic load in window");
            return ClassificationResult {
                day_type: DayType::Normal,
                phase_type: PhaseType::Normal,
                acute: Some(workload.acute),
                chronic: Some(workload.chronic),
                ratio: Some(0.0),
                streak_days: None,
                guide: training_guide(profile),
            };
        }

        let ratio = workload.ratio();
        let ratios = ratios_by_day(loads, factor, today, STREAK_LOOKBACK_DAYS);
        let good_streak = count_streak(&ratios, is_good_ratio);
        let caution_streak = count_streak(&ratios, is_caution_ratio);

        let phase_type = if is_good_ratio(ratio) && good_streak >= MIN_PHASE_STREAK {
            PhaseType::Build
        } else if is_caution_ratio(ratio) && caution_streak >= MIN_PHASE_STREAK {
            PhaseType::Rest
        } else {
            PhaseType::Normal
        };

        let day_type = match phase_type {
            PhaseType::Normal => day_type_for(ratio),
            _ => DayType::Normal,
        };

        let streak_days = match phase_type {
            PhaseType::Build => good_streak,
            PhaseType::Rest => caution_streak,
            _ => 0,
        };

        tracing::debug!(
            %today,
            acute = workload.acute,
            chronic = workload.chronic,
            ratio,
            good_streak,
            caution_streak,
            "Classified condition: {} day, {} phase",
            day_type,
            phase_type
        );

        ClassificationResult {
            day_type,
            phase_type,
            acute: Some(workload.acute),
            chronic: Some(workload.chronic),
            ratio: Some(ratio),
            streak_days: Some(streak_days),
            guide: None,
        }
    }
}

/// Ratios for `today` and the `days - 1` days before it, today first.
///
/// Days without chronic load record a ratio of 0.
fn ratios_by_day(loads: &DailyLoadMap, factor: f64, today: NaiveDate, days: u32) -> Vec<f64> {
    (0..days)
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .map(|reference| Workload::at(loads, reference, factor).ratio())
        .collect()
}

/// Gated classification of the UTC day containing `today`.
pub fn judge_condition_safe(
    workouts: &[WorkoutRecord],
    profile: Option<&AthleteProfile>,
    today: DateTime<Utc>,
) -> ClassificationResult {
    ConditionClassifier::new().judge_condition_safe(workouts, profile, today)
}

/// Gated classification of the current UTC day.
pub fn judge_condition_safe_now(
    workouts: &[WorkoutRecord],
    profile: Option<&AthleteProfile>,
) -> ClassificationResult {
    ConditionClassifier::new().judge_condition_safe_now(workouts, profile)
}

/// Ungated classification of the UTC day containing `today`.
pub fn judge_condition(
    workouts: &[WorkoutRecord],
    profile: Option<&AthleteProfile>,
    today: DateTime<Utc>,
) -> ClassificationResult {
    ConditionClassifier::new().judge_condition(workouts, profile, today)
}
