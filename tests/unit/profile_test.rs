//! Unit tests for the profile factor and training guides.

use condition_coach::condition::guide::BEGINNER_GUIDE_MESSAGE;
use condition_coach::condition::{profile_factor, training_guide, ConditionError, TrainingGuide};
use condition_coach::{ActivityLevel, AthleteProfile};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_factor_without_profile() {
    assert_eq!(profile_factor(None), 1.0);
}

#[test]
fn test_factor_by_activity_level() {
    let cases = [
        (ActivityLevel::Beginner, 0.9),
        (ActivityLevel::Intermediate, 1.0),
        (ActivityLevel::Advanced, 1.1),
    ];
    for (level, expected) in cases {
        let profile = AthleteProfile::new(level, 30);
        assert_close(profile_factor(Some(&profile)), expected);
    }
}

#[test]
fn test_factor_age_adjustment() {
    let advanced = |age| AthleteProfile::new(ActivityLevel::Advanced, age);

    assert_close(profile_factor(Some(&advanced(39))), 1.1);
    assert_close(profile_factor(Some(&advanced(40))), 1.1 * 0.95);
    assert_close(profile_factor(Some(&advanced(49))), 1.1 * 0.95);
    assert_close(profile_factor(Some(&advanced(50))), 1.1 * 0.9);
    assert_close(profile_factor(Some(&advanced(80))), 1.1 * 0.9);
}

#[test]
fn test_guides_by_level() {
    let beginner = AthleteProfile::new(ActivityLevel::Beginner, 25);
    assert_eq!(
        training_guide(Some(&beginner)),
        Some(TrainingGuide::NoTarget {
            message: BEGINNER_GUIDE_MESSAGE.to_string()
        })
    );

    let intermediate = AthleteProfile::new(ActivityLevel::Intermediate, 25);
    match training_guide(Some(&intermediate)) {
        Some(TrainingGuide::PerTrainingDay {
            weekly_target,
            training_days_per_week,
            per_training_day_target,
        }) => {
            assert_eq!(weekly_target, 2000);
            assert_eq!(training_days_per_week, 2);
            assert_eq!(per_training_day_target, 1000.0);
        }
        other => panic!("unexpected guide {:?}", other),
    }

    let advanced = AthleteProfile::new(ActivityLevel::Advanced, 25);
    match training_guide(Some(&advanced)) {
        Some(TrainingGuide::PerTrainingDay {
            weekly_target,
            training_days_per_week,
            per_training_day_target,
        }) => {
            assert_eq!(weekly_target, 3000);
            assert_eq!(training_days_per_week, 7);
            assert_close(per_training_day_target, 3000.0 / 7.0);
        }
        other => panic!("unexpected guide {:?}", other),
    }
}

#[test]
fn test_guide_json_is_tagged() {
    let profile = AthleteProfile::new(ActivityLevel::Intermediate, 25);
    let json = serde_json::to_value(training_guide(Some(&profile))).unwrap();
    assert_eq!(json["kind"], "PER_TRAINING_DAY");
    assert_eq!(json["weekly_target"], 2000);
}

#[test]
fn test_profile_validation_error() {
    let err = AthleteProfile::new(ActivityLevel::Beginner, 200)
        .validate()
        .unwrap_err();
    assert!(matches!(err, ConditionError::InvalidProfile(_)));
    assert!(err.to_string().starts_with("Invalid profile:"));
}
