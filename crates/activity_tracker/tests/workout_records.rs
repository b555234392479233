use std::time::Duration;

use activity_tracker::spentenergy::{running_spent_calories, walking_spent_calories};
use activity_tracker::{PersonalProfile, StepCountIssue, TrackerError, WorkoutRecord};

fn profile() -> PersonalProfile {
    PersonalProfile::new("Гоша", 85.0, 1.85)
}

const THREE_HOURS: Duration = Duration::from_secs(3 * 3600);

#[test]
fn walking_label_dispatches_to_walking_formula() {
    let r = WorkoutRecord::parse("3456,Ходьба,3h00m", profile()).unwrap();
    assert_eq!(r.kind, "Ходьба");
    assert_eq!(r.duration, THREE_HOURS);
    let m = r.metrics().unwrap();
    assert_eq!(
        m.calories_kcal,
        walking_spent_calories(3456, 85.0, 1.85, THREE_HOURS).unwrap()
    );
}

#[test]
fn running_label_dispatches_to_running_formula() {
    let r = WorkoutRecord::parse("3456,Бег,3h00m", profile()).unwrap();
    let m = r.metrics().unwrap();
    assert_eq!(
        m.calories_kcal,
        running_spent_calories(3456, 85.0, 1.85, THREE_HOURS).unwrap()
    );
}

#[test]
fn unknown_label_fails_at_computation() {
    let r = WorkoutRecord::parse("3456,Плавание,3h00m", profile())
        .expect("label is not checked at parse time");
    assert_eq!(
        r.summarize(),
        Err(TrackerError::UnknownActivityKind("Плавание".into()))
    );
}

#[test]
fn english_label_is_an_unknown_kind() {
    let r = WorkoutRecord::parse("3456,Walking,3h00m", profile()).unwrap();
    assert!(matches!(
        r.summarize(),
        Err(TrackerError::UnknownActivityKind(label)) if label == "Walking"
    ));
}

#[test]
fn infinite_weight_is_rejected() {
    let heavy = PersonalProfile::new("x", f64::INFINITY, 1.85);
    let r = WorkoutRecord::parse("3456,Бег,3h00m", heavy).unwrap();
    assert!(matches!(
        r.summarize(),
        Err(TrackerError::InvalidProfile { field: "weight", .. })
    ));
}

#[test]
fn numeric_label_is_an_unknown_kind() {
    let r = WorkoutRecord::parse("678,-5,3h00m", profile()).unwrap();
    assert!(matches!(
        r.metrics(),
        Err(TrackerError::UnknownActivityKind(label)) if label == "-5"
    ));
}

#[test]
fn summary_uses_workout_template() {
    let r = WorkoutRecord::parse("3456,Бег,3h00m", profile()).unwrap();
    let m = r.metrics().unwrap();
    let expected = format!(
        "Activity type: Бег\nDuration: 3.00 h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
        m.distance_km, m.speed_kmh, m.calories_kcal
    );
    assert_eq!(r.summarize().unwrap(), expected);
}

#[test]
fn rejects_bad_fields() {
    assert_eq!(
        WorkoutRecord::parse("0,Ходьба,3h00m", profile()),
        Err(TrackerError::InvalidStepCount(StepCountIssue::NonPositive(0)))
    );
    assert!(matches!(
        WorkoutRecord::parse("3456,Ходьба", profile()),
        Err(TrackerError::MalformedRecord { expected: 3, found: 2 })
    ));
    assert!(matches!(
        WorkoutRecord::parse("", profile()),
        Err(TrackerError::MalformedRecord { expected: 3, found: 0 })
    ));
    assert!(matches!(
        WorkoutRecord::parse("3456,Бег,soon", profile()),
        Err(TrackerError::InvalidDuration(_))
    ));
}
