//! Integration tests for plan request loading and saving.

use macroplan::config::{load_request, save_request, ConfigError, PlanRequest};
use macroplan::plan::types::{Sex, StrengthLevel, TrainingTiming};
use macroplan::{DayKind, UserProfile};

#[test]
fn test_missing_request_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let request = load_request(&dir.path().join("absent.toml")).unwrap();

    // Built-in defaults: female, 28 y, 165 cm, 60 kg, rest day
    assert_eq!(request.profile.sex, Sex::Female);
    assert_eq!(request.profile.age, 28);
    assert_eq!(request.profile.weight_kg, 60.0);
    assert!(request.activity.strength.is_none());
    assert_eq!(request.timing, TrainingTiming::RestDay);
}

#[test]
fn test_save_and_reload_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("macroplan.toml");

    let request = PlanRequest {
        timing: TrainingTiming::AfterLunch,
        day: DayKind::Rest,
        profile: UserProfile {
            name: Some("Kim".to_string()),
            sex: Sex::Male,
            age: 45,
            height_cm: 172.0,
            weight_kg: 88.0,
            bmi_override: Some(29.7),
        },
        activity: macroplan::plan::types::ActivityInputs {
            strength: Some(StrengthLevel::Advanced),
            cardio_kcal_per_day: 250.0,
        },
        ..Default::default()
    };

    save_request(&request, &path).unwrap();
    let loaded = load_request(&path).unwrap();

    assert_eq!(loaded.profile.name.as_deref(), Some("Kim"));
    assert_eq!(loaded.profile.bmi_override, Some(29.7));
    assert_eq!(loaded.activity.strength, Some(StrengthLevel::Advanced));
    assert_eq!(loaded.timing, TrainingTiming::AfterLunch);
    assert_eq!(loaded.day, DayKind::Rest);
}

#[test]
fn test_load_rejects_out_of_range_profile() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("macroplan.toml");
    std::fs::write(&path, "[profile]\nage = 12\n").unwrap();

    let result = load_request(&path);
    assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
}

#[test]
fn test_load_rejects_unparsable_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("macroplan.toml");
    std::fs::write(&path, "not toml at all [[[").unwrap();

    let result = load_request(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_request_parses_kebab_case_timing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("macroplan.toml");
    std::fs::write(
        &path,
        "timing = \"after-breakfast-early\"\nday = \"training\"\n\n[activity]\nstrength = \"beginner\"\n",
    )
    .unwrap();

    let request = load_request(&path).unwrap();
    assert_eq!(request.timing, TrainingTiming::AfterBreakfastEarly);
    assert_eq!(request.activity.strength, Some(StrengthLevel::Beginner));
}
