//! Unit tests for meal apportionment and post-workout resolution.

use macroplan::plan::macros::MacroPlan;
use macroplan::plan::meals::{apportion, Meal};
use macroplan::plan::types::{Sex, TrainingTiming};

fn fractions(timing: TrainingTiming) -> [f64; 4] {
    let macros = MacroPlan::allocate(2000.0, Sex::Female, 60.0);
    let slots = apportion(2000.0, &macros, timing);
    [
        slots[0].carb_fraction,
        slots[1].carb_fraction,
        slots[2].carb_fraction,
        slots[3].carb_fraction,
    ]
}

fn assert_close(actual: [f64; 4], expected: [f64; 4]) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-12, "expected {expected:?}, got {actual:?}");
    }
}

#[test]
fn test_train_before_dinner_feeds_dinner() {
    // The 40% share lands on dinner, not lunch, and dinner's base is skipped
    assert_close(
        fractions(TrainingTiming::BeforeDinner),
        [0.20, 0.00, 0.40, 0.10],
    );
}

#[test]
fn test_train_after_dinner_feeds_dinner() {
    assert_close(
        fractions(TrainingTiming::AfterDinner),
        [0.20, 0.00, 0.40, 0.10],
    );
}

#[test]
fn test_late_night_feeds_dinner() {
    assert_close(
        fractions(TrainingTiming::LateNight),
        [0.20, 0.00, 0.40, 0.10],
    );
}

#[test]
fn test_lunch_timings_feed_lunch() {
    for timing in [TrainingTiming::BeforeLunch, TrainingTiming::AfterLunch] {
        assert_close(fractions(timing), [0.20, 0.40, 0.30, 0.10]);
    }
}

#[test]
fn test_breakfast_timings_stack_on_breakfast() {
    for timing in [
        TrainingTiming::AfterBreakfastEarly,
        TrainingTiming::AfterBreakfastLate,
    ] {
        assert_close(fractions(timing), [0.60, 0.00, 0.30, 0.10]);
    }
}

#[test]
fn test_rest_day_defaults_to_lunch() {
    assert_close(fractions(TrainingTiming::RestDay), [0.20, 0.40, 0.30, 0.10]);
}

#[test]
fn test_protein_fractions_are_base_table_for_all_timings() {
    let macros = MacroPlan::allocate(2000.0, Sex::Female, 60.0);

    for timing in [
        TrainingTiming::AfterBreakfastEarly,
        TrainingTiming::BeforeDinner,
        TrainingTiming::RestDay,
    ] {
        let slots = apportion(2000.0, &macros, timing);
        let protein: Vec<f64> = slots.iter().map(|s| s.protein_fraction).collect();
        assert_eq!(protein, vec![0.20, 0.30, 0.30, 0.20]);

        let sum: f64 = protein.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_meal_order_and_names() {
    let macros = MacroPlan::allocate(1600.0, Sex::Female, 55.0);
    let slots = apportion(1600.0, &macros, TrainingTiming::RestDay);

    let meals: Vec<Meal> = slots.iter().map(|s| s.meal).collect();
    assert_eq!(
        meals,
        vec![Meal::Breakfast, Meal::Lunch, Meal::Dinner, Meal::Snack]
    );
    assert_eq!(slots[0].meal.display_name(), "Breakfast");
    assert_eq!(slots[3].meal.display_name(), "Snack");
}

#[test]
fn test_per_meal_math_follows_fractions() {
    let macros = MacroPlan::allocate(2000.0, Sex::Male, 70.0);
    let slots = apportion(2000.0, &macros, TrainingTiming::BeforeLunch);

    for slot in &slots {
        assert!((slot.carb_kcal - 2000.0 * slot.carb_fraction).abs() < 1e-9);
        assert!((slot.carb_grams - slot.carb_kcal / 4.0).abs() < 1e-9);
        assert!((slot.protein_kcal - macros.protein_kcal * slot.protein_fraction).abs() < 1e-9);
        assert!((slot.protein_grams - macros.protein_grams * slot.protein_fraction).abs() < 1e-9);
    }
}
