//! Unit tests for the macro allocator.

use macroplan::plan::macros::{fat_allowance_grams, MacroPlan};
use macroplan::plan::types::Sex;

#[test]
fn test_fat_allowance_is_one_of_three_values() {
    for weight_kg in [30.0, 60.0, 119.9, 120.0, 200.0] {
        for sex in [Sex::Male, Sex::Female] {
            let fat = fat_allowance_grams(sex, weight_kg);
            assert!([50.0, 60.0, 70.0].contains(&fat));
        }
    }
}

#[test]
fn test_male_reference_allocation() {
    // Male, 60 kg: fat 60 g = 540 kcal, protein 1.8*60 = 108 g = 432 kcal
    let macros = MacroPlan::allocate(1500.0, Sex::Male, 60.0);

    assert_eq!(macros.fat_grams, 60.0);
    assert_eq!(macros.fat_kcal, 540.0);
    assert!((macros.protein_grams - 108.0).abs() < 1e-9);
    assert!((macros.protein_kcal - 432.0).abs() < 1e-9);
    // Residual: 1500 - 540 - 432 = 528 kcal = 132 g
    assert!((macros.carb_kcal - 528.0).abs() < 1e-9);
    assert!((macros.carb_grams - 132.0).abs() < 1e-9);
}

#[test]
fn test_heavy_male_gets_70_grams() {
    let macros = MacroPlan::allocate(3000.0, Sex::Male, 130.0);
    assert_eq!(macros.fat_grams, 70.0);
    assert_eq!(macros.fat_kcal, 630.0);
}

#[test]
fn test_female_fat_ignores_weight() {
    for weight_kg in [40.0, 120.0, 199.0] {
        let macros = MacroPlan::allocate(2000.0, Sex::Female, weight_kg);
        assert_eq!(macros.fat_grams, 50.0);
    }
}

#[test]
fn test_exceeded_budget_clamps_and_flags() {
    // Female, 140 kg: fat 450 + protein 1008 = 1458 kcal against a 1200 target
    let macros = MacroPlan::allocate(1200.0, Sex::Female, 140.0);

    assert!(macros.budget_exceeded);
    assert_eq!(macros.carb_kcal, 0.0);
    assert_eq!(macros.carb_grams, 0.0);
}

#[test]
fn test_carb_grams_never_negative() {
    for target in [0.0, 500.0, 1000.0, 2500.0, 4000.0] {
        for weight_kg in [30.0, 90.0, 160.0, 200.0] {
            for sex in [Sex::Male, Sex::Female] {
                let macros = MacroPlan::allocate(target, sex, weight_kg);
                assert!(macros.carb_grams >= 0.0);
                assert!(macros.carb_kcal >= 0.0);
            }
        }
    }
}
