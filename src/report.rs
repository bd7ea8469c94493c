//! Plain-text rendering of a computed meal plan.

use macroplan::config::PlanRequest;
use macroplan::plan::macros::percent_of_target;
use macroplan::MealPlan;

/// Print the full plan report to stdout.
pub fn print_report(request: &PlanRequest, plan: &MealPlan) {
    let profile = &request.profile;

    println!("=== Calorie & Meal Plan (Fat Loss) ===");
    if let Some(name) = &profile.name {
        println!("Plan for {name}");
    }
    println!();

    println!("BMR (Mifflin-St Jeor):       {:.0} kcal", plan.energy.bmr);
    println!(
        "No-exercise total (BMR/0.7): {:.0} kcal",
        plan.energy.no_activity_total
    );
    println!("BMI:                         {:.1}", profile.bmi());
    println!();

    if request.activity.has_strength_training() {
        println!(
            "Training day balance: {:.0} kcal -> target {:.0} kcal",
            plan.balances.training, plan.targets.training_day_kcal
        );
        println!(
            "Rest day balance:     {:.0} kcal -> target {:.0} kcal",
            plan.balances.rest, plan.targets.rest_day_kcal
        );
    } else {
        println!(
            "Balance calories: {:.0} kcal -> target {:.0} kcal",
            plan.balances.rest, plan.targets.rest_day_kcal
        );
    }
    println!(
        "Selected: {} -> daily target {:.0} kcal",
        plan.day, plan.daily_target_kcal
    );
    println!();

    let macros = &plan.macros;
    println!("Macronutrient targets");
    println!(
        "  Fat (fixed):      {:.0} g -> {:.0} kcal",
        macros.fat_grams, macros.fat_kcal
    );
    println!(
        "  Protein:          {:.1} g -> {:.0} kcal (1.8 g/kg, range 1.6-2.0)",
        macros.protein_grams, macros.protein_kcal
    );
    println!(
        "  Carbs (residual): {:.1} g -> {:.0} kcal",
        macros.carb_grams, macros.carb_kcal
    );
    println!(
        "  Split: protein {:.0}% | carbs {:.0}% | fat {:.0}%",
        percent_of_target(macros.protein_kcal, plan.daily_target_kcal),
        percent_of_target(macros.carb_kcal, plan.daily_target_kcal),
        percent_of_target(macros.fat_kcal, plan.daily_target_kcal),
    );
    println!();

    println!("Meal allocation ({})", plan.timing);
    for slot in &plan.meals {
        println!(
            "  {:<10} carbs {:>3.0}% {:>5.0} kcal {:>6.1} g | protein {:>3.0}% {:>5.0} kcal {:>5.1} g",
            slot.meal.display_name(),
            slot.carb_fraction * 100.0,
            slot.carb_kcal,
            slot.carb_grams,
            slot.protein_fraction * 100.0,
            slot.protein_kcal,
            slot.protein_grams,
        );
    }
    println!();

    println!("Food suggestions");
    for sugg in &plan.suggestions {
        println!("  {}", sugg.meal.display_name());
        for item in &sugg.carbs {
            println!("    carb: {} - {} g - {} kcal", item.food, item.grams, item.kcal);
        }
        for item in &sugg.proteins {
            println!(
                "    protein: {} - {} g - {} kcal",
                item.food, item.grams, item.kcal
            );
        }
        println!("    {}", sugg.fat_note);
    }
    println!();

    println!("Vegetables: eat freely, aim for ~500 g/day. Fruits: ~300 g/day (peeled weight).");

    for warning in &plan.warnings {
        println!("WARNING: {warning}");
    }
}
