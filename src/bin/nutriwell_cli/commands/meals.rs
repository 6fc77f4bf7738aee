// ABOUTME: Meal commands for nutriwell-cli
// ABOUTME: Weekly plan generation, quick-add food listing, and food logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use nutriwell::errors::{AppError, AppResult};
use nutriwell::meals::{common_foods, find_food, generate_weekly_plan, meal_suggestions, MealSlot};
use nutriwell::models::MealType;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

type Result<T> = AppResult<T>;

/// Generate and print a weekly plan
pub fn plan(seed: Option<u64>, as_json: bool) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let plan = generate_weekly_plan(&mut rng);
    info!(seeded = seed.is_some(), "Generated weekly meal plan");

    if as_json {
        return print_json(&plan);
    }

    for day in &plan.days {
        let totals = day.totals();
        println!(
            "{} ({:.0} kcal, {:.0} g protein)",
            day.day, totals.calories_kcal, totals.protein_g
        );
        for planned in &day.meals {
            println!(
                "  {:<10} {} ({:.0} kcal)",
                planned.slot.label(),
                planned.meal.name,
                planned.meal.calories_kcal
            );
        }
    }
    Ok(())
}

/// Print the quick-add foods and the meal ideas per slot
pub fn list_foods() {
    println!("Quick-add foods:");
    for food in common_foods() {
        println!(
            "  {:<22} {:>4.0} kcal  P {:>4.1} g  C {:>4.1} g  F {:>4.1} g  fiber {:>3.1} g",
            food.name, food.calories_kcal, food.protein_g, food.carbs_g, food.fat_g, food.fiber_g
        );
    }

    for slot in MealSlot::ALL {
        println!();
        println!("{slot} ideas:");
        for idea in meal_suggestions(slot) {
            println!(
                "  {:<28} {:>4.0} kcal  rated {:.1}",
                idea.name, idea.calories_kcal, idea.rating
            );
        }
    }
}

/// Log servings of a catalog food and print the meal record as JSON
pub fn log_food(name: &str, quantity: f64, meal_type: &str, at: Option<String>) -> Result<()> {
    let food = find_food(name).ok_or_else(|| AppError::not_found(format!("Food '{name}'")))?;
    let logged_at = at.unwrap_or_else(|| Local::now().format("%H:%M").to_string());
    let meal = food.log(quantity, MealType::from_str_lossy(meal_type), logged_at)?;
    info!(food = food.name, quantity, "Logged food");
    print_json(&meal)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render JSON: {e}")))?;
    println!("{rendered}");
    Ok(())
}
