// ABOUTME: Food catalog, meal suggestions, weekly planner, and JSON file loading
// ABOUTME: Supplies the meal list and profile the metrics engine consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Quick-add foods and canned meal suggestions
pub mod catalog;
/// Weekly meal plan generation
pub mod planner;

pub use catalog::{common_foods, find_food, meal_suggestions, FoodItem, MealSlot, MealSuggestion};
pub use planner::{generate_weekly_plan, DayPlan, PlannedMeal, WeeklyPlan};

use crate::errors::{AppError, AppResult};
use nutriwell_core::models::{Meal, UserProfile};
use std::fs;
use std::path::Path;
use tracing::debug;

fn read_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("failed to read {}: {e}", path.display())).with_source(e)
    })
}

/// Load and validate a JSON array of meals from a file
///
/// # Errors
///
/// Returns a storage error if the file cannot be read and an
/// invalid-input error if any meal is malformed
pub fn load_meals_file(path: &Path) -> AppResult<Vec<Meal>> {
    let meals = Meal::list_from_json(&read_file(path)?)?;
    debug!(path = %path.display(), count = meals.len(), "loaded meals");
    Ok(meals)
}

/// Load and validate a user profile from a JSON file
///
/// # Errors
///
/// Returns a storage error if the file cannot be read and an
/// invalid-input error if the profile is malformed
pub fn load_profile_file(path: &Path) -> AppResult<UserProfile> {
    let profile = UserProfile::from_json(&read_file(path)?)?;
    debug!(path = %path.display(), "loaded profile");
    Ok(profile)
}
