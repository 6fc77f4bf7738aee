// ABOUTME: Command modules for nutriwell-cli plus shared intake loading
// ABOUTME: Metrics, chat, meal, and consultation subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod chat;
pub mod consult;
pub mod meals;
pub mod metrics;

use nutriwell::errors::{AppError, AppResult};
use nutriwell::meals::{load_meals_file, load_profile_file};
use nutriwell::models::{NutritionTotals, UserProfile};
use std::path::Path;
use tracing::info;

/// Load the profile, sum the day's meals, and attach water intake
///
/// Returns the profile, the totals, and the number of meals read.
pub fn load_intake(
    profile_path: &Path,
    meals_path: Option<&Path>,
    water_l: f64,
) -> AppResult<(UserProfile, NutritionTotals, usize)> {
    if !water_l.is_finite() || water_l < 0.0 {
        return Err(AppError::invalid_input(format!(
            "water intake must be a non-negative number of liters (got {water_l})"
        )));
    }

    let profile = load_profile_file(profile_path)?;
    let meals = match meals_path {
        Some(path) => load_meals_file(path)?,
        None => Vec::new(),
    };
    info!(
        profile = %profile_path.display(),
        meal_count = meals.len(),
        "Loaded intake"
    );

    let totals = NutritionTotals::from_meals(&meals).with_water(water_l);
    Ok((profile, totals, meals.len()))
}
