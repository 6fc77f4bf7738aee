// ABOUTME: Weekly meal plan generator drawing from the canned suggestions per slot
// ABOUTME: Randomness is injected so plans are reproducible under a seeded RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::catalog::{meal_suggestions, MealSlot, MealSuggestion};
use chrono::Weekday;
use nutriwell_core::models::NutritionTotals;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Days of a plan, Monday first
pub const PLAN_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// One slot of a planned day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlannedMeal {
    /// Slot the meal fills
    pub slot: MealSlot,
    /// Chosen suggestion
    pub meal: MealSuggestion,
}

/// Meals planned for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    /// Day of the week
    pub day: Weekday,
    /// One entry per slot, in day order
    pub meals: Vec<PlannedMeal>,
}

impl DayPlan {
    /// Nutrient totals of the day (fiber and water are not tracked by suggestions)
    #[must_use]
    pub fn totals(&self) -> NutritionTotals {
        self.meals
            .iter()
            .fold(NutritionTotals::default(), |acc, planned| NutritionTotals {
                calories_kcal: acc.calories_kcal + planned.meal.calories_kcal,
                protein_g: acc.protein_g + planned.meal.protein_g,
                carbs_g: acc.carbs_g + planned.meal.carbs_g,
                fat_g: acc.fat_g + planned.meal.fat_g,
                ..acc
            })
    }
}

/// A week of planned meals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlan {
    /// Monday through Sunday
    pub days: Vec<DayPlan>,
}

impl WeeklyPlan {
    /// Plan for a given day
    #[must_use]
    pub fn day(&self, day: Weekday) -> Option<&DayPlan> {
        self.days.iter().find(|plan| plan.day == day)
    }

    /// Nutrient totals for a given day
    #[must_use]
    pub fn day_totals(&self, day: Weekday) -> Option<NutritionTotals> {
        self.day(day).map(DayPlan::totals)
    }
}

/// Build a week by picking one suggestion at random for every day and slot
pub fn generate_weekly_plan<R: Rng + ?Sized>(rng: &mut R) -> WeeklyPlan {
    let days = PLAN_DAYS
        .iter()
        .map(|&day| DayPlan {
            day,
            meals: MealSlot::ALL
                .iter()
                .filter_map(|&slot| {
                    meal_suggestions(slot)
                        .choose(rng)
                        .map(|&meal| PlannedMeal { slot, meal })
                })
                .collect(),
        })
        .collect();

    debug!("generated weekly meal plan");
    WeeklyPlan { days }
}
