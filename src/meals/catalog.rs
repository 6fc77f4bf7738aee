// ABOUTME: Quick-add food catalog and canned meal suggestions per meal slot
// ABOUTME: Logging a catalog food scales its per-serving nutrients by quantity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use nutriwell_core::models::{Meal, MealType};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// A quick-add food with per-serving nutrients
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodItem {
    /// Display name
    pub name: &'static str,
    /// Energy per serving (kcal)
    pub calories_kcal: f64,
    /// Protein per serving (g)
    pub protein_g: f64,
    /// Carbohydrates per serving (g)
    pub carbs_g: f64,
    /// Fat per serving (g)
    pub fat_g: f64,
    /// Fiber per serving (g)
    pub fiber_g: f64,
}

const fn food(
    name: &'static str,
    calories_kcal: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    fiber_g: f64,
) -> FoodItem {
    FoodItem {
        name,
        calories_kcal,
        protein_g,
        carbs_g,
        fat_g,
        fiber_g,
    }
}

static COMMON_FOODS: [FoodItem; 8] = [
    food("Oatmeal", 150.0, 6.0, 27.0, 3.0, 4.0),
    food("Chicken Breast", 165.0, 31.0, 0.0, 3.6, 0.0),
    food("Salmon", 208.0, 25.0, 0.0, 12.0, 0.0),
    food("Brown Rice", 216.0, 5.0, 45.0, 1.8, 3.5),
    food("Broccoli", 55.0, 3.7, 11.0, 0.6, 5.2),
    food("Banana", 105.0, 1.3, 27.0, 0.4, 3.1),
    food("Greek Yogurt", 130.0, 23.0, 9.0, 0.5, 0.0),
    food("Almonds", 164.0, 6.0, 6.0, 14.0, 3.5),
];

/// Foods offered for one-tap logging
#[must_use]
pub fn common_foods() -> &'static [FoodItem] {
    &COMMON_FOODS
}

/// Look up a catalog food by name, ignoring case
#[must_use]
pub fn find_food(name: &str) -> Option<&'static FoodItem> {
    let wanted = name.trim();
    COMMON_FOODS
        .iter()
        .find(|food| food.name.eq_ignore_ascii_case(wanted))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl FoodItem {
    /// Turn `quantity` servings of this food into a logged meal
    ///
    /// Calories are rounded to whole kcal and macros to 0.1 g.
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` unless `quantity` is a positive finite number
    pub fn log(
        &self,
        quantity: f64,
        meal_type: MealType,
        logged_at: impl Into<String>,
    ) -> AppResult<Meal> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "quantity must be positive (got {quantity})"
            )));
        }

        Ok(Meal {
            id: Uuid::new_v4(),
            name: self.name.to_owned(),
            meal_type,
            calories_kcal: (self.calories_kcal * quantity).round(),
            protein_g: round_to_tenth(self.protein_g * quantity),
            carbs_g: round_to_tenth(self.carbs_g * quantity),
            fat_g: round_to_tenth(self.fat_g * quantity),
            fiber_g: round_to_tenth(self.fiber_g * quantity),
            logged_at: logged_at.into(),
        })
    }
}

/// Meal slot of the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Between meals
    Snacks,
}

impl MealSlot {
    /// Slots in the order of a day
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Display name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snacks => "Snacks",
        }
    }

    /// Meal type a suggestion from this slot is logged as
    #[must_use]
    pub const fn meal_type(&self) -> MealType {
        match self {
            Self::Breakfast => MealType::Breakfast,
            Self::Lunch => MealType::Lunch,
            Self::Dinner => MealType::Dinner,
            Self::Snacks => MealType::Snack,
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A canned meal idea with its nutrition and user rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MealSuggestion {
    /// Display name
    pub name: &'static str,
    /// Energy (kcal)
    pub calories_kcal: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Average rating out of 5
    pub rating: f64,
}

const fn idea(
    name: &'static str,
    calories_kcal: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    rating: f64,
) -> MealSuggestion {
    MealSuggestion {
        name,
        calories_kcal,
        protein_g,
        carbs_g,
        fat_g,
        rating,
    }
}

static BREAKFAST_IDEAS: [MealSuggestion; 3] = [
    idea("Oatmeal with Berries & Nuts", 320.0, 12.0, 45.0, 8.0, 4.8),
    idea("Greek Yogurt Parfait", 280.0, 18.0, 35.0, 6.0, 4.6),
    idea("Avocado Toast with Eggs", 380.0, 16.0, 28.0, 22.0, 4.7),
];

static LUNCH_IDEAS: [MealSuggestion; 3] = [
    idea("Grilled Chicken Salad", 450.0, 35.0, 15.0, 22.0, 4.9),
    idea("Quinoa Buddha Bowl", 420.0, 18.0, 55.0, 12.0, 4.5),
    idea("Turkey & Avocado Wrap", 380.0, 22.0, 32.0, 18.0, 4.4),
];

static DINNER_IDEAS: [MealSuggestion; 3] = [
    idea("Salmon with Roasted Vegetables", 520.0, 38.0, 25.0, 28.0, 4.8),
    idea("Lean Beef Stir-Fry", 480.0, 32.0, 35.0, 20.0, 4.6),
    idea("Vegetarian Pasta Primavera", 420.0, 14.0, 65.0, 12.0, 4.3),
];

static SNACK_IDEAS: [MealSuggestion; 3] = [
    idea("Apple with Almond Butter", 180.0, 4.0, 25.0, 8.0, 4.7),
    idea("Protein Smoothie", 220.0, 20.0, 18.0, 6.0, 4.8),
    idea("Hummus with Carrots", 150.0, 6.0, 18.0, 6.0, 4.5),
];

/// Canned suggestions for a slot
#[must_use]
pub fn meal_suggestions(slot: MealSlot) -> &'static [MealSuggestion] {
    match slot {
        MealSlot::Breakfast => &BREAKFAST_IDEAS,
        MealSlot::Lunch => &LUNCH_IDEAS,
        MealSlot::Dinner => &DINNER_IDEAS,
        MealSlot::Snacks => &SNACK_IDEAS,
    }
}
