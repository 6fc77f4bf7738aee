// ABOUTME: Meal logging models and the aggregated nutrition totals snapshot
// ABOUTME: Meal, MealType, and NutritionTotals definitions with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::MetricsError;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified meal
    Meal,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" | "snacks" => Self::Snack,
            _ => Self::Meal,
        }
    }

    /// Wire name of the meal type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Meal => "meal",
        }
    }
}

/// A logged meal
///
/// Owned by the persistence collaborator; read-only to the engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Opaque identifier
    pub id: Uuid,
    /// Meal or food name
    pub name: String,
    /// Meal type
    pub meal_type: MealType,
    /// Energy in kcal
    pub calories_kcal: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Fiber in grams
    #[serde(default)]
    pub fiber_g: f64,
    /// Time of day the meal was logged, as displayed ("08:30")
    pub logged_at: String,
}

/// Wire shape accepted by [`Meal::from_json`] before validation
#[derive(Debug, Deserialize)]
struct RawMeal {
    id: Option<Uuid>,
    name: Option<String>,
    meal_type: Option<String>,
    calories_kcal: Option<f64>,
    protein_g: Option<f64>,
    carbs_g: Option<f64>,
    fat_g: Option<f64>,
    fiber_g: Option<f64>,
    #[serde(default)]
    logged_at: String,
}

fn require(value: Option<f64>, field: &str) -> Result<f64, MetricsError> {
    value.ok_or_else(|| MetricsError::malformed_meal(format!("missing field '{field}'")))
}

impl Meal {
    /// Check every nutrient value is a finite, non-negative number
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::MalformedMeal` naming the first offending field
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.name.trim().is_empty() {
            return Err(MetricsError::malformed_meal("name must not be empty"));
        }
        let fields = [
            ("calories_kcal", self.calories_kcal),
            ("protein_g", self.protein_g),
            ("carbs_g", self.carbs_g),
            ("fat_g", self.fat_g),
            ("fiber_g", self.fiber_g),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(MetricsError::malformed_meal(format!(
                    "{field} must be a non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a single meal from JSON
    ///
    /// A missing `id` is assigned a fresh one; a missing `fiber_g` defaults
    /// to zero. Every other numeric field is required.
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::MalformedMeal` when parsing or validation fails
    pub fn from_json(json: &str) -> Result<Self, MetricsError> {
        let raw: RawMeal =
            serde_json::from_str(json).map_err(|e| MetricsError::malformed_meal(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Parse and validate a JSON array of meals
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::MalformedMeal` for the first meal that fails
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, MetricsError> {
        let raws: Vec<RawMeal> =
            serde_json::from_str(json).map_err(|e| MetricsError::malformed_meal(e.to_string()))?;
        raws.into_iter().map(Self::from_raw).collect()
    }

    fn from_raw(raw: RawMeal) -> Result<Self, MetricsError> {
        let meal = Self {
            id: raw.id.unwrap_or_else(Uuid::new_v4),
            name: raw
                .name
                .ok_or_else(|| MetricsError::malformed_meal("missing field 'name'"))?,
            meal_type: raw
                .meal_type
                .as_deref()
                .map_or(MealType::Meal, MealType::from_str_lossy),
            calories_kcal: require(raw.calories_kcal, "calories_kcal")?,
            protein_g: require(raw.protein_g, "protein_g")?,
            carbs_g: require(raw.carbs_g, "carbs_g")?,
            fat_g: require(raw.fat_g, "fat_g")?,
            fiber_g: raw.fiber_g.unwrap_or(0.0),
            logged_at: raw.logged_at,
        };
        meal.validate()?;
        Ok(meal)
    }
}

/// Aggregate snapshot of what was consumed
///
/// Recomputed whenever the meal list changes; it has no identity of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy in kcal
    pub calories_kcal: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Fiber in grams
    pub fiber_g: f64,
    /// Water in liters (tracked separately from meals)
    pub water_l: f64,
}

impl NutritionTotals {
    /// Sum the nutrients of every meal; water stays at zero
    #[must_use]
    pub fn from_meals(meals: &[Meal]) -> Self {
        meals.iter().fold(Self::default(), |acc, meal| acc + meal)
    }

    /// Attach the separately tracked water intake
    #[must_use]
    pub fn with_water(mut self, liters: f64) -> Self {
        self.water_l = liters;
        self
    }
}

impl Add<&Meal> for NutritionTotals {
    type Output = Self;

    fn add(self, meal: &Meal) -> Self {
        Self {
            calories_kcal: self.calories_kcal + meal.calories_kcal,
            protein_g: self.protein_g + meal.protein_g,
            carbs_g: self.carbs_g + meal.carbs_g,
            fat_g: self.fat_g + meal.fat_g,
            fiber_g: self.fiber_g + meal.fiber_g,
            water_l: self.water_l,
        }
    }
}
