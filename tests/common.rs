// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup plus sample profiles, meals, and contexts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutriwell`
//!
//! Common fixtures so each integration test does not rebuild the same
//! profile and meal list.

use nutriwell::assistant::NutritionSnapshot;
use nutriwell::intelligence::{derive_metrics, NutritionConfig};
use nutriwell::models::{
    ActivityLevel, HealthGoal, Meal, MealType, NutritionTotals, UserProfile,
};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Sample profile as it arrives from the profile collaborator
pub const PROFILE_JSON: &str = r#"{
    "name": "Ana",
    "age": 30,
    "weight_kg": 70,
    "height_cm": 175,
    "activity_level": "moderate",
    "goals": ["weight_loss", "muscle_gain"],
    "dietary_restrictions": ["Vegetarian", "none"]
}"#;

/// Three logged meals; the second omits its id and fiber
pub const MEALS_JSON: &str = r#"[
    {"name": "Oatmeal", "meal_type": "breakfast", "calories_kcal": 350, "protein_g": 12, "carbs_g": 60, "fat_g": 7, "fiber_g": 8, "logged_at": "08:00"},
    {"name": "Chicken Salad", "meal_type": "lunch", "calories_kcal": 450, "protein_g": 40, "carbs_g": 20, "fat_g": 22, "logged_at": "12:30"},
    {"name": "Almonds", "meal_type": "snacks", "calories_kcal": 164, "protein_g": 6, "carbs_g": 6, "fat_g": 14, "fiber_g": 3.5, "logged_at": "16:00"}
]"#;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; defaults to WARN for quiet tests
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 30-year-old, 70 kg, 175 cm, moderately active, no goals
pub fn sample_profile() -> UserProfile {
    UserProfile::new("Ana", 30, 70.0, 175.0, ActivityLevel::Moderate)
}

/// Sample profile with goals and a restriction set
pub fn profile_with_goals() -> UserProfile {
    sample_profile()
        .with_goal(HealthGoal::WeightLoss)
        .with_restriction("vegetarian")
}

/// Build a meal with fresh id
pub fn meal(name: &str, meal_type: MealType, calories: f64, protein: f64) -> Meal {
    Meal {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        meal_type,
        calories_kcal: calories,
        protein_g: protein,
        carbs_g: 0.0,
        fat_g: 0.0,
        fiber_g: 0.0,
        logged_at: "12:00".to_owned(),
    }
}

/// Totals of the parsed `MEALS_JSON` with 1.5 L of water
pub fn sample_totals() -> NutritionTotals {
    let meals = Meal::list_from_json(MEALS_JSON).unwrap();
    NutritionTotals::from_meals(&meals).with_water(1.5)
}

/// Snapshot for a profile and totals under the default configuration
pub fn snapshot_for(profile: &UserProfile, totals: &NutritionTotals) -> NutritionSnapshot {
    let config = NutritionConfig::default();
    let metrics = derive_metrics(profile, totals, &config).unwrap();
    NutritionSnapshot::new(totals, &metrics, &config.targets)
}
