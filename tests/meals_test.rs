// ABOUTME: Integration tests for meal file loading, the food catalog, and the planner
// ABOUTME: Uses temporary files to exercise the JSON loaders end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Weekday;
use nutriwell::errors::ErrorCode;
use nutriwell::intelligence::{derive_metrics, NutritionConfig};
use nutriwell::meals::{
    find_food, generate_weekly_plan, load_meals_file, load_profile_file, meal_suggestions,
    MealSlot,
};
use nutriwell::models::{ActivityLevel, MealType, NutritionTotals};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_files_and_derive_metrics() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let profile_path = dir.path().join("profile.json");
    let meals_path = dir.path().join("meals.json");
    fs::write(&profile_path, common::PROFILE_JSON).unwrap();
    fs::write(&meals_path, common::MEALS_JSON).unwrap();

    let profile = load_profile_file(&profile_path).unwrap();
    assert_eq!(profile.activity_level, ActivityLevel::Moderate);

    let meals = load_meals_file(&meals_path).unwrap();
    assert_eq!(meals.len(), 3);
    assert_eq!(meals[2].meal_type, MealType::Snack);
    assert!(meals[1].fiber_g.abs() < f64::EPSILON);

    let totals = NutritionTotals::from_meals(&meals);
    let metrics = derive_metrics(&profile, &totals, &NutritionConfig::default()).unwrap();
    assert!((metrics.calorie_goal - 2556.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_file_is_a_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = load_meals_file(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(err.source.is_some());
}

#[test]
fn test_malformed_meal_file_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("meals.json");
    fs::write(&path, r#"[{"name": "Toast", "calories_kcal": 90}]"#).unwrap();

    let err = load_meals_file(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("protein_g"));
}

#[test]
fn test_logged_foods_feed_the_totals() {
    let oatmeal = find_food("Oatmeal").unwrap();
    let yogurt = find_food("greek yogurt").unwrap();
    let meals = vec![
        oatmeal.log(2.0, MealType::Breakfast, "08:00").unwrap(),
        yogurt.log(1.0, MealType::Snack, "16:00").unwrap(),
    ];

    let totals = NutritionTotals::from_meals(&meals);
    assert!((totals.calories_kcal - 430.0).abs() < f64::EPSILON);
    assert!((totals.protein_g - 35.0).abs() < f64::EPSILON);
    assert!((totals.fiber_g - 8.0).abs() < f64::EPSILON);
}

#[test]
fn test_logging_rejects_bad_quantity() {
    let banana = find_food("banana").unwrap();
    for quantity in [0.0, -1.0, f64::NAN] {
        let err = banana.log(quantity, MealType::Snack, "10:00").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }
    assert!(find_food("pizza").is_none());
}

#[test]
fn test_weekly_plan_totals_stay_within_suggestion_bounds() {
    let plan = generate_weekly_plan(&mut ChaCha8Rng::seed_from_u64(11));

    let min: f64 = MealSlot::ALL
        .iter()
        .map(|&slot| {
            meal_suggestions(slot)
                .iter()
                .map(|s| s.calories_kcal)
                .fold(f64::INFINITY, f64::min)
        })
        .sum();
    let max: f64 = MealSlot::ALL
        .iter()
        .map(|&slot| {
            meal_suggestions(slot)
                .iter()
                .map(|s| s.calories_kcal)
                .fold(0.0, f64::max)
        })
        .sum();

    for day in [Weekday::Mon, Weekday::Thu, Weekday::Sun] {
        let totals = plan.day_totals(day).unwrap();
        assert!(totals.calories_kcal >= min && totals.calories_kcal <= max);
    }
}
