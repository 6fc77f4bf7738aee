// ABOUTME: Integration tests for the nutrition metrics engine
// ABOUTME: BMR, TDEE, BMI, progress, goal policy, and insights over parsed inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use nutriwell::errors::{AppError, ErrorCode, MetricsError};
use nutriwell::intelligence::{
    calculate_bmi, calculate_bmr, calculate_calorie_goal, calculate_progress, calculate_tdee,
    derive_metrics, generate_insights, BmiCategory, InsightPriority, NutritionConfig,
};
use nutriwell::models::{ActivityLevel, Meal, NutritionTotals, UserProfile};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn test_reference_profile_metrics() {
    common::init_test_logging();
    let config = NutritionConfig::default();
    let profile = UserProfile::from_json(common::PROFILE_JSON).unwrap();

    let metrics = derive_metrics(&profile, &common::sample_totals(), &config).unwrap();

    assert!(close(metrics.bmr, 1648.75));
    assert!(close(metrics.tdee, 1648.75 * 1.55));
    assert!(close(metrics.calorie_goal, 2556.0));
    assert!(close(metrics.bmi, 22.9));
    assert_eq!(metrics.bmi_category, BmiCategory::Normal);
}

#[test]
fn test_sample_totals_progress() {
    let config = NutritionConfig::default();
    let totals = common::sample_totals();
    assert!(close(totals.calories_kcal, 964.0));
    assert!(close(totals.fiber_g, 11.5));

    let metrics = derive_metrics(&common::sample_profile(), &totals, &config).unwrap();
    assert!(close(metrics.calorie_progress_pct, 964.0 * 100.0 / 2556.0));
    assert!(close(metrics.hydration_progress_pct, 75.0));
    assert!(close(metrics.macro_progress_pct.protein, 58.0 * 100.0 / 150.0));
}

#[test]
fn test_activity_levels_are_monotonic() {
    let config = NutritionConfig::default();
    let bmr = calculate_bmr(&common::sample_profile(), &config.bmr);

    let tdees: Vec<f64> = ActivityLevel::ALL
        .iter()
        .map(|level| calculate_tdee(bmr, *level, &config.activity_factors))
        .collect();
    assert!(tdees.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_bmr_rises_with_weight_and_height_and_falls_with_age() {
    let config = NutritionConfig::default();
    let bmr = |age: u32, weight: f64, height: f64| {
        let profile = UserProfile::new("Sam", age, weight, height, ActivityLevel::Moderate);
        calculate_bmr(&profile, &config.bmr)
    };
    let base = bmr(30, 70.0, 175.0);

    assert!(bmr(30, 71.0, 175.0) > base);
    assert!(bmr(30, 69.0, 175.0) < base);
    assert!(bmr(30, 70.0, 180.0) > base);
    assert!(bmr(30, 70.0, 170.0) < base);
    assert!(bmr(31, 70.0, 175.0) < base);
    assert!(bmr(29, 70.0, 175.0) > base);
}

#[test]
fn test_sedentary_goal_matches_bmr_times_baseline() {
    let config = NutritionConfig::default();
    let profile = UserProfile::new("Sam", 30, 70.0, 175.0, ActivityLevel::Sedentary);
    let bmr = calculate_bmr(&profile, &config.bmr);

    let goal = calculate_calorie_goal(&profile, &config);
    assert_eq!(goal.to_bits(), (bmr * 1.2).round().to_bits());
}

#[test]
fn test_goal_progress_round_trip() {
    let config = NutritionConfig::default();
    let profile = common::sample_profile();
    let goal = calculate_calorie_goal(&profile, &config);

    let totals = NutritionTotals {
        calories_kcal: goal,
        ..NutritionTotals::default()
    };
    let metrics = derive_metrics(&profile, &totals, &config).unwrap();
    assert!(close(metrics.calorie_progress_pct, 100.0));
}

#[test]
fn test_over_goal_is_unclamped_until_display() {
    let config = NutritionConfig::default();
    let profile = common::sample_profile();
    let totals = NutritionTotals {
        calories_kcal: 5112.0,
        protein_g: 300.0,
        water_l: 3.0,
        ..NutritionTotals::default()
    };

    let metrics = derive_metrics(&profile, &totals, &config).unwrap();
    assert!(close(metrics.calorie_progress_pct, 200.0));
    assert!(close(metrics.macro_progress_pct.protein, 200.0));
    assert!(metrics.remaining_calories(totals.calories_kcal) < 0.0);

    let shown = metrics.display();
    assert!(close(shown.calorie_progress_pct, 100.0));
    assert!(close(shown.hydration_progress_pct, 100.0));
}

#[test]
fn test_progress_without_goal() {
    assert!(matches!(
        calculate_progress(10.0, 0.0),
        Err(MetricsError::NoGoal { .. })
    ));
    assert!(calculate_progress(10.0, f64::NAN).is_err());
    assert!(close(calculate_progress(1850.0, 2000.0).unwrap(), 92.5));
}

#[test]
fn test_bmi_category_boundaries() {
    assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
    assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
    assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    assert!(close(calculate_bmi(95.0, 175.0), 31.0));
}

#[test]
fn test_malformed_inputs_convert_to_invalid_input() {
    let err: AppError = UserProfile::from_json(r#"{"age": 30, "weight_kg": 70}"#)
        .unwrap_err()
        .into();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let err = UserProfile::from_json(
        r#"{"age": 30, "weight_kg": 70, "height_cm": 175, "activity_level": "couch"}"#,
    )
    .unwrap_err();
    assert!(matches!(err, MetricsError::InvalidActivityLevel(_)));

    let err = Meal::from_json(
        r#"{"name": "Soup", "calories_kcal": -5, "protein_g": 1, "carbs_g": 1, "fat_g": 1}"#,
    )
    .unwrap_err();
    assert!(matches!(err, MetricsError::MalformedMeal(_)));
}

#[test]
fn test_profile_restrictions_are_normalized() {
    let profile = UserProfile::from_json(common::PROFILE_JSON).unwrap();
    assert_eq!(profile.dietary_restrictions.len(), 1);
    assert!(profile.dietary_restrictions.contains("vegetarian"));
    assert_eq!(
        profile.goals_phrase().as_deref(),
        Some("weight loss and muscle gain")
    );
}

#[test]
fn test_insights_for_empty_day() {
    let config = NutritionConfig::default();
    let totals = NutritionTotals::default();
    let metrics = derive_metrics(&common::sample_profile(), &totals, &config).unwrap();

    let insights = generate_insights(&metrics, &totals, &config.targets);
    let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
    assert!(titles.contains(&"Low Protein Intake"));
    assert!(titles.contains(&"Stay Hydrated"));
    assert!(titles.contains(&"Increase Fiber Intake"));
    assert!(!titles.contains(&"Calorie Goal Exceeded"));

    assert!(insights
        .windows(2)
        .all(|pair| pair[0].priority <= pair[1].priority));
    assert_ne!(insights.last().map(|i| i.priority), Some(InsightPriority::High));
}
