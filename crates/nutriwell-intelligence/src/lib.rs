// ABOUTME: Nutrition intelligence crate with the metrics engine and insights generation
// ABOUTME: Pure calculations over a user profile and the day's nutrition totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriwell Intelligence
//!
//! Metrics engine (BMR, TDEE, BMI, progress) and nutrition insights.
//! Nothing here performs I/O; every function is safe to call repeatedly.

/// Nutrition engine configuration with environment overrides
pub mod config;
/// Insight generation from derived metrics
pub mod insights;
/// BMR, TDEE, BMI, and progress calculations
pub mod nutrition_calculator;

pub use config::NutritionConfig;
pub use insights::{generate_insights, InsightKind, InsightPriority, NutritionInsight};
pub use nutrition_calculator::{
    calculate_bmi, calculate_bmr, calculate_calorie_goal, calculate_progress, calculate_tdee,
    derive_metrics, display_percent, BmiCategory, DerivedMetrics, MacroProgress,
};
