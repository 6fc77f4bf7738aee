// ABOUTME: Configuration module for nutriwell-intelligence crate
// ABOUTME: Re-exports nutrition configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrition engine configuration (BMR, activity factors, BMI, daily targets)
pub mod intelligence;

pub use intelligence::env_vars;
pub use intelligence::{
    ActivityFactorsConfig, BmiThresholds, BmrConfig, ConfigError, NutritionConfig,
    NutritionTargets,
};
