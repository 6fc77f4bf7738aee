// ABOUTME: Configuration management module for the nutriwell application
// ABOUTME: Environment-driven app settings plus the nutrition engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: application settings from environment variables
//! - **Nutrition**: BMR coefficients, activity factors, BMI thresholds, and
//!   daily targets, re-exported from `nutriwell-intelligence`

/// Environment-driven application configuration
pub mod environment;

pub use environment::AppConfig;
pub use nutriwell_intelligence::config::{
    ActivityFactorsConfig, BmiThresholds, BmrConfig, ConfigError, NutritionConfig,
    NutritionTargets,
};
