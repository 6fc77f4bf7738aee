// ABOUTME: Nutrition engine configuration loading, env overrides, and validation
// ABOUTME: Applies NUTRIWELL_* overrides to the compiled-in defaults and checks invariants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the nutrition metrics engine.
//!
//! Configuration is environment-only: defaults are compiled in and a small
//! set of `NUTRIWELL_*` variables can override them.

/// Configuration error types
pub mod error;
/// Nutrition config sections
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmiThresholds, BmrConfig, NutritionConfig, NutritionTargets,
};

use std::env;
use tracing::debug;

/// Environment variables recognized by [`NutritionConfig::load`]
pub mod env_vars {
    /// Daily protein target (g)
    pub const PROTEIN_TARGET_G: &str = "NUTRIWELL_PROTEIN_TARGET_G";
    /// Daily carbohydrate target (g)
    pub const CARBS_TARGET_G: &str = "NUTRIWELL_CARBS_TARGET_G";
    /// Daily fat target (g)
    pub const FAT_TARGET_G: &str = "NUTRIWELL_FAT_TARGET_G";
    /// Daily fiber target (g)
    pub const FIBER_TARGET_G: &str = "NUTRIWELL_FIBER_TARGET_G";
    /// Daily water target (L)
    pub const WATER_TARGET_L: &str = "NUTRIWELL_WATER_TARGET_L";
    /// Mifflin-St Jeor additive constant
    pub const BMR_CONSTANT: &str = "NUTRIWELL_BMR_CONSTANT";
}

fn env_f64(name: &str) -> Result<Option<f64>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| ConfigError::Parse(format!("{name}={raw}: {e}"))),
        Err(_) => Ok(None),
    }
}

impl NutritionConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an invalid value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let targets = [
            (env_vars::PROTEIN_TARGET_G, &mut self.targets.protein_g),
            (env_vars::CARBS_TARGET_G, &mut self.targets.carbs_g),
            (env_vars::FAT_TARGET_G, &mut self.targets.fat_g),
            (env_vars::FIBER_TARGET_G, &mut self.targets.fiber_g),
            (env_vars::WATER_TARGET_L, &mut self.targets.water_l),
            (env_vars::BMR_CONSTANT, &mut self.bmr.msj_constant),
        ];
        for (name, slot) in targets {
            if let Some(value) = env_f64(name)? {
                debug!(variable = name, value, "applying nutrition config override");
                *slot = value;
            }
        }
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        let coefficients = [
            self.bmr.msj_weight_coef,
            self.bmr.msj_height_coef,
            self.bmr.msj_age_coef,
            self.bmr.msj_constant,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::InvalidRange(
                "BMR coefficients must be finite",
            ));
        }
        if self.bmr.msj_weight_coef <= 0.0
            || self.bmr.msj_height_coef <= 0.0
            || self.bmr.msj_age_coef >= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "BMR must rise with weight and height and fall with age",
            ));
        }
        self.activity_factors.validate()?;
        self.bmi.validate()?;
        self.targets.validate()
    }
}
