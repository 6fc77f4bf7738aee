// ABOUTME: Nutrition configuration for the metrics engine and assistant snapshot
// ABOUTME: Configures BMR coefficients, activity factors, BMI thresholds, and daily targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Metrics Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - BMI categories: WHO Technical Report Series 894 (2000)

use super::error::ConfigError;
use nutriwell_core::constants::daily_targets;
use nutriwell_core::models::ActivityLevel;
use serde::{Deserialize, Serialize};

/// Nutrition Metrics Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// BMI category thresholds
    pub bmi: BmiThresholds,
    /// Daily intake targets
    pub targets: NutritionTargets,
}

/// Mifflin-St Jeor coefficients
///
/// The profile carries no sex field, so a single constant is applied to
/// everyone. The male constant (+5) is the default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Additive constant (+5)
    pub msj_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_constant: 5.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let factors = ActivityLevel::ALL.map(|level| self.factor(level));
        if factors.iter().any(|f| !f.is_finite() || *f <= 0.0) {
            return Err(ConfigError::InvalidRange(
                "activity factors must be positive",
            ));
        }
        if factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidOrdering(
                "activity factors must increase with activity level",
            ));
        }
        Ok(())
    }
}

/// Lower bounds of the BMI categories above underweight
///
/// Each bound belongs to the higher category, so the categories partition
/// the non-negative reals with no gap or overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiThresholds {
    /// Normal weight starts here (18.5)
    pub normal_min: f64,
    /// Overweight starts here (25.0)
    pub overweight_min: f64,
    /// Obese starts here (30.0)
    pub obese_min: f64,
}

impl Default for BmiThresholds {
    fn default() -> Self {
        Self {
            normal_min: 18.5,
            overweight_min: 25.0,
            obese_min: 30.0,
        }
    }
}

impl BmiThresholds {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.normal_min > 0.0
            && self.normal_min < self.overweight_min
            && self.overweight_min < self.obese_min)
        {
            return Err(ConfigError::InvalidOrdering(
                "BMI thresholds must satisfy 0 < normal < overweight < obese",
            ));
        }
        Ok(())
    }
}

/// Daily intake targets used for progress bars and assistant replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
    /// Water (L)
    pub water_l: f64,
}

impl Default for NutritionTargets {
    fn default() -> Self {
        Self {
            protein_g: daily_targets::PROTEIN_G,
            carbs_g: daily_targets::CARBS_G,
            fat_g: daily_targets::FAT_G,
            fiber_g: daily_targets::FIBER_G,
            water_l: daily_targets::WATER_L,
        }
    }
}

impl NutritionTargets {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let targets = [
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.fiber_g,
            self.water_l,
        ];
        if targets.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(ConfigError::InvalidRange("daily targets must be positive"));
        }
        Ok(())
    }
}
