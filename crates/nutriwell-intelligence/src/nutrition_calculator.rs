// ABOUTME: Metrics engine turning a profile and consumed totals into derived health metrics
// ABOUTME: BMR, TDEE, BMI with category, calorie goal, and unclamped progress percentages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Metrics Calculator
//!
//! Pure functions with no side effects and no I/O. Percentages are computed
//! unclamped so over-goal intake stays visible; [`display_percent`] and
//! [`DerivedMetrics::display`] give the clamped view used for progress bars.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894.

use crate::config::{ActivityFactorsConfig, BmiThresholds, BmrConfig, NutritionConfig};
use nutriwell_core::constants::percent;
use nutriwell_core::errors::MetricsError;
use nutriwell_core::models::{ActivityLevel, NutritionTotals, UserProfile};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Coarse weight category derived from BMI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 <= BMI < 25
    Normal,
    /// 25 <= BMI < 30
    Overweight,
    /// BMI of 30 and above
    Obese,
}

impl BmiCategory {
    /// Categorize a BMI value with the default WHO thresholds
    ///
    /// Each threshold belongs to the higher category.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        Self::from_bmi_with(bmi, &BmiThresholds::default())
    }

    /// Categorize a BMI value with explicit thresholds
    #[must_use]
    pub fn from_bmi_with(bmi: f64, thresholds: &BmiThresholds) -> Self {
        if bmi < thresholds.normal_min {
            Self::Underweight
        } else if bmi < thresholds.overweight_min {
            Self::Normal
        } else if bmi < thresholds.obese_min {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Progress toward each daily macro target, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    /// Protein progress
    pub protein: f64,
    /// Carbohydrate progress
    pub carbs: f64,
    /// Fat progress
    pub fat: f64,
}

impl MacroProgress {
    fn clamped(self) -> Self {
        Self {
            protein: display_percent(self.protein),
            carbs: display_percent(self.carbs),
            fat: display_percent(self.fat),
        }
    }
}

/// Output of [`derive_metrics`]
///
/// Recomputed on every call and never persisted. Progress fields are
/// unclamped; call [`DerivedMetrics::display`] before rendering bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Body mass index, rounded to one decimal
    pub bmi: f64,
    /// Weight category for `bmi`
    pub bmi_category: BmiCategory,
    /// Daily calorie goal (kcal)
    pub calorie_goal: f64,
    /// Calories consumed as a percentage of `calorie_goal`
    pub calorie_progress_pct: f64,
    /// Macro progress against the configured targets
    pub macro_progress_pct: MacroProgress,
    /// Fiber progress against the configured target
    pub fiber_progress_pct: f64,
    /// Water progress against the configured target
    pub hydration_progress_pct: f64,
}

impl DerivedMetrics {
    /// Copy with every percentage clamped to [0, 100]
    #[must_use]
    pub fn display(&self) -> Self {
        Self {
            calorie_progress_pct: display_percent(self.calorie_progress_pct),
            macro_progress_pct: self.macro_progress_pct.clamped(),
            fiber_progress_pct: display_percent(self.fiber_progress_pct),
            hydration_progress_pct: display_percent(self.hydration_progress_pct),
            ..self.clone()
        }
    }

    /// Calories left before reaching the goal (negative when over)
    #[must_use]
    pub fn remaining_calories(&self, consumed_kcal: f64) -> f64 {
        self.calorie_goal - consumed_kcal
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + constant
///
/// The result is not clamped; validate the profile first if pathological
/// inputs must be excluded.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(profile: &UserProfile, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * profile.weight_kg;
    let height_component = config.msj_height_coef * profile.height_cm;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    weight_component + height_component + age_component + config.msj_constant
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = BMR x Activity Factor, with no rounding before the
/// multiplication.
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Very active: 1.9
#[must_use]
pub fn calculate_tdee(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> f64 {
    bmr * config.factor(activity_level)
}

/// Daily calorie goal: activity-adjusted TDEE rounded to whole kcal
#[must_use]
pub fn calculate_calorie_goal(profile: &UserProfile, config: &NutritionConfig) -> f64 {
    let bmr = calculate_bmr(profile, &config.bmr);
    calculate_tdee(bmr, profile.activity_level, &config.activity_factors).round()
}

/// Calculate BMI from weight and height, rounded to one decimal
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to_tenth(weight_kg / (height_m * height_m))
}

/// Percentage of `goal` reached by `consumed`, unclamped
///
/// # Errors
///
/// Returns `MetricsError::NoGoal` when `goal` is not a positive finite number
pub fn calculate_progress(consumed: f64, goal: f64) -> Result<f64, MetricsError> {
    if !goal.is_finite() || goal <= 0.0 {
        return Err(MetricsError::NoGoal { goal });
    }
    Ok(consumed * 100.0 / goal)
}

/// Clamp a percentage into [0, 100] for progress-bar rendering
#[must_use]
pub fn display_percent(pct: f64) -> f64 {
    if pct.is_nan() {
        return percent::MIN;
    }
    pct.clamp(percent::MIN, percent::MAX)
}

/// Compute every derived metric for a profile and the day's totals
///
/// # Errors
///
/// - `MetricsError::MalformedProfile` if the profile fails validation
/// - `MetricsError::NoGoal` if the calorie goal or a configured target is not positive
pub fn derive_metrics(
    profile: &UserProfile,
    totals: &NutritionTotals,
    config: &NutritionConfig,
) -> Result<DerivedMetrics, MetricsError> {
    profile.validate()?;

    let bmr = calculate_bmr(profile, &config.bmr);
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let calorie_goal = tdee.round();
    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm);
    let targets = &config.targets;

    let metrics = DerivedMetrics {
        bmr,
        tdee,
        bmi,
        bmi_category: BmiCategory::from_bmi_with(bmi, &config.bmi),
        calorie_goal,
        calorie_progress_pct: calculate_progress(totals.calories_kcal, calorie_goal)?,
        macro_progress_pct: MacroProgress {
            protein: calculate_progress(totals.protein_g, targets.protein_g)?,
            carbs: calculate_progress(totals.carbs_g, targets.carbs_g)?,
            fat: calculate_progress(totals.fat_g, targets.fat_g)?,
        },
        fiber_progress_pct: calculate_progress(totals.fiber_g, targets.fiber_g)?,
        hydration_progress_pct: calculate_progress(totals.water_l, targets.water_l)?,
    };

    debug!(
        bmr = metrics.bmr,
        tdee = metrics.tdee,
        bmi = metrics.bmi,
        calorie_goal = metrics.calorie_goal,
        "derived nutrition metrics"
    );

    Ok(metrics)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(level: ActivityLevel) -> UserProfile {
        UserProfile::new("Ana", 30, 70.0, 175.0, level)
    }

    #[test]
    fn test_bmr_mifflin_st_jeor() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75
        let bmr = calculate_bmr(&profile(ActivityLevel::Moderate), &BmrConfig::default());
        assert!((bmr - 1648.75).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_is_not_clamped() {
        let tiny = UserProfile::new("Edge", 120, 1.0, 1.0, ActivityLevel::Sedentary);
        assert!(calculate_bmr(&tiny, &BmrConfig::default()) < 0.0);
    }

    #[test]
    fn test_tdee_moderate_is_exact_product() {
        let bmr = 1648.75;
        let tdee = calculate_tdee(bmr, ActivityLevel::Moderate, &ActivityFactorsConfig::default());
        assert_eq!(tdee.to_bits(), (bmr * 1.55).to_bits());
    }

    #[test]
    fn test_tdee_uses_every_factor() {
        let factors = ActivityFactorsConfig::default();
        let expected: [f64; 5] = [1.2, 1.375, 1.55, 1.725, 1.9];
        for (level, factor) in ActivityLevel::ALL.into_iter().zip(expected) {
            assert_eq!(
                calculate_tdee(1000.0, level, &factors).to_bits(),
                (1000.0 * factor).to_bits()
            );
        }
    }

    #[test]
    fn test_bmi_rounded_and_categorized() {
        let bmi = calculate_bmi(70.0, 175.0);
        assert!((bmi - 22.9).abs() < f64::EPSILON);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_boundaries_belong_to_higher_category() {
        assert_eq!(BmiCategory::from_bmi(0.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_progress_is_unclamped() {
        assert!((calculate_progress(1850.0, 2000.0).unwrap() - 92.5).abs() < f64::EPSILON);
        assert!((calculate_progress(2200.0, 2000.0).unwrap() - 110.0).abs() < f64::EPSILON);
        assert!(calculate_progress(0.0, 2000.0).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_without_goal() {
        assert_eq!(
            calculate_progress(100.0, 0.0),
            Err(MetricsError::NoGoal { goal: 0.0 })
        );
        assert!(matches!(
            calculate_progress(100.0, -5.0),
            Err(MetricsError::NoGoal { .. })
        ));
        assert!(matches!(
            calculate_progress(100.0, f64::INFINITY),
            Err(MetricsError::NoGoal { .. })
        ));
    }

    #[test]
    fn test_display_percent_clamps() {
        assert!((display_percent(110.0) - 100.0).abs() < f64::EPSILON);
        assert!(display_percent(-3.0).abs() < f64::EPSILON);
        assert!(display_percent(f64::NAN).abs() < f64::EPSILON);
        assert!((display_percent(42.5) - 42.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_calorie_goal_round_trip() {
        let config = NutritionConfig::default();
        for level in ActivityLevel::ALL {
            let goal = calculate_calorie_goal(&profile(level), &config);
            assert_eq!(calculate_progress(goal, goal).unwrap().to_bits(), 100.0_f64.to_bits());
        }
    }

    #[test]
    fn test_sedentary_goal_matches_bmr_times_1_2() {
        let p = profile(ActivityLevel::Sedentary);
        let goal = calculate_calorie_goal(&p, &NutritionConfig::default());
        let bmr = calculate_bmr(&p, &BmrConfig::default());
        assert_eq!(goal.to_bits(), (bmr * 1.2).round().to_bits());
        assert!((goal - 1978.5).abs() <= 0.5);
    }

    #[test]
    fn test_derive_metrics_over_goal_stays_unclamped() {
        let p = profile(ActivityLevel::Sedentary);
        let totals = NutritionTotals {
            calories_kcal: 2500.0,
            protein_g: 180.0,
            carbs_g: 100.0,
            fat_g: 65.0,
            fiber_g: 15.0,
            water_l: 1.0,
        };
        let metrics = derive_metrics(&p, &totals, &NutritionConfig::default()).unwrap();

        assert!(metrics.calorie_progress_pct > 100.0);
        assert!((metrics.macro_progress_pct.protein - 120.0).abs() < 1e-9);
        assert!((metrics.macro_progress_pct.carbs - 50.0).abs() < 1e-9);
        assert!((metrics.macro_progress_pct.fat - 100.0).abs() < 1e-9);
        assert!((metrics.fiber_progress_pct - 50.0).abs() < 1e-9);
        assert!((metrics.hydration_progress_pct - 50.0).abs() < 1e-9);

        let shown = metrics.display();
        assert!((shown.calorie_progress_pct - 100.0).abs() < f64::EPSILON);
        assert!((shown.macro_progress_pct.protein - 100.0).abs() < f64::EPSILON);
        assert!((shown.bmr - metrics.bmr).abs() < f64::EPSILON);
    }

    #[test]
    fn test_derive_metrics_rejects_malformed_profile() {
        let mut p = profile(ActivityLevel::Light);
        p.height_cm = 0.0;
        assert!(matches!(
            derive_metrics(&p, &NutritionTotals::default(), &NutritionConfig::default()),
            Err(MetricsError::MalformedProfile(_))
        ));
    }
}
