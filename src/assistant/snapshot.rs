// ABOUTME: Numeric snapshot and profile context handed to the response engine
// ABOUTME: Built from already-computed metrics; the engine never recomputes them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriwell_core::models::{NutritionTotals, UserProfile};
use nutriwell_intelligence::config::NutritionTargets;
use nutriwell_intelligence::{calculate_progress, DerivedMetrics};
use serde::{Deserialize, Serialize};

/// Numbers a reply template may substitute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSnapshot {
    /// Calories consumed today
    pub calories_kcal: f64,
    /// Daily calorie goal
    pub calorie_goal: f64,
    /// Basal metabolic rate
    pub bmr: f64,
    /// Protein consumed (g)
    pub protein_g: f64,
    /// Protein target (g)
    pub protein_target_g: f64,
    /// Carbohydrates consumed (g)
    pub carbs_g: f64,
    /// Carbohydrate target (g)
    pub carbs_target_g: f64,
    /// Fat consumed (g)
    pub fat_g: f64,
    /// Fat target (g)
    pub fat_target_g: f64,
    /// Water consumed (L)
    pub water_l: f64,
    /// Water target (L)
    pub water_target_l: f64,
}

impl NutritionSnapshot {
    /// Assemble a snapshot from the day's totals and derived metrics
    #[must_use]
    pub fn new(
        totals: &NutritionTotals,
        metrics: &DerivedMetrics,
        targets: &NutritionTargets,
    ) -> Self {
        Self {
            calories_kcal: totals.calories_kcal,
            calorie_goal: metrics.calorie_goal,
            bmr: metrics.bmr,
            protein_g: totals.protein_g,
            protein_target_g: targets.protein_g,
            carbs_g: totals.carbs_g,
            carbs_target_g: targets.carbs_g,
            fat_g: totals.fat_g,
            fat_target_g: targets.fat_g,
            water_l: totals.water_l,
            water_target_l: targets.water_l,
        }
    }

    /// Calorie goal minus calories consumed; negative when over
    #[must_use]
    pub fn remaining_calories(&self) -> f64 {
        self.calorie_goal - self.calories_kcal
    }

    /// Protein target minus protein consumed; negative when over
    #[must_use]
    pub fn remaining_protein_g(&self) -> f64 {
        self.protein_target_g - self.protein_g
    }

    /// Water target minus water consumed; negative when over
    #[must_use]
    pub fn remaining_water_l(&self) -> f64 {
        self.water_target_l - self.water_l
    }

    /// Calorie progress in percent, `None` without a usable goal
    #[must_use]
    pub fn calorie_progress_pct(&self) -> Option<f64> {
        calculate_progress(self.calories_kcal, self.calorie_goal).ok()
    }
}

/// Everything a template can read while rendering a reply
#[derive(Debug, Clone, Copy)]
pub struct ResponseContext<'a> {
    /// Numeric snapshot
    pub snapshot: &'a NutritionSnapshot,
    /// Profile for goal and dietary restriction phrasing
    pub profile: &'a UserProfile,
}

impl<'a> ResponseContext<'a> {
    /// Bundle a snapshot and profile
    #[must_use]
    pub const fn new(snapshot: &'a NutritionSnapshot, profile: &'a UserProfile) -> Self {
        Self { snapshot, profile }
    }

    /// Name to greet the user with
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.profile.name.trim();
        if name.is_empty() {
            "there"
        } else {
            name
        }
    }

    /// Restrictions joined for prose, `None` when there are none
    #[must_use]
    pub fn restrictions_phrase(&self) -> Option<String> {
        if self.profile.dietary_restrictions.is_empty() {
            return None;
        }
        let items: Vec<&str> = self
            .profile
            .dietary_restrictions
            .iter()
            .map(String::as_str)
            .collect();
        Some(items.join(", "))
    }
}

/// Format an amount with no decimals when whole, one decimal otherwise
#[must_use]
pub fn format_amount(value: f64) -> String {
    // adding zero folds -0.0 into 0.0
    let rounded = (value * 10.0).round() / 10.0 + 0.0;
    if rounded.fract().abs() < f64::EPSILON {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
