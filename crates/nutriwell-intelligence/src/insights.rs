// ABOUTME: Nutrition insight generation from derived metrics and the day's totals
// ABOUTME: Produces prioritized positive, warning, and informational insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight generation for the health insights view

use crate::config::NutritionTargets;
use crate::nutrition_calculator::{BmiCategory, DerivedMetrics};
use nutriwell_core::models::NutritionTotals;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Calorie progress above which the day counts as an overshoot
const CALORIE_OVERSHOOT_PCT: f64 = 110.0;

/// Protein progress below which intake counts as low
const LOW_PROTEIN_PCT: f64 = 50.0;

/// Tone of an insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Something the user did well
    Positive,
    /// Something worth correcting today
    Warning,
    /// General guidance
    Info,
}

/// Display priority; `High` sorts first
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum InsightPriority {
    /// Shown at the top
    High,
    /// Shown after high-priority insights
    Medium,
    /// Shown last
    Low,
}

/// A single insight card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionInsight {
    /// Tone
    pub kind: InsightKind,
    /// Ordering key
    pub priority: InsightPriority,
    /// Short title
    pub title: String,
    /// Body text
    pub message: String,
    /// Optional concrete action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl NutritionInsight {
    fn new(
        kind: InsightKind,
        priority: InsightPriority,
        title: &str,
        message: String,
        recommendation: Option<&str>,
    ) -> Self {
        Self {
            kind,
            priority,
            title: title.to_owned(),
            message,
            recommendation: recommendation.map(str::to_owned),
        }
    }
}

/// Generate insights for the day, ordered by priority
///
/// Insights with equal priority keep the order in which the rules run:
/// calories, protein, hydration, fiber, BMI.
#[must_use]
pub fn generate_insights(
    metrics: &DerivedMetrics,
    totals: &NutritionTotals,
    targets: &NutritionTargets,
) -> Vec<NutritionInsight> {
    let mut insights = Vec::new();

    if metrics.calorie_progress_pct > CALORIE_OVERSHOOT_PCT {
        insights.push(NutritionInsight::new(
            InsightKind::Warning,
            InsightPriority::High,
            "Calorie Goal Exceeded",
            format!(
                "You've eaten {:.0} kcal, {:.0} kcal over your {:.0} kcal goal.",
                totals.calories_kcal,
                totals.calories_kcal - metrics.calorie_goal,
                metrics.calorie_goal
            ),
            Some("Choose lighter, vegetable-based options for your remaining meals"),
        ));
    }

    let protein_pct = metrics.macro_progress_pct.protein;
    if protein_pct >= 100.0 {
        insights.push(NutritionInsight::new(
            InsightKind::Positive,
            InsightPriority::Medium,
            "Protein Target Reached",
            format!(
                "Great job! You've had {:.0}g of protein, meeting your {:.0}g goal.",
                totals.protein_g, targets.protein_g
            ),
            None,
        ));
    } else if protein_pct < LOW_PROTEIN_PCT {
        insights.push(NutritionInsight::new(
            InsightKind::Warning,
            InsightPriority::Medium,
            "Low Protein Intake",
            format!(
                "You're at {:.0}g of your {:.0}g protein goal ({protein_pct:.0}%).",
                totals.protein_g, targets.protein_g
            ),
            Some("Add lean meats, fish, eggs, or legumes to your next meal"),
        ));
    }

    if metrics.hydration_progress_pct < 100.0 {
        let remaining = (targets.water_l - totals.water_l).max(0.0);
        insights.push(NutritionInsight::new(
            InsightKind::Warning,
            InsightPriority::Medium,
            "Stay Hydrated",
            format!(
                "You've had {:.1}L of water today. Drink {remaining:.1}L more to reach {:.1}L.",
                totals.water_l, targets.water_l
            ),
            Some("Keep a water bottle nearby and sip between meals"),
        ));
    }

    if metrics.fiber_progress_pct < 100.0 {
        insights.push(NutritionInsight::new(
            InsightKind::Info,
            InsightPriority::Low,
            "Increase Fiber Intake",
            format!(
                "Aim for {:.0}g of fiber daily; you're at {:.0}g so far.",
                targets.fiber_g, totals.fiber_g
            ),
            Some("Add more whole grains, legumes, and vegetables"),
        ));
    }

    if metrics.bmi_category != BmiCategory::Normal {
        insights.push(NutritionInsight::new(
            InsightKind::Info,
            InsightPriority::Low,
            "Body Mass Index",
            format!(
                "Your BMI is {:.1} ({}).",
                metrics.bmi,
                metrics.bmi_category.label()
            ),
            Some("Consider booking a consultation with a nutritionist"),
        ));
    }

    // Stable sort keeps rule order within a priority
    insights.sort_by_key(|insight| insight.priority);
    debug!(count = insights.len(), "generated nutrition insights");
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NutritionConfig;
    use crate::nutrition_calculator::derive_metrics;
    use nutriwell_core::models::{ActivityLevel, UserProfile};

    fn insights_for(totals: NutritionTotals) -> Vec<NutritionInsight> {
        let config = NutritionConfig::default();
        let profile = UserProfile::new("Ana", 30, 70.0, 175.0, ActivityLevel::Moderate);
        let metrics = derive_metrics(&profile, &totals, &config).unwrap();
        generate_insights(&metrics, &totals, &config.targets)
    }

    #[test]
    fn test_balanced_day_only_praises_protein() {
        let insights = insights_for(NutritionTotals {
            calories_kcal: 2000.0,
            protein_g: 150.0,
            carbs_g: 200.0,
            fat_g: 60.0,
            fiber_g: 32.0,
            water_l: 2.5,
        });
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].kind, InsightKind::Positive);
        assert_eq!(insights[0].title, "Protein Target Reached");
    }

    #[test]
    fn test_overshoot_sorts_first() {
        let insights = insights_for(NutritionTotals {
            calories_kcal: 4000.0,
            protein_g: 40.0,
            carbs_g: 300.0,
            fat_g: 120.0,
            fiber_g: 10.0,
            water_l: 0.5,
        });
        let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Calorie Goal Exceeded",
                "Low Protein Intake",
                "Stay Hydrated",
                "Increase Fiber Intake",
            ]
        );
        assert!(insights[2].message.contains("1.5L more"));
    }
}
