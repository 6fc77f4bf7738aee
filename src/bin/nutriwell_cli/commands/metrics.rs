// ABOUTME: Metrics command for nutriwell-cli
// ABOUTME: Prints BMR, TDEE, BMI, goal progress, and generated insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutriwell::constants::daily_targets::MEALS_PER_DAY;
use nutriwell::errors::{AppError, AppResult};
use nutriwell::intelligence::{derive_metrics, generate_insights, NutritionConfig};
use nutriwell::logging::AppLogger;
use nutriwell::models::{NutritionTotals, UserProfile};
use serde_json::json;

type Result<T> = AppResult<T>;

/// Derive and print the dashboard metrics
pub fn show(
    profile: &UserProfile,
    totals: &NutritionTotals,
    meal_count: usize,
    config: &NutritionConfig,
    as_json: bool,
) -> Result<()> {
    let metrics = derive_metrics(profile, totals, config)?;
    let insights = generate_insights(&metrics, totals, &config.targets);
    AppLogger::log_metrics(
        metrics.calorie_goal,
        metrics.calorie_progress_pct,
        meal_count,
    );

    if as_json {
        let body = json!({
            "totals": totals,
            "metrics": metrics,
            "insights": insights,
        });
        let rendered = serde_json::to_string_pretty(&body)
            .map_err(|e| AppError::internal(format!("Failed to render metrics: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    let shown = metrics.display();
    println!("Metrics for {}", profile.name);
    println!("  BMR:            {:.0} kcal", metrics.bmr);
    println!("  TDEE:           {:.0} kcal", metrics.tdee);
    println!(
        "  BMI:            {:.1} ({})",
        metrics.bmi, metrics.bmi_category
    );
    println!(
        "  Calories:       {:.0} / {:.0} kcal ({:.0}%), {:.0} kcal remaining",
        totals.calories_kcal,
        metrics.calorie_goal,
        shown.calorie_progress_pct,
        metrics.remaining_calories(totals.calories_kcal)
    );
    println!(
        "  Protein:        {:.1} / {:.0} g ({:.0}%)",
        totals.protein_g, config.targets.protein_g, shown.macro_progress_pct.protein
    );
    println!(
        "  Carbs:          {:.1} / {:.0} g ({:.0}%)",
        totals.carbs_g, config.targets.carbs_g, shown.macro_progress_pct.carbs
    );
    println!(
        "  Fat:            {:.1} / {:.0} g ({:.0}%)",
        totals.fat_g, config.targets.fat_g, shown.macro_progress_pct.fat
    );
    println!(
        "  Fiber:          {:.1} / {:.0} g ({:.0}%)",
        totals.fiber_g, config.targets.fiber_g, shown.fiber_progress_pct
    );
    println!(
        "  Water:          {:.1} / {:.1} L ({:.0}%)",
        totals.water_l, config.targets.water_l, shown.hydration_progress_pct
    );
    println!("  Meals logged:   {meal_count} / {MEALS_PER_DAY}");

    if !insights.is_empty() {
        println!();
        println!("Insights:");
        for insight in &insights {
            println!("  [{:?}] {}: {}", insight.priority, insight.title, insight.message);
            if let Some(recommendation) = &insight.recommendation {
                println!("      {recommendation}");
            }
        }
    }
    Ok(())
}
