// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default daily targets, display bounds, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list. Anything a deployment may want to tune lives in the
//! intelligence crate's `NutritionConfig` instead; these are its defaults.

/// Default daily nutrition targets
pub mod daily_targets {
    /// Daily protein target in grams
    pub const PROTEIN_G: f64 = 150.0;
    /// Daily carbohydrate target in grams
    pub const CARBS_G: f64 = 200.0;
    /// Daily fat target in grams
    pub const FAT_G: f64 = 65.0;
    /// Daily fiber target in grams
    pub const FIBER_G: f64 = 30.0;
    /// Daily water target in liters (8 glasses)
    pub const WATER_L: f64 = 2.0;
    /// Meals per day shown as "complete" on the dashboard
    pub const MEALS_PER_DAY: u32 = 5;
}

/// Percentage bounds used for display
pub mod percent {
    /// Lower display bound
    pub const MIN: f64 = 0.0;
    /// Upper display bound
    pub const MAX: f64 = 100.0;
}

/// Service names used in structured logging
pub mod service_names {
    /// Library / CLI service name
    pub const NUTRIWELL: &str = "nutriwell";
}
