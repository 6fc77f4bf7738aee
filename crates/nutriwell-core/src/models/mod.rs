// ABOUTME: Domain models shared by the metrics and assistant engines
// ABOUTME: Re-exports profile, nutrition, and conversation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Chat turn types
pub mod conversation;
/// Meals and nutrition totals
pub mod nutrition;
/// User profile, activity level, and goals
pub mod profile;

pub use conversation::{AssistantReply, ChatRole, ChatTurn};
pub use nutrition::{Meal, MealType, NutritionTotals};
pub use profile::{ActivityLevel, HealthGoal, UserProfile};
