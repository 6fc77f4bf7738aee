// ABOUTME: Rule-based nutrition assistant shared by the full-page and widget chat surfaces
// ABOUTME: Trigger tables, the response engine, chat sessions, and typing delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Assistant
//!
//! One [`ResponseEngine`] implementation serves both chat surfaces; each
//! surface injects its own [`TriggerTable`]. History and typing delay are
//! caller concerns handled by [`ChatSession`] and [`TypingDelay`].

/// Response engine
pub mod engine;
/// Trigger rules and tables
pub mod rules;
/// Chat history
pub mod session;
/// Numeric snapshot handed to templates
pub mod snapshot;
/// Chat surfaces
pub mod surface;
/// Built-in trigger tables
pub mod tables;
/// Simulated typing delay
pub mod typing;

pub use engine::{ResponseEngine, FALLBACK_RULE_ID};
pub use rules::{FallbackRule, TriggerRule, TriggerTable};
pub use session::ChatSession;
pub use snapshot::{NutritionSnapshot, ResponseContext};
pub use surface::ChatSurface;
pub use tables::{assistant_table, widget_table};
pub use typing::TypingDelay;
