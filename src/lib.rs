// ABOUTME: Main library entry point for the nutriwell nutrition and wellness core
// ABOUTME: Response engine, chat surfaces, meal catalog and planner, consultation booking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriwell
//!
//! Core of a nutrition and wellness app: everything that turns a user profile
//! and a meal list into numbers or text. Persistence, authentication, and UI
//! are external collaborators; nothing here performs network I/O.
//!
//! ## Architecture
//!
//! - **`nutriwell-core`**: errors, constants, and domain models
//! - **`nutriwell-intelligence`**: the metrics engine (BMR, TDEE, BMI,
//!   progress) and nutrition insights
//! - **Assistant**: rule-based response engine shared by two chat surfaces
//! - **Meals**: food catalog, meal suggestions, and weekly planner
//! - **Consultation**: mock doctor directory and booking
//!
//! ## Example Usage
//!
//! ```rust
//! use nutriwell::assistant::{ChatSurface, NutritionSnapshot, ResponseContext};
//! use nutriwell::intelligence::{derive_metrics, NutritionConfig};
//! use nutriwell::models::{ActivityLevel, NutritionTotals, UserProfile};
//!
//! # fn main() -> nutriwell::errors::AppResult<()> {
//! let config = NutritionConfig::default();
//! let profile = UserProfile::new("Ana", 30, 70.0, 175.0, ActivityLevel::Moderate);
//! let totals = NutritionTotals::default();
//! let metrics = derive_metrics(&profile, &totals, &config)?;
//!
//! let snapshot = NutritionSnapshot::new(&totals, &metrics, &config.targets);
//! let ctx = ResponseContext::new(&snapshot, &profile);
//! let reply = ChatSurface::FullPage
//!     .engine()
//!     .respond("What should I eat for breakfast?", &ctx);
//! assert_eq!(reply.suggestions.len(), 3);
//! # Ok(())
//! # }
//! ```

/// Rule-based nutrition assistant
pub mod assistant;

/// Application configuration
pub mod config;

/// Doctor directory and consultation booking
pub mod consultation;

/// Unified error handling
pub mod errors;

/// Logging configuration and structured events
pub mod logging;

/// Food catalog, meal suggestions, and weekly planner
pub mod meals;

pub use nutriwell_core::constants;
pub use nutriwell_core::models;
pub use nutriwell_intelligence as intelligence;
