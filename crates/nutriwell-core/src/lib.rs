// ABOUTME: Core types and constants for the Nutriwell nutrition engines
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutriwell Core
//!
//! Foundation crate providing shared types and constants for the Nutriwell
//! metrics and assistant engines. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `MetricsError`
//! - **constants**: Default nutrition targets and service names
//! - **models**: User profile, meals, nutrition totals, and chat turns

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`UserProfile`, `Meal`, `NutritionTotals`, `ChatTurn`)
pub mod models;
