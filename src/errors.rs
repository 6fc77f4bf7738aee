// ABOUTME: Unified error handling re-exported from nutriwell-core
// ABOUTME: Single import path for AppError, ErrorCode, and the metrics validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Error types live in `nutriwell-core` so the intelligence crate can share
//! them; this module re-exports them for the application layer.

pub use nutriwell_core::errors::{AppError, AppResult, ErrorCode, MetricsError};
