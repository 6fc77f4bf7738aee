// ABOUTME: Application configuration loaded from environment variables
// ABOUTME: Logging, default chat surface, typing simulation, and nutrition targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::assistant::ChatSurface;
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use nutriwell_intelligence::NutritionConfig;
use std::env;

/// Default chat surface for `nutriwell-cli chat`
pub const CHAT_SURFACE_VAR: &str = "NUTRIWELL_CHAT_SURFACE";

/// Whether `nutriwell-cli chat` waits before printing replies
pub const SIMULATE_TYPING_VAR: &str = "NUTRIWELL_SIMULATE_TYPING";

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logging setup
    pub logging: LoggingConfig,
    /// Nutrition engine configuration
    pub nutrition: NutritionConfig,
    /// Surface used when none is given on the command line
    pub chat_surface: ChatSurface,
    /// Apply the surface's typing delay before showing replies
    pub simulate_typing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            nutrition: NutritionConfig::default(),
            chat_surface: ChatSurface::default(),
            simulate_typing: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable holds an invalid value
    pub fn from_env() -> AppResult<Self> {
        let chat_surface = match env::var(CHAT_SURFACE_VAR) {
            Ok(raw) => raw.parse::<ChatSurface>().map_err(|e| {
                AppError::config(format!("Invalid {CHAT_SURFACE_VAR} value: {}", e.message))
            })?,
            Err(_) => ChatSurface::default(),
        };

        let simulate_typing = match env::var(SIMULATE_TYPING_VAR) {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::config(format!("Invalid {SIMULATE_TYPING_VAR} value: '{raw}'"))
            })?,
            Err(_) => true,
        };

        Ok(Self {
            logging: LoggingConfig::from_env(),
            nutrition: NutritionConfig::load()?,
            chat_surface,
            simulate_typing,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
