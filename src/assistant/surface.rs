// ABOUTME: The two chat surfaces sharing the response engine
// ABOUTME: Each surface picks its trigger table, greeting, quick questions, and typing delay
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::engine::ResponseEngine;
use super::rules::TriggerTable;
use super::tables::{assistant_table, widget_table};
use super::typing::TypingDelay;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the conversation is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSurface {
    /// Dedicated assistant page
    #[default]
    FullPage,
    /// Floating chat bubble shown on every page
    Widget,
}

impl ChatSurface {
    /// Wire name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullPage => "full_page",
            Self::Widget => "widget",
        }
    }

    /// Trigger table for this surface
    #[must_use]
    pub fn table(&self) -> TriggerTable {
        match self {
            Self::FullPage => assistant_table(),
            Self::Widget => widget_table(),
        }
    }

    /// Engine answering on this surface
    #[must_use]
    pub fn engine(&self) -> ResponseEngine {
        ResponseEngine::new(self.table())
    }

    /// Opening message shown before the first user turn
    #[must_use]
    pub fn greeting(&self, name: &str) -> String {
        let name = if name.trim().is_empty() {
            "there"
        } else {
            name.trim()
        };
        match self {
            Self::FullPage => format!(
                "Hi {name}! I'm your AI nutrition assistant. I can help you with meal planning, \
                 nutrition advice, and health tips. What would you like to know today?"
            ),
            Self::Widget => format!(
                "Hi {name}! 👋 I'm your AI nutrition assistant. I can help you with:\n\n\
                 • Meal planning suggestions\n\
                 • Nutrition advice\n\
                 • Calorie tracking tips\n\
                 • Healthy recipe ideas\n\
                 • Dietary recommendations\n\n\
                 What would you like to know today?"
            ),
        }
    }

    /// One-tap questions offered before the conversation starts
    #[must_use]
    pub const fn quick_questions(&self) -> &'static [&'static str] {
        match self {
            Self::FullPage => &[
                "What should I eat for breakfast?",
                "How can I increase my protein intake?",
                "What's a good post-workout meal?",
                "How many calories should I eat?",
                "Give me meal prep ideas",
            ],
            Self::Widget => &[
                "Suggest a healthy breakfast",
                "How many calories should I eat?",
                "Give me a meal plan for today",
                "What's a good post-workout snack?",
                "Help me track my water intake",
            ],
        }
    }

    /// Simulated typing delay for this surface
    #[must_use]
    pub const fn typing_delay(&self) -> TypingDelay {
        match self {
            Self::FullPage => TypingDelay::FULL_PAGE,
            Self::Widget => TypingDelay::WIDGET,
        }
    }
}

impl fmt::Display for ChatSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatSurface {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "full_page" | "assistant" | "page" => Ok(Self::FullPage),
            "widget" | "floating" => Ok(Self::Widget),
            other => Err(AppError::invalid_input(format!(
                "unknown chat surface '{other}' (expected full_page or widget)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_quick_question_hits_a_rule() {
        for surface in [ChatSurface::FullPage, ChatSurface::Widget] {
            let engine = surface.engine();
            for question in surface.quick_questions() {
                assert!(
                    engine.matching_rule(question).is_some(),
                    "{surface}: '{question}' fell through to the fallback"
                );
            }
        }
    }

    #[test]
    fn test_parse_surface() {
        assert_eq!("widget".parse::<ChatSurface>().unwrap(), ChatSurface::Widget);
        assert_eq!("Full-Page".parse::<ChatSurface>().unwrap(), ChatSurface::FullPage);
        assert!("sidebar".parse::<ChatSurface>().is_err());
    }

    #[test]
    fn test_greeting_defaults_name() {
        assert!(ChatSurface::Widget.greeting("  ").starts_with("Hi there!"));
        assert!(ChatSurface::FullPage.greeting("Ana").starts_with("Hi Ana!"));
    }
}
