// ABOUTME: Chat turn and assistant reply types for the in-memory chat history
// ABOUTME: The assistant engine produces replies; callers wrap them into turns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who sent a chat turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// Message typed by the user
    User,
    /// Message produced by the assistant
    Assistant,
}

/// Assistant-side content of one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    /// Reply text (markdown-ish, rendered by the UI)
    pub content: String,
    /// Follow-up suggestions, in display order
    pub suggestions: Vec<String>,
}

/// One entry of a chat history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Sender
    pub role: ChatRole,
    /// Message text
    pub text: String,
    /// Follow-up suggestions (assistant turns only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    /// When the turn was appended
    pub sent_at: DateTime<Utc>,
}

impl ChatTurn {
    /// Turn typed by the user
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            suggestions: Vec::new(),
            sent_at: Utc::now(),
        }
    }

    /// Turn produced by the assistant
    #[must_use]
    pub fn assistant(reply: AssistantReply) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: reply.content,
            suggestions: reply.suggestions,
            sent_at: Utc::now(),
        }
    }
}
