// ABOUTME: In-memory chat history owned by the caller of the response engine
// ABOUTME: Rejects empty input, then appends the user turn and the assistant turn
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::engine::ResponseEngine;
use super::snapshot::ResponseContext;
use super::surface::ChatSurface;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use nutriwell_core::models::{AssistantReply, ChatTurn};

/// Ordered conversation on one chat surface
#[derive(Debug, Clone)]
pub struct ChatSession {
    surface: ChatSurface,
    engine: ResponseEngine,
    turns: Vec<ChatTurn>,
}

impl ChatSession {
    /// Start a conversation with the surface's greeting as the first turn
    #[must_use]
    pub fn new(surface: ChatSurface, user_name: &str) -> Self {
        let greeting = AssistantReply {
            content: surface.greeting(user_name),
            suggestions: Vec::new(),
        };
        Self {
            surface,
            engine: surface.engine(),
            turns: vec![ChatTurn::assistant(greeting)],
        }
    }

    /// Surface this session runs on
    #[must_use]
    pub const fn surface(&self) -> ChatSurface {
        self.surface
    }

    /// History, oldest first
    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Quick questions are only offered until the user says something
    #[must_use]
    pub fn quick_questions(&self) -> &'static [&'static str] {
        if self.turns.len() == 1 {
            self.surface.quick_questions()
        } else {
            &[]
        }
    }

    /// Send one utterance and record the exchange
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` for empty or whitespace-only input;
    /// the history is left unchanged in that case
    pub fn send(&mut self, utterance: &str, ctx: &ResponseContext<'_>) -> AppResult<&ChatTurn> {
        if utterance.trim().is_empty() {
            return Err(AppError::invalid_input("message must not be empty"));
        }

        let reply = self.engine.respond(utterance, ctx);
        AppLogger::log_assistant_reply(
            self.surface.as_str(),
            self.engine.classify(utterance),
            reply.suggestions.len(),
        );

        self.turns.push(ChatTurn::user(utterance));
        self.turns.push(ChatTurn::assistant(reply));
        self.turns
            .last()
            .ok_or_else(|| AppError::internal("chat history unexpectedly empty"))
    }
}
