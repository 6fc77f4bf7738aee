// ABOUTME: Rule-based response engine mapping an utterance and snapshot to a canned reply
// ABOUTME: Total over all input strings; first matching trigger rule wins, else the fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Response Engine
//!
//! The engine is a pure function of `(utterance, snapshot, profile)`. It keeps
//! no history and never recomputes metrics; callers pass in what they have
//! already derived. Callers are expected to reject empty utterances before
//! calling, though the engine still answers them with the fallback.

use super::rules::{TriggerRule, TriggerTable};
use super::snapshot::ResponseContext;
use crate::errors::AppResult;
use nutriwell_core::models::AssistantReply;
use tracing::debug;

/// Id reported by [`ResponseEngine::classify`] when no rule matches
pub const FALLBACK_RULE_ID: &str = "fallback";

/// Rule-based responder parameterized by a trigger table
#[derive(Debug, Clone)]
pub struct ResponseEngine {
    table: TriggerTable,
}

impl ResponseEngine {
    /// Create an engine over a table
    #[must_use]
    pub const fn new(table: TriggerTable) -> Self {
        Self { table }
    }

    /// Create an engine after validating the table
    ///
    /// # Errors
    ///
    /// Returns an error if the table is malformed
    pub fn try_new(table: TriggerTable) -> AppResult<Self> {
        table.validate()?;
        Ok(Self::new(table))
    }

    /// Table this engine answers from
    #[must_use]
    pub const fn table(&self) -> &TriggerTable {
        &self.table
    }

    /// Trim and case-fold an utterance for matching
    #[must_use]
    pub fn normalize(utterance: &str) -> String {
        utterance.trim().to_lowercase()
    }

    /// Rule that would answer an utterance, `None` for the fallback
    #[must_use]
    pub fn matching_rule(&self, utterance: &str) -> Option<&TriggerRule> {
        self.table.find(&Self::normalize(utterance))
    }

    /// Id of the rule that would answer an utterance
    #[must_use]
    pub fn classify(&self, utterance: &str) -> &'static str {
        self.matching_rule(utterance)
            .map_or(FALLBACK_RULE_ID, |rule| rule.id)
    }

    /// Produce the reply for one utterance
    #[must_use]
    pub fn respond(&self, utterance: &str, ctx: &ResponseContext<'_>) -> AssistantReply {
        if let Some(rule) = self.matching_rule(utterance) {
            debug!(table = self.table.name(), rule = rule.id, "trigger matched");
            return AssistantReply {
                content: (rule.render)(ctx),
                suggestions: to_owned_list(rule.suggestions),
            };
        }

        debug!(table = self.table.name(), "no trigger matched, using fallback");
        let fallback = self.table.fallback();
        AssistantReply {
            content: (fallback.render)(utterance, ctx),
            suggestions: to_owned_list(fallback.suggestions),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
