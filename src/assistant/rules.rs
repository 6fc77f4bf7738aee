// ABOUTME: Trigger rules and ordered trigger tables driving the response engine
// ABOUTME: Rules match by substring containment; table order decides precedence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::snapshot::ResponseContext;
use crate::errors::{AppError, AppResult};
use std::collections::HashSet;
use std::fmt;

/// Renders a matched rule's reply text
pub type RenderFn = fn(&ResponseContext<'_>) -> String;

/// Renders the fallback reply; receives the raw utterance
pub type FallbackRenderFn = fn(&str, &ResponseContext<'_>) -> String;

/// Smallest number of follow-up suggestions a reply may carry
pub const MIN_SUGGESTIONS: usize = 2;

/// Largest number of follow-up suggestions a reply may carry
pub const MAX_SUGGESTIONS: usize = 3;

/// One entry of a trigger table
#[derive(Clone, Copy)]
pub struct TriggerRule {
    /// Stable identifier used in logs and tests
    pub id: &'static str,
    /// Lowercase fragments; any one contained in the utterance is a match
    pub triggers: &'static [&'static str],
    /// Template producing the reply text
    pub render: RenderFn,
    /// Fixed follow-up suggestions, in display order
    pub suggestions: &'static [&'static str],
}

impl TriggerRule {
    /// Whether a normalized utterance contains any trigger fragment
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers
            .iter()
            .any(|trigger| normalized.contains(trigger))
    }
}

impl fmt::Debug for TriggerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerRule")
            .field("id", &self.id)
            .field("triggers", &self.triggers)
            .field("suggestions", &self.suggestions)
            .finish_non_exhaustive()
    }
}

/// Reply used when no rule matches
#[derive(Clone, Copy)]
pub struct FallbackRule {
    /// Template producing the reply text
    pub render: FallbackRenderFn,
    /// Fixed follow-up suggestions, in display order
    pub suggestions: &'static [&'static str],
}

impl fmt::Debug for FallbackRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackRule")
            .field("suggestions", &self.suggestions)
            .finish_non_exhaustive()
    }
}

/// Ordered rules plus a fallback; the first matching rule wins
#[derive(Debug, Clone)]
pub struct TriggerTable {
    name: &'static str,
    rules: Vec<TriggerRule>,
    fallback: FallbackRule,
}

impl TriggerTable {
    /// Build a table; rule order is significant
    #[must_use]
    pub fn new(name: &'static str, rules: Vec<TriggerRule>, fallback: FallbackRule) -> Self {
        Self {
            name,
            rules,
            fallback,
        }
    }

    /// Table name used in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Rules in precedence order
    #[must_use]
    pub fn rules(&self) -> &[TriggerRule] {
        &self.rules
    }

    /// Fallback rule
    #[must_use]
    pub const fn fallback(&self) -> &FallbackRule {
        &self.fallback
    }

    /// First rule matching a normalized utterance
    #[must_use]
    pub fn find(&self, normalized: &str) -> Option<&TriggerRule> {
        self.rules.iter().find(|rule| rule.matches(normalized))
    }

    /// Check the table is well formed
    ///
    /// Every rule needs a unique id, at least one non-empty lowercase
    /// trigger, and 2 to 3 suggestions; the fallback needs 2 to 3 suggestions.
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` describing the first problem found
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.id) {
                return Err(AppError::invalid_input(format!(
                    "table '{}' has duplicate rule id '{}'",
                    self.name, rule.id
                )));
            }
            if rule.triggers.is_empty() {
                return Err(AppError::invalid_input(format!(
                    "rule '{}' has no triggers",
                    rule.id
                )));
            }
            if let Some(bad) = rule
                .triggers
                .iter()
                .find(|t| t.trim().is_empty() || t.to_lowercase() != **t)
            {
                return Err(AppError::invalid_input(format!(
                    "rule '{}' has trigger '{bad}' that is empty or not lowercase",
                    rule.id
                )));
            }
            check_suggestion_count(rule.id, rule.suggestions.len())?;
        }
        check_suggestion_count("fallback", self.fallback.suggestions.len())
    }
}

fn check_suggestion_count(id: &str, count: usize) -> AppResult<()> {
    if (MIN_SUGGESTIONS..=MAX_SUGGESTIONS).contains(&count) {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "rule '{id}' has {count} suggestions, expected {MIN_SUGGESTIONS} to {MAX_SUGGESTIONS}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_nothing(_: &ResponseContext<'_>) -> String {
        String::new()
    }

    fn fallback_nothing(_: &str, _: &ResponseContext<'_>) -> String {
        String::new()
    }

    const FALLBACK: FallbackRule = FallbackRule {
        render: fallback_nothing,
        suggestions: &["a", "b"],
    };

    fn rule(id: &'static str, triggers: &'static [&'static str]) -> TriggerRule {
        TriggerRule {
            id,
            triggers,
            render: render_nothing,
            suggestions: &["one", "two", "three"],
        }
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let table = TriggerTable::new(
            "test",
            vec![rule("first", &["plan"]), rule("second", &["meal plan"])],
            FALLBACK,
        );
        assert_eq!(table.find("give me a meal plan").map(|r| r.id), Some("first"));
        assert!(table.find("nothing here").is_none());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let table = TriggerTable::new("test", vec![rule("a", &["x"]), rule("a", &["y"])], FALLBACK);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_uppercase_trigger() {
        let table = TriggerTable::new("test", vec![rule("a", &["Breakfast"])], FALLBACK);
        let err = table.validate().unwrap_err();
        assert!(err.message.contains("Breakfast"));
    }

    #[test]
    fn test_validate_rejects_too_many_suggestions() {
        let mut noisy = rule("a", &["x"]);
        noisy.suggestions = &["1", "2", "3", "4"];
        let table = TriggerTable::new("test", vec![noisy], FALLBACK);
        assert!(table.validate().is_err());
    }
}
