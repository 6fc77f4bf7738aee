// ABOUTME: User profile model with activity level and health goal enums
// ABOUTME: Read-only input to the metrics and assistant engines, validated per call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::MetricsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Activity level used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::VeryActive,
    ];

    /// Wire name of the level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        }
    }

    /// Label shown next to the level in a profile form
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary (little or no exercise)",
            Self::Light => "Lightly active (1-3 days/week)",
            Self::Moderate => "Moderately active (3-5 days/week)",
            Self::Active => "Very active (6-7 days/week)",
            Self::VeryActive => "Extremely active (physical job + exercise)",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very_active" => Ok(Self::VeryActive),
            _ => Err(MetricsError::InvalidActivityLevel(s.to_owned())),
        }
    }
}

/// Health goal selected on the profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    /// Lose body weight
    WeightLoss,
    /// Build muscle
    MuscleGain,
    /// Keep current weight
    Maintenance,
    /// General health improvement
    ImproveHealth,
    /// More day-to-day energy
    IncreaseEnergy,
}

impl HealthGoal {
    /// Wire name of the goal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
            Self::ImproveHealth => "improve_health",
            Self::IncreaseEnergy => "increase_energy",
        }
    }

    /// Phrase used inside assistant replies
    #[must_use]
    pub const fn phrase(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
            Self::Maintenance => "maintaining your weight",
            Self::ImproveHealth => "better overall health",
            Self::IncreaseEnergy => "more energy",
        }
    }
}

impl FromStr for HealthGoal {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "weight_loss" => Ok(Self::WeightLoss),
            "muscle_gain" => Ok(Self::MuscleGain),
            "maintenance" => Ok(Self::Maintenance),
            "improve_health" => Ok(Self::ImproveHealth),
            "increase_energy" => Ok(Self::IncreaseEnergy),
            other => Err(MetricsError::malformed_profile(format!(
                "unknown goal '{other}'"
            ))),
        }
    }
}

/// User profile owned by the auth/profile collaborator
///
/// The engines treat it as an immutable value passed in on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Selected health goals
    #[serde(default)]
    pub goals: BTreeSet<HealthGoal>,
    /// Free-form dietary restrictions ("vegetarian", "gluten-free", ...)
    #[serde(default)]
    pub dietary_restrictions: BTreeSet<String>,
}

/// Wire shape accepted by [`UserProfile::from_json`] before validation
#[derive(Debug, Deserialize)]
struct RawUserProfile {
    name: Option<String>,
    age: Option<f64>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    activity_level: Option<String>,
    #[serde(default)]
    goals: Vec<String>,
    #[serde(default)]
    dietary_restrictions: Vec<String>,
}

impl UserProfile {
    /// Create a profile with no goals or restrictions
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            weight_kg,
            height_cm,
            activity_level,
            goals: BTreeSet::new(),
            dietary_restrictions: BTreeSet::new(),
        }
    }

    /// Add a goal (builder style)
    #[must_use]
    pub fn with_goal(mut self, goal: HealthGoal) -> Self {
        self.goals.insert(goal);
        self
    }

    /// Add a dietary restriction (builder style)
    #[must_use]
    pub fn with_restriction(mut self, restriction: impl Into<String>) -> Self {
        self.dietary_restrictions.insert(restriction.into());
        self
    }

    /// Check that every numeric field is present and positive
    ///
    /// # Errors
    ///
    /// Returns `MetricsError::MalformedProfile` naming the first offending field
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.age == 0 {
            return Err(MetricsError::malformed_profile("age must be positive"));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(MetricsError::malformed_profile(
                "weight_kg must be a positive number",
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(MetricsError::malformed_profile(
                "height_cm must be a positive number",
            ));
        }
        Ok(())
    }

    /// Parse and validate a profile from JSON
    ///
    /// # Errors
    ///
    /// - `MetricsError::MalformedProfile` when the JSON is invalid, a required
    ///   numeric field is missing, or a value fails validation
    /// - `MetricsError::InvalidActivityLevel` when the activity level is unknown
    pub fn from_json(json: &str) -> Result<Self, MetricsError> {
        let raw: RawUserProfile = serde_json::from_str(json)
            .map_err(|e| MetricsError::malformed_profile(e.to_string()))?;

        let age = raw
            .age
            .ok_or_else(|| MetricsError::malformed_profile("missing field 'age'"))?;
        if age.fract().abs() > f64::EPSILON || age < 1.0 || age > f64::from(u32::MAX) {
            return Err(MetricsError::malformed_profile(
                "age must be a positive whole number",
            ));
        }
        let weight_kg = raw
            .weight_kg
            .ok_or_else(|| MetricsError::malformed_profile("missing field 'weight_kg'"))?;
        let height_cm = raw
            .height_cm
            .ok_or_else(|| MetricsError::malformed_profile("missing field 'height_cm'"))?;
        let activity_level = raw
            .activity_level
            .ok_or_else(|| MetricsError::malformed_profile("missing field 'activity_level'"))?
            .parse::<ActivityLevel>()?;
        let goals = raw
            .goals
            .iter()
            .map(|g| g.parse::<HealthGoal>())
            .collect::<Result<BTreeSet<_>, _>>()?;

        let profile = Self {
            name: raw.name.unwrap_or_default(),
            age: age as u32,
            weight_kg,
            height_cm,
            activity_level,
            goals,
            dietary_restrictions: raw
                .dietary_restrictions
                .into_iter()
                .map(|r| r.trim().to_lowercase())
                .filter(|r| !r.is_empty() && r != "none")
                .collect(),
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Goals joined for prose ("weight loss and muscle gain")
    #[must_use]
    pub fn goals_phrase(&self) -> Option<String> {
        let phrases: Vec<&str> = self.goals.iter().map(HealthGoal::phrase).collect();
        match phrases.as_slice() {
            [] => None,
            [only] => Some((*only).to_owned()),
            [init @ .., last] => Some(format!("{} and {last}", init.join(", "))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_level_parse_accepts_known_levels() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.as_str().parse::<ActivityLevel>().unwrap(), level);
        }
        assert_eq!(
            "Very-Active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );
    }

    #[test]
    fn test_activity_level_parse_rejects_unknown() {
        let err = "couch_potato".parse::<ActivityLevel>().unwrap_err();
        assert_eq!(
            err,
            MetricsError::InvalidActivityLevel("couch_potato".to_owned())
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_fields() {
        let mut profile = UserProfile::new("Ana", 30, 70.0, 175.0, ActivityLevel::Moderate);
        assert!(profile.validate().is_ok());

        profile.weight_kg = 0.0;
        assert!(matches!(
            profile.validate(),
            Err(MetricsError::MalformedProfile(_))
        ));

        profile.weight_kg = 70.0;
        profile.height_cm = f64::NAN;
        assert!(matches!(
            profile.validate(),
            Err(MetricsError::MalformedProfile(_))
        ));

        profile.height_cm = 175.0;
        profile.age = 0;
        assert!(matches!(
            profile.validate(),
            Err(MetricsError::MalformedProfile(_))
        ));
    }

    #[test]
    fn test_from_json_missing_weight_is_malformed() {
        let json = r#"{"name":"Ana","age":30,"height_cm":175,"activity_level":"light"}"#;
        let err = UserProfile::from_json(json).unwrap_err();
        assert_eq!(
            err,
            MetricsError::malformed_profile("missing field 'weight_kg'")
        );
    }

    #[test]
    fn test_from_json_unknown_activity_level() {
        let json = r#"{"name":"Ana","age":30,"weight_kg":70,"height_cm":175,"activity_level":"extreme"}"#;
        let err = UserProfile::from_json(json).unwrap_err();
        assert!(matches!(err, MetricsError::InvalidActivityLevel(level) if level == "extreme"));
    }

    #[test]
    fn test_from_json_normalizes_restrictions() {
        let json = r#"{
            "name": "Ana", "age": 30, "weight_kg": 70, "height_cm": 175,
            "activity_level": "moderate",
            "goals": ["weight_loss", "muscle_gain"],
            "dietary_restrictions": ["Vegetarian", "none", ""]
        }"#;
        let profile = UserProfile::from_json(json).unwrap();
        assert_eq!(profile.goals.len(), 2);
        assert_eq!(
            profile.dietary_restrictions.iter().collect::<Vec<_>>(),
            vec!["vegetarian"]
        );
    }

    #[test]
    fn test_goals_phrase() {
        let profile = UserProfile::new("Ana", 30, 70.0, 175.0, ActivityLevel::Light);
        assert_eq!(profile.goals_phrase(), None);

        let profile = profile
            .with_goal(HealthGoal::MuscleGain)
            .with_goal(HealthGoal::WeightLoss);
        assert_eq!(
            profile.goals_phrase().as_deref(),
            Some("weight loss and muscle gain")
        );

        let profile = profile.with_goal(HealthGoal::IncreaseEnergy);
        assert_eq!(
            profile.goals_phrase().as_deref(),
            Some("weight loss, muscle gain and more energy")
        );
    }
}
