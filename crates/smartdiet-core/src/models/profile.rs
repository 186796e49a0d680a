// ABOUTME: User physiological profile consumed by every nutrition calculation
// ABOUTME: Sex, GoalCategory, ActivityLevel enums with lossy parsing and Profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Lowercase, trim, and fold separators so "Very Active", "very-active"
/// and "very_active" compare equal.
fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

/// Biological sex used by the BMR equation
///
/// Anything not recognized as male parses to `Female`, which selects the
/// female constant of the Mifflin-St Jeor equation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Sex {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant); fallback for unrecognized values
    Female,
}

impl Sex {
    /// Parse sex from string, falling back to `Female`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match normalize_token(s).as_str() {
            "male" | "m" | "man" | "homme" => Self::Male,
            _ => Self::Female,
        }
    }
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Stated nutrition goal; keys both the macro allocation and the meal catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum GoalCategory {
    /// Weight loss (calorie deficit)
    Lose,
    /// Weight gain (calorie surplus)
    Gain,
    /// Maintenance; fallback for unrecognized values
    #[default]
    Maintain,
}

impl GoalCategory {
    /// All categories in catalog order
    pub const ALL: [Self; 3] = [Self::Lose, Self::Gain, Self::Maintain];

    /// Parse goal from string, falling back to `Maintain`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match normalize_token(s).as_str() {
            "lose" | "loss" | "weight_loss" | "perte" => Self::Lose,
            "gain" | "weight_gain" | "muscle_gain" | "prise" => Self::Gain,
            _ => Self::Maintain,
        }
    }

    /// Canonical snake_case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Gain => "gain",
            Self::Maintain => "maintain",
        }
    }
}

impl From<String> for GoalCategory {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Activity level selecting the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Exercise 3-5 days/week; fallback for unrecognized values
    #[default]
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard daily training
    VeryActive,
}

impl ActivityLevel {
    /// Parse activity level from string, falling back to `Moderate`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match normalize_token(s).as_str() {
            "sedentary" | "sédentaire" | "sedentaire" => Self::Sedentary,
            "active" | "actif" => Self::Active,
            "very_active" | "très_actif" | "tres_actif" => Self::VeryActive,
            _ => Self::Moderate,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// User physiological profile
///
/// Owned by the profile store; the engine only reads it and recomputes every
/// derived value from it on each call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Biological sex for the BMR equation
    pub sex: Sex,
    /// Stated goal
    pub goal: GoalCategory,
    /// Activity level for the TDEE multiplier
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

impl Profile {
    /// Check the structural invariants the engine relies on
    ///
    /// The engine never calls this; store adapters do before accepting a profile.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if weight, height, or age is not positive
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be a positive number of kg"));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::invalid_input("Height must be a positive number of cm"));
        }
        if self.age_years == 0 {
            return Err(AppError::invalid_input("Age must be at least 1 year"));
        }
        Ok(())
    }
}
