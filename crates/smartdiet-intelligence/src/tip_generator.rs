// ABOUTME: Tip generator producing short prioritized guidance from recent intake
// ABOUTME: Evaluates logged protein against goal targets and suggests a next step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tip Generator
//!
//! Tips are produced in a fixed order and truncated to the configured limit:
//!
//! 1. hydration (always, high priority)
//! 2. protein (when average recent protein is below 80% of the goal)
//! 3. micronutrients (always)
//! 4. activity (sedentary profiles only)
//!
//! Generation order is display order. The `priority` field is informational
//! and is never used to re-sort the list.

use crate::config::intelligence::{IntelligenceConfig, TipText};
use crate::goal_allocator::{calorie_and_macro_goals, round_half_even, GoalTargets};
use serde::{Deserialize, Serialize};
use smartdiet_core::constants::tips::MAX_TIPS;
use smartdiet_core::models::{ActivityLevel, MealEntry, Profile};
use tracing::debug;

/// Display priority of a tip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TipPriority {
    /// Shown prominently
    High,
    /// Normal
    Medium,
    /// Nice to have
    Low,
}

/// A short guidance message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tip {
    /// Icon token understood by the client
    pub icon: String,
    /// Short heading
    pub title: String,
    /// Body text
    pub message: String,
    /// Display priority
    pub priority: TipPriority,
}

impl Tip {
    fn from_text(text: &TipText, priority: TipPriority) -> Self {
        Self {
            icon: text.icon.clone(),
            title: text.title.clone(),
            message: text.message.clone(),
            priority,
        }
    }
}

/// Suggested next action attached to every tip response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextStep {
    /// Heading
    pub title: String,
    /// Description with the remaining protein for today
    pub description: String,
    /// Call-to-action label
    pub action: String,
    /// Energy of the suggested item (kcal)
    pub calories: u32,
    /// Protein of the suggested item (g)
    pub protein_g: u32,
}

/// Tip generator output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthTips {
    /// Tips in display order
    pub tips: Vec<Tip>,
    /// Suggested next action
    pub next_step: NextStep,
    /// Targets the tips were evaluated against
    pub goals: GoalTargets,
}

/// Mean protein of the given meals, or 0 when there are none
fn average_protein(meals: &[MealEntry]) -> f64 {
    if meals.is_empty() {
        return 0.0;
    }
    let total: f64 = meals.iter().map(|m| m.protein_g).sum();
    total / meals.len() as f64
}

/// Generate tips for a profile from its recent meal window
#[must_use]
pub fn generate_tips(
    profile: &Profile,
    recent_meals: &[MealEntry],
    config: &IntelligenceConfig,
) -> HealthTips {
    let goals = calorie_and_macro_goals(profile, config);
    let tip_config = &config.tips;
    let messages = &tip_config.messages;
    let protein_goal = goals.protein_goal_g as f64;

    let mut tips = vec![Tip::from_text(&messages.hydration, TipPriority::High)];

    // zero meals leaves the average at 0 for the deficit below, but never triggers the tip
    let avg_protein = average_protein(recent_meals);
    if !recent_meals.is_empty() && avg_protein < tip_config.protein_tip_ratio * protein_goal {
        let mut tip = Tip::from_text(&messages.protein, TipPriority::Medium);
        tip.message = tip
            .message
            .replace("{protein_goal}", &goals.protein_goal_g.to_string());
        tips.push(tip);
    }

    tips.push(Tip::from_text(&messages.micronutrients, TipPriority::Medium));

    if profile.activity_level == ActivityLevel::Sedentary {
        tips.push(Tip::from_text(&messages.activity, TipPriority::Low));
    }

    // never more than three, even for a hand-built config that skipped validation
    tips.truncate(tip_config.max_tips.min(MAX_TIPS));

    let protein_deficit = round_half_even(protein_goal - avg_protein);
    let step = &tip_config.next_step;
    let next_step = NextStep {
        title: step.title.clone(),
        description: step
            .description
            .replace("{protein_deficit}", &protein_deficit.to_string()),
        action: step.action.clone(),
        calories: step.calories,
        protein_g: step.protein_g,
    };

    debug!(
        meals = recent_meals.len(),
        avg_protein, protein_deficit, tips = tips.len(), "Generated tips"
    );

    HealthTips {
        tips,
        next_step,
        goals,
    }
}
