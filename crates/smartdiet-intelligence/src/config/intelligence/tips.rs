// ABOUTME: Tip generator configuration for short-form nutrition guidance
// ABOUTME: Trigger thresholds, tip limit, message templates, and the next-step suggestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tip Generator Configuration
//!
//! Message templates may contain `{protein_goal}` (protein tip) and
//! `{protein_deficit}` (next-step description) placeholders.

use serde::{Deserialize, Serialize};
use smartdiet_core::constants::tips as defaults;

/// Tip Generator Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipConfig {
    /// Maximum tips returned, in generation order
    pub max_tips: usize,
    /// Average protein below `ratio * protein goal` triggers the protein tip
    pub protein_tip_ratio: f64,
    /// Tip texts
    pub messages: TipMessages,
    /// Suggested next action
    pub next_step: NextStepConfig,
}

/// Title and message for a single tip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipText {
    /// Icon token understood by the client
    pub icon: String,
    /// Short heading
    pub title: String,
    /// Body text
    pub message: String,
}

/// Texts for every tip the generator can emit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipMessages {
    /// Always emitted first
    pub hydration: TipText,
    /// Emitted when recent protein intake is low
    pub protein: TipText,
    /// Always emitted
    pub micronutrients: TipText,
    /// Emitted for sedentary profiles
    pub activity: TipText,
}

/// The next-step suggestion packaged with every tip response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NextStepConfig {
    /// Heading of the suggestion
    pub title: String,
    /// Description template
    pub description: String,
    /// Call-to-action label
    pub action: String,
    /// Energy of the suggested item (kcal)
    pub calories: u32,
    /// Protein of the suggested item (g)
    pub protein_g: u32,
}

fn tip_text(icon: &str, title: &str, message: &str) -> TipText {
    TipText {
        icon: icon.to_owned(),
        title: title.to_owned(),
        message: message.to_owned(),
    }
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            max_tips: defaults::MAX_TIPS,
            protein_tip_ratio: defaults::PROTEIN_TIP_RATIO,
            messages: TipMessages::default(),
            next_step: NextStepConfig::default(),
        }
    }
}

impl Default for TipMessages {
    fn default() -> Self {
        Self {
            hydration: tip_text("water_drop", "Hydration", "Drink 500ml of water now"),
            protein: tip_text(
                "spa",
                "Protein",
                "Increase your protein intake to {protein_goal}g/day",
            ),
            micronutrients: tip_text(
                "eco",
                "Micronutrients",
                "Add more leafy greens to your meals",
            ),
            activity: tip_text(
                "directions_walk",
                "Physical activity",
                "Try a 30-minute walk today",
            ),
        }
    }
}

impl Default for NextStepConfig {
    fn default() -> Self {
        Self {
            title: "Prepare a protein smoothie".to_owned(),
            description: "You need about {protein_deficit}g more protein to reach your goal today."
                .to_owned(),
            action: "View recipe".to_owned(),
            calories: defaults::SMOOTHIE_CALORIES,
            protein_g: defaults::SMOOTHIE_PROTEIN_G,
        }
    }
}
