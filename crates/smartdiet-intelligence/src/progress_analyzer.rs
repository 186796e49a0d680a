// ABOUTME: Progress analyzer classifying weight trend and calorie adherence
// ABOUTME: Works on bounded, newest-first windows of weight and meal logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress Analyzer
//!
//! The weight trend starts as [`WeightTrend::Stable`] and only changes when
//! the goal-aligned change exceeds the threshold. A change outside the stable
//! band that does not match the goal (gaining while trying to lose) keeps the
//! `Stable` default; there is no separate "off track" value.

use crate::config::intelligence::IntelligenceConfig;
use crate::goal_allocator::calorie_and_macro_goals;
use serde::{Deserialize, Serialize};
use smartdiet_core::models::{GoalCategory, MealEntry, Profile, WeightSample};
use tracing::debug;

/// Weight trend classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightTrend {
    /// Moving in the goal's direction by more than the threshold
    Excellent,
    /// Everything else, including too few samples
    #[default]
    Stable,
}

/// Progress over the analyzed windows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressReport {
    /// Weight trend classification
    pub weight_trend: WeightTrend,
    /// Newest minus oldest weight in the window (kg)
    pub weight_change_kg: Option<f64>,
    /// Average calories as a percentage of the calorie goal, at most 100
    pub calorie_adherence_pct: f64,
    /// Not computed; always 0
    pub protein_adherence_pct: f64,
    /// Not computed; always 0
    pub consistency_score: f64,
    /// Not computed; always empty
    pub recommendations: Vec<String>,
}

/// Analyze weight trend and calorie adherence
///
/// `weight_logs` must be newest first: the first element is the latest
/// measurement and the last element the oldest in the window.
#[must_use]
pub fn analyze_progress(
    profile: &Profile,
    weight_logs: &[WeightSample],
    meals: &[MealEntry],
    config: &IntelligenceConfig,
) -> ProgressReport {
    let goals = calorie_and_macro_goals(profile, config);
    let progress = &config.progress;

    let mut weight_trend = WeightTrend::default();
    let mut weight_change_kg = None;

    if weight_logs.len() >= progress.min_weight_samples {
        if let (Some(newest), Some(oldest)) = (weight_logs.first(), weight_logs.last()) {
            let delta = newest.weight_kg - oldest.weight_kg;
            let threshold = progress.trend_threshold_kg;
            weight_change_kg = Some(delta);

            let goal_reached = match profile.goal {
                GoalCategory::Lose => delta < -threshold,
                GoalCategory::Gain => delta > threshold,
                GoalCategory::Maintain => false,
            };
            if goal_reached {
                weight_trend = WeightTrend::Excellent;
            } else if delta.abs() < threshold {
                weight_trend = WeightTrend::Stable;
            }
        }
    }

    let calorie_adherence_pct = if meals.is_empty() {
        0.0
    } else {
        let total: f64 = meals.iter().map(|m| m.calories).sum();
        let avg_calories = total / meals.len() as f64;
        // a zero goal yields inf or NaN, and f64::min returns the ceiling for both
        (avg_calories / goals.calorie_goal as f64 * 100.0).min(progress.max_adherence_percent)
    };

    debug!(
        weights = weight_logs.len(),
        meals = meals.len(),
        trend = ?weight_trend,
        calorie_adherence_pct,
        "Analyzed progress"
    );

    ProgressReport {
        weight_trend,
        weight_change_kg,
        calorie_adherence_pct,
        protein_adherence_pct: 0.0,
        consistency_score: 0.0,
        recommendations: Vec::new(),
    }
}
