// ABOUTME: Intake summaries over logged meals and weights
// ABOUTME: Per-day macro totals and a compact history overview with computed goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::IntelligenceConfig;
use crate::goal_allocator::{calorie_and_macro_goals, GoalTargets};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smartdiet_core::models::{MealEntry, Profile, WeightSample};

/// Macro totals for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyIntakeStats {
    /// Day summarized (UTC)
    pub date: NaiveDate,
    /// Total energy (kcal)
    pub total_calories: f64,
    /// Total protein (g)
    pub total_protein_g: f64,
    /// Total carbohydrates (g)
    pub total_carbs_g: f64,
    /// Total fat (g)
    pub total_fat_g: f64,
    /// Meals counted
    pub meal_count: usize,
}

/// Overview of a user's recent history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSummary {
    /// Meals in the summary window
    pub total_meals: usize,
    /// Weight entries in the summary window
    pub total_weight_logs: usize,
    /// Weight from the current profile
    pub current_weight_kg: f64,
    /// Targets for the current profile
    pub goals: GoalTargets,
    /// Meals in the summary window
    pub recent_meals_count: usize,
}

/// Sum the meals logged on `date`; meals from other days are ignored
#[must_use]
pub fn summarize_day(date: NaiveDate, meals: &[MealEntry]) -> DailyIntakeStats {
    meals.iter().filter(|m| m.logged_on() == date).fold(
        DailyIntakeStats {
            date,
            total_calories: 0.0,
            total_protein_g: 0.0,
            total_carbs_g: 0.0,
            total_fat_g: 0.0,
            meal_count: 0,
        },
        |mut stats, meal| {
            stats.total_calories += meal.calories;
            stats.total_protein_g += meal.protein_g;
            stats.total_carbs_g += meal.carbs_g;
            stats.total_fat_g += meal.fat_g;
            stats.meal_count += 1;
            stats
        },
    )
}

/// Summarize the supplied history windows for a profile
#[must_use]
pub fn summarize_history(
    profile: &Profile,
    meals: &[MealEntry],
    weight_logs: &[WeightSample],
    config: &IntelligenceConfig,
) -> StatsSummary {
    StatsSummary {
        total_meals: meals.len(),
        total_weight_logs: weight_logs.len(),
        current_weight_kg: profile.weight_kg,
        goals: calorie_and_macro_goals(profile, config),
        recent_meals_count: meals.len(),
    }
}
