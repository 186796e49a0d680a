// ABOUTME: NutritionEngine facade bundling configuration and the shared meal catalog
// ABOUTME: Stateless entry point for goals, recommendations, tips, progress and intake
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::IntelligenceConfig;
use crate::goal_allocator::{calorie_and_macro_goals, GoalTargets};
use crate::intake_summary::{summarize_day, DailyIntakeStats};
use crate::meal_catalog::MealCatalog;
use crate::meal_recommender;
use crate::progress_analyzer::{self, ProgressReport};
use crate::tip_generator::{self, HealthTips};
use chrono::NaiveDate;
use smartdiet_core::constants::catalog::SEARCH_LIMIT;
use smartdiet_core::models::{CatalogEntry, GoalCategory, MealEntry, Profile, WeightSample};
use std::sync::Arc;

/// Nutrition engine
///
/// Holds no per-user state. Every call takes the current profile and log
/// windows and recomputes its result, so one engine may be shared freely
/// between threads.
#[derive(Debug, Clone)]
pub struct NutritionEngine {
    config: IntelligenceConfig,
    catalog: Arc<MealCatalog>,
}

impl Default for NutritionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl NutritionEngine {
    /// Engine over the process-wide configuration and catalog
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: IntelligenceConfig::global().clone(),
            catalog: MealCatalog::global(),
        }
    }

    /// Engine over an explicit configuration and catalog
    #[must_use]
    pub const fn with_config(config: IntelligenceConfig, catalog: Arc<MealCatalog>) -> Self {
        Self { config, catalog }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Calorie and macro targets for a profile
    #[must_use]
    pub fn compute_goals(&self, profile: &Profile) -> GoalTargets {
        calorie_and_macro_goals(profile, &self.config)
    }

    /// Catalog suggestions for a goal category
    #[must_use]
    pub fn recommend_meals(&self, goal: GoalCategory) -> &[CatalogEntry] {
        meal_recommender::recommend_meals(&self.catalog, goal)
    }

    /// Catalog entries whose name contains `query`, ignoring case
    #[must_use]
    pub fn search_meals(&self, query: &str) -> Vec<&CatalogEntry> {
        self.catalog.search(query, SEARCH_LIMIT)
    }

    /// Tips from a recent meal window (newest first)
    #[must_use]
    pub fn generate_tips(&self, profile: &Profile, recent_meals: &[MealEntry]) -> HealthTips {
        tip_generator::generate_tips(profile, recent_meals, &self.config)
    }

    /// Weight trend and adherence from weight and meal windows (newest first)
    #[must_use]
    pub fn analyze_progress(
        &self,
        profile: &Profile,
        weight_logs: &[WeightSample],
        meals: &[MealEntry],
    ) -> ProgressReport {
        progress_analyzer::analyze_progress(profile, weight_logs, meals, &self.config)
    }

    /// Macro totals of the meals logged on `date`
    #[must_use]
    pub fn daily_intake(&self, date: NaiveDate, meals: &[MealEntry]) -> DailyIntakeStats {
        summarize_day(date, meals)
    }
}
