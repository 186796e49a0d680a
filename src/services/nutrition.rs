// ABOUTME: Nutrition service fetching profiles and log windows and delegating to the engine
// ABOUTME: Protocol-agnostic entry point for goals, recommendations, tips, progress and stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServiceConfig;
use crate::stores::NutritionStore;
use chrono::NaiveDate;
use smartdiet_core::errors::{AppError, AppResult};
use smartdiet_core::models::{CatalogEntry, Profile};
use smartdiet_intelligence::intake_summary::summarize_history;
use smartdiet_intelligence::{
    DailyIntakeStats, GoalTargets, HealthTips, NutritionEngine, ProgressReport, StatsSummary,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Nutrition service over a store
///
/// Each call reads the current profile, fetches the windows it needs, and
/// recomputes from scratch. Nothing is cached between calls.
pub struct NutritionService<S> {
    store: Arc<S>,
    engine: NutritionEngine,
    config: ServiceConfig,
}

impl<S: NutritionStore> NutritionService<S> {
    /// Create a service with an explicit engine and window configuration
    #[must_use]
    pub const fn new(store: Arc<S>, engine: NutritionEngine, config: ServiceConfig) -> Self {
        Self {
            store,
            engine,
            config,
        }
    }

    /// Engine in use
    #[must_use]
    pub const fn engine(&self) -> &NutritionEngine {
        &self.engine
    }

    async fn profile(&self, user_id: Uuid) -> AppResult<Profile> {
        self.store
            .get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile").with_user_id(user_id))
    }

    /// Calorie and macro targets for a user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user, or a store error
    pub async fn goals(&self, user_id: Uuid) -> AppResult<GoalTargets> {
        info!(user.id = %user_id, "Computing goals");
        let profile = self.profile(user_id).await?;
        Ok(self.engine.compute_goals(&profile))
    }

    /// Meal suggestions for a user's goal
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user, or a store error
    pub async fn recommendations(&self, user_id: Uuid) -> AppResult<Vec<CatalogEntry>> {
        info!(user.id = %user_id, "Fetching meal recommendations");
        let profile = self.profile(user_id).await?;
        Ok(self.engine.recommend_meals(profile.goal).to_vec())
    }

    /// Tips from the user's most recent meals
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user, or a store error
    pub async fn health_tips(&self, user_id: Uuid) -> AppResult<HealthTips> {
        info!(user.id = %user_id, "Generating health tips");
        let profile = self.profile(user_id).await?;
        let meals = self
            .store
            .recent_meals(user_id, self.config.tips_meal_window)
            .await?;
        Ok(self.engine.generate_tips(&profile, &meals))
    }

    /// Weight trend and adherence over the user's recent logs
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user, or a store error
    pub async fn progress(&self, user_id: Uuid) -> AppResult<ProgressReport> {
        info!(user.id = %user_id, "Analyzing progress");
        let profile = self.profile(user_id).await?;
        let weights = self
            .store
            .recent_weights(user_id, self.config.progress_weight_window)
            .await?;
        let meals = self
            .store
            .recent_meals(user_id, self.config.progress_meal_window)
            .await?;
        Ok(self.engine.analyze_progress(&profile, &weights, &meals))
    }

    /// Macro totals for one day
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user, or a store error
    pub async fn daily_stats(&self, user_id: Uuid, date: NaiveDate) -> AppResult<DailyIntakeStats> {
        info!(user.id = %user_id, %date, "Summarizing daily intake");
        // unknown users get an error rather than an empty day
        self.profile(user_id).await?;
        let meals = self.store.meals_on_date(user_id, date).await?;
        Ok(self.engine.daily_intake(date, &meals))
    }

    /// Overview of the user's recent history
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown user, or a store error
    pub async fn stats_summary(&self, user_id: Uuid) -> AppResult<StatsSummary> {
        info!(user.id = %user_id, "Building stats summary");
        let profile = self.profile(user_id).await?;
        let window = self.config.summary_window;
        let meals = self.store.recent_meals(user_id, window).await?;
        let weights = self.store.recent_weights(user_id, window).await?;
        Ok(summarize_history(
            &profile,
            &meals,
            &weights,
            self.engine.config(),
        ))
    }
}
