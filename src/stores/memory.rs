// ABOUTME: In-memory implementation of the profile, meal log, and weight log stores
// ABOUTME: DashMap-backed storage with validation on write and newest-first windows on read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{MealLogStore, ProfileStore, WeightLogStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use smartdiet_core::errors::{AppError, AppResult};
use smartdiet_core::models::{MealEntry, Profile, WeightSample};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// In-memory store for profiles and logs
///
/// `DashMap` shards its locks per key, so concurrent users do not contend.
/// Cloning shares the underlying maps.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    profiles: Arc<DashMap<Uuid, Profile>>,
    meals: Arc<DashMap<Uuid, Vec<MealEntry>>>,
    weights: Arc<DashMap<Uuid, Vec<WeightSample>>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user's profile
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the profile fails validation
    pub fn upsert_profile(&self, user_id: Uuid, profile: Profile) -> AppResult<()> {
        profile
            .validate()
            .map_err(|e| e.with_user_id(user_id))?;
        self.profiles.insert(user_id, profile);
        debug!(user.id = %user_id, "Stored profile");
        Ok(())
    }

    /// Record a meal
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if any nutrition value is negative or not finite
    pub fn log_meal(&self, user_id: Uuid, meal: MealEntry) -> AppResult<()> {
        let values = [meal.calories, meal.protein_g, meal.carbs_g, meal.fat_g];
        if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(AppError::invalid_input(
                "Meal nutrition values must be non-negative numbers",
            )
            .with_user_id(user_id));
        }
        self.meals.entry(user_id).or_default().push(meal);
        Ok(())
    }

    /// Record a body-weight measurement
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the weight is not a positive number
    pub fn log_weight(&self, user_id: Uuid, sample: WeightSample) -> AppResult<()> {
        if !sample.weight_kg.is_finite() || sample.weight_kg <= 0.0 {
            return Err(
                AppError::invalid_input("Weight must be a positive number of kg")
                    .with_user_id(user_id),
            );
        }
        self.weights.entry(user_id).or_default().push(sample);
        Ok(())
    }

    fn meals_newest_first(&self, user_id: Uuid) -> Vec<MealEntry> {
        let mut meals = self
            .meals
            .get(&user_id)
            .map(|entries| entries.clone())
            .unwrap_or_default();
        meals.sort_by(|a, b| b.logged_at.cmp(&a.logged_at));
        meals
    }
}

#[async_trait]
impl ProfileStore for InMemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        Ok(self.profiles.get(&user_id).map(|p| p.clone()))
    }
}

#[async_trait]
impl MealLogStore for InMemoryStore {
    async fn recent_meals(&self, user_id: Uuid, limit: usize) -> AppResult<Vec<MealEntry>> {
        let mut meals = self.meals_newest_first(user_id);
        meals.truncate(limit);
        Ok(meals)
    }

    async fn meals_on_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<MealEntry>> {
        let mut meals = self.meals_newest_first(user_id);
        meals.retain(|m| m.logged_on() == date);
        Ok(meals)
    }
}

#[async_trait]
impl WeightLogStore for InMemoryStore {
    async fn recent_weights(&self, user_id: Uuid, limit: usize) -> AppResult<Vec<WeightSample>> {
        let mut weights = self
            .weights
            .get(&user_id)
            .map(|entries| entries.clone())
            .unwrap_or_default();
        weights.sort_by(|a, b| b.date.cmp(&a.date));
        weights.truncate(limit);
        Ok(weights)
    }
}
