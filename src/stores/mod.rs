// ABOUTME: Store ports the nutrition service reads profiles and log windows through
// ABOUTME: Async traits for profiles, meal logs, and weight logs plus an in-memory adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Store Ports
//!
//! The engine never performs I/O. The service fetches bounded windows through
//! these traits and hands them to the engine fully materialized. Windows are
//! always newest first.

use async_trait::async_trait;
use chrono::NaiveDate;
use smartdiet_core::errors::AppResult;
use smartdiet_core::models::{MealEntry, Profile, WeightSample};
use uuid::Uuid;

/// In-memory store backed by `DashMap`
pub mod memory;

pub use memory::InMemoryStore;

/// Profile lookups
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Current profile of a user, `None` if the user is unknown
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store fails
    async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>>;
}

/// Meal log queries
#[async_trait]
pub trait MealLogStore: Send + Sync {
    /// Up to `limit` most recent meals, newest first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store fails
    async fn recent_meals(&self, user_id: Uuid, limit: usize) -> AppResult<Vec<MealEntry>>;

    /// Every meal logged on `date` (UTC), newest first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store fails
    async fn meals_on_date(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Vec<MealEntry>>;
}

/// Weight log queries
#[async_trait]
pub trait WeightLogStore: Send + Sync {
    /// Up to `limit` most recent weight samples, ordered by date descending
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backing store fails
    async fn recent_weights(&self, user_id: Uuid, limit: usize) -> AppResult<Vec<WeightSample>>;
}

/// A store providing every port the nutrition service needs
pub trait NutritionStore: ProfileStore + MealLogStore + WeightLogStore {}

impl<T: ProfileStore + MealLogStore + WeightLogStore> NutritionStore for T {}
