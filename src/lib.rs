// ABOUTME: Main library entry point for the SmartDiet nutrition service
// ABOUTME: Wires stores, configuration, and logging around the nutrition engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SmartDiet
//!
//! Nutrition targets, meal suggestions, short guidance tips, and progress
//! analysis for a user profile and its meal and weight logs.
//!
//! ## Architecture
//!
//! - **`smartdiet_core`**: Errors, domain models, and constants
//! - **`smartdiet_intelligence`**: The synchronous `NutritionEngine` and its algorithms
//! - **Stores**: Async ports for profiles and log windows, with an in-memory adapter
//! - **Services**: `NutritionService`, which fetches windows and calls the engine
//! - **Config** / **Logging**: Environment-driven setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use smartdiet::config::ServiceConfig;
//! use smartdiet::errors::AppResult;
//! use smartdiet::services::NutritionService;
//! use smartdiet::stores::InMemoryStore;
//! use smartdiet::NutritionEngine;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(InMemoryStore::new());
//!     let service = NutritionService::new(store, NutritionEngine::new(), ServiceConfig::from_env()?);
//!
//!     let goals = service.goals(uuid::Uuid::new_v4()).await?;
//!     println!("Daily calorie goal: {}", goals.calorie_goal);
//!     Ok(())
//! }
//! ```

/// Service configuration from environment variables
pub mod config;

/// Structured logging setup
pub mod logging;

/// Protocol-agnostic domain services
pub mod services;

/// Store ports and the in-memory adapter
pub mod stores;

pub use smartdiet_core::{constants, errors, models};
pub use smartdiet_intelligence::{
    GoalTargets, HealthTips, IntelligenceConfig, MealCatalog, NutritionEngine, ProgressReport,
};
