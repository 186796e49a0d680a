// ABOUTME: Nutrition algorithms for the SmartDiet engine
// ABOUTME: Energy model, goal allocation, meal recommendations, tips, and progress analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SmartDiet Intelligence
//!
//! Synchronous, side-effect-free nutrition computations. Every function takes
//! fully materialized inputs (a profile and already-fetched log windows) and
//! returns a fresh value; nothing here performs I/O apart from the one-time
//! catalog load.
//!
//! ## Modules
//!
//! - **`energy_model`**: BMR (Mifflin-St Jeor) and TDEE
//! - **`goal_allocator`**: Calorie and macro targets per goal
//! - **`meal_catalog`** / **`meal_recommender`**: Static meal suggestions
//! - **`tip_generator`**: Short prioritized guidance
//! - **`progress_analyzer`**: Weight trend and calorie adherence
//! - **`intake_summary`**: Daily totals and history overview
//! - **`engine`**: `NutritionEngine` facade over all of the above

/// Algorithm configuration with environment overrides
pub mod config;

/// Basal metabolic rate and total daily energy expenditure
pub mod energy_model;

/// Calorie and macro targets
pub mod goal_allocator;

/// Process-wide meal suggestion catalog
pub mod meal_catalog;

/// Goal-keyed meal suggestions
pub mod meal_recommender;

/// Guidance tips from recent intake
pub mod tip_generator;

/// Weight trend and adherence analysis
pub mod progress_analyzer;

/// Daily and historical intake summaries
pub mod intake_summary;

/// Engine facade
pub mod engine;

pub use config::IntelligenceConfig;
pub use engine::NutritionEngine;
pub use goal_allocator::GoalTargets;
pub use intake_summary::{DailyIntakeStats, StatsSummary};
pub use meal_catalog::{CatalogError, MealCatalog};
pub use progress_analyzer::{ProgressReport, WeightTrend};
pub use tip_generator::{HealthTips, NextStep, Tip, TipPriority};
