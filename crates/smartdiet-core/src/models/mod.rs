// ABOUTME: Core data models for the SmartDiet nutrition engine
// ABOUTME: Re-exports Profile, MealEntry, WeightSample, CatalogEntry and their enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value types exchanged between the stores, the engine, and its callers.
//! Every entity is produced fresh per call; nothing here is shared mutably.

mod catalog;
mod nutrition;
mod profile;

pub use catalog::{CatalogEntry, MealSlot};
pub use nutrition::{MealEntry, WeightSample};
pub use profile::{ActivityLevel, GoalCategory, Profile, Sex};
