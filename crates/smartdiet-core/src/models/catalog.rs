// ABOUTME: Meal suggestion catalog entry definitions
// ABOUTME: CatalogEntry and MealSlot used by the meal recommender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Slot of the day a suggested meal is meant for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

/// A candidate meal in the static suggestion catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogEntry {
    /// Display name
    pub name: String,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Intended slot of the day
    pub meal_slot: MealSlot,
    /// Short pitch shown with the suggestion
    pub description: String,
    /// Ingredients in display order
    pub ingredients: Vec<String>,
}
