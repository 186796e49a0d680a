// ABOUTME: Static meal suggestion catalog keyed by goal category
// ABOUTME: Built-in table or JSON file, loaded once per process and shared read-only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Catalog
//!
//! The catalog is initialized once and never mutated afterwards, so it is
//! shared between callers through an `Arc` without locking. Entry order
//! within a category is insertion order and is preserved on every lookup.
//!
//! When `SMARTDIET_MEAL_CATALOG_PATH` points to a JSON file, the global
//! catalog is read from it. The file maps category names to entry lists:
//!
//! ```text
//! {
//!   "maintain": [
//!     { "name": "Fruit porridge", "calories": 380, "protein_g": 15, "carbs_g": 62,
//!       "fat_g": 10, "meal_slot": "breakfast", "description": "Balanced breakfast",
//!       "ingredients": ["oats", "milk", "banana"] }
//!   ]
//! }
//! ```

use smartdiet_core::errors::{AppError, ErrorCode};
use smartdiet_core::models::{CatalogEntry, GoalCategory, MealSlot};
use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable naming an optional catalog file
pub const CATALOG_PATH_ENV: &str = "SMARTDIET_MEAL_CATALOG_PATH";

/// Global catalog singleton
static MEAL_CATALOG: OnceLock<Arc<MealCatalog>> = OnceLock::new();

/// Catalog loading and validation errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Catalog JSON is malformed
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Category key is not a known goal
    #[error("Unknown catalog category: {0}")]
    UnknownCategory(String),

    /// The maintain category is the lookup fallback and must be present
    #[error("Catalog must contain a non-empty maintain category")]
    MissingFallback,

    /// An entry failed validation
    #[error("Invalid catalog entry '{name}' in {category}: {reason}")]
    InvalidEntry {
        /// Category holding the entry
        category: &'static str,
        /// Entry name
        name: String,
        /// What is wrong with it
        reason: &'static str,
    },
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
    }
}

/// Immutable meal suggestion catalog
#[derive(Debug, Clone, PartialEq)]
pub struct MealCatalog {
    categories: HashMap<GoalCategory, Vec<CatalogEntry>>,
}

impl MealCatalog {
    /// Get the process-wide catalog, loading it on first use
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(MEAL_CATALOG.get_or_init(|| {
            Arc::new(Self::load().unwrap_or_else(|e| {
                warn!("Failed to load meal catalog: {e}, using built-in catalog");
                Self::builtin()
            }))
        }))
    }

    /// Load the catalog named by `SMARTDIET_MEAL_CATALOG_PATH`, or the built-in one
    ///
    /// # Errors
    ///
    /// Returns an error if the configured file cannot be read, parsed, or validated
    pub fn load() -> Result<Self, CatalogError> {
        match env::var(CATALOG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_path(Path::new(path.trim())),
            _ => Ok(Self::builtin()),
        }
    }

    /// Read and validate a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), "Loaded meal catalog from file");
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON, unknown category names, a missing
    /// maintain category, or invalid entries
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: HashMap<String, Vec<CatalogEntry>> = serde_json::from_str(json)?;

        let mut categories = HashMap::with_capacity(raw.len());
        for (key, entries) in raw {
            let goal = GoalCategory::ALL
                .into_iter()
                .find(|goal| goal.as_str() == key)
                .ok_or(CatalogError::UnknownCategory(key))?;
            categories.insert(goal, entries);
        }

        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog from in-memory categories
    ///
    /// # Errors
    ///
    /// Returns an error if the maintain category is missing or an entry is invalid
    pub fn from_categories(
        categories: HashMap<GoalCategory, Vec<CatalogEntry>>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Entries stored under a category, in insertion order
    #[must_use]
    pub fn category(&self, goal: GoalCategory) -> Option<&[CatalogEntry]> {
        self.categories.get(&goal).map(Vec::as_slice)
    }

    /// Entries whose name contains `query`, ignoring case
    ///
    /// Categories are scanned lose, gain, maintain and an entry listed under
    /// several categories is returned once. An empty query matches every entry.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<&CatalogEntry> {
        let needle = query.trim().to_lowercase();
        let mut seen = HashSet::new();
        GoalCategory::ALL
            .iter()
            .filter_map(|goal| self.categories.get(goal))
            .flatten()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .filter(|&entry| seen.insert(entry.name.as_str()))
            .take(limit)
            .collect()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let has_fallback = self
            .categories
            .get(&GoalCategory::Maintain)
            .is_some_and(|entries| !entries.is_empty());
        if !has_fallback {
            return Err(CatalogError::MissingFallback);
        }

        for (goal, entries) in &self.categories {
            for entry in entries {
                let invalid = |reason| CatalogError::InvalidEntry {
                    category: goal.as_str(),
                    name: entry.name.clone(),
                    reason,
                };
                if entry.name.trim().is_empty() {
                    return Err(invalid("name must not be empty"));
                }
                let macros = [entry.calories, entry.protein_g, entry.carbs_g, entry.fat_g];
                if macros.iter().any(|v| !v.is_finite() || *v < 0.0) {
                    return Err(invalid("nutrition values must be non-negative numbers"));
                }
            }
        }
        Ok(())
    }

    /// The built-in catalog: four suggestions per goal
    #[must_use]
    pub fn builtin() -> Self {
        let mut categories = HashMap::with_capacity(GoalCategory::ALL.len());
        categories.insert(GoalCategory::Lose, lose_entries());
        categories.insert(GoalCategory::Gain, gain_entries());
        categories.insert(GoalCategory::Maintain, maintain_entries());
        Self { categories }
    }
}

/// `[calories, protein_g, carbs_g, fat_g]`
type Macros = [f64; 4];

fn entry(
    name: &str,
    macros: Macros,
    meal_slot: MealSlot,
    description: &str,
    ingredients: &[&str],
) -> CatalogEntry {
    let [calories, protein_g, carbs_g, fat_g] = macros;
    CatalogEntry {
        name: name.to_owned(),
        calories,
        protein_g,
        carbs_g,
        fat_g,
        meal_slot,
        description: description.to_owned(),
        ingredients: ingredients.iter().map(|&i| i.to_owned()).collect(),
    }
}

fn lose_entries() -> Vec<CatalogEntry> {
    vec![
        entry(
            "Quinoa salad with grilled vegetables",
            [450.0, 20.0, 55.0, 15.0],
            MealSlot::Lunch,
            "Rich in plant protein and fiber",
            &["quinoa", "zucchini", "bell peppers", "tomatoes", "feta"],
        ),
        entry(
            "Grilled chicken with steamed vegetables",
            [380.0, 45.0, 25.0, 12.0],
            MealSlot::Dinner,
            "Low in calories, high in protein",
            &["chicken", "broccoli", "green beans", "carrots"],
        ),
        entry(
            "Vegetable omelette",
            [320.0, 28.0, 15.0, 18.0],
            MealSlot::Breakfast,
            "A high-protein breakfast",
            &["eggs", "spinach", "mushrooms", "tomatoes"],
        ),
        entry(
            "Lentil soup",
            [280.0, 18.0, 42.0, 5.0],
            MealSlot::Dinner,
            "Filling and nutritious",
            &["lentils", "carrots", "celery", "onion"],
        ),
    ]
}

fn gain_entries() -> Vec<CatalogEntry> {
    vec![
        entry(
            "Brown rice with grilled salmon",
            [680.0, 45.0, 72.0, 22.0],
            MealSlot::Lunch,
            "Rich in protein and complex carbohydrates",
            &["salmon", "brown rice", "avocado", "vegetables"],
        ),
        entry(
            "Banana-oat protein smoothie",
            [520.0, 35.0, 68.0, 12.0],
            MealSlot::Snack,
            "Great for building mass",
            &["whey", "banana", "oats", "milk", "peanut butter"],
        ),
        entry(
            "Whole-wheat pasta with chicken",
            [720.0, 48.0, 85.0, 18.0],
            MealSlot::Dinner,
            "Ideal after training",
            &["whole-wheat pasta", "chicken", "tomato sauce", "parmesan"],
        ),
        entry(
            "Scrambled eggs with whole-grain bread",
            [480.0, 32.0, 45.0, 20.0],
            MealSlot::Breakfast,
            "An energizing breakfast",
            &["eggs", "whole-grain bread", "cheese", "avocado"],
        ),
    ]
}

fn maintain_entries() -> Vec<CatalogEntry> {
    vec![
        entry(
            "Mediterranean bowl",
            [550.0, 30.0, 58.0, 22.0],
            MealSlot::Lunch,
            "Balanced in macronutrients",
            &["chicken", "rice", "vegetables", "hummus", "olives"],
        ),
        entry(
            "Fish tacos",
            [480.0, 35.0, 52.0, 16.0],
            MealSlot::Dinner,
            "Tasty and balanced",
            &["white fish", "tortillas", "cabbage", "avocado", "salsa"],
        ),
        entry(
            "Fruit porridge",
            [380.0, 15.0, 62.0, 10.0],
            MealSlot::Breakfast,
            "A balanced breakfast",
            &["oats", "milk", "banana", "berries", "honey"],
        ),
        entry(
            "Vegetable and tofu stir-fry",
            [420.0, 22.0, 48.0, 18.0],
            MealSlot::Dinner,
            "A balanced vegetarian option",
            &["tofu", "mixed vegetables", "soy sauce", "rice"],
        ),
    ]
}
