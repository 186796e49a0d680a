// ABOUTME: Meal recommender returning catalog suggestions for a goal category
// ABOUTME: Deterministic lookup with fallback to the maintain category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::meal_catalog::MealCatalog;
use smartdiet_core::models::{CatalogEntry, GoalCategory};
use tracing::debug;

/// Suggested meals for a goal, in catalog order
///
/// A category that is missing from the catalog, or present but empty,
/// resolves to the maintain list.
#[must_use]
pub fn recommend_meals(catalog: &MealCatalog, goal: GoalCategory) -> &[CatalogEntry] {
    match catalog.category(goal) {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            if goal != GoalCategory::Maintain {
                debug!(goal = goal.as_str(), "No catalog entries for goal, using maintain");
            }
            catalog.category(GoalCategory::Maintain).unwrap_or_default()
        }
    }
}
