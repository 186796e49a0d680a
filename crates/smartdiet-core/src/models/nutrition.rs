// ABOUTME: Logged intake and body-weight history models supplied by the log stores
// ABOUTME: MealEntry and WeightSample definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A logged meal
///
/// Read-only snapshot from the meal log store. Windows of these arrive
/// newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// When the meal was logged
    pub logged_at: DateTime<Utc>,
}

impl MealEntry {
    /// Calendar day (UTC) the meal was logged on
    #[must_use]
    pub fn logged_on(&self) -> NaiveDate {
        self.logged_at.date_naive()
    }
}

/// A body-weight measurement
///
/// Windows of these arrive ordered by date, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeightSample {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Measurement date
    pub date: NaiveDate,
}
