// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, reference profiles, and log builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `smartdiet`

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use smartdiet::models::{ActivityLevel, GoalCategory, MealEntry, Profile, Sex, WeightSample};
use smartdiet::stores::InMemoryStore;
use std::env;
use std::sync::Once;
use tracing::Level;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 70 kg, 175 cm, 25 year old moderately active male
pub fn reference_profile(goal: GoalCategory) -> Profile {
    Profile {
        weight_kg: 70.0,
        height_cm: 175.0,
        age_years: 25,
        sex: Sex::Male,
        goal,
        activity_level: ActivityLevel::Moderate,
    }
}

/// Fixed instant all fixtures are relative to
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

pub fn meal_at(logged_at: DateTime<Utc>, calories: f64, protein_g: f64) -> MealEntry {
    MealEntry {
        calories,
        protein_g,
        carbs_g: calories * 0.5 / 4.0,
        fat_g: calories * 0.25 / 9.0,
        logged_at,
    }
}

/// Weight samples, newest first, one day apart ending on `base_time()`
#[allow(clippy::cast_possible_wrap)]
pub fn weights_newest_first(values: &[f64]) -> Vec<WeightSample> {
    let newest = base_time().date_naive();
    values
        .iter()
        .enumerate()
        .map(|(i, &weight_kg)| WeightSample {
            weight_kg,
            date: newest - Duration::days(i as i64),
        })
        .collect()
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Store with one user holding the reference profile for `goal`
pub fn store_with_user(goal: GoalCategory) -> (InMemoryStore, Uuid) {
    init_test_logging();
    let store = InMemoryStore::new();
    let user_id = Uuid::new_v4();
    store
        .upsert_profile(user_id, reference_profile(goal))
        .unwrap();
    (store, user_id)
}
