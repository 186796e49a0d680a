// ABOUTME: Service configuration for log window sizes read from the environment
// ABOUTME: Controls how many meals and weights each service operation fetches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based service configuration

use serde::{Deserialize, Serialize};
use smartdiet_core::constants::windows;
use smartdiet_core::errors::{AppError, AppResult};
use std::env;
use tracing::info;

/// Window sizes for log store queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Meals fetched for tip generation
    pub tips_meal_window: usize,
    /// Weight samples fetched for progress analysis
    pub progress_weight_window: usize,
    /// Meals fetched for progress analysis
    pub progress_meal_window: usize,
    /// Meals and weights fetched for the stats summary
    pub summary_window: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            tips_meal_window: windows::TIPS_MEAL_WINDOW,
            progress_weight_window: windows::PROGRESS_WEIGHT_WINDOW,
            progress_meal_window: windows::PROGRESS_MEAL_WINDOW,
            summary_window: windows::SUMMARY_WINDOW,
        }
    }
}

impl ServiceConfig {
    /// Load window sizes from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a variable is not a positive integer
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            tips_meal_window: window_var("SMARTDIET_TIPS_MEAL_WINDOW", windows::TIPS_MEAL_WINDOW)?,
            progress_weight_window: window_var(
                "SMARTDIET_PROGRESS_WEIGHT_WINDOW",
                windows::PROGRESS_WEIGHT_WINDOW,
            )?,
            progress_meal_window: window_var(
                "SMARTDIET_PROGRESS_MEAL_WINDOW",
                windows::PROGRESS_MEAL_WINDOW,
            )?,
            summary_window: window_var("SMARTDIET_SUMMARY_WINDOW", windows::SUMMARY_WINDOW)?,
        };

        info!(
            tips_meal_window = config.tips_meal_window,
            progress_weight_window = config.progress_weight_window,
            progress_meal_window = config.progress_meal_window,
            summary_window = config.summary_window,
            "Loaded service configuration"
        );
        Ok(config)
    }
}

/// Read a positive window size, or `default` when unset
fn window_var(key: &str, default: usize) -> AppResult<usize> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(AppError::config(format!("{key} must be greater than zero"))),
        Ok(value) => Ok(value),
        Err(e) => Err(AppError::config(format!("Invalid {key}: {raw}")).with_source(e)),
    }
}
