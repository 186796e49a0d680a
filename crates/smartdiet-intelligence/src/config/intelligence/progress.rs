// ABOUTME: Progress analyzer configuration for weight trend and adherence scoring
// ABOUTME: Trend threshold, minimum samples, and adherence ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use smartdiet_core::constants::progress as defaults;

/// Progress Analyzer Configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressConfig {
    /// Weight change (kg) a trend must exceed to count as movement
    pub trend_threshold_kg: f64,
    /// Samples required before a trend is classified
    pub min_weight_samples: usize,
    /// Calorie adherence ceiling (%)
    pub max_adherence_percent: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            trend_threshold_kg: defaults::TREND_THRESHOLD_KG,
            min_weight_samples: defaults::MIN_WEIGHT_SAMPLES,
            max_adherence_percent: defaults::MAX_ADHERENCE_PERCENT,
        }
    }
}
