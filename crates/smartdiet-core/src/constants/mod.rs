// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, goal adjustments, default log windows, and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace. Tunable coefficients live in the intelligence crate's
//! configuration; the values here are either physical facts or defaults that
//! seed that configuration.

/// Energy content of macronutrients (Atwater general factors)
pub mod energy_density {
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Mifflin-St Jeor coefficients (Mifflin et al. 1990)
pub mod mifflin_st_jeor {
    /// Weight coefficient (per kg)
    pub const WEIGHT_COEF: f64 = 10.0;
    /// Height coefficient (per cm)
    pub const HEIGHT_COEF: f64 = 6.25;
    /// Age coefficient (per year)
    pub const AGE_COEF: f64 = -5.0;
    /// Male constant
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Female constant
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// TDEE activity multipliers
pub mod activity_factors {
    /// Little or no exercise
    pub const SEDENTARY: f64 = 1.20;
    /// Exercise 3-5 days/week; also the fallback multiplier
    pub const MODERATE: f64 = 1.55;
    /// Exercise 6-7 days/week
    pub const ACTIVE: f64 = 1.725;
    /// Hard daily training
    pub const VERY_ACTIVE: f64 = 1.90;
}

/// Goal-dependent calorie and macro allocation defaults
pub mod goal_allocation {
    /// Daily calorie deficit for weight loss (kcal)
    pub const LOSE_CALORIE_OFFSET: f64 = -500.0;
    /// Daily calorie surplus for weight gain (kcal)
    pub const GAIN_CALORIE_OFFSET: f64 = 500.0;
    /// Protein target for weight loss (g/kg)
    pub const LOSE_PROTEIN_G_PER_KG: f64 = 2.2;
    /// Protein target for weight gain (g/kg)
    pub const GAIN_PROTEIN_G_PER_KG: f64 = 2.0;
    /// Protein target for maintenance (g/kg)
    pub const MAINTAIN_PROTEIN_G_PER_KG: f64 = 1.8;
    /// Share of calories from carbohydrates when losing weight
    pub const LOSE_CARBS_SHARE: f64 = 0.30;
    /// Share of calories from fat when losing weight
    pub const LOSE_FAT_SHARE: f64 = 0.30;
    /// Share of calories from carbohydrates when gaining weight
    pub const GAIN_CARBS_SHARE: f64 = 0.50;
    /// Share of calories from fat when gaining weight
    pub const GAIN_FAT_SHARE: f64 = 0.25;
    /// Share of calories from carbohydrates at maintenance
    pub const MAINTAIN_CARBS_SHARE: f64 = 0.40;
    /// Share of calories from fat at maintenance
    pub const MAINTAIN_FAT_SHARE: f64 = 0.30;
}

/// Tip generation defaults
pub mod tips {
    /// Maximum number of tips returned per request
    pub const MAX_TIPS: usize = 3;
    /// Average protein below this fraction of the goal triggers the protein tip
    pub const PROTEIN_TIP_RATIO: f64 = 0.8;
    /// Calories of the suggested protein smoothie
    pub const SMOOTHIE_CALORIES: u32 = 320;
    /// Protein (g) of the suggested protein smoothie
    pub const SMOOTHIE_PROTEIN_G: u32 = 25;
}

/// Progress analysis defaults
pub mod progress {
    /// Weight change (kg) separating "stable" from a real trend
    pub const TREND_THRESHOLD_KG: f64 = 0.5;
    /// Minimum weight samples needed to classify a trend
    pub const MIN_WEIGHT_SAMPLES: usize = 2;
    /// Upper bound of calorie adherence (%)
    pub const MAX_ADHERENCE_PERCENT: f64 = 100.0;
}

/// Default history windows fetched from the log stores
pub mod windows {
    /// Recent meals considered by the tip generator
    pub const TIPS_MEAL_WINDOW: usize = 7;
    /// Weight samples considered by the progress analyzer
    pub const PROGRESS_WEIGHT_WINDOW: usize = 30;
    /// Meals considered by the progress analyzer
    pub const PROGRESS_MEAL_WINDOW: usize = 30;
    /// Meals and weight samples counted by the stats summary
    pub const SUMMARY_WINDOW: usize = 30;
}

/// Meal catalog lookups
pub mod catalog {
    /// Maximum entries returned by a name search
    pub const SEARCH_LIMIT: usize = 20;
}

/// Service identifiers for structured logging
pub mod service_names {
    /// Library service name
    pub const SMARTDIET: &str = "smartdiet";
}
