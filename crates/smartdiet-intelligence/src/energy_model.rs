// ABOUTME: Energy expenditure model using the Mifflin-St Jeor equation
// ABOUTME: BMR and TDEE as pure functions of profile fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use crate::config::intelligence::{ActivityFactorsConfig, BmrConfig};
use smartdiet_core::models::{ActivityLevel, Sex};

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_constant`
/// - Male: +5
/// - Female: -161
///
/// Values that did not parse as male arrive here as [`Sex::Female`], so they
/// take the -161 branch. Inputs are not range-checked; well-formed profiles
/// are the caller's responsibility.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.weight_coef * weight_kg;
    let height_component = config.height_coef * height_cm;
    let age_component = config.age_coef * f64::from(age_years);

    let sex_constant = match sex {
        Sex::Male => config.male_constant,
        Sex::Female => config.female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
///
/// - Sedentary: 1.2
/// - Moderate: 1.55 (also used for unrecognized activity levels)
/// - Active: 1.725
/// - Very active: 1.9
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    let activity_factor = match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    };

    bmr * activity_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_male_reference_profile() {
        let bmr = calculate_bmr(70.0, 175.0, 25, Sex::Male, &BmrConfig::default());
        // 700 + 1093.75 - 125 + 5
        assert!((bmr - 1673.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmr_female_offset() {
        let config = BmrConfig::default();
        let male = calculate_bmr(60.0, 165.0, 30, Sex::Male, &config);
        let female = calculate_bmr(60.0, 165.0, 30, Sex::Female, &config);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_unrecognized_sex_uses_female_branch() {
        let config = BmrConfig::default();
        let unknown = calculate_bmr(60.0, 165.0, 30, Sex::from_str_lossy("x"), &config);
        let female = calculate_bmr(60.0, 165.0, 30, Sex::Female, &config);
        assert_eq!(unknown.to_bits(), female.to_bits());
    }

    #[test]
    fn test_tdee_multipliers() {
        let config = ActivityFactorsConfig::default();
        assert!((calculate_tdee(1000.0, ActivityLevel::Sedentary, &config) - 1200.0).abs() < 1e-9);
        assert!((calculate_tdee(1000.0, ActivityLevel::Moderate, &config) - 1550.0).abs() < 1e-9);
        assert!((calculate_tdee(1000.0, ActivityLevel::Active, &config) - 1725.0).abs() < 1e-9);
        assert!((calculate_tdee(1000.0, ActivityLevel::VeryActive, &config) - 1900.0).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_reference_profile() {
        let tdee = calculate_tdee(1673.75, ActivityLevel::Moderate, &ActivityFactorsConfig::default());
        assert!((tdee - 2594.3125).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_activity_uses_moderate_multiplier() {
        let config = ActivityFactorsConfig::default();
        let unknown = calculate_tdee(1500.0, ActivityLevel::from_str_lossy("weekend warrior"), &config);
        let moderate = calculate_tdee(1500.0, ActivityLevel::Moderate, &config);
        assert_eq!(unknown.to_bits(), moderate.to_bits());
    }

    #[test]
    fn test_deterministic() {
        let config = BmrConfig::default();
        let a = calculate_bmr(82.3, 181.4, 37, Sex::Male, &config);
        let b = calculate_bmr(82.3, 181.4, 37, Sex::Male, &config);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
