// ABOUTME: Goal allocator deriving calorie and macro targets from TDEE and stated goal
// ABOUTME: Produces integer GoalTargets recomputed on demand from the current profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Allocator
//!
//! | goal | calories | protein | carbs | fat |
//! |---|---|---|---|---|
//! | lose | TDEE - 500 | 2.2 g/kg | 30% / 4 | 30% / 9 |
//! | gain | TDEE + 500 | 2.0 g/kg | 50% / 4 | 25% / 9 |
//! | maintain | TDEE | 1.8 g/kg | 40% / 4 | 30% / 9 |
//!
//! Intermediate math keeps full precision; every output is rounded once, at
//! the end, half-to-even.

use crate::config::intelligence::IntelligenceConfig;
use crate::energy_model::{calculate_bmr, calculate_tdee};
use serde::{Deserialize, Serialize};
use smartdiet_core::constants::energy_density::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT};
use smartdiet_core::models::Profile;
use tracing::debug;

/// Daily calorie and macro targets
///
/// Never persisted; a pure function of the profile it was computed from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalTargets {
    /// Daily calorie target (kcal)
    pub calorie_goal: i64,
    /// Daily protein target (g)
    pub protein_goal_g: i64,
    /// Daily carbohydrate target (g)
    pub carbs_goal_g: i64,
    /// Daily fat target (g)
    pub fat_goal_g: i64,
    /// Basal metabolic rate (kcal)
    pub bmr: i64,
    /// Total daily energy expenditure (kcal)
    pub tdee: i64,
}

/// Round half to even and convert to an integer
pub(crate) fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Derive calorie and macro targets for a profile
///
/// Branches strictly on `profile.goal`; see the module table for the
/// coefficients used by the default configuration.
#[must_use]
pub fn calorie_and_macro_goals(profile: &Profile, config: &IntelligenceConfig) -> GoalTargets {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);

    let allocation = config.goal_allocation.for_goal(profile.goal);
    let calorie_goal = tdee + allocation.calorie_offset_kcal;
    let protein_goal = profile.weight_kg * allocation.protein_g_per_kg;
    let carbs_goal = calorie_goal * allocation.carbs_share / KCAL_PER_GRAM_CARBS;
    let fat_goal = calorie_goal * allocation.fat_share / KCAL_PER_GRAM_FAT;

    let targets = GoalTargets {
        calorie_goal: round_half_even(calorie_goal),
        protein_goal_g: round_half_even(protein_goal),
        carbs_goal_g: round_half_even(carbs_goal),
        fat_goal_g: round_half_even(fat_goal),
        bmr: round_half_even(bmr),
        tdee: round_half_even(tdee),
    };

    debug!(
        goal = profile.goal.as_str(),
        calorie_goal = targets.calorie_goal,
        protein_goal_g = targets.protein_goal_g,
        "Computed goal targets"
    );

    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartdiet_core::models::{ActivityLevel, GoalCategory, Sex};

    fn reference_profile(goal: GoalCategory) -> Profile {
        Profile {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 25,
            sex: Sex::Male,
            goal,
            activity_level: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_maintain_reference_profile() {
        let goals = calorie_and_macro_goals(
            &reference_profile(GoalCategory::Maintain),
            &IntelligenceConfig::default(),
        );

        assert_eq!(goals.bmr, 1674);
        assert_eq!(goals.tdee, 2594);
        assert_eq!(goals.calorie_goal, 2594);
        assert_eq!(goals.protein_goal_g, 126);
        // 2594.3125 * 0.40 / 4 = 259.43; * 0.30 / 9 = 86.48
        assert_eq!(goals.carbs_goal_g, 259);
        assert_eq!(goals.fat_goal_g, 86);
    }

    #[test]
    fn test_lose_reference_profile() {
        let goals = calorie_and_macro_goals(
            &reference_profile(GoalCategory::Lose),
            &IntelligenceConfig::default(),
        );

        assert_eq!(goals.calorie_goal, 2094);
        assert_eq!(goals.protein_goal_g, 154);
        assert_eq!(goals.carbs_goal_g, 157);
        assert_eq!(goals.fat_goal_g, 70);
    }

    #[test]
    fn test_gain_reference_profile() {
        let goals = calorie_and_macro_goals(
            &reference_profile(GoalCategory::Gain),
            &IntelligenceConfig::default(),
        );

        // 3094.3125 kcal; 140 g protein; 3094.3125 * 0.5 / 4 = 386.79; * 0.25 / 9 = 85.95
        assert_eq!(goals.calorie_goal, 3094);
        assert_eq!(goals.protein_goal_g, 140);
        assert_eq!(goals.carbs_goal_g, 387);
        assert_eq!(goals.fat_goal_g, 86);
    }

    #[test]
    fn test_rounding_is_half_to_even() {
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(3.5), 4);
        assert_eq!(round_half_even(-0.5), 0);
        assert_eq!(round_half_even(157.07), 157);
    }

    #[test]
    fn test_macro_energy_matches_shares() {
        let config = IntelligenceConfig::default();
        for goal in GoalCategory::ALL {
            let goals = calorie_and_macro_goals(&reference_profile(goal), &config);
            let allocation = config.goal_allocation.for_goal(goal);
            let carbs_kcal = goals.carbs_goal_g as f64 * KCAL_PER_GRAM_CARBS;
            let fat_kcal = goals.fat_goal_g as f64 * KCAL_PER_GRAM_FAT;
            let expected = goals.calorie_goal as f64 * (allocation.carbs_share + allocation.fat_share);

            // each macro may be off by half a gram after rounding, plus the calorie goal's own rounding
            assert!((carbs_kcal + fat_kcal - expected).abs() <= 0.5 * 4.0 + 0.5 * 9.0 + 1.0);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let config = IntelligenceConfig::default();
        let profile = reference_profile(GoalCategory::Lose);
        assert_eq!(
            calorie_and_macro_goals(&profile, &config),
            calorie_and_macro_goals(&profile, &config)
        );
    }
}
