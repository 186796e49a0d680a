// ABOUTME: Goal allocation configuration for calorie and macro targets
// ABOUTME: Per-goal calorie offset, protein per kg, and carb/fat energy shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use smartdiet_core::constants::goal_allocation as defaults;
use smartdiet_core::models::GoalCategory;

/// Calorie and macro allocation for one goal category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroAllocation {
    /// Added to TDEE to get the calorie goal (kcal, negative for a deficit)
    pub calorie_offset_kcal: f64,
    /// Protein target per kg of body weight
    pub protein_g_per_kg: f64,
    /// Fraction of the calorie goal allotted to carbohydrates
    pub carbs_share: f64,
    /// Fraction of the calorie goal allotted to fat
    pub fat_share: f64,
}

/// Goal allocation configuration, one entry per goal category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAllocationConfig {
    /// Weight loss allocation
    pub lose: MacroAllocation,
    /// Weight gain allocation
    pub gain: MacroAllocation,
    /// Maintenance allocation
    pub maintain: MacroAllocation,
}

impl GoalAllocationConfig {
    /// Allocation row for a goal
    #[must_use]
    pub const fn for_goal(&self, goal: GoalCategory) -> &MacroAllocation {
        match goal {
            GoalCategory::Lose => &self.lose,
            GoalCategory::Gain => &self.gain,
            GoalCategory::Maintain => &self.maintain,
        }
    }
}

impl Default for GoalAllocationConfig {
    fn default() -> Self {
        Self {
            lose: MacroAllocation {
                calorie_offset_kcal: defaults::LOSE_CALORIE_OFFSET,
                protein_g_per_kg: defaults::LOSE_PROTEIN_G_PER_KG,
                carbs_share: defaults::LOSE_CARBS_SHARE,
                fat_share: defaults::LOSE_FAT_SHARE,
            },
            gain: MacroAllocation {
                calorie_offset_kcal: defaults::GAIN_CALORIE_OFFSET,
                protein_g_per_kg: defaults::GAIN_PROTEIN_G_PER_KG,
                carbs_share: defaults::GAIN_CARBS_SHARE,
                fat_share: defaults::GAIN_FAT_SHARE,
            },
            maintain: MacroAllocation {
                calorie_offset_kcal: 0.0,
                protein_g_per_kg: defaults::MAINTAIN_PROTEIN_G_PER_KG,
                carbs_share: defaults::MAINTAIN_CARBS_SHARE,
                fat_share: defaults::MAINTAIN_FAT_SHARE,
            },
        }
    }
}
