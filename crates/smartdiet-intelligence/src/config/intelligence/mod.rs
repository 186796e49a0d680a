// ABOUTME: Intelligence module configuration for nutrition targets, tips, and progress analysis
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Type-safe configuration for every nutrition algorithm. Defaults reproduce
//! the reference coefficients exactly; environment variables may override
//! individual values at process start.
//!
//! # Module Structure
//!
//! - `energy` - Mifflin-St Jeor coefficients and TDEE activity factors
//! - `goals` - Per-goal calorie offsets and macro shares
//! - `tips` - Tip triggers, limit, and message templates
//! - `progress` - Weight trend threshold and adherence ceiling

pub mod energy;
pub mod error;
pub mod goals;
pub mod progress;
pub mod tips;

pub use energy::{ActivityFactorsConfig, BmrConfig};
pub use error::ConfigError;
pub use goals::{GoalAllocationConfig, MacroAllocation};
pub use progress::ProgressConfig;
pub use tips::{NextStepConfig, TipConfig, TipMessages, TipText};

use serde::{Deserialize, Serialize};
use smartdiet_core::constants::tips::MAX_TIPS;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IntelligenceConfig {
    /// Basal metabolic rate coefficients
    pub bmr: BmrConfig,
    /// TDEE activity multipliers
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie and macro allocation per goal
    pub goal_allocation: GoalAllocationConfig,
    /// Tip generation settings
    pub tips: TipConfig,
    /// Progress analysis settings
    pub progress: ProgressConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid value found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_energy()?;
        self.validate_goal_allocation()?;
        self.validate_tips()?;
        self.validate_progress()
    }

    fn validate_energy(&self) -> Result<(), ConfigError> {
        if self.bmr.weight_coef <= 0.0 || self.bmr.height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.moderate
            || factors.moderate >= factors.active
            || factors.active >= factors.very_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }

    fn validate_goal_allocation(&self) -> Result<(), ConfigError> {
        let goals = &self.goal_allocation;
        for allocation in [&goals.lose, &goals.gain, &goals.maintain] {
            if allocation.protein_g_per_kg <= 0.0 || allocation.protein_g_per_kg > 4.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Protein targets must be between 0 and 4.0 g/kg",
                ));
            }
            if allocation.carbs_share <= 0.0 || allocation.fat_share <= 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "Carb and fat shares must be positive",
                ));
            }
            if allocation.carbs_share + allocation.fat_share > 1.0 {
                return Err(ConfigError::InvalidShares(
                    "Carb and fat shares must not exceed the calorie goal",
                ));
            }
        }

        if goals.lose.calorie_offset_kcal > 0.0 {
            return Err(ConfigError::InvalidRange(
                "Weight loss calorie offset must not be a surplus",
            ));
        }
        if goals.gain.calorie_offset_kcal < 0.0 {
            return Err(ConfigError::InvalidRange(
                "Weight gain calorie offset must not be a deficit",
            ));
        }
        Ok(())
    }

    fn validate_tips(&self) -> Result<(), ConfigError> {
        if self.tips.max_tips == 0 || self.tips.max_tips > MAX_TIPS {
            return Err(ConfigError::ValueOutOfRange(
                "Tip limit must be between 1 and 3",
            ));
        }
        if self.tips.protein_tip_ratio <= 0.0 || self.tips.protein_tip_ratio > 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein tip ratio must be in (0, 1]",
            ));
        }
        Ok(())
    }

    fn validate_progress(&self) -> Result<(), ConfigError> {
        if self.progress.trend_threshold_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Weight trend threshold must be positive",
            ));
        }
        if self.progress.min_weight_samples < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "A weight trend needs at least 2 samples",
            ));
        }
        if self.progress.max_adherence_percent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Adherence ceiling must be positive",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Energy model overrides
        Self::apply_env_var("SMARTDIET_BMR_MALE_CONSTANT", &mut self.bmr.male_constant)?;
        Self::apply_env_var(
            "SMARTDIET_BMR_FEMALE_CONSTANT",
            &mut self.bmr.female_constant,
        )?;
        Self::apply_env_var(
            "SMARTDIET_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "SMARTDIET_ACTIVITY_MODERATE",
            &mut self.activity_factors.moderate,
        )?;
        Self::apply_env_var("SMARTDIET_ACTIVITY_ACTIVE", &mut self.activity_factors.active)?;
        Self::apply_env_var(
            "SMARTDIET_ACTIVITY_VERY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;

        // Goal allocation overrides
        let goals = &mut self.goal_allocation;
        Self::apply_env_var(
            "SMARTDIET_LOSE_CALORIE_OFFSET",
            &mut goals.lose.calorie_offset_kcal,
        )?;
        Self::apply_env_var(
            "SMARTDIET_GAIN_CALORIE_OFFSET",
            &mut goals.gain.calorie_offset_kcal,
        )?;
        Self::apply_env_var(
            "SMARTDIET_LOSE_PROTEIN_G_PER_KG",
            &mut goals.lose.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            "SMARTDIET_GAIN_PROTEIN_G_PER_KG",
            &mut goals.gain.protein_g_per_kg,
        )?;
        Self::apply_env_var(
            "SMARTDIET_MAINTAIN_PROTEIN_G_PER_KG",
            &mut goals.maintain.protein_g_per_kg,
        )?;

        // Tip and progress overrides
        Self::apply_env_var("SMARTDIET_TIPS_MAX", &mut self.tips.max_tips)?;
        Self::apply_env_var(
            "SMARTDIET_PROTEIN_TIP_RATIO",
            &mut self.tips.protein_tip_ratio,
        )?;
        Self::apply_env_var(
            "SMARTDIET_TREND_THRESHOLD_KG",
            &mut self.progress.trend_threshold_kg,
        )?;

        Ok(self)
    }
}
