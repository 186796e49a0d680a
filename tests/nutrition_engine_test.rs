// ABOUTME: Integration tests for the NutritionEngine boundary operations
// ABOUTME: Goals, meal recommendations, and tips for the reference profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Engine tests through the public API
//!
//! Reference figures for the 70 kg / 175 cm / 25 y male profile:
//! BMR 1673.75, TDEE 2594.3125.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smartdiet::models::{ActivityLevel, GoalCategory, Profile, Sex};
use smartdiet::{IntelligenceConfig, MealCatalog, NutritionEngine};
use smartdiet_intelligence::energy_model::{calculate_bmr, calculate_tdee};
use smartdiet_intelligence::TipPriority;
use std::sync::Arc;

mod common;

fn engine() -> NutritionEngine {
    common::init_test_logging();
    NutritionEngine::with_config(
        IntelligenceConfig::default(),
        Arc::new(MealCatalog::builtin()),
    )
}

// ============================================================================
// GOALS
// ============================================================================

#[test]
fn test_reference_profile_maintain_goals() {
    let goals = engine().compute_goals(&common::reference_profile(GoalCategory::Maintain));

    assert_eq!(goals.bmr, 1674);
    assert_eq!(goals.tdee, 2594);
    assert_eq!(goals.calorie_goal, 2594);
    assert_eq!(goals.protein_goal_g, 126);
}

#[test]
fn test_reference_profile_lose_goals() {
    let goals = engine().compute_goals(&common::reference_profile(GoalCategory::Lose));

    assert_eq!(goals.calorie_goal, 2094);
    assert_eq!(goals.protein_goal_g, 154);
    assert_eq!(goals.carbs_goal_g, 157);
    assert_eq!(goals.fat_goal_g, 70);
}

#[test]
fn test_female_profile_goals() {
    let profile = Profile {
        weight_kg: 60.0,
        height_cm: 165.0,
        age_years: 25,
        sex: Sex::Female,
        goal: GoalCategory::Gain,
        activity_level: ActivityLevel::Sedentary,
    };
    let goals = engine().compute_goals(&profile);

    // 600 + 1031.25 - 125 - 161 = 1345.25; * 1.2 = 1614.3
    assert_eq!(goals.bmr, 1345);
    assert_eq!(goals.tdee, 1614);
    assert_eq!(goals.calorie_goal, 2114);
    assert_eq!(goals.protein_goal_g, 120);
}

#[test]
fn test_unrecognized_fields_use_fallback_branches() {
    let json = r#"{
        "weight_kg": 70, "height_cm": 175, "age_years": 25,
        "sex": "not stated", "goal": "recomposition", "activity_level": "sometimes"
    }"#;
    let profile: Profile = serde_json::from_str(json).unwrap();
    let goals = engine().compute_goals(&profile);

    let config = IntelligenceConfig::default();
    let bmr = calculate_bmr(70.0, 175.0, 25, Sex::Female, &config.bmr);
    let tdee = calculate_tdee(bmr, ActivityLevel::Moderate, &config.activity_factors);
    assert_eq!(goals.tdee, tdee.round_ties_even() as i64);
    assert_eq!(goals.calorie_goal, goals.tdee);
    assert_eq!(goals.protein_goal_g, 126);
}

#[test]
fn test_goals_are_deterministic() {
    let engine = engine();
    let profile = common::reference_profile(GoalCategory::Gain);
    let first = serde_json::to_string(&engine.compute_goals(&profile)).unwrap();
    let second = serde_json::to_string(&engine.compute_goals(&profile)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_macro_energy_within_rounding_of_shares() {
    let engine = engine();
    let shares = [
        (GoalCategory::Lose, 0.60),
        (GoalCategory::Gain, 0.75),
        (GoalCategory::Maintain, 0.70),
    ];
    for (goal, share) in shares {
        let goals = engine.compute_goals(&common::reference_profile(goal));
        let macro_kcal = (goals.carbs_goal_g * 4 + goals.fat_goal_g * 9) as f64;
        let expected = goals.calorie_goal as f64 * share;
        assert!(
            (macro_kcal - expected).abs() <= 7.5,
            "{goal:?}: {macro_kcal} vs {expected}"
        );
    }
}

// ============================================================================
// MEAL RECOMMENDATIONS
// ============================================================================

#[test]
fn test_recommendations_non_empty_for_every_goal() {
    let engine = engine();
    for goal in GoalCategory::ALL {
        assert_eq!(engine.recommend_meals(goal).len(), 4);
    }
}

#[test]
fn test_unrecognized_goal_recommendations_equal_maintain() {
    let engine = engine();
    let unknown = engine.recommend_meals(GoalCategory::from_str_lossy("paleo"));
    assert_eq!(unknown, engine.recommend_meals(GoalCategory::Maintain));
}

#[test]
fn test_recommendations_serialize_with_slots_and_ingredients() {
    let engine = engine();
    let json = serde_json::to_value(engine.recommend_meals(GoalCategory::Gain)).unwrap();

    assert_eq!(json[1]["name"], "Banana-oat protein smoothie");
    assert_eq!(json[1]["meal_slot"], "snack");
    assert_eq!(json[1]["ingredients"][0], "whey");
}

#[test]
fn test_search_meals_matches_substring() {
    let engine = engine();
    let names: Vec<&str> = engine
        .search_meals("Chicken")
        .iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "Grilled chicken with steamed vegetables",
            "Whole-wheat pasta with chicken",
        ]
    );
}

// ============================================================================
// TIPS
// ============================================================================

#[test]
fn test_tips_hydration_first_and_bounded() {
    let engine = engine();
    let t = common::base_time();
    let meal_sets = [
        vec![],
        vec![common::meal_at(t, 500.0, 10.0)],
        vec![common::meal_at(t, 500.0, 150.0)],
    ];
    for activity_level in [ActivityLevel::Sedentary, ActivityLevel::VeryActive] {
        for meals in &meal_sets {
            let mut profile = common::reference_profile(GoalCategory::Lose);
            profile.activity_level = activity_level;

            let result = engine.generate_tips(&profile, meals);
            assert!(result.tips.len() <= 3);
            assert_eq!(result.tips[0].icon, "water_drop");
            assert_eq!(result.tips[0].priority, TipPriority::High);
        }
    }
}

#[test]
fn test_tips_protein_message_embeds_goal() {
    let t = common::base_time();
    let result = engine().generate_tips(
        &common::reference_profile(GoalCategory::Lose),
        &[common::meal_at(t, 400.0, 20.0)],
    );

    let protein = result.tips.iter().find(|tip| tip.icon == "spa").unwrap();
    assert!(protein.message.contains("154g"));
    // 154 - 20
    assert!(result.next_step.description.contains("134g"));
    assert_eq!(result.goals.protein_goal_g, 154);
}

#[test]
fn test_tips_json_shape() {
    let result = engine().generate_tips(&common::reference_profile(GoalCategory::Maintain), &[]);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["tips"][0]["priority"], "high");
    assert_eq!(json["next_step"]["calories"], 320);
    assert_eq!(json["next_step"]["protein_g"], 25);
    assert_eq!(json["goals"]["calorie_goal"], 2594);
}
