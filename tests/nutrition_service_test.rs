// ABOUTME: Integration tests for NutritionService over the in-memory store
// ABOUTME: Verifies window sizes, unknown-user errors, and end-to-end results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Duration;
use smartdiet::config::ServiceConfig;
use smartdiet::errors::ErrorCode;
use smartdiet::models::{GoalCategory, WeightSample};
use smartdiet::services::NutritionService;
use smartdiet::stores::InMemoryStore;
use smartdiet::{IntelligenceConfig, MealCatalog, NutritionEngine};
use smartdiet_intelligence::WeightTrend;
use std::sync::Arc;
use uuid::Uuid;

mod common;

fn service(store: InMemoryStore, config: ServiceConfig) -> NutritionService<InMemoryStore> {
    let engine = NutritionEngine::with_config(
        IntelligenceConfig::default(),
        Arc::new(MealCatalog::builtin()),
    );
    NutritionService::new(Arc::new(store), engine, config)
}

#[tokio::test]
async fn test_goals_for_stored_profile() {
    let (store, user) = common::store_with_user(GoalCategory::Lose);
    let goals = service(store, ServiceConfig::default())
        .goals(user)
        .await
        .unwrap();

    assert_eq!(goals.calorie_goal, 2094);
    assert_eq!(goals.protein_goal_g, 154);
}

#[tokio::test]
async fn test_unknown_user_not_found() {
    common::init_test_logging();
    let service = service(InMemoryStore::new(), ServiceConfig::default());
    let user = Uuid::new_v4();

    let err = service.goals(user).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.http_status(), 404);

    assert!(service.recommendations(user).await.is_err());
    assert!(service.health_tips(user).await.is_err());
    assert!(service.progress(user).await.is_err());
    assert!(service.stats_summary(user).await.is_err());
    assert!(service
        .daily_stats(user, common::day(2025, 6, 15))
        .await
        .is_err());
}

#[tokio::test]
async fn test_recommendations_follow_profile_goal() {
    let (store, user) = common::store_with_user(GoalCategory::Gain);
    let meals = service(store, ServiceConfig::default())
        .recommendations(user)
        .await
        .unwrap();

    assert_eq!(meals.len(), 4);
    assert_eq!(meals[0].name, "Brown rice with grilled salmon");
}

#[tokio::test]
async fn test_health_tips_use_meal_window() {
    let (store, user) = common::store_with_user(GoalCategory::Maintain);
    let t = common::base_time();
    // newest meal is protein-rich, older ones are not
    store
        .log_meal(user, common::meal_at(t, 700.0, 200.0))
        .unwrap();
    for hours in 1..=5 {
        store
            .log_meal(user, common::meal_at(t - Duration::hours(hours), 300.0, 5.0))
            .unwrap();
    }

    let narrow = ServiceConfig {
        tips_meal_window: 1,
        ..ServiceConfig::default()
    };
    let tips = service(store.clone(), narrow)
        .health_tips(user)
        .await
        .unwrap();
    assert!(tips.tips.iter().all(|tip| tip.icon != "spa"));

    let tips = service(store, ServiceConfig::default())
        .health_tips(user)
        .await
        .unwrap();
    assert_eq!(tips.tips[1].icon, "spa");
}

#[tokio::test]
async fn test_progress_end_to_end() {
    let (store, user) = common::store_with_user(GoalCategory::Lose);
    for sample in common::weights_newest_first(&[71.0, 71.3, 72.0]) {
        store.log_weight(user, sample).unwrap();
    }
    store
        .log_meal(user, common::meal_at(common::base_time(), 1047.0, 60.0))
        .unwrap();

    let report = service(store, ServiceConfig::default())
        .progress(user)
        .await
        .unwrap();

    assert_eq!(report.weight_trend, WeightTrend::Excellent);
    // 1047 / 2094
    assert!((report.calorie_adherence_pct - 50.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_progress_window_limits_weights() {
    let (store, user) = common::store_with_user(GoalCategory::Lose);
    for sample in common::weights_newest_first(&[71.0, 71.2, 75.0]) {
        store.log_weight(user, sample).unwrap();
    }

    let config = ServiceConfig {
        progress_weight_window: 2,
        ..ServiceConfig::default()
    };
    let report = service(store, config).progress(user).await.unwrap();

    // only 71.0 and 71.2 are inside the window
    assert_eq!(report.weight_trend, WeightTrend::Stable);
}

#[tokio::test]
async fn test_daily_stats_only_counts_that_day() {
    let (store, user) = common::store_with_user(GoalCategory::Maintain);
    let t = common::base_time();
    store.log_meal(user, common::meal_at(t, 500.0, 30.0)).unwrap();
    store
        .log_meal(user, common::meal_at(t - Duration::hours(3), 250.0, 20.0))
        .unwrap();
    store
        .log_meal(user, common::meal_at(t - Duration::days(2), 900.0, 40.0))
        .unwrap();

    let stats = service(store, ServiceConfig::default())
        .daily_stats(user, t.date_naive())
        .await
        .unwrap();

    assert_eq!(stats.meal_count, 2);
    assert!((stats.total_calories - 750.0).abs() < 1e-9);
    assert!((stats.total_protein_g - 50.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_stats_summary() {
    let (store, user) = common::store_with_user(GoalCategory::Maintain);
    let t = common::base_time();
    for i in 0..3 {
        store
            .log_meal(user, common::meal_at(t - Duration::hours(i), 400.0, 25.0))
            .unwrap();
    }
    store
        .log_weight(
            user,
            WeightSample {
                weight_kg: 70.4,
                date: common::day(2025, 6, 14),
            },
        )
        .unwrap();

    let summary = service(store, ServiceConfig::default())
        .stats_summary(user)
        .await
        .unwrap();

    assert_eq!(summary.total_meals, 3);
    assert_eq!(summary.recent_meals_count, 3);
    assert_eq!(summary.total_weight_logs, 1);
    assert!((summary.current_weight_kg - 70.0).abs() < f64::EPSILON);
    assert_eq!(summary.goals.calorie_goal, 2594);
}

#[tokio::test]
async fn test_profile_update_changes_goals() {
    let (store, user) = common::store_with_user(GoalCategory::Maintain);
    let service = service(store.clone(), ServiceConfig::default());
    assert_eq!(service.goals(user).await.unwrap().calorie_goal, 2594);

    store
        .upsert_profile(user, common::reference_profile(GoalCategory::Gain))
        .unwrap();
    assert_eq!(service.goals(user).await.unwrap().calorie_goal, 3094);
}
