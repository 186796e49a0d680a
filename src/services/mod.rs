// ABOUTME: Domain service layer wiring stores to the nutrition engine
// ABOUTME: Provides protocol-agnostic services reusable by any request layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services are protocol-agnostic: a REST handler, a CLI, or a job runner can
//! all call them and get the same business rules.

/// Goals, recommendations, tips, progress, and stats per user
pub mod nutrition;

pub use nutrition::NutritionService;
