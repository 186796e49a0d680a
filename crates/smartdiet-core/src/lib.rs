// ABOUTME: Core types and constants for the SmartDiet nutrition engine
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # SmartDiet Core
//!
//! Foundation crate providing shared types and constants for the SmartDiet
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Energy densities, default windows, and service identifiers
//! - **models**: Profile, logged meals, weight samples, and the meal catalog entry

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Profile, `MealEntry`, `WeightSample`, `CatalogEntry`)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
