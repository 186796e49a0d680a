// ABOUTME: Configuration module for smartdiet-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (energy model, goals, tips, progress)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;
