// ABOUTME: Configuration module for service-level settings
// ABOUTME: Re-exports the environment-driven service configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service configuration
//!
//! Algorithm coefficients live in `smartdiet_intelligence::config`; this
//! module only covers how the service queries its stores.

/// Environment and service configuration
pub mod environment;

pub use environment::ServiceConfig;
