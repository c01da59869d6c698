// ABOUTME: Configuration module for the Atlas intelligence crate
// ABOUTME: Aggregates per-engine config structs and the process-wide default instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Decision-engine configuration.
//!
//! Every tuned constant the engines rely on lives here, in one struct per
//! concern, each with a `Default` carrying the production values. Engine
//! entry points take config references so tests and deployments can override
//! individual knobs; `IntelligenceConfig::global()` is the shared default
//! instance for callers that do not.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Nutrition, hydration, and meal-distribution configuration
pub mod nutrition;
/// Plateau analyzer thresholds
pub mod plateau;
/// Progression engine increments and completion thresholds
pub mod progression;

pub use nutrition::{ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, HydrationConfig, NutritionConfig};
pub use plateau::PlateauConfig;
pub use progression::ProgressionConfig;

/// Top-level configuration for the decision engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Progression engine settings
    pub progression: ProgressionConfig,
    /// Plateau analyzer settings
    pub plateau: PlateauConfig,
    /// Nutrition recommender settings
    pub nutrition: NutritionConfig,
}

static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

impl IntelligenceConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(Self::default)
    }
}
