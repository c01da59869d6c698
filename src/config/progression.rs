// ABOUTME: Progression engine configuration - load increments and completion thresholds
// ABOUTME: Holds the locale-specific keyword lists used to classify exercises by increment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Progression Engine Configuration
//!
//! Increment sizes per exercise class, the set-completion thresholds that
//! gate a load increase, and the substring keyword lists (Spanish and
//! English) used to classify an exercise by name.

use serde::{Deserialize, Serialize};

/// Progression engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Increment for lower-body compound lifts (kg)
    pub compound_increment_kg: f64,
    /// Increment for everything not otherwise classified (kg)
    pub default_increment_kg: f64,
    /// Increment for isolation lifts (kg)
    pub isolation_increment_kg: f64,
    /// Fraction of target sets that must hit the top of the rep range for a
    /// half-increment micro progression
    pub micro_progression_completion: f64,
    /// Name substrings marking a lower-body compound lift
    pub compound_keywords: Vec<String>,
    /// Name substrings marking an isolation lift
    pub isolation_keywords: Vec<String>,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            compound_increment_kg: 5.0,
            default_increment_kg: 2.5,
            isolation_increment_kg: 1.25,
            micro_progression_completion: 0.8,
            compound_keywords: [
                "squat",
                "deadlift",
                "leg press",
                "hip thrust",
                "prensa",
                "sentadilla",
                "peso muerto",
            ]
            .map(str::to_owned)
            .to_vec(),
            isolation_keywords: [
                "curl",
                "extension",
                "lateral raise",
                "fly",
                "kickback",
                "face pull",
                "apertura",
            ]
            .map(str::to_owned)
            .to_vec(),
        }
    }
}
