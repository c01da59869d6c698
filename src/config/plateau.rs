// ABOUTME: Plateau analyzer configuration - trend thresholds and window sizes
// ABOUTME: Also carries the aggregate-level risk and trend classification fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Plateau Analyzer Configuration
//!
//! Thresholds for classifying a per-exercise trend and for grading the
//! aggregate plateau risk across all tracked exercises. The stall/plateau
//! thresholds count session steps, not calendar weeks; see the analyzer docs.

use serde::{Deserialize, Serialize};

/// Plateau analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauConfig {
    /// Minimum session summaries required for a real analysis
    pub min_history: usize,
    /// Size of the recent-history comparison window (sessions)
    pub recent_window: usize,
    /// Average weight change (percent) beyond which the trend is decisive
    pub weight_change_threshold_percent: f64,
    /// Average volume change (percent) beyond which the trend is decisive
    pub volume_change_threshold_percent: f64,
    /// Non-increasing session steps before the exercise counts as stalling
    pub stall_steps: u32,
    /// Non-increasing session steps before the exercise counts as plateaued
    pub plateau_steps: u32,
    /// Fraction of stalled/plateaued exercises that marks high plateau risk
    pub high_risk_fraction: f64,
    /// Fraction of stalled/plateaued exercises that marks medium plateau risk
    pub medium_risk_fraction: f64,
    /// Fraction of progressing exercises above which the overall trend improves
    pub improving_fraction: f64,
    /// Fraction of declining exercises above which the overall trend declines
    pub declining_fraction: f64,
    /// Sessions summed on each side of the weekly volume comparison
    pub volume_comparison_window: usize,
}

impl Default for PlateauConfig {
    fn default() -> Self {
        Self {
            min_history: 3,
            recent_window: 8,
            weight_change_threshold_percent: 5.0,
            volume_change_threshold_percent: 10.0,
            stall_steps: 2,
            plateau_steps: 4,
            high_risk_fraction: 0.4,
            medium_risk_fraction: 0.2,
            improving_fraction: 0.6,
            declining_fraction: 0.3,
            volume_comparison_window: 4,
        }
    }
}
