// ABOUTME: Warm-up ladder generation from working weight and bar weight
// ABOUTME: Percentage ladder scales with working-weight magnitude; weights snap to 2.5 kg
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Warm-up set ladders.
//!
//! Heavier working weights get more intermediate rungs. Each rung's weight is
//! the working weight scaled by the rung percentage and snapped to the
//! nearest 2.5 kg; reps and rest come from a fixed schedule keyed by the
//! percentage bracket. The 0% rung is the empty bar at the given bar weight.

use serde::{Deserialize, Serialize};

/// One rung of a warm-up ladder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarmupSet {
    /// Percentage of the working weight
    pub percent: u32,
    /// Load for the set, snapped to the nearest 2.5 kg
    pub weight_kg: f64,
    /// Prescribed repetitions
    pub reps: u32,
    /// Rest before the next set (seconds)
    pub rest_seconds: u32,
}

/// Build the warm-up ladder for a working weight on the given bar.
///
/// Ladders: above 100 kg `[0, 40, 55, 70, 80, 90]`%, above 60 kg
/// `[0, 50, 70, 85]`%, otherwise `[0, 60, 80]`%. The 0% rung is the empty
/// bar, so its weight is `bar_kg`. A non-positive working weight yields an
/// empty ladder.
#[must_use]
pub fn warmup_ladder(working_weight_kg: f64, bar_kg: f64) -> Vec<WarmupSet> {
    if working_weight_kg <= 0.0 {
        return Vec::new();
    }

    let percentages: &[u32] = if working_weight_kg > 100.0 {
        &[0, 40, 55, 70, 80, 90]
    } else if working_weight_kg > 60.0 {
        &[0, 50, 70, 85]
    } else {
        &[0, 60, 80]
    };

    percentages
        .iter()
        .map(|&percent| {
            let weight_kg = if percent == 0 {
                bar_kg
            } else {
                let raw = working_weight_kg * f64::from(percent) / 100.0;
                (raw / 2.5).round() * 2.5
            };
            let (reps, rest_seconds) = schedule_for(percent);
            WarmupSet {
                percent,
                weight_kg,
                reps,
                rest_seconds,
            }
        })
        .collect()
}

/// Reps and rest for a percentage bracket, tapering from 8x60s to 2x90s
const fn schedule_for(percent: u32) -> (u32, u32) {
    if percent <= 50 {
        (8, 60)
    } else if percent <= 70 {
        (5, 60)
    } else if percent < 85 {
        (3, 75)
    } else {
        (2, 90)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heavy_ladder_has_six_rungs() {
        let ladder = warmup_ladder(140.0, 20.0);
        let percents: Vec<u32> = ladder.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![0, 40, 55, 70, 80, 90]);
        // 140 * 0.55 = 77, snaps to 77.5
        assert!((ladder[2].weight_kg - 77.5).abs() < f64::EPSILON);
        assert_eq!(ladder[5].reps, 2);
        assert_eq!(ladder[5].rest_seconds, 90);
    }

    #[test]
    fn test_zero_percent_rung_is_the_bar() {
        let ladder = warmup_ladder(140.0, 20.0);
        assert_eq!(ladder[0].percent, 0);
        assert!((ladder[0].weight_kg - 20.0).abs() < f64::EPSILON);

        let womens_bar = warmup_ladder(80.0, 15.0);
        assert!((womens_bar[0].weight_kg - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mid_ladder() {
        let ladder = warmup_ladder(80.0, 20.0);
        let percents: Vec<u32> = ladder.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![0, 50, 70, 85]);
        assert_eq!(ladder[1].reps, 8);
        assert_eq!(ladder[3].reps, 2);
    }

    #[test]
    fn test_light_ladder_snaps_to_plate_granularity() {
        let ladder = warmup_ladder(42.5, 20.0);
        let percents: Vec<u32> = ladder.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![0, 60, 80]);
        // 42.5 * 0.6 = 25.5 snaps to 25.0
        assert!((ladder[1].weight_kg - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_weight_yields_empty_ladder() {
        assert!(warmup_ladder(0.0, 20.0).is_empty());
    }
}
