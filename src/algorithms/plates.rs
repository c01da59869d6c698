// ABOUTME: Greedy per-side barbell plate breakdown over the standard metric plate set
// ABOUTME: Remainder is re-rounded to 2 decimals each step to keep float drift out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Per-side plate loading for a target barbell weight.

use serde::{Deserialize, Serialize};

/// Standard metric plate denominations, largest first (kg)
pub const PLATE_SET_KG: [f64; 7] = [25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25];

/// Result of a plate breakdown for one side of the bar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateBreakdown {
    /// Plates to load on each side, largest first (kg)
    pub per_side_plates: Vec<f64>,
    /// Weight that could not be matched with available plates (kg, per side)
    pub remainder_kg: f64,
    /// False when the remainder exceeds 0.01 kg
    pub exact: bool,
}

/// Compute the per-side plate loading for a target total weight.
///
/// Greedy largest-first allocation over [`PLATE_SET_KG`]. The per-side
/// remainder starts at `(target - bar) / 2` and is rounded to 2 decimals
/// after each subtraction. A target at or below the bar weight yields an
/// empty, exact breakdown.
#[must_use]
pub fn plate_breakdown(target_kg: f64, bar_kg: f64) -> PlateBreakdown {
    let mut remaining = round2((target_kg - bar_kg) / 2.0);
    if remaining <= 0.0 {
        return PlateBreakdown {
            per_side_plates: Vec::new(),
            remainder_kg: 0.0,
            exact: true,
        };
    }

    let mut per_side_plates = Vec::new();
    for &plate in &PLATE_SET_KG {
        while plate <= remaining {
            per_side_plates.push(plate);
            remaining = round2(remaining - plate);
        }
    }

    PlateBreakdown {
        per_side_plates,
        remainder_kg: remaining,
        exact: remaining <= 0.01,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_breakdown_100kg_on_20kg_bar() {
        // (100 - 20) / 2 = 40 per side
        let result = plate_breakdown(100.0, 20.0);
        assert_eq!(result.per_side_plates, vec![25.0, 10.0, 5.0]);
        assert!(result.exact);
        assert!(result.remainder_kg.abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_plates_97_5kg() {
        // (97.5 - 20) / 2 = 38.75 per side
        let result = plate_breakdown(97.5, 20.0);
        assert_eq!(result.per_side_plates, vec![25.0, 10.0, 2.5, 1.25]);
        assert!(result.exact);
    }

    #[test]
    fn test_inexact_remainder_is_flagged() {
        // (101 - 20) / 2 = 40.5 per side; 0.5 cannot be loaded
        let result = plate_breakdown(101.0, 20.0);
        assert!(!result.exact);
        assert!((result.remainder_kg - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_target_below_bar_is_empty_and_exact() {
        let result = plate_breakdown(15.0, 20.0);
        assert!(result.per_side_plates.is_empty());
        assert!(result.exact);
    }
}
