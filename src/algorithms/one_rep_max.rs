// ABOUTME: One-rep-max estimation via the Brzycki formula, PR detection, and BMI
// ABOUTME: Non-positive inputs return neutral values rather than erroring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! One-rep-max estimation and related strength math.
//!
//! # Scientific References
//!
//! - Brzycki, M. (1993). Strength testing - predicting a one-rep max from
//!   reps-to-fatigue. *Journal of Physical Education, Recreation & Dance*,
//!   64(1), 88-90. <https://doi.org/10.1080/07303084.1993.10606684>

use crate::models::PersonalRecord;
use tracing::trace;

/// Estimate a one-rep max from a submaximal set using the Brzycki formula.
///
/// Formula: `1RM = weight x 36 / (37 - reps)`, rounded to the nearest
/// integer. A single rep returns the weight unchanged. Above 12 reps the
/// Brzycki denominator degrades, so a linear approximation
/// `weight x (1 + reps/30)` is used instead - less accurate, documented
/// behavior rather than something to "correct".
///
/// Non-positive weight or zero reps yields the neutral value `0.0`;
/// callers are expected to filter such sets before they reach formulas.
#[must_use]
pub fn estimate_one_rm(weight_kg: f64, reps: u32) -> f64 {
    if weight_kg <= 0.0 || reps == 0 {
        return 0.0;
    }
    if reps == 1 {
        return weight_kg;
    }
    let estimate = if reps > 12 {
        weight_kg * (1.0 + f64::from(reps) / 30.0)
    } else {
        weight_kg * 36.0 / (37.0 - f64::from(reps))
    };
    trace!(weight_kg, reps, estimate, "estimated one-rep max");
    estimate.round()
}

/// Whether a new effort sets a personal record.
///
/// True when there is no current best; otherwise the new estimated 1RM must
/// be strictly greater - a tie is not a PR.
#[must_use]
pub fn is_personal_record(
    new_weight_kg: f64,
    new_reps: u32,
    current_best: Option<&PersonalRecord>,
) -> bool {
    match current_best {
        None => true,
        Some(best) => estimate_one_rm(new_weight_kg, new_reps) > best.estimated_one_rm,
    }
}

/// Body mass index from weight (kg) and height (cm).
///
/// Returns `0.0` on non-positive input.
#[must_use]
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_rep_returns_weight() {
        assert!((estimate_one_rm(100.0, 1) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_brzycki_five_reps() {
        // 100 * 36 / 32 = 112.5, rounds to 113
        assert!((estimate_one_rm(100.0, 5) - 113.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_linear_fallback_above_twelve_reps() {
        // 100 * (1 + 15/30) = 150
        assert!((estimate_one_rm(100.0, 15) - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_input_is_neutral() {
        assert!((estimate_one_rm(0.0, 5)).abs() < f64::EPSILON);
        assert!((estimate_one_rm(-10.0, 5)).abs() < f64::EPSILON);
        assert!((estimate_one_rm(100.0, 0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pr_requires_strictly_greater_estimate() {
        let best = PersonalRecord {
            weight_kg: 100.0,
            reps: 5,
            estimated_one_rm: 113.0,
        };
        // Same estimated 1RM: not a PR
        assert!(!is_personal_record(100.0, 5, Some(&best)));
        assert!(is_personal_record(102.5, 5, Some(&best)));
        assert!(is_personal_record(60.0, 1, None));
    }

    #[test]
    fn test_bmi() {
        let bmi = body_mass_index(80.0, 180.0);
        assert!((bmi - 24.69).abs() < 0.01);
        assert!(body_mass_index(80.0, 0.0).abs() < f64::EPSILON);
    }
}
