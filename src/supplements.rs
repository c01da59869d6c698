// ABOUTME: Supplement recommender - an ordered rule table over goal, training day, and sleep
// ABOUTME: Rule order is fixed; later rules may assume earlier ones already fired
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Supplement recommendations.
//!
//! A fixed, ordered list of (predicate, record) rules. Evaluation order is
//! part of the contract: the output list always presents essentials first in
//! a stable order, and downstream consumers rely on it.

use crate::models::FitnessGoal;
use serde::{Deserialize, Serialize};

/// How strongly a supplement is recommended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SupplementPriority {
    /// Core of the stack, take daily
    Essential,
    /// Clear benefit for this user today
    Recommended,
    /// Worth considering
    Optional,
}

/// One supplement recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementDecision {
    /// Supplement name
    pub name: String,
    /// When to take it
    pub timing: String,
    /// How much to take
    pub dosage: String,
    /// Priority tier
    pub priority: SupplementPriority,
    /// Why the rule fired
    pub reason: String,
}

/// Inputs to the supplement rule table
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SupplementInputs {
    /// Whether today is a training day
    pub workout_day: bool,
    /// Current training goal
    pub goal: FitnessGoal,
    /// Self-reported sleep quality, 1-10
    pub sleep_quality: u8,
}

/// Evaluate the supplement rule table for today.
///
/// Rules fire in a fixed order; identical inputs always produce the same
/// list in the same order.
#[must_use]
pub fn recommend_supplements(inputs: &SupplementInputs) -> Vec<SupplementDecision> {
    let mut out = Vec::new();
    let muscle_gain = inputs.goal == FitnessGoal::MuscleGain;

    // 1. Creatine: always essential
    out.push(decision(
        "Creatine monohydrate",
        "With any meal",
        "5 g daily",
        SupplementPriority::Essential,
        "Best-evidenced ergogenic for strength training",
    ));

    // 2. Whey: essential on training days or when building muscle
    if inputs.workout_day || muscle_gain {
        out.push(decision(
            "Whey protein",
            "Within 2 hours after training, or with any meal",
            "25-30 g per serving",
            SupplementPriority::Essential,
            "Helps reach the daily protein target",
        ));
    }

    // 3. Pre-workout: training days only
    if inputs.workout_day {
        out.push(decision(
            "Pre-workout (caffeine)",
            "30 minutes before training",
            "150-200 mg caffeine",
            SupplementPriority::Recommended,
            "Acute performance support for today's session",
        ));
    }

    // 4. Omega-3: always recommended
    out.push(decision(
        "Omega-3 (EPA/DHA)",
        "With a main meal",
        "1-2 g combined EPA/DHA",
        SupplementPriority::Recommended,
        "Joint and cardiovascular support",
    ));

    // 5. ZMA when sleep quality is poor
    if inputs.sleep_quality < 7 {
        out.push(decision(
            "ZMA",
            "30 minutes before bed",
            "1 serving",
            SupplementPriority::Recommended,
            "Sleep quality reported below 7/10",
        ));
    }

    // 6. Casein: slow protein on training days while gaining
    if inputs.workout_day && muscle_gain {
        out.push(decision(
            "Casein protein",
            "Before bed",
            "25-30 g",
            SupplementPriority::Optional,
            "Overnight amino acid availability during a surplus",
        ));
    }

    // 7. Vitamin D: always optional
    out.push(decision(
        "Vitamin D3",
        "With breakfast",
        "1000-2000 IU daily",
        SupplementPriority::Optional,
        "Baseline micronutrient support",
    ));

    out
}

fn decision(
    name: &str,
    timing: &str,
    dosage: &str,
    priority: SupplementPriority,
    reason: &str,
) -> SupplementDecision {
    SupplementDecision {
        name: name.to_owned(),
        timing: timing.to_owned(),
        dosage: dosage.to_owned(),
        priority,
        reason: reason.to_owned(),
    }
}
