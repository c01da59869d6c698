// ABOUTME: Progression engine - decides whether and by how much to raise the working weight
// ABOUTME: Pure function of the last 1-2 sessions' logs; idempotent for identical input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Weight progression decisions.
//!
//! Given the target rep/set scheme and the sets actually logged, the engine
//! decides between a full increment (every set hit the top of the rep range),
//! a half-increment micro progression (at least 80% of sets did), or holding
//! the current weight. Increment size depends on the exercise class, derived
//! from name keywords held in [`ProgressionConfig`].

use crate::config::ProgressionConfig;
use crate::models::{ConfidenceLevel, ExerciseLogEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Target rep range and set count for an exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RepScheme {
    /// Bottom of the target rep range
    pub min_reps: u32,
    /// Top of the target rep range; a set "completes" at this count
    pub max_reps: u32,
    /// Target number of working sets
    pub sets: u32,
}

/// The engine's verdict for one exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionSuggestion {
    /// Exercise the suggestion applies to
    pub exercise: String,
    /// Whether to raise the working weight next session
    pub should_progress: bool,
    /// Heaviest working weight in the last session (kg)
    pub current_weight_kg: f64,
    /// Weight to load next session (kg)
    pub suggested_weight_kg: f64,
    /// Increment applied, zero when holding (kg)
    pub increment_applied_kg: f64,
    /// Why the engine decided what it did
    pub reason: String,
    /// How well the logs support the decision
    pub confidence: ConfidenceLevel,
    /// Consecutive sessions with every set completed (0 when not progressing)
    pub streak: u32,
}

/// Decide whether to progress the working weight for one exercise.
///
/// `last_session_logs` are the sets logged in the most recent session;
/// `previous_session_logs`, when available, only feed the streak counter.
/// The decision is a pure function of its arguments.
#[must_use]
pub fn progression_decision(
    exercise_name: &str,
    scheme: RepScheme,
    last_session_logs: &[ExerciseLogEntry],
    previous_session_logs: Option<&[ExerciseLogEntry]>,
    config: &ProgressionConfig,
) -> ProgressionSuggestion {
    let working: Vec<&ExerciseLogEntry> = last_session_logs
        .iter()
        .filter(|e| !e.is_warmup)
        .collect();

    if working.is_empty() {
        return hold(exercise_name, 0.0, "no working sets logged", ConfidenceLevel::Low);
    }

    let current_weight_kg = working
        .iter()
        .filter(|e| e.weight_kg > 0.0)
        .map(|e| e.weight_kg)
        .fold(0.0_f64, f64::max);
    if current_weight_kg <= 0.0 {
        return hold(exercise_name, 0.0, "no weight records", ConfidenceLevel::Low);
    }

    let increment = increment_for(exercise_name, config);
    let completed = working
        .iter()
        .filter(|e| e.reps_completed >= scheme.max_reps)
        .count() as u32;
    let micro_threshold =
        (f64::from(scheme.sets) * config.micro_progression_completion).ceil() as u32;

    debug!(
        exercise = exercise_name,
        completed,
        target_sets = scheme.sets,
        increment,
        "progression decision inputs"
    );

    if completed >= scheme.sets {
        let streak = if previous_session_logs.is_some_and(|logs| all_sets_completed(logs, scheme)) {
            2
        } else {
            1
        };
        return ProgressionSuggestion {
            exercise: exercise_name.to_owned(),
            should_progress: true,
            current_weight_kg,
            suggested_weight_kg: current_weight_kg + increment,
            increment_applied_kg: increment,
            reason: format!(
                "all {} sets reached {} reps - ready for more load",
                scheme.sets, scheme.max_reps
            ),
            confidence: ConfidenceLevel::High,
            streak,
        };
    }

    if completed >= micro_threshold {
        // Half increment; intentionally left unrounded even below plate
        // granularity for isolation lifts
        let half = increment / 2.0;
        return ProgressionSuggestion {
            exercise: exercise_name.to_owned(),
            should_progress: true,
            current_weight_kg,
            suggested_weight_kg: current_weight_kg + half,
            increment_applied_kg: half,
            reason: format!(
                "{completed} of {} sets reached {} reps - small increase",
                scheme.sets, scheme.max_reps
            ),
            confidence: ConfidenceLevel::Medium,
            streak: 1,
        };
    }

    if f64::from(completed) < f64::from(scheme.sets) / 2.0 {
        return hold(
            exercise_name,
            current_weight_kg,
            "maintain current weight until all sets are completed",
            ConfidenceLevel::High,
        );
    }

    hold(
        exercise_name,
        current_weight_kg,
        "close to target - repeat this weight next session",
        ConfidenceLevel::Medium,
    )
}

fn hold(
    exercise: &str,
    current_weight_kg: f64,
    reason: &str,
    confidence: ConfidenceLevel,
) -> ProgressionSuggestion {
    ProgressionSuggestion {
        exercise: exercise.to_owned(),
        should_progress: false,
        current_weight_kg,
        suggested_weight_kg: current_weight_kg,
        increment_applied_kg: 0.0,
        reason: reason.to_owned(),
        confidence,
        streak: 0,
    }
}

/// Increment size for an exercise, classified by name substrings.
///
/// Lower-body compounds move in 5 kg steps, isolation lifts in 1.25 kg,
/// everything else in 2.5 kg. Matching is case-insensitive over the Spanish
/// and English keyword lists in the config.
#[must_use]
pub fn increment_for(exercise_name: &str, config: &ProgressionConfig) -> f64 {
    let name = exercise_name.to_lowercase();
    if config.compound_keywords.iter().any(|k| name.contains(k)) {
        config.compound_increment_kg
    } else if config.isolation_keywords.iter().any(|k| name.contains(k)) {
        config.isolation_increment_kg
    } else {
        config.default_increment_kg
    }
}

fn all_sets_completed(logs: &[ExerciseLogEntry], scheme: RepScheme) -> bool {
    let completed = logs
        .iter()
        .filter(|e| !e.is_warmup && e.reps_completed >= scheme.max_reps)
        .count() as u32;
    completed >= scheme.sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn set(weight: f64, reps: u32) -> ExerciseLogEntry {
        ExerciseLogEntry {
            weight_kg: weight,
            reps_completed: reps,
            is_warmup: false,
            set_number: 1,
            workout_session_id: Uuid::nil(),
            exercise_id: Uuid::nil(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 2, 18, 0, 0).unwrap(),
        }
    }

    fn scheme() -> RepScheme {
        RepScheme {
            min_reps: 8,
            max_reps: 10,
            sets: 3,
        }
    }

    #[test]
    fn test_all_sets_complete_full_increment() {
        let logs = vec![set(100.0, 10), set(100.0, 10), set(100.0, 10)];
        let result = progression_decision(
            "Back Squat",
            scheme(),
            &logs,
            None,
            &ProgressionConfig::default(),
        );
        assert!(result.should_progress);
        assert_eq!(result.confidence, ConfidenceLevel::High);
        assert!((result.suggested_weight_kg - 105.0).abs() < f64::EPSILON);
        assert_eq!(result.streak, 1);
    }

    #[test]
    fn test_streak_counts_previous_completed_session() {
        let logs = vec![set(100.0, 10), set(100.0, 10), set(100.0, 10)];
        let previous = vec![set(97.5, 10), set(97.5, 10), set(97.5, 10)];
        let result = progression_decision(
            "Bench Press",
            scheme(),
            &logs,
            Some(&previous),
            &ProgressionConfig::default(),
        );
        assert!(result.should_progress);
        assert_eq!(result.streak, 2);
        // Bench is neither lower-body compound nor isolation: 2.5 kg step
        assert!((result.increment_applied_kg - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_struggling_holds_weight_with_high_confidence() {
        let logs = vec![set(100.0, 10), set(100.0, 4), set(100.0, 3)];
        let result = progression_decision(
            "Back Squat",
            scheme(),
            &logs,
            None,
            &ProgressionConfig::default(),
        );
        assert!(!result.should_progress);
        assert_eq!(result.confidence, ConfidenceLevel::High);
        assert!((result.suggested_weight_kg - result.current_weight_kg).abs() < f64::EPSILON);
    }

    #[test]
    fn test_micro_progression_uses_half_increment() {
        // ceil(4 * 0.8) = 4 of 4... use 5 sets, 4 completed
        let five = RepScheme {
            min_reps: 8,
            max_reps: 10,
            sets: 5,
        };
        let logs = vec![
            set(30.0, 10),
            set(30.0, 10),
            set(30.0, 10),
            set(30.0, 10),
            set(30.0, 8),
        ];
        let result = progression_decision(
            "Biceps Curl",
            five,
            &logs,
            None,
            &ProgressionConfig::default(),
        );
        assert!(result.should_progress);
        assert_eq!(result.confidence, ConfidenceLevel::Medium);
        // Isolation increment 1.25 halved, deliberately unrounded
        assert!((result.increment_applied_kg - 0.625).abs() < f64::EPSILON);
    }

    #[test]
    fn test_warmups_only_is_no_data() {
        let mut warmup = set(60.0, 10);
        warmup.is_warmup = true;
        let result = progression_decision(
            "Back Squat",
            scheme(),
            &[warmup],
            None,
            &ProgressionConfig::default(),
        );
        assert!(!result.should_progress);
        assert_eq!(result.confidence, ConfidenceLevel::Low);
    }

    #[test]
    fn test_keyword_classification_spanish() {
        let config = ProgressionConfig::default();
        assert!((increment_for("Sentadilla frontal", &config) - 5.0).abs() < f64::EPSILON);
        assert!((increment_for("Apertura con mancuernas", &config) - 1.25).abs() < f64::EPSILON);
        assert!((increment_for("Press militar", &config) - 2.5).abs() < f64::EPSILON);
    }
}
