// ABOUTME: Integration tests for the strength decision pipeline through public interfaces
// ABOUTME: Raw set logs flow into progression, plate math, warmups, and plateau analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use atlas_intelligence::algorithms::{estimate_one_rm, plate_breakdown, warmup_ladder};
use atlas_intelligence::config::IntelligenceConfig;
use atlas_intelligence::models::{summarize_session, ConfidenceLevel, ExerciseLogEntry};
use atlas_intelligence::plateau::{
    analyze_exercise_progress, analyze_overall_progress, ExerciseHistory, PlateauRisk,
    ProgressStatus,
};
use atlas_intelligence::progression::{progression_decision, RepScheme};
use chrono::{NaiveDate, TimeZone, Utc};
use uuid::Uuid;

fn log_entry(weight: f64, reps: u32, set: u32) -> ExerciseLogEntry {
    ExerciseLogEntry {
        weight_kg: weight,
        reps_completed: reps,
        is_warmup: false,
        set_number: set,
        workout_session_id: Uuid::nil(),
        exercise_id: Uuid::nil(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 2, 18, 30, 0).unwrap(),
    }
}

fn session_of(date: NaiveDate, weight: f64, reps: u32, sets: u32) -> ExerciseHistory {
    let entries: Vec<ExerciseLogEntry> =
        (1..=sets).map(|s| log_entry(weight, reps, s)).collect();
    ExerciseHistory {
        exercise_id: Uuid::nil(),
        sessions: vec![summarize_session(date, &entries).unwrap()],
    }
}

// === Progression to loading pipeline ===

#[test]
fn test_completed_session_yields_loadable_next_weight() {
    let config = IntelligenceConfig::global();
    let logs = vec![
        log_entry(100.0, 10, 1),
        log_entry(100.0, 10, 2),
        log_entry(100.0, 10, 3),
    ];
    let scheme = RepScheme {
        min_reps: 8,
        max_reps: 10,
        sets: 3,
    };

    let suggestion =
        progression_decision("Back Squat", scheme, &logs, None, &config.progression);
    assert!(suggestion.should_progress);
    assert_eq!(suggestion.confidence, ConfidenceLevel::High);
    assert!((suggestion.suggested_weight_kg - 105.0).abs() < f64::EPSILON);

    // The suggested weight must be loadable on a standard bar
    let plates = plate_breakdown(suggestion.suggested_weight_kg, 20.0);
    assert!(plates.exact);
    assert_eq!(plates.per_side_plates, vec![25.0, 15.0, 2.5]);

    // And warmable: heavy ladder from the empty bar up to just under the
    // working weight
    let ladder = warmup_ladder(suggestion.suggested_weight_kg, 20.0);
    assert_eq!(ladder.len(), 6);
    assert!((ladder[0].weight_kg - 20.0).abs() < f64::EPSILON);
    let top = ladder.last().unwrap();
    assert_eq!(top.percent, 90);
    assert!(top.weight_kg < suggestion.suggested_weight_kg);
}

#[test]
fn test_incomplete_session_holds_and_estimates_match() {
    let config = IntelligenceConfig::global();
    let logs = vec![
        log_entry(100.0, 10, 1),
        log_entry(100.0, 5, 2),
        log_entry(100.0, 4, 3),
    ];
    let scheme = RepScheme {
        min_reps: 8,
        max_reps: 10,
        sets: 3,
    };

    let suggestion =
        progression_decision("Back Squat", scheme, &logs, None, &config.progression);
    assert!(!suggestion.should_progress);
    assert!((suggestion.suggested_weight_kg - 100.0).abs() < f64::EPSILON);

    // The best set still produces a sane 1RM estimate for display
    let one_rm = estimate_one_rm(100.0, 10);
    assert!((one_rm - 133.0).abs() < f64::EPSILON);
}

// === Log-to-plateau pipeline ===

#[test]
fn test_flat_logged_history_reaches_plateaued() {
    let config = IntelligenceConfig::global();
    let base = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();

    // Eight identical sessions summarized straight from set logs
    let mut history = Vec::new();
    for week in 0..8 {
        let date = base - chrono::Duration::weeks(week);
        let entries = vec![
            log_entry(100.0, 5, 1),
            log_entry(100.0, 5, 2),
            log_entry(100.0, 5, 3),
        ];
        history.push(summarize_session(date, &entries).unwrap());
    }

    let analysis = analyze_exercise_progress(Uuid::nil(), &history, &config.plateau);
    assert_eq!(analysis.status, ProgressStatus::Plateaued);
    assert!(analysis.weeks_since_progress >= 4);
    assert!(!analysis.suggested_changes.is_empty());

    let pr = analysis.personal_record.unwrap();
    assert!((pr.weight_kg - 100.0).abs() < f64::EPSILON);
    assert!((pr.estimated_one_rm - estimate_one_rm(100.0, 5)).abs() < f64::EPSILON);
}

#[test]
fn test_single_session_per_exercise_is_low_risk() {
    let config = IntelligenceConfig::global();
    let date = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
    let exercises = vec![
        session_of(date, 100.0, 5, 3),
        session_of(date, 60.0, 8, 3),
        session_of(date, 40.0, 12, 3),
    ];

    // One session each: insufficient data everywhere, so risk stays low
    let overall = analyze_overall_progress(&exercises, &config.plateau);
    assert_eq!(overall.total_exercises, 3);
    assert_eq!(overall.progressing, 3);
    assert_eq!(overall.plateau_risk, PlateauRisk::Low);
}

#[test]
fn test_warmup_sets_never_reach_the_engines() {
    let config = IntelligenceConfig::global();
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let mut entries = vec![
        log_entry(100.0, 5, 2),
        log_entry(100.0, 5, 3),
        log_entry(100.0, 5, 4),
    ];
    let mut warmup = log_entry(140.0, 3, 1);
    warmup.is_warmup = true;
    entries.insert(0, warmup);

    // The heavier warm-up must not count as the session best
    let summary = summarize_session(date, &entries).unwrap();
    assert!((summary.max_weight_kg - 100.0).abs() < f64::EPSILON);
    assert_eq!(summary.working_sets, 3);

    let scheme = RepScheme {
        min_reps: 3,
        max_reps: 5,
        sets: 3,
    };
    let suggestion =
        progression_decision("Deadlift", scheme, &entries, None, &config.progression);
    assert!((suggestion.current_weight_kg - 100.0).abs() < f64::EPSILON);
    // Deadlift classifies as a lower-body compound: 5 kg step
    assert!((suggestion.increment_applied_kg - 5.0).abs() < f64::EPSILON);
}
