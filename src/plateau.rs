// ABOUTME: Plateau and stagnation analyzer over per-session best-set volumes
// ABOUTME: Classifies each exercise's trend and aggregates plateau risk across exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Plateau and stagnation detection.
//!
//! Each exercise's session summaries are split into a recent window and the
//! older remainder; average weight and volume changes between the halves,
//! together with a count of non-increasing session steps, classify the trend
//! as progressing, stalling, plateaued, or declining.
//!
//! `weeks_since_progress` counts consecutive session steps without a new
//! best volume, not elapsed calendar weeks. The stall (>=2) and plateau
//! (>=4) thresholds are tuned against step counts, so this field keeps the
//! step semantics deliberately.

use crate::algorithms::estimate_one_rm;
use crate::config::PlateauConfig;
use crate::models::{PersonalRecord, SessionSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Trend classification for one exercise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    /// Load or volume is still climbing
    Progressing,
    /// No new best for a couple of sessions
    Stalling,
    /// Sustained lack of progress
    Plateaued,
    /// Load or volume is dropping
    Declining,
}

/// Analysis result for a single exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauAnalysis {
    /// Exercise the analysis applies to
    pub exercise_id: Uuid,
    /// Trend classification
    pub status: ProgressStatus,
    /// Consecutive session steps without a new best volume
    pub weeks_since_progress: u32,
    /// Average volume change, recent window vs older history (percent)
    pub volume_change_percent: f64,
    /// Average weight change, recent window vs older history (percent)
    pub weight_change_percent: f64,
    /// Predicted sessions until a plateau, when growth is slowing
    pub predicted_plateau_in_weeks: Option<u32>,
    /// Best recorded effort across the whole history
    pub personal_record: Option<PersonalRecord>,
    /// One-line guidance for the user
    pub recommendation: String,
    /// Concrete actions, 2-5 per status
    pub suggested_changes: Vec<String>,
}

/// Session history for one exercise, input to the aggregate analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseHistory {
    /// Exercise identifier
    pub exercise_id: Uuid,
    /// Session summaries, any order
    pub sessions: Vec<SessionSummary>,
}

/// Plateau risk across the whole program
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlateauRisk {
    /// Few exercises are stuck
    Low,
    /// A fifth or more of exercises are stuck
    Medium,
    /// Two fifths or more of exercises are stuck
    High,
}

/// Direction of the program as a whole
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverallTrend {
    /// Most exercises are progressing
    Improving,
    /// Mixed signals
    Maintaining,
    /// A large share of exercises are declining
    Declining,
}

/// Aggregate analysis across all tracked exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallProgressAnalysis {
    /// Number of exercises analyzed
    pub total_exercises: usize,
    /// Exercises classified progressing
    pub progressing: usize,
    /// Exercises classified stalling
    pub stalling: usize,
    /// Exercises classified plateaued
    pub plateaued: usize,
    /// Exercises classified declining
    pub declining: usize,
    /// Graded plateau risk
    pub plateau_risk: PlateauRisk,
    /// Overall direction
    pub overall_trend: OverallTrend,
    /// Summed recent-window volume vs the window before it (percent)
    pub weekly_volume_change_percent: f64,
    /// The per-exercise analyses the aggregate was built from
    pub analyses: Vec<PlateauAnalysis>,
}

/// Analyze the progress trend for a single exercise.
///
/// Fewer than three summaries yields the insufficient-data default:
/// `progressing` with zero signal and a "log more sessions" recommendation.
#[must_use]
pub fn analyze_exercise_progress(
    exercise_id: Uuid,
    history: &[SessionSummary],
    config: &PlateauConfig,
) -> PlateauAnalysis {
    if history.len() < config.min_history {
        return PlateauAnalysis {
            exercise_id,
            status: ProgressStatus::Progressing,
            weeks_since_progress: 0,
            volume_change_percent: 0.0,
            weight_change_percent: 0.0,
            predicted_plateau_in_weeks: None,
            personal_record: None,
            recommendation:
                "Not enough data to analyze progress yet - log at least 3 sessions".to_owned(),
            suggested_changes: Vec::new(),
        };
    }

    let mut sorted = history.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let personal_record = find_personal_record(&sorted);

    // Recent window of up to 8 sessions; when the whole history fits inside
    // the window, split it in half so short histories still yield a trend
    let recent_len = if sorted.len() > config.recent_window {
        config.recent_window
    } else {
        sorted.len() / 2
    };
    let (recent, old) = sorted.split_at(recent_len.max(1));

    let recent_volume = average(recent, SessionSummary::volume);
    let recent_weight = average(recent, |s| s.max_weight_kg);
    // Empty old half falls back to the recent average, yielding 0% change
    let (old_volume, old_weight) = if old.is_empty() {
        (recent_volume, recent_weight)
    } else {
        (average(old, SessionSummary::volume), average(old, |s| s.max_weight_kg))
    };

    let volume_change_percent = percent_change(recent_volume, old_volume);
    let weight_change_percent = percent_change(recent_weight, old_weight);
    let weeks_since_progress = non_increasing_steps(&sorted);

    let status = classify(
        weight_change_percent,
        volume_change_percent,
        weeks_since_progress,
        config,
    );

    debug!(
        %exercise_id,
        ?status,
        weight_change_percent,
        volume_change_percent,
        weeks_since_progress,
        "classified exercise trend"
    );

    let predicted_plateau_in_weeks = match status {
        ProgressStatus::Progressing
            if volume_change_percent > 0.0 && volume_change_percent < 5.0 =>
        {
            // Growth is slowing; extrapolate sessions until it flattens
            Some((4.0 - volume_change_percent / 2.0).round() as u32)
        }
        ProgressStatus::Stalling => Some(1),
        _ => None,
    };

    let (recommendation, suggested_changes) = guidance_for(status);

    PlateauAnalysis {
        exercise_id,
        status,
        weeks_since_progress,
        volume_change_percent,
        weight_change_percent,
        predicted_plateau_in_weeks,
        personal_record: Some(personal_record),
        recommendation,
        suggested_changes,
    }
}

/// Aggregate plateau risk and overall trend across all tracked exercises.
#[must_use]
pub fn analyze_overall_progress(
    all_exercises: &[ExerciseHistory],
    config: &PlateauConfig,
) -> OverallProgressAnalysis {
    let analyses: Vec<PlateauAnalysis> = all_exercises
        .iter()
        .map(|h| analyze_exercise_progress(h.exercise_id, &h.sessions, config))
        .collect();

    let total = analyses.len();
    let count = |status: ProgressStatus| analyses.iter().filter(|a| a.status == status).count();
    let progressing = count(ProgressStatus::Progressing);
    let stalling = count(ProgressStatus::Stalling);
    let plateaued = count(ProgressStatus::Plateaued);
    let declining = count(ProgressStatus::Declining);

    let (plateau_risk, overall_trend) = if total == 0 {
        (PlateauRisk::Low, OverallTrend::Maintaining)
    } else {
        let total_f = total as f64;
        let stuck_fraction = (stalling + plateaued) as f64 / total_f;
        let risk = if stuck_fraction > config.high_risk_fraction {
            PlateauRisk::High
        } else if stuck_fraction > config.medium_risk_fraction {
            PlateauRisk::Medium
        } else {
            PlateauRisk::Low
        };
        let trend = if progressing as f64 / total_f > config.improving_fraction {
            OverallTrend::Improving
        } else if declining as f64 / total_f > config.declining_fraction {
            OverallTrend::Declining
        } else {
            OverallTrend::Maintaining
        };
        (risk, trend)
    };

    let weekly_volume_change_percent = weekly_volume_change(all_exercises, config);

    OverallProgressAnalysis {
        total_exercises: total,
        progressing,
        stalling,
        plateaued,
        declining,
        plateau_risk,
        overall_trend,
        weekly_volume_change_percent,
        analyses,
    }
}

/// Best effort across the history; earlier (more recent) entry wins ties
fn find_personal_record(sorted_desc: &[SessionSummary]) -> PersonalRecord {
    let mut best = &sorted_desc[0];
    for entry in &sorted_desc[1..] {
        if entry.max_weight_kg > best.max_weight_kg {
            best = entry;
        }
    }
    PersonalRecord {
        weight_kg: best.max_weight_kg,
        reps: best.reps_at_max,
        estimated_one_rm: estimate_one_rm(best.max_weight_kg, best.reps_at_max),
    }
}

/// Count of consecutive older sessions that never beat the running max volume
fn non_increasing_steps(sorted_desc: &[SessionSummary]) -> u32 {
    let mut steps = 0;
    let max_volume = sorted_desc[0].volume();
    for entry in &sorted_desc[1..] {
        if entry.volume() <= max_volume {
            steps += 1;
        } else {
            break;
        }
    }
    steps
}

fn classify(
    weight_change: f64,
    volume_change: f64,
    steps: u32,
    config: &PlateauConfig,
) -> ProgressStatus {
    // Priority order matters: decisive trends win over step counts
    if weight_change > config.weight_change_threshold_percent
        || volume_change > config.volume_change_threshold_percent
    {
        ProgressStatus::Progressing
    } else if weight_change < -config.weight_change_threshold_percent
        || volume_change < -config.volume_change_threshold_percent
    {
        ProgressStatus::Declining
    } else if steps >= config.plateau_steps {
        ProgressStatus::Plateaued
    } else if steps >= config.stall_steps {
        ProgressStatus::Stalling
    } else {
        ProgressStatus::Progressing
    }
}

fn guidance_for(status: ProgressStatus) -> (String, Vec<String>) {
    match status {
        ProgressStatus::Progressing => (
            "Steady progress - keep the current plan and add load when sets feel easy".to_owned(),
            vec![
                "Keep the current rep ranges".to_owned(),
                "Add load whenever all sets hit the top of the range".to_owned(),
            ],
        ),
        ProgressStatus::Stalling => (
            "Progress is slowing - a small change now can prevent a plateau".to_owned(),
            vec![
                "Add a back-off set at 90% of the working weight".to_owned(),
                "Keep rest between 2 and 3 minutes".to_owned(),
                "Check sleep and calories this week".to_owned(),
            ],
        ),
        ProgressStatus::Plateaued => (
            "No new best volume for several sessions - change the stimulus".to_owned(),
            vec![
                "Deload 10% for one week, then rebuild".to_owned(),
                "Swap to a close variation of the lift".to_owned(),
                "Work a different rep range for 3-4 weeks".to_owned(),
                "Review recovery: sleep, stress, calories".to_owned(),
            ],
        ),
        ProgressStatus::Declining => (
            "Performance is dropping - prioritize recovery before adding load".to_owned(),
            vec![
                "Deload 10-15% this week".to_owned(),
                "Drop one set per exercise until numbers recover".to_owned(),
                "Audit sleep and nutrition".to_owned(),
                "Consider an extra rest day".to_owned(),
            ],
        ),
    }
}

fn average<F: Fn(&SessionSummary) -> f64>(slice: &[SessionSummary], f: F) -> f64 {
    if slice.is_empty() {
        return 0.0;
    }
    slice.iter().map(f).sum::<f64>() / slice.len() as f64
}

fn percent_change(recent: f64, old: f64) -> f64 {
    if old == 0.0 {
        return 0.0;
    }
    (recent - old) / old * 100.0
}

/// Summed recent-window volume vs the window before it, across all exercises
fn weekly_volume_change(all_exercises: &[ExerciseHistory], config: &PlateauConfig) -> f64 {
    let window = config.volume_comparison_window;
    let mut recent_total = 0.0;
    let mut previous_total = 0.0;
    for history in all_exercises {
        let mut sorted = history.sessions.clone();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        recent_total += sorted
            .iter()
            .take(window)
            .map(SessionSummary::volume)
            .sum::<f64>();
        previous_total += sorted
            .iter()
            .skip(window)
            .take(window)
            .map(SessionSummary::volume)
            .sum::<f64>();
    }
    percent_change(recent_total, previous_total)
}
