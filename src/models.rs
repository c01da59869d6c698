// ABOUTME: Core value types consumed and produced by the decision engine
// ABOUTME: Log entries, session summaries, user profile fields, and shared grading enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Core data models for the decision engine.
//!
//! Everything here is a plain, JSON-serializable value type. Input shapes
//! mirror what the logging and profile collaborators store; output shapes are
//! derived fresh on every request and never persisted by this crate.

use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged set for one exercise. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLogEntry {
    /// Load lifted, in kilograms
    pub weight_kg: f64,
    /// Repetitions completed in this set
    pub reps_completed: u32,
    /// Warm-up sets are excluded from all working-set math
    pub is_warmup: bool,
    /// 1-based position of the set within the session
    pub set_number: u32,
    /// Session this set belongs to
    pub workout_session_id: Uuid,
    /// Exercise this set belongs to
    pub exercise_id: Uuid,
    /// When the set was logged
    pub created_at: DateTime<Utc>,
}

/// A workout session record from the session collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Session identifier
    pub id: Uuid,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Set when the user finished the session
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkoutSession {
    /// Whether the user finished the session
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Whether any session on the given date was completed.
///
/// Derives the alert aggregator's `session_completed_today` flag from the
/// session records the caller already has loaded.
#[must_use]
pub fn session_completed_on(date: NaiveDate, sessions: &[WorkoutSession]) -> bool {
    sessions.iter().any(|s| s.date == date && s.is_completed())
}

/// Per-exercise, per-session aggregate: the best working set of the session.
///
/// Derived, never stored. Exactly one summary exists per (exercise, session)
/// pair, and trend calculations require summaries ordered by session date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session the summary was derived from
    pub session_id: Uuid,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Max weight among non-warmup sets
    pub max_weight_kg: f64,
    /// Reps completed at that max weight
    pub reps_at_max: u32,
    /// Number of working (non-warmup) sets in the session
    pub working_sets: u32,
}

impl SessionSummary {
    /// Session volume: weight x reps x sets
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.max_weight_kg * f64::from(self.reps_at_max) * f64::from(self.working_sets)
    }
}

/// Derive the session summary for one exercise from its logged sets.
///
/// Warm-up sets and non-positive weights are ignored. Returns `None` when no
/// working set remains - callers treat that as "no data", never as an error.
#[must_use]
pub fn summarize_session(date: NaiveDate, entries: &[ExerciseLogEntry]) -> Option<SessionSummary> {
    let working: Vec<&ExerciseLogEntry> = entries
        .iter()
        .filter(|e| !e.is_warmup && e.weight_kg > 0.0)
        .collect();

    let best = working
        .iter()
        .copied()
        .max_by(|a, b| {
            a.weight_kg
                .partial_cmp(&b.weight_kg)
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;

    Some(SessionSummary {
        session_id: best.workout_session_id,
        date,
        max_weight_kg: best.weight_kg,
        reps_at_max: best.reps_completed,
        working_sets: working.len() as u32,
    })
}

/// Biological gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (BMR constant +5)
    Male,
    /// Female (BMR constant -161)
    Female,
    /// Not provided; a simplified weight-only BMR fallback is used
    Unspecified,
}

/// Training goal driving calorie, macro, and hydration adjustments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric surplus, high protein
    MuscleGain,
    /// Caloric deficit, highest protein for muscle preservation
    FatLoss,
    /// Maintenance calories, elevated protein
    Recomposition,
    /// Maintenance calories and baseline protein
    Maintenance,
}

/// Weekly activity level for the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little structured exercise
    Low,
    /// Training most weeks, 3-5 sessions
    Moderate,
    /// Training near daily
    High,
}

/// Self-reported training experience, used by the habit recommender
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// Under a year of consistent training
    Beginner,
    /// One to three years
    Intermediate,
    /// Three or more years
    Advanced,
}

/// Profile fields consumed by the recommenders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Date of birth, when provided
    pub date_of_birth: Option<NaiveDate>,
    /// Biological gender
    pub gender: Gender,
    /// Current training goal
    pub fitness_goal: FitnessGoal,
    /// Body fat percentage, when measured
    pub body_fat_percentage: Option<f64>,
}

impl UserProfile {
    /// Age in whole years on the given date, if a birth date is known
    #[must_use]
    pub fn age_years(&self, on: NaiveDate) -> Option<u32> {
        let dob = self.date_of_birth?;
        let mut age = on.years_since(dob)?;
        // years_since already accounts for month/day; clamp for same-day edge
        if age > 150 {
            age = 150;
        }
        Some(age)
    }
}

/// The user's preferred weekly training schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSchedule {
    /// Preferred training weekdays
    pub preferred_workout_days: Vec<Weekday>,
    /// Target sessions per week
    pub workout_days_per_week: u8,
}

impl TrainingSchedule {
    /// Whether the given weekday is a planned training day
    #[must_use]
    pub fn is_training_day(&self, day: Weekday) -> bool {
        self.preferred_workout_days.contains(&day)
    }
}

/// Confidence grading attached to derived suggestions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Little supporting data
    Low,
    /// Partial supporting data
    Medium,
    /// Decision is well supported by the logs
    High,
}

impl ConfidenceLevel {
    /// Convert to numeric score (0.0 to 1.0)
    #[must_use]
    pub const fn as_score(self) -> f64 {
        match self {
            Self::Low => 0.25,
            Self::Medium => 0.5,
            Self::High => 0.9,
        }
    }
}

/// A user's best recorded effort for one exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Weight lifted, in kilograms
    pub weight_kg: f64,
    /// Reps completed at that weight
    pub reps: u32,
    /// Brzycki-estimated one-rep max for the effort
    pub estimated_one_rm: f64,
}
