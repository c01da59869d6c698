// ABOUTME: Library entry point for the Atlas strength coaching decision engine
// ABOUTME: Pure, stateless analytics - callers load data, the engine only computes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

#![deny(unsafe_code)]

//! # Atlas Intelligence
//!
//! The decision-engine core of the Atlas fitness platform: strength
//! calculators, progression and plateau analysis, and nutrition, supplement,
//! and habit recommenders.
//!
//! Every entry point is a pure function over caller-supplied data. The crate
//! holds no connections, performs no I/O, and never reads the clock; anything
//! time-dependent (today's weekday, the hour of day) is passed in explicitly.
//! Identical inputs always produce identical outputs, which keeps every
//! decision unit-testable and reproducible.
//!
//! ## Modules
//!
//! - [`algorithms`]: one-rep-max estimation, plate breakdowns, warmup ladders
//! - [`progression`]: per-exercise load progression verdicts
//! - [`plateau`]: stagnation detection over session history
//! - [`nutrition`]: Mifflin-St Jeor macros, hydration targets, meal plans
//! - [`supplements`]: the ordered supplement rule table
//! - [`habits`]: habit recommendations and system/user habit state
//! - [`alerts`]: the proactive alert aggregator over all of the above
//!
//! ## Example
//!
//! ```rust
//! use atlas_intelligence::algorithms::{estimate_one_rm, warmup_ladder};
//!
//! let one_rm = estimate_one_rm(100.0, 5);
//! assert_eq!(one_rm, 113.0);
//!
//! let ladder = warmup_ladder(100.0, 20.0);
//! assert_eq!(ladder.last().map(|set| set.percent), Some(85));
//! ```

/// Strength calculators: 1RM estimation, plate math, warmup ladders
pub mod algorithms;

/// Proactive alert aggregation
pub mod alerts;

/// Tunable constants for every engine, with a process-wide default set
pub mod config;

/// Error codes and the crate-wide result alias
pub mod errors;

/// Habit recommendations and the system/user habit variant
pub mod habits;

/// Shared domain models (logs, sessions, profiles, confidence)
pub mod models;

/// Nutrition targets, hydration, and meal distribution
pub mod nutrition;

/// Plateau and stagnation analysis
pub mod plateau;

/// Load progression decisions
pub mod progression;

/// Supplement recommendations
pub mod supplements;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::ConfidenceLevel;
