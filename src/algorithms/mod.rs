// ABOUTME: Leaf numeric calculators - 1RM estimation, plate math, warm-up ladders
// ABOUTME: Pure functions with no engine state; everything above builds on these
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Unit calculators used throughout the decision engine.

/// One-rep-max estimation, PR detection, and BMI
pub mod one_rep_max;
/// Per-side barbell plate breakdown
pub mod plates;
/// Warm-up set ladder generation
pub mod warmup;

pub use one_rep_max::{body_mass_index, estimate_one_rm, is_personal_record};
pub use plates::{plate_breakdown, PlateBreakdown, PLATE_SET_KG};
pub use warmup::{warmup_ladder, WarmupSet};
