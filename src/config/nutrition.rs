// ABOUTME: Nutrition recommender configuration - BMR coefficients, activity factors, goal tables
// ABOUTME: Includes hydration dosing knobs; defaults carry the production values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Nutrition Configuration
//!
//! Coefficients for the Mifflin-St Jeor BMR formula, TDEE activity factors,
//! per-goal calorie/protein/fat adjustments, and hydration dosing.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2).
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::models::FitnessGoal;
use serde::{Deserialize, Serialize};

/// Nutrition recommender configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// TDEE activity factors
    pub activity_factors: ActivityFactorsConfig,
    /// Per-goal calorie and macro adjustments
    pub goals: GoalAdjustmentsConfig,
    /// Hydration dosing
    pub hydration: HydrationConfig,
}

/// Mifflin-St Jeor coefficients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (kcal per kg)
    pub weight_coef: f64,
    /// Height coefficient (kcal per cm)
    pub height_coef: f64,
    /// Age coefficient (kcal per year, negative)
    pub age_coef: f64,
    /// Additive constant for males
    pub male_constant: f64,
    /// Additive constant for females
    pub female_constant: f64,
    /// Additive constant for the weight-only fallback when gender is unknown
    pub unspecified_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: 10.0,
            height_coef: 6.25,
            age_coef: -5.0,
            male_constant: 5.0,
            female_constant: -161.0,
            unspecified_constant: 625.0,
        }
    }
}

/// TDEE activity multipliers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Little structured exercise
    pub low: f64,
    /// 3-5 sessions per week
    pub moderate: f64,
    /// Near-daily training
    pub high: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            low: 1.2,
            moderate: 1.55,
            high: 1.725,
        }
    }
}

/// Per-goal calorie multiplier, protein dose, and fat percentage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Calorie multiplier applied to TDEE per goal:
    /// (muscle gain, fat loss, recomposition, maintenance)
    pub calorie_multipliers: GoalTable,
    /// Protein dose in g/kg bodyweight per goal
    pub protein_g_per_kg: GoalTable,
    /// Fat share of daily calories per goal (fraction)
    pub fat_calorie_fraction: GoalTable,
    /// Flat calorie bonus on training days (kcal)
    pub workout_day_calorie_bonus: f64,
    /// Minimum daily carbohydrates (g)
    pub carbs_floor_g: f64,
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            calorie_multipliers: GoalTable {
                muscle_gain: 1.15,
                fat_loss: 0.80,
                recomposition: 1.0,
                maintenance: 1.0,
            },
            protein_g_per_kg: GoalTable {
                muscle_gain: 2.2,
                fat_loss: 2.4,
                recomposition: 2.0,
                maintenance: 1.8,
            },
            fat_calorie_fraction: GoalTable {
                muscle_gain: 0.25,
                fat_loss: 0.28,
                recomposition: 0.26,
                maintenance: 0.27,
            },
            workout_day_calorie_bonus: 200.0,
            carbs_floor_g: 50.0,
        }
    }
}

/// One numeric knob per fitness goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalTable {
    /// Value for the muscle-gain goal
    pub muscle_gain: f64,
    /// Value for the fat-loss goal
    pub fat_loss: f64,
    /// Value for the recomposition goal
    pub recomposition: f64,
    /// Value for the maintenance goal
    pub maintenance: f64,
}

impl GoalTable {
    /// Look up the value for a goal
    #[must_use]
    pub const fn get(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::MuscleGain => self.muscle_gain,
            FitnessGoal::FatLoss => self.fat_loss,
            FitnessGoal::Recomposition => self.recomposition,
            FitnessGoal::Maintenance => self.maintenance,
        }
    }
}

/// Hydration dosing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Baseline dose in ml per kg bodyweight
    pub base_ml_per_kg: f64,
    /// Per-goal addition to the baseline dose (ml/kg)
    pub goal_adjustment_ml_per_kg: GoalTable,
    /// Height above which the dose is scaled up (cm)
    pub tall_height_cm: f64,
    /// Height below which the dose is scaled down (cm)
    pub short_height_cm: f64,
    /// Multiplier above the tall threshold
    pub tall_multiplier: f64,
    /// Multiplier below the short threshold
    pub short_multiplier: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            base_ml_per_kg: 40.0,
            goal_adjustment_ml_per_kg: GoalTable {
                muscle_gain: 5.0,
                fat_loss: 3.0,
                recomposition: 4.0,
                maintenance: 0.0,
            },
            tall_height_cm: 180.0,
            short_height_cm: 165.0,
            tall_multiplier: 1.1,
            short_multiplier: 0.9,
        }
    }
}
