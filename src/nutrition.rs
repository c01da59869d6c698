// ABOUTME: Nutrition recommender - Mifflin-St Jeor macros, hydration dosing, meal distribution
// ABOUTME: Display calories are recomputed from rounded gram targets, by contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Daily nutrition targets.
//!
//! BMR via Mifflin-St Jeor, TDEE via activity factor, calories via the goal
//! multiplier (plus a flat training-day bonus), then protein/fat/carbs in
//! that order. After the gram targets are rounded, the displayed calorie
//! total is recomputed as `protein*4 + carbs*4 + fat*9` so the numbers shown
//! to the user are always internally consistent. That recompute step is a
//! contract, not a rounding artifact.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::nutrition::{BmrConfig, NutritionConfig};
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityLevel, FitnessGoal, Gender, UserProfile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// User parameters for the daily nutrition calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NutritionParams {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age: u32,
    /// Biological gender for the BMR formula
    pub gender: Gender,
    /// Activity level for the TDEE multiplier
    pub activity_level: ActivityLevel,
    /// Training goal for calorie and macro adjustments
    pub goal: FitnessGoal,
    /// Whether today is a training day (+200 kcal flat)
    pub workout_day: bool,
}

impl NutritionParams {
    /// Build the calculation inputs from a stored profile.
    ///
    /// Age is derived from the profile's date of birth as of `on`.
    ///
    /// # Errors
    ///
    /// Returns an error when the profile carries no date of birth, since the
    /// BMR formula requires an age.
    pub fn from_profile(
        profile: &UserProfile,
        on: NaiveDate,
        activity_level: ActivityLevel,
        workout_day: bool,
    ) -> AppResult<Self> {
        let age = profile
            .age_years(on)
            .ok_or_else(|| AppError::invalid_input("Profile has no date of birth"))?;
        Ok(Self {
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            age,
            gender: profile.gender,
            activity_level,
            goal: profile.fitness_goal,
            workout_day,
        })
    }
}

/// Complete daily nutrition targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionDecision {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Total daily energy expenditure (kcal/day)
    pub tdee: f64,
    /// Displayed daily calories, recomputed from the rounded gram targets
    pub daily_calories: u32,
    /// Daily protein target (g)
    pub protein_g: u32,
    /// Daily carbohydrate target (g)
    pub carbs_g: u32,
    /// Daily fat target (g)
    pub fat_g: u32,
    /// Daily hydration target, always a multiple of 100 (ml)
    pub hydration_ml: u32,
    /// Goal the targets were computed for
    pub goal: FitnessGoal,
    /// Whether the training-day bonus was applied
    pub workout_day: bool,
    /// Calculation method used
    pub method: String,
}

/// Calculate basal metabolic rate using the Mifflin-St Jeor equation.
///
/// Men: `10W + 6.25H - 5A + 5`; women: `10W + 6.25H - 5A - 161`. When the
/// gender is not provided a simplified weight-only fallback `10W + 625` is
/// used.
///
/// # Errors
///
/// Returns an error when weight, height, or age are outside validated ranges.
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> AppResult<f64> {
    if weight_kg <= 0.0 || weight_kg > 300.0 {
        return Err(AppError::out_of_range(
            "Weight must be between 0 and 300 kg",
        ));
    }
    if height_cm <= 0.0 || height_cm > 300.0 {
        return Err(AppError::out_of_range(
            "Height must be between 0 and 300 cm",
        ));
    }
    if !(10..=120).contains(&age) {
        return Err(AppError::out_of_range(
            "Age must be between 10 and 120 years",
        ));
    }

    let bmr = match gender {
        Gender::Male => {
            config.weight_coef * weight_kg
                + config.height_coef * height_cm
                + config.age_coef * f64::from(age)
                + config.male_constant
        }
        Gender::Female => {
            config.weight_coef * weight_kg
                + config.height_coef * height_cm
                + config.age_coef * f64::from(age)
                + config.female_constant
        }
        Gender::Unspecified => config.weight_coef * weight_kg + config.unspecified_constant,
    };
    Ok(bmr)
}

/// Calculate the complete daily nutrition targets.
///
/// # Errors
///
/// Returns an error when the profile inputs fail BMR validation.
pub fn nutrition_decision(
    params: &NutritionParams,
    config: &NutritionConfig,
) -> AppResult<NutritionDecision> {
    let bmr = calculate_bmr(
        params.weight_kg,
        params.height_cm,
        params.age,
        params.gender,
        &config.bmr,
    )?;

    let activity_factor = match params.activity_level {
        ActivityLevel::Low => config.activity_factors.low,
        ActivityLevel::Moderate => config.activity_factors.moderate,
        ActivityLevel::High => config.activity_factors.high,
    };
    let tdee = bmr * activity_factor;

    let mut calories = tdee * config.goals.calorie_multipliers.get(params.goal);
    if params.workout_day {
        calories += config.goals.workout_day_calorie_bonus;
    }

    let protein_g = (params.weight_kg * config.goals.protein_g_per_kg.get(params.goal)).round();
    let fat_g = (calories * config.goals.fat_calorie_fraction.get(params.goal) / 9.0).round();
    let carbs_g = ((calories - protein_g * 4.0 - fat_g * 9.0) / 4.0)
        .round()
        .max(config.goals.carbs_floor_g);

    // Recompute displayed calories from the rounded grams (contract)
    let daily_calories = protein_g * 4.0 + carbs_g * 4.0 + fat_g * 9.0;

    debug!(
        bmr,
        tdee, daily_calories, protein_g, carbs_g, fat_g, "nutrition targets computed"
    );

    Ok(NutritionDecision {
        bmr,
        tdee,
        daily_calories: daily_calories as u32,
        protein_g: protein_g as u32,
        carbs_g: carbs_g as u32,
        fat_g: fat_g as u32,
        hydration_ml: hydration_target_ml(
            params.weight_kg,
            params.height_cm,
            params.goal,
            config,
        ),
        goal: params.goal,
        workout_day: params.workout_day,
        method: "Mifflin-St Jeor + goal multiplier".to_owned(),
    })
}

/// Daily hydration target in milliliters, always a multiple of 100.
///
/// `round(weight x mlPerKg x heightMultiplier / 100) x 100`, where the
/// per-kg dose is the 40 ml baseline plus a goal adjustment, scaled up for
/// users over 180 cm and down under 165 cm. Non-positive weight yields 0.
#[must_use]
pub fn hydration_target_ml(
    weight_kg: f64,
    height_cm: f64,
    goal: FitnessGoal,
    config: &NutritionConfig,
) -> u32 {
    if weight_kg <= 0.0 {
        return 0;
    }
    let hydration = &config.hydration;
    let ml_per_kg = hydration.base_ml_per_kg + hydration.goal_adjustment_ml_per_kg.get(goal);
    let height_multiplier = if height_cm > hydration.tall_height_cm {
        hydration.tall_multiplier
    } else if height_cm < hydration.short_height_cm {
        hydration.short_multiplier
    } else {
        1.0
    };
    ((weight_kg * ml_per_kg * height_multiplier / 100.0).round() * 100.0) as u32
}

/// One meal slot of the daily distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPortion {
    /// Meal name
    pub meal: String,
    /// Suggested clock time, HH:MM
    pub suggested_time: String,
    /// Calories allotted to the slot
    pub calories: u32,
    /// Protein allotted to the slot (g)
    pub protein_g: u32,
    /// Carbohydrates allotted to the slot (g)
    pub carbs_g: u32,
    /// Fat allotted to the slot (g)
    pub fat_g: u32,
}

/// Meal slot percentages: (name, time, calories%, protein%, carbs%, fat%).
/// Each percentage column sums to 100.
type MealSlot = (&'static str, &'static str, u32, u32, u32, u32);

const WORKOUT_DAY_MEALS: [MealSlot; 5] = [
    ("Breakfast", "08:00", 20, 20, 20, 25),
    ("Mid-morning snack", "11:00", 10, 15, 10, 10),
    ("Lunch", "14:00", 30, 25, 30, 30),
    ("Pre/post-workout", "17:00", 15, 20, 25, 5),
    ("Dinner", "21:00", 25, 20, 15, 30),
];

const REST_DAY_MEALS: [MealSlot; 4] = [
    ("Breakfast", "08:00", 25, 25, 25, 25),
    ("Lunch", "13:30", 35, 30, 35, 35),
    ("Snack", "17:30", 10, 15, 10, 10),
    ("Dinner", "21:00", 30, 30, 30, 30),
];

/// Distribute the daily targets across fixed meal slots.
///
/// Training days use a 5-meal schedule with a slot around the session; rest
/// days use 4 meals, keyed off the decision's own `workout_day` flag. Slot
/// percentages and suggested times are fixed.
#[must_use]
pub fn meal_plan(decision: &NutritionDecision) -> Vec<MealPortion> {
    let slots: &[MealSlot] = if decision.workout_day {
        &WORKOUT_DAY_MEALS
    } else {
        &REST_DAY_MEALS
    };

    let apply = |total: u32, percent: u32| -> u32 {
        (f64::from(total) * f64::from(percent) / 100.0).round() as u32
    };

    slots
        .iter()
        .map(|&(meal, time, cal_pct, protein_pct, carbs_pct, fat_pct)| MealPortion {
            meal: meal.to_owned(),
            suggested_time: time.to_owned(),
            calories: apply(decision.daily_calories, cal_pct),
            protein_g: apply(decision.protein_g, protein_pct),
            carbs_g: apply(decision.carbs_g, carbs_pct),
            fat_g: apply(decision.fat_g, fat_pct),
        })
        .collect()
}
