// ABOUTME: Habit recommender and the tagged system/user habit variant
// ABOUTME: Conditional blocks keyed on BMI, goal, sleep, stress, and experience
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Habit recommendations and habit state.
//!
//! Two concerns live here. The recommender assembles a priority-ranked list
//! of habits from conditional blocks over the user profile. Separately,
//! [`Habit`] is the tagged union distinguishing system habits (auto-completed
//! from other tracked state via a check function) from user habits (manually
//! toggled), dispatched by pattern match rather than shape inspection.

use crate::models::{ExperienceLevel, FitnessGoal};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category a recommended habit belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HabitCategory {
    /// Sleep hygiene
    Sleep,
    /// Food and hydration
    Nutrition,
    /// Training behavior
    Training,
    /// Stress and mindset
    Mindset,
    /// Everything else (skin care, sunlight, steps)
    Lifestyle,
}

/// A recommended habit with its priority rank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedHabit {
    /// Short habit title
    pub title: String,
    /// Why and how to do it
    pub description: String,
    /// Habit category
    pub category: HabitCategory,
    /// Priority 1-10; the output list is sorted descending
    pub priority: u8,
}

/// Inputs to the habit recommender
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HabitInputs {
    /// Body mass index
    pub bmi: f64,
    /// Current training goal
    pub goal: FitnessGoal,
    /// Self-reported sleep quality, 1-10
    pub sleep_quality: u8,
    /// Self-reported stress level, 1-10
    pub stress_level: u8,
    /// Training experience
    pub experience: ExperienceLevel,
}

/// Assemble the priority-ranked habit list for a profile.
///
/// Blocks fire independently; the final list is sorted descending by
/// priority (stable, so block order breaks ties).
#[must_use]
pub fn recommend_habits(inputs: &HabitInputs) -> Vec<RecommendedHabit> {
    let mut habits = Vec::new();

    // Always-on foundations
    habits.push(habit(
        "Train on every planned day",
        "Consistency drives progression more than any single session",
        HabitCategory::Training,
        9,
    ));
    habits.push(habit(
        "Hit the daily hydration target",
        "Spread intake across the day instead of catching up at night",
        HabitCategory::Nutrition,
        8,
    ));
    habits.push(habit(
        "Morning skin care with SPF",
        "Daily sunscreen regardless of weather",
        HabitCategory::Lifestyle,
        3,
    ));

    if inputs.sleep_quality < 6 {
        habits.push(habit(
            "Fixed lights-out time",
            "Same bedtime every night, screens away 30 minutes before",
            HabitCategory::Sleep,
            10,
        ));
        habits.push(habit(
            "No caffeine after 14:00",
            "Late caffeine is a common cause of poor sleep scores",
            HabitCategory::Sleep,
            7,
        ));
    }

    if inputs.stress_level > 6 {
        habits.push(habit(
            "5 minutes of breathing work",
            "Box breathing or equivalent, once a day",
            HabitCategory::Mindset,
            7,
        ));
        habits.push(habit(
            "Daily walk without the phone",
            "20 minutes outside, no inputs",
            HabitCategory::Mindset,
            6,
        ));
    }

    if inputs.bmi >= 30.0 {
        habits.push(habit(
            "Daily step target",
            "8000+ steps of low-impact movement on top of training",
            HabitCategory::Lifestyle,
            9,
        ));
    } else if inputs.bmi > 0.0 && inputs.bmi < 18.5 {
        habits.push(habit(
            "Add a calorie-dense snack",
            "An extra snack makes the surplus achievable without huge meals",
            HabitCategory::Nutrition,
            9,
        ));
    }

    match inputs.goal {
        FitnessGoal::MuscleGain => habits.push(habit(
            "Protein with every meal",
            "Spread the daily protein target across 4-5 feedings",
            HabitCategory::Nutrition,
            8,
        )),
        FitnessGoal::FatLoss => habits.push(habit(
            "Log every meal before eating",
            "Logging first keeps the deficit honest",
            HabitCategory::Nutrition,
            8,
        )),
        FitnessGoal::Recomposition | FitnessGoal::Maintenance => habits.push(habit(
            "Weekly weigh-in, same conditions",
            "One consistent data point per week beats daily noise",
            HabitCategory::Lifestyle,
            5,
        )),
    }

    match inputs.experience {
        ExperienceLevel::Beginner => habits.push(habit(
            "Film one working set per session",
            "Checking form early prevents plateaus later",
            HabitCategory::Training,
            6,
        )),
        ExperienceLevel::Intermediate => {}
        ExperienceLevel::Advanced => habits.push(habit(
            "Schedule deloads in advance",
            "Every 4-6 weeks, planned rather than forced",
            HabitCategory::Training,
            5,
        )),
    }

    habits.sort_by(|a, b| b.priority.cmp(&a.priority));
    habits
}

fn habit(title: &str, description: &str, category: HabitCategory, priority: u8) -> RecommendedHabit {
    RecommendedHabit {
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        priority,
    }
}

/// Context a system habit checks itself against
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HabitContext {
    /// Water logged today (ml)
    pub hydration_logged_ml: u32,
    /// Today's hydration target (ml)
    pub hydration_target_ml: u32,
    /// Protein logged today (g)
    pub protein_logged_g: u32,
    /// Today's protein target (g)
    pub protein_target_g: u32,
    /// Whether a session was completed today
    pub trained_today: bool,
}

/// A habit whose completion is computed from other tracked state
#[derive(Debug, Clone)]
pub struct SystemHabit {
    /// Stable identifier
    pub id: &'static str,
    /// Habit title
    pub title: &'static str,
    check: fn(&HabitContext) -> bool,
}

/// A habit the user toggles manually
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserHabit {
    /// Row identifier
    pub id: Uuid,
    /// Habit title
    pub title: String,
    /// Manually toggled completion state
    pub completed: bool,
}

/// Tagged habit variant: system habits auto-complete, user habits are manual
#[derive(Debug, Clone)]
pub enum Habit {
    /// Completion computed from [`HabitContext`]
    System(SystemHabit),
    /// Completion toggled by the user
    User(UserHabit),
}

impl Habit {
    /// Whether the habit counts as completed right now
    #[must_use]
    pub fn is_completed(&self, ctx: &HabitContext) -> bool {
        match self {
            Self::System(system) => (system.check)(ctx),
            Self::User(user) => user.completed,
        }
    }

    /// Display title
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::System(system) => system.title,
            Self::User(user) => &user.title,
        }
    }
}

/// The built-in system habits
#[must_use]
pub fn system_habits() -> Vec<SystemHabit> {
    vec![
        SystemHabit {
            id: "hydration-target",
            title: "Hit the hydration target",
            check: |ctx| ctx.hydration_target_ml > 0 && ctx.hydration_logged_ml >= ctx.hydration_target_ml,
        },
        SystemHabit {
            id: "protein-target",
            title: "Hit the protein target",
            check: |ctx| ctx.protein_target_g > 0 && ctx.protein_logged_g >= ctx.protein_target_g,
        },
        SystemHabit {
            id: "trained-today",
            title: "Complete today's session",
            check: |ctx| ctx.trained_today,
        },
    ]
}
