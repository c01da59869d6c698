// ABOUTME: Integration tests for the nutrition, supplement, habit, and alert recommenders
// ABOUTME: One profile flows through targets, meal plans, the rule tables, and the alert feed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use atlas_intelligence::alerts::{build_alerts, AlertContext, AlertSeverity};
use atlas_intelligence::algorithms::body_mass_index;
use atlas_intelligence::config::IntelligenceConfig;
use atlas_intelligence::habits::{recommend_habits, system_habits, Habit, HabitContext, HabitInputs};
use atlas_intelligence::models::{
    session_completed_on, ActivityLevel, ExperienceLevel, FitnessGoal, Gender, TrainingSchedule,
    WorkoutSession,
};
use atlas_intelligence::nutrition::{meal_plan, nutrition_decision, NutritionParams};
use atlas_intelligence::supplements::{recommend_supplements, SupplementInputs, SupplementPriority};
use chrono::{NaiveDate, Weekday};
use uuid::Uuid;

fn profile_params(workout_day: bool) -> NutritionParams {
    NutritionParams {
        weight_kg: 80.0,
        height_cm: 178.0,
        age: 30,
        gender: Gender::Male,
        activity_level: ActivityLevel::Moderate,
        goal: FitnessGoal::MuscleGain,
        workout_day,
    }
}

// === Nutrition through meals ===

#[test]
fn test_training_day_targets_feed_the_meal_plan() {
    let config = IntelligenceConfig::global();
    let decision = nutrition_decision(&profile_params(true), &config.nutrition).unwrap();

    // Displayed calories always reconcile with the rounded gram targets
    assert_eq!(
        decision.daily_calories,
        decision.protein_g * 4 + decision.carbs_g * 4 + decision.fat_g * 9
    );
    assert_eq!(decision.protein_g, 176);
    assert_eq!(decision.hydration_ml, 3600);

    let meals = meal_plan(&decision);
    assert_eq!(meals.len(), 5);
    // The pre/post-workout slot carries the carb spike
    let workout_slot = meals.iter().find(|m| m.meal == "Pre/post-workout").unwrap();
    assert!(workout_slot.carbs_g > workout_slot.fat_g);
}

#[test]
fn test_rest_day_drops_the_bonus_and_a_meal() {
    let config = IntelligenceConfig::global();
    let training = nutrition_decision(&profile_params(true), &config.nutrition).unwrap();
    let rest = nutrition_decision(&profile_params(false), &config.nutrition).unwrap();

    assert!(training.daily_calories > rest.daily_calories);
    assert_eq!(meal_plan(&rest).len(), 4);
    // Hydration does not depend on the training day
    assert_eq!(training.hydration_ml, rest.hydration_ml);
}

// === Supplements and habits for the same profile ===

#[test]
fn test_supplement_table_for_a_training_day() {
    let list = recommend_supplements(&SupplementInputs {
        workout_day: true,
        goal: FitnessGoal::MuscleGain,
        sleep_quality: 8,
    });

    // Essentials lead the list in fixed order
    assert_eq!(list[0].name, "Creatine monohydrate");
    assert_eq!(list[0].priority, SupplementPriority::Essential);
    assert!(list.iter().any(|s| s.name == "Pre-workout (caffeine)"));
    // Good sleep keeps ZMA out
    assert!(!list.iter().any(|s| s.name == "ZMA"));
}

#[test]
fn test_habits_use_the_computed_bmi() {
    let bmi = body_mass_index(80.0, 178.0);
    let habits = recommend_habits(&HabitInputs {
        bmi,
        goal: FitnessGoal::MuscleGain,
        sleep_quality: 8,
        stress_level: 3,
        experience: ExperienceLevel::Intermediate,
    });

    // Normal BMI: neither the step-count nor the extra-snack block fires
    assert!(!habits.iter().any(|h| h.title == "Daily step target"));
    assert!(!habits.iter().any(|h| h.title == "Add a calorie-dense snack"));
    // Muscle gain adds the protein-spread habit
    assert!(habits.iter().any(|h| h.title == "Protein with every meal"));
    assert!(habits.windows(2).all(|w| w[0].priority >= w[1].priority));
}

#[test]
fn test_system_habits_complete_against_nutrition_targets() {
    let config = IntelligenceConfig::global();
    let decision = nutrition_decision(&profile_params(true), &config.nutrition).unwrap();

    let ctx = HabitContext {
        hydration_logged_ml: decision.hydration_ml,
        hydration_target_ml: decision.hydration_ml,
        protein_logged_g: decision.protein_g - 30,
        protein_target_g: decision.protein_g,
        trained_today: true,
    };
    let done: Vec<bool> = system_habits()
        .into_iter()
        .map(|h| Habit::System(h).is_completed(&ctx))
        .collect();
    // Hydration and training hit, protein 30 g short
    assert_eq!(done, vec![true, false, true]);
}

// === The alert feed over everything above ===

#[test]
fn test_evening_behind_on_everything_raises_alerts() {
    let config = IntelligenceConfig::global();
    let decision = nutrition_decision(&profile_params(true), &config.nutrition).unwrap();

    // Today's session is logged but unfinished, so the flag stays false
    let today = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let sessions = vec![WorkoutSession {
        id: Uuid::nil(),
        date: today,
        completed_at: None,
    }];

    let ctx = AlertContext {
        weekday: Weekday::Mon,
        hour_of_day: 20,
        session_completed_today: session_completed_on(today, &sessions),
        schedule: TrainingSchedule {
            preferred_workout_days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            workout_days_per_week: 3,
        },
        goal: FitnessGoal::MuscleGain,
        calories_consumed: 1200,
        calories_target: decision.daily_calories,
        protein_consumed_g: 60,
        protein_target_g: decision.protein_g,
        hydration_logged_ml: 1000,
        hydration_target_ml: decision.hydration_ml,
        progression: Vec::new(),
        weight_change_30d_kg: Some(0.4),
    };
    let alerts = build_alerts(&ctx);

    assert!(alerts.iter().any(|a| a.id == "training-day"));
    assert!(alerts.iter().any(|a| a.id == "protein-shortfall"));
    assert!(alerts.iter().any(|a| a.id == "calorie-shortfall"));
    let hydration = alerts.iter().find(|a| a.id == "hydration-behind-high").unwrap();
    assert_eq!(hydration.severity, AlertSeverity::High);
    // Gaining on a muscle-gain goal is not against the goal
    assert!(!alerts.iter().any(|a| a.id == "weight-trend"));
}

#[test]
fn test_quiet_night_on_target_is_silent() {
    let config = IntelligenceConfig::global();
    let decision = nutrition_decision(&profile_params(false), &config.nutrition).unwrap();

    let ctx = AlertContext {
        weekday: Weekday::Tue,
        hour_of_day: 23,
        session_completed_today: false,
        schedule: TrainingSchedule {
            preferred_workout_days: vec![Weekday::Mon, Weekday::Wed, Weekday::Fri],
            workout_days_per_week: 3,
        },
        goal: FitnessGoal::MuscleGain,
        calories_consumed: decision.daily_calories,
        calories_target: decision.daily_calories,
        protein_consumed_g: decision.protein_g,
        protein_target_g: decision.protein_g,
        hydration_logged_ml: decision.hydration_ml,
        hydration_target_ml: decision.hydration_ml,
        progression: Vec::new(),
        weight_change_30d_kg: Some(0.3),
    };
    assert!(build_alerts(&ctx).is_empty());
}
