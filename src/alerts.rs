// ABOUTME: Proactive alerts aggregator - combines schedule, macros, hydration, and progression
// ABOUTME: Hour-of-day is read once by the caller and passed in; quiet hours 22:00-07:00
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Atlas Fitness Intelligence

//! Proactive, user-facing alerts.
//!
//! Combines the other engines' outputs with today's schedule and intake state
//! into a flat list of alert records. The hydration alerts are time-of-day
//! aware: nothing fires between 22:00 and 07:00, and expected intake follows
//! a linear curve across the 07:00-21:00 window. Ordering is left to the
//! caller; severity-first is recommended but not enforced here.

use crate::models::{FitnessGoal, TrainingSchedule};
use crate::progression::ProgressionSuggestion;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Alert severity, with a presentation color per tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    /// Informational nudge
    Info,
    /// Worth acting on today
    Medium,
    /// Act now
    High,
}

impl AlertSeverity {
    /// Presentation color for the severity tier
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Info => "blue",
            Self::Medium => "amber",
            Self::High => "red",
        }
    }
}

/// A user-facing alert record. Request-scoped; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProactiveAlert {
    /// Stable identifier, unique within one evaluation
    pub id: String,
    /// Severity tier
    pub severity: AlertSeverity,
    /// Icon name for the presentation layer
    pub icon: String,
    /// Short title
    pub title: String,
    /// One or two sentences of detail
    pub description: String,
    /// Route the alert links to, when actionable
    pub action_route: Option<String>,
    /// Whether the user may dismiss the alert
    pub dismissible: bool,
}

/// Everything the aggregator needs for one evaluation.
///
/// `hour_of_day` must be read from the clock once and passed in, so a single
/// evaluation cannot straddle an hour boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertContext {
    /// Current weekday
    pub weekday: Weekday,
    /// Local hour of day, 0-23, read once per evaluation
    pub hour_of_day: u32,
    /// Whether a session was already completed today
    pub session_completed_today: bool,
    /// The user's training schedule
    pub schedule: TrainingSchedule,
    /// Current training goal
    pub goal: FitnessGoal,
    /// Calories logged so far today
    pub calories_consumed: u32,
    /// Today's calorie target
    pub calories_target: u32,
    /// Protein logged so far today (g)
    pub protein_consumed_g: u32,
    /// Today's protein target (g)
    pub protein_target_g: u32,
    /// Water logged so far today (ml)
    pub hydration_logged_ml: u32,
    /// Today's hydration target (ml)
    pub hydration_target_ml: u32,
    /// Progression verdicts for recently trained exercises
    pub progression: Vec<ProgressionSuggestion>,
    /// Body weight change over the last 30 days (kg), when known
    pub weight_change_30d_kg: Option<f64>,
}

/// Hydration quiet hours: no alerts from 22:00 up to 07:00
const QUIET_START_HOUR: u32 = 22;
const ACTIVE_START_HOUR: u32 = 7;
const ACTIVE_END_HOUR: u32 = 21;

/// Build today's alert list from the combined engine outputs.
#[must_use]
pub fn build_alerts(ctx: &AlertContext) -> Vec<ProactiveAlert> {
    let mut alerts = Vec::new();

    push_training_day_alert(ctx, &mut alerts);
    push_progression_alerts(ctx, &mut alerts);
    push_macro_alerts(ctx, &mut alerts);
    push_hydration_alerts(ctx, &mut alerts);
    push_weight_trend_alert(ctx, &mut alerts);

    debug!(count = alerts.len(), hour = ctx.hour_of_day, "built alerts");
    alerts
}

fn push_training_day_alert(ctx: &AlertContext, alerts: &mut Vec<ProactiveAlert>) {
    if ctx.schedule.is_training_day(ctx.weekday) && !ctx.session_completed_today {
        alerts.push(ProactiveAlert {
            id: "training-day".to_owned(),
            severity: AlertSeverity::Info,
            icon: "dumbbell".to_owned(),
            title: "Today is a training day".to_owned(),
            description: format!(
                "One of your {} weekly sessions is planned for today.",
                ctx.schedule.workout_days_per_week
            ),
            action_route: Some("/workout".to_owned()),
            dismissible: true,
        });
    }
}

fn push_progression_alerts(ctx: &AlertContext, alerts: &mut Vec<ProactiveAlert>) {
    let mut eligible: Vec<&ProgressionSuggestion> =
        ctx.progression.iter().filter(|s| s.should_progress).collect();
    // Highest-confidence suggestions surface first (stable for ties)
    eligible.sort_by(|a, b| {
        b.confidence
            .as_score()
            .total_cmp(&a.confidence.as_score())
    });
    for suggestion in eligible {
        let streak_note = if suggestion.streak >= 2 {
            format!(" {} sessions in a row completed.", suggestion.streak)
        } else {
            String::new()
        };
        alerts.push(ProactiveAlert {
            id: format!("progression-{}", slug(&suggestion.exercise)),
            severity: AlertSeverity::Info,
            icon: "trending-up".to_owned(),
            title: format!("Ready to progress: {}", suggestion.exercise),
            description: format!(
                "Load {:.1} kg next session (was {:.1} kg).{streak_note}",
                suggestion.suggested_weight_kg, suggestion.current_weight_kg
            ),
            action_route: Some("/exercises".to_owned()),
            dismissible: true,
        });
    }
}

fn push_macro_alerts(ctx: &AlertContext, alerts: &mut Vec<ProactiveAlert>) {
    // Macro shortfalls only matter once the day is mostly over
    if !(18..QUIET_START_HOUR).contains(&ctx.hour_of_day) {
        return;
    }
    if ctx.protein_target_g > 0 {
        let remaining = ctx.protein_target_g.saturating_sub(ctx.protein_consumed_g);
        if f64::from(remaining) > f64::from(ctx.protein_target_g) * 0.3 {
            alerts.push(ProactiveAlert {
                id: "protein-shortfall".to_owned(),
                severity: AlertSeverity::Medium,
                icon: "utensils".to_owned(),
                title: "Protein behind target".to_owned(),
                description: format!("{remaining} g of protein still to go today."),
                action_route: Some("/nutrition".to_owned()),
                dismissible: true,
            });
        }
    }
    if ctx.calories_target > 0 {
        let remaining = ctx.calories_target.saturating_sub(ctx.calories_consumed);
        if f64::from(remaining) > f64::from(ctx.calories_target) * 0.4 {
            alerts.push(ProactiveAlert {
                id: "calorie-shortfall".to_owned(),
                severity: AlertSeverity::Medium,
                icon: "flame".to_owned(),
                title: "Calories well below target".to_owned(),
                description: format!("About {remaining} kcal left against today's target."),
                action_route: Some("/nutrition".to_owned()),
                dismissible: true,
            });
        }
    }
}

fn push_hydration_alerts(ctx: &AlertContext, alerts: &mut Vec<ProactiveAlert>) {
    let hour = ctx.hour_of_day;
    // Quiet hours: nothing between 22:00 and 07:00
    if hour >= QUIET_START_HOUR || hour < ACTIVE_START_HOUR {
        return;
    }
    if ctx.hydration_target_ml == 0 {
        return;
    }

    // Linear expected-intake curve across the active window
    let expected_fraction =
        (f64::from(hour - ACTIVE_START_HOUR) / f64::from(ACTIVE_END_HOUR - ACTIVE_START_HOUR))
            .min(1.0);
    let actual_fraction =
        f64::from(ctx.hydration_logged_ml) / f64::from(ctx.hydration_target_ml);
    let behind = expected_fraction - actual_fraction;
    let remaining_ml = ctx
        .hydration_target_ml
        .saturating_sub(ctx.hydration_logged_ml);

    if behind > 0.20 {
        alerts.push(ProactiveAlert {
            id: "hydration-behind-high".to_owned(),
            severity: AlertSeverity::High,
            icon: "droplet".to_owned(),
            title: "Well behind on water".to_owned(),
            description: format!(
                "You are more than 20% behind pace; {remaining_ml} ml remaining."
            ),
            action_route: Some("/hydration".to_owned()),
            dismissible: false,
        });
    } else if behind > 0.10 {
        alerts.push(ProactiveAlert {
            id: "hydration-behind".to_owned(),
            severity: AlertSeverity::Medium,
            icon: "droplet".to_owned(),
            title: "Falling behind on water".to_owned(),
            description: format!("{remaining_ml} ml remaining to stay on pace."),
            action_route: Some("/hydration".to_owned()),
            dismissible: true,
        });
    }

    // Fixed time-window nudges
    if (ACTIVE_START_HOUR..10).contains(&hour) && ctx.hydration_logged_ml < ctx.hydration_target_ml
    {
        alerts.push(ProactiveAlert {
            id: "hydration-morning".to_owned(),
            severity: AlertSeverity::Info,
            icon: "sunrise".to_owned(),
            title: "Start the day with water".to_owned(),
            description: "A glass now makes the daily target much easier.".to_owned(),
            action_route: Some("/hydration".to_owned()),
            dismissible: true,
        });
    }
    if matches!(hour, 10 | 17 | 18)
        && ctx.schedule.is_training_day(ctx.weekday)
        && !ctx.session_completed_today
    {
        alerts.push(ProactiveAlert {
            id: "hydration-pre-workout".to_owned(),
            severity: AlertSeverity::Info,
            icon: "droplet".to_owned(),
            title: "Hydrate before training".to_owned(),
            description: "Drink 300-500 ml in the hour before your session.".to_owned(),
            action_route: Some("/hydration".to_owned()),
            dismissible: true,
        });
    }
    if (18..ACTIVE_END_HOUR).contains(&hour) && behind > 0.0 && behind <= 0.10 {
        alerts.push(ProactiveAlert {
            id: "hydration-evening".to_owned(),
            severity: AlertSeverity::Info,
            icon: "droplet".to_owned(),
            title: "Evening catch-up".to_owned(),
            description: format!("{remaining_ml} ml to go; finish well before bed."),
            action_route: Some("/hydration".to_owned()),
            dismissible: true,
        });
    }
}

fn push_weight_trend_alert(ctx: &AlertContext, alerts: &mut Vec<ProactiveAlert>) {
    let Some(change) = ctx.weight_change_30d_kg else {
        return;
    };
    let against_goal = match ctx.goal {
        FitnessGoal::FatLoss => change > 0.5,
        FitnessGoal::MuscleGain => change < -0.5,
        FitnessGoal::Recomposition | FitnessGoal::Maintenance => change.abs() > 2.0,
    };
    if against_goal {
        alerts.push(ProactiveAlert {
            id: "weight-trend".to_owned(),
            severity: AlertSeverity::Medium,
            icon: "scale".to_owned(),
            title: "Weight trend is against your goal".to_owned(),
            description: format!("{change:+.1} kg over the last 30 days."),
            action_route: Some("/nutrition".to_owned()),
            dismissible: true,
        });
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}
