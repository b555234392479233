//! Fixed-template summaries. Pure string construction, numbers rounded to
//! two decimals.

use std::time::Duration;

use serde::Serialize;

use crate::spentenergy::hours;

/// Figures computed for one record. Never stored, only formatted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories_kcal: f64,
}

pub fn format_walk(steps: i64, metrics: &DerivedMetrics) -> String {
    format!(
        "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.\n",
        steps, metrics.distance_km, metrics.calories_kcal
    )
}

pub fn format_workout(kind_label: &str, duration: Duration, metrics: &DerivedMetrics) -> String {
    format!(
        "Activity type: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
        kind_label,
        hours(duration),
        metrics.distance_km,
        metrics.speed_kmh,
        metrics.calories_kcal
    )
}
