//! Distance, speed and calorie formulas.
//!
//! Step length is approximated as [`STEP_LENGTH_COEFFICIENT`] of the
//! user's height; distance and speed are reported in kilometres and km/h.
//! [`distance`] and [`mean_speed`] are total and fall back to `0.0` on
//! non-positive input. The calorie functions reject such input instead.

use std::time::Duration;

use crate::{TrackerError, TrackerResult};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
/// Share of body height taken as one step.
pub const STEP_LENGTH_COEFFICIENT: f64 = 0.45;
pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

pub(crate) fn hours(duration: Duration) -> f64 {
    duration.as_secs_f64() / 3600.0
}

fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}

/// Distance covered in kilometres.
pub fn distance(steps: i64, height: f64) -> f64 {
    if steps <= 0 || height <= 0.0 {
        return 0.0;
    }
    height * STEP_LENGTH_COEFFICIENT * steps as f64 / M_IN_KM
}

/// Average speed in km/h.
pub fn mean_speed(steps: i64, height: f64, duration: Duration) -> f64 {
    if steps <= 0 || height <= 0.0 || duration.is_zero() {
        return 0.0;
    }
    distance(steps, height) / hours(duration)
}

fn check_parameters(steps: i64, weight: f64, height: f64, duration: Duration) -> TrackerResult<()> {
    if steps <= 0 || weight <= 0.0 || height <= 0.0 || duration.is_zero() {
        return Err(TrackerError::InvalidParameters);
    }
    Ok(())
}

/// Calories burned while walking.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidParameters`] if any input is not positive.
pub fn walking_spent_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> TrackerResult<f64> {
    check_parameters(steps, weight, height, duration)?;
    let speed = mean_speed(steps, height, duration);
    Ok(weight * speed * minutes(duration) / MIN_IN_H * WALKING_CALORIES_COEFFICIENT)
}

/// Calories burned while running.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidParameters`] if any input is not positive.
pub fn running_spent_calories(
    steps: i64,
    weight: f64,
    height: f64,
    duration: Duration,
) -> TrackerResult<f64> {
    check_parameters(steps, weight, height, duration)?;
    let speed = mean_speed(steps, height, duration);
    Ok(weight * speed * minutes(duration) / MIN_IN_H)
}
