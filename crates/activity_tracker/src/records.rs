//! Walk and workout records: parsing, metric computation and summaries.
//!
//! A record is parsed from one comma-separated line and owns a copy of the
//! profile it was parsed against. Parsing rejects every non-positive step
//! count or duration, so nothing invalid reaches [`crate::spentenergy`].

use std::time::Duration;

use serde::Serialize;

use crate::duration::parse_duration;
use crate::profile::{self, PersonalProfile};
use crate::spentenergy;
use crate::summary::{self, DerivedMetrics};
use crate::{StepCountIssue, TrackerError, TrackerResult};

const WALK_FIELDS: usize = 2;
const WORKOUT_FIELDS: usize = 3;

/// Which calorie formula a workout uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    /// Resolve a workout label. Only the labels of the input format
    /// (`Ходьба`, `Бег`) are recognised.
    pub fn from_label(label: &str) -> TrackerResult<Self> {
        match label {
            "Ходьба" => Ok(Self::Walking),
            "Бег" => Ok(Self::Running),
            other => Err(TrackerError::UnknownActivityKind(other.to_string())),
        }
    }

    pub fn spent_calories(
        self,
        steps: i64,
        weight: f64,
        height: f64,
        duration: Duration,
    ) -> TrackerResult<f64> {
        match self {
            Self::Walking => spentenergy::walking_spent_calories(steps, weight, height, duration),
            Self::Running => spentenergy::running_spent_calories(steps, weight, height, duration),
        }
    }
}

fn split_fields(raw: &str, expected: usize) -> TrackerResult<Vec<&str>> {
    if raw.is_empty() {
        return Err(TrackerError::MalformedRecord { expected, found: 0 });
    }
    let fields: Vec<&str> = raw.split(',').collect();
    if fields.len() != expected {
        return Err(TrackerError::MalformedRecord {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_steps(raw: &str) -> TrackerResult<i64> {
    let steps: i64 = raw
        .parse()
        .map_err(|_| TrackerError::InvalidStepCount(StepCountIssue::NotANumber(raw.to_string())))?;
    if steps <= 0 {
        return Err(TrackerError::InvalidStepCount(StepCountIssue::NonPositive(steps)));
    }
    Ok(steps)
}

/// A day walk, parsed from `"<steps>,<duration>"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WalkRecord {
    pub steps: i64,
    pub duration: Duration,
    pub profile: PersonalProfile,
}

impl WalkRecord {
    pub fn parse(raw: &str, profile: PersonalProfile) -> TrackerResult<Self> {
        let fields = split_fields(raw, WALK_FIELDS)?;
        let steps = parse_steps(fields[0])?;
        let duration = parse_duration(fields[1])?;
        Ok(Self {
            steps,
            duration,
            profile,
        })
    }

    pub fn metrics(&self) -> TrackerResult<DerivedMetrics> {
        self.profile.validate()?;
        let PersonalProfile { weight, height, .. } = self.profile;
        let calories_kcal =
            spentenergy::walking_spent_calories(self.steps, weight, height, self.duration)?;
        Ok(DerivedMetrics {
            distance_km: spentenergy::distance(self.steps, height),
            speed_kmh: spentenergy::mean_speed(self.steps, height, self.duration),
            calories_kcal,
        })
    }

    pub fn summarize(&self) -> TrackerResult<String> {
        let metrics = self.metrics()?;
        Ok(summary::format_walk(self.steps, &metrics))
    }

    pub fn profile_info(&self) -> String {
        profile::describe(&self.profile)
    }
}

/// A workout, parsed from `"<steps>,<kind>,<duration>"`.
///
/// The kind label is kept verbatim; it is only resolved to an
/// [`ActivityKind`] when metrics are computed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkoutRecord {
    pub steps: i64,
    pub kind: String,
    pub duration: Duration,
    pub profile: PersonalProfile,
}

impl WorkoutRecord {
    pub fn parse(raw: &str, profile: PersonalProfile) -> TrackerResult<Self> {
        let fields = split_fields(raw, WORKOUT_FIELDS)?;
        let steps = parse_steps(fields[0])?;
        let kind = fields[1].to_string();
        let duration = parse_duration(fields[2])?;
        Ok(Self {
            steps,
            kind,
            duration,
            profile,
        })
    }

    pub fn metrics(&self) -> TrackerResult<DerivedMetrics> {
        self.profile.validate()?;
        let PersonalProfile { weight, height, .. } = self.profile;
        let distance_km = spentenergy::distance(self.steps, height);
        let speed_kmh = spentenergy::mean_speed(self.steps, height, self.duration);
        let calories_kcal = ActivityKind::from_label(&self.kind)?.spent_calories(
            self.steps,
            weight,
            height,
            self.duration,
        )?;
        Ok(DerivedMetrics {
            distance_km,
            speed_kmh,
            calories_kcal,
        })
    }

    pub fn summarize(&self) -> TrackerResult<String> {
        let metrics = self.metrics()?;
        Ok(summary::format_workout(&self.kind, self.duration, &metrics))
    }

    pub fn profile_info(&self) -> String {
        profile::describe(&self.profile)
    }
}

/// Which line format a batch is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Walk,
    Workout,
}

impl RecordKind {
    pub fn parse(self, raw: &str, profile: PersonalProfile) -> TrackerResult<ActivityRecord> {
        match self {
            Self::Walk => WalkRecord::parse(raw, profile).map(ActivityRecord::Walk),
            Self::Workout => WorkoutRecord::parse(raw, profile).map(ActivityRecord::Workout),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityRecord {
    Walk(WalkRecord),
    Workout(WorkoutRecord),
}

impl ActivityRecord {
    pub fn metrics(&self) -> TrackerResult<DerivedMetrics> {
        match self {
            Self::Walk(r) => r.metrics(),
            Self::Workout(r) => r.metrics(),
        }
    }

    pub fn summarize(&self) -> TrackerResult<String> {
        match self {
            Self::Walk(r) => r.summarize(),
            Self::Workout(r) => r.summarize(),
        }
    }

    pub fn profile(&self) -> &PersonalProfile {
        match self {
            Self::Walk(r) => &r.profile,
            Self::Workout(r) => &r.profile,
        }
    }

    pub fn profile_info(&self) -> String {
        profile::describe(self.profile())
    }
}
