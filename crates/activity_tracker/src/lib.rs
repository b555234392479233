//! Parsing, validation and fitness metrics for walk and workout records.
//!
//! A raw record such as `"678,0h50m"` (walk) or `"3456,Ходьба,3h00m"`
//! (workout) is parsed into a typed record, combined with a
//! [`PersonalProfile`], and turned into distance, speed and calorie
//! figures plus a fixed-template summary.

use std::fmt;

use thiserror::Error;

pub mod batch;
pub mod config;
pub mod duration;
pub mod profile;
pub mod records;
pub mod spentenergy;
pub mod summary;

pub use batch::{BatchFailure, BatchReport, run_batch};
pub use config::{Config, OutputMode};
pub use profile::PersonalProfile;
pub use records::{ActivityKind, ActivityRecord, RecordKind, WalkRecord, WorkoutRecord};
pub use summary::DerivedMetrics;

/// Why a step count field was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepCountIssue {
    NotANumber(String),
    NonPositive(i64),
}

impl fmt::Display for StepCountIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(raw) => write!(f, "{raw:?} is not a number"),
            Self::NonPositive(n) => write!(f, "{n} must be greater than 0"),
        }
    }
}

/// Why a duration field was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DurationIssue {
    Unparsable(String),
    NonPositive,
}

impl fmt::Display for DurationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparsable(raw) => write!(f, "{raw:?} is not a duration like 1h30m"),
            Self::NonPositive => write!(f, "duration must be greater than 0"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TrackerError {
    #[error("malformed record: expected {expected} fields, got {found}")]
    MalformedRecord { expected: usize, found: usize },
    #[error("invalid step count: {0}")]
    InvalidStepCount(StepCountIssue),
    #[error("invalid duration: {0}")]
    InvalidDuration(DurationIssue),
    #[error("invalid profile: {field} must be greater than 0, got {value}")]
    InvalidProfile { field: &'static str, value: f64 },
    #[error("unknown activity kind: {0:?}")]
    UnknownActivityKind(String),
    #[error("invalid calculation parameters: steps, weight, height and duration must be positive")]
    InvalidParameters,
    #[error("configuration error: {0}")]
    Config(String),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
