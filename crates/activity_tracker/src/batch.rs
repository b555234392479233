//! Runs a sequence of raw lines through parse, compute and format.
//!
//! A failing line is logged, recorded in the report and skipped; the
//! batch always runs to the end.

use serde::{Serialize, Serializer};

use crate::profile::PersonalProfile;
use crate::records::RecordKind;
use crate::{TrackerError, TrackerResult};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchFailure {
    pub index: usize,
    pub line: String,
    #[serde(serialize_with = "serialize_error")]
    pub error: TrackerError,
}

fn serialize_error<S: Serializer>(error: &TrackerError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BatchReport {
    /// Formatted summaries of the lines that succeeded, in input order.
    pub summaries: Vec<String>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.summaries.len() + self.failures.len()
    }
}

fn process_line(kind: RecordKind, line: &str, profile: &PersonalProfile) -> TrackerResult<String> {
    kind.parse(line, profile.clone())?.summarize()
}

pub fn run_batch<I, S>(lines: I, kind: RecordKind, profile: &PersonalProfile) -> BatchReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = BatchReport::default();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match process_line(kind, line, profile) {
            Ok(summary) => {
                tracing::debug!(index, ?kind, "record processed");
                report.summaries.push(summary);
            }
            Err(error) => {
                tracing::warn!(index, ?kind, line, %error, "skipping record");
                report.failures.push(BatchFailure {
                    index,
                    line: line.to_string(),
                    error,
                });
            }
        }
    }
    report
}
