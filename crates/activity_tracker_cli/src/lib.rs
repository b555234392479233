//! Command-line front end: picks the batches to run, prints summaries to
//! the given writer and leaves per-record failures to the log.

use std::io::Write;

use activity_tracker::profile::describe;
use activity_tracker::{BatchReport, Config, OutputMode, RecordKind, run_batch};
use tracing_subscriber::EnvFilter;

pub mod error;

pub use error::{CliError, CliResult};

pub const USAGE: &str = "usage: activity-tracker [walk <record>... | workout <record>...]";

/// Walk lines the tool runs when called without arguments.
pub const DEMO_WALKS: &[&str] = &[
    "678,0h50m",
    "792,1h14m",
    "1078,1h30m",
    "7830,2h40m",
    ",3456",
    "12:40:00, 3456",
    "something is wrong",
];

/// Workout lines the tool runs when called without arguments.
pub const DEMO_WORKOUTS: &[&str] = &[
    "3456,Ходьба,3h00m",
    "something is wrong",
    "678,Бег,0h5m",
    "1078,Бег,0h10m",
    ",3456 Ходьба",
    "7892,Ходьба,3h10m",
    "15392,Бег,0h45m",
];

/// Log filter from `TRACKER_LOG_LEVEL`, falling back to `RUST_LOG`, default
/// `info`. An unparsable directive falls back to `info` as well. Returns the
/// raw directive alongside the filter.
pub fn log_filter_with<F>(mut get: F) -> (String, EnvFilter)
where
    F: FnMut(&str) -> Option<String>,
{
    let log_env = get("TRACKER_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_new(&log_env).unwrap_or_else(|_| EnvFilter::new("info"));
    (log_env, filter)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Demo,
    Batch {
        kind: RecordKind,
        records: Vec<String>,
    },
}

impl Command {
    pub fn from_args<I>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(sub) = args.next() else {
            return Ok(Self::Demo);
        };
        let kind = match sub.as_str() {
            "walk" => RecordKind::Walk,
            "workout" => RecordKind::Workout,
            other => {
                return Err(CliError::Usage(format!(
                    "unknown command {other:?}\n{USAGE}"
                )));
            }
        };
        Ok(Self::Batch {
            kind,
            records: args.collect(),
        })
    }
}

fn write_report<W: Write>(out: &mut W, report: &BatchReport) -> CliResult<()> {
    for summary in &report.summaries {
        writeln!(out, "{summary}")?;
    }
    Ok(())
}

pub fn run<W: Write>(command: &Command, config: &Config, out: &mut W) -> CliResult<()> {
    let profile = &config.profile;
    match command {
        Command::Demo => {
            let walks = run_batch(DEMO_WALKS, RecordKind::Walk, profile);
            let workouts = run_batch(DEMO_WORKOUTS, RecordKind::Workout, profile);
            tracing::info!(
                walks_ok = walks.summaries.len(),
                walks_failed = walks.failures.len(),
                workouts_ok = workouts.summaries.len(),
                workouts_failed = workouts.failures.len(),
                "demo batches finished"
            );
            match config.output {
                OutputMode::Text => {
                    writeln!(out, "{}\n", describe(profile))?;
                    write_report(out, &walks)?;
                    write_report(out, &workouts)?;
                }
                OutputMode::Json => {
                    let doc = serde_json::json!({
                        "profile": profile,
                        "walk": walks,
                        "workout": workouts,
                    });
                    writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
                }
            }
        }
        Command::Batch { kind, records } => {
            let report = run_batch(records, *kind, profile);
            tracing::info!(
                ok = report.summaries.len(),
                failed = report.failures.len(),
                ?kind,
                "batch finished"
            );
            match config.output {
                OutputMode::Text => write_report(out, &report)?,
                OutputMode::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
            }
        }
    }
    Ok(())
}
