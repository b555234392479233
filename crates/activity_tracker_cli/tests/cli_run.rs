use activity_tracker::{Config, OutputMode, PersonalProfile, RecordKind};
use activity_tracker_cli::{CliError, Command, DEMO_WALKS, DEMO_WORKOUTS, log_filter_with, run};

fn config(output: OutputMode) -> Config {
    Config {
        profile: PersonalProfile::new("Гоша", 85.0, 1.85),
        output,
    }
}

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn run_to_string(command: &Command, cfg: &Config) -> String {
    let mut out = Vec::new();
    run(command, cfg, &mut out).expect("run");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn no_args_runs_demo() {
    assert_eq!(Command::from_args(Vec::new()).unwrap(), Command::Demo);
}

#[test]
fn walk_args_become_a_walk_batch() {
    let cmd = Command::from_args(args(&["walk", "678,0h50m", "792,1h14m"])).unwrap();
    assert_eq!(
        cmd,
        Command::Batch {
            kind: RecordKind::Walk,
            records: args(&["678,0h50m", "792,1h14m"]),
        }
    );
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    let res = Command::from_args(args(&["swim"]));
    assert!(matches!(res, Err(CliError::Usage(msg)) if msg.contains("usage:")));
}

#[test]
fn text_batch_prints_only_valid_records() {
    let cmd = Command::from_args(args(&[
        "workout",
        "3456,Ходьба,3h00m",
        "bad",
        "678,Бег,0h5m",
    ]))
    .unwrap();
    let out = run_to_string(&cmd, &config(OutputMode::Text));
    assert_eq!(out.matches("Activity type:").count(), 2);
    let walking = out.find("Activity type: Ходьба").unwrap();
    let running = out.find("Activity type: Бег").unwrap();
    assert!(walking < running);
}

#[test]
fn json_batch_lists_failures() {
    let cmd = Command::from_args(args(&["walk", "678,0h50m", "678"])).unwrap();
    let out = run_to_string(&cmd, &config(OutputMode::Json));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["summaries"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["failures"][0]["line"], "678");
}

#[test]
fn demo_prints_profile_then_summaries() {
    let out = run_to_string(&Command::Demo, &config(OutputMode::Text));
    assert!(out.starts_with("Name: Гоша\nWeight: 85.00\nHeight: 1.85\n"));
    assert_eq!(out.matches("Steps: ").count(), 4);
    assert_eq!(out.matches("Activity type: ").count(), 5);
}

#[test]
fn demo_json_has_both_batches() {
    let out = run_to_string(&Command::Demo, &config(OutputMode::Json));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["profile"]["name"], "Гоша");
    let walk_total = value["walk"]["summaries"].as_array().unwrap().len()
        + value["walk"]["failures"].as_array().unwrap().len();
    assert_eq!(walk_total, DEMO_WALKS.len());
    let workout_total = value["workout"]["summaries"].as_array().unwrap().len()
        + value["workout"]["failures"].as_array().unwrap().len();
    assert_eq!(workout_total, DEMO_WORKOUTS.len());
}

#[test]
fn log_level_env_takes_priority_over_rust_log() {
    let (log_env, filter) = log_filter_with(|k| match k {
        "TRACKER_LOG_LEVEL" => Some("debug".into()),
        "RUST_LOG" => Some("warn".into()),
        _ => None,
    });
    assert_eq!(log_env, "debug");
    assert_eq!(filter.to_string(), "debug");
}

#[test]
fn log_filter_falls_back_to_rust_log_then_info() {
    let (log_env, _) = log_filter_with(|k| match k {
        "RUST_LOG" => Some("warn".into()),
        _ => None,
    });
    assert_eq!(log_env, "warn");
    let (log_env, filter) = log_filter_with(|_| None);
    assert_eq!(log_env, "info");
    assert_eq!(filter.to_string(), "info");
}

#[test]
fn invalid_log_filter_falls_back_to_info() {
    let (log_env, filter) = log_filter_with(|k| match k {
        "TRACKER_LOG_LEVEL" => Some("invalid[[[filter".into()),
        _ => None,
    });
    assert_eq!(log_env, "invalid[[[filter");
    assert_eq!(filter.to_string(), "info");
}
