use activity_tracker::Config;
use activity_tracker_cli::{Command, log_filter_with, run};

fn main() -> anyhow::Result<()> {
    let (log_env, env_filter) = log_filter_with(|k| std::env::var(k).ok());
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("activity-tracker: log filter: {}", log_env);

    let config = Config::from_env()?;
    let command = Command::from_args(std::env::args().skip(1))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&command, &config, &mut out)?;
    Ok(())
}
