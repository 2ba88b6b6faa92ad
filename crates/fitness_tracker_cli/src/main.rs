use fitness_tracker::config::Config;
use fitness_tracker_cli::{DEFAULT_LOG_FILTER, log_filter_with, resolve_packages, run};

fn main() -> anyhow::Result<()> {
    // Configure logging from `FITNESS_TRACKER_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = log_filter_with(|k| std::env::var(k).ok());
    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_env)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
    tracing::debug!("fitness-tracker: log filter: {}", log_env);

    let config = Config::from_env()?;
    let packages = resolve_packages(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = run(&packages, config.output, &mut out)?;
    tracing::info!(
        "fitness-tracker: processed {} of {} packages",
        report.processed,
        report.total()
    );

    report.into_result()?;
    Ok(())
}
