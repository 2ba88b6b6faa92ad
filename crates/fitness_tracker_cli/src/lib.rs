//! Runs sensor packages through the calculator and writes one summary per
//! package.

use std::io::Write;

use fitness_tracker::config::{Config, OutputFormat};
use fitness_tracker::package::{self, Package};
use fitness_tracker::{InfoMessage, Training};
use tracing::{error, info};

pub mod error;

pub use error::{CliError, CliResult};

/// Default filter when neither `FITNESS_TRACKER_LOG_LEVEL` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Pick the log filter: `FITNESS_TRACKER_LOG_LEVEL` wins over `RUST_LOG`.
pub fn log_filter_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get("FITNESS_TRACKER_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub processed: usize,
    pub failed: usize,
}

impl RunReport {
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }

    pub fn into_result(self) -> CliResult<Self> {
        if self.failed > 0 {
            return Err(CliError::PackagesFailed {
                failed: self.failed,
                total: self.total(),
            });
        }
        Ok(self)
    }
}

/// Packages from the configured file, or the built-in samples.
pub fn resolve_packages(config: &Config) -> CliResult<Vec<Package>> {
    match &config.packages_path {
        Some(path) => {
            info!(path = %path.display(), "loading packages");
            Ok(package::load_packages(path)?)
        }
        None => Ok(package::sample_packages()),
    }
}

pub fn render(message: &InfoMessage, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Text => message.get_message(),
        OutputFormat::Json => serde_json::to_string(message)?,
    })
}

/// Process every package in order. A package that fails is logged and
/// skipped; the rest still run.
pub fn run<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> CliResult<RunReport> {
    let mut report = RunReport::default();
    for (index, package) in packages.iter().enumerate() {
        match package.read() {
            Ok(workout) => {
                writeln!(out, "{}", render(&workout.summarize(), format)?)?;
                report.processed += 1;
            }
            Err(e) => {
                error!(
                    index = index,
                    workout_type = %package.workout_type,
                    error = %e,
                    "skipping package"
                );
                report.failed += 1;
            }
        }
    }
    Ok(report)
}
