use std::path::PathBuf;
use std::str::FromStr;

use crate::TrackerError;

/// How summaries are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TrackerError::Config(format!(
                "FITNESS_TRACKER_OUTPUT must be `text` or `json`, got {other:?}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// JSON file of packages; the built-in samples are used when unset.
    pub packages_path: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, TrackerError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function instead of the process environment.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, TrackerError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let packages_path = get("FITNESS_TRACKER_PACKAGES")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let output = match get("FITNESS_TRACKER_OUTPUT") {
            Some(v) => v.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self {
            packages_path,
            output,
        })
    }
}
