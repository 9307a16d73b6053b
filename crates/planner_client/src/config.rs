use std::{fs, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    error::SubmissionError,
    service::{HttpPlanner, DEFAULT_PLANNER_URL, DEFAULT_REQUEST_TIMEOUT},
};

pub const SETTINGS_FILE_NAME: &str = "planner.toml";
const DEFAULT_TOAST_LIFETIME_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub planner_url: String,
    pub request_timeout_secs: u64,
    pub toast_lifetime_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            planner_url: DEFAULT_PLANNER_URL.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT.as_secs(),
            toast_lifetime_secs: DEFAULT_TOAST_LIFETIME_SECS,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn toast_lifetime(&self) -> Duration {
        Duration::from_secs(self.toast_lifetime_secs)
    }

    pub fn planner(&self) -> Result<HttpPlanner, SubmissionError> {
        HttpPlanner::new(&self.planner_url, self.request_timeout())
    }
}

/// Defaults, then the first `planner.toml` found, then environment overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    let file = settings_file_candidates()
        .into_iter()
        .find_map(|path| fs::read_to_string(&path).ok().map(|raw| (path, raw)));
    if let Some((path, raw)) = file {
        match parse_settings_file(&raw) {
            Ok(file_settings) => {
                debug!(path = %path.display(), "loaded planner settings file");
                settings = file_settings;
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "ignoring unreadable planner settings file"
                );
            }
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings
}

pub fn settings_file_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("trip_planner").join(SETTINGS_FILE_NAME));
    }
    candidates
}

pub fn parse_settings_file(raw: &str) -> Result<Settings, toml::de::Error> {
    toml::from_str(raw)
}

/// Later names win: `PLANNER_URL` then `APP__PLANNER_URL`.
pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    for name in ["PLANNER_URL", "APP__PLANNER_URL"] {
        if let Some(v) = read(name) {
            settings.planner_url = v.trim().to_string();
        }
    }

    let secs = |name: &str| read(name).and_then(|v| positive_secs(name, &v));
    if let Some(v) = secs("APP__REQUEST_TIMEOUT_SECS") {
        settings.request_timeout_secs = v;
    }
    if let Some(v) = secs("APP__TOAST_LIFETIME_SECS") {
        settings.toast_lifetime_secs = v;
    }
}

fn positive_secs(name: &str, raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(secs),
        _ => {
            warn!(variable = name, value = raw, "ignoring invalid duration override");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
