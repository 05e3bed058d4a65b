use std::{fs, path::Path, time::Duration};

use serde::Deserialize;

use crate::error::{Context, Result};

use super::{validator, Config};

pub const ENV_API_URL: &str = "FIXTURES_API_URL";
pub const ENV_REFRESH_MINUTES: &str = "FIXTURES_REFRESH_MINUTES";
pub const ENV_DOWNLOAD_DIR: &str = "FIXTURES_DOWNLOAD_DIR";
pub const ENV_TIMEOUT_SECS: &str = "FIXTURES_TIMEOUT_SECS";

/// On-disk shape of the optional JSON config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawConfig {
    api_base_url: Option<String>,
    matches_path: Option<String>,
    csv_path: Option<String>,
    refresh_minutes: Option<u64>,
    timeout_secs: Option<u64>,
    download_dir: Option<String>,
    log_file: Option<String>,
}

impl RawConfig {
    fn apply(self, config: &mut Config) {
        if let Some(url) = self.api_base_url {
            config.api_base_url = url;
        }
        if let Some(path) = self.matches_path {
            config.matches_path = path;
        }
        if let Some(path) = self.csv_path {
            config.csv_path = path;
        }
        if let Some(minutes) = self.refresh_minutes {
            config.refresh_interval = Duration::from_secs(minutes.saturating_mul(60));
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(dir) = self.download_dir {
            config.download_dir = dir.into();
        }
        if let Some(file) = self.log_file {
            config.log_file = file.into();
        }
    }
}

/// Build the runtime config: builtin defaults, then the JSON file (if given),
/// then environment overrides. The result is validated before returning.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = Config::builtin();

    if let Some(path) = path {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file at {}", path.display()))?;
        let raw: RawConfig = serde_json::from_str(&json)
            .with_context(|| format!("failed to parse config file at {}", path.display()))?;
        raw.apply(&mut config);
    }

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validator::validate_config(&config)?;
    Ok(config)
}

/// Apply `FIXTURES_*` overrides read through `lookup`.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
        config.api_base_url = url.trim().to_string();
    }

    if let Some(raw) = lookup(ENV_REFRESH_MINUTES) {
        let minutes: u64 = raw
            .trim()
            .parse()
            .with_context(|| format!("{ENV_REFRESH_MINUTES} must be a whole number, got `{raw}`"))?;
        config.refresh_interval = Duration::from_secs(minutes.saturating_mul(60));
    }

    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        let secs: u64 = raw
            .trim()
            .parse()
            .with_context(|| format!("{ENV_TIMEOUT_SECS} must be a whole number, got `{raw}`"))?;
        config.request_timeout = Duration::from_secs(secs);
    }

    if let Some(dir) = lookup(ENV_DOWNLOAD_DIR).filter(|v| !v.trim().is_empty()) {
        config.download_dir = dir.into();
    }

    Ok(())
}
