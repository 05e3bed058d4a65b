use std::path::PathBuf;
use std::time::Duration;

pub mod loader;
pub mod validator;

pub use loader::{apply_env_overrides, load_config};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const MATCHES_PATH: &str = "/api/matches";
pub const MATCHES_CSV_PATH: &str = "/api/matches/csv";
pub const DEFAULT_REFRESH_MINUTES: u64 = 30;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime settings for the fixtures client.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub matches_path: String,
    pub csv_path: String,
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
    pub download_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Config {
    pub fn builtin() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            matches_path: MATCHES_PATH.to_string(),
            csv_path: MATCHES_CSV_PATH.to_string(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_MINUTES * 60),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            download_dir: PathBuf::from("."),
            log_file: PathBuf::from("fixtures.log"),
        }
    }

    pub fn matches_url(&self) -> String {
        join_url(&self.api_base_url, &self.matches_path)
    }

    pub fn csv_url(&self) -> String {
        join_url(&self.api_base_url, &self.csv_path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::builtin()
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
