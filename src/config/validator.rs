use crate::error::{AppError, Result};

use super::Config;

/// Check the merged config and report every problem at once.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut issues = Vec::new();

    validate_base_url(&config.api_base_url, &mut issues);
    validate_path("matches path", &config.matches_path, &mut issues);
    validate_path("csv path", &config.csv_path, &mut issues);

    if config.refresh_interval.is_zero() {
        issues.push("refresh interval must be at least one minute".to_string());
    }

    if config.request_timeout.is_zero() {
        issues.push("request timeout must be greater than zero".to_string());
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::message(format!(
            "config invalid:\n  - {}",
            issues.join("\n  - ")
        )))
    }
}

fn validate_base_url(url: &str, issues: &mut Vec<String>) {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        issues.push("api base url must not be empty".to_string());
    } else if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        issues.push(format!("api base url `{trimmed}` must start with http:// or https://"));
    }
}

fn validate_path(label: &str, path: &str, issues: &mut Vec<String>) {
    if !path.starts_with('/') {
        issues.push(format!("{label} `{path}` must start with `/`"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn accepts_builtin() {
        validate_config(&Config::builtin()).expect("builtin config should be valid");
    }

    #[test]
    fn rejects_zero_interval() {
        let mut config = Config::builtin();
        config.refresh_interval = Duration::ZERO;

        let err = validate_config(&config).expect_err("validation should fail");
        assert!(
            err.to_string().contains("refresh interval"),
            "unexpected error message: {err}"
        );
    }

    #[test]
    fn reports_all_issues_together() {
        let mut config = Config::builtin();
        config.api_base_url = "ftp://fixtures".to_string();
        config.csv_path = "api/matches/csv".to_string();

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("http://"), "unexpected error message: {message}");
        assert!(message.contains("csv path"), "unexpected error message: {message}");
    }
}
