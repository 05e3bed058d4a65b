use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{Context, Result};
use crate::fetch::FixturesSource;
use crate::records::count_csv_records;

pub const DOWNLOAD_LABEL: &str = "Download as CSV";
pub const DOWNLOADING_LABEL: &str = "Downloading...";

/// `football_fixtures_2025-05-10.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("football_fixtures_{}.csv", date.format("%Y-%m-%d"))
}

/// Busy/idle state of the download trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportButton {
    busy: bool,
}

impl ExportButton {
    /// Disable the trigger. Returns `false` when a download is already running.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_enabled(&self) -> bool {
        !self.busy
    }

    pub fn label(&self) -> &'static str {
        if self.busy {
            DOWNLOADING_LABEL
        } else {
            DOWNLOAD_LABEL
        }
    }
}

/// Fetch the server CSV once and write it under `dir`, named after `date`.
pub async fn download_csv<S: FixturesSource>(
    source: &S,
    dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let bytes = source.fetch_csv().await?;
    save_csv(dir, date, &bytes)
}

/// Store the payload as-is; the row count is only logged.
pub fn save_csv(dir: &Path, date: NaiveDate, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create download directory {}", dir.display()))?;

    let path = dir.join(export_filename(date));
    fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    match count_csv_records(bytes) {
        Ok(rows) => log::info!("Saved {} fixtures to {}", rows, path.display()),
        Err(err) => log::warn!("Saved {} but it is not readable CSV: {}", path.display(), err),
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_file_after_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 9).unwrap();
        assert_eq!(export_filename(date), "football_fixtures_2025-05-09.csv");
    }

    #[test]
    fn button_disables_while_busy() {
        let mut button = ExportButton::default();
        assert_eq!(button.label(), DOWNLOAD_LABEL);
        assert!(button.begin());
        assert!(!button.is_enabled());
        assert_eq!(button.label(), DOWNLOADING_LABEL);
        assert!(!button.begin(), "second trigger while busy is a no-op");
        button.finish();
        assert!(button.is_enabled());
        assert_eq!(button.label(), DOWNLOAD_LABEL);
    }

    #[test]
    fn saves_payload_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested");
        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let payload = b"Match ID,Competition\n1,Serie A\n";

        let path = save_csv(&target, date, payload).unwrap();
        assert_eq!(path, target.join("football_fixtures_2025-05-10.csv"));
        assert_eq!(fs::read(&path).unwrap(), payload);
    }

    #[test]
    fn saves_non_csv_payload_too() {
        let dir = tempfile::tempdir().unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        let payload = [0xff_u8, 0xfe, 0x00];

        let path = save_csv(dir.path(), date, &payload).unwrap();
        assert_eq!(fs::read(path).unwrap(), payload);
    }
}
