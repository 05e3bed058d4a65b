use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::fetch::FixturesSource;
use crate::utils::local_today;

use super::events::AppEvent;
use super::export::download_csv;

/// Fetch the match list in the background and post the outcome.
///
/// In-flight requests are never cancelled; overlapping fetches each post
/// their own result.
pub fn spawn_matches_fetch<S: FixturesSource>(
    source: Arc<S>,
    tx: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = source.fetch_matches().await;
        let event = AppEvent::MatchesLoaded {
            result,
            fetched_at: Local::now(),
        };
        if tx.send(event).is_err() {
            log::debug!("Dropping match list; screen already closed");
        }
    })
}

/// Download the CSV in the background, dated by the local day the request starts.
pub fn spawn_csv_download<S: FixturesSource>(
    source: Arc<S>,
    dir: PathBuf,
    tx: UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    let date = local_today();
    tokio::spawn(async move {
        let result = download_csv(source.as_ref(), &dir, date).await;
        if tx.send(AppEvent::ExportFinished(result)).is_err() {
            log::debug!("Dropping CSV download result; screen already closed");
        }
    })
}
