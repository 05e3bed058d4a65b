use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::fetch::FetchResult;
use crate::records::Match;

/// Things a user can ask for from the fixtures screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    NextLeague,
    PrevLeague,
    ScrollUp,
    ScrollDown,
    Download,
    RefreshNow,
    DismissAlert,
    Quit,
}

/// Everything the controller reacts to, in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    User(UserAction),
    RefreshDue,
    MatchesLoaded {
        result: FetchResult<Vec<Match>>,
        fetched_at: DateTime<Local>,
    },
    ExportFinished(Result<PathBuf>),
}

/// Side effects requested by a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchMatches,
    DownloadCsv,
    Quit,
}
