use chrono::{DateTime, Local};

use crate::records::Match;
use crate::view::{filter_and_sort, league_options, LeagueFilter, LeagueOption};

use super::events::{AppEvent, Command, UserAction};
use super::export::ExportButton;

/// What the listing pane currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStatus {
    Loading,
    Ready,
    Failed(String),
}

/// The single owner of everything the fixtures screen renders.
///
/// A failed refresh keeps the previous matches and league options; only the
/// listing pane switches to the error block until the next successful fetch or
/// league change.
#[derive(Debug, Clone)]
pub struct AppState {
    matches: Vec<Match>,
    selected_league: LeagueFilter,
    league_options: Vec<LeagueOption>,
    last_refreshed: Option<DateTime<Local>>,
    listing: ListingStatus,
    export: ExportButton,
    alert: Option<String>,
    notice: Option<String>,
    scroll: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
            selected_league: LeagueFilter::All,
            league_options: league_options(&[]),
            last_refreshed: None,
            listing: ListingStatus::Loading,
            export: ExportButton::default(),
            alert: None,
            notice: None,
            scroll: 0,
        }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn selected_league(&self) -> &LeagueFilter {
        &self.selected_league
    }

    pub fn league_options(&self) -> &[LeagueOption] {
        &self.league_options
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Local>> {
        self.last_refreshed
    }

    pub fn listing(&self) -> &ListingStatus {
        &self.listing
    }

    pub fn export(&self) -> &ExportButton {
        &self.export
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Index of the selected league among the options, if it is still offered.
    pub fn selected_option_index(&self) -> Option<usize> {
        self.league_options
            .iter()
            .position(|option| option.value == self.selected_league.value())
    }

    pub fn begin_loading(&mut self) {
        self.listing = ListingStatus::Loading;
    }

    /// Swap in a freshly fetched list and rebuild the league options.
    pub fn apply_matches(&mut self, matches: Vec<Match>, fetched_at: DateTime<Local>) {
        self.league_options = league_options(&matches);
        self.matches = matches;
        self.last_refreshed = Some(fetched_at);
        self.listing = ListingStatus::Ready;
        self.scroll = 0;
    }

    pub fn fail_loading(&mut self, reason: impl Into<String>) {
        self.listing = ListingStatus::Failed(reason.into());
    }

    pub fn select_league(&mut self, filter: LeagueFilter) {
        self.selected_league = filter;
        self.listing = ListingStatus::Ready;
        self.scroll = 0;
    }

    /// Move the league selection by `step` options, wrapping at both ends.
    pub fn cycle_league(&mut self, step: isize) {
        let len = self.league_options.len() as isize;
        if len == 0 {
            return;
        }
        let current = self.selected_option_index().unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        let filter = self.league_options[next].filter();
        self.select_league(filter);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Advance one card, stopping at the last of `card_count`.
    pub fn scroll_down(&mut self, card_count: usize) {
        if self.scroll + 1 < card_count {
            self.scroll += 1;
        }
    }

    /// Apply one event and report the side effect it needs, if any.
    pub fn handle(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::RefreshDue => {
                self.begin_loading();
                Some(Command::FetchMatches)
            }
            AppEvent::MatchesLoaded { result, fetched_at } => {
                match result {
                    Ok(matches) => self.apply_matches(matches, fetched_at),
                    Err(err) => {
                        log::error!("Error fetching matches: {err}");
                        self.fail_loading(err.to_string());
                    }
                }
                None
            }
            AppEvent::ExportFinished(result) => {
                self.export.finish();
                match result {
                    Ok(path) => {
                        self.notice = Some(format!("Saved {}", path.display()));
                    }
                    Err(err) => {
                        log::error!("Error downloading CSV: {err}");
                        self.alert = Some(format!("Failed to download: {err}"));
                    }
                }
                None
            }
            AppEvent::User(action) => self.handle_action(action),
        }
    }

    fn handle_action(&mut self, action: UserAction) -> Option<Command> {
        if self.alert.is_some() {
            return match action {
                UserAction::DismissAlert => {
                    self.alert = None;
                    None
                }
                UserAction::Quit => Some(Command::Quit),
                _ => None,
            };
        }

        match action {
            UserAction::NextLeague => self.cycle_league(1),
            UserAction::PrevLeague => self.cycle_league(-1),
            UserAction::ScrollUp => self.scroll_up(),
            UserAction::ScrollDown => {
                let cards = filter_and_sort(&self.matches, &self.selected_league).len();
                self.scroll_down(cards);
            }
            UserAction::Download => {
                if self.export.begin() {
                    self.notice = None;
                    return Some(Command::DownloadCsv);
                }
            }
            UserAction::RefreshNow => {
                self.begin_loading();
                return Some(Command::FetchMatches);
            }
            UserAction::DismissAlert => {}
            UserAction::Quit => return Some(Command::Quit),
        }
        None
    }
}
