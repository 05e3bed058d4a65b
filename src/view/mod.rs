//! Pure view models: everything the screen shows, computed from `AppState`
//! without touching the terminal.

pub mod leagues;
pub mod listing;
pub mod text;

pub use leagues::{league_options, LeagueFilter, LeagueOption, ALL_LEAGUES, ALL_LEAGUES_LABEL};
pub use listing::{
    build_listing, filter_and_sort, FixtureCard, FormClass, FormIcon, FormView, ListingView,
    TeamCard, DEFAULT_TEAM_LOGO, NO_FORM_DATA, NO_MATCHES,
};
pub use text::render_listing_text;

use crate::app::state::{AppState, ListingStatus};
use crate::utils::human_timestamp;

pub const LOADING_TEXT: &str = "Loading upcoming matches...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load matches. Please try again later.";
pub const NEVER_UPDATED: &str = "Not updated yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingPanel {
    Loading,
    Failed { reason: String },
    Listing(ListingView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
}

/// Snapshot of the whole fixtures screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    pub last_updated: String,
    pub leagues: Vec<LeagueOption>,
    pub selected_league: Option<usize>,
    pub selected_label: String,
    pub panel: ListingPanel,
    pub scroll: usize,
    pub download: ButtonView,
    pub notice: Option<String>,
    pub alert: Option<String>,
}

pub fn screen_model(state: &AppState) -> ScreenModel {
    let panel = match state.listing() {
        ListingStatus::Loading => ListingPanel::Loading,
        ListingStatus::Failed(reason) => ListingPanel::Failed {
            reason: reason.clone(),
        },
        ListingStatus::Ready => {
            ListingPanel::Listing(build_listing(state.matches(), state.selected_league()))
        }
    };

    let selected_league = state.selected_option_index();
    let selected_label = selected_league
        .and_then(|idx| state.league_options().get(idx))
        .map(|option| option.label.clone())
        .unwrap_or_else(|| state.selected_league().value().to_string());

    ScreenModel {
        last_updated: state
            .last_refreshed()
            .map(human_timestamp)
            .unwrap_or_else(|| NEVER_UPDATED.to_string()),
        leagues: state.league_options().to_vec(),
        selected_league,
        selected_label,
        panel,
        scroll: state.scroll(),
        download: ButtonView {
            label: state.export().label(),
            enabled: state.export().is_enabled(),
        },
        notice: state.notice().map(str::to_string),
        alert: state.alert().map(str::to_string),
    }
}
