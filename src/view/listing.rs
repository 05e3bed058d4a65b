use chrono::{DateTime, Utc};

use crate::records::{Match, Team};
use crate::utils::format_kickoff;

use super::LeagueFilter;

pub const DEFAULT_TEAM_LOGO: &str = "img/default-team.png";
pub const UNKNOWN_LEAGUE: &str = "Unknown League";
pub const HOME_TEAM_PLACEHOLDER: &str = "Home Team";
pub const AWAY_TEAM_PLACEHOLDER: &str = "Away Team";
pub const NO_FORM_DATA: &str = "No data";
pub const NO_MATCHES: &str = "No upcoming matches found";
pub const KICKOFF_TBD: &str = "TBD";

/// Visual class of a single form result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormClass {
    Win,
    Draw,
    Loss,
    Unmarked,
}

impl FormClass {
    pub fn from_code(code: &str) -> Self {
        match code {
            "W" => FormClass::Win,
            "D" => FormClass::Draw,
            "L" => FormClass::Loss,
            _ => FormClass::Unmarked,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            FormClass::Win => "win",
            FormClass::Draw => "draw",
            FormClass::Loss => "loss",
            FormClass::Unmarked => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormIcon {
    pub label: String,
    pub class: FormClass,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView {
    NoData,
    Results(Vec<FormIcon>),
}

impl FormView {
    pub fn from_codes(codes: &[String]) -> Self {
        if codes.is_empty() {
            return FormView::NoData;
        }
        FormView::Results(
            codes
                .iter()
                .map(|code| FormIcon {
                    label: code.clone(),
                    class: FormClass::from_code(code),
                })
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCard {
    pub name: String,
    pub logo: String,
    pub form: FormView,
}

impl TeamCard {
    fn from_team(team: Option<&Team>, placeholder: &str) -> Self {
        let name = team
            .and_then(Team::display_name)
            .unwrap_or(placeholder)
            .to_string();
        let logo = team
            .and_then(Team::logo_url)
            .unwrap_or(DEFAULT_TEAM_LOGO)
            .to_string();
        let form = FormView::from_codes(team.map(Team::form).unwrap_or_default());
        Self { name, logo, form }
    }
}

/// Everything one fixture card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureCard {
    pub league: String,
    pub kickoff: Option<DateTime<Utc>>,
    pub kickoff_label: String,
    pub home: TeamCard,
    pub away: TeamCard,
}

impl FixtureCard {
    pub fn from_match(fixture: &Match) -> Self {
        let kickoff = fixture.kickoff();
        Self {
            league: fixture.league().unwrap_or(UNKNOWN_LEAGUE).to_string(),
            kickoff,
            kickoff_label: kickoff
                .map(format_kickoff)
                .unwrap_or_else(|| KICKOFF_TBD.to_string()),
            home: TeamCard::from_team(fixture.home(), HOME_TEAM_PLACEHOLDER),
            away: TeamCard::from_team(fixture.away(), AWAY_TEAM_PLACEHOLDER),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView {
    /// Nothing survived the filter; shows the single "no matches" placeholder.
    Empty,
    Cards(Vec<FixtureCard>),
}

impl ListingView {
    pub fn cards(&self) -> &[FixtureCard] {
        match self {
            ListingView::Empty => &[],
            ListingView::Cards(cards) => cards,
        }
    }
}

/// Matches passing `filter`, in kickoff order.
///
/// The sort is stable; fixtures without a usable time keep their relative order
/// after every dated fixture.
pub fn filter_and_sort<'a>(matches: &'a [Match], filter: &LeagueFilter) -> Vec<&'a Match> {
    let mut selected: Vec<&Match> = matches.iter().filter(|m| filter.matches(m)).collect();
    selected.sort_by_cached_key(|m| {
        let kickoff = m.kickoff();
        (kickoff.is_none(), kickoff)
    });
    selected
}

pub fn build_listing(matches: &[Match], filter: &LeagueFilter) -> ListingView {
    let selected = filter_and_sort(matches, filter);
    if selected.is_empty() {
        return ListingView::Empty;
    }
    ListingView::Cards(selected.into_iter().map(FixtureCard::from_match).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Competition;

    fn fixture(league: &str, time: &str, home: &str) -> Match {
        Match {
            match_time: Some(time.to_string()),
            competition: Some(Competition {
                name: Some(league.to_string()),
                code: None,
            }),
            home_team: Some(Team {
                name: Some(home.to_string()),
                ..Team::default()
            }),
            ..Match::default()
        }
    }

    fn home_names(view: &ListingView) -> Vec<&str> {
        view.cards().iter().map(|card| card.home.name.as_str()).collect()
    }

    #[test]
    fn all_sorts_by_kickoff() {
        let matches = vec![
            fixture("A", "2025-05-10T16:00:00Z", "late"),
            fixture("B", "2025-05-10T15:00:00Z", "early"),
        ];
        let view = build_listing(&matches, &LeagueFilter::All);
        assert_eq!(home_names(&view), ["early", "late"]);
    }

    #[test]
    fn league_filter_keeps_exact_subset() {
        let matches = vec![
            fixture("Serie A", "2025-05-11T18:45:00Z", "Inter"),
            fixture("Ligue 1", "2025-05-11T19:00:00Z", "Lyon"),
            fixture("Serie A", "2025-05-10T18:45:00Z", "Roma"),
        ];
        let view = build_listing(&matches, &LeagueFilter::from_value("Serie A"));
        assert_eq!(home_names(&view), ["Roma", "Inter"]);
        assert!(view.cards().iter().all(|card| card.league == "Serie A"));
    }

    #[test]
    fn no_survivors_renders_placeholder() {
        let matches = vec![fixture("Serie A", "2025-05-11T18:45:00Z", "Inter")];
        let view = build_listing(&matches, &LeagueFilter::from_value("Eredivisie"));
        assert_eq!(view, ListingView::Empty);
        assert!(view.cards().is_empty());
        assert_eq!(build_listing(&[], &LeagueFilter::All), ListingView::Empty);
    }

    #[test]
    fn equal_and_missing_times_keep_input_order() {
        let mut undated = fixture("A", "", "undated-1");
        undated.match_time = None;
        let matches = vec![
            undated,
            fixture("A", "2025-05-10T15:00:00Z", "same-1"),
            fixture("A", "not a date", "undated-2"),
            fixture("A", "2025-05-10T15:00:00Z", "same-2"),
        ];
        let view = build_listing(&matches, &LeagueFilter::All);
        assert_eq!(home_names(&view), ["same-1", "same-2", "undated-1", "undated-2"]);
        assert_eq!(view.cards()[3].kickoff_label, KICKOFF_TBD);
    }

    #[test]
    fn fills_placeholders_for_missing_fields() {
        let card = FixtureCard::from_match(&Match::default());
        assert_eq!(card.league, UNKNOWN_LEAGUE);
        assert_eq!(card.home.name, HOME_TEAM_PLACEHOLDER);
        assert_eq!(card.away.name, AWAY_TEAM_PLACEHOLDER);
        assert_eq!(card.home.logo, DEFAULT_TEAM_LOGO);
        assert_eq!(card.away.logo, DEFAULT_TEAM_LOGO);
        assert_eq!(card.home.form, FormView::NoData);
        assert_eq!(card.away.form, FormView::NoData);
    }

    #[test]
    fn maps_form_codes_to_classes() {
        let codes: Vec<String> = ["W", "D", "L", "?"].iter().map(|s| s.to_string()).collect();
        let FormView::Results(icons) = FormView::from_codes(&codes) else {
            panic!("expected results");
        };
        let classes: Vec<&str> = icons.iter().map(|icon| icon.class.class_name()).collect();
        assert_eq!(classes, ["win", "draw", "loss", ""]);
        assert_eq!(icons[3].label, "?");
    }
}
