use std::collections::BTreeSet;

use crate::records::Match;

/// Value of the catch-all entry in the league selector.
pub const ALL_LEAGUES: &str = "all";
pub const ALL_LEAGUES_LABEL: &str = "All Leagues";

/// Current league selection: everything, or one competition by exact name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LeagueFilter {
    #[default]
    All,
    League(String),
}

impl LeagueFilter {
    /// Map a selector value back to a filter; `"all"` is the sentinel.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_LEAGUES {
            LeagueFilter::All
        } else {
            LeagueFilter::League(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            LeagueFilter::All => ALL_LEAGUES,
            LeagueFilter::League(name) => name,
        }
    }

    pub fn matches(&self, fixture: &Match) -> bool {
        match self {
            LeagueFilter::All => true,
            LeagueFilter::League(name) => fixture.league() == Some(name.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueOption {
    pub value: String,
    pub label: String,
}

impl LeagueOption {
    fn all() -> Self {
        Self {
            value: ALL_LEAGUES.to_string(),
            label: ALL_LEAGUES_LABEL.to_string(),
        }
    }

    fn league(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }

    pub fn filter(&self) -> LeagueFilter {
        LeagueFilter::from_value(&self.value)
    }
}

/// "All Leagues" followed by every distinct competition name, sorted.
pub fn league_options(matches: &[Match]) -> Vec<LeagueOption> {
    let names: BTreeSet<&str> = matches.iter().filter_map(Match::league).collect();

    std::iter::once(LeagueOption::all())
        .chain(names.into_iter().map(LeagueOption::league))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Competition;

    fn in_league(name: Option<&str>) -> Match {
        Match {
            competition: Some(Competition {
                name: name.map(str::to_string),
                code: None,
            }),
            ..Match::default()
        }
    }

    #[test]
    fn options_are_distinct_sorted_with_all_first() {
        let matches = vec![
            in_league(Some("Serie A")),
            in_league(Some("Bundesliga")),
            in_league(None),
            in_league(Some("")),
            in_league(Some("Serie A")),
            Match::default(),
        ];

        let values: Vec<String> = league_options(&matches)
            .into_iter()
            .map(|option| option.value)
            .collect();
        assert_eq!(values, ["all", "Bundesliga", "Serie A"]);
    }

    #[test]
    fn empty_list_still_offers_all() {
        let options = league_options(&[]);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "All Leagues");
        assert_eq!(options[0].filter(), LeagueFilter::All);
    }

    #[test]
    fn filter_uses_exact_names() {
        let filter = LeagueFilter::from_value("Serie A");
        assert!(filter.matches(&in_league(Some("Serie A"))));
        assert!(!filter.matches(&in_league(Some("serie a"))));
        assert!(!filter.matches(&in_league(None)));
        assert!(LeagueFilter::from_value("all").matches(&in_league(None)));
    }
}
