use std::fmt;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Context, Result};
use crate::utils::{format_wall_clock, parse_match_time};

/// Columns written by the listing CSV export, matching the backend's download.
pub const LISTING_CSV_HEADERS: [&str; 7] = [
    "Match ID",
    "Competition",
    "Home Team",
    "Away Team",
    "Match Time",
    "Home Team Form",
    "Away Team Form",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchId::Number(n) => write!(f, "{n}"),
            MatchId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: Option<MatchId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub last_five_matches: Option<Vec<String>>,
}

impl Team {
    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn logo_url(&self) -> Option<&str> {
        non_empty(&self.logo)
    }

    /// Outcome codes in the order the backend sent them; empty when unknown.
    pub fn form(&self) -> &[String] {
        self.last_five_matches.as_deref().unwrap_or(&[])
    }
}

/// One fixture as served by `GET /api/matches`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default)]
    pub id: Option<MatchId>,
    #[serde(default)]
    pub match_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub competition: Option<Competition>,
    #[serde(default)]
    pub home_team: Option<Team>,
    #[serde(default)]
    pub away_team: Option<Team>,
}

impl Match {
    /// Competition name, treating the backend's empty string as missing.
    pub fn league(&self) -> Option<&str> {
        self.competition
            .as_ref()
            .and_then(|competition| non_empty(&competition.name))
    }

    pub fn kickoff(&self) -> Option<DateTime<Utc>> {
        self.match_time.as_deref().and_then(parse_match_time)
    }

    pub fn home(&self) -> Option<&Team> {
        self.home_team.as_ref()
    }

    pub fn away(&self) -> Option<&Team> {
        self.away_team.as_ref()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Decode the body of `GET /api/matches`.
pub fn parse_matches(body: &str) -> Result<Vec<Match>> {
    let matches: Vec<Match> =
        serde_json::from_str(body).context("Failed to parse matches JSON")?;
    Ok(matches)
}

/// Write matches in the backend's CSV layout, in the order given.
pub fn write_listing_csv<W: Write>(matches: &[&Match], out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(LISTING_CSV_HEADERS)?;

    for fixture in matches {
        let time = match fixture.match_time.as_deref() {
            None | Some("") => "Unknown".to_string(),
            Some(raw) => format_wall_clock(raw).unwrap_or_else(|| raw.to_string()),
        };

        writer.write_record([
            fixture.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            fixture.league().unwrap_or_default().to_string(),
            team_name(fixture.home()),
            team_name(fixture.away()),
            time,
            team_form(fixture.home()),
            team_form(fixture.away()),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn team_name(team: Option<&Team>) -> String {
    team.and_then(|t| t.name.as_deref())
        .unwrap_or_default()
        .to_string()
}

fn team_form(team: Option<&Team>) -> String {
    team.map(|t| t.form().concat()).unwrap_or_default()
}

/// Count data rows in a CSV payload (header excluded).
pub fn count_csv_records(bytes: &[u8]) -> Result<usize> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);
    let mut count = 0;
    for record in reader.records() {
        record?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_payload_with_gaps() {
        let body = r#"[
            {
                "id": 42,
                "competition": {"name": "Premier League", "code": "PL"},
                "homeTeam": {"id": 57, "name": "Arsenal", "logo": "", "lastFiveMatches": ["W", "D"]},
                "awayTeam": {"name": "", "lastFiveMatches": null},
                "matchTime": "2025-05-10T14:00:00Z",
                "status": "TIMED"
            },
            {"competition": null, "homeTeam": null}
        ]"#;

        let matches = parse_matches(body).unwrap();
        assert_eq!(matches.len(), 2);

        let first = &matches[0];
        assert_eq!(first.id, Some(MatchId::Number(42)));
        assert_eq!(first.league(), Some("Premier League"));
        let home = first.home().unwrap();
        assert_eq!(home.display_name(), Some("Arsenal"));
        assert_eq!(home.logo_url(), None);
        assert_eq!(home.form(), ["W", "D"]);
        let away = first.away().unwrap();
        assert_eq!(away.display_name(), None);
        assert!(away.form().is_empty());
        assert!(first.kickoff().is_some());

        let second = &matches[1];
        assert_eq!(second.league(), None);
        assert!(second.home().is_none());
        assert!(second.kickoff().is_none());
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = parse_matches(r#"{"error": "Failed to fetch matches"}"#).unwrap_err();
        assert!(err.to_string().contains("Failed to parse matches JSON"));
    }

    #[test]
    fn writes_listing_csv_like_backend() {
        let matches = parse_matches(
            r#"[
                {"id": 1, "competition": {"name": "La Liga"}, "matchTime": "2025-05-10T19:30:00Z",
                 "homeTeam": {"name": "Sevilla", "lastFiveMatches": ["W","L","D"]},
                 "awayTeam": {"name": "Betis"}},
                {"id": "x-2", "matchTime": "soon"},
                {"id": 3}
            ]"#,
        )
        .unwrap();
        let refs: Vec<&Match> = matches.iter().collect();

        let mut out = Vec::new();
        write_listing_csv(&refs, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Match ID,Competition,Home Team,Away Team,Match Time,Home Team Form,Away Team Form"
        );
        assert_eq!(lines[1], "1,La Liga,Sevilla,Betis,2025-05-10 19:30,WLD,");
        assert_eq!(lines[2], "x-2,,,,soon,,");
        assert_eq!(lines[3], "3,,,,Unknown,,");
        assert_eq!(count_csv_records(text.as_bytes()).unwrap(), 3);
    }

    #[test]
    fn csv_match_time_keeps_backend_wall_clock() {
        let matches = parse_matches(
            r#"[
                {"id": 1, "matchTime": "2025-05-10T15:00:00",
                 "homeTeam": {"name": "Lazio", "lastFiveMatches": ["D"]}},
                {"id": 2, "matchTime": "2025-05-10T16:00:00+02:00"}
            ]"#,
        )
        .unwrap();
        let refs: Vec<&Match> = matches.iter().collect();

        let mut out = Vec::new();
        write_listing_csv(&refs, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "1,,Lazio,,2025-05-10 15:00,D,");
        assert_eq!(lines[2], "2,,,,2025-05-10 16:00,,");
    }
}
