use std::fmt::Write;

use super::listing::{FormView, ListingView, TeamCard, NO_FORM_DATA, NO_MATCHES};

fn form_text(form: &FormView) -> String {
    match form {
        FormView::NoData => NO_FORM_DATA.to_string(),
        FormView::Results(icons) => icons
            .iter()
            .map(|icon| icon.label.as_str())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn team_line(side: &str, team: &TeamCard) -> String {
    format!(
        "  {side:<5} {name}  [{logo}]  form: {form}",
        name = team.name,
        logo = team.logo,
        form = form_text(&team.form)
    )
}

/// Plain-text rendering of a listing, one block per card.
pub fn render_listing_text(view: &ListingView) -> String {
    let cards = match view {
        ListingView::Empty => return format!("{NO_MATCHES}\n"),
        ListingView::Cards(cards) => cards,
    };

    let mut out = String::new();
    for (idx, card) in cards.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{} | {}", card.league, card.kickoff_label);
        let _ = writeln!(out, "{}", team_line("Home", &card.home));
        let _ = writeln!(out, "{}", team_line("Away", &card.away));
    }
    out
}
