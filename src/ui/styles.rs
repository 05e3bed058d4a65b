use ratatui::prelude::Stylize;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

use crate::view::FormClass;

/// Accent color used for titles, the selected league, and the download button.
pub const ACCENT: Color = Color::Indexed(208);

/// Screen title with the "Last updated" stamp dimmed underneath.
pub fn title_block(title: &str, last_updated: &str) -> Text<'static> {
    Text::from(vec![
        Line::from(title.to_string().bold().fg(ACCENT)),
        Line::from(format!("Last updated: {last_updated}").dim()),
    ])
}

/// Kickoff labels, logo paths and key hints.
pub fn muted(text: impl Into<String>) -> Span<'static> {
    Span::from(text.into()).dim()
}

pub fn muted_line(text: impl Into<String>) -> Line<'static> {
    Line::from(muted(text))
}

/// Highlight for the active league tab.
pub fn active_league_style() -> Style {
    Style::default()
        .fg(ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn league_name_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn team_name_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Loading and "no matches" placeholders.
pub fn placeholder_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Badge style for one form result.
pub fn form_style(class: FormClass) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match class {
        FormClass::Win => base.fg(Color::Black).bg(Color::Green),
        FormClass::Draw => base.fg(Color::Black).bg(Color::Yellow),
        FormClass::Loss => base.fg(Color::White).bg(Color::Red),
        FormClass::Unmarked => base.fg(Color::Gray),
    }
}

pub fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).bg(Color::Gray)
    }
}
