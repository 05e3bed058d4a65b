use ratatui::{prelude::*, widgets::*};

use crate::ui::components::{footer_columns, popup_area, ScreenAreas};
use crate::ui::styles::{
    active_league_style, button_style, error_style, form_style, league_name_style, muted,
    muted_line, placeholder_style, team_name_style, title_block,
};
use crate::utils::truncate_to_width;
use crate::view::{
    FixtureCard, FormView, ListingPanel, ListingView, ScreenModel, TeamCard, LOADING_TEXT,
    LOAD_FAILED_TEXT, NO_FORM_DATA, NO_MATCHES,
};

/// Rows one card occupies, including the blank separator.
pub const CARD_HEIGHT: usize = 5;

const ALERT_WIDTH: u16 = 60;
const ALERT_HEIGHT: u16 = 7;

const TITLE: &str = "Upcoming Football Fixtures";
const HELP: &str = "←/→ league • ↑/↓ scroll • d download • r refresh • q quit";

/// Draw the whole fixtures screen from its view model.
pub fn draw_fixtures(f: &mut Frame, model: &ScreenModel) {
    let area = f.size();
    let areas = ScreenAreas::split(area);

    draw_header(f, areas.header, model);
    draw_league_bar(f, areas.leagues, model);
    draw_listing(f, areas.listing, model);
    draw_footer(f, areas.footer, model);

    if let Some(alert) = &model.alert {
        draw_alert(f, area, alert);
    }
}

fn draw_header(f: &mut Frame, area: Rect, model: &ScreenModel) {
    f.render_widget(
        Paragraph::new(title_block(TITLE, &model.last_updated)),
        area,
    );
}

fn draw_league_bar(f: &mut Frame, area: Rect, model: &ScreenModel) {
    let titles: Vec<String> = model
        .leagues
        .iter()
        .map(|option| option.label.clone())
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("League: {}", model.selected_label)),
        )
        .select(model.selected_league.unwrap_or(usize::MAX))
        .highlight_style(active_league_style())
        .divider("|");
    f.render_widget(tabs, area);
}

fn draw_listing(f: &mut Frame, area: Rect, model: &ScreenModel) {
    let block = Block::default().borders(Borders::ALL).title("Fixtures");
    let inner_width = area.width.saturating_sub(2) as usize;

    let paragraph = match &model.panel {
        ListingPanel::Loading => Paragraph::new(LOADING_TEXT)
            .style(placeholder_style())
            .alignment(Alignment::Center),
        ListingPanel::Failed { reason } => Paragraph::new(vec![
            Line::from(Span::styled(
                LOAD_FAILED_TEXT,
                error_style(),
            )),
            Line::from(reason.as_str()),
        ])
        .wrap(Wrap { trim: true }),
        ListingPanel::Listing(ListingView::Empty) => Paragraph::new(NO_MATCHES)
            .style(placeholder_style())
            .alignment(Alignment::Center),
        ListingPanel::Listing(ListingView::Cards(cards)) => {
            let lines: Vec<Line> = cards
                .iter()
                .flat_map(|card| card_lines(card, inner_width))
                .collect();
            let offset = (model.scroll * CARD_HEIGHT).min(u16::MAX as usize) as u16;
            Paragraph::new(lines).scroll((offset, 0))
        }
    };

    f.render_widget(paragraph.block(block), area);
}

fn card_lines(card: &FixtureCard, width: usize) -> Vec<Line<'static>> {
    let name_width = (width.saturating_sub(6) / 2).max(4);

    vec![
        Line::from(vec![
            Span::styled(
                card.league.clone(),
                league_name_style(),
            ),
            Span::raw("  "),
            muted(card.kickoff_label.clone()),
        ]),
        Line::from(vec![
            Span::styled(
                truncate_to_width(&card.home.name, name_width),
                team_name_style(),
            ),
            Span::raw("  VS  "),
            Span::styled(
                truncate_to_width(&card.away.name, name_width),
                team_name_style(),
            ),
        ]),
        form_line(&card.home, &card.away),
        muted_line(truncate_to_width(
            &format!("{} | {}", card.home.logo, card.away.logo),
            width,
        )),
        Line::default(),
    ]
}

fn form_spans(team: &TeamCard) -> Vec<Span<'static>> {
    match &team.form {
        FormView::NoData => vec![muted(NO_FORM_DATA)],
        FormView::Results(icons) => icons
            .iter()
            .flat_map(|icon| {
                [
                    Span::styled(format!(" {} ", icon.label), form_style(icon.class)),
                    Span::raw(" "),
                ]
            })
            .collect(),
    }
}

fn form_line(home: &TeamCard, away: &TeamCard) -> Line<'static> {
    let mut spans = vec![muted("Home form: ")];
    spans.extend(form_spans(home));
    spans.push(muted("   Away form: "));
    spans.extend(form_spans(away));
    Line::from(spans)
}

fn draw_footer(f: &mut Frame, area: Rect, model: &ScreenModel) {
    let label = format!(" {} ", model.download.label);
    let button_width = label.chars().count() as u16;
    let (button, hint_area) = footer_columns(area, button_width);

    f.render_widget(
        Paragraph::new(label).style(button_style(model.download.enabled)),
        button,
    );

    let hint = match &model.notice {
        Some(notice) => Line::from(format!("  {notice}")),
        None => Line::from(muted(format!("  {HELP}"))),
    };
    f.render_widget(Paragraph::new(hint), hint_area);
}

fn draw_alert(f: &mut Frame, area: Rect, message: &str) {
    let popup = popup_area(area, ALERT_WIDTH, ALERT_HEIGHT);
    f.render_widget(Clear, popup);
    let body = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::default(),
        muted_line("Press Enter to dismiss"),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Alert")
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(body, popup);
}
