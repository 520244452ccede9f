//! Screen layout: title, info bar, key table, keybinding footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::report::info_line;
use crate::store::KvSource;

use super::keys::HELP;
use super::state::BrowserState;

pub fn render<S: KvSource>(f: &mut Frame, state: &mut BrowserState<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title(f, chunks[0], state.db_name());
    render_info(f, chunks[1], state);
    render_table(f, chunks[2], state);
    render_footer(f, chunks[3]);
}

fn render_title(f: &mut Frame, area: Rect, db_name: &str) {
    let title = Paragraph::new(format!("lmkeys | {}", db_name)).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, area);
}

fn render_info<S: KvSource>(f: &mut Frame, area: Rect, state: &BrowserState<S>) {
    let text = match &state.view {
        Some(v) => info_line(&v.summary, state.db_name()),
        None => format!("No page loaded | DB: {}", state.db_name()),
    };
    let info = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(info, area);
}

fn render_table<S: KvSource>(f: &mut Frame, area: Rect, state: &mut BrowserState<S>) {
    let rows: Vec<Row> = state
        .view
        .as_ref()
        .map(|v| {
            v.rows
                .iter()
                .map(|r| {
                    Row::new(vec![
                        Cell::from(r.ordinal.to_string()),
                        Cell::from(r.key.clone()),
                        Cell::from(r.value_type.clone()),
                    ])
                })
                .collect()
        })
        .unwrap_or_default();

    let header = Row::new(vec!["Index", "Key", "Value Type"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Fill(1),
            Constraint::Length(24),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Keys"))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    f.render_stateful_widget(table, area, &mut state.table);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(HELP.len() * 2);
    for (key, what) in HELP {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
        spans.push(Span::raw(format!(" {}  ", what)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
