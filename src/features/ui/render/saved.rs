use crate::features::targets::SavedTargets;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};

use super::format::{format_port, truncate_string};

pub(in crate::features::ui) fn draw_saved_list(
    frame: &mut ratatui::Frame,
    area: Rect,
    targets: &SavedTargets,
    selected: usize,
) {
    let block = Block::default()
        .title(format!(" Saved Pings ({}) ", targets.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if targets.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::styled(
                "  No saved pings yet. Press n to create one.",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["#", "Name", "Host", "Method", "Port"]).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let rows = targets.list().iter().enumerate().map(|(idx, saved)| {
        let method = saved.target().method();
        Row::new([
            (idx + 1).to_string(),
            truncate_string(saved.name(), 24),
            truncate_string(saved.target().host(), 32),
            method.kind().label().to_string(),
            format_port(method),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(26),
            Constraint::Min(16),
            Constraint::Length(7),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(table, area, &mut state);
}
