use crate::features::session::{SessionFrame, SessionHeader, StatsSnapshot};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use super::format::{
    format_failed, format_log_line, format_ms, format_port, style_for_failed_pct,
    style_for_outcome,
};
use super::header::draw_hints;

const INFO_ROWS: u16 = 7;

pub(in crate::features::ui) fn draw_session(frame: &mut ratatui::Frame, session: &SessionFrame<'_>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INFO_ROWS + 2),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_info(frame, chunks[0], session.header);
    frame.render_widget(
        Paragraph::new(Line::styled(
            " Pinging... press any key to stop.",
            Style::default().fg(Color::Cyan),
        )),
        chunks[1],
    );
    draw_stats(frame, chunks[2], &session.stats);
    if session.header.mode.logs_each_probe() {
        draw_log(frame, chunks[3], session);
    }
    draw_hints(frame, chunks[4], &[("any key", "Stop")]);
}

fn draw_info(frame: &mut ratatui::Frame, area: Rect, header: &SessionHeader) {
    let label = Style::default().fg(Color::DarkGray);
    let rows = [
        ("Host", header.host.clone()),
        ("IP", header.ip.to_string()),
        ("ASN", header.org.asn.clone()),
        ("Organisation", header.org.org.clone()),
        ("Method", header.method.kind().description().to_string()),
        ("Port", format_port(header.method)),
        ("Mode", header.mode.label().to_string()),
    ]
    .into_iter()
    .map(|(name, value)| Row::new([Span::styled(name, label), Span::raw(value)]));

    let table = Table::new(rows, [Constraint::Length(14), Constraint::Min(10)]).block(
        Block::default()
            .title(" Ping Information ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(table, area);
}

fn draw_stats(frame: &mut ratatui::Frame, area: Rect, stats: &StatsSnapshot) {
    let label = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Sent:    ", label),
            Span::styled(
                stats.sent.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Failed:  ", label),
            Span::styled(
                format_failed(stats.failed, stats.failed_pct),
                style_for_failed_pct(stats.failed_pct),
            ),
        ]),
    ];

    match &stats.latency {
        Some(latency) => lines.push(Line::from(vec![
            Span::styled("Current: ", label),
            Span::styled(format_ms(latency.current), Style::default().fg(Color::Cyan)),
            Span::styled("  Min: ", label),
            Span::raw(format_ms(latency.min)),
            Span::styled("  Max: ", label),
            Span::raw(format_ms(latency.max)),
            Span::styled("  Avg: ", label),
            Span::raw(format_ms(latency.avg)),
        ])),
        None => lines.push(Line::styled("No replies yet", label)),
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(panel, area);
}

fn draw_log(frame: &mut ratatui::Frame, area: Rect, session: &SessionFrame<'_>) {
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = session.log.len().saturating_sub(visible);
    let lines: Vec<Line> = session.log[skip..]
        .iter()
        .map(|line| {
            Line::styled(
                format_log_line(line, session.header.ip),
                style_for_outcome(&line.outcome),
            )
        })
        .collect();

    let log = Paragraph::new(lines).block(
        Block::default()
            .title(" Probe Log ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(log, area);
}
