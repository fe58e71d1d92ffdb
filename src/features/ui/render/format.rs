use crate::data_model::target::ProbeMethod;
use crate::features::session::ProbeLogLine;
use crate::probe::ProbeOutcome;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use std::net::IpAddr;

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub(super) fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

pub(super) fn format_ms(ms: f64) -> String {
    format!("{ms:.2} ms")
}

pub(super) fn format_failed(failed: u64, failed_pct: f64) -> String {
    format!("{failed} ({failed_pct:.1}%)")
}

pub(super) fn format_port(method: ProbeMethod) -> String {
    method
        .port()
        .map(|port| port.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub(super) fn format_log_line(line: &ProbeLogLine, ip: IpAddr) -> String {
    match &line.outcome {
        ProbeOutcome::Reply { latency } => format!(
            "#{} reply from {ip}: {}",
            line.seq,
            format_ms(latency.as_secs_f64() * 1000.0)
        ),
        ProbeOutcome::Failed(err) => format!("#{} failed ({})", line.seq, err.kind.label()),
    }
}

pub(super) fn style_for_outcome(outcome: &ProbeOutcome) -> Style {
    if outcome.is_success() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}

pub(super) fn style_for_failed_pct(pct: f64) -> Style {
    if pct <= 0.0 {
        Style::default().fg(Color::Green)
    } else if pct <= 5.0 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Red)
    }
}
