use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::state::{Notice, NoticeLevel, Screen};

pub(in crate::features::ui) const BANNER_HEIGHT: u16 = 5;

pub(in crate::features::ui) fn draw_banner(frame: &mut ratatui::Frame, area: Rect) {
    let art = Style::default().fg(Color::Magenta);
    let lines = vec![
        Line::styled("  (\\_/)", art),
        Line::styled("  ( •_•)", art),
        Line::from(vec![
            Span::styled("  / >🍙  ", art),
            Span::styled(
                "Sry Ping",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" v{}", env!("CARGO_PKG_VERSION")), art),
        ]),
    ];

    let banner = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(banner, area);
}

pub(in crate::features::ui) fn draw_notice(
    frame: &mut ratatui::Frame,
    area: Rect,
    notice: Option<&Notice>,
) {
    let Some(notice) = notice else {
        return;
    };
    let style = match notice.level {
        NoticeLevel::Info => Style::default().fg(Color::Green),
        NoticeLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    frame.render_widget(
        Paragraph::new(Line::styled(format!(" {}", notice.text), style)),
        area,
    );
}

pub(in crate::features::ui) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, screen: &Screen) {
    let hints: &[(&str, &str)] = match screen {
        Screen::Menu => &[
            ("1", "Help"),
            ("2", "Quick ping"),
            ("3", "Saved pings"),
            ("4", "Settings"),
            ("q", "Quit"),
        ],
        Screen::Help => &[("any key", "Back")],
        Screen::Settings => &[("1", "Toggle mode"), ("b", "Back")],
        Screen::Saved => &[
            ("↑↓/1-9", "Select"),
            ("Enter", "Ping"),
            ("n", "New"),
            ("e", "Edit"),
            ("d", "Delete"),
            ("b", "Back"),
        ],
        Screen::Form(_) => &[
            ("Tab/↑↓", "Field"),
            ("Enter", "Next/Submit"),
            ("Esc", "Cancel"),
        ],
        Screen::ConfirmDelete(_) => &[("y", "Delete"), ("n", "Cancel")],
    };
    draw_hints(frame, area, hints);
}

pub(in crate::features::ui) fn draw_hints(
    frame: &mut ratatui::Frame,
    area: Rect,
    hints: &[(&str, &str)],
) {
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!(" {key} "), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{action} "), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(footer, area);
}
