use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::super::super::state::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

pub(in crate::features::ui) fn too_small(area: Rect) -> bool {
    area.width < MIN_TERMINAL_WIDTH || area.height < MIN_TERMINAL_HEIGHT
}

/// Replaces the whole screen until the window is resized.
pub(in crate::features::ui) fn draw_terminal_too_small(frame: &mut ratatui::Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::styled(
            "Window too small",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::from(format!(
            "{}x{} < {}x{}",
            area.width, area.height, MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT
        )),
        Line::styled("Resize to continue", Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Sry Ping "),
        );
    frame.render_widget(paragraph, area);
}
