use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::super::state::FormState;

pub(in crate::features::ui) fn draw_form(frame: &mut ratatui::Frame, area: Rect, form: &FormState) {
    let mut lines = vec![Line::from("")];

    for (idx, field) in form.fields.iter().enumerate() {
        let focused = idx == form.focused;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<8}", field.key.label()), label_style),
        ];
        if field.value.is_empty() && !focused {
            spans.push(Span::styled(
                field.hint.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(field.value.clone()));
        }
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
            if field.value.is_empty() {
                spans.push(Span::styled(
                    format!(" {}", field.hint),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    if let Some(error) = &form.error {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let form_widget = Paragraph::new(lines).block(
        Block::default()
            .title(form.kind.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(form_widget, area);
}
