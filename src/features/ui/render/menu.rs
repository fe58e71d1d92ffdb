use crate::config::PingMode;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn option_line(key: &str, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key}) "), Style::default().fg(Color::Yellow)),
        Span::raw(label.to_string()),
    ])
}

pub(in crate::features::ui) fn draw_menu(frame: &mut ratatui::Frame, area: Rect, mode: PingMode) {
    let lines = vec![
        Line::from(""),
        Line::from("Please select an option:"),
        Line::from(""),
        option_line("1", "Help"),
        option_line("2", "Quick ping"),
        option_line("3", "Saved pings"),
        option_line("4", "Settings"),
        option_line("q", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Ping mode: ", Style::default().fg(Color::DarkGray)),
            Span::styled(mode.label(), Style::default().fg(Color::Green)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel(" Main Menu ")), area);
}

pub(in crate::features::ui) fn draw_help(frame: &mut ratatui::Frame, area: Rect) {
    let entry = |key: &str, title: &str, text: &str| {
        Line::from(vec![
            Span::styled(format!("{key}) "), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{title}: "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(text.to_string()),
        ])
    };

    let lines = vec![
        entry("1", "Help", "Shows this screen."),
        Line::from(""),
        entry(
            "2",
            "Quick ping",
            "Pings a host once entered. ICMP sends echo requests, TCP measures the time to open a connection to a port.",
        ),
        Line::from(""),
        entry(
            "3",
            "Saved pings",
            "Named hosts kept in the config file. Pick one and press Enter to ping it; n, e and d create, edit and delete entries.",
        ),
        Line::from(""),
        entry(
            "4",
            "Settings",
            "Switches between Smart mode (live statistics only) and Extended mode (statistics plus a line per probe).",
        ),
        Line::from(""),
        entry("q", "Quit", "Leaves Sry Ping."),
        Line::from(""),
        Line::styled(
            "While pinging, press any key to stop and return to the menu.",
            Style::default().fg(Color::Cyan),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel(" Help ")),
        area,
    );
}

pub(in crate::features::ui) fn draw_settings(frame: &mut ratatui::Frame, area: Rect, mode: PingMode) {
    let description = match mode {
        PingMode::Smart => "live statistics only",
        PingMode::Extended => "live statistics plus a line per probe",
    };
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Ping mode: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                mode.label(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({description})"), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        option_line("1", &format!("Switch to {} mode", mode.toggle())),
        option_line("b", "Back"),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel(" Settings ")), area);
}

pub(in crate::features::ui) fn draw_status(frame: &mut ratatui::Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(Color::Cyan)),
    ];
    frame.render_widget(Paragraph::new(lines).block(panel(" Ping ")), area);
}
