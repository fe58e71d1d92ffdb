mod input;
mod render;
mod state;
mod terminal;

use crate::app::AppState;
use crate::data_model::target::Target;
use crate::features::session::{
    SessionEnd, SessionPlan, SessionView, prepare_session, run_session,
};
use crate::input::{KeyInput, TerminalKeys};
use crate::lookup::IpApiClient;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use std::io;
use tracing::{info, warn};

use input::{UiAction, handle_key};
use render::{
    BANNER_HEIGHT, draw_banner, draw_confirm_delete_popup, draw_footer, draw_form, draw_help,
    draw_menu, draw_notice, draw_saved_list, draw_settings, draw_status, draw_terminal_too_small,
    too_small,
};
use state::{Notice, Screen, UiState};
use terminal::Tui;

/// Runs the menu loop until the user quits. Terminal errors end the loop
/// and are returned; everything else is shown as a notice.
pub fn run_ui(mut app: AppState) -> io::Result<()> {
    let mut tui = Tui::enter()?;
    let mut keys = TerminalKeys;
    let mut ui = UiState::new();

    loop {
        tui.draw(|frame| draw_screen(frame, &app, &ui))?;

        let key = keys.read_blocking()?;
        match handle_key(key, &mut app, &mut ui) {
            UiAction::None => {}
            UiAction::Quit => break,
            UiAction::StartSession(target) => {
                let notice = ping(&mut tui, &mut keys, &app, &target)?;
                ui.notice = Some(notice);
            }
        }
    }

    info!("goodbye");
    Ok(())
}

fn ping(
    tui: &mut Tui,
    keys: &mut TerminalKeys,
    app: &AppState,
    target: &Target,
) -> io::Result<Notice> {
    let host = target.host().to_string();
    tui.draw(|frame| {
        let chunks = layout(frame.area());
        draw_banner(frame, chunks[0]);
        draw_status(
            frame,
            chunks[1],
            &format!("Fetching host information for {host}..."),
        );
    })?;

    let SessionPlan {
        header,
        mut strategy,
    } = match prepare_session(target, app.mode(), &IpApiClient::default()) {
        Ok(plan) => plan,
        Err(err) => {
            warn!(host = %host, error = %err, "session not started");
            return Ok(Notice::error(format!("Error: {err}")));
        }
    };

    let report = run_session(&header, &mut strategy, tui, keys, app.session_config());
    tui.reset()?;

    let sent = report.stats.sent();
    let failed = report.stats.failed();
    Ok(match report.end {
        SessionEnd::Cancelled => Notice::info(format!(
            "Stopped pinging {host}: {sent} sent, {failed} failed."
        )),
        SessionEnd::Aborted(err) => Notice::error(format!(
            "Ping of {host} ended early after {sent} probes: {err}"
        )),
    })
}

fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area)
}

fn draw_screen(frame: &mut ratatui::Frame, app: &AppState, ui: &UiState) {
    let size = frame.area();
    if too_small(size) {
        draw_terminal_too_small(frame, size);
        return;
    }

    let chunks = layout(size);
    draw_banner(frame, chunks[0]);

    let body = chunks[1];
    match &ui.screen {
        Screen::Menu => draw_menu(frame, body, app.mode()),
        Screen::Help => draw_help(frame, body),
        Screen::Settings => draw_settings(frame, body, app.mode()),
        Screen::Saved => draw_saved_list(frame, body, app.targets(), ui.selected),
        Screen::Form(form) => draw_form(frame, body, form),
        Screen::ConfirmDelete(index) => {
            draw_saved_list(frame, body, app.targets(), *index);
            draw_confirm_delete_popup(frame, body, *index, app.targets().get(*index));
        }
    }

    draw_notice(frame, chunks[2], ui.notice.as_ref());
    draw_footer(frame, chunks[3], &ui.screen);
}
