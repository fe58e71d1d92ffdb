use crate::app::AppState;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use super::super::state::{FormState, Notice, Screen, UiState};
use super::UiAction;

pub(in crate::features::ui) fn handle_menu_key(key: KeyEvent, ui: &mut UiState) -> UiAction {
    match key.code {
        KeyCode::Char('1') => ui.screen = Screen::Help,
        KeyCode::Char('2') => ui.screen = Screen::Form(FormState::quick_ping()),
        KeyCode::Char('3') => ui.screen = Screen::Saved,
        KeyCode::Char('4') => ui.screen = Screen::Settings,
        KeyCode::Char('q') | KeyCode::Char('Q') => return UiAction::Quit,
        _ => ui.notice = Some(Notice::error("Invalid choice, please try again.")),
    }
    UiAction::None
}

pub(in crate::features::ui) fn handle_settings_key(
    key: KeyEvent,
    app: &mut AppState,
    ui: &mut UiState,
) -> UiAction {
    match key.code {
        KeyCode::Char('1') => match app.toggle_mode() {
            Ok(mode) => ui.notice = Some(Notice::info(format!("Ping mode set to {mode}."))),
            Err(err) => {
                warn!(error = %err, "could not persist ping mode");
                ui.notice = Some(Notice::error(format!("Could not save settings: {err}")));
            }
        },
        KeyCode::Char('b') | KeyCode::Esc => ui.screen = Screen::Menu,
        _ => ui.notice = Some(Notice::error("Invalid choice, please try again.")),
    }
    UiAction::None
}
