mod confirm;
mod form;
mod menu;
mod saved;

use crate::app::AppState;
use crate::data_model::target::Target;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{Screen, UiState};

/// What the event loop should do after a key was handled.
#[derive(Debug, PartialEq)]
pub(super) enum UiAction {
    None,
    Quit,
    StartSession(Target),
}

pub(super) fn handle_key(key: KeyEvent, app: &mut AppState, ui: &mut UiState) -> UiAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return UiAction::Quit;
    }
    ui.notice = None;

    match &ui.screen {
        Screen::Menu => menu::handle_menu_key(key, ui),
        Screen::Help => {
            ui.screen = Screen::Menu;
            UiAction::None
        }
        Screen::Settings => menu::handle_settings_key(key, app, ui),
        Screen::Saved => saved::handle_saved_key(key, app, ui),
        Screen::Form(_) => form::handle_form_key(key, app, ui),
        Screen::ConfirmDelete(index) => {
            let index = *index;
            confirm::handle_confirm_delete_key(key, app, ui, index)
        }
    }
}

#[cfg(test)]
mod tests;
