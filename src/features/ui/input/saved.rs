use crate::app::{AppState, parse_index};
use crossterm::event::{KeyCode, KeyEvent};

use super::super::state::{FormState, Notice, Screen, UiState};
use super::UiAction;

pub(in crate::features::ui) fn handle_saved_key(
    key: KeyEvent,
    app: &mut AppState,
    ui: &mut UiState,
) -> UiAction {
    let total = app.targets().len();
    ui.clamp(total);

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => ui.select_next(total),
        KeyCode::Up | KeyCode::Char('k') => ui.select_prev(total),
        KeyCode::Char(digit @ '1'..='9') => {
            match parse_index(&digit.to_string(), total) {
                Ok(index) => ui.selected = index,
                Err(err) => ui.notice = Some(Notice::error(err.to_string())),
            }
        }
        KeyCode::Enter => {
            if let Some(saved) = app.targets().get(ui.selected) {
                return UiAction::StartSession(saved.target().clone());
            }
            ui.notice = Some(Notice::error("No saved ping selected."));
        }
        KeyCode::Char('n') => ui.screen = Screen::Form(FormState::create()),
        KeyCode::Char('e') => match app.targets().get(ui.selected) {
            Some(saved) => ui.screen = Screen::Form(FormState::edit(ui.selected, saved)),
            None => ui.notice = Some(Notice::error("No saved ping selected.")),
        },
        KeyCode::Char('d') => {
            if ui.selected < total {
                ui.screen = Screen::ConfirmDelete(ui.selected);
            } else {
                ui.notice = Some(Notice::error("No saved ping selected."));
            }
        }
        KeyCode::Char('b') | KeyCode::Esc => ui.screen = Screen::Menu,
        _ => {}
    }
    UiAction::None
}
