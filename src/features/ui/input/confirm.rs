use crate::app::AppState;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use super::super::state::{Notice, Screen, UiState};
use super::UiAction;

pub(in crate::features::ui) fn handle_confirm_delete_key(
    key: KeyEvent,
    app: &mut AppState,
    ui: &mut UiState,
    index: usize,
) -> UiAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            match app.delete_target(index) {
                Ok(removed) => {
                    ui.notice = Some(Notice::info(format!("Deleted '{}'.", removed.name())));
                }
                Err(err) => {
                    warn!(index, error = %err, "delete failed");
                    ui.notice = Some(Notice::error(err.to_string()));
                }
            }
            ui.clamp(app.targets().len());
            ui.screen = Screen::Saved;
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            ui.screen = Screen::Saved;
        }
        _ => {}
    }
    UiAction::None
}
