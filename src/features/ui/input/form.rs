use crate::app::{
    AppState, StoreError, patch_from_form, quick_target, record_from_form,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::state::{FieldKey, FormKind, FormState, Notice, Screen, UiState};
use super::UiAction;

pub(in crate::features::ui) fn handle_form_key(
    key: KeyEvent,
    app: &mut AppState,
    ui: &mut UiState,
) -> UiAction {
    let Screen::Form(form) = &mut ui.screen else {
        return UiAction::None;
    };

    match key.code {
        KeyCode::Esc => {
            let back = screen_after(form.kind);
            ui.screen = back;
        }
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => {
            if let Some(field) = form.focused_mut() {
                field.value.pop();
            }
        }
        KeyCode::Enter => {
            if !form.on_last_field() {
                form.focus_next();
            } else {
                let form = form.clone();
                return submit(form, app, ui);
            }
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return UiAction::None;
            }
            if let Some(field) = form.focused_mut() {
                field.value.push(ch);
            }
        }
        _ => {}
    }
    UiAction::None
}

fn screen_after(kind: FormKind) -> Screen {
    match kind {
        FormKind::QuickPing => Screen::Menu,
        FormKind::Create | FormKind::Edit(_) => Screen::Saved,
    }
}

fn submit(mut form: FormState, app: &mut AppState, ui: &mut UiState) -> UiAction {
    let host = form.value(FieldKey::Host);
    let method = form.value(FieldKey::Method);
    let port = form.value(FieldKey::Port);

    let result = match form.kind {
        FormKind::QuickPing => match quick_target(host, method, port) {
            Ok(target) => {
                ui.screen = Screen::Menu;
                return UiAction::StartSession(target);
            }
            Err(err) => Err(StoreError::from(err)),
        },
        FormKind::Create => record_from_form(form.value(FieldKey::Name), host, method, port)
            .map_err(StoreError::from)
            .and_then(|record| app.create_target(&record))
            .map(|index| {
                ui.selected = index;
                Notice::info(format!("Saved ping #{} created.", index + 1))
            }),
        FormKind::Edit(index) => patch_from_form(form.value(FieldKey::Name), host, method, port)
            .map_err(StoreError::from)
            .and_then(|patch| {
                if patch.is_empty() {
                    return Ok(Notice::info("Nothing changed."));
                }
                app.edit_target(index, &patch)
                    .map(|()| Notice::info(format!("Saved ping #{} updated.", index + 1)))
            }),
    };

    match result {
        Ok(notice) => {
            ui.notice = Some(notice);
            ui.screen = screen_after(form.kind);
        }
        Err(err) => {
            form.error = Some(err.to_string());
            ui.screen = Screen::Form(form);
        }
    }
    UiAction::None
}
