use super::{UiAction, handle_key};
use crate::app::AppState;
use crate::config::{PingMode, SessionConfig};
use crate::data_model::target::{MethodKind, ProbeMethod, TargetRecord};
use crate::storage::ConfigFile;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use super::super::state::{FormKind, NoticeLevel, Screen, UiState};

fn app_in(dir: &TempDir) -> AppState {
    AppState::load(
        ConfigFile::new(dir.path().join("config.json")),
        SessionConfig::default(),
    )
}

fn press(app: &mut AppState, ui: &mut UiState, code: KeyCode) -> UiAction {
    handle_key(KeyEvent::from(code), app, ui)
}

fn type_text(app: &mut AppState, ui: &mut UiState, text: &str) {
    for ch in text.chars() {
        press(app, ui, KeyCode::Char(ch));
    }
}

fn seed(app: &mut AppState, name: &str, host: &str) {
    app.create_target(&TargetRecord {
        name: name.to_string(),
        host: host.to_string(),
        method: MethodKind::Icmp,
        port: None,
    })
    .unwrap();
}

#[test]
fn menu_routes_and_quits() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let mut ui = UiState::new();

    press(&mut app, &mut ui, KeyCode::Char('3'));
    assert_eq!(ui.screen, Screen::Saved);
    press(&mut app, &mut ui, KeyCode::Esc);
    assert_eq!(ui.screen, Screen::Menu);

    press(&mut app, &mut ui, KeyCode::Char('x'));
    assert_eq!(ui.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));

    assert_eq!(press(&mut app, &mut ui, KeyCode::Char('q')), UiAction::Quit);
}

#[test]
fn ctrl_c_quits_from_any_screen() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let mut ui = UiState::new();
    press(&mut app, &mut ui, KeyCode::Char('2'));

    let action = handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &mut app,
        &mut ui,
    );
    assert_eq!(action, UiAction::Quit);
}

#[test]
fn settings_toggle_persists_mode() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let mut ui = UiState::new();

    press(&mut app, &mut ui, KeyCode::Char('4'));
    press(&mut app, &mut ui, KeyCode::Char('1'));

    assert_eq!(app.mode(), PingMode::Extended);
    assert_eq!(app_in(&dir).mode(), PingMode::Extended);
}

#[test]
fn quick_ping_form_starts_session() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let mut ui = UiState::new();

    press(&mut app, &mut ui, KeyCode::Char('2'));
    type_text(&mut app, &mut ui, "example.com");
    press(&mut app, &mut ui, KeyCode::Enter);
    type_text(&mut app, &mut ui, "tcp");
    press(&mut app, &mut ui, KeyCode::Enter);
    type_text(&mut app, &mut ui, "443");
    let action = press(&mut app, &mut ui, KeyCode::Enter);

    let UiAction::StartSession(target) = action else {
        panic!("expected a session to start, got {action:?}");
    };
    assert_eq!(target.host(), "example.com");
    assert_eq!(target.method(), ProbeMethod::Tcp { port: 443 });
    assert_eq!(ui.screen, Screen::Menu);
}

#[test]
fn quick_ping_form_shows_validation_error() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    let mut ui = UiState::new();

    press(&mut app, &mut ui, KeyCode::Char('2'));
    type_text(&mut app, &mut ui, "example.com");
    press(&mut app, &mut ui, KeyCode::Tab);
    type_text(&mut app, &mut ui, "tcp");
    press(&mut app, &mut ui, KeyCode::Tab);
    let action = press(&mut app, &mut ui, KeyCode::Enter);

    assert_eq!(action, UiAction::None);
    let Screen::Form(form) = &ui.screen else {
        panic!("form should stay open");
    };
    assert_eq!(form.kind, FormKind::QuickPing);
    assert!(form.error.as_deref().unwrap_or("").contains("port"));
}

#[test]
fn create_form_saves_and_selects_entry() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    seed(&mut app, "Existing", "10.0.0.1");
    let mut ui = UiState::new();

    press(&mut app, &mut ui, KeyCode::Char('3'));
    press(&mut app, &mut ui, KeyCode::Char('n'));
    type_text(&mut app, &mut ui, "Home Router");
    press(&mut app, &mut ui, KeyCode::Enter);
    type_text(&mut app, &mut ui, "192.168.1.1");
    press(&mut app, &mut ui, KeyCode::Enter);
    press(&mut app, &mut ui, KeyCode::Enter);
    press(&mut app, &mut ui, KeyCode::Enter);

    assert_eq!(ui.screen, Screen::Saved);
    assert_eq!(ui.selected, 1);
    assert_eq!(app.targets().len(), 2);
    assert_eq!(app_in(&dir).targets().get(1).unwrap().name(), "Home Router");
}

#[test]
fn blank_edit_keeps_entry() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    seed(&mut app, "Gateway", "10.0.0.1");
    let mut ui = UiState::new();

    press(&mut app, &mut ui, KeyCode::Char('3'));
    press(&mut app, &mut ui, KeyCode::Char('e'));
    for _ in 0..4 {
        press(&mut app, &mut ui, KeyCode::Enter);
    }

    assert_eq!(ui.screen, Screen::Saved);
    let entry = app.targets().get(0).unwrap();
    assert_eq!(entry.name(), "Gateway");
    assert_eq!(entry.target().host(), "10.0.0.1");
}

#[test]
fn edit_with_port_on_icmp_entry_is_refused() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    seed(&mut app, "Gateway", "10.0.0.1");
    let mut ui = UiState::new();

    press(&mut app, &mut ui, KeyCode::Char('3'));
    press(&mut app, &mut ui, KeyCode::Char('e'));
    for _ in 0..3 {
        press(&mut app, &mut ui, KeyCode::Enter);
    }
    type_text(&mut app, &mut ui, "80");
    press(&mut app, &mut ui, KeyCode::Enter);

    let Screen::Form(form) = &ui.screen else {
        panic!("form should stay open");
    };
    assert_eq!(form.kind, FormKind::Edit(0));
    assert_eq!(form.error.as_deref(), Some("only TCP probes take a port"));
    let entry = app_in(&dir).targets().get(0).unwrap().clone();
    assert_eq!(entry.target().method(), ProbeMethod::Icmp);
}

#[test]
fn delete_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    seed(&mut app, "A", "a.example");
    seed(&mut app, "B", "b.example");
    let mut ui = UiState::new();

    press(&mut app, &mut ui, KeyCode::Char('3'));
    press(&mut app, &mut ui, KeyCode::Char('2'));
    press(&mut app, &mut ui, KeyCode::Char('d'));
    assert_eq!(ui.screen, Screen::ConfirmDelete(1));
    press(&mut app, &mut ui, KeyCode::Char('n'));
    assert_eq!(app.targets().len(), 2);

    press(&mut app, &mut ui, KeyCode::Char('d'));
    press(&mut app, &mut ui, KeyCode::Char('y'));
    assert_eq!(ui.screen, Screen::Saved);
    assert_eq!(app.targets().len(), 1);
    assert_eq!(ui.selected, 0);
    assert_eq!(app_in(&dir).targets().get(0).unwrap().name(), "A");
}

#[test]
fn saved_list_digit_out_of_range_reports_error() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    seed(&mut app, "Only", "10.0.0.1");
    let mut ui = UiState::new();

    press(&mut app, &mut ui, KeyCode::Char('3'));
    press(&mut app, &mut ui, KeyCode::Char('5'));

    assert_eq!(ui.selected, 0);
    let notice = ui.notice.expect("notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.contains("#5"));
}

#[test]
fn enter_on_saved_entry_starts_session() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in(&dir);
    seed(&mut app, "Gateway", "10.0.0.1");
    let mut ui = UiState::new();

    press(&mut app, &mut ui, KeyCode::Char('3'));
    let action = press(&mut app, &mut ui, KeyCode::Enter);

    let UiAction::StartSession(target) = action else {
        panic!("expected a session to start");
    };
    assert_eq!(target.host(), "10.0.0.1");
}
