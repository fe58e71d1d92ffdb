use crate::data_model::target::SavedTarget;

/// Minimum terminal width required (columns)
pub(super) const MIN_TERMINAL_WIDTH: u16 = 60;
/// Minimum terminal height required (rows)
pub(super) const MIN_TERMINAL_HEIGHT: u16 = 22;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) enum Screen {
    Menu,
    Help,
    Settings,
    Saved,
    Form(FormState),
    ConfirmDelete(usize),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum FormKind {
    QuickPing,
    Create,
    Edit(usize),
}

impl FormKind {
    pub(super) fn title(self) -> String {
        match self {
            FormKind::QuickPing => " Quick Ping ".to_string(),
            FormKind::Create => " New Saved Ping ".to_string(),
            FormKind::Edit(index) => format!(" Edit Saved Ping #{} ", index + 1),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum FieldKey {
    Name,
    Host,
    Method,
    Port,
}

impl FieldKey {
    pub(super) fn label(self) -> &'static str {
        match self {
            FieldKey::Name => "Name",
            FieldKey::Host => "Host",
            FieldKey::Method => "Method",
            FieldKey::Port => "Port",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct FormField {
    pub(super) key: FieldKey,
    pub(super) value: String,
    /// Shown dimmed while the field is empty.
    pub(super) hint: String,
}

impl FormField {
    fn new(key: FieldKey, hint: impl Into<String>) -> Self {
        Self {
            key,
            value: String::new(),
            hint: hint.into(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct FormState {
    pub(super) kind: FormKind,
    pub(super) fields: Vec<FormField>,
    pub(super) focused: usize,
    pub(super) error: Option<String>,
}

impl FormState {
    pub(super) fn quick_ping() -> Self {
        Self::with_fields(
            FormKind::QuickPing,
            vec![
                FormField::new(FieldKey::Host, "hostname or IP"),
                FormField::new(FieldKey::Method, "ICMP (default) or TCP"),
                FormField::new(FieldKey::Port, "required for TCP"),
            ],
        )
    }

    pub(super) fn create() -> Self {
        Self::with_fields(
            FormKind::Create,
            vec![
                FormField::new(FieldKey::Name, "display name"),
                FormField::new(FieldKey::Host, "hostname or IP"),
                FormField::new(FieldKey::Method, "ICMP (default) or TCP"),
                FormField::new(FieldKey::Port, "required for TCP"),
            ],
        )
    }

    /// Edit form; every hint shows the current value, which a blank field keeps.
    pub(super) fn edit(index: usize, current: &SavedTarget) -> Self {
        let method = current.target().method();
        let port = method
            .port()
            .map(|port| port.to_string())
            .unwrap_or_else(|| "none".to_string());
        Self::with_fields(
            FormKind::Edit(index),
            vec![
                FormField::new(FieldKey::Name, format!("keep: {}", current.name())),
                FormField::new(FieldKey::Host, format!("keep: {}", current.target().host())),
                FormField::new(FieldKey::Method, format!("keep: {}", method.kind())),
                FormField::new(FieldKey::Port, format!("keep: {port}")),
            ],
        )
    }

    fn with_fields(kind: FormKind, fields: Vec<FormField>) -> Self {
        Self {
            kind,
            fields,
            focused: 0,
            error: None,
        }
    }

    pub(super) fn value(&self, key: FieldKey) -> &str {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }

    pub(super) fn focused_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused)
    }

    pub(super) fn on_last_field(&self) -> bool {
        self.focused + 1 >= self.fields.len()
    }

    pub(super) fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub(super) fn focus_prev(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        if self.focused == 0 {
            self.focused = self.fields.len() - 1;
        } else {
            self.focused -= 1;
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum NoticeLevel {
    Info,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Notice {
    pub(super) level: NoticeLevel,
    pub(super) text: String,
}

impl Notice {
    pub(super) fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub(super) fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

pub(super) struct UiState {
    pub(super) screen: Screen,
    /// Highlighted row of the saved pings list.
    pub(super) selected: usize,
    pub(super) notice: Option<Notice>,
}

impl UiState {
    pub(super) fn new() -> Self {
        Self {
            screen: Screen::Menu,
            selected: 0,
            notice: None,
        }
    }

    pub(super) fn select_next(&mut self, total: usize) {
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub(super) fn select_prev(&mut self, total: usize) {
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub(super) fn clamp(&mut self, total: usize) {
        if total == 0 {
            self.selected = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }
}
