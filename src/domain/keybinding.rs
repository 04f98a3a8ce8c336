use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    RefreshPage,

    // Form navigation
    NextField,
    PreviousField,

    // Draft editing
    AddTask,
    RemoveTask,
    Submit,

    // Feed
    ScrollFeedUp,
    ScrollFeedDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Short key name for the footer, e.g. `^N`.
    #[must_use]
    pub fn key_label(&self) -> String {
        let key = match self.key.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "S-Tab".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            other => format!("{other:?}"),
        };
        if self.key.modifiers.contains(KeyModifiers::CONTROL) {
            format!("^{key}")
        } else {
            key
        }
    }
}

/// Fixed key table of the progress screen.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<Keybind>,
}

impl Keymap {
    #[must_use]
    pub fn bindings(&self) -> &[Keybind] {
        &self.bindings
    }

    /// Finds the action bound to a key press.
    ///
    /// `Shift` is ignored for `BackTab`, which terminals report either way.
    #[must_use]
    pub fn resolve(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings
            .iter()
            .find(|bind| {
                bind.key.code == key.code
                    && (bind.key.modifiers == key.modifiers || key.code == KeyCode::BackTab)
            })
            .map(|bind| bind.action)
    }
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

impl Default for Keymap {
    fn default() -> Self {
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;

        Self {
            bindings: vec![
                Keybind::new(key(KeyCode::Enter, none), Action::Submit, "Create"),
                Keybind::new(key(KeyCode::Tab, none), Action::NextField, "Next"),
                Keybind::new(key(KeyCode::BackTab, KeyModifiers::SHIFT), Action::PreviousField, "Prev")
                    .hidden(),
                Keybind::new(key(KeyCode::Down, none), Action::NextField, "Next").hidden(),
                Keybind::new(key(KeyCode::Up, none), Action::PreviousField, "Prev").hidden(),
                Keybind::new(key(KeyCode::Char('n'), ctrl), Action::AddTask, "Add Task"),
                Keybind::new(key(KeyCode::Char('d'), ctrl), Action::RemoveTask, "Remove Task"),
                Keybind::new(key(KeyCode::Char('r'), ctrl), Action::RefreshPage, "Refresh"),
                Keybind::new(key(KeyCode::PageUp, none), Action::ScrollFeedUp, "Scroll").hidden(),
                Keybind::new(key(KeyCode::PageDown, none), Action::ScrollFeedDown, "Scroll"),
                Keybind::new(key(KeyCode::Esc, none), Action::Quit, "Quit"),
                Keybind::new(key(KeyCode::Char('c'), ctrl), Action::Quit, "Quit").hidden(),
            ],
        }
    }
}
