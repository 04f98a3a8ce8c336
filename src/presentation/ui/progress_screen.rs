use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, StatefulWidget, Widget},
};

use crate::domain::keybinding::{Action, Keymap};
use crate::domain::ports::NewProcess;
use crate::infrastructure::config::UiConfig;
use crate::presentation::widgets::{
    ProcessFeed, ProcessFeedState, ProcessForm, ProcessFormState, StatusBar, StatusLevel,
};
use crate::{NAME, VERSION};

const FORM_WIDTH_PERCENT: u16 = 45;
const FEED_SCROLL_STEP: u16 = 5;

/// What the app should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ScreenAction {
    None,
    Quit,
    Submit(NewProcess),
    Refresh,
}

/// The single screen: creation form on the left, feed on the right.
#[derive(Debug)]
pub struct ProgressScreenState {
    form: ProcessFormState,
    feed: ProcessFeedState,
    keymap: Keymap,
    notice: Option<(String, StatusLevel)>,
    date_format: String,
    show_task_totals: bool,
}

impl ProgressScreenState {
    #[must_use]
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            form: ProcessFormState::new(),
            feed: ProcessFeedState::new(),
            keymap: Keymap::default(),
            notice: None,
            date_format: ui.date_format.clone(),
            show_task_totals: ui.show_task_totals,
        }
    }

    #[must_use]
    pub const fn form(&self) -> &ProcessFormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProcessFormState {
        &mut self.form
    }

    #[must_use]
    pub const fn feed(&self) -> &ProcessFeedState {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut ProcessFeedState {
        &mut self.feed
    }

    pub fn set_notice(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.notice = Some((text.into(), level));
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|(text, _)| text.as_str())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        self.notice = None;

        if let Some(action) = self.keymap.resolve(&key) {
            return self.apply(action);
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.form.input_char(c);
            }
            KeyCode::Backspace => self.form.backspace(),
            _ => {}
        }
        ScreenAction::None
    }

    fn apply(&mut self, action: Action) -> ScreenAction {
        match action {
            Action::Quit => return ScreenAction::Quit,
            Action::RefreshPage => return ScreenAction::Refresh,
            Action::Submit => {
                return self
                    .form
                    .submit()
                    .map_or(ScreenAction::None, ScreenAction::Submit);
            }
            Action::NextField => self.form.focus_next(),
            Action::PreviousField => self.form.focus_previous(),
            Action::AddTask => self.form.add_task(),
            Action::RemoveTask => {
                self.form.remove_focused_task();
            }
            Action::ScrollFeedUp => self.feed.scroll_up(FEED_SCROLL_STEP),
            Action::ScrollFeedDown => self.feed.scroll_down(FEED_SCROLL_STEP),
        }
        ScreenAction::None
    }

    fn status(&self) -> Option<(&str, StatusLevel)> {
        if self.feed.is_loading() {
            Some(("Loading progress…", StatusLevel::Info))
        } else if self.form.in_flight() > 0 {
            Some(("Submitting…", StatusLevel::Info))
        } else {
            self.notice
                .as_ref()
                .map(|(text, level)| (text.as_str(), *level))
        }
    }
}

pub struct ProgressScreen;

impl ProgressScreen {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for ProgressScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl StatefulWidget for ProgressScreen {
    type State = ProgressScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [header_area, content_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .areas(area);

        render_header(header_area, buf);

        let [form_area, feed_area] = Layout::horizontal([
            Constraint::Percentage(FORM_WIDTH_PERCENT),
            Constraint::Fill(1),
        ])
        .areas(content_area);

        ProcessForm::new().render(form_area, buf, &mut state.form);
        ProcessFeed::new(&state.date_format)
            .show_task_totals(state.show_task_totals)
            .render(feed_area, buf, &mut state.feed);

        let mut bar = StatusBar::new(state.keymap.bindings());
        if let Some((text, level)) = state.status() {
            bar = bar.message(text, level);
        }
        bar.render(status_area, buf);
    }
}

fn render_header(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(vec![
        Span::styled(
            NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" v{VERSION}"), Style::default().fg(Color::DarkGray)),
    ]))
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ProcessRecord, TaskField};
    use crate::presentation::widgets::FormField;
    use test_case::test_case;

    fn screen() -> ProgressScreenState {
        ProgressScreenState::new(&UiConfig::default())
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn type_text(state: &mut ProgressScreenState, text: &str) {
        for c in text.chars() {
            state.handle_key(press(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    fn tab(state: &mut ProgressScreenState) {
        state.handle_key(press(KeyCode::Tab, KeyModifiers::NONE));
    }

    #[test_case(KeyCode::Esc, KeyModifiers::NONE, ScreenAction::Quit ; "escape quits")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, ScreenAction::Quit ; "ctrl c quits")]
    #[test_case(KeyCode::Char('r'), KeyModifiers::CONTROL, ScreenAction::Refresh ; "ctrl r refreshes")]
    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE, ScreenAction::None ; "plain q types")]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, ScreenAction::None ; "empty draft does not submit")]
    fn test_key_actions(code: KeyCode, modifiers: KeyModifiers, expected: ScreenAction) {
        let mut state = screen();
        assert_eq!(state.handle_key(press(code, modifiers)), expected);
    }

    #[test]
    fn test_typing_fills_draft_and_submits() {
        let mut state = screen();
        type_text(&mut state, "Onboarding");
        tab(&mut state);
        type_text(&mut state, "HR");
        tab(&mut state);
        type_text(&mut state, "2024-05-01");
        tab(&mut state);
        type_text(&mut state, "Laptop");
        tab(&mut state);
        type_text(&mut state, "5");

        let action = state.handle_key(press(KeyCode::Enter, KeyModifiers::NONE));

        let ScreenAction::Submit(request) = action else {
            panic!("expected submit, got {action:?}");
        };
        assert_eq!(request.process_name, "Onboarding");
        assert_eq!(request.tasks.len(), 1);
        assert_eq!(request.tasks[0].days, 5);
    }

    #[test]
    fn test_add_then_remove_task_with_keys() {
        let mut state = screen();
        state.handle_key(press(KeyCode::Char('n'), KeyModifiers::CONTROL));
        state.handle_key(press(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert_eq!(state.form().draft().tasks().len(), 3);
        assert_eq!(state.form().focus(), FormField::Task(2, TaskField::Name));

        state.handle_key(press(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(state.form().draft().tasks().len(), 2);
        state.handle_key(press(KeyCode::Char('d'), KeyModifiers::CONTROL));
        state.handle_key(press(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(state.form().draft().tasks().len(), 1);
    }

    #[test]
    fn test_backspace_and_backtab() {
        let mut state = screen();
        type_text(&mut state, "HRx");
        state.handle_key(press(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(state.form().draft().process_name, "HR");

        state.handle_key(press(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(state.form().focus(), FormField::Task(0, TaskField::Days));
    }

    #[test]
    fn test_key_press_clears_notice() {
        let mut state = screen();
        state.set_notice("Process created", StatusLevel::Success);
        assert_eq!(state.notice(), Some("Process created"));

        type_text(&mut state, "a");
        assert!(state.notice().is_none());
    }

    #[test]
    fn test_status_prefers_loading() {
        let mut state = screen();
        state.set_notice("Process created", StatusLevel::Success);
        state.feed_mut().begin_load();

        assert_eq!(
            state.status(),
            Some(("Loading progress…", StatusLevel::Info))
        );
    }

    #[test]
    fn test_render_small_terminal_with_task_focused() {
        let mut state = screen();
        state.handle_key(press(KeyCode::Char('n'), KeyModifiers::CONTROL));

        for height in 1..16 {
            let area = Rect::new(0, 0, 80, height);
            let mut buf = Buffer::empty(area);
            ProgressScreen::new().render(area, &mut buf, &mut state);
        }
    }

    #[test]
    fn test_time_date_format_renders_without_panic() {
        let ui = UiConfig {
            date_format: "%Y-%m-%d %H:%M".to_string(),
            ..UiConfig::default()
        };
        let mut state = ProgressScreenState::new(&ui);
        let ticket = state.feed_mut().begin_load();
        state.feed_mut().finish_load(
            ticket,
            Ok(vec![ProcessRecord::new(1_u64, "Onboarding", "HR", "2024-05-01")]),
        );

        let area = Rect::new(0, 0, 120, 20);
        let mut buf = Buffer::empty(area);
        ProgressScreen::new().render(area, &mut buf, &mut state);

        let rows: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect();
        assert!(rows.iter().any(|r| r.contains("Start: 2024-05-01")));
    }

    #[test]
    fn test_render_both_panes() {
        let mut state = screen();
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);

        ProgressScreen::new().render(area, &mut buf, &mut state);

        let rows: Vec<String> = (0..area.height)
            .map(|y| (0..area.width).map(|x| buf[(x, y)].symbol()).collect())
            .collect();
        assert!(rows[0].contains(NAME));
        assert!(rows[1].contains("New Process"));
        assert!(rows[1].contains("Progress"));
        assert!(rows[29].contains("Add Task"));
    }
}
