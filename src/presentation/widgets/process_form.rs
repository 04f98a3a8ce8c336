//! Process creation form.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::input::TextField;
use crate::application::use_cases::CreateProcessUseCase;
use crate::domain::entities::{ProcessDraft, TaskField};
use crate::domain::errors::ApiError;
use crate::domain::ports::NewProcess;

const FIELD_HEIGHT: u16 = 3;
const DAYS_WIDTH: u16 = 10;
const REMOVE_WIDTH: u16 = 3;

/// Focusable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FormField {
    ProcessName,
    Category,
    StartDate,
    Task(usize, TaskField),
}

impl FormField {
    /// Task index, if this is a task field.
    #[must_use]
    pub const fn task_index(self) -> Option<usize> {
        match self {
            Self::Task(index, _) => Some(index),
            _ => None,
        }
    }
}

/// State of the creation form: the draft plus focus and banner.
#[derive(Debug)]
pub struct ProcessFormState {
    draft: ProcessDraft,
    focus: FormField,
    error: Option<String>,
    in_flight: usize,
}

impl ProcessFormState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: ProcessDraft::new(),
            focus: FormField::ProcessName,
            error: None,
            in_flight: 0,
        }
    }

    #[must_use]
    pub const fn draft(&self) -> &ProcessDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProcessDraft {
        &mut self.draft
    }

    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Error banner text, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of submissions awaiting a response.
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn field_order(&self) -> Vec<FormField> {
        let mut order = vec![
            FormField::ProcessName,
            FormField::Category,
            FormField::StartDate,
        ];
        for index in 0..self.draft.tasks().len() {
            order.push(FormField::Task(index, TaskField::Name));
            order.push(FormField::Task(index, TaskField::Days));
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.field_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + 1) % order.len()];
    }

    pub fn focus_previous(&mut self) {
        let order = self.field_order();
        let pos = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(pos + order.len() - 1) % order.len()];
    }

    fn focused_value(&self) -> &str {
        match self.focus {
            FormField::ProcessName => &self.draft.process_name,
            FormField::Category => &self.draft.category,
            FormField::StartDate => &self.draft.start_date,
            FormField::Task(index, field) => self
                .draft
                .tasks()
                .get(index)
                .map_or("", |task| task.get(field)),
        }
    }

    fn set_focused_value(&mut self, value: String) {
        match self.focus {
            FormField::ProcessName => self.draft.process_name = value,
            FormField::Category => self.draft.category = value,
            FormField::StartDate => self.draft.start_date = value,
            FormField::Task(index, field) => {
                self.draft.update_task(index, field, value);
            }
        }
    }

    /// Appends a character to the focused field.
    pub fn input_char(&mut self, c: char) {
        let mut value = self.focused_value().to_string();
        value.push(c);
        self.set_focused_value(value);
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        let mut value = self.focused_value().to_string();
        if value.pop().is_some() {
            self.set_focused_value(value);
        }
    }

    /// Appends an empty task and focuses its name.
    pub fn add_task(&mut self) {
        self.draft.add_task();
        self.focus = FormField::Task(self.draft.tasks().len() - 1, TaskField::Name);
    }

    /// Removes the task holding focus. Returns whether one was removed.
    pub fn remove_focused_task(&mut self) -> bool {
        let Some(index) = self.focus.task_index() else {
            return false;
        };
        if !self.draft.remove_task(index) {
            return false;
        }

        let last = self.draft.tasks().len() - 1;
        if let FormField::Task(i, field) = self.focus {
            self.focus = FormField::Task(i.min(last), field);
        }
        true
    }

    /// Starts a submission.
    ///
    /// Clears the banner, then either returns the request to send or shows
    /// the validation problem and returns `None`. Submitting again while a
    /// request is in flight is allowed.
    pub fn submit(&mut self) -> Option<NewProcess> {
        self.error = None;
        match CreateProcessUseCase::prepare(&self.draft) {
            Ok(process) => {
                self.in_flight += 1;
                Some(process)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Applies the outcome of a submission.
    ///
    /// On success the draft is reset and `true` is returned so the caller
    /// can refresh the page; on failure the banner shows the error and the
    /// draft is kept for retry.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(()) => {
                self.draft.reset();
                self.focus = FormField::ProcessName;
                true
            }
            Err(e) => {
                self.error = Some(e.banner_text());
                false
            }
        }
    }
}

impl Default for ProcessFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Form pane widget.
#[derive(Debug, Default)]
pub struct ProcessForm;

impl ProcessForm {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn render_tasks(area: Rect, buf: &mut Buffer, state: &ProcessFormState) {
        let tasks = state.draft.tasks();
        let removable = tasks.len() > 1;
        let visible = usize::from((area.height / FIELD_HEIGHT).max(1));
        let first = state
            .focus
            .task_index()
            .map_or(0, |i| (i + 1).saturating_sub(visible));

        let mut y = area.y;
        for (index, task) in tasks.iter().enumerate().skip(first).take(visible) {
            if y + FIELD_HEIGHT > area.bottom() {
                break;
            }
            let row = Rect::new(area.x, y, area.width, FIELD_HEIGHT);
            let [name_area, days_area, remove_area] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(DAYS_WIDTH),
                Constraint::Length(REMOVE_WIDTH),
            ])
            .areas(row);

            let position = format!("Task {}", index + 1);
            TextField::new(&position, &task.name)
                .placeholder("Task name")
                .focused(state.focus == FormField::Task(index, TaskField::Name))
                .render(name_area, buf);
            TextField::new("Days", &task.days)
                .focused(state.focus == FormField::Task(index, TaskField::Days))
                .render(days_area, buf);

            if removable {
                let cross_area =
                    Rect::new(remove_area.x + 1, remove_area.y + 1, 1, 1).intersection(remove_area);
                Paragraph::new("×")
                    .style(Style::default().fg(Color::Red))
                    .render(cross_area, buf);
            }
            y += FIELD_HEIGHT;
        }
    }
}

impl StatefulWidget for ProcessForm {
    type State = ProcessFormState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" New Process ");
        let inner = block.inner(area);
        block.render(area, buf);

        let banner_height = u16::from(state.error.is_some()) * 2;
        let [
            banner_area,
            name_area,
            category_area,
            date_area,
            tasks_label_area,
            tasks_area,
            actions_area,
        ] = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(inner);

        if let Some(error) = &state.error {
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .render(banner_area, buf);
        }

        TextField::new("Process", &state.draft.process_name)
            .focused(state.focus == FormField::ProcessName)
            .render(name_area, buf);
        TextField::new("Category", &state.draft.category)
            .focused(state.focus == FormField::Category)
            .render(category_area, buf);
        TextField::new("Start Date", &state.draft.start_date)
            .placeholder("YYYY-MM-DD")
            .focused(state.focus == FormField::StartDate)
            .render(date_area, buf);

        Paragraph::new(Span::styled(
            "Tasks:",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .render(tasks_label_area, buf);
        Self::render_tasks(tasks_area, buf, state);

        let submit_label = if state.in_flight > 0 {
            "[ Creating… ]"
        } else {
            "[ Create Progress ]"
        };
        Paragraph::new(vec![
            Line::styled("+ Add Task (^N)", Style::default().fg(Color::Blue)),
            Line::styled(
                submit_label,
                Style::default().fg(Color::White).bg(Color::Blue),
            ),
        ])
        .render(actions_area, buf);
    }
}
