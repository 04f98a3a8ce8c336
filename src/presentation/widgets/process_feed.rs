//! Process feed: the read-only list of process records.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget, Wrap},
};
use tracing::{debug, error};

use crate::domain::entities::{ProcessRecord, Task};
use crate::domain::errors::ApiError;

/// Generation id captured when a load is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What happened to a finished load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Records replaced.
    Committed,
    /// Load failed, previous records kept.
    Failed,
    /// A newer load was dispatched meanwhile; result dropped.
    Stale,
}

/// State of the feed pane.
#[derive(Debug, Default)]
pub struct ProcessFeedState {
    records: Vec<ProcessRecord>,
    generation: u64,
    loading: bool,
    scroll: u16,
    /// Wrapped row count and viewport height from the last render.
    content_rows: u16,
    viewport_rows: u16,
}

impl ProcessFeedState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Starts a new load, superseding any load still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        LoadTicket(self.generation)
    }

    /// Whether `ticket` belongs to the most recent load.
    #[must_use]
    pub const fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies a load result if its ticket is still current.
    ///
    /// Failures are logged only; the previous records stay on screen.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<ProcessRecord>, ApiError>,
    ) -> LoadOutcome {
        if !self.is_current(ticket) {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "Dropping stale feed result"
            );
            return LoadOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(records) => {
                self.records = records;
                LoadOutcome::Committed
            }
            Err(e) => {
                error!(error = %e, "Failed to load progress");
                LoadOutcome::Failed
            }
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll());
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Records the wrapped content height and viewport of a render, then
    /// clamps the scroll offset so the last row stays reachable.
    fn set_layout(&mut self, content_rows: usize, viewport_rows: u16) {
        self.content_rows = u16::try_from(content_rows).unwrap_or(u16::MAX);
        self.viewport_rows = viewport_rows;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        self.content_rows.saturating_sub(self.viewport_rows)
    }
}

/// Colors of the feed pane.
#[derive(Debug, Clone)]
pub struct ProcessFeedStyle {
    pub border: Style,
    pub title: Style,
    pub category: Style,
    pub date: Style,
    pub complete: Style,
    pub pending: Style,
    pub empty: Style,
}

impl Default for ProcessFeedStyle {
    fn default() -> Self {
        Self {
            border: Style::default().fg(Color::Gray),
            title: Style::default().add_modifier(Modifier::BOLD),
            category: Style::default().fg(Color::DarkGray),
            date: Style::default().fg(Color::Gray),
            complete: Style::default().fg(Color::Green),
            pending: Style::default().fg(Color::Yellow),
            empty: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

/// Feed pane widget.
pub struct ProcessFeed<'a> {
    date_format: &'a str,
    show_task_totals: bool,
    style: ProcessFeedStyle,
}

impl<'a> ProcessFeed<'a> {
    #[must_use]
    pub fn new(date_format: &'a str) -> Self {
        Self {
            date_format,
            show_task_totals: true,
            style: ProcessFeedStyle::default(),
        }
    }

    #[must_use]
    pub const fn show_task_totals(mut self, show: bool) -> Self {
        self.show_task_totals = show;
        self
    }

    fn task_line(&self, task: &Task) -> Line<'static> {
        let (state, style) = if task.is_completed() {
            ("Complete", self.style.complete)
        } else {
            ("Pending", self.style.pending)
        };
        Line::from(vec![
            Span::raw(format!("  • {} – {}d – ", task.name(), task.days())),
            Span::styled(state, style),
        ])
    }

    fn record_lines(&self, record: &ProcessRecord, lines: &mut Vec<Line<'static>>) {
        let mut header = vec![
            Span::styled(record.process_name().to_string(), self.style.title),
            Span::raw(" "),
            Span::styled(format!("({})", record.category()), self.style.category),
        ];
        if self.show_task_totals && !record.tasks().is_empty() {
            header.push(Span::styled(
                format!("  {}/{} done", record.completed_count(), record.tasks().len()),
                self.style.category,
            ));
        }
        lines.push(Line::from(header));

        lines.push(Line::styled(
            format!("Start: {}", record.formatted_start_date(self.date_format)),
            self.style.date,
        ));
        lines.extend(record.tasks().iter().map(|task| self.task_line(task)));
        lines.push(Line::default());
    }

    fn lines(&self, state: &ProcessFeedState) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for record in state.records() {
            self.record_lines(record, &mut lines);
        }
        lines
    }
}

impl StatefulWidget for ProcessFeed<'_> {
    type State = ProcessFeedState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let title = if state.is_loading() {
            " Progress (loading…) "
        } else {
            " Progress "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.style.border)
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if state.records().is_empty() {
            state.set_layout(0, inner.height);
            if !state.is_loading() {
                Paragraph::new("No processes yet")
                    .style(self.style.empty)
                    .render(inner, buf);
            }
            return;
        }

        let paragraph = Paragraph::new(self.lines(state)).wrap(Wrap { trim: false });
        state.set_layout(paragraph.line_count(inner.width), inner.height);

        paragraph.scroll((state.scroll(), 0)).render(inner, buf);
    }
}
