//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::keybinding::Keybind;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Success.
    Success,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
        }
    }
}

/// One-line bar: a status message on the left, key hints on the right.
#[derive(Debug, Clone)]
pub struct StatusBar<'a> {
    message: Option<(&'a str, StatusLevel)>,
    hints: &'a [Keybind],
}

impl<'a> StatusBar<'a> {
    /// Creates bar showing the visible entries of `hints`.
    #[must_use]
    pub const fn new(hints: &'a [Keybind]) -> Self {
        Self {
            message: None,
            hints,
        }
    }

    /// Sets the left-hand message.
    #[must_use]
    pub const fn message(mut self, text: &'a str, level: StatusLevel) -> Self {
        self.message = Some((text, level));
        self
    }

    fn hint_spans(&self) -> Vec<Span<'a>> {
        let key_style = Style::default().fg(Color::White).bg(Color::DarkGray);
        let label_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for bind in self.hints.iter().filter(|b| b.visible_in_bar) {
            if !spans.is_empty() {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {} ", bind.key_label()), key_style));
            spans.push(Span::styled(format!(" {}", bind.label), label_style));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let hints = self.hint_spans();
        let hints_width: usize = hints.iter().map(|s| s.content.width()).sum();

        let mut spans = Vec::new();
        let mut used = 0;

        if let Some((text, level)) = self.message {
            let style = Style::default()
                .fg(level.color())
                .add_modifier(Modifier::BOLD);
            used = text.width();
            spans.push(Span::styled(text, style));
        }

        // Hints are dropped entirely rather than cut when the message needs the room.
        if used + 1 + hints_width <= width {
            let padding = width - used - hints_width;
            spans.push(Span::raw(" ".repeat(padding)));
            spans.extend(hints);
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keybinding::Keymap;

    fn render(bar: StatusBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_message_and_hints() {
        let keymap = Keymap::default();
        let line = render(
            StatusBar::new(keymap.bindings()).message("Process created", StatusLevel::Success),
            140,
        );

        assert!(line.starts_with("Process created"));
        assert!(line.contains("^N"));
        assert!(line.contains("Add Task"));
        assert!(!line.contains("PgUp"));
    }

    #[test]
    fn test_narrow_bar_keeps_message() {
        let keymap = Keymap::default();
        let line = render(
            StatusBar::new(keymap.bindings()).message("Loading progress", StatusLevel::Info),
            20,
        );

        assert!(line.starts_with("Loading progress"));
        assert!(!line.contains("Quit"));
    }
}
