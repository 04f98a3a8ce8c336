//! Single-line text field widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Bordered, read-only view of a form value with an end-of-text cursor.
///
/// The value itself lives in the form state; this widget only draws it.
#[derive(Debug, Clone, Copy)]
pub struct TextField<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> TextField<'a> {
    /// Creates field with label and current value.
    #[must_use]
    pub const fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: "",
            focused: false,
        }
    }

    /// Sets placeholder text shown while the value is empty.
    #[must_use]
    pub const fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = text;
        self
    }

    /// Sets focus state.
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Tail of the value that fits in `width` columns, leaving one column
    /// for the cursor.
    fn visible_tail(&self, width: usize) -> &'a str {
        let budget = width.saturating_sub(1);
        if self.value.width() <= budget {
            return self.value;
        }

        let mut used = 0;
        let mut start = self.value.len();
        for (idx, c) in self.value.char_indices().rev() {
            let w = c.width().unwrap_or(0);
            if used + w > budget {
                break;
            }
            used += w;
            start = idx;
        }
        &self.value[start..]
    }
}

impl Widget for TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (text, text_style) = if self.value.is_empty() {
            (self.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (
                self.visible_tail(inner.width as usize),
                Style::default().fg(Color::White),
            )
        };
        Paragraph::new(text).style(text_style).render(inner, buf);

        if self.focused {
            let typed = if self.value.is_empty() { "" } else { text };
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + typed.width() as u16;
            if cursor_x < inner.right()
                && let Some(cell) = buf.cell_mut((cursor_x, inner.y))
            {
                cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}
