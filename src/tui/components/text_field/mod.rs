//! # TextField Component
//!
//! Bordered text input used by the add-child form and the notes editor.
//!
//! ## Responsibilities
//!
//! - Capture text input, paste, backspace/delete and cursor movement
//! - Emit `Submit` on Enter; the parent decides what that means
//! - Single-line fields scroll horizontally; multi-line fields wrap and
//!   scroll vertically, accepting Ctrl+J as a newline
//!
//! ## State Management
//!
//! The buffer and cursor are internal state. `title` and `focused` are props
//! set by the parent before each render.

mod wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use wrap::{
    BORDER_OFFSET, MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, cursor_line_col, display_width,
    inner_width, next_char_boundary, prev_char_boundary, wrap_lines,
};

/// High-level events emitted by a TextField
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Enter pressed
    Submit,
    /// Buffer or cursor changed
    ContentChanged,
}

pub struct TextField {
    /// Text buffer (Internal State)
    buffer: String,
    /// Cursor position as byte offset in buffer
    cursor: usize,
    /// First visible wrapped line (multi-line only)
    scroll_offset: u16,
    multiline: bool,
    /// Block title (Prop)
    pub title: String,
    /// Whether this field owns the terminal cursor (Prop)
    pub focused: bool,
}

impl TextField {
    pub fn single_line(title: impl Into<String>, initial: &str) -> Self {
        Self::build(title.into(), initial.replace('\n', " "), false)
    }

    pub fn multi_line(title: impl Into<String>, initial: &str) -> Self {
        Self::build(title.into(), initial.to_string(), true)
    }

    fn build(title: String, buffer: String, multiline: bool) -> Self {
        Self {
            cursor: buffer.len(),
            buffer,
            scroll_offset: 0,
            multiline,
            title,
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Rows needed to render at the given width, borders included.
    pub fn height(&self, area_width: u16) -> u16 {
        if !self.multiline {
            return 1 + VERTICAL_OVERHEAD;
        }
        let lines = wrap_lines(&self.buffer, inner_width(area_width)).len() as u16;
        lines.clamp(1, MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    fn insert(&mut self, text: &str) {
        let text = if self.multiline {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        self.buffer.insert_str(self.cursor, &text);
        self.cursor += text.len();
    }

    fn render_single_line(&self, frame: &mut Frame, area: Rect, block: Block) {
        let width = inner_width(area.width);
        let cursor_col = display_width(&self.buffer[..self.cursor]);

        // Drop leading characters until the cursor fits.
        let overflow = cursor_col.saturating_sub(width.saturating_sub(1));
        let mut skipped = 0u16;
        let mut start = 0usize;
        for (i, c) in self.buffer.char_indices() {
            if skipped >= overflow {
                start = i;
                break;
            }
            skipped += display_width(c.encode_utf8(&mut [0; 4]));
            start = i + c.len_utf8();
        }

        let paragraph = Paragraph::new(&self.buffer[start..]).block(block);
        frame.render_widget(paragraph, area);

        if self.focused {
            frame.set_cursor_position((
                area.x + BORDER_OFFSET + cursor_col - skipped,
                area.y + BORDER_OFFSET,
            ));
        }
    }

    fn render_multi_line(&mut self, frame: &mut Frame, area: Rect, block: Block) {
        let width = inner_width(area.width);
        let visible = area.height.saturating_sub(VERTICAL_OVERHEAD).max(1);
        let lines = wrap_lines(&self.buffer, width);
        let (cursor_line, cursor_col) = cursor_line_col(&self.buffer, self.cursor, width);

        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + visible {
            self.scroll_offset = cursor_line + 1 - visible;
        }

        let start = self.scroll_offset as usize;
        let end = (start + visible as usize).min(lines.len());
        let shown = lines.get(start..end).unwrap_or_default().join("\n");

        frame.render_widget(Paragraph::new(shown).block(block), area);

        if self.focused {
            frame.set_cursor_position((
                area.x + BORDER_OFFSET + cursor_col,
                area.y + BORDER_OFFSET + cursor_line - self.scroll_offset,
            ));
        }
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title.clone());

        if self.multiline {
            self.render_multi_line(frame, area, block);
        } else {
            self.render_single_line(frame, area, block);
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert(c.encode_utf8(&mut [0; 4]));
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                self.insert(text);
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::NewLine if self.multiline => {
                self.insert("\n");
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Delete if self.cursor < self.buffer.len() => {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::CursorLeft if self.cursor > 0 => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::CursorRight if self.cursor < self.buffer.len() => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::CursorHome => {
                let line_start = self.buffer[..self.cursor]
                    .rfind('\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                (self.cursor != line_start).then(|| {
                    self.cursor = line_start;
                    FieldEvent::ContentChanged
                })
            }
            TuiEvent::CursorEnd => {
                let line_end = self.buffer[self.cursor..]
                    .find('\n')
                    .map(|i| self.cursor + i)
                    .unwrap_or(self.buffer.len());
                (self.cursor != line_end).then(|| {
                    self.cursor = line_end;
                    FieldEvent::ContentChanged
                })
            }
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_text(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut field = TextField::single_line("Imię", "");
        type_text(&mut field, "Jaś");
        assert_eq!(field.text(), "Jaś");

        assert_eq!(
            field.handle_event(&TuiEvent::Backspace),
            Some(FieldEvent::ContentChanged)
        );
        assert_eq!(field.text(), "Ja");
    }

    #[test]
    fn test_insert_in_middle() {
        let mut field = TextField::single_line("Name", "Jn");
        field.handle_event(&TuiEvent::CursorLeft);
        type_text(&mut field, "a");
        assert_eq!(field.text(), "Jan");
    }

    #[test]
    fn test_backspace_at_start_is_ignored() {
        let mut field = TextField::single_line("Name", "a");
        field.handle_event(&TuiEvent::CursorHome);
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);
        assert_eq!(field.handle_event(&TuiEvent::Delete), Some(FieldEvent::ContentChanged));
        assert_eq!(field.text(), "");
    }

    #[test]
    fn test_single_line_flattens_paste() {
        let mut field = TextField::single_line("Name", "");
        field.handle_event(&TuiEvent::Paste("Jan\nKowalski".to_string()));
        assert_eq!(field.text(), "Jan Kowalski");
        assert_eq!(field.handle_event(&TuiEvent::NewLine), None);
    }

    #[test]
    fn test_multi_line_accepts_newline() {
        let mut field = TextField::multi_line("Notes", "line one");
        field.handle_event(&TuiEvent::NewLine);
        type_text(&mut field, "line two");
        assert_eq!(field.text(), "line one\nline two");
    }

    #[test]
    fn test_submit_keeps_buffer() {
        let mut field = TextField::single_line("Name", "Jan");
        assert_eq!(field.handle_event(&TuiEvent::Submit), Some(FieldEvent::Submit));
        assert_eq!(field.text(), "Jan");
    }

    #[test]
    fn test_height() {
        let single = TextField::single_line("Name", "Jan");
        assert_eq!(single.height(40), 3);

        let multi = TextField::multi_line("Notes", "a\nb\nc");
        assert_eq!(multi.height(40), 5);

        let long = TextField::multi_line("Notes", &"x\n".repeat(20));
        assert_eq!(long.height(40), MAX_VISIBLE_LINES + VERTICAL_OVERHEAD);
    }

    #[test]
    fn test_render_shows_title_and_text() {
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::single_line("Nazwisko", "Kowalski");
        field.focused = true;

        terminal.draw(|f| field.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Nazwisko"));
        assert!(text.contains("Kowalski"));
    }

    #[test]
    fn test_long_single_line_scrolls_to_cursor() {
        let backend = TestBackend::new(12, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut field = TextField::single_line("N", "abcdefghijklmnopqrstuvwxyz");
        field.focused = true;

        terminal.draw(|f| field.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("xyz"));
        assert!(!text.contains("abc"));
    }
}
