//! # Child Detail Component
//!
//! Shows one child's record and hosts the two actions on it:
//!
//! - `e` opens a notes editor overlay pre-filled with the current notes
//! - `d` asks for confirmation before deleting; only the language's "yes"
//!   key confirms, any other key backs out
//!
//! `ChildDetailState` is rebuilt whenever the detail view is entered, so an
//! abandoned editor or prompt never carries over to another child.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};

use crate::core::i18n::{Label, Language, confirm_key};
use crate::core::state::format_date;
use crate::store::Child;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;
use crate::tui::ui::centered_rect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailEvent {
    SaveNotes(String),
    Delete,
    Back,
}

enum Mode {
    Viewing,
    EditingNotes(TextField),
    ConfirmingDelete,
}

pub struct ChildDetailState {
    mode: Mode,
}

impl Default for ChildDetailState {
    fn default() -> Self {
        Self {
            mode: Mode::Viewing,
        }
    }
}

impl ChildDetailState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::EditingNotes(_))
    }

    pub fn is_confirming(&self) -> bool {
        matches!(self.mode, Mode::ConfirmingDelete)
    }

    /// Handle a key event for the open child.
    pub fn handle_event(
        &mut self,
        event: &TuiEvent,
        child: &Child,
        language: Language,
    ) -> Option<DetailEvent> {
        match &mut self.mode {
            Mode::Viewing => match event {
                TuiEvent::Escape => Some(DetailEvent::Back),
                TuiEvent::InputChar('e') | TuiEvent::InputChar('E') => {
                    let notes = child.notes.as_deref().unwrap_or_default();
                    let mut editor = TextField::multi_line(Label::EditNotes.text(language), notes);
                    editor.focused = true;
                    self.mode = Mode::EditingNotes(editor);
                    None
                }
                TuiEvent::InputChar('d') | TuiEvent::InputChar('D') => {
                    self.mode = Mode::ConfirmingDelete;
                    None
                }
                _ => None,
            },
            Mode::EditingNotes(editor) => {
                if matches!(event, TuiEvent::Escape) {
                    self.mode = Mode::Viewing;
                    return None;
                }
                match editor.handle_event(event)? {
                    FieldEvent::Submit => {
                        let notes = editor.text().to_string();
                        self.mode = Mode::Viewing;
                        Some(DetailEvent::SaveNotes(notes))
                    }
                    FieldEvent::ContentChanged => None,
                }
            }
            Mode::ConfirmingDelete => {
                self.mode = Mode::Viewing;
                match event {
                    TuiEvent::InputChar(c) if c.to_ascii_lowercase() == confirm_key(language) => {
                        Some(DetailEvent::Delete)
                    }
                    _ => None,
                }
            }
        }
    }
}

/// Transient render wrapper for the detail view.
pub struct ChildDetail<'a> {
    state: &'a mut ChildDetailState,
    child: &'a Child,
    language: Language,
}

impl<'a> ChildDetail<'a> {
    pub fn new(state: &'a mut ChildDetailState, child: &'a Child, language: Language) -> Self {
        Self {
            state,
            child,
            language,
        }
    }

    fn field_line(&self, label: Label, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{} ", label.text(self.language)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(value),
        ])
    }

    fn render_confirm(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 30, area);
        frame.render_widget(Clear, overlay);
        let prompt = Paragraph::new(Label::ConfirmDelete.text(self.language))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Red))
                    .title(Label::DeleteChild.text(self.language))
                    .title_bottom(Line::from(Label::HelpConfirm.text(self.language)).centered())
                    .padding(Padding::uniform(1)),
            );
        frame.render_widget(prompt, overlay);
    }
}

impl Component for ChildDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let language = self.language;
        let help = if self.state.is_editing() {
            Label::HelpNotesEditor
        } else {
            Label::HelpDetail
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Label::ChildInfo.text(language))
            .title_bottom(Line::from(help.text(language)).centered())
            .padding(Padding::uniform(1));

        let gender = self
            .child
            .gender
            .clone()
            .unwrap_or_else(|| Label::NotAvailable.text(language).to_string());
        let notes = self
            .child
            .notes
            .clone()
            .unwrap_or_else(|| Label::NoNotes.text(language).to_string());

        let mut lines = vec![
            Line::from(Span::styled(
                self.child.full_name(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            self.field_line(Label::BirthDateLabel, format_date(self.child.birth_date)),
            self.field_line(Label::GenderLabel, gender),
            Line::default(),
            Line::from(Span::styled(
                Label::NotesLabel.text(language),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        lines.extend(notes.lines().map(|l| Line::from(l.to_string())));

        let body = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(body, area);

        if self.state.is_confirming() {
            self.render_confirm(frame, area);
        } else if let Mode::EditingNotes(editor) = &mut self.state.mode {
            let overlay = centered_rect(80, 60, area);
            let height = editor.height(overlay.width).min(overlay.height);
            let editor_area = Rect { height, ..overlay };
            frame.render_widget(Clear, editor_area);
            editor.render(frame, editor_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_child;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(state: &mut ChildDetailState, child: &Child, language: Language) -> String {
        let backend = TestBackend::new(70, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ChildDetail::new(state, child, language).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_escape_goes_back() {
        let mut state = ChildDetailState::default();
        let child = sample_child(1);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape, &child, Language::En),
            Some(DetailEvent::Back)
        );
    }

    #[test]
    fn test_edit_notes_prefilled_and_saved() {
        let mut state = ChildDetailState::default();
        let mut child = sample_child(1);
        child.notes = Some("lisps".to_string());

        state.handle_event(&TuiEvent::InputChar('e'), &child, Language::En);
        assert!(state.is_editing());
        state.handle_event(&TuiEvent::InputChar('!'), &child, Language::En);

        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &child, Language::En),
            Some(DetailEvent::SaveNotes("lisps!".to_string()))
        );
        assert!(!state.is_editing());
    }

    #[test]
    fn test_edit_without_notes_starts_empty() {
        let mut state = ChildDetailState::default();
        let child = sample_child(1);
        state.handle_event(&TuiEvent::InputChar('e'), &child, Language::En);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &child, Language::En),
            Some(DetailEvent::SaveNotes(String::new()))
        );
    }

    #[test]
    fn test_escape_abandons_editor() {
        let mut state = ChildDetailState::default();
        let child = sample_child(1);
        state.handle_event(&TuiEvent::InputChar('e'), &child, Language::En);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape, &child, Language::En),
            None
        );
        assert!(!state.is_editing());
    }

    #[test]
    fn test_letters_in_editor_are_text_not_commands() {
        let mut state = ChildDetailState::default();
        let child = sample_child(1);
        state.handle_event(&TuiEvent::InputChar('e'), &child, Language::En);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('d'), &child, Language::En),
            None
        );
        assert!(state.is_editing());
    }

    #[test]
    fn test_delete_requires_language_yes_key() {
        let child = sample_child(1);

        let mut state = ChildDetailState::default();
        state.handle_event(&TuiEvent::InputChar('d'), &child, Language::En);
        assert!(state.is_confirming());
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('y'), &child, Language::En),
            Some(DetailEvent::Delete)
        );

        let mut state = ChildDetailState::default();
        state.handle_event(&TuiEvent::InputChar('d'), &child, Language::Pl);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('y'), &child, Language::Pl),
            None
        );
        state.handle_event(&TuiEvent::InputChar('d'), &child, Language::Pl);
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('T'), &child, Language::Pl),
            Some(DetailEvent::Delete)
        );
    }

    #[test]
    fn test_any_other_key_cancels_delete() {
        let child = sample_child(1);
        let mut state = ChildDetailState::default();
        state.handle_event(&TuiEvent::InputChar('d'), &child, Language::En);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape, &child, Language::En),
            None
        );
        assert!(!state.is_confirming());
    }

    #[test]
    fn test_render_record_with_placeholders() {
        let mut state = ChildDetailState::default();
        let mut child = sample_child(1);
        child.gender = None;
        let text = render_text(&mut state, &child, Language::En);

        assert!(text.contains("Jan Kowalski"));
        assert!(text.contains("10.05.2015"));
        assert!(text.contains("N/A"));
        assert!(text.contains("(no notes)"));
    }

    #[test]
    fn test_render_confirm_prompt() {
        let mut state = ChildDetailState::default();
        let child = sample_child(1);
        state.handle_event(&TuiEvent::InputChar('d'), &child, Language::Pl);
        let text = render_text(&mut state, &child, Language::Pl);
        assert!(text.contains("Usuń dziecko"));
    }
}
