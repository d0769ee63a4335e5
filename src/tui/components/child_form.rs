//! # Add-Child Form Component
//!
//! Five stacked text fields: first name, last name, birth date, gender and
//! notes. Tab/↓ and Shift+Tab/↑ move between fields, Enter saves, Esc cancels.
//! Only the notes field is multi-line.
//!
//! The typed text is handed to core as a `ChildForm`; validation happens
//! there and comes back as `app.form_error`, which is drawn under the fields.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::i18n::{Label, Language};
use crate::core::state::ChildForm;
use crate::store::ValidationError;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::text_field::{FieldEvent, TextField};
use crate::tui::event::TuiEvent;

const FIRST_NAME: usize = 0;
const LAST_NAME: usize = 1;
const BIRTH_DATE: usize = 2;
const GENDER: usize = 3;
const NOTES: usize = 4;
const FIELD_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Save(ChildForm),
    Cancel,
}

pub struct ChildFormState {
    fields: [TextField; FIELD_COUNT],
    focus: usize,
}

impl ChildFormState {
    /// Build the fields from a draft. Focus starts on the first name.
    pub fn new(form: &ChildForm, language: Language) -> Self {
        let fields = [
            TextField::single_line(Label::FirstName.text(language), &form.first_name),
            TextField::single_line(Label::LastName.text(language), &form.last_name),
            TextField::single_line(Label::BirthDate.text(language), &form.birth_date),
            TextField::single_line(Label::Gender.text(language), &form.gender),
            TextField::multi_line(Label::Notes.text(language), &form.notes),
        ];
        Self { fields, focus: FIRST_NAME }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Current text as a core draft.
    pub fn to_form(&self) -> ChildForm {
        ChildForm {
            first_name: self.fields[FIRST_NAME].text().to_string(),
            last_name: self.fields[LAST_NAME].text().to_string(),
            birth_date: self.fields[BIRTH_DATE].text().to_string(),
            gender: self.fields[GENDER].text().to_string(),
            notes: self.fields[NOTES].text().to_string(),
        }
    }
}

impl EventHandler for ChildFormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::Escape => Some(FormEvent::Cancel),
            TuiEvent::NextField | TuiEvent::CursorDown => {
                self.focus = (self.focus + 1) % FIELD_COUNT;
                None
            }
            TuiEvent::PrevField | TuiEvent::CursorUp => {
                self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
                None
            }
            _ => match self.fields[self.focus].handle_event(event)? {
                FieldEvent::Submit => Some(FormEvent::Save(self.to_form())),
                FieldEvent::ContentChanged => None,
            },
        }
    }
}

/// Transient render wrapper for the add form.
pub struct ChildFormView<'a> {
    state: &'a mut ChildFormState,
    error: Option<&'a ValidationError>,
    language: Language,
}

impl<'a> ChildFormView<'a> {
    pub fn new(
        state: &'a mut ChildFormState,
        error: Option<&'a ValidationError>,
        language: Language,
    ) -> Self {
        Self {
            state,
            error,
            language,
        }
    }
}

impl Component for ChildFormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Label::AddChild.text(self.language))
            .title_bottom(Line::from(Label::HelpForm.text(self.language)).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut constraints: Vec<Constraint> = self
            .state
            .fields
            .iter()
            .map(|field| Constraint::Length(field.height(inner.width)))
            .collect();
        constraints.push(Constraint::Min(0));
        let areas = Layout::vertical(constraints).split(inner);

        let focus = self.state.focus;
        for (i, field) in self.state.fields.iter_mut().enumerate() {
            field.focused = i == focus;
            field.render(frame, areas[i]);
        }

        if let Some(error) = self.error {
            let message = Paragraph::new(error.label().text(self.language))
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: true });
            frame.render_widget(message, areas[FIELD_COUNT]);
        }
    }
}
