//! # Application State
//!
//! Core business state for LogoApp. Domain data and navigation only, no
//! terminal types. Presentation state (cursor positions, list scroll) lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── view: View                  // which screen is showing
//! ├── language: Language          // active UI language
//! ├── children: Vec<Child>        // last loaded list
//! ├── subject: Option<ChildId>    // child open in the detail view
//! ├── detail: Option<Child>       // its loaded record
//! ├── form: ChildForm             // add-form draft
//! ├── form_error: Option<..>      // inline validation message
//! └── notice: Option<Label>       // one-shot status line
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use chrono::{Local, NaiveDate};

use crate::core::i18n::{Label, Language};
use crate::store::{Child, ChildId, NewChild, ValidationError};

/// The fixed set of screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Menu,
    ChildrenList,
    AddChildForm,
    Settings,
    ChildDetail,
}

impl View {
    pub fn title(self) -> Label {
        match self {
            View::Menu => Label::Title,
            View::ChildrenList => Label::ListChildren,
            View::AddChildForm => Label::AddChild,
            View::Settings => Label::UserSettings,
            View::ChildDetail => Label::ChildInfo,
        }
    }
}

/// Accepted birth date formats, display format first.
pub const DATE_FORMATS: [&str; 2] = ["%d.%m.%Y", "%Y-%m-%d"];

/// Raw text of the add-child form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildForm {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub gender: String,
    pub notes: String,
}

impl Default for ChildForm {
    /// Empty fields with the birth date pre-filled with today.
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            birth_date: format_date(Local::now().date_naive()),
            gender: String::new(),
            notes: String::new(),
        }
    }
}

impl ChildForm {
    /// Turn the typed text into a record ready for the store.
    pub fn to_new_child(&self) -> Result<NewChild, ValidationError> {
        let birth_date = parse_date(&self.birth_date)
            .ok_or_else(|| ValidationError::InvalidBirthDate(self.birth_date.trim().to_string()))?;
        NewChild {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date,
            gender: Some(self.gender.clone()),
            notes: Some(self.notes.clone()),
        }
        .validated()
    }
}

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMATS[0]).to_string()
}

#[derive(Debug, Clone, Default)]
pub struct App {
    pub view: View,
    pub language: Language,
    pub children: Vec<Child>,
    /// Only set while `view == ChildDetail`.
    pub subject: Option<ChildId>,
    pub detail: Option<Child>,
    pub form: ChildForm,
    pub form_error: Option<ValidationError>,
    pub notice: Option<Label>,
}

impl App {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn label(&self, label: Label) -> &'static str {
        label.text(self.language)
    }

    /// Notes of the open child, or the "no notes" label.
    pub fn detail_notes(&self) -> &str {
        self.detail
            .as_ref()
            .and_then(|child| child.notes.as_deref())
            .unwrap_or_else(|| self.label(Label::NoNotes))
    }
}
