//! # Record Store
//!
//! Durable storage for children, their examinations and the answers recorded
//! during an examination.
//!
//! The controller only talks to the [`RecordStore`] trait. [`SqliteStore`] is
//! the production implementation backed by a single SQLite file; tests can
//! open it in memory or swap in another implementation.
//!
//! ## Errors
//!
//! Three kinds, matching how the application reacts to them:
//!
//! - [`StoreError::Validation`]: a required field is missing. Nothing was written.
//! - [`StoreError::NotFound`]: the id does not exist. Nothing was written.
//! - [`StoreError::Storage`]: SQLite failed. Not recoverable in-process; the
//!   remedy is deleting the database file.

pub mod model;
pub mod sqlite;

use thiserror::Error;

use crate::core::i18n::Label;

pub use model::{
    Answer, AnswerId, CascadeReport, Child, ChildId, Examination, ExaminationId, NewAnswer,
    NewChild, NewExamination, RecordKind,
};
pub use sqlite::SqliteStore;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("first name is required")]
    MissingFirstName,
    #[error("last name is required")]
    MissingLastName,
    #[error("birth date '{0}' is not a valid date")]
    InvalidBirthDate(String),
    #[error("question id is required")]
    MissingQuestionId,
    #[error("answer value is required")]
    MissingAnswerValue,
}

impl ValidationError {
    /// Display key for the inline form message.
    pub fn label(&self) -> Label {
        match self {
            ValidationError::MissingFirstName | ValidationError::MissingLastName => {
                Label::MissingName
            }
            ValidationError::InvalidBirthDate(_) => Label::InvalidBirthDate,
            ValidationError::MissingQuestionId | ValidationError::MissingAnswerValue => {
                Label::MissingAnswerField
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("{record} {id} not found")]
    NotFound { record: RecordKind, id: i64 },
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence operations the controller depends on.
///
/// Mutating calls commit before returning.
pub trait RecordStore {
    /// Create the tables if they are missing. Safe to call repeatedly.
    fn initialize_schema(&self) -> Result<()>;

    /// All children in insertion order.
    fn list_children(&self) -> Result<Vec<Child>>;

    fn get_child(&self, id: ChildId) -> Result<Child>;

    /// Validate and insert. Returns the stored record with its new id.
    fn create_child(&mut self, child: &NewChild) -> Result<Child>;

    /// Overwrite the notes. Blank text clears them.
    fn update_child_notes(&mut self, id: ChildId, notes: &str) -> Result<Child>;

    /// Delete the child with all of its examinations and answers, atomically.
    fn delete_child(&mut self, id: ChildId) -> Result<CascadeReport>;
}
