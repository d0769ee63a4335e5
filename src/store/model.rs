//! Record types for the three tables and their insert payloads.
//!
//! ```text
//! Child ──< Examination ──< Answer
//! ```
//!
//! `New*` structs are what callers hand to the store; the store assigns ids
//! and returns the full record.

use std::fmt;

use chrono::{Local, NaiveDate};

use super::ValidationError;

macro_rules! record_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(ChildId);
record_id!(ExaminationId);
record_id!(AnswerId);

/// Which table a record lives in. Used in not-found errors and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Child,
    Examination,
    Answer,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Child => "child",
            RecordKind::Examination => "examination",
            RecordKind::Answer => "answer",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub id: ChildId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: Option<String>,
    pub notes: Option<String>,
}

impl Child {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChild {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: Option<String>,
    pub notes: Option<String>,
}

impl NewChild {
    /// Check required fields and normalize whitespace.
    ///
    /// Names are trimmed; optional fields that are blank after trimming
    /// become `None`.
    pub fn validated(&self) -> Result<NewChild, ValidationError> {
        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            return Err(ValidationError::MissingFirstName);
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            return Err(ValidationError::MissingLastName);
        }
        Ok(NewChild {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date: self.birth_date,
            gender: normalize_optional(self.gender.as_deref()),
            notes: normalize_optional(self.notes.as_deref()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Examination {
    pub id: ExaminationId,
    pub child_id: ChildId,
    pub date: NaiveDate,
    pub exam_type: Option<String>,
    pub conclusions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExamination {
    pub child_id: ChildId,
    /// `None` means "today" in local time.
    pub date: Option<NaiveDate>,
    pub exam_type: Option<String>,
    pub conclusions: Option<String>,
}

impl NewExamination {
    pub fn for_child(child_id: ChildId) -> Self {
        Self {
            child_id,
            date: None,
            exam_type: None,
            conclusions: None,
        }
    }

    pub(super) fn resolved_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: AnswerId,
    pub examination_id: ExaminationId,
    pub question_id: String,
    pub answer_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub examination_id: ExaminationId,
    pub question_id: String,
    pub answer_value: String,
}

impl NewAnswer {
    pub fn validated(&self) -> Result<NewAnswer, ValidationError> {
        let question_id = self.question_id.trim();
        if question_id.is_empty() {
            return Err(ValidationError::MissingQuestionId);
        }
        let answer_value = self.answer_value.trim();
        if answer_value.is_empty() {
            return Err(ValidationError::MissingAnswerValue);
        }
        Ok(NewAnswer {
            examination_id: self.examination_id,
            question_id: question_id.to_string(),
            answer_value: answer_value.to_string(),
        })
    }
}

/// Rows removed by a cascading child delete, not counting the child itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub examinations: usize,
    pub answers: usize,
}

/// Trim free text; blank input means "no value".
pub fn normalize_optional(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
