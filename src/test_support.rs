//! Shared test fixtures.

use chrono::NaiveDate;

use crate::core::controller::Controller;
use crate::core::i18n::Language;
use crate::store::{
    CascadeReport, Child, ChildId, Examination, NewAnswer, NewChild, NewExamination, RecordStore,
    SqliteStore, StoreError,
};

/// Controller over a fresh in-memory store, English UI.
pub fn test_controller() -> Controller<SqliteStore> {
    Controller::new(SqliteStore::open_in_memory().unwrap(), Language::En)
}

pub fn new_child(first: &str, last: &str) -> NewChild {
    NewChild {
        first_name: first.to_string(),
        last_name: last.to_string(),
        birth_date: NaiveDate::from_ymd_opt(2015, 5, 10).unwrap(),
        gender: Some("M".to_string()),
        notes: None,
    }
}

pub fn sample_child(id: i64) -> Child {
    Child {
        id: ChildId(id),
        first_name: "Jan".to_string(),
        last_name: "Kowalski".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2015, 5, 10).unwrap(),
        gender: Some("M".to_string()),
        notes: None,
    }
}

/// A child with two examinations: the first has two answers, the second one.
pub fn store_with_examined_child() -> (SqliteStore, Child, Vec<Examination>) {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let child = store.create_child(&new_child("Jan", "Kowalski")).unwrap();
    let mut exams = Vec::new();
    for answers in [2, 1] {
        let exam = store
            .create_examination(&NewExamination::for_child(child.id))
            .unwrap();
        for n in 0..answers {
            store
                .create_answer(&NewAnswer {
                    examination_id: exam.id,
                    question_id: format!("q{n}"),
                    answer_value: "ok".to_string(),
                })
                .unwrap();
        }
        exams.push(exam);
    }
    (store, child, exams)
}

/// Store whose every call fails like a corrupt database file.
pub struct FailingStore;

fn broken() -> StoreError {
    StoreError::Storage(rusqlite::Error::InvalidQuery)
}

impl RecordStore for FailingStore {
    fn initialize_schema(&self) -> Result<(), StoreError> {
        Err(broken())
    }
    fn list_children(&self) -> Result<Vec<Child>, StoreError> {
        Err(broken())
    }
    fn get_child(&self, _id: ChildId) -> Result<Child, StoreError> {
        Err(broken())
    }
    fn create_child(&mut self, _child: &NewChild) -> Result<Child, StoreError> {
        Err(broken())
    }
    fn update_child_notes(&mut self, _id: ChildId, _notes: &str) -> Result<Child, StoreError> {
        Err(broken())
    }
    fn delete_child(&mut self, _id: ChildId) -> Result<CascadeReport, StoreError> {
        Err(broken())
    }
}
