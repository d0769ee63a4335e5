//! SQLite-backed [`RecordStore`].
//!
//! Table and column names follow the layout of existing `logopedia.db` files,
//! so a database created by earlier versions of the tool opens unchanged.
//! Dates are stored as `YYYY-MM-DD` text through rusqlite's chrono support.

use std::path::Path;

use log::{debug, info, warn};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::model::{
    Answer, AnswerId, CascadeReport, Child, ChildId, Examination, ExaminationId, NewAnswer,
    NewChild, NewExamination, RecordKind, normalize_optional,
};
use super::{RecordStore, Result, StoreError};

const SCHEMA: &str = "
    create table if not exists children (
        id integer primary key autoincrement,
        first_name text not null,
        last_name text not null,
        birth_date date not null,
        gender text null,
        notes text null
    );
    create table if not exists examinations (
        id integer primary key autoincrement,
        child_id integer not null references children(id),
        date date not null,
        exam_type text null,
        conclusions text null
    );
    create table if not exists answers (
        id integer primary key autoincrement,
        examination_id integer not null references examinations(id),
        question_id text not null,
        answer_value text not null
    );
";

const CHILD_COLUMNS: &str = "id, first_name, last_name, birth_date, gender, notes";
const EXAMINATION_COLUMNS: &str = "id, child_id, date, exam_type, conclusions";
const ANSWER_COLUMNS: &str = "id, examination_id, question_id, answer_value";

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file and make sure the tables exist.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening record store at {}", path.display());
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        // Foreign keys are off by default in SQLite; the cascade relies on them
        // to refuse orphans.
        conn.pragma_update(None, "foreign_keys", true)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn child_exists(&self, id: ChildId) -> Result<bool> {
        let found = self
            .conn
            .query_row("select 1 from children where id = ?1", params![id.0], |_| {
                Ok(())
            })
            .optional()?;
        Ok(found.is_some())
    }

    // ------------------------------------------------------------------
    // Examinations and answers. No UI creates these; they are reachable
    // through direct calls only.
    // ------------------------------------------------------------------

    pub fn create_examination(&mut self, exam: &NewExamination) -> Result<Examination> {
        if !self.child_exists(exam.child_id)? {
            warn!("Examination refused: child {} does not exist", exam.child_id);
            return Err(StoreError::NotFound {
                record: RecordKind::Child,
                id: exam.child_id.0,
            });
        }
        let date = exam.resolved_date();
        let exam_type = normalize_optional(exam.exam_type.as_deref());
        let conclusions = normalize_optional(exam.conclusions.as_deref());
        self.conn.execute(
            "insert into examinations (child_id, date, exam_type, conclusions)
             values (?1, ?2, ?3, ?4)",
            params![exam.child_id.0, date, exam_type, conclusions],
        )?;
        let id = ExaminationId(self.conn.last_insert_rowid());
        info!("Created examination {} for child {}", id, exam.child_id);
        Ok(Examination {
            id,
            child_id: exam.child_id,
            date,
            exam_type,
            conclusions,
        })
    }

    pub fn get_examination(&self, id: ExaminationId) -> Result<Examination> {
        debug!("Fetching examination {}", id);
        self.conn
            .query_row(
                &format!("select {EXAMINATION_COLUMNS} from examinations where id = ?1"),
                params![id.0],
                examination_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound {
                record: RecordKind::Examination,
                id: id.0,
            })
    }

    pub fn list_examinations(&self, child_id: ChildId) -> Result<Vec<Examination>> {
        let mut stmt = self.conn.prepare(&format!(
            "select {EXAMINATION_COLUMNS} from examinations where child_id = ?1 order by id"
        ))?;
        let rows = stmt.query_map(params![child_id.0], examination_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn create_answer(&mut self, answer: &NewAnswer) -> Result<Answer> {
        let answer = answer.validated()?;
        // Surfaces a missing examination as NotFound rather than a constraint error.
        self.get_examination(answer.examination_id)?;
        self.conn.execute(
            "insert into answers (examination_id, question_id, answer_value)
             values (?1, ?2, ?3)",
            params![
                answer.examination_id.0,
                answer.question_id,
                answer.answer_value
            ],
        )?;
        let id = AnswerId(self.conn.last_insert_rowid());
        info!(
            "Recorded answer {} ({}) for examination {}",
            id, answer.question_id, answer.examination_id
        );
        Ok(Answer {
            id,
            examination_id: answer.examination_id,
            question_id: answer.question_id,
            answer_value: answer.answer_value,
        })
    }

    pub fn get_answer(&self, id: AnswerId) -> Result<Answer> {
        self.conn
            .query_row(
                &format!("select {ANSWER_COLUMNS} from answers where id = ?1"),
                params![id.0],
                answer_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound {
                record: RecordKind::Answer,
                id: id.0,
            })
    }

    pub fn list_answers(&self, examination_id: ExaminationId) -> Result<Vec<Answer>> {
        let mut stmt = self.conn.prepare(&format!(
            "select {ANSWER_COLUMNS} from answers where examination_id = ?1 order by id"
        ))?;
        let rows = stmt.query_map(params![examination_id.0], answer_from_row)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

impl RecordStore for SqliteStore {
    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        debug!("Schema ready");
        Ok(())
    }

    fn list_children(&self) -> Result<Vec<Child>> {
        let mut stmt = self
            .conn
            .prepare(&format!("select {CHILD_COLUMNS} from children order by id"))?;
        let rows = stmt.query_map([], child_from_row)?;
        let children = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("Loaded {} children", children.len());
        Ok(children)
    }

    fn get_child(&self, id: ChildId) -> Result<Child> {
        debug!("Fetching child {}", id);
        self.conn
            .query_row(
                &format!("select {CHILD_COLUMNS} from children where id = ?1"),
                params![id.0],
                child_from_row,
            )
            .optional()?
            .ok_or(StoreError::NotFound {
                record: RecordKind::Child,
                id: id.0,
            })
    }

    fn create_child(&mut self, child: &NewChild) -> Result<Child> {
        let child = child.validated()?;
        self.conn.execute(
            "insert into children (first_name, last_name, birth_date, gender, notes)
             values (?1, ?2, ?3, ?4, ?5)",
            params![
                child.first_name,
                child.last_name,
                child.birth_date,
                child.gender,
                child.notes
            ],
        )?;
        let id = ChildId(self.conn.last_insert_rowid());
        info!("Created child {}", id);
        Ok(Child {
            id,
            first_name: child.first_name,
            last_name: child.last_name,
            birth_date: child.birth_date,
            gender: child.gender,
            notes: child.notes,
        })
    }

    fn update_child_notes(&mut self, id: ChildId, notes: &str) -> Result<Child> {
        let notes = normalize_optional(Some(notes));
        let changed = self.conn.execute(
            "update children set notes = ?1 where id = ?2",
            params![notes, id.0],
        )?;
        if changed == 0 {
            warn!("Notes update skipped: child {} not found", id);
            return Err(StoreError::NotFound {
                record: RecordKind::Child,
                id: id.0,
            });
        }
        info!("Updated notes for child {}", id);
        self.get_child(id)
    }

    fn delete_child(&mut self, id: ChildId) -> Result<CascadeReport> {
        let tx = self.conn.transaction()?;

        let exists = tx
            .query_row("select 1 from children where id = ?1", params![id.0], |_| {
                Ok(())
            })
            .optional()?
            .is_some();
        if !exists {
            warn!("Delete skipped: child {} not found", id);
            return Err(StoreError::NotFound {
                record: RecordKind::Child,
                id: id.0,
            });
        }

        let answers = tx.execute(
            "delete from answers where examination_id in
                (select id from examinations where child_id = ?1)",
            params![id.0],
        )?;
        let examinations = tx.execute(
            "delete from examinations where child_id = ?1",
            params![id.0],
        )?;
        tx.execute("delete from children where id = ?1", params![id.0])?;
        tx.commit()?;

        info!(
            "Deleted child {} with {} examinations and {} answers",
            id, examinations, answers
        );
        Ok(CascadeReport {
            examinations,
            answers,
        })
    }
}

fn child_from_row(row: &Row<'_>) -> rusqlite::Result<Child> {
    Ok(Child {
        id: ChildId(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        birth_date: row.get(3)?,
        gender: row.get(4)?,
        notes: row.get(5)?,
    })
}

fn examination_from_row(row: &Row<'_>) -> rusqlite::Result<Examination> {
    Ok(Examination {
        id: ExaminationId(row.get(0)?),
        child_id: ChildId(row.get(1)?),
        date: row.get(2)?,
        exam_type: row.get(3)?,
        conclusions: row.get(4)?,
    })
}

fn answer_from_row(row: &Row<'_>) -> rusqlite::Result<Answer> {
    Ok(Answer {
        id: AnswerId(row.get(0)?),
        examination_id: ExaminationId(row.get(1)?),
        question_id: row.get(2)?,
        answer_value: row.get(3)?,
    })
}
