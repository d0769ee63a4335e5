//! # Console Launcher
//!
//! Line-based front end: add a child, list children, delete a
//! child by id. Talks to the store directly with the same contract the TUI
//! controller uses, so validation and cascading behave identically.
//!
//! Generic over the reader and writer so tests can drive it with buffers.

use std::io::{BufRead, Write};

use log::info;

use crate::AppError;
use crate::core::i18n::{Label, Language};
use crate::core::state::parse_date;
use crate::store::{ChildId, NewChild, RecordStore, StoreError};

pub struct Console<'a, S, R, W> {
    store: &'a mut S,
    language: Language,
    input: R,
    output: W,
}

impl<'a, S: RecordStore, R: BufRead, W: Write> Console<'a, S, R, W> {
    pub fn new(store: &'a mut S, language: Language, input: R, output: W) -> Self {
        Self {
            store,
            language,
            input,
            output,
        }
    }

    /// Menu loop. Returns on `q` or end of input.
    pub fn run(&mut self) -> Result<(), AppError> {
        info!("Console launcher started");
        loop {
            self.say(Label::ConsoleChooseOption)?;
            self.say(Label::ConsoleAddChild)?;
            self.say(Label::ConsoleListChildren)?;
            self.say(Label::ConsoleDeleteChild)?;
            self.say(Label::ConsoleQuit)?;
            let Some(choice) = self.ask(Label::ConsoleChoice)? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.add_child()?,
                "2" => self.list_children()?,
                "3" => self.delete_child()?,
                "q" | "Q" => return Ok(()),
                _ => self.say(Label::ConsoleInvalidChoice)?,
            }
        }
    }

    fn add_child(&mut self) -> Result<(), AppError> {
        let Some(first_name) = self.ask(Label::ConsoleAskFirstName)? else {
            return Ok(());
        };
        let Some(last_name) = self.ask(Label::ConsoleAskLastName)? else {
            return Ok(());
        };
        let Some(birth_date) = self.ask(Label::ConsoleAskBirthDate)? else {
            return Ok(());
        };
        let Some(birth_date) = parse_date(&birth_date) else {
            return self.say(Label::InvalidBirthDate);
        };
        let Some(gender) = self.ask(Label::ConsoleAskGender)? else {
            return Ok(());
        };
        let Some(notes) = self.ask(Label::ConsoleAskNotes)? else {
            return Ok(());
        };

        let child = NewChild {
            first_name,
            last_name,
            birth_date,
            gender: Some(gender),
            notes: Some(notes),
        };
        match self.store.create_child(&child) {
            Ok(created) => {
                let message = Label::ChildAdded.text(self.language);
                writeln!(self.output, "{message} (ID: {})", created.id)?;
                Ok(())
            }
            Err(StoreError::Validation(e)) => self.say(e.label()),
            Err(e) => Err(e.into()),
        }
    }

    fn list_children(&mut self) -> Result<(), AppError> {
        let children = self.store.list_children()?;
        if children.is_empty() {
            return self.say(Label::NoChildren);
        }
        self.say(Label::ConsoleChildrenHeader)?;
        for child in children {
            writeln!(self.output, "ID: {} - {}", child.id, child.full_name())?;
        }
        Ok(())
    }

    fn delete_child(&mut self) -> Result<(), AppError> {
        let Some(raw) = self.ask(Label::ConsoleAskId)? else {
            return Ok(());
        };
        let Ok(id) = raw.parse::<i64>() else {
            return self.say(Label::ConsoleInvalidId);
        };
        match self.store.delete_child(ChildId(id)) {
            Ok(_) => self.say(Label::DeleteSuccess),
            Err(e) if e.is_not_found() => self.say(Label::ChildMissing),
            Err(e) => Err(e.into()),
        }
    }

    fn say(&mut self, label: Label) -> Result<(), AppError> {
        writeln!(self.output, "{}", label.text(self.language))?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    fn ask(&mut self, label: Label) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", label.text(self.language))?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
