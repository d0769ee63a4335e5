//! # Controller
//!
//! Glue between the pure reducer and the record store. Owns both the `App`
//! and the store instance it was constructed with, so there is no global
//! session: the TUI, the tests and any future front end each build their own.
//!
//! ```text
//! dispatch(action)
//!   └─ update(app, action) → Effect
//!        └─ run effect on store → result Action
//!             └─ update(app, result) → Effect ... until Effect::None
//! ```
//!
//! Not-found results become `Action::ChildMissing`. Storage failures are
//! returned to the caller, which treats them as fatal.

use log::{debug, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::i18n::Language;
use crate::core::state::App;
use crate::store::{ChildId, RecordStore, StoreError};

/// Whether the session should keep running after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Controller<S: RecordStore> {
    app: App,
    store: S,
}

impl<S: RecordStore> Controller<S> {
    pub fn new(store: S, language: Language) -> Self {
        Self {
            app: App::new(language),
            store,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Flow, StoreError> {
        let mut next = Some(action);
        while let Some(action) = next.take() {
            debug!("Dispatch: {:?}", action);
            let effect = update(&mut self.app, action);
            next = match effect {
                Effect::None => None,
                Effect::Quit => return Ok(Flow::Quit),
                Effect::ReloadChildren => Some(Action::ChildrenLoaded(self.store.list_children()?)),
                Effect::LoadChild(id) => {
                    missing_as_action(id, self.store.get_child(id).map(Action::ChildLoaded))?
                }
                Effect::CreateChild(child) => match self.store.create_child(&child) {
                    Ok(created) => Some(Action::ChildCreated(created)),
                    // The form validates first, so this only fires if the
                    // store's rules are stricter. Keep the user on the form.
                    Err(StoreError::Validation(e)) => {
                        warn!("Store rejected child: {}", e);
                        self.app.form_error = Some(e);
                        None
                    }
                    Err(e) => return Err(e),
                },
                Effect::UpdateNotes { id, notes } => missing_as_action(
                    id,
                    self.store
                        .update_child_notes(id, &notes)
                        .map(Action::NotesSaved),
                )?,
                Effect::DeleteChild(id) => missing_as_action(
                    id,
                    self.store.delete_child(id).map(|_| Action::ChildDeleted(id)),
                )?,
            };
        }
        Ok(Flow::Continue)
    }
}

fn missing_as_action(
    id: ChildId,
    result: Result<Action, StoreError>,
) -> Result<Option<Action>, StoreError> {
    match result {
        Ok(action) => Ok(Some(action)),
        Err(e) if e.is_not_found() => {
            warn!("{}; returning to list", e);
            Ok(Some(Action::ChildMissing(id)))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::i18n::Label;
    use crate::core::state::{ChildForm, View};
    use crate::store::{NewAnswer, NewExamination, SqliteStore};
    use crate::test_support::{FailingStore, test_controller};

    fn form(first: &str, last: &str) -> ChildForm {
        ChildForm {
            first_name: first.to_string(),
            last_name: last.to_string(),
            birth_date: "10.05.2015".to_string(),
            gender: "M".to_string(),
            notes: String::new(),
        }
    }

    fn add_child(controller: &mut Controller<SqliteStore>, first: &str, last: &str) -> ChildId {
        controller.dispatch(Action::OpenAddForm).unwrap();
        controller.dispatch(Action::SaveChild(form(first, last))).unwrap();
        controller
            .app()
            .children
            .iter()
            .find(|c| c.first_name == first && c.last_name == last)
            .map(|c| c.id)
            .unwrap()
    }

    #[test]
    fn example_scenario_end_to_end() {
        let mut controller = test_controller();
        controller.dispatch(Action::OpenChildren).unwrap();
        assert!(controller.app().children.is_empty());

        let id = add_child(&mut controller, "Jan", "Kowalski");
        assert_eq!(id, ChildId(1));
        assert_eq!(controller.app().view, View::ChildrenList);
        assert_eq!(controller.app().children.len(), 1);
        assert_eq!(controller.app().children[0].full_name(), "Jan Kowalski");

        controller.dispatch(Action::SelectChild(id)).unwrap();
        assert_eq!(controller.app().view, View::ChildDetail);
        assert_eq!(controller.app().detail_notes(), "(no notes)");

        controller
            .dispatch(Action::SaveNotes("stutters on plosives".to_string()))
            .unwrap();
        controller.dispatch(Action::Back).unwrap();
        controller.dispatch(Action::SelectChild(id)).unwrap();
        assert_eq!(controller.app().detail_notes(), "stutters on plosives");

        controller.dispatch(Action::DeleteSubject).unwrap();
        assert_eq!(controller.app().view, View::ChildrenList);
        assert!(controller.app().children.is_empty());
        assert_eq!(controller.app().notice, Some(Label::DeleteSuccess));
        assert!(controller.store().get_child(id).unwrap_err().is_not_found());
    }

    #[test]
    fn invalid_form_touches_nothing() {
        let mut controller = test_controller();
        controller.dispatch(Action::OpenChildren).unwrap();
        controller.dispatch(Action::OpenAddForm).unwrap();
        controller.dispatch(Action::SaveChild(form("", "Kowalski"))).unwrap();

        assert_eq!(controller.app().view, View::AddChildForm);
        assert!(controller.app().form_error.is_some());
        assert!(controller.store().list_children().unwrap().is_empty());
    }

    #[test]
    fn whitespace_notes_show_no_notes_label() {
        let mut controller = test_controller();
        controller.dispatch(Action::OpenChildren).unwrap();
        let id = add_child(&mut controller, "Jan", "Kowalski");
        controller.dispatch(Action::SelectChild(id)).unwrap();
        controller
            .dispatch(Action::SaveNotes("something".to_string()))
            .unwrap();
        controller.dispatch(Action::SaveNotes("   \n ".to_string())).unwrap();

        assert_eq!(controller.app().detail_notes(), "(no notes)");
        assert_eq!(controller.store().get_child(id).unwrap().notes, None);
    }

    #[test]
    fn subject_isolation_between_selections() {
        let mut controller = test_controller();
        controller.dispatch(Action::OpenChildren).unwrap();
        let first = add_child(&mut controller, "Jan", "Kowalski");
        let second = add_child(&mut controller, "Ola", "Nowak");

        controller.dispatch(Action::SelectChild(first)).unwrap();
        controller
            .dispatch(Action::SaveNotes("keep me".to_string()))
            .unwrap();
        controller.dispatch(Action::Back).unwrap();
        assert!(controller.app().subject.is_none());

        // Stale delete outside the detail view is ignored.
        controller.dispatch(Action::DeleteSubject).unwrap();
        assert_eq!(controller.store().list_children().unwrap().len(), 2);

        controller.dispatch(Action::SelectChild(second)).unwrap();
        controller.dispatch(Action::DeleteSubject).unwrap();

        let kept = controller.store().get_child(first).unwrap();
        assert_eq!(kept.notes.as_deref(), Some("keep me"));
        assert!(controller.store().get_child(second).unwrap_err().is_not_found());
    }

    #[test]
    fn delete_removes_examinations_and_answers() {
        let mut controller = test_controller();
        controller.dispatch(Action::OpenChildren).unwrap();
        let id = add_child(&mut controller, "Jan", "Kowalski");
        let exam = controller
            .store_mut()
            .create_examination(&NewExamination::for_child(id))
            .unwrap();
        let answer = controller
            .store_mut()
            .create_answer(&NewAnswer {
                examination_id: exam.id,
                question_id: "r_articulation".to_string(),
                answer_value: "replaces r with l".to_string(),
            })
            .unwrap();

        controller.dispatch(Action::SelectChild(id)).unwrap();
        controller.dispatch(Action::DeleteSubject).unwrap();

        let store = controller.store();
        assert!(store.get_examination(exam.id).unwrap_err().is_not_found());
        assert!(store.get_answer(answer.id).unwrap_err().is_not_found());
    }

    #[test]
    fn selecting_vanished_child_returns_to_list() {
        let mut controller = test_controller();
        controller.dispatch(Action::OpenChildren).unwrap();
        let id = add_child(&mut controller, "Jan", "Kowalski");
        controller.store_mut().delete_child(id).unwrap();

        assert_eq!(
            controller.dispatch(Action::SelectChild(id)).unwrap(),
            Flow::Continue
        );
        assert_eq!(controller.app().view, View::ChildrenList);
        assert!(controller.app().subject.is_none());
        assert!(controller.app().children.is_empty());
    }

    #[test]
    fn editing_vanished_child_returns_to_list() {
        let mut controller = test_controller();
        controller.dispatch(Action::OpenChildren).unwrap();
        let id = add_child(&mut controller, "Jan", "Kowalski");
        controller.dispatch(Action::SelectChild(id)).unwrap();
        controller.store_mut().delete_child(id).unwrap();

        controller.dispatch(Action::SaveNotes("x".to_string())).unwrap();
        assert_eq!(controller.app().view, View::ChildrenList);
        assert_eq!(controller.app().notice, Some(Label::ChildMissing));
    }

    #[test]
    fn quit_stops_the_session() {
        let mut controller = test_controller();
        assert_eq!(controller.dispatch(Action::Quit).unwrap(), Flow::Quit);
    }

    #[test]
    fn storage_errors_are_propagated() {
        let mut controller = Controller::new(FailingStore, Language::En);
        let result = controller.dispatch(Action::OpenChildren);
        assert!(matches!(result, Err(StoreError::Storage(_))));
    }

    #[test]
    fn language_toggle_round_trips() {
        let mut controller = test_controller();
        controller.dispatch(Action::OpenSettings).unwrap();
        let before = controller.app().label(Label::ListChildren);
        controller.dispatch(Action::ToggleLanguage).unwrap();
        assert_ne!(controller.app().label(Label::ListChildren), before);
        controller.dispatch(Action::ToggleLanguage).unwrap();
        assert_eq!(controller.app().label(Label::ListChildren), before);
    }
}
