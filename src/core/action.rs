//! # Actions
//!
//! Everything that can happen in LogoApp becomes an `Action`.
//! User picks "Children list"? That's `Action::OpenChildren`.
//! The store returns the rows? That's `Action::ChildrenLoaded(children)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing the store call to make next.
//! No I/O happens here; the controller runs the effect and feeds the result
//! back in as another action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Actions that make no sense for the current view are ignored.

use log::debug;

use crate::core::i18n::Label;
use crate::core::state::{App, ChildForm, View};
use crate::store::{Child, ChildId, NewChild};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // User intents
    OpenChildren,
    OpenSettings,
    OpenAddForm,
    Back,
    SelectChild(ChildId),
    SaveChild(ChildForm),
    CancelForm,
    ToggleLanguage,
    /// Confirmed text from the notes editor.
    SaveNotes(String),
    /// Confirmed delete of the open child.
    DeleteSubject,
    Quit,

    // Store results
    ChildrenLoaded(Vec<Child>),
    ChildLoaded(Child),
    ChildCreated(Child),
    NotesSaved(Child),
    ChildDeleted(ChildId),
    /// A lookup, edit or delete hit an id that no longer exists.
    ChildMissing(ChildId),
}

/// Store work requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    ReloadChildren,
    LoadChild(ChildId),
    CreateChild(NewChild),
    UpdateNotes { id: ChildId, notes: String },
    DeleteChild(ChildId),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    use Action::*;

    // A fresh user intent replaces the previous one-shot notice.
    if matches!(
        action,
        OpenChildren | OpenSettings | OpenAddForm | Back | SelectChild(_) | CancelForm
    ) {
        app.notice = None;
    }

    match (app.view, action) {
        (_, Quit) => Effect::Quit,

        // Menu
        (View::Menu, OpenChildren) => {
            app.view = View::ChildrenList;
            Effect::ReloadChildren
        }
        (View::Menu, OpenSettings) => {
            app.view = View::Settings;
            Effect::None
        }

        // Children list
        (View::ChildrenList, OpenAddForm) => {
            app.form = ChildForm::default();
            app.form_error = None;
            app.view = View::AddChildForm;
            Effect::None
        }
        (View::ChildrenList, Back) | (View::Settings, Back) => {
            app.view = View::Menu;
            Effect::None
        }
        (View::ChildrenList, SelectChild(id)) => Effect::LoadChild(id),
        (View::ChildrenList, ChildLoaded(child)) => {
            app.subject = Some(child.id);
            app.detail = Some(child);
            app.view = View::ChildDetail;
            Effect::None
        }

        // Add form
        (View::AddChildForm, SaveChild(form)) => match form.to_new_child() {
            Ok(child) => {
                app.form = form;
                app.form_error = None;
                Effect::CreateChild(child)
            }
            Err(e) => {
                debug!("Form rejected: {}", e);
                app.form = form;
                app.form_error = Some(e);
                Effect::None
            }
        },
        (View::AddChildForm, ChildCreated(_)) => {
            app.form = ChildForm::default();
            app.form_error = None;
            app.notice = Some(Label::ChildAdded);
            app.view = View::ChildrenList;
            Effect::ReloadChildren
        }
        (View::AddChildForm, CancelForm) | (View::AddChildForm, Back) => {
            app.form = ChildForm::default();
            app.form_error = None;
            app.view = View::ChildrenList;
            Effect::None
        }

        // Settings
        (View::Settings, ToggleLanguage) => {
            app.language = app.language.toggled();
            Effect::None
        }

        // Detail
        (View::ChildDetail, SaveNotes(notes)) => match app.subject {
            Some(id) => Effect::UpdateNotes { id, notes },
            None => Effect::None,
        },
        (View::ChildDetail, NotesSaved(child)) if app.subject == Some(child.id) => {
            app.detail = Some(child);
            app.notice = Some(Label::NotesUpdated);
            Effect::None
        }
        (View::ChildDetail, DeleteSubject) => match app.subject {
            Some(id) => Effect::DeleteChild(id),
            None => Effect::None,
        },
        (View::ChildDetail, ChildDeleted(id)) if app.subject == Some(id) => {
            leave_detail(app);
            app.notice = Some(Label::DeleteSuccess);
            Effect::ReloadChildren
        }
        (View::ChildDetail, Back) => {
            leave_detail(app);
            Effect::None
        }
        (View::ChildrenList | View::ChildDetail, ChildMissing(_)) => {
            leave_detail(app);
            app.notice = Some(Label::ChildMissing);
            Effect::ReloadChildren
        }

        // Results that apply wherever they land
        (_, ChildrenLoaded(children)) => {
            app.children = children;
            Effect::None
        }

        (view, action) => {
            debug!("Ignoring {:?} in {:?}", action, view);
            Effect::None
        }
    }
}

/// Back to the list with the subject cleared, so later edits or deletes
/// cannot hit a previously opened child.
fn leave_detail(app: &mut App) {
    app.subject = None;
    app.detail = None;
    app.view = View::ChildrenList;
}
