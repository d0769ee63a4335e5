//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The
//! console launcher drives the same store without any of it.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event or a terminal resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::AppError;
use crate::core::action::Action;
use crate::core::controller::{Controller, Flow};
use crate::core::i18n::Language;
use crate::core::state::{App, View};
use crate::store::RecordStore;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ChildDetailState, ChildFormState, ChildListEvent, ChildListState, DetailEvent, FormEvent,
    MenuEvent, MenuState, SettingsEvent, settings,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub menu: MenuState,
    pub child_list: ChildListState,
    /// Present only while the add form is showing
    pub child_form: Option<ChildFormState>,
    pub child_detail: ChildDetailState,
    /// View seen by the last `sync`, to detect screen changes
    last_view: View,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut tui = Self {
            menu: MenuState::default(),
            child_list: ChildListState::default(),
            child_form: None,
            child_detail: ChildDetailState::default(),
            last_view: View::Menu,
        };
        tui.enter(app);
        tui
    }

    /// Reset per-screen state after `app.view` changed.
    pub fn sync(&mut self, app: &App) {
        if app.view != self.last_view {
            debug!("View changed: {:?} -> {:?}", self.last_view, app.view);
            self.enter(app);
        }
    }

    fn enter(&mut self, app: &App) {
        self.last_view = app.view;
        self.child_form = match app.view {
            View::AddChildForm => Some(ChildFormState::new(&app.form, app.language)),
            _ => None,
        };
        if app.view == View::ChildDetail {
            self.child_detail = ChildDetailState::default();
        }
    }

    /// Translate a key event into a core action for the current screen.
    pub fn route_event(&mut self, app: &App, event: &TuiEvent) -> Option<Action> {
        match app.view {
            View::Menu => match self.menu.handle_event(event)? {
                MenuEvent::OpenChildren => Some(Action::OpenChildren),
                MenuEvent::OpenSettings => Some(Action::OpenSettings),
                MenuEvent::Quit => Some(Action::Quit),
            },
            View::ChildrenList => match self.child_list.handle_event(event, &app.children)? {
                ChildListEvent::Select(id) => Some(Action::SelectChild(id)),
                ChildListEvent::Add => Some(Action::OpenAddForm),
                ChildListEvent::Back => Some(Action::Back),
            },
            View::AddChildForm => match self.child_form.as_mut()?.handle_event(event)? {
                FormEvent::Save(form) => Some(Action::SaveChild(form)),
                FormEvent::Cancel => Some(Action::CancelForm),
            },
            View::Settings => match settings::handle_event(event)? {
                SettingsEvent::ToggleLanguage => Some(Action::ToggleLanguage),
                SettingsEvent::Back => Some(Action::Back),
            },
            View::ChildDetail => {
                let child = app.detail.as_ref()?;
                match self.child_detail.handle_event(event, child, app.language)? {
                    DetailEvent::SaveNotes(notes) => Some(Action::SaveNotes(notes)),
                    DetailEvent::Delete => Some(Action::DeleteSubject),
                    DetailEvent::Back => Some(Action::Back),
                }
            }
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Hide
        );
    }
}

/// Run the full-screen interface until the user quits.
///
/// Storage failures end the session and are returned after the terminal has
/// been restored.
pub fn run<S: RecordStore>(store: S, language: Language) -> Result<(), AppError> {
    let mut controller = Controller::new(store, language);
    let mut tui = TuiState::new(controller.app());

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut controller, &mut tui);

    drop(terminal_mode_guard);
    ratatui::restore();
    result
}

fn event_loop<S: RecordStore>(
    terminal: &mut DefaultTerminal,
    controller: &mut Controller<S>,
    tui: &mut TuiState,
) -> Result<(), AppError> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, controller.app(), tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything pending before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let action = match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => continue,
                // Ctrl+C quits from any view
                TuiEvent::ForceQuit => Some(Action::Quit),
                _ => tui.route_event(controller.app(), &event),
            };
            let Some(action) = action else {
                continue;
            };

            if controller.dispatch(action)? == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
            tui.sync(controller.app());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::i18n::Label;
    use crate::store::SqliteStore;
    use crate::test_support::test_controller;

    /// Feed events through routing and the controller like the event loop does.
    fn press(
        controller: &mut Controller<SqliteStore>,
        tui: &mut TuiState,
        events: &[TuiEvent],
    ) -> Flow {
        for event in events {
            if let Some(action) = tui.route_event(controller.app(), event) {
                if controller.dispatch(action).unwrap() == Flow::Quit {
                    return Flow::Quit;
                }
                tui.sync(controller.app());
            }
        }
        Flow::Continue
    }

    fn chars(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    #[test]
    fn test_menu_routes_to_list() {
        let app = App::new(Language::En);
        let mut tui = TuiState::new(&app);
        assert_eq!(
            tui.route_event(&app, &TuiEvent::Submit),
            Some(Action::OpenChildren)
        );
    }

    #[test]
    fn test_form_state_exists_only_on_form() {
        let mut app = App::new(Language::En);
        let mut tui = TuiState::new(&app);
        assert!(tui.child_form.is_none());

        app.view = View::AddChildForm;
        tui.sync(&app);
        assert!(tui.child_form.is_some());

        app.view = View::ChildrenList;
        tui.sync(&app);
        assert!(tui.child_form.is_none());
    }

    #[test]
    fn test_detail_without_record_ignores_keys() {
        let mut app = App::new(Language::En);
        app.view = View::ChildDetail;
        let mut tui = TuiState::new(&app);
        assert_eq!(tui.route_event(&app, &TuiEvent::InputChar('d')), None);
    }

    #[test]
    fn test_add_open_edit_delete_by_keyboard() {
        let mut controller = test_controller();
        let mut tui = TuiState::new(controller.app());

        // Menu → list → add form
        press(&mut controller, &mut tui, &[TuiEvent::Submit, TuiEvent::InputChar('a')]);
        assert_eq!(controller.app().view, View::AddChildForm);

        let mut keys = chars("Jan");
        keys.push(TuiEvent::NextField);
        keys.extend(chars("Kowalski"));
        keys.push(TuiEvent::Submit);
        press(&mut controller, &mut tui, &keys);
        assert_eq!(controller.app().view, View::ChildrenList);
        assert_eq!(controller.app().notice, Some(Label::ChildAdded));
        assert_eq!(controller.app().children.len(), 1);

        // Open, edit notes
        press(&mut controller, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(controller.app().view, View::ChildDetail);
        let mut keys = vec![TuiEvent::InputChar('e')];
        keys.extend(chars("lisps"));
        keys.push(TuiEvent::Submit);
        press(&mut controller, &mut tui, &keys);
        assert_eq!(controller.app().detail_notes(), "lisps");

        // Delete with confirmation
        press(
            &mut controller,
            &mut tui,
            &[TuiEvent::InputChar('d'), TuiEvent::InputChar('y')],
        );
        assert_eq!(controller.app().view, View::ChildrenList);
        assert_eq!(controller.app().notice, Some(Label::DeleteSuccess));
        assert!(controller.app().children.is_empty());
    }

    #[test]
    fn test_invalid_form_keeps_typed_text() {
        let mut controller = test_controller();
        let mut tui = TuiState::new(controller.app());
        press(&mut controller, &mut tui, &[TuiEvent::Submit, TuiEvent::InputChar('a')]);

        let mut keys = chars("Jan");
        keys.push(TuiEvent::Submit);
        press(&mut controller, &mut tui, &keys);

        assert_eq!(controller.app().view, View::AddChildForm);
        assert!(controller.app().form_error.is_some());
        let form = tui.child_form.as_ref().unwrap().to_form();
        assert_eq!(form.first_name, "Jan");
    }

    #[test]
    fn test_declined_delete_keeps_child() {
        let mut controller = test_controller();
        let mut tui = TuiState::new(controller.app());
        press(&mut controller, &mut tui, &[TuiEvent::Submit, TuiEvent::InputChar('a')]);
        let mut keys = chars("Ola");
        keys.push(TuiEvent::NextField);
        keys.extend(chars("Nowak"));
        keys.push(TuiEvent::Submit);
        keys.push(TuiEvent::Submit);
        keys.push(TuiEvent::InputChar('d'));
        keys.push(TuiEvent::InputChar('n'));
        press(&mut controller, &mut tui, &keys);

        assert_eq!(controller.app().view, View::ChildDetail);
        assert_eq!(controller.store().list_children().unwrap().len(), 1);
    }

    #[test]
    fn test_settings_toggle_and_quit_from_menu() {
        let mut controller = test_controller();
        let mut tui = TuiState::new(controller.app());

        press(
            &mut controller,
            &mut tui,
            &[TuiEvent::CursorDown, TuiEvent::Submit, TuiEvent::Submit],
        );
        assert_eq!(controller.app().language, Language::Pl);

        let flow = press(
            &mut controller,
            &mut tui,
            &[TuiEvent::Escape, TuiEvent::CursorDown, TuiEvent::Submit],
        );
        assert_eq!(flow, Flow::Quit);
    }
}
