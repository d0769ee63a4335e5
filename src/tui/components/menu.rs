//! # Main Menu Component
//!
//! Start screen with three entries: the children list, settings and quit.
//!
//! Persistent state + transient wrapper:
//! - `MenuState` lives in `TuiState` so the highlight survives view changes
//! - `Menu` is created each frame with borrowed state and the active language

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding};

use crate::core::i18n::{Label, Language};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Entries in display order.
const ENTRIES: [MenuEvent; 3] = [MenuEvent::OpenChildren, MenuEvent::OpenSettings, MenuEvent::Quit];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    OpenChildren,
    OpenSettings,
    Quit,
}

impl MenuEvent {
    fn label(self) -> Label {
        match self {
            MenuEvent::OpenChildren => Label::ListChildren,
            MenuEvent::OpenSettings => Label::UserSettings,
            MenuEvent::Quit => Label::Quit,
        }
    }
}

pub struct MenuState {
    pub list_state: ListState,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }
}

impl MenuState {
    pub fn selected(&self) -> usize {
        self.list_state.selected().unwrap_or(0)
    }
}

impl EventHandler for MenuState {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.list_state.select(Some(self.selected().saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                self.list_state
                    .select(Some((self.selected() + 1).min(ENTRIES.len() - 1)));
                None
            }
            TuiEvent::Submit => ENTRIES.get(self.selected()).copied(),
            _ => None,
        }
    }
}

/// Transient render wrapper for the menu.
pub struct Menu<'a> {
    state: &'a mut MenuState,
    language: Language,
}

impl<'a> Menu<'a> {
    pub fn new(state: &'a mut MenuState, language: Language) -> Self {
        Self { state, language }
    }
}

impl Component for Menu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = ENTRIES
            .iter()
            .map(|entry| ListItem::new(Line::from(entry.label().text(self.language)).centered()))
            .collect();

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Label::Title.text(self.language))
            .title_alignment(Alignment::Center)
            .padding(Padding::vertical(1));

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
