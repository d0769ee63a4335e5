//! # Child List Component
//!
//! Table of all children, one row per record: id, full name and birth date.
//! Enter opens the highlighted child, `a` opens the add form, Esc goes back
//! to the menu.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ChildListState` lives in `TuiState` and only tracks the highlight
//! - `ChildList` is created each frame with the loaded children as props

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Padding, Paragraph};

use crate::core::i18n::{Label, Language};
use crate::core::state::format_date;
use crate::store::{Child, ChildId};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildListEvent {
    Select(ChildId),
    Add,
    Back,
}

#[derive(Default)]
pub struct ChildListState {
    pub list_state: ListState,
}

impl ChildListState {
    /// Keep the highlight on a valid row after the list was reloaded.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
        } else {
            let selected = self.list_state.selected().unwrap_or(0).min(len - 1);
            self.list_state.select(Some(selected));
        }
    }

    /// Handle a key event against the currently loaded children.
    pub fn handle_event(&mut self, event: &TuiEvent, children: &[Child]) -> Option<ChildListEvent> {
        self.clamp(children.len());
        match event {
            TuiEvent::Escape => Some(ChildListEvent::Back),
            TuiEvent::InputChar('a') | TuiEvent::InputChar('A') => Some(ChildListEvent::Add),
            TuiEvent::CursorUp => {
                if let Some(selected) = self.list_state.selected() {
                    self.list_state.select(Some(selected.saturating_sub(1)));
                }
                None
            }
            TuiEvent::CursorDown => {
                if let Some(selected) = self.list_state.selected() {
                    self.list_state
                        .select(Some((selected + 1).min(children.len() - 1)));
                }
                None
            }
            TuiEvent::Submit => self
                .list_state
                .selected()
                .and_then(|i| children.get(i))
                .map(|child| ChildListEvent::Select(child.id)),
            _ => None,
        }
    }
}

/// Transient render wrapper for the children table.
pub struct ChildList<'a> {
    state: &'a mut ChildListState,
    children: &'a [Child],
    language: Language,
}

impl<'a> ChildList<'a> {
    pub fn new(state: &'a mut ChildListState, children: &'a [Child], language: Language) -> Self {
        Self {
            state,
            children,
            language,
        }
    }
}

impl Component for ChildList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Label::ListChildren.text(self.language))
            .title_bottom(Line::from(Label::HelpList.text(self.language)).centered())
            .padding(Padding::horizontal(1));

        if self.children.is_empty() {
            let empty = Paragraph::new(Label::NoChildren.text(self.language))
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        self.state.clamp(self.children.len());

        let id_width = self
            .children
            .iter()
            .map(|c| c.id.to_string().len())
            .max()
            .unwrap_or(1);

        let items: Vec<ListItem> = self
            .children
            .iter()
            .map(|child| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>width$}  ", child.id, width = id_width),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(child.full_name()),
                    Span::raw("  "),
                    Span::styled(
                        format_date(child.birth_date),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
