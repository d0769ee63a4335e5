//! # Settings Component
//!
//! Single setting for now: the interface language. Enter or Space flips it,
//! Esc returns to the menu. Stateless; the language comes in as a prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::i18n::{Label, Language};
use crate::tui::component::Component;
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEvent {
    ToggleLanguage,
    Back,
}

pub fn handle_event(event: &TuiEvent) -> Option<SettingsEvent> {
    match event {
        TuiEvent::Submit | TuiEvent::InputChar(' ') => Some(SettingsEvent::ToggleLanguage),
        TuiEvent::Escape => Some(SettingsEvent::Back),
        _ => None,
    }
}

pub struct Settings {
    pub language: Language,
}

impl Component for Settings {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Label::UserSettings.text(self.language))
            .title_bottom(Line::from(Label::HelpSettings.text(self.language)).centered())
            .padding(Padding::uniform(1));

        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", Label::LangLabel.text(self.language)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                self.language.native_name(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", Label::LangToggle.text(self.language)),
                Style::default().fg(Color::Cyan),
            ),
        ]);

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
