//! # TitleBar Component
//!
//! Top status line: app name, the current screen and the last one-shot
//! notice ("Child has been added.", "Child not found." ...).
//!
//! Purely presentational. All three values are props filled in from `App`
//! each frame:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(
//!     app.label(Label::Title),
//!     app.label(app.view.title()),
//!     app.notice.map(|n| app.label(n)),
//! );
//! title_bar.render(frame, title_area);
//! ```
//!
//! On the menu the screen name equals the app name, so it is not repeated.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub app_name: &'a str,
    pub view_name: &'a str,
    pub notice: Option<&'a str>,
}

impl<'a> TitleBar<'a> {
    pub fn new(app_name: &'a str, view_name: &'a str, notice: Option<&'a str>) -> Self {
        Self {
            app_name,
            view_name,
            notice,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.app_name,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if self.view_name != self.app_name {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(self.view_name));
        }
        if let Some(notice) = self.notice {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(notice, Style::default().fg(Color::Yellow)));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
