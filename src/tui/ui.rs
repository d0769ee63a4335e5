use crate::core::i18n::Label;
use crate::core::state::{App, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ChildDetail, ChildFormView, ChildList, Menu, Settings, TitleBar,
};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

/// Width of the menu and settings boxes.
const NARROW_PERCENT: u16 = 50;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let notice = app.notice.map(|notice| app.label(notice));
    TitleBar::new(app.label(Label::Title), app.label(app.view.title()), notice)
        .render(frame, title_area);

    match app.view {
        View::Menu => {
            let area = centered_rect(NARROW_PERCENT, 50, main_area);
            Menu::new(&mut tui.menu, app.language).render(frame, area);
            draw_help(frame, main_area, app.label(Label::HelpMenu));
        }
        View::ChildrenList => {
            ChildList::new(&mut tui.child_list, &app.children, app.language)
                .render(frame, main_area);
        }
        View::AddChildForm => {
            if let Some(form) = tui.child_form.as_mut() {
                ChildFormView::new(form, app.form_error.as_ref(), app.language)
                    .render(frame, main_area);
            }
        }
        View::Settings => {
            let area = centered_rect(NARROW_PERCENT, 30, main_area);
            Settings {
                language: app.language,
            }
            .render(frame, area);
        }
        View::ChildDetail => match &app.detail {
            Some(child) => {
                ChildDetail::new(&mut tui.child_detail, child, app.language)
                    .render(frame, main_area);
            }
            None => draw_help(frame, main_area, app.label(Label::ChildMissing)),
        },
    }
}

/// One dim line at the bottom of `area`.
fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    if area.height == 0 {
        return;
    }
    let line_area = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(help, line_area);
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
