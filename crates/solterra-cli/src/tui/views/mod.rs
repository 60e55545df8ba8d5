//! View rendering
//!
//! One module per page-style view. Each renders into the body area between
//! the nav bar and the footer; the dispatcher in [`render`] picks the view.

mod blog_detail;
mod blogs;
mod gallery;
mod home;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, View};
use crate::tui::components::{render_footer, render_nav_bar};
use crate::tui::state::SectionData;
use crate::tui::theme::Theme;

/// Render the whole frame: nav bar, active view body, footer
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(
        Paragraph::new("").style(Style::default().bg(app.theme.bg)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(area);

    render_nav_bar(
        f,
        chunks[0],
        &app.theme,
        &app.translator,
        app.view,
        app.auth.is_logged_in(),
        &app.config.brand_title,
    );

    app.body_area = chunks[1];
    match app.view {
        View::Home => home::render_home(f, chunks[1], app),
        View::Blogs => blogs::render_blogs(f, chunks[1], app),
        View::BlogDetail => blog_detail::render_blog_detail(f, chunks[1], app),
        View::Gallery => gallery::render_gallery(f, chunks[1], app),
    }

    render_footer(
        f,
        chunks[2],
        &app.theme,
        &app.translator,
        &app.config.brand_title,
    );
}

/// Loading / error placeholder for a section that has no data yet.
/// Returns true when the caller should render its loaded content instead.
pub(super) fn render_section_status<T>(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    translator: &solterra_core::i18n::Translator,
    section: &SectionData<T>,
) -> bool {
    let line = match section {
        SectionData::Loaded(_) => return true,
        SectionData::Idle | SectionData::Loading => Line::from(Span::styled(
            translator.translate("Loading...").to_string(),
            Style::default().fg(theme.dim),
        )),
        SectionData::Failed { retryable, .. } => {
            let mut spans = vec![Span::styled(
                translator.translate("Unable to load").to_string(),
                Style::default().fg(theme.error),
            )];
            if *retryable {
                spans.push(Span::styled(
                    format!("  [r] {}", translator.translate("Retry")),
                    Style::default().fg(theme.accent),
                ));
            }
            Line::from(spans)
        }
    };
    f.render_widget(Paragraph::new(line), area);
    false
}
