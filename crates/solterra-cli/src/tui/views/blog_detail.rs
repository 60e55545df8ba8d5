//! Story detail view - full blog body, wrapped and scrollable

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::views::render_section_status;

pub fn render_blog_detail(f: &mut Frame, area: Rect, app: &App) {
    if !render_section_status(f, area, &app.theme, &app.translator, &app.blog_detail) {
        return;
    }
    let Some(blog) = app.blog_detail.value() else {
        return;
    };

    let width = (area.width.saturating_sub(4) as usize).max(20);
    let mut lines = vec![
        Line::from(Span::styled(
            blog.title.clone(),
            Style::default()
                .fg(app.theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{} {} · {}",
                app.translator.translate("By"),
                blog.author,
                blog.published_at.format("%Y-%m-%d")
            ),
            Style::default().fg(app.theme.dim),
        )),
        Line::default(),
    ];
    for wrapped in textwrap::wrap(&blog.body, width) {
        lines.push(Line::from(Span::styled(
            wrapped.into_owned(),
            Style::default().fg(app.theme.fg),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("← {} [esc]", app.translator.translate("Back")),
        Style::default().fg(app.theme.accent),
    )));

    let scroll = app.view_scroll.offset as u16;
    let body = Paragraph::new(lines).scroll((scroll, 0));
    f.render_widget(body, area);
}
