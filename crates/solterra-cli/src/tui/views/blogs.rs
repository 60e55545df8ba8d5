//! Stories view - published blog list with a selection cursor

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::views::render_section_status;

pub fn render_blogs(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(Span::styled(
        app.translator.translate("Latest Stories").to_string(),
        Style::default()
            .fg(app.theme.heading)
            .add_modifier(Modifier::BOLD),
    )));
    let header = Rect { height: 1, ..area };
    f.render_widget(title, header);

    let body = Rect {
        y: area.y + 2,
        height: area.height.saturating_sub(2),
        ..area
    };
    if !render_section_status(f, body, &app.theme, &app.translator, &app.blogs) {
        return;
    }
    let Some(blogs) = app.blogs.value() else { return };

    // Keep the cursor row in view: three lines per entry
    let rows_per_entry = 3usize;
    let visible = (body.height as usize / rows_per_entry).max(1);
    let first = app.blog_cursor.saturating_sub(visible.saturating_sub(1));

    let mut lines = Vec::new();
    for (idx, blog) in blogs.iter().enumerate().skip(first).take(visible) {
        let selected = idx == app.blog_cursor;
        let marker = if selected { "▸ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.fg)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(app.theme.accent)),
            Span::styled(blog.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "    {} {} · {} · {}",
                app.translator.translate("By"),
                blog.author,
                blog.published_at.format("%Y-%m-%d"),
                app.translator.translate("Read more"),
            ),
            Style::default().fg(app.theme.dim),
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", blog.excerpt),
            Style::default().fg(app.theme.dim),
        )));
    }
    f.render_widget(Paragraph::new(lines), body);
}
