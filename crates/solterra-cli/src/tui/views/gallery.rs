//! Gallery view - full list of active gallery items

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::views::render_section_status;

pub fn render_gallery(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            app.translator.translate("Gallery").to_string(),
            Style::default()
                .fg(app.theme.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", app.translator.translate("Moments from the road")),
            Style::default().fg(app.theme.dim),
        ),
    ]));
    let header = Rect { height: 1, ..area };
    f.render_widget(title, header);

    let body = Rect {
        y: area.y + 2,
        height: area.height.saturating_sub(2),
        ..area
    };
    if !render_section_status(f, body, &app.theme, &app.translator, &app.gallery) {
        return;
    }
    let Some(items) = app.gallery.value() else {
        return;
    };

    let mut lines = Vec::new();
    for item in items {
        let mut spans = vec![Span::styled(
            item.title.clone(),
            Style::default().fg(app.theme.fg).add_modifier(Modifier::BOLD),
        )];
        if item.featured {
            spans.push(Span::styled(
                format!("  ★ {}", app.translator.translate("Featured")),
                Style::default().fg(app.theme.highlight),
            ));
        }
        lines.push(Line::from(spans));
        if let Some(caption) = &item.caption {
            lines.push(Line::from(Span::styled(
                format!("  {}", caption),
                Style::default().fg(app.theme.dim),
            )));
        }
        lines.push(Line::default());
    }

    let scroll = app.view_scroll.offset as u16;
    f.render_widget(Paragraph::new(lines).scroll((scroll, 0)), body);
}
