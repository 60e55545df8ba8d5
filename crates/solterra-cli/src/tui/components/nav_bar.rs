//! Navigation bar component - top bar with brand, view links, language

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use solterra_core::i18n::{Language, Translator};

use crate::tui::app::View;
use crate::tui::theme::Theme;

/// Render the navigation bar at the top of the screen
pub fn render_nav_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    translator: &Translator,
    active: View,
    logged_in: bool,
    brand: &str,
) {
    let bg = Paragraph::new("").style(Style::default().bg(theme.nav_bg));
    f.render_widget(bg, area);

    let mut left_spans = vec![
        Span::raw(" "),
        Span::styled(
            brand.to_string(),
            Style::default()
                .fg(theme.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    let mut left_width = 4 + brand.width();

    let mut links = vec![
        (translator.translate("Home"), View::Home),
        (translator.translate("Stories"), View::Blogs),
        (translator.translate("Gallery"), View::Gallery),
    ];
    // Dashboard is display-only; it marks the logged-in state
    if logged_in {
        links.push((translator.translate("Dashboard"), View::Home));
    }

    for (idx, (label, view)) in links.iter().enumerate() {
        let style = if *view == active && !(logged_in && idx == links.len() - 1) {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.fg)
        };
        left_spans.push(Span::styled(label.to_string(), style));
        left_spans.push(Span::raw("  "));
        left_width += label.width() + 2;
    }

    // Language toggle pinned to the right edge
    let lang_label = format!(
        "{}: {} [l]",
        translator.translate("Language"),
        match translator.language() {
            Language::En => "EN",
            Language::Es => "ES",
        }
    );
    let pad = (area.width as usize)
        .saturating_sub(left_width + lang_label.width() + 1);
    left_spans.push(Span::raw(" ".repeat(pad)));
    left_spans.push(Span::styled(lang_label, Style::default().fg(theme.dim)));

    let line = Paragraph::new(Line::from(left_spans));
    f.render_widget(line, area);
}
