//! Footer component - brand tagline and key hints

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use solterra_core::i18n::Translator;

use crate::tui::theme::Theme;

/// Render the page footer: tagline plus the key hints line
pub fn render_footer(f: &mut Frame, area: Rect, theme: &Theme, translator: &Translator, brand: &str) {
    let lines = vec![
        Line::from(Span::styled(
            brand.to_string(),
            Style::default().fg(theme.heading),
        )),
        Line::from(Span::styled(
            translator.translate("Explore the world with us").to_string(),
            Style::default().fg(theme.dim),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("q", Style::default().fg(theme.accent)),
            Span::styled(" quit  ", Style::default().fg(theme.dim)),
            Span::styled("l", Style::default().fg(theme.accent)),
            Span::styled(
                format!(" {}  ", translator.translate("Language").to_lowercase()),
                Style::default().fg(theme.dim),
            ),
            Span::styled("↑↓", Style::default().fg(theme.accent)),
            Span::styled(" scroll", Style::default().fg(theme.dim)),
        ]),
    ];

    let footer = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(footer, area);
}
