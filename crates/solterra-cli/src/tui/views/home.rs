//! Home view - hero, takeover showcase, tours and stories sections
//!
//! The home page is a virtual vertical document. While the scroll mode is
//! vertical the body shows whichever section the scroll offset has reached;
//! once the showcase takes over, the body renders the active panel and the
//! horizontally scrolling gallery track instead.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use solterra_core::content::{featured, Blog, Tour};

use crate::tui::app::App;
use crate::tui::state::HomeSurface;
use crate::tui::takeover::{is_exhausted, Panel, ScrollMode};
use crate::tui::views::render_section_status;

pub fn render_home(f: &mut Frame, area: Rect, app: &App) {
    if app.takeover.state.mode == ScrollMode::Horizontal {
        render_showcase(f, area, app);
        return;
    }

    let layout = &app.home_layout;
    let offset = app.home_scroll.offset;
    if offset < layout.section_top {
        render_hero(f, area, app);
    } else if offset < layout.section_end {
        render_showcase(f, area, app);
    } else {
        render_following(f, area, app);
    }
}

fn render_hero(f: &mut Frame, area: Rect, app: &App) {
    let translator = &app.translator;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            app.config.brand_title.clone(),
            Style::default()
                .fg(app.theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            translator.translate("Explore the world with us").to_string(),
            Style::default().fg(app.theme.highlight),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("▼ {}", translator.translate("Scroll to explore")),
            Style::default().fg(app.theme.dim),
        )),
    ];
    let hero = Paragraph::new(lines).alignment(Alignment::Center);
    let vertical_pad = area.height.saturating_sub(6) / 2;
    let centered = Rect {
        y: area.y + vertical_pad,
        height: area.height.saturating_sub(vertical_pad),
        ..area
    };
    f.render_widget(hero, centered);
}

/// The takeover showcase: an intro panel and the gallery panel, arranged as
/// a horizontal row the panel index slides across
fn render_showcase(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(
        Paragraph::new("").style(Style::default().bg(app.theme.panel_bg)),
        area,
    );

    match app.takeover.state.panel {
        Panel::Intro => render_intro_panel(f, area, app),
        Panel::Gallery => render_gallery_panel(f, area, app),
    }
}

fn render_intro_panel(f: &mut Frame, area: Rect, app: &App) {
    let translator = &app.translator;
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            translator.translate("Discover our journeys").to_string(),
            Style::default()
                .fg(app.theme.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("▼ {}", translator.translate("Scroll to explore")),
            Style::default().fg(app.theme.dim),
        )),
    ];
    let panel = Paragraph::new(lines).alignment(Alignment::Center);
    let vertical_pad = area.height.saturating_sub(4) / 2;
    let centered = Rect {
        y: area.y + vertical_pad,
        height: area.height.saturating_sub(vertical_pad),
        ..area
    };
    f.render_widget(panel, centered);
}

fn render_gallery_panel(f: &mut Frame, area: Rect, app: &App) {
    let header = Rect { height: 1, ..area };
    if !render_section_status(f, header, &app.theme, &app.translator, &app.gallery) {
        return;
    }
    let Some(items) = app.gallery.value() else {
        return;
    };

    let layout = &app.home_layout;
    let card_width = (layout.track_width / (items.len().max(1)) as f32).max(1.0);
    let offset = app.takeover.state.gallery_offset;

    // First card whose right edge is still inside the viewport
    let first = (offset / card_width) as usize;
    let mut x = area.x as f32 - (offset - first as f32 * card_width);

    for item in items.iter().skip(first) {
        if x >= (area.x + area.width) as f32 {
            break;
        }
        let clipped_left = x.max(area.x as f32);
        let visible = (x + card_width - 1.0 - clipped_left).max(0.0);
        let card = Rect {
            x: clipped_left as u16,
            y: area.y + 2,
            width: (visible as u16).min(area.x + area.width - clipped_left as u16),
            height: area.height.saturating_sub(4),
        };
        if card.width > 2 && card.height > 2 {
            render_gallery_card(f, card, app, &item.title, item.caption.as_deref(), item.featured);
        }
        x += card_width;
    }

    let mut scroll = app.home_scroll.clone();
    let surface = HomeSurface {
        layout: &app.home_layout,
        scroll: &mut scroll,
    };
    if is_exhausted(&app.takeover.state, &surface) {
        let hint = Paragraph::new(Line::from(Span::styled(
            format!("{} ▼", app.translator.translate("End of gallery")),
            Style::default().fg(app.theme.dim),
        )))
        .alignment(Alignment::Right);
        let hint_area = Rect {
            y: area.y + area.height.saturating_sub(1),
            height: 1,
            ..area
        };
        f.render_widget(hint, hint_area);
    }
}

fn render_gallery_card(
    f: &mut Frame,
    area: Rect,
    app: &App,
    title: &str,
    caption: Option<&str>,
    featured: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(app.theme.fg).add_modifier(Modifier::BOLD),
    ))];
    if let Some(caption) = caption {
        lines.push(Line::from(Span::styled(
            caption.to_string(),
            Style::default().fg(app.theme.dim),
        )));
    }
    if featured {
        lines.push(Line::from(Span::styled(
            format!("★ {}", app.translator.translate("Featured")),
            Style::default().fg(app.theme.highlight),
        )));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

/// Tours and stories below the showcase, filtered to featured entries
fn render_following(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_tours_section(f, chunks[0], app);
    render_stories_section(f, chunks[1], app);
}

fn render_tours_section(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Line::from(Span::styled(
        app.translator.translate("Featured Tours").to_string(),
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
    if !render_section_status(f, body, &app.theme, &app.translator, &app.tours) {
        return;
    }
    let Some(tours) = app.tours.value() else { return };

    let mut lines = Vec::new();
    for tour in featured(tours) {
        lines.extend(tour_lines(tour, app));
    }
    f.render_widget(Paragraph::new(lines), body);
}

fn tour_lines(tour: &Tour, app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                tour.title.clone(),
                Style::default().fg(app.theme.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", tour.region),
                Style::default().fg(app.theme.dim),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "  ${:.0} · {} {}",
                tour.price_usd,
                tour.duration_days,
                app.translator.translate("days")
            ),
            Style::default().fg(app.theme.accent),
        )),
        Line::default(),
    ]
}

fn render_stories_section(f: &mut Frame, area: Rect, app: &App) {
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

    let mut lines = Vec::new();
    for blog in featured(blogs) {
        lines.extend(story_lines(blog, app));
    }
    f.render_widget(Paragraph::new(lines), body);
}

fn story_lines(blog: &Blog, app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            blog.title.clone(),
            Style::default().fg(app.theme.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "  {} {} · {}",
                app.translator.translate("By"),
                blog.author,
                blog.published_at.format("%Y-%m-%d")
            ),
            Style::default().fg(app.theme.dim),
        )),
        Line::default(),
    ]
}
