//! Main TUI application
//!
//! Owns the views, the content sections, and the scroll-takeover
//! choreography. A single async event loop stamps every input event with
//! one clock reading and feeds the takeover controller before falling back
//! to native page scrolling.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;
use tracing::warn;

use solterra_core::constants;
use solterra_core::content::{Blog, ContentClient, GalleryItem, Tour};
use solterra_core::i18n::{Language, Translator};
use solterra_core::{AuthContext, Preferences, SiteConfig};

use super::fetch::{ContentEvent, ContentFetcher};
use super::handlers;
use super::state::{HomeLayout, HomeSurface, PageScroll, SectionData};
use super::takeover::{Clock, SystemClock, TakeoverController};
use super::theme::Theme;
use super::views;

/// Page-style views the nav bar switches between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Blogs,
    BlogDetail,
    Gallery,
}

impl View {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "home" => Some(View::Home),
            "blogs" | "stories" => Some(View::Blogs),
            "gallery" => Some(View::Gallery),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Blogs | View::BlogDetail => "blogs",
            View::Gallery => "gallery",
        }
    }
}

pub struct App {
    pub theme: Theme,
    pub config: SiteConfig,
    pub translator: Translator,
    pub auth: AuthContext,
    pub preferences: Preferences,
    pub view: View,
    pub should_quit: bool,

    pub tours: SectionData<Vec<Tour>>,
    pub blogs: SectionData<Vec<Blog>>,
    pub gallery: SectionData<Vec<GalleryItem>>,
    pub blog_detail: SectionData<Blog>,
    /// Id of the blog shown in the detail view, kept for language refetch
    pub blog_detail_id: Option<String>,
    pub blog_cursor: usize,

    pub takeover: TakeoverController,
    pub home_scroll: PageScroll,
    pub home_layout: HomeLayout,
    /// Scroll for the list views (blogs, gallery, blog detail)
    pub view_scroll: PageScroll,
    /// Body area from the last render, for hit testing and page sizing
    pub body_area: Rect,

    fetcher: ContentFetcher,
    content_rx: mpsc::UnboundedReceiver<ContentEvent>,
    clock: SystemClock,
}

impl App {
    pub fn new(lang_override: Option<Language>, initial_view: Option<&str>) -> Self {
        let config = SiteConfig::load();
        let preferences = Preferences::load();
        let language = lang_override.unwrap_or(preferences.language);
        let auth = AuthContext::load();

        let client = Arc::new(ContentClient::new(config.api_base.clone()));
        let (fetcher, content_rx) = ContentFetcher::new(client);

        let view = initial_view
            .and_then(View::from_name)
            .or_else(|| preferences.last_view.as_deref().and_then(View::from_name))
            .unwrap_or(View::Home);

        Self {
            theme: Theme::solterra(),
            config,
            translator: Translator::new(language),
            auth,
            preferences,
            view,
            should_quit: false,
            tours: SectionData::Idle,
            blogs: SectionData::Idle,
            gallery: SectionData::Idle,
            blog_detail: SectionData::Idle,
            blog_detail_id: None,
            blog_cursor: 0,
            takeover: TakeoverController::new(),
            home_scroll: PageScroll::new(),
            home_layout: HomeLayout::compute(Rect::new(0, 0, 80, 24), 0, 0, 0),
            view_scroll: PageScroll::new(),
            body_area: Rect::default(),
            fetcher,
            content_rx,
            clock: SystemClock,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        self.mount_view();

        loop {
            self.poll_content();

            let now = self.clock.now();
            let mut surface = HomeSurface {
                layout: &self.home_layout,
                scroll: &mut self.home_scroll,
            };
            self.takeover.tick(&mut surface, now);

            terminal.draw(|f| views::render(f, self))?;
            self.update_home_layout();

            // Async event handling - doesn't block the runtime when no events
            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) => handlers::handle_key(self, key),
                            Event::Mouse(mouse) => handlers::handle_mouse(self, mouse),
                            Event::Resize(_, _) => self.update_home_layout(),
                            _ => {}
                        }
                    }
                }
                _ = tokio::time::sleep(constants::ui::TICK_INTERVAL) => {}
            }

            if self.should_quit {
                self.save_preferences();
                break;
            }
        }
        Ok(())
    }

    /// Drain completed fetches into the section states
    fn poll_content(&mut self) {
        while let Ok(event) = self.content_rx.try_recv() {
            match event {
                ContentEvent::Tours(result) => self.tours.apply(result),
                ContentEvent::Blogs(result) => {
                    self.blogs.apply(result);
                    let len = self.blogs.value().map(Vec::len).unwrap_or(0);
                    self.blog_cursor = self.blog_cursor.min(len.saturating_sub(1));
                }
                ContentEvent::Gallery(result) => {
                    self.gallery.apply(result);
                    if self.view == View::Gallery {
                        let len = self.gallery.value().map(Vec::len).unwrap_or(0);
                        self.view_scroll.update_max_offset(
                            (len * 3 + 2) as f32,
                            self.body_area.height as f32,
                        );
                    }
                }
                ContentEvent::BlogDetail(result) => {
                    self.blog_detail.apply(result);
                    if let Some(blog) = self.blog_detail.value() {
                        let width = (self.body_area.width.saturating_sub(4) as usize).max(20);
                        let lines = textwrap::wrap(&blog.body, width).len() + 6;
                        self.view_scroll
                            .update_max_offset(lines as f32, self.body_area.height as f32);
                    }
                }
            }
        }
    }

    /// Recompute the home page geometry from the current body area and
    /// loaded content
    fn update_home_layout(&mut self) {
        let gallery_len = self.gallery.value().map(Vec::len).unwrap_or(0);
        let tours_len = self.tours.value().map(Vec::len).unwrap_or(0);
        let blogs_len = self.blogs.value().map(Vec::len).unwrap_or(0);
        self.home_layout = HomeLayout::compute(self.body_area, gallery_len, tours_len, blogs_len);
        self.home_scroll.update_max_offset(
            self.home_layout.total_height,
            self.home_layout.viewport_height,
        );
    }

    /// Switch views: cancel the old view's fetches, reset its scroll state,
    /// and kick off the new view's loads
    pub fn navigate(&mut self, view: View) {
        if view == self.view {
            return;
        }
        self.fetcher.cancel_view();
        self.view = view;
        self.view_scroll = PageScroll::new();
        if view != View::BlogDetail {
            self.blog_detail = SectionData::Idle;
            self.blog_detail_id = None;
        }
        self.mount_view();
    }

    /// Start the fetches the freshly mounted view needs. Home also gets a
    /// fresh takeover controller; its state never survives a remount.
    fn mount_view(&mut self) {
        match self.view {
            View::Home => {
                self.takeover = TakeoverController::new();
                self.home_scroll = PageScroll::new();
                self.tours.begin_loading();
                self.blogs.begin_loading();
                self.gallery.begin_loading();
                self.fetcher.fetch_tours();
                self.fetcher.fetch_blogs();
                self.fetcher.fetch_gallery();
            }
            View::Blogs => {
                self.blogs.begin_loading();
                self.fetcher.fetch_blogs();
            }
            View::Gallery => {
                self.gallery.begin_loading();
                self.fetcher.fetch_gallery();
            }
            View::BlogDetail => {
                if let Some(id) = &self.blog_detail_id {
                    self.blog_detail.begin_loading();
                    self.fetcher.fetch_blog(id, self.translator.language());
                }
            }
        }
    }

    /// Open the blog under the cursor in the detail view
    pub fn open_selected_blog(&mut self) {
        let Some(id) = self
            .blogs
            .value()
            .and_then(|blogs| blogs.get(self.blog_cursor))
            .map(|blog| blog.id.clone())
        else {
            return;
        };
        self.fetcher.cancel_view();
        self.view = View::BlogDetail;
        self.view_scroll = PageScroll::new();
        self.blog_detail_id = Some(id);
        self.mount_view();
    }

    /// Toggle EN/ES, persist the choice, and refetch language-sensitive
    /// content
    pub fn toggle_language(&mut self) {
        let language = self.translator.language().toggled();
        self.translator.set_language(language);
        self.preferences.language = language;
        self.save_preferences();

        if self.view == View::BlogDetail {
            if let Some(id) = self.blog_detail_id.clone() {
                // Abort any fetch still running for the old language so a
                // late stale response cannot overwrite the new translation
                self.fetcher.cancel_view();
                self.blog_detail.begin_loading();
                self.fetcher.fetch_blog(&id, language);
            }
        }
    }

    /// Re-kick fetches for sections sitting in a retryable failed state
    pub fn retry_failed(&mut self) {
        if self.tours.error().is_some_and(|(_, retryable)| retryable) {
            self.tours.begin_loading();
            self.fetcher.fetch_tours();
        }
        if self.blogs.error().is_some_and(|(_, retryable)| retryable) {
            self.blogs.begin_loading();
            self.fetcher.fetch_blogs();
        }
        if self.gallery.error().is_some_and(|(_, retryable)| retryable) {
            self.gallery.begin_loading();
            self.fetcher.fetch_gallery();
        }
        if self
            .blog_detail
            .error()
            .is_some_and(|(_, retryable)| retryable)
        {
            if let Some(id) = self.blog_detail_id.clone() {
                self.blog_detail.begin_loading();
                self.fetcher.fetch_blog(&id, self.translator.language());
            }
        }
    }

    /// Feed a wheel/arrow scroll on the home view through the takeover
    /// choreography, falling back to native page scroll
    pub fn wheel(&mut self, delta: f32) {
        let now = self.clock.now();
        let mut surface = HomeSurface {
            layout: &self.home_layout,
            scroll: &mut self.home_scroll,
        };
        if self.takeover.on_wheel(delta, &mut surface, now) {
            return;
        }
        self.home_scroll.scroll_by(delta);
        let mut surface = HomeSurface {
            layout: &self.home_layout,
            scroll: &mut self.home_scroll,
        };
        self.takeover.on_page_scroll(&mut surface, now);
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.takeover.on_touch_start(x, y);
    }

    pub fn touch_move(&mut self, x: f32, y: f32) {
        let now = self.clock.now();
        let mut surface = HomeSurface {
            layout: &self.home_layout,
            scroll: &mut self.home_scroll,
        };
        if self.takeover.on_touch_move(x, y, &mut surface, now) {
            return;
        }
        // Drags never pan the page while vertical; the boundary detector
        // just keeps observing the current position
        self.takeover.on_page_scroll(&mut surface, now);
    }

    pub fn touch_end(&mut self) {
        self.takeover.on_touch_end();
    }

    fn save_preferences(&mut self) {
        self.preferences.last_view = Some(self.view.name().to_string());
        if let Err(e) = self.preferences.save() {
            warn!("Failed to save preferences: {}", e);
        }
    }
}
