//! Solterra - travel brand experience for the terminal
//!
//! A scrollable brand site rendered in the terminal:
//! - Home page with a scroll-takeover photo gallery
//! - Blog listing and detail views
//! - Photo gallery
//! - English/Spanish translations

use anyhow::Result;
use clap::Parser;

use solterra_core::{paths, Language};

mod tui;

/// Solterra Expeditions terminal experience
#[derive(Parser)]
#[command(name = "solterra")]
#[command(about = "Travel brand experience for the terminal", long_about = None)]
struct Cli {
    /// UI language (en or es), overrides the stored preference
    #[arg(short, long)]
    lang: Option<String>,

    /// View to open on startup (home, blogs, gallery)
    #[arg(short, long)]
    view: Option<String>,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    // Initialize logging to file (not stdout/stderr which would mess up TUI)
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let log_file = std::fs::File::create(log_dir.join("solterra.log"))
        .unwrap_or_else(|_| std::fs::File::create(null_device).unwrap());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let lang_override = cli.lang.as_deref().and_then(Language::from_code);
    if cli.lang.is_some() && lang_override.is_none() {
        tracing::warn!(lang = ?cli.lang, "Unknown language code, keeping stored preference");
    }

    let mut app = tui::App::new(lang_override, cli.view.as_deref());
    app.run().await?;

    Ok(())
}
