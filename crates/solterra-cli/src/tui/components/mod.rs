//! Reusable UI Components

mod footer;
mod nav_bar;

pub use footer::render_footer;
pub use nav_bar::render_nav_bar;
