//! Event handlers

mod keyboard;
mod mouse;

pub use keyboard::handle_key;
pub use mouse::handle_mouse;
