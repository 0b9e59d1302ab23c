//! Dialog components for TUI

mod base;

pub use base::{dialog_size, render_dialog, render_dialog_at, DialogConfig};
