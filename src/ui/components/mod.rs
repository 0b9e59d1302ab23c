//! Reusable UI components

mod button;
mod dialog;
mod list_overlay;
mod share_menu;
mod toast;

pub use button::{render_button, render_sidebar_button, ButtonState, BUTTON_HEIGHT};
pub use dialog::{render_dialog, DialogConfig};
pub use list_overlay::render_list_overlay;
pub use share_menu::render_share_menu;
pub use toast::render_notices;
