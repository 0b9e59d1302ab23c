//! Application state module

mod app_state;
mod forms;
mod gallery;
mod intro_state;
mod invitation;
mod key_listener;
mod music;
mod notice;
mod overlay;
mod share;

pub use app_state::*;
pub use forms::*;
pub use gallery::*;
pub use intro_state::*;
pub use invitation::*;
pub use key_listener::*;
pub use music::*;
pub use notice::*;
pub use overlay::*;
pub use share::*;
