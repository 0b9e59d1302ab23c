//! Trait abstraction for share and clipboard capabilities

use crate::error::PlatformError;
use crate::state::ShareData;

/// Optional platform capabilities used by the share button
#[cfg_attr(test, mockall::automock)]
pub trait SharePlatform {
    /// Whether a native share capability exists
    fn can_share(&self) -> bool;

    /// Hand the invitation to the native share capability
    fn share(&mut self, data: &ShareData) -> Result<(), PlatformError>;

    /// Put text on the system clipboard
    fn copy_text(&mut self, text: &str) -> Result<(), PlatformError>;
}
