//! Share button capabilities

mod system;
mod traits;

pub use system::SystemShare;
pub use traits::SharePlatform;

#[cfg(test)]
pub use traits::MockSharePlatform;
