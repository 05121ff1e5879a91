//! Display specification types
//!
//! Describes the physical panel a frame is presented on. Only the native
//! resolution matters to presenting; the rest identifies the hardware in logs.

/// Specification of an e-paper panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySpec {
    /// Display name (e.g., "Pimoroni Inky Impression 7.3\"")
    pub name: &'static str,

    /// Native width in pixels (controller RAM orientation)
    pub width: u32,

    /// Native height in pixels (controller RAM orientation)
    pub height: u32,

    /// Display controller chip
    pub controller: &'static str,
}

impl DisplaySpec {
    /// Native `(width, height)`
    pub const fn native_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
