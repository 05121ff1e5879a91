//! Display driver abstraction for e-paper panels
//!
//! Mirrors the shape of hardware HAL drivers such as `epd-waveshare`: the
//! application renders into a buffer, then asks the driver to transfer it and
//! trigger one physical refresh.
//!
//! ```rust,ignore
//! let frame = render_frame(&plan, &snapshot, today, &icons);
//! driver.present(frame).await?;   // transfer + full refresh
//! ```
//!
//! ACeP panels only support full refreshes lasting tens of seconds, so there
//! is a single `present` operation rather than partial/fast modes. The frame
//! is moved into the driver; the caller allocates a fresh one next pass.

use crate::framebuffer::Framebuffer;
use eink_specs::DisplaySpec;
use std::future::Future;

/// Display driver trait for e-paper panels
///
/// Implemented by the PNG emulator and by hardware back-ends alike.
pub trait DisplayDriver {
    /// Error returned when a frame could not be presented
    type DriverError: core::fmt::Debug + core::fmt::Display;

    /// Get display specification
    fn spec(&self) -> &'static DisplaySpec;

    /// Transfer `frame` to the panel and perform a full refresh
    ///
    /// `frame` is in logical canvas orientation; the driver applies whatever
    /// rotation its panel needs. Resolves once the refresh has finished.
    fn present(&mut self, frame: Framebuffer)
        -> impl Future<Output = Result<(), Self::DriverError>>;

    /// Enter low-power sleep mode
    ///
    /// Panels keep their image without power; the default is a no-op.
    fn sleep(&mut self) -> impl Future<Output = Result<(), Self::DriverError>> {
        async { Ok(()) }
    }
}
