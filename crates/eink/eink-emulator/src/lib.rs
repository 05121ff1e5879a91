//! E-Ink Display Emulator
//!
//! Desktop stand-in for the status panel: frames are drawn into a
//! [`Framebuffer`] through embedded-graphics and presented by a
//! [`PngDisplay`], which rotates them to the panel's native orientation and
//! writes a PNG instead of driving SPI.
//!
//! # Example
//!
//! ```no_run
//! use eink_emulator::{DisplayDriver, EmulatorConfig, Framebuffer, AcepColor, PngDisplay};
//! use eink_specs::displays::INKY_IMPRESSION_7_3;
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
//!
//! # async fn example() -> Result<(), eink_emulator::EmulatorError> {
//! let mut display = PngDisplay::new(&INKY_IMPRESSION_7_3, EmulatorConfig::portrait("out.png"));
//! let mut frame = Framebuffer::new(480, 800);
//!
//! Rectangle::new(Point::new(10, 10), Size::new(50, 30))
//!     .into_styled(PrimitiveStyle::with_fill(AcepColor::Red))
//!     .draw(&mut frame)
//!     .ok();
//!
//! display.present(frame).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
mod display_driver;
mod framebuffer;
pub mod pixel_color;

pub use config::{EmulatorConfig, Rotation};
pub use display_driver::DisplayDriver;
pub use framebuffer::Framebuffer;
pub use pixel_color::AcepColor;

use eink_specs::DisplaySpec;
use image::{Rgb, RgbImage};
use std::path::Path;

/// Errors raised while presenting a frame
#[derive(Debug, thiserror::Error)]
pub enum EmulatorError {
    /// Frame does not fit the panel after rotation
    #[error("frame is {actual_width}x{actual_height} after rotation, panel expects {expected_width}x{expected_height}")]
    Dimensions {
        /// Panel width
        expected_width: u32,
        /// Panel height
        expected_height: u32,
        /// Rotated frame width
        actual_width: u32,
        /// Rotated frame height
        actual_height: u32,
    },

    /// PNG encoding or file write failed
    #[error("failed to write frame image: {0}")]
    Image(#[from] image::ImageError),
}

/// Convert a framebuffer to an RGB image
pub fn to_rgb_image(frame: &Framebuffer) -> RgbImage {
    let width = frame.width();
    RgbImage::from_fn(width, frame.height(), |x, y| {
        Rgb(frame.get_pixel(x, y).unwrap_or_default().to_rgb())
    })
}

/// Save a framebuffer as PNG in its logical orientation (for testing)
pub fn screenshot(frame: &Framebuffer, path: impl AsRef<Path>) -> Result<(), EmulatorError> {
    to_rgb_image(frame).save(path)?;
    Ok(())
}

/// Emulated panel that writes each presented frame to a PNG file
pub struct PngDisplay {
    spec: &'static DisplaySpec,
    config: EmulatorConfig,
    presents: u32,
    last_frame: Option<Framebuffer>,
}

impl PngDisplay {
    /// Create an emulated panel for `spec`
    pub fn new(spec: &'static DisplaySpec, config: EmulatorConfig) -> Self {
        tracing::debug!(
            display = spec.name,
            controller = spec.controller,
            width = spec.width,
            height = spec.height,
            output = %config.output.display(),
            "PngDisplay created"
        );
        Self {
            spec,
            config,
            presents: 0,
            last_frame: None,
        }
    }

    /// Emulator configuration
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Number of successful presents so far
    pub fn present_count(&self) -> u32 {
        self.presents
    }

    /// Last presented frame, in native panel orientation
    pub fn last_frame(&self) -> Option<&Framebuffer> {
        self.last_frame.as_ref()
    }
}

impl DisplayDriver for PngDisplay {
    type DriverError = EmulatorError;

    fn spec(&self) -> &'static DisplaySpec {
        self.spec
    }

    async fn present(&mut self, frame: Framebuffer) -> Result<(), Self::DriverError> {
        let native = frame.rotated(self.config.rotation);
        let (expected_width, expected_height) = self.spec.native_size();
        if (native.width(), native.height()) != (expected_width, expected_height) {
            return Err(EmulatorError::Dimensions {
                expected_width,
                expected_height,
                actual_width: native.width(),
                actual_height: native.height(),
            });
        }

        to_rgb_image(&native).save(&self.config.output)?;

        if !self.config.refresh_delay.is_zero() {
            tokio::time::sleep(self.config.refresh_delay).await;
        }

        self.presents = self.presents.saturating_add(1);
        self.last_frame = Some(native);
        tracing::info!(
            presents = self.presents,
            output = %self.config.output.display(),
            "frame presented"
        );
        Ok(())
    }

    async fn sleep(&mut self) -> Result<(), Self::DriverError> {
        tracing::debug!("panel sleep");
        Ok(())
    }
}
