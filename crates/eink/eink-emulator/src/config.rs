//! Emulator configuration

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for emulator display presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Where each presented frame is written as PNG
    pub output: PathBuf,
    /// Rotation applied to the canvas before it reaches the panel
    pub rotation: Rotation,
    /// Simulated refresh time slept after each present
    pub refresh_delay: Duration,
}

impl EmulatorConfig {
    /// Portrait canvas on a landscape panel, no simulated delay
    ///
    /// The Inky Impression mounts portrait with its connector on the left, so
    /// the canvas is turned a quarter counter-clockwise.
    pub fn portrait(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            rotation: Rotation::Degrees270,
            refresh_delay: Duration::ZERO,
        }
    }
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self::portrait("panel.png")
    }
}

/// Display rotation modes
///
/// Rotation is applied at present time only. Drawing code keeps using the
/// logical canvas coordinates (e.g. 480×800 portrait).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    /// No rotation (landscape: width × height)
    Degrees0,
    /// Rotate 90° clockwise (portrait: height × width)
    Degrees90,
    /// Rotate 180° (upside-down landscape: width × height)
    Degrees180,
    /// Rotate 270° clockwise / 90° counter-clockwise (portrait: height × width)
    #[default]
    Degrees270,
}

impl Rotation {
    /// Parse a rotation given in degrees (0, 90, 180, 270)
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Degrees0),
            90 => Some(Rotation::Degrees90),
            180 => Some(Rotation::Degrees180),
            270 => Some(Rotation::Degrees270),
            _ => None,
        }
    }

    /// Check if rotation swaps width and height
    pub fn swaps_dimensions(&self) -> bool {
        matches!(self, Rotation::Degrees90 | Rotation::Degrees270)
    }

    /// Calculate output dimensions after rotation
    pub fn apply_to_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}
