//! Seven-colour ACeP pixel type
//!
//! The Inky Impression panels accept one of seven pigment states per pixel.
//! Controller indices follow the panel's native order: black 0, white 1,
//! green 2, blue 3, red 4, yellow 5, orange 6.

use embedded_graphics::pixelcolor::PixelColor;

/// Colour of a single pixel on an ACeP panel
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum AcepColor {
    /// Black pigment
    Black,
    /// White (background)
    #[default]
    White,
    /// Green pigment
    Green,
    /// Blue pigment
    Blue,
    /// Red pigment
    Red,
    /// Yellow pigment
    Yellow,
    /// Orange pigment
    Orange,
}

impl PixelColor for AcepColor {
    type Raw = ();
}

impl AcepColor {
    /// All colours in controller index order
    pub const ALL: [AcepColor; 7] = [
        AcepColor::Black,
        AcepColor::White,
        AcepColor::Green,
        AcepColor::Blue,
        AcepColor::Red,
        AcepColor::Yellow,
        AcepColor::Orange,
    ];

    /// Controller palette index (0-6)
    pub fn index(self) -> u8 {
        match self {
            AcepColor::Black => 0,
            AcepColor::White => 1,
            AcepColor::Green => 2,
            AcepColor::Blue => 3,
            AcepColor::Red => 4,
            AcepColor::Yellow => 5,
            AcepColor::Orange => 6,
        }
    }

    /// Colour for a controller palette index, if valid
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Approximate on-screen appearance as 8-bit RGB
    ///
    /// Pigments are less saturated than these values on the real panel; the
    /// emulator output only needs to be recognisable.
    pub fn to_rgb(self) -> [u8; 3] {
        match self {
            AcepColor::Black => [0, 0, 0],
            AcepColor::White => [255, 255, 255],
            AcepColor::Green => [0, 160, 0],
            AcepColor::Blue => [0, 0, 255],
            AcepColor::Red => [255, 0, 0],
            AcepColor::Yellow => [255, 255, 0],
            AcepColor::Orange => [255, 140, 0],
        }
    }
}
