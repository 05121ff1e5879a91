//! Styling primitives shared by every panel widget.
//!
//! # Core Types
//!
//! - [`Anchor`] - Where a text position sits relative to the rendered string
//! - [`FrameStyle`] - Rounded outline used around every cell
//!
//! # Example
//!
//! ```
//! use eink_system::style::Anchor;
//! use embedded_graphics::text::{Alignment, Baseline};
//!
//! let anchor = Anchor::parse("mm").unwrap();
//! assert_eq!(anchor, Anchor::CENTER);
//! assert_eq!(anchor.text_style().alignment, Alignment::Center);
//! assert_eq!(anchor.text_style().baseline, Baseline::Middle);
//! ```

use embedded_graphics::prelude::Size;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};

/// Horizontal part of a text anchor
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HAnchor {
    /// Position is the left edge of the text
    Left,
    /// Position is the horizontal centre of the text
    Middle,
    /// Position is the right edge of the text
    Right,
}

/// Vertical part of a text anchor
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VAnchor {
    /// Position is the top of the text
    Top,
    /// Position is the vertical centre of the text
    Middle,
    /// Position is the baseline
    Baseline,
    /// Position is the bottom of the text
    Bottom,
}

/// Text anchor, written as a two-letter code such as `"mm"` or `"la"`.
///
/// First letter is horizontal (`l`, `m`, `r`), second vertical (`a`/`t` top,
/// `m` middle, `s` baseline, `b`/`d` bottom).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Horizontal anchor
    pub h: HAnchor,
    /// Vertical anchor
    pub v: VAnchor,
}

impl Anchor {
    /// `"mm"`: centred both ways
    pub const CENTER: Self = Self {
        h: HAnchor::Middle,
        v: VAnchor::Middle,
    };

    /// `"la"`: left edge, top
    pub const TOP_LEFT: Self = Self {
        h: HAnchor::Left,
        v: VAnchor::Top,
    };

    /// `"ma"`: horizontally centred, top
    pub const TOP_CENTER: Self = Self {
        h: HAnchor::Middle,
        v: VAnchor::Top,
    };

    /// `"lm"`: left edge, vertically centred
    pub const LEFT_MIDDLE: Self = Self {
        h: HAnchor::Left,
        v: VAnchor::Middle,
    };

    /// Parse a two-letter anchor code
    pub fn parse(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let h = match chars.next()? {
            'l' => HAnchor::Left,
            'm' => HAnchor::Middle,
            'r' => HAnchor::Right,
            _ => return None,
        };
        let v = match chars.next()? {
            'a' | 't' => VAnchor::Top,
            'm' => VAnchor::Middle,
            's' => VAnchor::Baseline,
            'b' | 'd' => VAnchor::Bottom,
            _ => return None,
        };
        if chars.next().is_some() {
            return None;
        }
        Some(Self { h, v })
    }

    /// embedded-graphics text style for this anchor
    pub fn text_style(self) -> TextStyle {
        let alignment = match self.h {
            HAnchor::Left => Alignment::Left,
            HAnchor::Middle => Alignment::Center,
            HAnchor::Right => Alignment::Right,
        };
        let baseline = match self.v {
            VAnchor::Top => Baseline::Top,
            VAnchor::Middle => Baseline::Middle,
            VAnchor::Baseline => Baseline::Alphabetic,
            VAnchor::Bottom => Baseline::Bottom,
        };
        TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build()
    }
}

/// Rounded outline drawn around cells
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameStyle {
    /// Corner radius in pixels
    pub radius: u32,
    /// Stroke width in pixels, drawn inside the rectangle
    pub stroke: u32,
}

impl FrameStyle {
    /// Corner radius as a `Size` for `RoundedRectangle`
    pub fn corner(&self) -> Size {
        Size::new(self.radius, self.radius)
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            radius: 12,
            stroke: 4,
        }
    }
}
