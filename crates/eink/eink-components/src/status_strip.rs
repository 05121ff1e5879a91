//! One-line status message under the grid

use crate::label::{Label, TextSize};
use eink_emulator::AcepColor;
use eink_system::render::{draw_frame, fraction_point};
use eink_system::style::FrameStyle;
use embedded_graphics::{prelude::*, primitives::Rectangle};

/// Message shown when none is configured
pub const DEFAULT_MESSAGE: &str = "So long and thanks for all the fish";

/// Status strip widget
pub struct StatusStrip<'a> {
    message: &'a str,
}

impl<'a> StatusStrip<'a> {
    /// Strip showing `message`
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Render into `rect`: blue frame, blue centred text
    pub fn render<D>(&self, display: &mut D, rect: Rectangle, frame: &FrameStyle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = AcepColor>,
    {
        draw_frame(display, rect, AcepColor::Blue, frame)?;
        Label::new(self.message)
            .size(TextSize::Label)
            .color(AcepColor::Blue)
            .render(display, fraction_point(&rect, (1, 2), (1, 2)))
    }
}

impl Default for StatusStrip<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use eink_emulator::Framebuffer;

    #[test]
    fn test_default_message_fits() {
        assert!(TextSize::Label.measure(DEFAULT_MESSAGE) < 480 - 20);
    }

    #[test]
    fn test_render_blue_only() {
        let mut fb = Framebuffer::new(480, 31);
        let rect = Rectangle::new(Point::zero(), Size::new(480, 31));
        StatusStrip::default()
            .render(&mut fb, rect, &FrameStyle::default())
            .unwrap();
        assert!(fb.count(AcepColor::Blue) > 0);
        assert_eq!(fb.count(AcepColor::Black), 0);
        // Text sits in the middle
        let middle_ink = (100..380)
            .filter(|&x| fb.get_pixel(x, 15) == Some(AcepColor::Blue))
            .count();
        assert!(middle_ink > 0);
    }
}
