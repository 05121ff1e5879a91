//! CPU-side canvas for one render pass
//!
//! A `Framebuffer` is created per pass, drawn into through embedded-graphics,
//! and then handed over to a `DisplayDriver` by value.

use crate::config::Rotation;
use crate::pixel_color::AcepColor;
use embedded_graphics::prelude::*;

/// Pixel canvas in the ACeP palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<AcepColor>,
    width: u32,
    height: u32,
}

impl Framebuffer {
    /// Create a canvas filled with white
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, AcepColor::White)
    }

    /// Create a canvas filled with `color`
    pub fn filled(width: u32, height: u32, color: AcepColor) -> Self {
        let size = (width as usize).saturating_mul(height as usize);
        Self {
            pixels: vec![color; size],
            width,
            height,
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel slice
    pub fn pixels(&self) -> &[AcepColor] {
        &self.pixels
    }

    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Set pixel at coordinates; out-of-bounds writes are ignored
    pub fn set_pixel(&mut self, x: u32, y: u32, color: AcepColor) {
        if let Some(slot) = self.index_of(x, y).and_then(|i| self.pixels.get_mut(i)) {
            *slot = color;
        }
    }

    /// Get pixel at coordinates
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<AcepColor> {
        self.index_of(x, y)
            .and_then(|i| self.pixels.get(i))
            .copied()
    }

    /// Fill entire canvas with color
    pub fn fill(&mut self, color: AcepColor) {
        self.pixels.fill(color);
    }

    /// Clear canvas (fill with white)
    pub fn clear(&mut self) {
        self.fill(AcepColor::White);
    }

    /// Number of pixels with the given colour
    pub fn count(&self, color: AcepColor) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Return a copy rotated clockwise by `rotation`
    ///
    /// A 90° or 270° rotation swaps width and height.
    pub fn rotated(&self, rotation: Rotation) -> Framebuffer {
        if rotation == Rotation::Degrees0 {
            return self.clone();
        }

        let (w, h) = (self.width, self.height);
        let (out_w, out_h) = rotation.apply_to_dimensions(w, h);
        let mut out = Framebuffer::new(out_w, out_h);

        for y in 0..h {
            for x in 0..w {
                let Some(color) = self.get_pixel(x, y) else {
                    continue;
                };
                let (dx, dy) = match rotation {
                    Rotation::Degrees0 => (x, y),
                    Rotation::Degrees90 => (h - 1 - y, x),
                    Rotation::Degrees180 => (w - 1 - x, h - 1 - y),
                    Rotation::Degrees270 => (y, w - 1 - x),
                };
                out.set_pixel(dx, dy, color);
            }
        }

        out
    }
}

impl DrawTarget for Framebuffer {
    type Color = AcepColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                self.set_pixel(point.x as u32, point.y as u32, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
