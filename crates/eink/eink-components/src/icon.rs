//! Bitmap icons loaded from PNG files
//!
//! Icons are looked up by id (e.g. a weather condition code) and stored as a
//! 1-bit mask. Mask pixels are drawn black; everything else is left as is.

use eink_emulator::AcepColor;
use embedded_graphics::{prelude::*, primitives::Rectangle};
use image::GrayAlphaImage;
use std::collections::HashMap;
use std::path::Path;

/// Level at or above which a mask pixel is set
const MASK_THRESHOLD: u8 = 128;

/// Monochrome icon mask
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconBitmap {
    width: u32,
    height: u32,
    ink: Vec<bool>,
}

impl IconBitmap {
    /// Build a mask from a grey+alpha image
    ///
    /// The image is optionally inverted, then its light pixels form the mask.
    /// With `invert` (the usual case) dark artwork on white paper becomes ink;
    /// without it light artwork does. Transparent pixels are never ink.
    pub fn from_image(img: &GrayAlphaImage, invert: bool) -> Self {
        let ink = img
            .pixels()
            .map(|px| {
                let [luma, alpha] = px.0;
                let level = if invert { 255 - luma } else { luma };
                alpha >= MASK_THRESHOLD && level >= MASK_THRESHOLD
            })
            .collect();
        Self {
            width: img.width(),
            height: img.height(),
            ink,
        }
    }

    /// Load a PNG (or any format `image` decodes) from disk
    pub fn open(path: impl AsRef<Path>, invert: bool) -> Result<Self, image::ImageError> {
        let img = image::open(path)?.to_luma_alpha8();
        Ok(Self::from_image(&img, invert))
    }

    /// Bitmap size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Number of ink pixels
    pub fn ink_count(&self) -> usize {
        self.ink.iter().filter(|&&b| b).count()
    }

    /// Draw the bitmap centred in `rect`
    pub fn render_centered<D>(&self, display: &mut D, rect: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = AcepColor>,
    {
        let top_left = rect.top_left
            + Point::new(
                (rect.size.width as i32 - self.width as i32) / 2,
                (rect.size.height as i32 - self.height as i32) / 2,
            );
        let width = self.width.max(1) as usize;
        let pixels = self
            .ink
            .iter()
            .enumerate()
            .filter(|(_, &ink)| ink)
            .map(|(i, _)| {
                let x = (i % width) as i32;
                let y = (i / width) as i32;
                Pixel(top_left + Point::new(x, y), AcepColor::Black)
            });
        display.draw_iter(pixels)
    }
}

/// Icons keyed by id
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: HashMap<String, IconBitmap>,
}

impl IconSet {
    /// Empty set; every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `<id>.png` in `dir`
    ///
    /// Unreadable files are skipped with a warning. A missing directory gives
    /// an empty set.
    pub fn load_dir(dir: impl AsRef<Path>, invert: bool) -> Self {
        let dir = dir.as_ref();
        let mut set = Self::new();

        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "icon directory unreadable");
                return set;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let is_png = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if !is_png {
                continue;
            }
            match IconBitmap::open(&path, invert) {
                Ok(bitmap) => {
                    set.insert(id, bitmap);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping icon");
                }
            }
        }

        tracing::debug!(dir = %dir.display(), count = set.len(), "icons loaded");
        set
    }

    /// Add or replace an icon
    pub fn insert(&mut self, id: impl Into<String>, bitmap: IconBitmap) {
        self.icons.insert(id.into(), bitmap);
    }

    /// Look up an icon by id
    pub fn get(&self, id: &str) -> Option<&IconBitmap> {
        self.icons.get(id)
    }

    /// Number of loaded icons
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// True when no icons are loaded
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use eink_emulator::Framebuffer;
    use image::LumaA;

    /// Opaque 4×4 icon: black 2×2 square on white paper
    fn dark_square_on_white() -> GrayAlphaImage {
        GrayAlphaImage::from_fn(4, 4, |x, y| {
            if (1..3).contains(&x) && (1..3).contains(&y) {
                LumaA([0, 255])
            } else {
                LumaA([255, 255])
            }
        })
    }

    fn white_square_on_transparent() -> GrayAlphaImage {
        GrayAlphaImage::from_fn(4, 4, |x, y| {
            if (1..3).contains(&x) && (1..3).contains(&y) {
                LumaA([255, 255])
            } else {
                LumaA([0, 0])
            }
        })
    }

    #[test]
    fn test_inverted_dark_art_becomes_ink() {
        let bitmap = IconBitmap::from_image(&dark_square_on_white(), true);
        assert_eq!(bitmap.size(), Size::new(4, 4));
        assert_eq!(bitmap.ink_count(), 4);
    }

    #[test]
    fn test_without_inversion_light_pixels_are_ink() {
        assert_eq!(IconBitmap::from_image(&dark_square_on_white(), false).ink_count(), 12);
        assert_eq!(IconBitmap::from_image(&white_square_on_transparent(), false).ink_count(), 4);
    }

    #[test]
    fn test_transparent_pixels_never_ink() {
        assert_eq!(IconBitmap::from_image(&white_square_on_transparent(), true).ink_count(), 0);
    }

    #[test]
    fn test_render_centered() {
        let bitmap = IconBitmap::from_image(&dark_square_on_white(), true);
        let mut fb = Framebuffer::new(20, 20);
        let rect = Rectangle::new(Point::zero(), Size::new(20, 20));
        bitmap.render_centered(&mut fb, &rect).unwrap();

        // (20 - 4) / 2 → bitmap origin (8,8), ink at 9..=10
        assert_eq!(fb.get_pixel(9, 9), Some(AcepColor::Black));
        assert_eq!(fb.get_pixel(10, 10), Some(AcepColor::Black));
        assert_eq!(fb.get_pixel(8, 8), Some(AcepColor::White));
        assert_eq!(fb.count(AcepColor::Black), 4);
    }

    #[test]
    fn test_load_dir_reads_pngs() {
        let dir = tempfile::tempdir().unwrap();
        // Saved as plain greyscale, as icon artwork usually is
        image::DynamicImage::ImageLumaA8(dark_square_on_white())
            .to_luma8()
            .save(dir.path().join("01d.png"))
            .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not an icon").unwrap();
        std::fs::write(dir.path().join("broken.png"), "not a png").unwrap();

        let set = IconSet::load_dir(dir.path(), true);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("01d").unwrap().ink_count(), 4);
        assert!(set.get("broken").is_none());
    }

    #[test]
    fn test_load_missing_dir_is_empty() {
        let set = IconSet::load_dir("/definitely/not/here", true);
        assert!(set.is_empty());
    }
}
