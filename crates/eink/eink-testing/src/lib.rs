//! E-Ink UI Testing Utilities
//!
//! Headless pixel assertions for panel widgets.
//!
//! # Quick start
//!
//! ```
//! use eink_testing::TestCanvas;
//! use eink_emulator::AcepColor;
//! use embedded_graphics::{prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut t = TestCanvas::new(100, 100);
//!
//! // Draw UI content
//! Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(AcepColor::Red))
//!     .draw(&mut *t)
//!     .unwrap();
//!
//! // Name the region so assertions read well
//! t.register_region("header", Rectangle::new(Point::new(10, 10), Size::new(40, 20)));
//!
//! // Assertions
//! t.assert_pixel(20, 15, AcepColor::Red).unwrap();
//! t.assert_named_uniform("header", AcepColor::Red).unwrap();
//! ```

#![warn(clippy::all)]
// Testing lib — println is allowed in tests but we still warn on it in lib code
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]

use std::ops::{Deref, DerefMut};
use std::path::Path;

use embedded_graphics::{prelude::*, primitives::Rectangle};

pub use eink_emulator::{AcepColor, Framebuffer};

// ─────────────────────────────────────────────────────────────────────────────
// RegionRef
// ─────────────────────────────────────────────────────────────────────────────

/// A named rectangle registered in a [`TestCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub struct RegionRef {
    /// The test identifier (analogous to `data-testid` in web testing).
    pub test_id: String,
    /// Area in canvas coordinates.
    pub bounds: Rectangle,
}

// ─────────────────────────────────────────────────────────────────────────────
// TestCanvas
// ─────────────────────────────────────────────────────────────────────────────

/// Headless canvas for widget tests.
///
/// Wraps a [`Framebuffer`] and adds:
/// - A region registry queryable by test ID
/// - Pixel and region assertions
/// - Screenshot capture
///
/// Derefs to [`Framebuffer`], which implements [`DrawTarget`], so widgets
/// render straight into it with `&mut *canvas`.
pub struct TestCanvas {
    inner: Framebuffer,
    regions: Vec<RegionRef>,
}

impl TestCanvas {
    /// Create a white canvas with exact pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_framebuffer(Framebuffer::new(width, height))
    }

    /// Wrap an already rendered frame.
    pub fn from_framebuffer(frame: Framebuffer) -> Self {
        Self {
            inner: frame,
            regions: Vec::new(),
        }
    }

    // ── Pixel assertions ─────────────────────────────────────────────────────

    /// Assert that pixel `(x, y)` has the expected colour.
    ///
    /// Returns `Err` with a descriptive message on mismatch.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: AcepColor) -> Result<(), String> {
        let actual = self
            .inner
            .get_pixel(x, y)
            .ok_or_else(|| format!("Pixel ({x}, {y}) is out of bounds"))?;
        if actual == expected {
            Ok(())
        } else {
            Err(format!(
                "assert_pixel({x}, {y}): expected {expected:?}, got {actual:?}"
            ))
        }
    }

    /// Assert that every pixel inside `rect` has the given colour.
    pub fn assert_region_uniform(&self, rect: Rectangle, color: AcepColor) -> Result<(), String> {
        for point in rect.points() {
            if point.x < 0 || point.y < 0 {
                return Err(format!("assert_region_uniform: {rect:?} leaves the canvas"));
            }
            self.assert_pixel(point.x as u32, point.y as u32, color)
                .map_err(|e| format!("assert_region_uniform failed in {rect:?}: {e}"))?;
        }
        Ok(())
    }

    /// Assert that `rect` contains **at least one** pixel with the given colour.
    pub fn assert_region_contains(&self, rect: Rectangle, color: AcepColor) -> Result<(), String> {
        if self.pixel_count_of_color(rect, color) > 0 {
            Ok(())
        } else {
            Err(format!(
                "assert_region_contains: no {color:?} pixel found in {rect:?}"
            ))
        }
    }

    /// Assert that `rect` contains **no** pixel with the given colour.
    pub fn assert_region_lacks(&self, rect: Rectangle, color: AcepColor) -> Result<(), String> {
        match self.pixel_count_of_color(rect, color) {
            0 => Ok(()),
            n => Err(format!(
                "assert_region_lacks: {n} {color:?} pixels found in {rect:?}"
            )),
        }
    }

    /// Count how many pixels in `rect` have `color`.
    pub fn pixel_count_of_color(&self, rect: Rectangle, color: AcepColor) -> usize {
        rect.points()
            .filter(|p| p.x >= 0 && p.y >= 0)
            .filter(|p| self.inner.get_pixel(p.x as u32, p.y as u32) == Some(color))
            .count()
    }

    // ── Region registry ──────────────────────────────────────────────────────

    /// Register (or update) a region by test ID.
    pub fn register_region(&mut self, test_id: &str, bounds: Rectangle) {
        if let Some(existing) = self.regions.iter_mut().find(|r| r.test_id == test_id) {
            existing.bounds = bounds;
        } else {
            self.regions.push(RegionRef {
                test_id: test_id.to_string(),
                bounds,
            });
        }
    }

    /// Find a region by test ID.
    pub fn query_by_test_id(&self, test_id: &str) -> Option<&RegionRef> {
        self.regions.iter().find(|r| r.test_id == test_id)
    }

    /// Return all registered regions.
    pub fn regions(&self) -> &[RegionRef] {
        &self.regions
    }

    fn named(&self, test_id: &str) -> Result<Rectangle, String> {
        self.query_by_test_id(test_id)
            .map(|r| r.bounds)
            .ok_or_else(|| format!("Region '{test_id}' not found"))
    }

    /// [`assert_region_contains`](Self::assert_region_contains) on a named region.
    pub fn assert_named_contains(&self, test_id: &str, color: AcepColor) -> Result<(), String> {
        self.assert_region_contains(self.named(test_id)?, color)
            .map_err(|e| format!("{test_id}: {e}"))
    }

    /// [`assert_region_lacks`](Self::assert_region_lacks) on a named region.
    pub fn assert_named_lacks(&self, test_id: &str, color: AcepColor) -> Result<(), String> {
        self.assert_region_lacks(self.named(test_id)?, color)
            .map_err(|e| format!("{test_id}: {e}"))
    }

    /// [`assert_region_uniform`](Self::assert_region_uniform) on a named region.
    pub fn assert_named_uniform(&self, test_id: &str, color: AcepColor) -> Result<(), String> {
        self.assert_region_uniform(self.named(test_id)?, color)
            .map_err(|e| format!("{test_id}: {e}"))
    }

    // ── Screenshot utilities ─────────────────────────────────────────────────

    /// Save the canvas as PNG, e.g. to inspect a failing test.
    pub fn screenshot(&self, path: impl AsRef<Path>) -> Result<(), eink_emulator::EmulatorError> {
        eink_emulator::screenshot(&self.inner, path)
    }

    // ── Framebuffer access ───────────────────────────────────────────────────

    /// Unwrap into the inner framebuffer.
    pub fn into_framebuffer(self) -> Framebuffer {
        self.inner
    }
}

impl Deref for TestCanvas {
    type Target = Framebuffer;

    fn deref(&self) -> &Framebuffer {
        &self.inner
    }
}

impl DerefMut for TestCanvas {
    fn deref_mut(&mut self) -> &mut Framebuffer {
        &mut self.inner
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
