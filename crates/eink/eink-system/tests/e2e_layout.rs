//! End-to-End Layout Tests
//!
//! Draws every panel region into a real ACeP framebuffer and checks that the
//! outlines land where the layout says, without bleeding into neighbours.

#![allow(clippy::unwrap_used)]

use eink_emulator::{AcepColor, Framebuffer};
use eink_system::prelude::*;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

// ============================================================================
// Helper Functions
// ============================================================================

fn canvas(layout: &PanelLayout) -> Framebuffer {
    Framebuffer::new(layout.canvas.width, layout.canvas.height)
}

fn midpoint_top(rect: &Rectangle) -> Point {
    rect.top_left + Point::new(rect.size.width as i32 / 2, 1)
}

fn pixel(fb: &Framebuffer, p: Point) -> Option<AcepColor> {
    fb.get_pixel(p.x as u32, p.y as u32)
}

// ============================================================================
// Region Tests
// ============================================================================

#[test]
fn test_all_regions_drawn_in_their_colours() {
    let layout = PanelLayout::default();
    let mut fb = canvas(&layout);
    let frame = FrameStyle::default();

    draw_frame(&mut fb, layout.calendar, AcepColor::Red, &frame).unwrap();
    draw_frame(&mut fb, layout.next_up, AcepColor::Black, &frame).unwrap();
    draw_frame(&mut fb, layout.status, AcepColor::Blue, &frame).unwrap();
    for index in 0..15 {
        draw_frame(&mut fb, layout.cell_rect(index), AcepColor::Green, &frame).unwrap();
    }

    assert_eq!(pixel(&fb, midpoint_top(&layout.calendar)), Some(AcepColor::Red));
    assert_eq!(pixel(&fb, midpoint_top(&layout.next_up)), Some(AcepColor::Black));
    assert_eq!(pixel(&fb, midpoint_top(&layout.status)), Some(AcepColor::Blue));
    assert_eq!(pixel(&fb, midpoint_top(&layout.cell_rect(7))), Some(AcepColor::Green));
}

#[test]
fn test_spacing_gutters_stay_white() {
    let layout = PanelLayout::default();
    let mut fb = canvas(&layout);
    let frame = FrameStyle::default();

    for index in 0..15 {
        draw_frame(&mut fb, layout.cell_rect(index), AcepColor::Green, &frame).unwrap();
    }

    // Column gutter between cell 0 and cell 1 is x = 158..=160
    for x in 158..=160 {
        assert_eq!(fb.get_pixel(x, 220), Some(AcepColor::White), "x={x}");
    }
    // Row gutter between row 0 and row 1 is y = 279..=281
    for y in 279..=281 {
        assert_eq!(fb.get_pixel(80, y), Some(AcepColor::White), "y={y}");
    }
}

#[test]
fn test_grid_fills_space_between_header_and_status() {
    let layout = PanelLayout::default();
    let last = layout.cell_rect(14).bottom_right().unwrap();
    assert_eq!(last, Point::new(479, 762));
    assert_eq!(layout.status.top_left.y - last.y, 4);
}

#[test]
fn test_custom_constants() {
    let constants = LayoutConstants {
        row_width: 2,
        grid_cell: Size::new(100, 50),
        grid_rows: 2,
        ..LayoutConstants::default()
    };
    let layout = PanelLayout::new(&constants);
    assert_eq!(layout.cell_rect(3).top_left, Point::new(103, 161 + 53));
    assert_eq!(layout.status.top_left, Point::new(0, 161 + 106));
}
