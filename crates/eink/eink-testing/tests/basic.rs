#![allow(clippy::unwrap_used)]

use eink_testing::{AcepColor, Framebuffer, TestCanvas};
use embedded_graphics::{
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};

#[test]
fn test_canvas_creation() {
    let t = TestCanvas::new(480, 800);
    assert_eq!(t.width(), 480);
    assert_eq!(t.height(), 800);
    assert!(t.regions().is_empty());
    assert_eq!(t.count(AcepColor::White), 480 * 800);
}

#[test]
fn test_query_by_test_id_empty() {
    let t = TestCanvas::new(48, 80);
    assert!(t.query_by_test_id("nonexistent").is_none());
}

#[test]
fn test_wraps_existing_frame() {
    let frame = Framebuffer::filled(8, 8, AcepColor::Orange);
    let t = TestCanvas::from_framebuffer(frame);
    let all = Rectangle::new(Point::zero(), Size::new(8, 8));
    assert!(t.assert_region_uniform(all, AcepColor::Orange).is_ok());
    assert_eq!(t.into_framebuffer().count(AcepColor::Orange), 64);
}

#[test]
fn test_error_message_names_pixel() {
    let t = TestCanvas::new(10, 10);
    let err = t.assert_pixel(3, 4, AcepColor::Black).unwrap_err();
    assert_eq!(err, "assert_pixel(3, 4): expected Black, got White");
}

#[test]
fn test_outline_only() {
    let mut t = TestCanvas::new(40, 40);
    let rect = Rectangle::new(Point::new(5, 5), Size::new(30, 30));
    rect.into_styled(PrimitiveStyle::with_stroke(AcepColor::Blue, 1))
        .draw(&mut *t)
        .unwrap();
    t.register_region("box", rect);
    t.register_region("inside", rect.offset(-1));

    t.assert_named_contains("box", AcepColor::Blue).unwrap();
    t.assert_named_uniform("inside", AcepColor::White).unwrap();
    assert_eq!(t.pixel_count_of_color(rect, AcepColor::Blue), 4 * 29);
}

#[test]
fn test_screenshot_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shot.png");
    TestCanvas::new(12, 6).screenshot(&path).unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (12, 6));
}
