//! Drawing helpers on top of embedded-graphics
//!
//! Every function is generic over the draw target and its colour type so the
//! same code draws into the ACeP framebuffer and into test doubles.

use crate::style::{Anchor, FrameStyle};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    CornerRadii, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle,
    StrokeAlignment,
};
use embedded_graphics::text::Text;

/// Pixel width of `text` set in a monospaced `font`
pub fn text_width(text: &str, font: &MonoFont<'_>) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    let advance = font.character_size.width.saturating_add(font.character_spacing);
    advance
        .saturating_mul(count)
        .saturating_sub(font.character_spacing)
}

/// Draw a rounded outline inside `rect`
pub fn draw_frame<D, C>(
    target: &mut D,
    rect: Rectangle,
    color: C,
    frame: &FrameStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    let style = PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(frame.stroke)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    RoundedRectangle::with_equal_corners(rect, frame.corner())
        .into_styled(style)
        .draw(target)
}

/// Fill a header band across the top of `rect`, rounded on the top corners
pub fn fill_header<D, C>(
    target: &mut D,
    rect: Rectangle,
    height: u32,
    color: C,
    frame: &FrameStyle,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    let band = Rectangle::new(rect.top_left, Size::new(rect.size.width, height));
    let radii = CornerRadii {
        top_left: frame.corner(),
        top_right: frame.corner(),
        bottom_right: Size::zero(),
        bottom_left: Size::zero(),
    };
    RoundedRectangle::new(band, radii)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)
}

/// Draw `text` so that `anchor` of the text sits at `position`
pub fn draw_text<D, C>(
    target: &mut D,
    text: &str,
    position: Point,
    anchor: Anchor,
    font: &MonoFont<'_>,
    color: C,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor,
{
    if text.is_empty() {
        return Ok(());
    }
    let character_style = MonoTextStyle::new(font, color);
    Text::with_text_style(text, position, character_style, anchor.text_style())
        .draw(target)
        .map(|_| ())
}

/// Point at fractions of a rectangle, e.g. `(1, 2)` / `(3, 4)` for the
/// horizontal centre and three-quarter height
pub fn fraction_point(rect: &Rectangle, x: (u32, u32), y: (u32, u32)) -> Point {
    let fx = rect.size.width.saturating_mul(x.0) / x.1.max(1);
    let fy = rect.size.height.saturating_mul(y.0) / y.1.max(1);
    rect.top_left + Point::new(fx as i32, fy as i32)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::FONT_6X10;
    use embedded_graphics::pixelcolor::BinaryColor;

    #[test]
    fn test_text_width_monospace() {
        assert_eq!(text_width("", &FONT_6X10), 0);
        assert_eq!(text_width("a", &FONT_6X10), 6);
        assert_eq!(text_width("abcd", &FONT_6X10), 24);
    }

    #[test]
    fn test_fraction_point() {
        let rect = Rectangle::new(Point::new(10, 20), Size::new(158, 118));
        assert_eq!(fraction_point(&rect, (1, 2), (1, 2)), Point::new(89, 79));
        assert_eq!(fraction_point(&rect, (1, 2), (3, 4)), Point::new(89, 108));
        assert_eq!(fraction_point(&rect, (1, 4), (1, 4)), Point::new(49, 49));
    }

    #[test]
    fn test_frame_stays_inside_rect() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let rect = Rectangle::new(Point::new(2, 2), Size::new(40, 30));
        let frame = FrameStyle {
            radius: 4,
            stroke: 2,
        };
        draw_frame(&mut display, rect, BinaryColor::On, &frame).unwrap();

        let drawn = display.affected_area();
        assert_eq!(drawn, rect);
        // Interior untouched
        assert_eq!(display.get_pixel(Point::new(20, 15)), None);
        // Edge midpoint stroked
        assert_eq!(display.get_pixel(Point::new(20, 2)), Some(BinaryColor::On));
    }

    #[test]
    fn test_header_fills_band_only() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let rect = Rectangle::new(Point::zero(), Size::new(40, 40));
        fill_header(&mut display, rect, 20, BinaryColor::On, &FrameStyle::default()).unwrap();

        assert_eq!(display.get_pixel(Point::new(20, 15)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(20, 25)), None);
        // Bottom corners are square, top corners rounded
        assert_eq!(display.get_pixel(Point::new(0, 19)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);
        draw_text(
            &mut display,
            "",
            Point::new(10, 10),
            Anchor::CENTER,
            &FONT_6X10,
            BinaryColor::On,
        )
        .unwrap();
        assert_eq!(display.affected_area().size, Size::zero());
    }

    #[test]
    fn test_centered_text_straddles_position() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);
        draw_text(
            &mut display,
            "HH",
            Point::new(30, 30),
            Anchor::CENTER,
            &FONT_6X10,
            BinaryColor::On,
        )
        .unwrap();
        let area = display.affected_area();
        assert!(area.top_left.x < 30);
        assert!(area.top_left.x + area.size.width as i32 > 30);
        assert!(area.top_left.y < 30);
    }
}
