//! Date cell: month header band, day of month, weekday

use crate::label::{Label, TextSize};
use chrono::NaiveDate;
use eink_emulator::AcepColor;
use eink_system::render::{draw_frame, fill_header};
use eink_system::style::FrameStyle;
use embedded_graphics::{prelude::*, primitives::Rectangle};

/// Height of the filled month band
pub const HEADER_HEIGHT: u32 = 42;

/// Calendar widget for one date
pub struct Calendar {
    date: NaiveDate,
}

impl Calendar {
    /// Create a calendar showing `date`
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Abbreviated month, e.g. `"Oct"`
    pub fn month(&self) -> String {
        self.date.format("%b").to_string()
    }

    /// Zero-padded day of month, e.g. `"07"`
    pub fn day(&self) -> String {
        self.date.format("%d").to_string()
    }

    /// Abbreviated weekday, e.g. `"Mon"`
    pub fn weekday(&self) -> String {
        self.date.format("%a").to_string()
    }

    /// Render into `rect`
    ///
    /// Text rows sit at fixed offsets (21, 80, 137) tuned for a 158 px cell.
    pub fn render<D>(&self, display: &mut D, rect: Rectangle, frame: &FrameStyle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = AcepColor>,
    {
        draw_frame(display, rect, AcepColor::Red, frame)?;
        fill_header(display, rect, HEADER_HEIGHT, AcepColor::Red, frame)?;

        let x = rect.top_left.x + (rect.size.width / 2) as i32;
        let y = rect.top_left.y;

        Label::new(&self.month())
            .size(TextSize::CalendarSmall)
            .color(AcepColor::White)
            .render(display, Point::new(x, y + 21))?;
        Label::new(&self.day())
            .size(TextSize::CalendarBig)
            .render(display, Point::new(x, y + 80))?;
        Label::new(&self.weekday())
            .size(TextSize::CalendarSmall)
            .render(display, Point::new(x, y + 137))?;
        Ok(())
    }
}
