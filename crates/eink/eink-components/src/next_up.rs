//! Upcoming-event cell
//!
//! Shows the earliest event after today: its summary wrapped onto at most two
//! lines and the number of days remaining.

use crate::label::{Label, TextSize};
use chrono::NaiveDate;
use eink_emulator::AcepColor;
use eink_system::render::draw_frame;
use eink_system::style::{Anchor, FrameStyle};
use eink_system::wrap::wrap;
use embedded_graphics::{prelude::*, primitives::Rectangle};

/// Summary lines drawn before the rest is dropped
const MAX_LINES: usize = 2;

/// Event chosen for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingEvent {
    /// Event title
    pub summary: String,
    /// Whole days from today until the event starts
    pub days_remaining: i64,
}

impl UpcomingEvent {
    /// Pick the earliest event strictly after `today`
    ///
    /// Events on the same date keep their input order.
    pub fn next<I>(events: I, today: NaiveDate) -> Option<Self>
    where
        I: IntoIterator<Item = (NaiveDate, String)>,
    {
        let mut upcoming: Vec<(NaiveDate, String)> =
            events.into_iter().filter(|(date, _)| *date > today).collect();
        upcoming.sort_by_key(|(date, _)| *date);

        upcoming.into_iter().next().map(|(date, summary)| UpcomingEvent {
            summary,
            days_remaining: (date - today).num_days(),
        })
    }

    /// `"<n> days"` caption
    pub fn caption(&self) -> String {
        format!("{} days", self.days_remaining)
    }
}

/// Upcoming-event widget
pub struct NextUp<'a> {
    event: Option<&'a UpcomingEvent>,
}

impl<'a> NextUp<'a> {
    /// Widget for `event`; `None` draws the frame only
    pub fn new(event: Option<&'a UpcomingEvent>) -> Self {
        Self { event }
    }

    /// Summary lines that fit in a cell `width` wide
    pub fn lines(summary: &str, width: u32, padding: u32) -> Vec<String> {
        let size = TextSize::CalendarSmall;
        let mut lines = wrap(summary, width.saturating_sub(padding * 2), |s| size.measure(s));
        lines.truncate(MAX_LINES);
        lines
    }

    /// Render into `rect`
    pub fn render<D>(
        &self,
        display: &mut D,
        rect: Rectangle,
        padding: u32,
        frame: &FrameStyle,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = AcepColor>,
    {
        draw_frame(display, rect, AcepColor::Black, frame)?;

        let Some(event) = self.event else {
            return Ok(());
        };

        let left = rect.top_left.x + padding as i32;
        let top = rect.top_left.y + padding as i32;
        for (i, line) in Self::lines(&event.summary, rect.size.width, padding).iter().enumerate() {
            Label::new(line)
                .size(TextSize::CalendarSmall)
                .anchor(Anchor::LEFT_MIDDLE)
                .render(display, Point::new(left, top + 16 + 32 * i as i32))?;
        }

        let center_x = rect.top_left.x + (rect.size.width / 2) as i32;
        Label::new(&event.caption())
            .size(TextSize::CalendarBig)
            .render(display, Point::new(center_x, top + 96))?;
        Ok(())
    }
}
