//! Presence roster cell

use crate::label::{Label, TextSize};
use eink_emulator::AcepColor;
use eink_system::render::fraction_point;
use eink_system::style::Anchor;
use embedded_graphics::{prelude::*, primitives::Rectangle};

/// One person on the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterMember {
    /// Display name
    pub name: String,
    /// Last-seen time, already formatted (e.g. `"08:15"`)
    pub last_seen: String,
    /// Optional symbol glyph shown bottom-left
    pub symbol: Option<String>,
    /// Optional element name shown bottom-right
    pub element: Option<String>,
}

/// Roster widget showing the first member
pub struct Roster<'a> {
    members: &'a [RosterMember],
}

impl<'a> Roster<'a> {
    /// Create a roster over `members`
    pub fn new(members: &'a [RosterMember]) -> Self {
        Self { members }
    }

    /// Member that gets drawn, if any
    pub fn shown(&self) -> Option<&'a RosterMember> {
        self.members.first()
    }

    /// Draw the first member inside `rect`; an empty roster draws nothing
    pub fn render_inside<D>(&self, display: &mut D, rect: Rectangle, padding: u32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = AcepColor>,
    {
        let Some(member) = self.shown() else {
            return Ok(());
        };

        let top_center = Point::new(
            rect.top_left.x + (rect.size.width / 2) as i32,
            rect.top_left.y + padding as i32,
        );
        Label::new(&member.name)
            .size(TextSize::RosterName)
            .anchor(Anchor::TOP_CENTER)
            .render(display, top_center)?;

        Label::new(&member.last_seen)
            .size(TextSize::RosterTime)
            .render(display, fraction_point(&rect, (1, 2), (1, 2)))?;

        if let Some(symbol) = member.symbol.as_deref() {
            Label::new(symbol)
                .size(TextSize::RosterName)
                .render(display, fraction_point(&rect, (1, 4), (3, 4)))?;
        }

        if let Some(element) = member.element.as_deref() {
            Label::new(element)
                .size(TextSize::RosterName)
                .render(display, fraction_point(&rect, (3, 4), (3, 4)))?;
        }

        Ok(())
    }
}
