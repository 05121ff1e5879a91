//! Label component for displaying text

use eink_emulator::AcepColor;
use eink_system::render::{draw_text, text_width};
use eink_system::style::Anchor;
use embedded_graphics::{mono_font::MonoFont, prelude::*};
use profont::{PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

/// Text size variants, one per role on the panel
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TextSize {
    /// Cell titles and the status strip
    Label,
    /// Two values stacked in one cell
    Dual,
    /// A single large value
    Single,
    /// Month, weekday and event summary lines
    CalendarSmall,
    /// Day of month and days-remaining count
    CalendarBig,
    /// Roster member name and symbols
    RosterName,
    /// Roster last-seen time
    RosterTime,
}

impl TextSize {
    /// Monospaced font for this role
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Label => &PROFONT_14_POINT,
            TextSize::Dual | TextSize::CalendarSmall | TextSize::RosterName => &PROFONT_18_POINT,
            TextSize::Single | TextSize::CalendarBig | TextSize::RosterTime => &PROFONT_24_POINT,
        }
    }

    /// Glyph cell height in pixels
    pub fn line_height(&self) -> u32 {
        self.font().character_size.height
    }

    /// Glyph advance in pixels
    pub fn char_width(&self) -> u32 {
        self.font()
            .character_size
            .width
            .saturating_add(self.font().character_spacing)
    }

    /// Pixel width of `text` in this size
    pub fn measure(&self, text: &str) -> u32 {
        text_width(text, self.font())
    }
}

/// Label component for text anchored at a point
pub struct Label<'a> {
    text: &'a str,
    color: AcepColor,
    size: TextSize,
    anchor: Anchor,
}

impl<'a> Label<'a> {
    /// Create a new black, centred label
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            color: AcepColor::Black,
            size: TextSize::Label,
            anchor: Anchor::CENTER,
        }
    }

    /// Set text color
    pub fn color(mut self, color: AcepColor) -> Self {
        self.color = color;
        self
    }

    /// Set text size
    pub fn size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }

    /// Set which point of the text sits at the render position
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Get text dimensions
    pub fn dimensions(&self) -> Size {
        Size::new(self.size.measure(self.text), self.size.line_height())
    }

    /// Render label to display
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = AcepColor>,
    {
        draw_text(
            display,
            self.text,
            position,
            self.anchor,
            self.size.font(),
            self.color,
        )
    }
}
