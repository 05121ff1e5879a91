//! Grid cell widgets
//!
//! A cell's look is picked once per draw from its explicit tag, whether it has
//! a title, and how many values it resolved to. Every combination maps to
//! exactly one [`Variant`].

use crate::icon::IconSet;
use crate::label::{Label, TextSize};
use crate::roster::{Roster, RosterMember};
use eink_emulator::AcepColor;
use eink_system::render::{draw_frame, fraction_point};
use eink_system::style::{Anchor, FrameStyle};
use embedded_graphics::{prelude::*, primitives::Rectangle};

/// Explicit variant requested in configuration
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VariantTag {
    /// Bitmap looked up by the first value
    Icon,
    /// Presence roster from a dedicated source
    Roster,
}

impl VariantTag {
    /// Parse a configuration tag; `weathericon` and `whome` are accepted
    /// aliases
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "icon" | "weathericon" => Some(VariantTag::Icon),
            "roster" | "whome" => Some(VariantTag::Roster),
            _ => None,
        }
    }
}

/// Rendering template of a grid cell
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Variant {
    /// One large centred value, red border
    Single,
    /// Two stacked values, green border
    Dual,
    /// Title plus one value, black border
    TitledSingle,
    /// Title plus two values, blue border
    TitledDual,
    /// Bitmap icon, red border
    Icon,
    /// Presence roster, blue border
    Roster,
}

impl Variant {
    /// Pick the variant for a cell
    ///
    /// ```
    /// use eink_components::cell::{Variant, VariantTag};
    ///
    /// assert_eq!(Variant::select(None, true, 1), Variant::TitledSingle);
    /// assert_eq!(Variant::select(None, false, 2), Variant::Dual);
    /// assert_eq!(Variant::select(Some(VariantTag::Icon), true, 2), Variant::Icon);
    /// ```
    pub fn select(tag: Option<VariantTag>, has_title: bool, value_count: usize) -> Self {
        match (tag, has_title, value_count >= 2) {
            (Some(VariantTag::Icon), _, _) => Variant::Icon,
            (Some(VariantTag::Roster), _, _) => Variant::Roster,
            (None, true, true) => Variant::TitledDual,
            (None, true, false) => Variant::TitledSingle,
            (None, false, true) => Variant::Dual,
            (None, false, false) => Variant::Single,
        }
    }

    /// Border colour of this variant
    pub fn border(self) -> AcepColor {
        match self {
            Variant::Single | Variant::Icon => AcepColor::Red,
            Variant::TitledSingle => AcepColor::Black,
            Variant::Dual => AcepColor::Green,
            Variant::TitledDual | Variant::Roster => AcepColor::Blue,
        }
    }

    /// Short name for logs
    pub fn name(self) -> &'static str {
        match self {
            Variant::Single => "single",
            Variant::Dual => "dual",
            Variant::TitledSingle => "titled-single",
            Variant::TitledDual => "titled-dual",
            Variant::Icon => "icon",
            Variant::Roster => "roster",
        }
    }
}

/// Data drawn inside a cell
#[derive(Debug, Clone, Copy, Default)]
pub struct CellContent<'a> {
    /// Optional title, top-left
    pub title: Option<&'a str>,
    /// Resolved value strings, in declaration order
    pub values: &'a [String],
    /// Roster members, only read by [`Variant::Roster`]
    pub roster: &'a [RosterMember],
}

/// Shared drawing parameters for every cell
#[derive(Debug, Clone, Copy)]
pub struct CellStyle<'a> {
    /// Inner padding for titles
    pub padding: u32,
    /// Outline style
    pub frame: FrameStyle,
    /// Icon bitmaps for [`Variant::Icon`]
    pub icons: &'a IconSet,
}

/// Grid cell widget
pub struct Cell<'a> {
    variant: Variant,
    content: CellContent<'a>,
}

impl<'a> Cell<'a> {
    /// Create a cell with an already selected variant
    pub fn new(variant: Variant, content: CellContent<'a>) -> Self {
        Self { variant, content }
    }

    /// Variant this cell draws as
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Render the cell into `rect`
    ///
    /// Missing values are simply not drawn; the border is always drawn.
    pub fn render<D>(
        &self,
        display: &mut D,
        rect: Rectangle,
        style: &CellStyle<'_>,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = AcepColor>,
    {
        draw_frame(display, rect, self.variant.border(), &style.frame)?;

        let values = self.content.values;
        let center_x = rect.top_left.x + (rect.size.width / 2) as i32;
        match self.variant {
            Variant::Single => {
                let at = fraction_point(&rect, (1, 2), (1, 2));
                self.value(display, values.first(), TextSize::Single, at)?;
            }
            Variant::Dual => {
                let upper = fraction_point(&rect, (1, 2), (1, 4));
                let lower = fraction_point(&rect, (1, 2), (3, 4));
                self.value(display, values.first(), TextSize::Dual, upper)?;
                self.value(display, values.get(1), TextSize::Dual, lower)?;
            }
            Variant::TitledSingle => {
                let band = self.title(display, &rect, style)?;
                let remaining = rect.size.height.saturating_sub(band);
                let at = Point::new(center_x, rect.top_left.y + (band + remaining / 2) as i32);
                self.value(display, values.first(), TextSize::Single, at)?;
            }
            Variant::TitledDual => {
                self.title(display, &rect, style)?;
                let upper = fraction_point(&rect, (1, 2), (1, 2));
                let lower = fraction_point(&rect, (1, 2), (3, 4));
                self.value(display, values.first(), TextSize::Dual, upper)?;
                self.value(display, values.get(1), TextSize::Dual, lower)?;
            }
            Variant::Icon => match values.first().and_then(|id| style.icons.get(id)) {
                Some(icon) => icon.render_centered(display, &rect)?,
                None => {
                    let id = values.first().map(String::as_str).unwrap_or_default();
                    tracing::warn!(icon = id, "icon bitmap missing, drawing frame only");
                }
            },
            Variant::Roster => {
                Roster::new(self.content.roster).render_inside(display, rect, style.padding)?;
            }
        }
        Ok(())
    }

    /// Draw the title, returning the height of the band it occupies
    fn title<D>(
        &self,
        display: &mut D,
        rect: &Rectangle,
        style: &CellStyle<'_>,
    ) -> Result<u32, D::Error>
    where
        D: DrawTarget<Color = AcepColor>,
    {
        let padding = style.padding as i32;
        if let Some(title) = self.content.title {
            Label::new(title)
                .size(TextSize::Label)
                .anchor(Anchor::TOP_LEFT)
                .render(display, rect.top_left + Point::new(padding, padding))?;
        }
        Ok(style.padding.saturating_add(TextSize::Label.line_height()))
    }

    fn value<D>(
        &self,
        display: &mut D,
        value: Option<&String>,
        size: TextSize,
        at: Point,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = AcepColor>,
    {
        match value {
            Some(text) => Label::new(text).size(size).render(display, at),
            None => Ok(()),
        }
    }
}
