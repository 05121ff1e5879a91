//! E-Ink UI Components
//!
//! Widgets for the status panel, built on the eink-system layout helpers and
//! drawn in the ACeP palette.
//!
//! # Components
//!
//! - `Cell` - Grid cell in one of six variants (single, dual, titled, icon, roster)
//! - `Calendar` - Month band, day of month, weekday
//! - `NextUp` - Earliest upcoming event with days remaining
//! - `StatusStrip` - One-line message
//! - `Label` - Anchored text
//! - `IconSet` - PNG icon bitmaps by id
//!
//! # Example
//!
//! ```
//! use eink_components::prelude::*;
//! use eink_emulator::Framebuffer;
//! use eink_system::prelude::*;
//!
//! let layout = PanelLayout::default();
//! let icons = IconSet::new();
//! let style = CellStyle { padding: 10, frame: FrameStyle::default(), icons: &icons };
//! let values = vec!["21°".to_string()];
//! let content = CellContent { title: Some("Temp"), values: &values, ..Default::default() };
//!
//! let mut frame = Framebuffer::new(480, 800);
//! Cell::new(Variant::select(None, true, values.len()), content)
//!     .render(&mut frame, layout.cell_rect(0), &style)
//!     .ok();
//! ```

pub mod calendar;
pub mod cell;
pub mod icon;
pub mod label;
pub mod next_up;
pub mod roster;
pub mod status_strip;

pub mod prelude {
    //! All widgets and their data types

    pub use crate::calendar::*;
    pub use crate::cell::*;
    pub use crate::icon::*;
    pub use crate::label::*;
    pub use crate::next_up::*;
    pub use crate::roster::*;
    pub use crate::status_strip::*;
}
