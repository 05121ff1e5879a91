//! E-Ink Layout System
//!
//! Fixed-anchor layout and drawing helpers for the status panel.
//!
//! # Architecture
//!
//! - Layout: [`LayoutConstants`](layout::LayoutConstants) →
//!   [`PanelLayout`](layout::PanelLayout) with calendar, next-up, grid and
//!   status regions
//! - Wrapping: greedy pixel-width [`wrap`](wrap::wrap)
//! - Style: text anchors and rounded frame style
//! - Rendering: frame, header band and anchored text on any `DrawTarget`
//!
//! # Example
//!
//! ```
//! use eink_system::prelude::*;
//! use embedded_graphics::prelude::*;
//!
//! let layout = PanelLayout::new(&LayoutConstants::default());
//! assert_eq!(layout.cell_rect(4).top_left, Point::new(161, 282));
//! ```

pub mod layout;
pub mod render;
pub mod style;
pub mod wrap;

pub mod prelude {
    //! Commonly used layout and rendering items

    pub use crate::layout::{GridLayout, LayoutConstants, PanelLayout};
    pub use crate::render::*;
    pub use crate::style::{Anchor, FrameStyle, HAnchor, VAnchor};
    pub use crate::wrap::wrap;
}
