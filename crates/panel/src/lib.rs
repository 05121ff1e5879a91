//! E-paper status panel
//!
//! Binds values from JSON feeds into a fixed widget grid and redraws the panel
//! whenever a feed changes:
//!
//! - [`config`] loads the TOML file and validates it into a [`PanelPlan`]
//! - [`render`] draws one 480×800 frame from the plan and a feed snapshot
//! - [`controller`] runs the per-minute fetch/redraw loop
//!
//! ```
//! use chrono::NaiveDate;
//! use eink_components::icon::IconSet;
//! use eink_emulator::AcepColor;
//! use panel::{render_frame, PanelPlan};
//! use feeds::snapshot::Snapshot;
//!
//! let plan = PanelPlan::from_toml("").unwrap();
//! let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
//! let frame = render_frame(&plan, &Snapshot::new(), today, &IconSet::new());
//!
//! assert_eq!((frame.width(), frame.height()), (480, 800));
//! assert!(frame.count(AcepColor::Red) > 0);
//! ```

pub mod config;
pub mod controller;
pub mod render;

pub use config::{ConfigError, PanelPlan};
pub use controller::RefreshController;
pub use render::render_frame;
