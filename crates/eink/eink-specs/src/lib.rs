//! E-Paper Display Specifications
//!
//! Physical characteristics of the panels the status display can drive.
//!
//! # Example
//!
//! ```
//! use eink_specs::displays::INKY_IMPRESSION_7_3;
//!
//! let spec = INKY_IMPRESSION_7_3;
//! assert_eq!(spec.native_size(), (800, 480));
//! assert_eq!(spec.controller, "AC073TC1A");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod display_spec;
pub mod displays;

pub use display_spec::DisplaySpec;
