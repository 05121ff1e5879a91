//! Pimoroni Inky Impression panels
//!
//! A 7-colour ACeP panel driven over SPI. The controller RAM is landscape, so
//! a portrait layout has to be rotated before transfer.

use crate::display_spec::DisplaySpec;

/// Pimoroni Inky Impression 7.3" (800×480, AC073TC1A)
///
/// - Colors: black, white, green, blue, red, yellow, orange
/// - Full refresh: ~30s, with many visible flashes
/// - No partial refresh
pub const INKY_IMPRESSION_7_3: DisplaySpec = DisplaySpec {
    name: "Pimoroni Inky Impression 7.3\"",
    width: 800,
    height: 480,
    controller: "AC073TC1A",
};
