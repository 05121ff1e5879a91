//! Panel configuration
//!
//! The TOML file is deserialized into `Raw*` structs that mirror it one to
//! one, then validated into a [`PanelPlan`]. Validation is the only place a
//! configuration error can come from; after it every converter, variant tag
//! and path expression is in compiled form.
//!
//! ```toml
//! [location]
//! lat = 51.5
//! long = -0.12
//!
//! [[sources]]
//! name = "wx"
//! url = "https://api.example/onecall?lat={lat}&lon={long}&appid={apikey}"
//! apikey = "..."
//! update_interval = 10
//!
//! [[boxes]]
//! title = "Temp"
//! values = [{ source = "wx", path = "current.temp", round = 0, suffix = "°" }]
//! ```

use eink_components::cell::VariantTag;
use eink_components::status_strip::DEFAULT_MESSAGE;
use eink_emulator::{EmulatorConfig, Rotation};
use eink_system::layout::LayoutConstants;
use eink_system::style::FrameStyle;
use embedded_graphics::prelude::Size;
use feeds::convert::Converter;
use feeds::error::PathError;
use feeds::resolve::ValueSpec;
use feeds::scheduler::DEFAULT_FETCH_TIMEOUT;
use feeds::source::{Location, Source, UpdateInterval};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration could not be loaded; fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {path}: {err}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        err: std::io::Error,
    },

    /// Not valid TOML or a field has the wrong type
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Two sources share a name
    #[error("source `{0}` is defined twice")]
    DuplicateSource(String),

    /// Converter name not in the built-in set
    #[error("box {box_index}: unknown converter `{name}`")]
    UnknownConverter {
        /// Grid index of the box
        box_index: usize,
        /// Name as written
        name: String,
    },

    /// Variant tag not recognised
    #[error("box {box_index}: unknown variant `{tag}`")]
    UnknownVariant {
        /// Grid index of the box
        box_index: usize,
        /// Tag as written
        tag: String,
    },

    /// Path expression does not parse
    #[error("box {box_index}: {err}")]
    BadPath {
        /// Grid index of the box
        box_index: usize,
        /// Parse error
        #[source]
        err: PathError,
    },

    /// A required field is missing
    #[error("{context}: missing `{field}`")]
    MissingField {
        /// Where the field was expected
        context: String,
        /// Field name
        field: &'static str,
    },

    /// Rotation other than 0, 90, 180 or 270
    #[error("display rotation must be 0, 90, 180 or 270, got {0}")]
    InvalidRotation(u16),

    /// `update_interval = 0`
    #[error("source `{0}`: update interval must be at least 1 minute")]
    ZeroInterval(String),

    /// `[fetch] timeout_secs = 0`
    #[error("fetch timeout must be at least 1 second")]
    ZeroTimeout,
}

// ============================================================================
// Raw (as written) configuration
// ============================================================================

/// Configuration file as written
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Coordinates for `{lat}` / `{long}`
    #[serde(default)]
    pub location: Location,
    /// Data sources
    #[serde(default)]
    pub sources: Vec<RawSource>,
    /// Grid boxes in display order
    #[serde(default)]
    pub boxes: Vec<RawBox>,
    /// Upcoming-event cell
    pub next_up: Option<RawNextUp>,
    /// Status strip
    #[serde(default)]
    pub status: RawStatus,
    /// Sizing overrides
    #[serde(default)]
    pub layout: RawLayout,
    /// Output device
    #[serde(default)]
    pub display: RawDisplay,
    /// Fetch behaviour
    #[serde(default)]
    pub fetch: RawFetch,
    /// Icon bitmaps
    pub icons: Option<RawIcons>,
}

/// `[[sources]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSource {
    /// Unique name
    pub name: String,
    /// URL template
    pub url: String,
    /// Substituted into `{apikey}`
    pub apikey: Option<String>,
    /// Header templates
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Minutes between refetches, or minutes past the hour
    pub update_interval: Option<UpdateInterval>,
}

/// `[[boxes]]` entry
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawBox {
    /// Title drawn top-left
    pub title: Option<String>,
    /// Explicit variant (`icon`, `roster`)
    pub variant: Option<String>,
    /// Source of roster members
    pub source: Option<String>,
    /// Values in display order
    #[serde(default)]
    pub values: Vec<RawValue>,
}

/// One value of a box
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawValue {
    /// Source name
    pub source: String,
    /// Path expression
    pub path: String,
    /// Converter name
    pub converter: Option<String>,
    /// Rounding precision
    pub round: Option<u32>,
    /// Text before the value
    pub prefix: Option<String>,
    /// Text after the value
    pub suffix: Option<String>,
}

/// `[next_up]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNextUp {
    /// Source whose document is the event list
    pub source: String,
}

/// `[status]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawStatus {
    /// Message text
    pub message: Option<String>,
}

/// `[layout]`; every field overrides one sizing constant
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLayout {
    /// `[width, height]` of the canvas
    pub canvas: Option<[u32; 2]>,
    /// Gap between regions
    pub cell_spacing: Option<u32>,
    /// Text padding
    pub padding: Option<u32>,
    /// `[width, height]` of the calendar
    pub calendar: Option<[u32; 2]>,
    /// `[width, height]` of the next-up cell
    pub next_up: Option<[u32; 2]>,
    /// `[width, height]` of a grid cell
    pub grid_cell: Option<[u32; 2]>,
    /// Cells per row
    pub row_width: Option<u32>,
    /// Grid rows above the status strip
    pub grid_rows: Option<u32>,
    /// Status strip height
    pub status_height: Option<u32>,
    /// Outline corner radius
    pub corner_radius: Option<u32>,
    /// Outline width
    pub stroke: Option<u32>,
}

/// `[display]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawDisplay {
    /// PNG written on every present
    pub output: Option<PathBuf>,
    /// Canvas rotation in degrees clockwise
    pub rotation: Option<u16>,
    /// Simulated refresh time
    pub refresh_delay_ms: Option<u64>,
}

/// `[fetch]`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFetch {
    /// Per-request timeout
    pub timeout_secs: Option<u64>,
}

/// `[icons]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawIcons {
    /// Directory of `<id>.png` files
    pub dir: PathBuf,
    /// Invert artwork before masking, so dark-on-white icons become ink
    #[serde(default = "default_invert")]
    pub invert: bool,
}

fn default_invert() -> bool {
    true
}

// ============================================================================
// Validated plan
// ============================================================================

/// One grid box, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlan {
    /// Title drawn top-left
    pub title: Option<String>,
    /// Explicit variant
    pub tag: Option<VariantTag>,
    /// Roster source (roster boxes only)
    pub source: Option<String>,
    /// Compiled values
    pub values: Vec<ValueSpec>,
}

/// Icon loading settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSettings {
    /// Directory of `<id>.png` files
    pub dir: PathBuf,
    /// Invert artwork before masking, so dark-on-white icons become ink
    pub invert: bool,
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPlan {
    /// Coordinates for URL templates
    pub location: Location,
    /// Sources in declaration order
    pub sources: Vec<Source>,
    /// Boxes in grid order
    pub boxes: Vec<BoxPlan>,
    /// Source feeding the upcoming-event cell
    pub next_up_source: Option<String>,
    /// Status strip message
    pub status_message: String,
    /// Sizing constants
    pub layout: LayoutConstants,
    /// Cell outline style
    pub frame: FrameStyle,
    /// Emulated display settings
    pub display: EmulatorConfig,
    /// Bound on each fetch
    pub fetch_timeout: Duration,
    /// Icon settings; `None` loads no icons
    pub icons: Option<IconSettings>,
}

impl PanelPlan {
    /// Read and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            err,
        })?;
        let plan = Self::from_toml(&text)?;
        tracing::info!(
            path = %path.display(),
            sources = plan.sources.len(),
            boxes = plan.boxes.len(),
            "configuration loaded"
        );
        Ok(plan)
    }

    /// Parse and validate TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(text)?;
        raw.validate()
    }
}

impl RawConfig {
    /// Compile into a [`PanelPlan`]
    pub fn validate(self) -> Result<PanelPlan, ConfigError> {
        let mut names = HashSet::new();
        let mut sources = Vec::with_capacity(self.sources.len());
        for raw in self.sources {
            if !names.insert(raw.name.clone()) {
                return Err(ConfigError::DuplicateSource(raw.name));
            }
            sources.push(raw.into_source()?);
        }

        let boxes = self
            .boxes
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.into_plan(i))
            .collect::<Result<Vec<_>, _>>()?;

        // Unknown sources only fail the values that use them
        for (i, plan) in boxes.iter().enumerate() {
            let referenced = plan
                .values
                .iter()
                .map(|v| v.source.as_str())
                .chain(plan.source.as_deref());
            for name in referenced {
                if !names.contains(name) {
                    tracing::warn!(box_index = i, source = name, "box refers to an undefined source");
                }
            }
        }

        let layout = self.layout.constants();
        let capacity = layout.row_width.max(1).saturating_mul(layout.grid_rows) as usize;
        if boxes.len() > capacity {
            tracing::warn!(boxes = boxes.len(), capacity, "more boxes than grid cells");
        }

        let defaults = FrameStyle::default();
        let frame = FrameStyle {
            radius: self.layout.corner_radius.unwrap_or(defaults.radius),
            stroke: self.layout.stroke.unwrap_or(defaults.stroke),
        };

        let fetch_timeout = match self.fetch.timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_FETCH_TIMEOUT,
        };

        Ok(PanelPlan {
            location: self.location,
            sources,
            boxes,
            next_up_source: self.next_up.map(|n| n.source),
            status_message: self
                .status
                .message
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            layout,
            frame,
            display: self.display.emulator_config()?,
            fetch_timeout,
            icons: self.icons.map(|i| IconSettings {
                dir: i.dir,
                invert: i.invert,
            }),
        })
    }
}

impl RawSource {
    fn into_source(self) -> Result<Source, ConfigError> {
        if self.update_interval == Some(UpdateInterval::Every(0)) {
            return Err(ConfigError::ZeroInterval(self.name));
        }
        Ok(Source {
            name: self.name,
            url: self.url,
            apikey: self.apikey,
            headers: self.headers.into_iter().collect(),
            interval: self.update_interval,
        })
    }
}

impl RawBox {
    fn into_plan(self, box_index: usize) -> Result<BoxPlan, ConfigError> {
        let tag = match self.variant {
            None => None,
            Some(tag) => match VariantTag::parse(&tag) {
                Some(parsed) => Some(parsed),
                None => return Err(ConfigError::UnknownVariant { box_index, tag }),
            },
        };

        if tag == Some(VariantTag::Roster) && self.source.is_none() {
            return Err(ConfigError::MissingField {
                context: format!("roster box {box_index}"),
                field: "source",
            });
        }

        let values = self
            .values
            .into_iter()
            .map(|v| v.compile(box_index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BoxPlan {
            title: self.title,
            tag,
            source: self.source,
            values,
        })
    }
}

impl RawValue {
    fn compile(self, box_index: usize) -> Result<ValueSpec, ConfigError> {
        let path = self
            .path
            .parse()
            .map_err(|err| ConfigError::BadPath { box_index, err })?;

        let converter = match self.converter {
            None => None,
            Some(name) => match Converter::parse(&name) {
                Some(c) => Some(c),
                None => return Err(ConfigError::UnknownConverter { box_index, name }),
            },
        };

        Ok(ValueSpec {
            source: self.source,
            path,
            converter,
            round: self.round,
            prefix: self.prefix,
            suffix: self.suffix,
        })
    }
}

impl RawLayout {
    fn constants(&self) -> LayoutConstants {
        let size = |v: Option<[u32; 2]>, default: Size| v.map_or(default, |[w, h]| Size::new(w, h));
        let base = LayoutConstants::default();
        LayoutConstants {
            canvas: size(self.canvas, base.canvas),
            cell_spacing: self.cell_spacing.unwrap_or(base.cell_spacing),
            padding: self.padding.unwrap_or(base.padding),
            calendar: size(self.calendar, base.calendar),
            next_up: size(self.next_up, base.next_up),
            grid_cell: size(self.grid_cell, base.grid_cell),
            row_width: self.row_width.unwrap_or(base.row_width),
            grid_rows: self.grid_rows.unwrap_or(base.grid_rows),
            status_height: self.status_height.unwrap_or(base.status_height),
        }
    }
}

impl RawDisplay {
    fn emulator_config(&self) -> Result<EmulatorConfig, ConfigError> {
        let mut config = EmulatorConfig::default();
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(degrees) = self.rotation {
            config.rotation =
                Rotation::from_degrees(degrees).ok_or(ConfigError::InvalidRotation(degrees))?;
        }
        if let Some(ms) = self.refresh_delay_ms {
            config.refresh_delay = Duration::from_millis(ms);
        }
        Ok(config)
    }
}
