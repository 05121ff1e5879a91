//! Named converters applied to raw values before display

use crate::error::ResolveError;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Built-in converter, resolved from its configuration name at load time
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Converter {
    /// Degrees to an 8-point compass label
    WindDirection,
    /// First five characters (`"08:15:00"` → `"08:15"`)
    Time,
    /// ISO-8601 timestamp to local `HH:MM`
    Hhmm,
    /// Metres per second to kilometres per hour
    MsToKmh,
}

impl Converter {
    /// Every converter
    pub const ALL: [Converter; 4] = [
        Converter::WindDirection,
        Converter::Time,
        Converter::Hhmm,
        Converter::MsToKmh,
    ];

    /// Look up a converter by its configuration name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Configuration name
    pub fn name(self) -> &'static str {
        match self {
            Converter::WindDirection => "windDirection",
            Converter::Time => "time",
            Converter::Hhmm => "hhmm",
            Converter::MsToKmh => "msToKmh",
        }
    }

    /// Apply to a raw string
    pub fn apply(self, input: &str) -> Result<String, ResolveError> {
        let fail = || ResolveError::Convert {
            converter: self.name(),
            input: input.to_string(),
        };

        match self {
            Converter::WindDirection => {
                let degrees = parse_number(input).ok_or_else(fail)?;
                Ok(compass_point(degrees).to_string())
            }
            Converter::Time => Ok(input.chars().take(5).collect()),
            Converter::Hhmm => local_hhmm(input).ok_or_else(fail),
            Converter::MsToKmh => {
                let ms = parse_number(input).ok_or_else(fail)?;
                Ok((ms * 3.6).to_string())
            }
        }
    }
}

pub(crate) fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 8-point compass label for a bearing in degrees
///
/// Sectors are 45° wide and centred on each point; a value exactly on a
/// boundary belongs to the point clockwise of it.
///
/// ```
/// use feeds::convert::compass_point;
///
/// assert_eq!(compass_point(22.4), "N");
/// assert_eq!(compass_point(22.5), "NE");
/// assert_eq!(compass_point(359.0), "N");
/// ```
pub fn compass_point(degrees: f64) -> &'static str {
    const POINTS: [(f64, &str); 8] = [
        (22.5, "N"),
        (67.5, "NE"),
        (112.5, "E"),
        (157.5, "SE"),
        (202.5, "S"),
        (247.5, "SW"),
        (292.5, "W"),
        (337.5, "NW"),
    ];
    POINTS
        .iter()
        .find(|(limit, _)| degrees < *limit)
        .map_or("N", |(_, point)| point)
}

/// Parse an ISO-8601 timestamp and format it as local `HH:MM`
///
/// Timestamps without an offset are taken as local time already.
fn local_hhmm(input: &str) -> Option<String> {
    let input = input.trim();
    let local = match DateTime::parse_from_rfc3339(input) {
        Ok(dt) => dt.with_timezone(&Local),
        Err(_) => {
            let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f"))
                .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
                .ok()?;
            Local.from_local_datetime(&naive).earliest()?
        }
    };
    Some(local.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_parse_names() {
        for c in Converter::ALL {
            assert_eq!(Converter::parse(c.name()), Some(c));
        }
        assert_eq!(Converter::parse("windDirection"), Some(Converter::WindDirection));
        assert_eq!(Converter::parse("WindDirection"), None);
        assert_eq!(Converter::parse("celsius"), None);
    }

    #[test]
    fn test_compass_boundaries() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(22.4), "N");
        assert_eq!(compass_point(22.5), "NE");
        assert_eq!(compass_point(90.0), "E");
        assert_eq!(compass_point(180.0), "S");
        assert_eq!(compass_point(270.0), "W");
        assert_eq!(compass_point(337.4), "NW");
        assert_eq!(compass_point(337.5), "N");
        assert_eq!(compass_point(359.0), "N");
    }

    #[test]
    fn test_wind_direction_from_string() {
        assert_eq!(Converter::WindDirection.apply("200").unwrap(), "S");
        assert_eq!(Converter::WindDirection.apply(" 45.0 ").unwrap(), "NE");
        assert!(matches!(
            Converter::WindDirection.apply("calm"),
            Err(ResolveError::Convert { converter: "windDirection", .. })
        ));
    }

    #[test]
    fn test_time_truncates() {
        assert_eq!(Converter::Time.apply("08:15:00").unwrap(), "08:15");
        assert_eq!(Converter::Time.apply("8:1").unwrap(), "8:1");
    }

    #[test]
    fn test_hhmm_naive_is_local() {
        assert_eq!(Converter::Hhmm.apply("2026-10-19T08:15:00").unwrap(), "08:15");
        assert_eq!(Converter::Hhmm.apply("2026-10-19 17:45:12.5").unwrap(), "17:45");
    }

    #[test]
    fn test_hhmm_with_offset_converts_to_local() {
        let input = "2026-10-19T08:15:00+00:00";
        let expected = Utc
            .with_ymd_and_hms(2026, 10, 19, 8, 15, 0)
            .unwrap()
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string();
        assert_eq!(Converter::Hhmm.apply(input).unwrap(), expected);
        assert_eq!(Converter::Hhmm.apply("2026-10-19T08:15:00Z").unwrap(), expected);
        assert!(Converter::Hhmm.apply("yesterday").is_err());
    }

    #[test]
    fn test_ms_to_kmh() {
        assert_eq!(Converter::MsToKmh.apply("10").unwrap(), "36");
        assert!(Converter::MsToKmh.apply("fast").is_err());
    }
}
