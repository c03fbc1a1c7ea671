use crate::Instant;
use crate::consts::{FULL_FORMAT, ISO_DATE_FORMAT};
use crate::types::Weekday;
use chrono::Datelike;
use chrono_tz::Tz;

/// How wide to render a weekday name in locale-style output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayStyle {
    /// "Tuesday"
    #[default]
    Long,
    /// "Tue"
    Short,
    /// "T"
    Narrow,
}

impl WeekdayStyle {
    fn render(self, weekday: Weekday) -> &'static str {
        match self {
            Self::Long => weekday.long_name(),
            Self::Short => weekday.short_name(),
            Self::Narrow => weekday.narrow_name(),
        }
    }
}

/// Output style for [`Instant::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// Long form including the weekday name, e.g. "Tuesday, January 14, 2025"
    Full,
    /// Date without time, ISO form, e.g. "2025-01-14"
    DateOnly,
    /// Weekday name rendered in an explicit time zone (host local zone when
    /// `time_zone` is `None`)
    Locale {
        weekday: WeekdayStyle,
        time_zone: Option<Tz>,
    },
}

/// Error type for formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The name is not a known IANA time zone identifier.
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
}

/// Resolves an IANA time zone identifier such as "Asia/Kolkata".
///
/// # Errors
/// Returns `FormatError::UnknownTimeZone` if the identifier is not in the
/// bundled time-zone database.
pub fn resolve_zone(name: &str) -> Result<Tz, FormatError> {
    name.parse()
        .map_err(|_| FormatError::UnknownTimeZone(name.to_owned()))
}

impl Instant {
    /// Renders this instant as a human-readable string.
    /// Returns `None` for the invalid sentinel.
    pub fn format(&self, style: &FormatStyle) -> Option<String> {
        match style {
            FormatStyle::Full => self
                .local_datetime()
                .map(|dt| dt.format(FULL_FORMAT).to_string()),
            FormatStyle::DateOnly => self
                .local_datetime()
                .map(|dt| dt.format(ISO_DATE_FORMAT).to_string()),
            FormatStyle::Locale { weekday, time_zone } => {
                let day = match time_zone {
                    Some(tz) => Weekday::from(self.zoned(tz)?.weekday()),
                    None => Weekday::from(self.local_datetime()?.weekday()),
                };
                Some(weekday.render(day).to_owned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2025-01-14T21:00:00Z; Asia/Kolkata (UTC+05:30) is already on
    // Wednesday the 15th at that point.
    const TUESDAY_EVENING_UTC: i64 = 1_736_888_400_000;

    #[test]
    fn test_full_format() {
        let instant = Instant::from_ymd(2025, 0, 14);
        assert_eq!(
            instant.format(&FormatStyle::Full).unwrap(),
            "Tuesday, January 14, 2025"
        );
    }

    #[test]
    fn test_date_only_format() {
        let instant = Instant::from_ymd(2025, 0, 14);
        assert_eq!(
            instant.format(&FormatStyle::DateOnly).unwrap(),
            "2025-01-14"
        );
    }

    #[test]
    fn test_locale_weekday_in_explicit_zone() {
        let instant = Instant::from_epoch_millis(TUESDAY_EVENING_UTC);
        let kolkata = resolve_zone("Asia/Kolkata").unwrap();
        let utc = resolve_zone("Etc/UTC").unwrap();

        let style = FormatStyle::Locale {
            weekday: WeekdayStyle::Long,
            time_zone: Some(kolkata),
        };
        assert_eq!(instant.format(&style).unwrap(), "Wednesday");

        let style = FormatStyle::Locale {
            weekday: WeekdayStyle::Long,
            time_zone: Some(utc),
        };
        assert_eq!(instant.format(&style).unwrap(), "Tuesday");
    }

    #[test]
    fn test_locale_weekday_widths() {
        let instant = Instant::from_epoch_millis(TUESDAY_EVENING_UTC);
        let kolkata = resolve_zone("Asia/Kolkata").unwrap();

        let short = FormatStyle::Locale {
            weekday: WeekdayStyle::Short,
            time_zone: Some(kolkata),
        };
        assert_eq!(instant.format(&short).unwrap(), "Wed");

        let narrow = FormatStyle::Locale {
            weekday: WeekdayStyle::Narrow,
            time_zone: Some(kolkata),
        };
        assert_eq!(instant.format(&narrow).unwrap(), "W");
    }

    #[test]
    fn test_locale_weekday_defaults_to_local_zone() {
        // from_ymd interprets components in the local zone, so the weekday
        // of local midnight is host-independent
        let instant = Instant::from_ymd(2025, 0, 14);
        let style = FormatStyle::Locale {
            weekday: WeekdayStyle::Long,
            time_zone: None,
        };
        assert_eq!(instant.format(&style).unwrap(), "Tuesday");
    }

    #[test]
    fn test_invalid_instant_formats_to_none() {
        let invalid = Instant::parse("not-a-date");
        assert_eq!(invalid.format(&FormatStyle::Full), None);
        assert_eq!(invalid.format(&FormatStyle::DateOnly), None);
        let style = FormatStyle::Locale {
            weekday: WeekdayStyle::Long,
            time_zone: None,
        };
        assert_eq!(invalid.format(&style), None);
    }

    #[test]
    fn test_resolve_zone_unknown() {
        let result = resolve_zone("Not/AZone");
        assert!(matches!(result, Err(FormatError::UnknownTimeZone(_))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Unknown time zone: Not/AZone"
        );
    }

    #[test]
    fn test_weekday_style_default_is_long() {
        assert_eq!(WeekdayStyle::default(), WeekdayStyle::Long);
    }
}
