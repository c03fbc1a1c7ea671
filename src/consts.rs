/// Milliseconds per second, for epoch-offset conversions
pub const MILLIS_PER_SECOND: i64 = 1000;

/// Months per year, used when normalizing overflowed month components
pub const MONTHS_PER_YEAR: i64 = 12;

/// Days per week
pub const DAYS_PER_WEEK: u8 = 7;

/// Largest representable epoch offset in milliseconds (±100,000,000 days).
/// Offsets outside `-MAX_EPOCH_MILLIS..=MAX_EPOCH_MILLIS` are invalid.
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (legacy US format)
pub const MONTH_FIRST_SEPARATOR: char = '/';

/// Strict ISO 8601 date, `YYYY-MM-DD`
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
/// Strict ISO 8601 date-time with optional fractional seconds
pub const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// Month-first fallback with hyphens, `MM-DD-YYYY`
pub const MONTH_FIRST_HYPHEN_FORMAT: &str = "%m-%d-%Y";
/// Month-first fallback with slashes, `M/D/YYYY`
pub const MONTH_FIRST_SLASH_FORMAT: &str = "%m/%d/%Y";

/// Long human-readable form, e.g. "Tuesday, January 14, 2025"
pub const FULL_FORMAT: &str = "%A, %B %-d, %Y";
/// Canonical `Display` form: ISO 8601 UTC with milliseconds
pub const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
/// `Display` form of the invalid sentinel
pub const INVALID_DISPLAY: &str = "invalid";
