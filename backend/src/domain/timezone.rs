//! US timezone options and detection.
//!
//! The onboarding flow only offers a small, user-friendly set of US
//! zones. Zone ids are IANA names; chrono-tz backs the full-database
//! check so an id that is real-but-unsupported can be told apart from
//! one that is not a timezone at all.

use chrono_tz::Tz;
use tracing::{debug, warn};

/// A selectable US timezone option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsTimezone {
    /// IANA timezone id.
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
}

/// Supported US timezones, in rough east-to-west order.
pub const US_TIMEZONES: [UsTimezone; 8] = [
    UsTimezone { value: "America/New_York", label: "Eastern (New York)" },
    UsTimezone { value: "America/Chicago", label: "Central (Chicago)" },
    UsTimezone { value: "America/Denver", label: "Mountain (Denver)" },
    // No DST
    UsTimezone { value: "America/Phoenix", label: "Arizona (Phoenix)" },
    UsTimezone { value: "America/Los_Angeles", label: "Pacific (Los Angeles)" },
    UsTimezone { value: "America/Anchorage", label: "Alaska (Anchorage)" },
    UsTimezone { value: "America/Adak", label: "Aleutian (Adak)" },
    UsTimezone { value: "Pacific/Honolulu", label: "Hawaii (Honolulu)" },
];

/// True iff the id is one of the supported US zones.
pub fn is_us_timezone(tz: &str) -> bool {
    US_TIMEZONES.iter().any(|option| option.value == tz)
}

/// True iff the id exists in the IANA timezone database.
pub fn is_known_iana(tz: &str) -> bool {
    tz.parse::<Tz>().is_ok()
}

/// Safe default when detection fails or lands outside the US list.
pub fn fallback_us_timezone() -> &'static str {
    "America/Chicago"
}

/// Detect the system timezone, constrained to the supported US list.
///
/// Returns the system zone when it is one of [`US_TIMEZONES`], otherwise
/// the fallback.
pub fn detect_us_timezone() -> String {
    match iana_time_zone::get_timezone() {
        Ok(tz) if is_us_timezone(&tz) => tz,
        Ok(tz) => {
            debug!("System timezone {} is outside the US list, using fallback", tz);
            fallback_us_timezone().to_string()
        }
        Err(e) => {
            warn!("Failed to detect system timezone: {}", e);
            fallback_us_timezone().to_string()
        }
    }
}
