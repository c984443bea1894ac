use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of the time-of-day grid offered by the pickers.
pub const TIME_STEP_MINUTES: u32 = 30;

/// Summary text used when no day of the week is enabled.
pub const CLOSED_EVERY_DAY: &str = "Closed every day";

/// Day of the week used to index business hours. The week starts on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayKey {
    /// All seven days in week order.
    pub const ALL: [DayKey; 7] = [
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
        DayKey::Sat,
        DayKey::Sun,
    ];

    /// The weekday group used when collapsing the hours summary.
    pub const WEEKDAYS: [DayKey; 5] = [
        DayKey::Mon,
        DayKey::Tue,
        DayKey::Wed,
        DayKey::Thu,
        DayKey::Fri,
    ];

    /// The weekend group used when collapsing the hours summary.
    pub const WEEKEND: [DayKey; 2] = [DayKey::Sat, DayKey::Sun];

    /// Short display label ("Mon", "Tue", ...)
    pub fn label(&self) -> &'static str {
        match self {
            DayKey::Mon => "Mon",
            DayKey::Tue => "Tue",
            DayKey::Wed => "Wed",
            DayKey::Thu => "Thu",
            DayKey::Fri => "Fri",
            DayKey::Sat => "Sat",
            DayKey::Sun => "Sun",
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which end of a day's opening window is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeField {
    Start,
    End,
}

/// Opening hours for a single day.
///
/// Times are zero-padded 24-hour "HH:MM" strings, so lexicographic
/// comparison is equivalent to minute-of-day comparison. When `enabled`
/// is false the times are kept but not validated, so re-enabling a day
/// restores its previous window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHours {
    pub enabled: bool,
    pub start: String,
    pub end: String,
}

impl DayHours {
    pub fn open(start: &str, end: &str) -> Self {
        Self {
            enabled: true,
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn closed(start: &str, end: &str) -> Self {
        Self {
            enabled: false,
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

/// Weekly business hours: one `DayHours` per day, never partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub mon: DayHours,
    pub tue: DayHours,
    pub wed: DayHours,
    pub thu: DayHours,
    pub fri: DayHours,
    pub sat: DayHours,
    pub sun: DayHours,
}

impl Default for BusinessHours {
    /// Weekdays open 09:00–17:00, weekend closed (times kept at 10:00–14:00).
    fn default() -> Self {
        Self {
            mon: DayHours::open("09:00", "17:00"),
            tue: DayHours::open("09:00", "17:00"),
            wed: DayHours::open("09:00", "17:00"),
            thu: DayHours::open("09:00", "17:00"),
            fri: DayHours::open("09:00", "17:00"),
            sat: DayHours::closed("10:00", "14:00"),
            sun: DayHours::closed("10:00", "14:00"),
        }
    }
}

impl BusinessHours {
    /// Get the hours for a specific day.
    pub fn day(&self, day: DayKey) -> &DayHours {
        match day {
            DayKey::Mon => &self.mon,
            DayKey::Tue => &self.tue,
            DayKey::Wed => &self.wed,
            DayKey::Thu => &self.thu,
            DayKey::Fri => &self.fri,
            DayKey::Sat => &self.sat,
            DayKey::Sun => &self.sun,
        }
    }

    fn day_mut(&mut self, day: DayKey) -> &mut DayHours {
        match day {
            DayKey::Mon => &mut self.mon,
            DayKey::Tue => &mut self.tue,
            DayKey::Wed => &mut self.wed,
            DayKey::Thu => &mut self.thu,
            DayKey::Fri => &mut self.fri,
            DayKey::Sat => &mut self.sat,
            DayKey::Sun => &mut self.sun,
        }
    }

    /// Iterate over all days in week order.
    pub fn days(&self) -> impl Iterator<Item = (DayKey, &DayHours)> {
        DayKey::ALL.iter().map(move |&d| (d, self.day(d)))
    }

    /// Days currently marked open, in week order.
    pub fn enabled_days(&self) -> Vec<DayKey> {
        DayKey::ALL
            .iter()
            .copied()
            .filter(|&d| self.day(d).enabled)
            .collect()
    }

    /// Return a new value with only the given day's enabled flag changed.
    /// Times are left untouched so toggling a day off and back on
    /// restores its previous window.
    pub fn with_day_enabled(&self, day: DayKey, enabled: bool) -> Self {
        let mut next = self.clone();
        next.day_mut(day).enabled = enabled;
        next
    }

    /// Return a new value with one time field of the given day replaced.
    ///
    /// The edit self-repairs rather than erroring: if the resulting
    /// window would have `end <= start`, `end` is bumped to one hour
    /// after `start`, capped at the last slot of the grid (23:30 on the
    /// 30-minute grid). The window never wraps past midnight.
    pub fn with_time(&self, day: DayKey, field: TimeField, value: &str) -> Self {
        let mut next = self.clone();
        {
            let hours = next.day_mut(day);
            match field {
                TimeField::Start => {
                    hours.end = clamp_end_after_start(value, &hours.end);
                    hours.start = value.to_string();
                }
                TimeField::End => {
                    hours.end = clamp_end_after_start(&hours.start, value);
                }
            }
        }
        next
    }

    /// True iff at least one day is enabled and every enabled day has
    /// `end > start`.
    pub fn is_valid(&self) -> bool {
        let enabled = self.enabled_days();
        !enabled.is_empty()
            && enabled.iter().all(|&d| {
                let h = self.day(d);
                h.end > h.start
            })
    }

    /// Human-readable summary of the weekly hours.
    ///
    /// A group (Mon–Fri or Sat–Sun) collapses to a single range entry
    /// when every member is enabled with identical times; otherwise each
    /// enabled day gets its own entry in week order. Entries are joined
    /// with " • ".
    pub fn summary(&self) -> String {
        if self.enabled_days().is_empty() {
            return CLOSED_EVERY_DAY.to_string();
        }

        let mut parts: Vec<String> = Vec::new();
        self.push_group_summary(&DayKey::WEEKDAYS, "Mon–Fri", &mut parts);
        self.push_group_summary(&DayKey::WEEKEND, "Sat–Sun", &mut parts);
        parts.join(" • ")
    }

    fn push_group_summary(&self, group: &[DayKey], group_label: &str, parts: &mut Vec<String>) {
        let all_enabled = group.iter().all(|&d| self.day(d).enabled);
        let first = self.day(group[0]);
        let all_same = group
            .iter()
            .all(|&d| self.day(d).start == first.start && self.day(d).end == first.end);

        if all_enabled && all_same {
            parts.push(format!(
                "{} {}–{}",
                group_label,
                to_display_time(&first.start),
                to_display_time(&first.end)
            ));
            return;
        }

        for &d in group {
            let h = self.day(d);
            if !h.enabled {
                continue;
            }
            parts.push(format!(
                "{} {}–{}",
                d.label(),
                to_display_time(&h.start),
                to_display_time(&h.end)
            ));
        }
    }
}

/// All "HH:MM" options on a fixed grid, from 00:00 up to the last slot
/// before midnight. With a 30-minute step this yields 48 entries ending
/// at "23:30".
pub fn time_options(step_minutes: u32) -> Vec<String> {
    assert!(
        step_minutes > 0 && step_minutes <= 60,
        "step must be between 1 and 60 minutes"
    );

    let mut out = Vec::new();
    for hour in 0..24u32 {
        let mut minute = 0;
        while minute < 60 {
            out.push(format!("{:02}:{:02}", hour, minute));
            minute += step_minutes;
        }
    }
    out
}

fn parse_hhmm(value: &str) -> Option<u32> {
    let (hh, mm) = value.split_once(':')?;
    let hours: u32 = hh.parse().ok()?;
    let minutes: u32 = mm.parse().ok()?;
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some(hours * 60 + minutes)
}

fn format_hhmm(minute_of_day: u32) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

/// Ensure `end` stays after `start`: when it does not, bump it to one
/// hour past `start`, capped at the last grid slot of the day.
fn clamp_end_after_start(start: &str, end: &str) -> String {
    if end > start {
        return end.to_string();
    }
    match parse_hhmm(start) {
        Some(start_minutes) => {
            let last_slot = 24 * 60 - TIME_STEP_MINUTES;
            format_hhmm((start_minutes + 60).min(last_slot))
        }
        // Malformed start: nothing sensible to bump from, keep the edit.
        None => end.to_string(),
    }
}

/// Render "HH:MM" as a 12-hour clock label, e.g. "09:00" -> "9:00 AM".
/// Malformed input is passed through unchanged.
pub fn to_display_time(hhmm: &str) -> String {
    match parse_hhmm(hhmm) {
        Some(minute_of_day) => {
            let hour = minute_of_day / 60;
            let minute = minute_of_day % 60;
            let period = if hour >= 12 { "PM" } else { "AM" };
            let hour12 = if hour % 12 == 0 { 12 } else { hour % 12 };
            format!("{}:{:02} {}", hour12, minute, period)
        }
        None => hhmm.to_string(),
    }
}

/// Light/dark preference for the app theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Brand preferences applied across the app chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSettings {
    pub business_name: String,
    pub mode: ThemeMode,
    /// Hex color string, e.g. "#1976d2".
    pub primary_color: String,
}

impl Default for BrandSettings {
    fn default() -> Self {
        Self {
            business_name: "Schedule".to_string(),
            mode: ThemeMode::Dark,
            primary_color: "#FFFFFF".to_string(),
        }
    }
}

/// Concrete colors derived from `BrandSettings` for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: String,
    pub paper: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub divider: String,
    pub primary: String,
}

impl Palette {
    /// Derive the palette for the given brand preferences.
    ///
    /// A blank primary color (possible when the persisted store holds
    /// junk) falls back to the default instead of propagating.
    pub fn from_brand(brand: &BrandSettings) -> Self {
        let primary = safe_color(&brand.primary_color, &BrandSettings::default().primary_color);

        match brand.mode {
            ThemeMode::Dark => Self {
                background: "#0B0D10".to_string(),
                paper: "#12151B".to_string(),
                text_primary: "#F8FAFC".to_string(),
                text_secondary: "#9CA3AF".to_string(),
                divider: "rgba(255,255,255,0.08)".to_string(),
                primary,
            },
            ThemeMode::Light => Self {
                background: "#F6F7F9".to_string(),
                paper: "#FFFFFF".to_string(),
                text_primary: "#0B0D10".to_string(),
                text_secondary: "#4B5563".to_string(),
                divider: "rgba(0,0,0,0.08)".to_string(),
                primary,
            },
        }
    }
}

fn safe_color(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Booking rules carried alongside the hours. These are data only; slot
/// computation happens elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingRules {
    pub slot_interval_minutes: u32,
    pub buffer_minutes: u32,
    pub min_advance_minutes: u32,
    pub max_advance_days: u32,
}

impl Default for SchedulingRules {
    fn default() -> Self {
        Self {
            slot_interval_minutes: 15,
            buffer_minutes: 10,
            min_advance_minutes: 120,
            max_advance_days: 30,
        }
    }
}

/// The persisted business settings record.
///
/// Every field carries a serde default so a partial record written by an
/// older version still deserializes, with missing fields filled from the
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSettings {
    #[serde(default = "default_business_name")]
    pub business_name: String,
    /// IANA timezone id, e.g. "America/Chicago".
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub hours: BusinessHours,
    #[serde(default)]
    pub rules: SchedulingRules,
    /// Human-readable hours summary captured when onboarding completes.
    #[serde(default)]
    pub hours_hint: Option<String>,
    #[serde(default)]
    pub onboarding_complete: bool,
}

fn default_business_name() -> String {
    "Stylist Studio".to_string()
}

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

impl Default for BusinessSettings {
    fn default() -> Self {
        Self {
            business_name: default_business_name(),
            timezone: default_timezone(),
            hours: BusinessHours::default(),
            rules: SchedulingRules::default(),
            hours_hint: None,
            onboarding_complete: false,
        }
    }
}

/// Role of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    #[default]
    Public,
    Client,
    Owner,
}

impl AppRole {
    /// Parse a stored role string. Anything unrecognized reads as
    /// `Public` so a corrupted store can never elevate a session.
    pub fn parse(raw: &str) -> AppRole {
        match raw {
            "client" => AppRole::Client,
            "owner" => AppRole::Owner,
            _ => AppRole::Public,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Public => "public",
            AppRole::Client => "client",
            AppRole::Owner => "owner",
        }
    }
}

impl fmt::Display for AppRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
