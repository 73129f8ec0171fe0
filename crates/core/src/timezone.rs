//! Local-timezone handling for store-facing timestamps.

use chrono::{DateTime, FixedOffset, Utc};

/// Timestamp format written to the backing store (column J).
///
/// This string form is a wire contract shared with the spreadsheet and must
/// not change.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Fixed local timezone used for customer-facing timestamps.
///
/// Injected into the components that need it instead of being read from
/// process-wide state. Prefer passing an explicit `Timezone` in tests.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timezone(FixedOffset);

impl Timezone {
    /// Peru local time: UTC-5, no daylight saving.
    pub fn peru() -> Self {
        Self(FixedOffset::west_opt(5 * 3600).expect("UTC-5 is within the valid offset range"))
    }

    pub fn from_offset(offset: FixedOffset) -> Self {
        Self(offset)
    }

    pub fn offset(&self) -> FixedOffset {
        self.0
    }

    /// Render an instant as a `DD/MM/YYYY HH:MM` local-time string.
    pub fn stamp(&self, at: DateTime<Utc>) -> String {
        at.with_timezone(&self.0).format(TIMESTAMP_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn peru_is_five_hours_behind_utc() {
        let tz = Timezone::peru();
        assert_eq!(tz.offset().utc_minus_local(), 5 * 3600);
    }

    #[test]
    fn stamp_renders_local_wall_clock() {
        let tz = Timezone::peru();
        let at = Utc.with_ymd_and_hms(2025, 3, 15, 20, 30, 0).unwrap();
        assert_eq!(tz.stamp(at), "15/03/2025 15:30");
    }

    #[test]
    fn stamp_crosses_the_date_boundary() {
        let tz = Timezone::peru();
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 3, 5, 0).unwrap();
        assert_eq!(tz.stamp(at), "31/12/2024 22:05");
    }

    #[test]
    fn stamp_zero_pads_day_month_hour_minute() {
        let tz = Timezone::peru();
        let at = Utc.with_ymd_and_hms(2025, 6, 2, 14, 7, 0).unwrap();
        assert_eq!(tz.stamp(at), "02/06/2025 09:07");
    }
}
