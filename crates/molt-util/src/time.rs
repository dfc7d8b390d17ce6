//! Time unit constants.

use std::time::Duration;

/// One millisecond.
pub const MILLISECOND: Duration = Duration::from_millis(1);
/// One second.
pub const SECOND: Duration = Duration::from_secs(1);
/// One minute.
pub const MINUTE: Duration = Duration::from_secs(60);
/// One hour.
pub const HOUR: Duration = Duration::from_secs(60 * 60);
/// One day (86 400 seconds; no calendar or DST awareness).
pub const DAY: Duration = Duration::from_secs(24 * 60 * 60);
/// Seven days.
pub const WEEK: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// [`SECOND`] in milliseconds.
pub const SECOND_MS: u64 = 1_000;
/// [`MINUTE`] in milliseconds.
pub const MINUTE_MS: u64 = 60 * SECOND_MS;
/// [`HOUR`] in milliseconds.
pub const HOUR_MS: u64 = 60 * MINUTE_MS;
/// [`DAY`] in milliseconds.
pub const DAY_MS: u64 = 24 * HOUR_MS;
/// [`WEEK`] in milliseconds.
pub const WEEK_MS: u64 = 7 * DAY_MS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millisecond_constants_agree_with_durations() {
        assert_eq!(SECOND.as_millis(), u128::from(SECOND_MS));
        assert_eq!(MINUTE.as_millis(), u128::from(MINUTE_MS));
        assert_eq!(HOUR.as_millis(), u128::from(HOUR_MS));
        assert_eq!(DAY.as_millis(), u128::from(DAY_MS));
        assert_eq!(WEEK.as_millis(), u128::from(WEEK_MS));
        assert_eq!(MILLISECOND * 1000, SECOND);
    }
}
