// SPDX-License-Identifier: MPL-2.0
//! Elapsed/remaining time labels.

use std::time::Duration;

/// Formats a duration as `MM:SS`, or `HH:MM:SS` from one hour on.
/// Sub-second parts are truncated.
#[must_use]
pub fn format_time(time: Duration) -> String {
    let total_secs = time.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Formats time left as `-MM:SS` (or `-HH:MM:SS`).
#[must_use]
pub fn format_remaining(time: Duration) -> String {
    format!("-{}", format_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_handles_zero() {
        assert_eq!(format_time(Duration::ZERO), "00:00");
    }

    #[test]
    fn format_time_handles_minutes() {
        assert_eq!(format_time(Duration::from_secs(125)), "02:05");
    }

    #[test]
    fn format_time_handles_hours() {
        assert_eq!(format_time(Duration::from_secs(3665)), "01:01:05");
    }

    #[test]
    fn format_time_truncates_millis() {
        assert_eq!(format_time(Duration::from_millis(59_999)), "00:59");
    }

    #[test]
    fn remaining_is_prefixed() {
        assert_eq!(format_remaining(Duration::from_secs(45)), "-00:45");
        assert_eq!(format_remaining(Duration::ZERO), "-00:00");
    }
}
