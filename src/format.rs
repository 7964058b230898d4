//! Duration formatting
//!
//! Short, lossy, human-readable durations: at most two units, no seconds.

const SECS_PER_DAY: i64 = 86_400;
const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// Format a millisecond duration as e.g. `"3 hours and 25 minutes"`.
///
/// Anything under one minute, including zero and negative durations,
/// becomes `"less than a minute"`.
pub fn format_duration(millis: f64) -> String {
    let seconds = (millis / 1000.0).trunc() as i64;
    let days = seconds / SECS_PER_DAY;
    let hours = (seconds % SECS_PER_DAY) / SECS_PER_HOUR;
    let minutes = (seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;

    let mut parts = Vec::with_capacity(2);
    if days > 0 {
        parts.push(unit(days, "day"));
    }
    if hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if minutes > 0 && parts.len() < 2 {
        parts.push(unit(minutes, "minute"));
    }

    if parts.is_empty() {
        "less than a minute".to_string()
    } else {
        parts.join(" and ")
    }
}

fn unit(value: i64, label: &str) -> String {
    if value == 1 {
        format!("{} {}", value, label)
    } else {
        format!("{} {}s", value, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: f64 = 60_000.0;
    const HOUR: f64 = 3_600_000.0;
    const DAY: f64 = 86_400_000.0;

    #[test]
    fn test_under_a_minute() {
        for ms in [0.0, 1.0, 999.0, 59_999.0, -1.0, -60_000.0, -5.0 * DAY] {
            assert_eq!(format_duration(ms), "less than a minute", "{ms}");
        }
    }

    #[test]
    fn test_seconds_are_discarded() {
        assert_eq!(format_duration(90_000.0), "1 minute");
        assert_eq!(format_duration(MINUTE), "1 minute");
        assert_eq!(format_duration(2.0 * MINUTE + 59_999.0), "2 minutes");
    }

    #[test]
    fn test_two_units() {
        assert_eq!(format_duration(3.0 * HOUR + 25.0 * MINUTE), "3 hours and 25 minutes");
        assert_eq!(format_duration(HOUR + MINUTE), "1 hour and 1 minute");
        assert_eq!(format_duration(2.0 * DAY + 3.0 * MINUTE), "2 days and 3 minutes");
    }

    #[test]
    fn test_capped_at_two_units() {
        assert_eq!(format_duration(25.0 * HOUR + 61.0 * MINUTE), "1 day and 2 hours");
        assert_eq!(format_duration(3.0 * DAY + 4.0 * HOUR + 5.0 * MINUTE), "3 days and 4 hours");
    }

    #[test]
    fn test_single_units() {
        assert_eq!(format_duration(DAY), "1 day");
        assert_eq!(format_duration(14.0 * DAY), "14 days");
        assert_eq!(format_duration(5.0 * HOUR), "5 hours");
    }

    #[test]
    fn test_fractional_average() {
        assert_eq!(format_duration(2.0 * HOUR + 0.5), "2 hours");
    }
}
