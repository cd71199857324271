//! Text processing utilities.
//!
//! This module contains utilities for formatting values for display,
//! such as clock times, step counts, and relative timestamps, along with
//! input validation helpers.

use chrono::{DateTime, Local, Timelike};
use log::*;
use regex::Regex;
use std::time::Duration;

/// Format a timestamp as a 12-hour clock time, e.g. "2:05 PM".
///
pub fn format_clock_time(timestamp: &DateTime<Local>) -> String {
    let (is_pm, hour) = timestamp.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, timestamp.minute(), meridiem)
}

/// Group a count into thousands with comma separators, e.g. "12,345".
///
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Describe how long ago something happened, e.g. "Just now" or
/// "5 mins ago".
///
pub fn relative_time(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    if seconds < 30 {
        "Just now".to_string()
    } else if seconds < 60 {
        "Less than a minute ago".to_string()
    } else if seconds < 3600 {
        let minutes = seconds / 60;
        if minutes == 1 {
            "1 min ago".to_string()
        } else {
            format!("{} mins ago", minutes)
        }
    } else {
        let hours = seconds / 3600;
        if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        }
    }
}

/// Check that text looks like an email address.
///
pub fn is_valid_email(text: &str) -> bool {
    let re = match Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$") {
        Ok(re) => re,
        Err(e) => {
            warn!("Failed to compile email pattern: {}", e);
            return false;
        }
    };
    re.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_clock_time_afternoon() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 10, 14, 5, 0).unwrap();
        assert_eq!(format_clock_time(&timestamp), "2:05 PM");
    }

    #[test]
    fn test_format_clock_time_morning() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap();
        assert_eq!(format_clock_time(&timestamp), "9:30 AM");
    }

    #[test]
    fn test_format_clock_time_midnight() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        assert_eq!(format_clock_time(&timestamp), "12:00 AM");
    }

    #[test]
    fn test_group_thousands_small() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
    }

    #[test]
    fn test_group_thousands_large() {
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12345), "12,345");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_relative_time_just_now() {
        assert_eq!(relative_time(Duration::from_secs(3)), "Just now");
    }

    #[test]
    fn test_relative_time_minutes() {
        assert_eq!(relative_time(Duration::from_secs(60)), "1 min ago");
        assert_eq!(relative_time(Duration::from_secs(300)), "5 mins ago");
    }

    #[test]
    fn test_relative_time_hours() {
        assert_eq!(relative_time(Duration::from_secs(3600)), "1 hour ago");
        assert_eq!(relative_time(Duration::from_secs(7200)), "2 hours ago");
    }

    #[test]
    fn test_is_valid_email_accepts_plain_address() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("jane.doe@example.org"));
    }

    #[test]
    fn test_is_valid_email_rejects_malformed() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }
}
