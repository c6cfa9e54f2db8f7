//! Calendar dates for post headers.
//!
//! Provides a lightweight `PostDate` for the publication date shown on a
//! post page, without timezone dependencies.
//!
//! # Examples
//!
//! ```ignore
//! let date = PostDate::parse("2023-01-02").unwrap();
//! assert_eq!(date.format_long("en-US"), "Monday, January 2, 2023");
//! ```

use anyhow::{Result, bail};

const WEEKDAYS: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// UTC calendar date of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PostDate {
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse an ISO 8601 date or timestamp as a UTC calendar date.
    ///
    /// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SS[.fff](Z|±HH:MM)`, the
    /// forms produced by `Date.toISOString()` and most front matter. A
    /// timestamp with an offset is shifted to UTC before the time is
    /// discarded, so `2021-08-07T00:30:00+02:00` is 2021-08-06.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (date_part, time_part) = match s.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (s, None),
        };

        let bytes = date_part.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let date = Self::new(
            parse_u16(&bytes[0..4])?,
            parse_u8(&bytes[5..7])?,
            parse_u8(&bytes[8..10])?,
        );
        date.validate().ok()?;

        let Some(time) = time_part else {
            return Some(date);
        };
        match utc_minute_of_day(time)? {
            minute if minute < 0 => date.prev_day(),
            minute if minute >= MINUTES_PER_DAY => Some(date.next_day()),
            _ => Some(date),
        }
    }

    fn prev_day(self) -> Option<Self> {
        Some(if self.day > 1 {
            Self::new(self.year, self.month, self.day - 1)
        } else if self.month > 1 {
            let month = self.month - 1;
            Self::new(self.year, month, Self::days_in_month(self.year, month))
        } else {
            Self::new(self.year.checked_sub(1)?, 12, 31)
        })
    }

    fn next_day(self) -> Self {
        if self.day < Self::days_in_month(self.year, self.month) {
            Self::new(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            Self::new(self.year, self.month + 1, 1)
        } else {
            Self::new(self.year + 1, 1, 1)
        }
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.month) {
            bail!("month is invalid: {}", self.month);
        }
        let max_days = Self::days_in_month(self.year, self.month);
        if self.day == 0 || self.day > max_days {
            bail!("day is invalid: {}", self.day);
        }
        Ok(())
    }

    #[inline]
    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// ISO 8601 date, used for `<time datetime>`.
    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Long human-readable date with weekday.
    ///
    /// | Locale   | Output                      |
    /// |----------|-----------------------------|
    /// | `en-US`  | `Monday, January 2, 2023`   |
    /// | `en-GB`  | `Monday 2 January 2023`     |
    /// | other    | `2023-01-02`                |
    pub fn format_long(self, locale: &str) -> String {
        let weekday = WEEKDAYS[self.weekday_index()];
        let month = MONTHS[usize::from(self.month - 1)];

        match locale.to_ascii_lowercase().as_str() {
            "en" | "en-us" => format!("{weekday}, {month} {}, {}", self.day, self.year),
            "en-gb" | "en-au" | "en-nz" | "en-ie" => {
                format!("{weekday} {} {month} {}", self.day, self.year)
            }
            _ => self.to_iso(),
        }
    }

    /// Zeller's congruence, 0 = Saturday.
    #[inline]
    #[allow(clippy::cast_sign_loss)] // Result of % 7 is always 0-6
    fn weekday_index(self) -> usize {
        let (y, m) = if self.month < 3 {
            (i32::from(self.year) - 1, i32::from(self.month) + 12)
        } else {
            (i32::from(self.year), i32::from(self.month))
        };
        let d = i32::from(self.day);
        ((d + (13 * (m + 1)) / 5 + y + y / 4 - y / 100 + y / 400) % 7) as usize
    }
}

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Minute of the day in UTC for `HH:MM:SS[.fff](Z|±HH:MM)`.
///
/// May fall outside `0..MINUTES_PER_DAY` when the offset crosses midnight.
fn utc_minute_of_day(time: &str) -> Option<i32> {
    let bytes = time.as_bytes();
    if bytes.len() < 8 || bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }
    let hour = parse_u8(&bytes[0..2])?;
    let minute = parse_u8(&bytes[3..5])?;
    let second = parse_u8(&bytes[6..8])?;
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }

    let mut zone = &time[8..];
    if let Some(fraction) = zone.strip_prefix('.') {
        let digits = fraction.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        zone = &fraction[digits..];
    }

    let offset = match zone {
        "Z" => 0,
        _ => parse_offset(zone)?,
    };
    Some(i32::from(hour) * 60 + i32::from(minute) - offset)
}

/// `±HH:MM` in minutes east of UTC.
fn parse_offset(zone: &str) -> Option<i32> {
    let bytes = zone.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return None;
    }
    let sign = match bytes[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    let hours = parse_u8(&bytes[1..3])?;
    let minutes = parse_u8(&bytes[4..6])?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (i32::from(hours) * 60 + i32::from(minutes)))
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
