//! Datetime parsing for publication dates, without timezone databases.
//!
//! Provides a lightweight `DateTime` struct that turns the date strings a
//! host adapter hands over into Unix timestamps, and renders timestamps in
//! the canonical decimal form the search feed hashes and emits.
//!
//! # Accepted formats
//!
//! - `YYYY-MM-DD` (midnight UTC)
//! - `YYYY-MM-DDTHH:MM:SS` (naive, read as UTC; a space may replace `T`)
//! - either of the above with `.fff…` fractional seconds
//! - followed by `Z` or a `±HH:MM` offset
//!
//! # Examples
//!
//! ```ignore
//! let dt = DateTime::parse("2023-11-14T22:13:20Z").unwrap();
//! assert_eq!(format_timestamp(dt.unix_seconds()), "1700000000.0");
//! ```

use anyhow::{Result, bail};

/// Calendar datetime with an optional fixed offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub micros: u32,
    /// Offset east of UTC, in seconds.
    pub offset: i32,
}

impl DateTime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            micros: 0,
            offset: 0,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse any of the formats listed in the module docs.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        let month = parse_u8(&bytes[5..7])?;
        let day = parse_u8(&bytes[8..10])?;
        let mut dt = Self::from_ymd(year, month, day);

        let rest = &bytes[10..];
        if !rest.is_empty() {
            dt.parse_time(rest)?;
        }

        dt.validate().ok()?;
        Some(dt)
    }

    /// Parse `THH:MM:SS[.fff][Z|±HH:MM]` into `self`.
    fn parse_time(&mut self, bytes: &[u8]) -> Option<()> {
        if bytes.len() < 9 || !matches!(bytes[0], b'T' | b't' | b' ') {
            return None;
        }
        if bytes[3] != b':' || bytes[6] != b':' {
            return None;
        }
        self.hour = parse_u8(&bytes[1..3])?;
        self.minute = parse_u8(&bytes[4..6])?;
        self.second = parse_u8(&bytes[7..9])?;

        let mut rest = &bytes[9..];
        if let Some((b'.', tail)) = rest.split_first() {
            let digits = tail.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            self.micros = parse_micros(&tail[..digits]);
            rest = &tail[digits..];
        }

        self.offset = match rest {
            [] | [b'Z'] | [b'z'] => 0,
            [sign @ (b'+' | b'-'), h1, h2, b':', m1, m2] => {
                let hours = i32::from(parse_u8(&[*h1, *h2])?);
                let minutes = i32::from(parse_u8(&[*m1, *m2])?);
                if hours > 23 || minutes > 59 {
                    return None;
                }
                let secs = hours * 3600 + minutes * 60;
                if *sign == b'-' { -secs } else { secs }
            }
            _ => return None,
        };
        Some(())
    }

    #[allow(clippy::trivially_copy_pass_by_ref)] // Method style is more idiomatic
    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            ..
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
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

    /// Whole seconds since the Unix epoch (UTC).
    pub fn unix_secs(self) -> i64 {
        let days = days_from_civil(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day),
        );
        days * 86_400
            + i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
            - i64::from(self.offset)
    }

    /// Seconds since the Unix epoch including the fractional part.
    #[allow(clippy::cast_precision_loss)] // Timestamps stay far below 2^53
    pub fn unix_seconds(self) -> f64 {
        self.unix_secs() as f64 + f64::from(self.micros) / 1_000_000.0
    }
}

/// Render a timestamp as its shortest round-trip decimal form.
///
/// Whole values keep a trailing `.0` (`1700000000.0`), so the same instant
/// always produces the same string whether it came from a number or a date.
pub fn format_timestamp(secs: f64) -> String {
    format!("{secs:?}")
}

/// Days between 1970-01-01 and the given civil date (proleptic Gregorian).
const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = (if year >= 0 { year } else { year - 399 }) / 400;
    let year_of_era = year - era * 400;
    let month_from_march = (month + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
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

/// Fractional digits to microseconds (extra precision is truncated).
fn parse_micros(digits: &[u8]) -> u32 {
    (0..6).fold(0, |acc, i| {
        let d = digits.get(i).map_or(0, |b| u32::from(b - b'0'));
        acc * 10 + d
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = DateTime::parse("2024-06-15").unwrap();
        assert_eq!(dt, DateTime::from_ymd(2024, 6, 15));
    }

    #[test]
    fn test_parse_utc() {
        let dt = DateTime::parse("2023-11-14T22:13:20Z").unwrap();
        assert_eq!(dt, DateTime::new(2023, 11, 14, 22, 13, 20));
        assert_eq!(dt.unix_secs(), 1_700_000_000);
    }

    #[test]
    fn test_parse_naive_is_utc() {
        let naive = DateTime::parse("2023-11-14 22:13:20").unwrap();
        let zulu = DateTime::parse("2023-11-14T22:13:20Z").unwrap();
        assert_eq!(naive.unix_secs(), zulu.unix_secs());
    }

    #[test]
    fn test_parse_offset() {
        let dt = DateTime::parse("2023-11-14T23:13:20+01:00").unwrap();
        assert_eq!(dt.offset, 3600);
        assert_eq!(dt.unix_secs(), 1_700_000_000);

        let dt = DateTime::parse("2023-11-14T17:43:20-04:30").unwrap();
        assert_eq!(dt.unix_secs(), 1_700_000_000);
    }

    #[test]
    fn test_parse_fraction() {
        let dt = DateTime::parse("2023-11-14T22:13:20.5Z").unwrap();
        assert_eq!(dt.micros, 500_000);
        assert_eq!(format_timestamp(dt.unix_seconds()), "1700000000.5");

        let dt = DateTime::parse("2023-11-14T22:13:20.123456789").unwrap();
        assert_eq!(dt.micros, 123_456);
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(DateTime::parse(""), None);
        assert_eq!(DateTime::parse("2024/06/15"), None);
        assert_eq!(DateTime::parse("2024-13-01"), None);
        assert_eq!(DateTime::parse("2023-02-29"), None);
        assert_eq!(DateTime::parse("2024-06-15T25:00:00Z"), None);
        assert_eq!(DateTime::parse("2024-06-15T12:00"), None);
        assert_eq!(DateTime::parse("2024-06-15T12:00:00."), None);
        assert_eq!(DateTime::parse("2024-06-15T12:00:00+0100"), None);
        assert_eq!(DateTime::parse("yesterday"), None);
    }

    #[test]
    fn test_epoch_and_leap_days() {
        assert_eq!(DateTime::from_ymd(1970, 1, 1).unix_secs(), 0);
        assert_eq!(DateTime::from_ymd(2000, 3, 1).unix_secs(), 951_868_800);
        assert_eq!(DateTime::from_ymd(2024, 2, 29).unix_secs(), 1_709_164_800);
        assert_eq!(DateTime::from_ymd(1969, 12, 31).unix_secs(), -86_400);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1_700_000_000.0), "1700000000.0");
        assert_eq!(format_timestamp(1_700_000_000.25), "1700000000.25");
        assert_eq!(format_timestamp(0.0), "0.0");
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(DateTime::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTime::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTime::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTime::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_validate_invalid_time() {
        assert!(DateTime::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(DateTime::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(DateTime::new(2024, 6, 15, 12, 30, 60).validate().is_err());
    }
}
