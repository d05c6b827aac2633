//! Date formatting with `yyyy-MM-dd` style patterns.
//!
//! Templates spell dates the way most code generators document them:
//!
//! | letters      | output                      |
//! |--------------|-----------------------------|
//! | `yyyy`, `yy` | year, two-digit year        |
//! | `M`, `MM`    | month number                |
//! | `MMM`, `MMMM`| `Jan`, `January`            |
//! | `d`, `dd`    | day of month                |
//! | `D`          | day of year                 |
//! | `H`, `HH`    | hour 0-23                   |
//! | `h`, `hh`    | hour 1-12                   |
//! | `k`, `K`     | hour 1-24, hour 0-11        |
//! | `m`, `s`     | minute, second              |
//! | `S...`       | fraction of second          |
//! | `a`          | `AM` / `PM`                 |
//! | `EEE`, `EEEE`| `Mon`, `Monday`             |
//! | `EEEEE`      | `M` (narrow day name)       |
//!
//! Text inside single quotes is literal and `''` is a quote. Any other
//! letter is copied through as written, so formatting never fails.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::value::Value;

/// Pattern used by the `date` filter when none is given.
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd";

/// Pattern used by the `now` function when none is given.
pub const DEFAULT_NOW_PATTERN: &str = "yyyy-MM-dd HH:mm";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Field { letter: char, width: usize },
}

/// A parsed date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pieces: Vec<Piece>,
}

impl DatePattern {
    /// Parse a pattern. Every string is a valid pattern.
    pub fn parse(pattern: &str) -> Self {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '\'' => {
                    if chars.next_if_eq(&'\'').is_some() {
                        literal.push('\'');
                        continue;
                    }
                    while let Some(quoted) = chars.next() {
                        if quoted != '\'' {
                            literal.push(quoted);
                        } else if chars.next_if_eq(&'\'').is_some() {
                            literal.push('\'');
                        } else {
                            break;
                        }
                    }
                }
                c if c.is_ascii_alphabetic() => {
                    let mut width = 1;
                    while chars.next_if_eq(&c).is_some() {
                        width += 1;
                    }
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Field { letter: c, width });
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Self { pieces }
    }

    /// Format a date-time with this pattern.
    pub fn format(&self, dt: &NaiveDateTime) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Field { letter, width } => {
                    out.push_str(&format_field(dt, *letter, *width));
                }
            }
        }
        out
    }
}

fn format_field(dt: &NaiveDateTime, letter: char, width: usize) -> String {
    match (letter, width) {
        ('y' | 'u', 2) => format!("{:02}", dt.year().rem_euclid(100)),
        ('y' | 'u', _) => format!("{:0width$}", dt.year()),
        ('M' | 'L', 1 | 2) => format!("{:0width$}", dt.month()),
        ('M' | 'L', 3) => dt.format("%b").to_string(),
        ('M' | 'L', _) => dt.format("%B").to_string(),
        ('d', _) => format!("{:0width$}", dt.day()),
        ('D', _) => format!("{:0width$}", dt.ordinal()),
        ('H', _) => format!("{:0width$}", dt.hour()),
        ('k', _) => {
            let hour = if dt.hour() == 0 { 24 } else { dt.hour() };
            format!("{:0width$}", hour)
        }
        ('h', _) => format!("{:0width$}", dt.hour12().1),
        ('K', _) => format!("{:0width$}", dt.hour() % 12),
        ('m', _) => format!("{:0width$}", dt.minute()),
        ('s', _) => format!("{:0width$}", dt.second()),
        ('S', _) => {
            // Leap seconds carry an extra 1_000_000_000 ns.
            let digits = format!("{:09}", dt.nanosecond() % 1_000_000_000);
            if width <= 9 {
                digits[..width].to_string()
            } else {
                format!("{digits:0<width$}")
            }
        }
        ('a', _) => dt.format("%p").to_string(),
        ('E', 1..=3) => dt.format("%a").to_string(),
        ('E', 4) => dt.format("%A").to_string(),
        ('E', _) => dt.format("%a").to_string().chars().take(1).collect(),
        _ => letter.to_string().repeat(width),
    }
}

/// Format `dt` with a `yyyy-MM-dd` style pattern.
pub fn format(dt: &NaiveDateTime, pattern: &str) -> String {
    DatePattern::parse(pattern).format(dt)
}

/// The current local time formatted with `pattern`.
pub fn now(pattern: &str) -> String {
    format(&Local::now().naive_local(), pattern)
}

/// Parse a date-time from a template value.
///
/// Accepts ISO local date-times (`2024-01-15T10:30:00`, seconds and fraction
/// optional), RFC 3339 timestamps (converted to local time) and bare dates
/// (`2024-01-15`, at midnight).
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Format a template value as a date.
///
/// Strings are parsed with [`parse_datetime`]; a string that is not a date is
/// returned unchanged. Any other value, `Null` included, formats the current
/// local time.
pub fn format_value(input: &Value, pattern: &str) -> Value {
    match input {
        Value::String(s) => match parse_datetime(s) {
            Some(dt) => Value::String(format(&dt, pattern)),
            None => input.clone(),
        },
        _ => Value::String(now(pattern)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_nano_opt(9, 7, 3, 123_456_789)
            .unwrap()
    }

    #[test]
    fn test_default_patterns() {
        assert_eq!(format(&sample(), DEFAULT_DATE_PATTERN), "2024-03-05");
        assert_eq!(format(&sample(), DEFAULT_NOW_PATTERN), "2024-03-05 09:07");
    }

    #[test]
    fn test_numeric_fields() {
        assert_eq!(format(&sample(), "d/M/yy"), "5/3/24");
        assert_eq!(format(&sample(), "y"), "2024");
        assert_eq!(format(&sample(), "D"), "65");
        assert_eq!(format(&sample(), "HH:mm:ss.SSS"), "09:07:03.123");
        assert_eq!(format(&sample(), "S"), "1");
        assert_eq!(format(&sample(), "SSSSSSSSSSS"), "12345678900");
    }

    #[test]
    fn test_hour_variants() {
        let evening = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap();
        let midnight = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format(&evening, "hh a"), "09 PM");
        assert_eq!(format(&evening, "K"), "9");
        assert_eq!(format(&midnight, "k"), "24");
        assert_eq!(format(&midnight, "h a"), "12 AM");
    }

    #[test]
    fn test_text_fields() {
        assert_eq!(format(&sample(), "MMM d, yyyy"), "Mar 5, 2024");
        assert_eq!(format(&sample(), "MMMM"), "March");
        assert_eq!(format(&sample(), "EEE"), "Tue");
        assert_eq!(format(&sample(), "EEEE"), "Tuesday");
        assert_eq!(format(&sample(), "EEEEE"), "T");
    }

    #[test]
    fn test_quoted_literals() {
        assert_eq!(format(&sample(), "'at' HH 'o''clock'"), "at 09 o'clock");
        assert_eq!(format(&sample(), "yyyy''MM"), "2024'03");
        assert_eq!(format(&sample(), "'unterminated"), "unterminated");
    }

    #[test]
    fn test_unknown_letters_are_literal() {
        assert_eq!(format(&sample(), "Q zzz"), "Q zzz");
        assert_eq!(format(&sample(), "100%"), "100%");
        assert_eq!(format(&sample(), ""), "");
    }

    #[test]
    fn test_parse_datetime() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(parse_datetime("2024-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_datetime("2024-01-15T10:30"), Some(expected));
        assert_eq!(
            parse_datetime("2024-01-15T10:30:00.250").map(|dt| dt.nanosecond()),
            Some(250_000_000)
        );
        assert_eq!(
            parse_datetime("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(0, 0, 0)
        );
        assert!(parse_datetime("2024-06-15T12:00:00Z").is_some());
        assert_eq!(parse_datetime("yesterday"), None);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&Value::from("2024-01-15T10:30:00"), DEFAULT_DATE_PATTERN),
            Value::from("2024-01-15")
        );
        assert_eq!(
            format_value(&Value::from("2024-06-15T12:00:00+02:00"), "yyyy"),
            Value::from("2024")
        );
        assert_eq!(
            format_value(&Value::from("not a date"), DEFAULT_DATE_PATTERN),
            Value::from("not a date")
        );
    }

    #[test]
    fn test_format_value_without_date_uses_now() {
        for input in [Value::Null, Value::from(42)] {
            let Value::String(out) = format_value(&input, DEFAULT_DATE_PATTERN) else {
                panic!("expected a string");
            };
            assert!(parse_datetime(&out).is_some(), "{out}");
        }
    }
}
