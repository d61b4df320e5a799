//! Puzzle date resolution
//!
//! Turns the optional date argument into a calendar date. Two fixed-width shapes
//! are accepted, `DD-MM-YYYY` and `YYYY-MM-DD`; the shape alone decides the
//! field order.

use chrono::{NaiveDate, Utc};
use std::fmt;
use thiserror::Error;

/// Error type for date arguments that cannot be resolved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("Invalid date format '{0}'. Please use either DD-MM-YYYY or YYYY-MM-DD.")]
    UnrecognisedShape(String),
    #[error("Invalid date '{0}' is not a real calendar date. Please use either DD-MM-YYYY or YYYY-MM-DD.")]
    OutOfRange(String),
}

/// Which of the two accepted layouts an argument has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    DayFirst,
    YearFirst,
}

impl Shape {
    /// Detect the layout purely from character classes and positions
    fn detect(input: &str) -> Option<Self> {
        let bytes = input.as_bytes();
        if bytes.len() != 10 {
            return None;
        }

        let digits_except = |dashes: [usize; 2]| {
            bytes.iter().enumerate().all(|(i, &b)| {
                if dashes.contains(&i) {
                    b == b'-'
                } else {
                    b.is_ascii_digit()
                }
            })
        };

        if digits_except([2, 5]) {
            Some(Self::DayFirst)
        } else if digits_except([4, 7]) {
            Some(Self::YearFirst)
        } else {
            None
        }
    }
}

/// A calendar date that a puzzle is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResolvedDate(NaiveDate);

impl ResolvedDate {
    /// Today's date on the UTC clock
    #[must_use]
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Parse a `DD-MM-YYYY` or `YYYY-MM-DD` string
    ///
    /// # Errors
    /// Returns `DateError::UnrecognisedShape` if the input has neither layout and
    /// `DateError::OutOfRange` if the fields do not name a real day.
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::core::ResolvedDate;
    ///
    /// let date = ResolvedDate::parse("15-06-2024").unwrap();
    /// assert_eq!(date.iso(), "2024-06-15");
    ///
    /// assert!(ResolvedDate::parse("2024-13-01").is_err());
    /// assert!(ResolvedDate::parse("15/06/2024").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, DateError> {
        let shape =
            Shape::detect(input).ok_or_else(|| DateError::UnrecognisedShape(input.to_string()))?;

        // Shape guarantees every field is ASCII digits of the right width
        let field = |range: std::ops::Range<usize>| -> u32 {
            input[range]
                .bytes()
                .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
        };

        let (day, month, year) = match shape {
            Shape::DayFirst => (field(0..2), field(3..5), field(6..10)),
            Shape::YearFirst => (field(8..10), field(5..7), field(0..4)),
        };

        // Calendar years start at 1; chrono alone would accept year 0
        let year = i32::try_from(year)
            .ok()
            .filter(|&year| year >= 1)
            .ok_or_else(|| DateError::OutOfRange(input.to_string()))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DateError::OutOfRange(input.to_string()))
    }

    /// The date as `YYYY-MM-DD`
    #[must_use]
    pub fn iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// The underlying chrono date
    #[inline]
    #[must_use]
    pub const fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ResolvedDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ResolvedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iso())
    }
}

/// Resolve the optional command line argument into a date
///
/// With no argument the current UTC date is used.
///
/// # Errors
/// Returns `DateError` if an argument is given and cannot be parsed.
pub fn resolve(argument: Option<&str>) -> Result<ResolvedDate, DateError> {
    argument.map_or_else(|| Ok(ResolvedDate::today()), ResolvedDate::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> ResolvedDate {
        ResolvedDate::from(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn day_first_shape() {
        assert_eq!(ResolvedDate::parse("15-06-2024").unwrap(), ymd(2024, 6, 15));
    }

    #[test]
    fn day_first_is_never_reinterpreted() {
        // Ambiguous to a human, but the shape fixes day then month
        assert_eq!(ResolvedDate::parse("01-02-2024").unwrap(), ymd(2024, 2, 1));
        assert!(ResolvedDate::parse("02-13-2024").is_err());
    }

    #[test]
    fn year_first_shape() {
        assert_eq!(ResolvedDate::parse("2024-06-15").unwrap(), ymd(2024, 6, 15));
        assert_eq!(ResolvedDate::parse("2024-02-01").unwrap(), ymd(2024, 2, 1));
    }

    #[test]
    fn calendar_invalid_dates_rejected() {
        assert!(matches!(
            ResolvedDate::parse("31-02-2024"),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            ResolvedDate::parse("29-02-2023"),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            ResolvedDate::parse("2024-13-01"),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            ResolvedDate::parse("00-01-2024"),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            ResolvedDate::parse("01-01-0000"),
            Err(DateError::OutOfRange(_))
        ));
        assert!(matches!(
            ResolvedDate::parse("0000-01-01"),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn first_calendar_year_accepted() {
        assert_eq!(ResolvedDate::parse("01-01-0001").unwrap(), ymd(1, 1, 1));
        assert_eq!(ResolvedDate::parse("0001-01-01").unwrap().iso(), "0001-01-01");
    }

    #[test]
    fn leap_day_accepted_in_leap_year() {
        assert_eq!(ResolvedDate::parse("29-02-2024").unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn unrecognised_shapes_rejected() {
        for input in [
            "",
            "2024-6-15",
            "15-6-2024",
            "15-06-24",
            "15/06/2024",
            "2024/06/15",
            "20240615",
            "2024-06-15 ",
            " 2024-06-15",
            "abcd-ef-gh",
            "2024-06-1a",
            "１５-06-2024",
            "June 15 2024",
        ] {
            assert!(
                matches!(
                    ResolvedDate::parse(input),
                    Err(DateError::UnrecognisedShape(_))
                ),
                "expected '{input}' to be rejected"
            );
        }
    }

    #[test]
    fn error_message_names_both_formats() {
        let message = ResolvedDate::parse("tomorrow").unwrap_err().to_string();
        assert!(message.contains("DD-MM-YYYY"));
        assert!(message.contains("YYYY-MM-DD"));

        let message = ResolvedDate::parse("31-02-2024").unwrap_err().to_string();
        assert!(message.contains("DD-MM-YYYY"));
        assert!(message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn iso_is_a_fixed_point() {
        for input in ["2024-06-15", "2000-02-29", "1999-12-31", "2021-06-19"] {
            let date = ResolvedDate::parse(input).unwrap();
            assert_eq!(date.iso(), input);
            assert_eq!(ResolvedDate::parse(&date.iso()).unwrap(), date);
        }
    }

    #[test]
    fn day_first_normalises_to_iso() {
        let date = ResolvedDate::parse("05-01-2022").unwrap();
        assert_eq!(date.iso(), "2022-01-05");
        assert_eq!(ResolvedDate::parse(&date.iso()).unwrap(), date);
    }

    #[test]
    fn resolve_without_argument_is_today_utc() {
        let before = Utc::now().date_naive();
        let resolved = resolve(None).unwrap().naive();
        let after = Utc::now().date_naive();
        assert!(resolved == before || resolved == after);
    }

    #[test]
    fn resolve_with_argument_parses() {
        assert_eq!(resolve(Some("15-06-2024")).unwrap(), ymd(2024, 6, 15));
        assert!(resolve(Some("yesterday")).is_err());
    }

    #[test]
    fn display_is_iso() {
        assert_eq!(format!("{}", ymd(2024, 6, 15)), "2024-06-15");
    }
}
