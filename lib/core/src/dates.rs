//! Calendar date ranges for stays and rentals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used for dates in forms, URLs, and storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive range of calendar dates.
///
/// `check_in` is never after `check_out`; constructors normalize the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl DateRange {
    /// Creates a range from two dates in either order.
    #[must_use]
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self {
                check_in: a,
                check_out: b,
            }
        } else {
            Self {
                check_in: b,
                check_out: a,
            }
        }
    }

    /// A range covering a single day.
    #[must_use]
    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Number of nights between check-in and check-out.
    ///
    /// This is what room bookings are charged for.
    #[must_use]
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().max(0) as u32
    }

    /// Number of calendar days covered, both ends included.
    ///
    /// Equipment rentals are charged per day, so a same-day rental is one day.
    #[must_use]
    pub fn rental_days(&self) -> u32 {
        self.nights() + 1
    }

    /// Iterates every date in the range, check-out included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.check_in
            .iter_days()
            .take_while(move |d| *d <= self.check_out)
    }

    /// Returns true if `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date <= self.check_out
    }

    /// Returns true if the two ranges share at least one date.
    #[must_use]
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.check_in <= other.check_out && other.check_in <= self.check_out
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.check_in == self.check_out {
            write!(f, "{}", format_date(self.check_in))
        } else {
            write!(
                f,
                "{} - {}",
                format_date(self.check_in),
                format_date(self.check_out)
            )
        }
    }
}

/// Formats a date for display, e.g. "Oct 18, 2026".
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Parses a `YYYY-MM-DD` date as produced by HTML date inputs.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn new_normalizes_order() {
        let range = DateRange::new(date(2026, 3, 10), date(2026, 3, 7));
        assert_eq!(range.check_in, date(2026, 3, 7));
        assert_eq!(range.check_out, date(2026, 3, 10));
    }

    #[test]
    fn nights_and_rental_days() {
        let range = DateRange::new(date(2026, 3, 7), date(2026, 3, 10));
        assert_eq!(range.nights(), 3);
        assert_eq!(range.rental_days(), 4);

        let same_day = DateRange::single(date(2026, 3, 7));
        assert_eq!(same_day.nights(), 0);
        assert_eq!(same_day.rental_days(), 1);
    }

    #[test]
    fn nights_cross_month_boundary() {
        let range = DateRange::new(date(2026, 1, 30), date(2026, 2, 2));
        assert_eq!(range.nights(), 3);
        assert_eq!(range.days().count(), 4);
    }

    #[test]
    fn days_include_both_ends() {
        let range = DateRange::new(date(2026, 12, 30), date(2027, 1, 1));
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![date(2026, 12, 30), date(2026, 12, 31), date(2027, 1, 1)]);
    }

    #[test]
    fn overlap_is_inclusive() {
        let a = DateRange::new(date(2026, 5, 1), date(2026, 5, 3));
        let touching = DateRange::new(date(2026, 5, 3), date(2026, 5, 6));
        let after = DateRange::new(date(2026, 5, 4), date(2026, 5, 6));
        assert!(a.overlaps(&touching));
        assert!(touching.overlaps(&a));
        assert!(!a.overlaps(&after));
    }

    #[test]
    fn display_collapses_single_day() {
        let single = DateRange::single(date(2026, 10, 18));
        assert_eq!(single.to_string(), "Oct 18, 2026");

        let range = DateRange::new(date(2026, 10, 18), date(2026, 10, 21));
        assert_eq!(range.to_string(), "Oct 18, 2026 - Oct 21, 2026");
    }

    #[test]
    fn parse_date_accepts_html_input_format() {
        assert_eq!(parse_date("2026-10-18").expect("parse"), date(2026, 10, 18));
        assert_eq!(parse_date(" 2026-10-18 ").expect("parse"), date(2026, 10, 18));
        assert!(parse_date("").is_err());
        assert!(parse_date("18/10/2026").is_err());
    }

    #[test]
    fn serializes_dates_as_iso_strings() {
        let range = DateRange::new(date(2026, 5, 1), date(2026, 5, 3));
        let json = serde_json::to_string(&range).expect("serialize");
        assert_eq!(json, r#"{"check_in":"2026-05-01","check_out":"2026-05-03"}"#);
    }
}
