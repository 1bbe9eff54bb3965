//! Item availability: blocked dates, the calendar grid, and range picking.
//!
//! Every non-cancelled booking blocks each date it covers, check-out day
//! included, because the equipment is out for that whole day.

use crate::dates::DateRange;
use chrono::{Datelike, Months, NaiveDate};
use std::collections::BTreeSet;

/// Expands booked ranges into the set of dates they block.
#[must_use]
pub fn blocked_dates<'a, I>(bookings: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a DateRange>,
{
    bookings.into_iter().flat_map(|range| range.days()).collect()
}

/// Returns true if none of the range's dates are blocked.
#[must_use]
pub fn is_range_free(range: &DateRange, blocked: &BTreeSet<NaiveDate>) -> bool {
    blocked
        .range(range.check_in..=range.check_out)
        .next()
        .is_none()
}

/// Why a calendar pick was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// The date is before today.
    Past,
    /// The date is already booked.
    Booked,
    /// The range would span at least one booked date.
    SpansBooking,
}

impl Refusal {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Past => "That date has already passed.",
            Self::Booked => "That date is already booked.",
            Self::SpansBooking => {
                "Your range includes booked dates. Pick an end date before the next booking."
            }
        }
    }
}

/// Result of a single calendar pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Started(NaiveDate),
    Completed(DateRange),
    Refused(Refusal),
}

/// Two-click range picker state.
///
/// The first pick marks the start, the second completes the range, and a
/// pick after that starts a new range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangeSelection {
    #[default]
    Empty,
    Started(NaiveDate),
    Complete(DateRange),
}

impl RangeSelection {
    /// Applies a pick of `date`.
    ///
    /// Past and blocked dates are refused without changing the state. A
    /// second pick that would span a blocked date is refused and becomes
    /// the start of a new range.
    pub fn pick(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
        blocked: &BTreeSet<NaiveDate>,
    ) -> SelectionOutcome {
        if date < today {
            return SelectionOutcome::Refused(Refusal::Past);
        }
        if blocked.contains(&date) {
            return SelectionOutcome::Refused(Refusal::Booked);
        }

        match *self {
            Self::Empty | Self::Complete(_) => {
                *self = Self::Started(date);
                SelectionOutcome::Started(date)
            }
            Self::Started(start) => {
                let range = DateRange::new(start, date);
                if is_range_free(&range, blocked) {
                    *self = Self::Complete(range);
                    SelectionOutcome::Completed(range)
                } else {
                    *self = Self::Started(date);
                    SelectionOutcome::Refused(Refusal::SpansBooking)
                }
            }
        }
    }

    /// The completed range, if any.
    #[must_use]
    pub fn range(&self) -> Option<DateRange> {
        match self {
            Self::Complete(range) => Some(*range),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    fn is_endpoint(&self, date: NaiveDate) -> bool {
        match self {
            Self::Empty => false,
            Self::Started(start) => *start == date,
            Self::Complete(range) => range.check_in == date || range.check_out == date,
        }
    }

    fn is_inside(&self, date: NaiveDate) -> bool {
        matches!(self, Self::Complete(range) if range.contains(date))
    }
}

/// Display state of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    Past,
    Booked,
    Selected,
    InRange,
    Available,
}

impl DayState {
    /// Works out how `date` should render.
    #[must_use]
    pub fn of(
        date: NaiveDate,
        today: NaiveDate,
        blocked: &BTreeSet<NaiveDate>,
        selection: &RangeSelection,
    ) -> Self {
        if date < today {
            Self::Past
        } else if blocked.contains(&date) {
            Self::Booked
        } else if selection.is_endpoint(date) {
            Self::Selected
        } else if selection.is_inside(date) {
            Self::InRange
        } else {
            Self::Available
        }
    }

    /// Whether the day can be clicked.
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !matches!(self, Self::Past | Self::Booked)
    }

    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Past => "day day--past",
            Self::Booked => "day day--booked",
            Self::Selected => "day day--selected",
            Self::InRange => "day day--in-range",
            Self::Available => "day day--available",
        }
    }
}

/// One calendar month laid out in Sunday-first weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    first: NaiveDate,
}

impl MonthGrid {
    /// Short weekday headers, Sunday first.
    pub const WEEKDAYS: [&'static str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    /// The month that contains `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// First day of the month.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Heading such as "October 2026".
    #[must_use]
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    #[must_use]
    pub fn next(&self) -> Self {
        Self {
            first: self
                .first
                .checked_add_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    #[must_use]
    pub fn previous(&self) -> Self {
        Self {
            first: self
                .first
                .checked_sub_months(Months::new(1))
                .unwrap_or(self.first),
        }
    }

    /// Weeks of the month. Cells outside the month are `None`.
    #[must_use]
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let lead = self.first.weekday().num_days_from_sunday() as usize;
        let days: Vec<NaiveDate> = self
            .first
            .iter_days()
            .take_while(|d| d.month() == self.first.month())
            .collect();

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut col = lead;
        for day in days {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        weeks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn blocked_sample() -> BTreeSet<NaiveDate> {
        let bookings = [
            DateRange::new(date(2026, 11, 5), date(2026, 11, 7)),
            DateRange::new(date(2026, 11, 7), date(2026, 11, 8)),
            DateRange::single(date(2026, 11, 20)),
        ];
        blocked_dates(&bookings)
    }

    #[test]
    fn blocked_dates_include_check_out_and_collapse_duplicates() {
        let blocked = blocked_sample();
        let expected: BTreeSet<_> = [
            date(2026, 11, 5),
            date(2026, 11, 6),
            date(2026, 11, 7),
            date(2026, 11, 8),
            date(2026, 11, 20),
        ]
        .into_iter()
        .collect();
        assert_eq!(blocked, expected);
    }

    #[test]
    fn no_bookings_block_nothing() {
        let none: [DateRange; 0] = [];
        let blocked = blocked_dates(&none);
        assert!(blocked.is_empty());
    }

    #[test]
    fn range_free_checks_every_day() {
        let blocked = blocked_sample();
        assert!(is_range_free(
            &DateRange::new(date(2026, 11, 9), date(2026, 11, 19)),
            &blocked
        ));
        assert!(!is_range_free(
            &DateRange::new(date(2026, 11, 1), date(2026, 11, 5)),
            &blocked
        ));
        assert!(!is_range_free(
            &DateRange::new(date(2026, 11, 10), date(2026, 11, 25)),
            &blocked
        ));
    }

    #[test]
    fn two_picks_complete_a_range_in_either_order() {
        let today = date(2026, 11, 1);
        let blocked = blocked_sample();
        let mut selection = RangeSelection::default();

        assert_eq!(
            selection.pick(date(2026, 11, 15), today, &blocked),
            SelectionOutcome::Started(date(2026, 11, 15))
        );
        let expected = DateRange::new(date(2026, 11, 12), date(2026, 11, 15));
        assert_eq!(
            selection.pick(date(2026, 11, 12), today, &blocked),
            SelectionOutcome::Completed(expected)
        );
        assert_eq!(selection.range(), Some(expected));
    }

    #[test]
    fn third_pick_starts_over() {
        let today = date(2026, 11, 1);
        let blocked = blocked_sample();
        let mut selection = RangeSelection::default();
        selection.pick(date(2026, 11, 10), today, &blocked);
        selection.pick(date(2026, 11, 12), today, &blocked);

        assert_eq!(
            selection.pick(date(2026, 11, 14), today, &blocked),
            SelectionOutcome::Started(date(2026, 11, 14))
        );
        assert_eq!(selection.range(), None);
    }

    #[test]
    fn past_and_booked_picks_are_refused() {
        let today = date(2026, 11, 10);
        let blocked = blocked_sample();
        let mut selection = RangeSelection::default();

        assert_eq!(
            selection.pick(date(2026, 11, 9), today, &blocked),
            SelectionOutcome::Refused(Refusal::Past)
        );
        assert_eq!(
            selection.pick(date(2026, 11, 20), today, &blocked),
            SelectionOutcome::Refused(Refusal::Booked)
        );
        assert_eq!(selection, RangeSelection::Empty);
    }

    #[test]
    fn range_across_a_booking_restarts_from_new_pick() {
        let today = date(2026, 11, 1);
        let blocked = blocked_sample();
        let mut selection = RangeSelection::default();
        selection.pick(date(2026, 11, 2), today, &blocked);

        assert_eq!(
            selection.pick(date(2026, 11, 10), today, &blocked),
            SelectionOutcome::Refused(Refusal::SpansBooking)
        );
        assert_eq!(selection, RangeSelection::Started(date(2026, 11, 10)));
    }

    #[test]
    fn same_day_range_is_allowed() {
        let today = date(2026, 11, 1);
        let blocked = blocked_sample();
        let mut selection = RangeSelection::default();
        selection.pick(date(2026, 11, 12), today, &blocked);
        assert_eq!(
            selection.pick(date(2026, 11, 12), today, &blocked),
            SelectionOutcome::Completed(DateRange::single(date(2026, 11, 12)))
        );
    }

    #[test]
    fn day_state_priorities() {
        let today = date(2026, 11, 3);
        let blocked = blocked_sample();
        let selection =
            RangeSelection::Complete(DateRange::new(date(2026, 11, 10), date(2026, 11, 12)));

        assert_eq!(DayState::of(date(2026, 11, 2), today, &blocked, &selection), DayState::Past);
        assert_eq!(DayState::of(date(2026, 11, 6), today, &blocked, &selection), DayState::Booked);
        assert_eq!(
            DayState::of(date(2026, 11, 10), today, &blocked, &selection),
            DayState::Selected
        );
        assert_eq!(
            DayState::of(date(2026, 11, 11), today, &blocked, &selection),
            DayState::InRange
        );
        assert_eq!(
            DayState::of(date(2026, 11, 13), today, &blocked, &selection),
            DayState::Available
        );
        assert!(!DayState::Booked.is_selectable());
        assert!(DayState::InRange.is_selectable());
    }

    #[test]
    fn month_grid_starts_on_sunday() {
        // November 2026 starts on a Sunday and has 30 days.
        let grid = MonthGrid::containing(date(2026, 11, 18));
        let weeks = grid.weeks();
        assert_eq!(grid.label(), "November 2026");
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][0], Some(date(2026, 11, 1)));
        assert_eq!(weeks[4][1], Some(date(2026, 11, 30)));
        assert_eq!(weeks[4][2], None);
    }

    #[test]
    fn month_grid_pads_leading_days() {
        // October 2026 starts on a Thursday.
        let weeks = MonthGrid::containing(date(2026, 10, 1)).weeks();
        assert_eq!(weeks[0][..4], [None, None, None, None]);
        assert_eq!(weeks[0][4], Some(date(2026, 10, 1)));
        let cells: usize = weeks.iter().map(|w| w.iter().flatten().count()).sum();
        assert_eq!(cells, 31);
    }

    #[test]
    fn month_navigation_crosses_years() {
        let december = MonthGrid::containing(date(2026, 12, 25));
        assert_eq!(december.next().first_day(), date(2027, 1, 1));
        assert_eq!(december.next().previous(), december);
        assert_eq!(MonthGrid::containing(date(2027, 1, 9)).previous(), december);
    }
}
