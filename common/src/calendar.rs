//! Month grid computation for the risk calendar.
//!
//! A [`MonthView`] is the navigable `(year, month)` the calendar shows.
//! [`MonthGrid::build`] lays that month out Monday-first, matches events to
//! days and marks today. Building is pure: the same view, events and "today"
//! always give the same grid.

use chrono::{Datelike, NaiveDate};

use crate::clock::Clock;
use crate::event::{CalendarEvent, EventStatus};

// ─── View state ──────────────────────────────────────────────────────────────

/// The month on display. `month` is 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthView {
    year: i32,
    month: u32,
}

impl MonthView {
    /// Returns `None` when `month` is not in 1..=12 or the month lies outside
    /// chrono's date range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::containing)
    }

    /// Earliest month chrono can represent; navigation stops here.
    pub fn first() -> Self {
        Self::containing(NaiveDate::MIN)
    }

    /// Latest month chrono can represent; navigation stops here.
    pub fn last() -> Self {
        Self::containing(NaiveDate::MAX)
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        MonthView {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The clock's current month; where a freshly mounted calendar starts.
    pub fn current(clock: &impl Clock) -> Self {
        Self::containing(clock.today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month before, wrapping January to December of the previous year.
    /// Stays put on [`MonthView::first`].
    pub fn previous(self) -> Self {
        if self == Self::first() {
            self
        } else if self.month == 1 {
            MonthView {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthView {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The month after, wrapping December to January of the next year.
    /// Stays put on [`MonthView::last`].
    pub fn next(self) -> Self {
        if self == Self::last() {
            self
        } else if self.month == 12 {
            MonthView {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthView {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn go_previous(&mut self) {
        *self = self.previous();
    }

    pub fn go_next(&mut self) {
        *self = self.next();
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

// ─── Calendar arithmetic ─────────────────────────────────────────────────────

/// Number of days in `year`-`month` (`month` 1..=12): the day number of the
/// day before the 1st of the following month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_first = if month == 12 {
        year.checked_add(1).and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next_first.and_then(|first| first.pred_opt()) {
        Some(last) => last.day(),
        // December of chrono's last year has no following month
        None if NaiveDate::from_ymd_opt(year, month, 31).is_some() => 31,
        None => 0,
    }
}

/// Column of the 1st of the month in a Monday-first week: Monday=0 … Sunday=6.
pub fn first_weekday_index(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| {
            // Sunday=0 … Saturday=6, rotated so Monday comes first
            let native = first.weekday().num_days_from_sunday();
            (native + 6) % 7
        })
        .unwrap_or(0)
}

// ─── Grid ────────────────────────────────────────────────────────────────────

/// Status marker attached to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMarker {
    pub status: EventStatus,
    pub site_id: u32,
}

impl From<&CalendarEvent> for DayMarker {
    fn from(event: &CalendarEvent) -> Self {
        DayMarker {
            status: event.status,
            site_id: event.site_id,
        }
    }
}

/// One numbered day of the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub is_today: bool,
    pub marker: Option<DayMarker>,
}

impl DayCell {
    /// Space-separated class list: `day`, then `today` and `event-<status>`
    /// when they apply.
    pub fn classes(&self) -> String {
        let mut classes = String::from("day");
        if self.is_today {
            classes.push_str(" today");
        }
        if let Some(marker) = &self.marker {
            classes.push(' ');
            classes.push_str(&marker.status.css_class());
        }
        classes
    }

    /// Site id for the `data-stack` attribute, if an event matched.
    pub fn site_id(&self) -> Option<u32> {
        self.marker.map(|m| m.site_id)
    }
}

/// A grid position: alignment blank or a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

/// Laid-out month ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub view: MonthView,
    /// Blank cells before day 1.
    pub leading_blanks: u32,
    /// Days 1..=n in ascending order.
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Lay out `view`, decorating days with `events` and marking `today`.
    ///
    /// If several events fall on one day the first in `events` order wins.
    pub fn build(view: MonthView, events: &[CalendarEvent], today: NaiveDate) -> Self {
        let (year, month) = (view.year(), view.month());
        let month_events: Vec<&CalendarEvent> =
            events.iter().filter(|e| e.is_in_month(year, month)).collect();
        let today_in_view = view.contains(today);

        let days = (1..=days_in_month(year, month))
            .map(|day| DayCell {
                day,
                is_today: today_in_view && today.day() == day,
                marker: month_events
                    .iter()
                    .find(|e| e.date.day() == day)
                    .map(|e| DayMarker::from(*e)),
            })
            .collect();

        MonthGrid {
            view,
            leading_blanks: first_weekday_index(year, month),
            days,
        }
    }

    /// Same as [`MonthGrid::build`], reading today from `clock`.
    pub fn build_with_clock(view: MonthView, events: &[CalendarEvent], clock: &impl Clock) -> Self {
        Self::build(view, events, clock.today())
    }

    /// Blanks followed by days, in rendering order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.leading_blanks)
            .map(|_| GridCell::Blank)
            .chain(self.days.iter().copied().map(GridCell::Day))
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        day.checked_sub(1).and_then(|i| self.days.get(i as usize))
    }
}

// ─── tests ───────────────────────────────────────────────────────────────────
