//! Source of "today" for the calendar.
//!
//! The calendar never reads the wall clock directly; it asks a [`Clock`].
//! Production code uses [`SystemClock`], tests and demos pin a date with
//! [`FixedClock`].

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Anything that can tell the current local calendar date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall clock (on WASM chrono reads the browser's `Date`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Either clock, by value, so it can travel through UI context and be
/// embedded in the rendered page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockSource {
    #[default]
    System,
    Fixed(NaiveDate),
}

impl ClockSource {
    /// `Fixed` when an override is given, `System` otherwise.
    pub fn from_override(today: Option<NaiveDate>) -> Self {
        today.map(ClockSource::Fixed).unwrap_or_default()
    }
}

impl Clock for ClockSource {
    fn today(&self) -> NaiveDate {
        match self {
            ClockSource::System => SystemClock.today(),
            ClockSource::Fixed(date) => FixedClock(*date).today(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 22).unwrap();
        assert_eq!(FixedClock(date).today(), date);
        assert_eq!(ClockSource::Fixed(date).today(), date);
    }

    #[test]
    fn test_from_override() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(ClockSource::from_override(Some(date)), ClockSource::Fixed(date));
        assert_eq!(ClockSource::from_override(None), ClockSource::System);
    }

    #[test]
    fn test_clock_source_serde() {
        let fixed = ClockSource::Fixed(NaiveDate::from_ymd_opt(2025, 11, 22).unwrap());
        let json = serde_json::to_string(&fixed).unwrap();
        assert_eq!(json, r#"{"fixed":"2025-11-22"}"#);
        assert_eq!(serde_json::from_str::<ClockSource>(&json).unwrap(), fixed);
        assert_eq!(serde_json::from_str::<ClockSource>("\"system\"").unwrap(), ClockSource::System);
    }
}
