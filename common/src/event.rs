//! Calendar risk events and their wire format.
//!
//! Callers hand events over as `{ date, status, stackId }` records with a
//! `YYYY-MM-DD` date string. [`parse_events`] turns them into
//! [`CalendarEvent`]s, dropping any record whose date does not parse.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Risk level of a single event. Serialized with the colour names the
/// stylesheet uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    #[serde(rename = "green")]
    Ok,
    #[serde(rename = "yellow")]
    Warning,
    #[serde(rename = "red")]
    Critical,
}

impl EventStatus {
    pub fn colour(self) -> &'static str {
        match self {
            EventStatus::Ok => "green",
            EventStatus::Warning => "yellow",
            EventStatus::Critical => "red",
        }
    }

    /// Class applied to a day cell carrying this status.
    pub fn css_class(self) -> String {
        format!("event-{}", self.colour())
    }
}

/// An event as supplied by the caller, date still a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub date: String,
    pub status: EventStatus,
    pub stack_id: u32,
}

impl EventRecord {
    pub fn new(date: &str, status: EventStatus, stack_id: u32) -> Self {
        EventRecord {
            date: date.to_string(),
            status,
            stack_id,
        }
    }
}

/// A dated risk marker for one site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub date: NaiveDate,
    pub status: EventStatus,
    /// Site the event belongs to. Not checked against the registry.
    pub site_id: u32,
}

impl CalendarEvent {
    pub fn new(date: NaiveDate, status: EventStatus, site_id: u32) -> Self {
        CalendarEvent {
            date,
            status,
            site_id,
        }
    }

    pub fn is_in_month(&self, year: i32, month: u32) -> bool {
        self.date.year() == year && self.date.month() == month
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("invalid event date {date:?}: {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse a `YYYY-MM-DD` date. Month and day may be written with one digit.
pub fn parse_event_date(date: &str) -> Result<NaiveDate, EventError> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|source| EventError::InvalidDate {
        date: date.to_string(),
        source,
    })
}

impl TryFrom<&EventRecord> for CalendarEvent {
    type Error = EventError;

    fn try_from(record: &EventRecord) -> Result<Self, Self::Error> {
        Ok(CalendarEvent {
            date: parse_event_date(&record.date)?,
            status: record.status,
            site_id: record.stack_id,
        })
    }
}

/// Convert wire records, keeping input order. Records with an unparseable
/// date are logged and left out, so they show up in no month at all.
pub fn parse_events(records: &[EventRecord]) -> Vec<CalendarEvent> {
    records
        .iter()
        .filter_map(|record| match CalendarEvent::try_from(record) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(stack_id = record.stack_id, "Skipping calendar event: {e}");
                None
            }
        })
        .collect()
}

// ─── tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&EventStatus::Critical).unwrap();
        assert_eq!(json, "\"red\"");
        let status: EventStatus = serde_json::from_str("\"yellow\"").unwrap();
        assert_eq!(status, EventStatus::Warning);
        assert_eq!(EventStatus::Ok.css_class(), "event-green");
    }

    #[test]
    fn test_record_from_json() {
        let json = r#"{"date": "2025-11-22", "status": "green", "stackId": 1}"#;
        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, EventRecord::new("2025-11-22", EventStatus::Ok, 1));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let json = r#"{"date": "2025-11-22", "status": "blue", "stackId": 1}"#;
        assert!(serde_json::from_str::<EventRecord>(json).is_err());
    }

    #[test]
    fn test_parse_unpadded_date() {
        let date = parse_event_date("2025-12-8").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 12, 8).unwrap());
    }

    #[test]
    fn test_parse_invalid_dates() {
        for bad in ["", "2025-13-01", "2025-02-30", "22.11.2025", "soon"] {
            assert!(parse_event_date(bad).is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_parse_events_drops_invalid_and_keeps_order() {
        let records = vec![
            EventRecord::new("2025-11-25", EventStatus::Warning, 2),
            EventRecord::new("not-a-date", EventStatus::Critical, 9),
            EventRecord::new("2025-11-22", EventStatus::Ok, 1),
        ];
        let events = parse_events(&records);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].site_id, 2);
        assert_eq!(events[1].site_id, 1);
    }

    #[test]
    fn test_is_in_month() {
        let event = CalendarEvent::new(
            NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            EventStatus::Critical,
            3,
        );
        assert!(event.is_in_month(2025, 12));
        assert!(!event.is_in_month(2024, 12));
        assert!(!event.is_in_month(2025, 11));
    }
}
