//! Coalwatch shared domain code: risk calendar layout, event parsing, the
//! stack registry, UI string tables and configuration.
//!
//! Compiled both natively (SSR server, tests) and for WASM (hydrated client),
//! so nothing here touches the network.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod event;
pub mod locale;
pub mod site;

pub use calendar::{DayCell, DayMarker, GridCell, MonthGrid, MonthView};
pub use clock::{Clock, ClockSource, FixedClock, SystemClock};
pub use event::{CalendarEvent, EventError, EventRecord, EventStatus};
pub use locale::Locale;
pub use site::{RiskLevel, Site};
