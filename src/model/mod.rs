// File: ./src/model/mod.rs
pub mod adapter;
pub mod event;
pub mod recurrence;

pub use adapter::events_to_ics;
pub use event::{Event, EventData};
pub use recurrence::{RecurrenceKind, RecurrenceRule};
