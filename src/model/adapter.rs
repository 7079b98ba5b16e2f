// File: src/model/adapter.rs
// iCalendar rendering for events. Read-only: nothing is parsed back.
use crate::model::event::Event;
use chrono::Utc;
use icalendar::{Calendar, Component, Event as VEvent};

const ICS_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

impl Event {
    pub fn to_vevent(&self) -> VEvent {
        let mut vevent = VEvent::new();
        vevent.uid(&self.id);
        vevent.summary(&self.title);
        // An empty description is dropped here but kept as "" in JSON.
        if let Some(description) = self.description.as_deref()
            && !description.is_empty()
        {
            vevent.description(description);
        }
        vevent.timestamp(Utc::now());

        // Explicit UTC strings keep the output stable regardless of the crate's defaults.
        vevent.add_property("DTSTART", self.start.format(ICS_DATETIME_FORMAT).to_string());
        vevent.add_property("DTEND", self.end.format(ICS_DATETIME_FORMAT).to_string());

        if let Some(rule) = &self.recurrence {
            vevent.add_property("RRULE", rule.to_rrule_string());
        }
        vevent
    }

    /// Renders this event as a standalone VCALENDAR.
    pub fn to_ics(&self) -> String {
        events_to_ics(std::slice::from_ref(self))
    }
}

/// Renders all events, in order, as VEVENTs of a single VCALENDAR.
pub fn events_to_ics(events: &[Event]) -> String {
    let mut calendar = Calendar::new();
    for event in events {
        calendar.push(event.to_vevent());
    }
    calendar.to_string()
}
