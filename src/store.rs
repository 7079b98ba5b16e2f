// File: src/store.rs
use crate::error::{EventError, EventResult};
use crate::model::{Event, EventData, RecurrenceRule, events_to_ics};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Knobs that change validation, not storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Reject events whose start is not strictly before their end.
    pub enforce_time_order: bool,
    /// Run recurrence rules through the rrule parser on every write.
    /// Off: only a zero interval is rejected.
    pub strict_recurrence: bool,
}

/// Confirmation returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    pub removed: Event,
    pub remaining: Vec<Event>,
}

impl Deletion {
    pub fn message(&self) -> String {
        format!("Event with Id {} deleted successfully!", self.removed.id)
    }
}

/// Ordered in-memory event collection. Insertion order is iteration order.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    options: StoreOptions,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            events: Vec::new(),
            options,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    // --- Core Logic Helpers ---

    fn position(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    /// Generates a UUID v4 identifier that is not already used in this store.
    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
            log::warn!("Generated event id {} collided, regenerating", id);
        }
    }

    /// First event (other than `exclude`) whose interval intersects `[start, end)`.
    fn find_overlap(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        exclude: Option<&str>,
    ) -> Option<&Event> {
        self.events
            .iter()
            .filter(|e| exclude != Some(e.id.as_str()))
            .find(|e| e.overlaps(start, end))
    }

    fn validate(&self, event: &Event) -> EventResult<()> {
        if self.options.enforce_time_order && event.start >= event.end {
            log::warn!(
                "Rejecting '{}': start {} is not before end {}",
                event.title,
                event.start,
                event.end
            );
            return Err(EventError::InvalidRange {
                start: event.start,
                end: event.end,
            });
        }
        if let Some(rule) = &event.recurrence {
            self.validate_rule(rule, event.start)?;
        }
        Ok(())
    }

    fn validate_rule(&self, rule: &RecurrenceRule, start: DateTime<Utc>) -> EventResult<()> {
        if self.options.strict_recurrence {
            rule.check_rfc5545(start)
        } else {
            rule.validate()
        }
    }

    fn check_overlap(&self, event: &Event, exclude: Option<&str>) -> EventResult<()> {
        if let Some(existing) = self.find_overlap(event.start, event.end, exclude) {
            log::warn!(
                "Rejecting '{}': overlaps existing event {}",
                event.title,
                existing.id
            );
            return Err(EventError::Overlap {
                conflicting_id: existing.id.clone(),
            });
        }
        Ok(())
    }

    fn not_found(id: &str) -> EventError {
        log::warn!("Event {} not found", id);
        EventError::NotFound(id.to_string())
    }

    // --- Operations ---

    /// Appends a new event with a freshly generated id.
    pub fn create(&mut self, data: EventData, allow_overlap: bool) -> EventResult<Event> {
        let event = Event::from_data(self.next_id(), data);
        self.validate(&event)?;
        if !allow_overlap {
            self.check_overlap(&event, None)?;
        }

        log::debug!("Created event {} '{}'", event.id, event.title);
        self.events.push(event.clone());
        Ok(event)
    }

    /// Events fully contained in `[start, end]`, in store order.
    pub fn list_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| e.is_within(start, end))
            .cloned()
            .collect()
    }

    /// Merges `data` into the event (see [`Event::apply`]), keeping id and position.
    pub fn update(&mut self, id: &str, data: EventData, allow_overlap: bool) -> EventResult<Event> {
        let idx = self.position(id).ok_or_else(|| Self::not_found(id))?;
        let mut candidate = self.events[idx].clone();
        candidate.apply(data);
        self.validate(&candidate)?;
        if !allow_overlap {
            self.check_overlap(&candidate, Some(id))?;
        }

        log::debug!("Updated event {} '{}'", candidate.id, candidate.title);
        self.events[idx] = candidate.clone();
        Ok(candidate)
    }

    pub fn delete(&mut self, id: &str) -> EventResult<Deletion> {
        let idx = self.position(id).ok_or_else(|| Self::not_found(id))?;
        let removed = self.events.remove(idx);
        log::debug!("Deleted event {} '{}'", removed.id, removed.title);
        Ok(Deletion {
            removed,
            remaining: self.events.clone(),
        })
    }

    /// Replaces only the recurrence rule of an event.
    pub fn set_recurrence_rule(&mut self, id: &str, rule: RecurrenceRule) -> EventResult<Event> {
        let idx = self.position(id).ok_or_else(|| Self::not_found(id))?;
        self.validate_rule(&rule, self.events[idx].start)?;

        let event = &mut self.events[idx];
        log::debug!(
            "Setting recurrence of {} to {}",
            event.id,
            rule.to_rrule_string()
        );
        event.recurrence = Some(rule);
        Ok(event.clone())
    }

    pub fn to_ics_string(&self) -> String {
        events_to_ics(&self.events)
    }
}
