// File: src/controller.rs
//! Async entry point for event operations.
//! Wraps one `EventStore` behind a single lock so every check-then-act sequence
//! (overlap check then insert, find then replace, find then remove) is atomic
//! with respect to other callers sharing the controller.
use crate::config::Config;
use crate::error::EventResult;
use crate::model::{Event, EventData, RecurrenceRule};
use crate::store::{Deletion, EventStore};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct EventController {
    pub store: Arc<Mutex<EventStore>>,
    allow_overlap_by_default: bool,
}

impl EventController {
    pub fn new(store: Arc<Mutex<EventStore>>) -> Self {
        Self {
            store,
            allow_overlap_by_default: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            store: Arc::new(Mutex::new(EventStore::with_options(config.store_options()))),
            allow_overlap_by_default: config.allow_overlap_by_default,
        }
    }

    pub async fn create_event(&self, data: EventData, allow_overlap: bool) -> EventResult<Event> {
        self.store.lock().await.create(data, allow_overlap)
    }

    /// Create using the configured overlap policy.
    pub async fn create_event_default(&self, data: EventData) -> EventResult<Event> {
        self.create_event(data, self.allow_overlap_by_default).await
    }

    pub async fn list_events_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<Event> {
        self.store.lock().await.list_in_range(start, end)
    }

    pub async fn update_event(
        &self,
        id: &str,
        data: EventData,
        allow_overlap: bool,
    ) -> EventResult<Event> {
        self.store.lock().await.update(id, data, allow_overlap)
    }

    /// Update using the configured overlap policy.
    pub async fn update_event_default(&self, id: &str, data: EventData) -> EventResult<Event> {
        self.update_event(id, data, self.allow_overlap_by_default).await
    }

    pub async fn delete_event(&self, id: &str) -> EventResult<Deletion> {
        self.store.lock().await.delete(id)
    }

    pub async fn set_recurrence_rule(
        &self,
        id: &str,
        rule: RecurrenceRule,
    ) -> EventResult<Event> {
        self.store.lock().await.set_recurrence_rule(id, rule)
    }

    pub async fn snapshot(&self) -> Vec<Event> {
        self.store.lock().await.events().to_vec()
    }

    pub async fn export_ics(&self) -> String {
        self.store.lock().await.to_ics_string()
    }
}
