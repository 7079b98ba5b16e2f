// File: ./src/model/event.rs
use crate::model::recurrence::RecurrenceRule;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything an event carries except its identifier.
///
/// Used as input for both creation and full replacement on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceRule>,
}

impl EventData {
    pub fn new(title: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            description: None,
            start,
            end,
            recurrence: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Assigned by the store on creation, never changed afterwards.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceRule>,
}

impl Event {
    pub fn from_data(id: String, data: EventData) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            start: data.start,
            end: data.end,
            recurrence: data.recurrence,
        }
    }

    /// Overwrites title and times. `description` and `recurrence` are only
    /// overwritten when `data` carries them; `None` keeps the stored value.
    pub fn apply(&mut self, data: EventData) {
        self.title = data.title;
        self.start = data.start;
        self.end = data.end;
        if data.description.is_some() {
            self.description = data.description;
        }
        if data.recurrence.is_some() {
            self.recurrence = data.recurrence;
        }
    }

    /// Half-open interval test: `[s1,e1)` and `[s2,e2)` overlap iff `s1 < e2 && e1 > s2`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        start < self.end && end > self.start
    }

    /// True when the event lies entirely inside `[start, end]`.
    pub fn is_within(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start >= start && self.end <= end
    }
}
