// File: ./src/model/recurrence.rs
use crate::error::{EventError, EventResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rrule::RRuleSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::EnumIter;

const RRULE_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Daily,
    Weekly,
    Monthly,
}

impl RecurrenceKind {
    pub fn as_rrule_freq(&self) -> &'static str {
        match self {
            RecurrenceKind::Daily => "DAILY",
            RecurrenceKind::Weekly => "WEEKLY",
            RecurrenceKind::Monthly => "MONTHLY",
        }
    }

    pub fn from_rrule_freq(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "DAILY" => Some(RecurrenceKind::Daily),
            "WEEKLY" => Some(RecurrenceKind::Weekly),
            "MONTHLY" => Some(RecurrenceKind::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecurrenceKind::Daily => write!(f, "daily"),
            RecurrenceKind::Weekly => write!(f, "weekly"),
            RecurrenceKind::Monthly => write!(f, "monthly"),
        }
    }
}

/// Descriptive cadence attached to an event. Never expanded into occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub kind: RecurrenceKind,
    /// Cadence multiplier: every `interval` days/weeks/months.
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl RecurrenceRule {
    pub fn new(kind: RecurrenceKind, interval: u32) -> Self {
        Self {
            kind,
            interval,
            until: None,
            count: None,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_until(mut self, until: DateTime<Utc>) -> Self {
        self.until = Some(until);
        self
    }

    /// Renders the rule as an RFC 5545 RRULE value (without the `RRULE:` prefix).
    ///
    /// COUNT and UNTIL are mutually exclusive in RFC 5545; when both are set,
    /// COUNT is emitted and UNTIL is dropped.
    pub fn to_rrule_string(&self) -> String {
        let mut parts = vec![
            format!("FREQ={}", self.kind.as_rrule_freq()),
            format!("INTERVAL={}", self.interval),
        ];
        if let Some(count) = self.count {
            parts.push(format!("COUNT={}", count));
        } else if let Some(until) = self.until {
            parts.push(format!("UNTIL={}", until.format(RRULE_DATETIME_FORMAT)));
        }
        parts.join(";")
    }

    /// Data-model check: the interval must be positive. Anything else is stored as given.
    pub fn validate(&self) -> EventResult<()> {
        if self.interval == 0 {
            return Err(EventError::InvalidRecurrence(
                "interval must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    /// Strict RFC 5545 check against an event start.
    ///
    /// Seeds the rule with `DTSTART:<start>` and hands it to the rrule parser, which
    /// also rejects intervals above `u16::MAX` and an UNTIL earlier than the start.
    pub fn check_rfc5545(&self, start: DateTime<Utc>) -> EventResult<()> {
        self.validate()?;
        if self.count.is_some() && self.until.is_some() {
            log::warn!(
                "Recurrence rule has both COUNT and UNTIL; UNTIL is ignored in RRULE output"
            );
        }

        let rrule_string = format!(
            "DTSTART:{}\nRRULE:{}",
            start.format(RRULE_DATETIME_FORMAT),
            self.to_rrule_string()
        );
        RRuleSet::from_str(&rrule_string)
            .map_err(|e| EventError::InvalidRecurrence(e.to_string()))?;
        Ok(())
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rrule_string())
    }
}

fn parse_until(value: &str) -> Option<DateTime<Utc>> {
    // Date-only UNTIL is inclusive of the whole day.
    if value.len() == 8 && !value.contains('T') {
        return NaiveDate::parse_from_str(value, "%Y%m%d")
            .ok()
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .map(|d| d.and_utc());
    }
    let without_z = value.strip_suffix('Z').unwrap_or(value);
    NaiveDateTime::parse_from_str(without_z, "%Y%m%dT%H%M%S")
        .ok()
        .map(|d| Utc.from_utc_datetime(&d))
}

impl FromStr for RecurrenceRule {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let body = match trimmed.get(..6) {
            Some(prefix) if prefix.eq_ignore_ascii_case("RRULE:") => &trimmed[6..],
            _ => trimmed,
        };

        let mut kind = None;
        let mut interval = 1;
        let mut until = None;
        let mut count = None;

        for part in body.split(';').filter(|p| !p.trim().is_empty()) {
            let (key, value) = part.split_once('=').ok_or_else(|| {
                EventError::InvalidRecurrence(format!("malformed RRULE part '{}'", part))
            })?;
            let value = value.trim();
            match key.trim().to_uppercase().as_str() {
                "FREQ" => {
                    kind = Some(RecurrenceKind::from_rrule_freq(value).ok_or_else(|| {
                        EventError::InvalidRecurrence(format!("unsupported FREQ '{}'", value))
                    })?);
                }
                "INTERVAL" => {
                    interval = value.parse::<u32>().map_err(|_| {
                        EventError::InvalidRecurrence(format!("invalid INTERVAL '{}'", value))
                    })?;
                    if interval == 0 {
                        return Err(EventError::InvalidRecurrence(
                            "interval must be a positive integer".to_string(),
                        ));
                    }
                }
                "COUNT" => {
                    count = Some(value.parse::<u32>().map_err(|_| {
                        EventError::InvalidRecurrence(format!("invalid COUNT '{}'", value))
                    })?);
                }
                "UNTIL" => {
                    until = Some(parse_until(value).ok_or_else(|| {
                        EventError::InvalidRecurrence(format!("invalid UNTIL '{}'", value))
                    })?);
                }
                other => {
                    return Err(EventError::InvalidRecurrence(format!(
                        "unsupported RRULE part '{}'",
                        other
                    )));
                }
            }
        }

        let kind =
            kind.ok_or_else(|| EventError::InvalidRecurrence("missing FREQ".to_string()))?;
        Ok(RecurrenceRule {
            kind,
            interval,
            until,
            count,
        })
    }
}
