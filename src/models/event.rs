//! Event model with its ordered schedule entries.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{timestamp, HasImages, Image};

/// Prefix of ids assigned to schedule entries that have not been persisted.
pub const TEMP_ID_PREFIX: &str = "temp-";

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Lifecycle stage of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    #[default]
    #[serde(alias = "upcoming")]
    Upcoming,
    #[serde(alias = "completed")]
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "UPCOMING",
            EventStatus::Completed => "COMPLETED",
        }
    }
}

/// Identity of a schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScheduleId {
    /// Assigned by the backend
    Persisted(String),
    /// Client-side placeholder, stripped before transmission
    Temporary(String),
}

impl ScheduleId {
    /// Fresh placeholder id of the form `temp-<millis>-<seq>`.
    pub fn temporary() -> Self {
        let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
        ScheduleId::Temporary(format!(
            "{}{}-{}",
            TEMP_ID_PREFIX,
            Utc::now().timestamp_millis(),
            seq
        ))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ScheduleId::Persisted(id) | ScheduleId::Temporary(id) => id,
        }
    }

    pub fn is_temporary(&self) -> bool {
        matches!(self, ScheduleId::Temporary(_))
    }

    /// The id to transmit: persisted ids only.
    pub fn server_id(&self) -> Option<&str> {
        match self {
            ScheduleId::Persisted(id) => Some(id),
            ScheduleId::Temporary(_) => None,
        }
    }
}

impl From<String> for ScheduleId {
    fn from(id: String) -> Self {
        match uuid::Uuid::parse_str(&id) {
            Ok(_) => ScheduleId::Persisted(id),
            Err(_) if id.is_empty() || id.starts_with(TEMP_ID_PREFIX) => {
                ScheduleId::Temporary(id)
            }
            Err(_) => {
                tracing::debug!("Schedule id {:?} is not a UUID; treating as persisted", id);
                ScheduleId::Persisted(id)
            }
        }
    }
}

impl From<ScheduleId> for String {
    fn from(id: ScheduleId) -> Self {
        match id {
            ScheduleId::Persisted(id) | ScheduleId::Temporary(id) => id,
        }
    }
}

/// One dated slot of an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: ScheduleId,
    pub description: String,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_date: DateTime<Utc>,
}

impl ScheduleEntry {
    /// Wire form with placeholder ids stripped.
    pub fn to_payload(&self) -> SchedulePayload {
        SchedulePayload {
            id: self.id.server_id().map(str::to_string),
            description: self.description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Schedule entry as transmitted on create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
    #[serde(with = "timestamp")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub end_date: DateTime<Utc>,
}

/// An event as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    /// Serialized block document, or legacy plain text
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub event_schedule: Vec<ScheduleEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Event {
    /// First entry's start and last entry's end, in insertion order.
    pub fn date_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let first = self.event_schedule.first()?;
        let last = self.event_schedule.last()?;
        Some((first.start_date, last.end_date))
    }
}

impl HasImages for Event {
    fn images(&self) -> &[Image] {
        &self.images
    }

    fn thumbnail_url_mut(&mut self) -> &mut Option<String> {
        &mut self.thumbnail_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_id_classification() {
        let persisted: ScheduleId = "3f2b8c1e-9d4a-4b6f-8e2a-1c5d7f9a0b3e".to_string().into();
        assert!(!persisted.is_temporary());
        assert_eq!(persisted.as_str().len(), 36);

        let temp: ScheduleId = "temp-1736000000000".to_string().into();
        assert!(temp.is_temporary());
        assert!(temp.server_id().is_none());

        let blank: ScheduleId = String::new().into();
        assert!(blank.is_temporary());

        let legacy: ScheduleId = "sched-42".to_string().into();
        assert_eq!(legacy.server_id(), Some("sched-42"));
    }

    #[test]
    fn test_temporary_ids_are_unique() {
        let a = ScheduleId::temporary();
        let b = ScheduleId::temporary();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("temp-"));
    }

    #[test]
    fn test_event_from_backend_json() {
        let event: Event = serde_json::from_str(
            r#"{
                "id": "e1",
                "name": "Hack Night",
                "description": "Bring a laptop",
                "status": "UPCOMING",
                "eventSchedule": [
                    {"id": "3f2b8c1e-9d4a-4b6f-8e2a-1c5d7f9a0b3e", "description": "Day 1",
                     "startDate": "2025-09-15T10:00:00.000Z", "endDate": "2025-09-15T18:00:00.000Z"},
                    {"id": "5a1c2d3e-4f5a-4b6c-8d7e-9f0a1b2c3d4e", "description": "Day 2",
                     "startDate": "2025-09-16T10:00:00.000Z", "endDate": "2025-09-16T16:00:00.000Z"}
                ],
                "images": [{"url": "https://cdn/cover.jpg", "type": "PROMOTIONAL"}],
                "createdAt": "2025-08-01T00:00:00.000Z",
                "updatedAt": "2025-08-01T00:00:00.000Z"
            }"#,
        )
        .unwrap();

        let (start, end) = event.date_range().unwrap();
        assert_eq!(timestamp::format(&start), "2025-09-15T10:00:00.000Z");
        assert_eq!(timestamp::format(&end), "2025-09-16T16:00:00.000Z");
    }

    #[test]
    fn test_payload_strips_temporary_id() {
        let start = timestamp::parse("2025-09-15T10:00").unwrap();
        let end = timestamp::parse("2025-09-15T12:00").unwrap();
        let entry = ScheduleEntry {
            id: ScheduleId::temporary(),
            description: "Kickoff".to_string(),
            start_date: start,
            end_date: end,
        };

        let json = serde_json::to_value(entry.to_payload()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["startDate"], "2025-09-15T10:00:00.000Z");
    }
}
