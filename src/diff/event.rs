//! Event normalization, validation and patch computation.

use super::{text_changed, when};
use crate::errors::FieldErrors;
use crate::forms::EventDraft;
use crate::models::{
    Attachment, AttachmentChange, BlockDocument, Event, EventStatus, SchedulePayload,
};

/// Changed event fields. Built only by [`diff_event`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<BlockDocument>,
    pub status: Option<EventStatus>,
    /// Full replacement list, placeholder ids already stripped
    pub event_schedule: Option<Vec<SchedulePayload>>,
    pub thumbnail: Option<AttachmentChange>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Wire names of the fields present in this patch.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.description.is_some() {
            fields.push("description");
        }
        if self.status.is_some() {
            fields.push("status");
        }
        if self.event_schedule.is_some() {
            fields.push("eventSchedule");
        }
        if self.thumbnail.is_some() {
            fields.push("thumbnail");
        }
        fields
    }
}

/// Reshape a fetched event into editable form.
pub fn normalize_event(event: &Event) -> EventDraft {
    EventDraft {
        name: event.name.clone(),
        description: BlockDocument::parse(&event.description),
        status: event.status,
        schedule: event.event_schedule.clone(),
        thumbnail: Attachment::Keep,
    }
}

/// Presence checks for an event draft.
pub fn validate_event(draft: &EventDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.set("name", "Event name is required");
    }
    if draft.description.is_empty() {
        errors.set("description", "Please write event description");
    }
    if draft.schedule.is_empty() {
        errors.set("eventSchedule", "At least one schedule is required");
    }

    errors
}

/// Fields of `draft` that differ from `snapshot`, or `None` for a no-op.
pub fn diff_event(snapshot: &EventDraft, draft: &EventDraft) -> Option<EventPatch> {
    let patch = EventPatch {
        name: when(text_changed(Some(&snapshot.name), Some(&draft.name)), || {
            draft.name.clone()
        }),
        description: when(!snapshot.description.same_content(&draft.description), || {
            draft.description.clone()
        }),
        status: when(snapshot.status != draft.status, || draft.status),
        event_schedule: when(snapshot.schedule != draft.schedule, || draft.schedule_payload()),
        thumbnail: draft.thumbnail.change(),
    };

    if patch.is_empty() {
        None
    } else {
        Some(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{timestamp, Block, ScheduleEntry, ScheduleId};

    const SERVER_ID: &str = "3f2b8c1e-9d4a-4b6f-8e2a-1c5d7f9a0b3e";

    fn event() -> Event {
        Event {
            id: "e1".to_string(),
            name: "Hack Night".to_string(),
            description: r#"{"time":1726000000000,"blocks":[{"type":"paragraph","data":{"text":"Bring a laptop"}}],"version":"2.30.2"}"#.to_string(),
            status: EventStatus::Upcoming,
            event_schedule: vec![ScheduleEntry {
                id: ScheduleId::Persisted(SERVER_ID.to_string()),
                description: "Day 1".to_string(),
                start_date: timestamp::parse("2025-09-15T10:00:00.000Z").unwrap(),
                end_date: timestamp::parse("2025-09-15T18:00:00.000Z").unwrap(),
            }],
            images: Vec::new(),
            thumbnail_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_unchanged_draft_is_noop() {
        let snapshot = normalize_event(&event());
        assert_eq!(diff_event(&snapshot, &snapshot.clone()), None);
    }

    #[test]
    fn test_status_only_change() {
        let snapshot = normalize_event(&event());
        let mut draft = snapshot.clone();
        draft.status = EventStatus::Completed;

        let patch = diff_event(&snapshot, &draft).unwrap();
        assert_eq!(patch.changed_fields(), vec!["status"]);
        assert_eq!(patch.status, Some(EventStatus::Completed));
    }

    #[test]
    fn test_description_resave_ignores_time() {
        let snapshot = normalize_event(&event());
        let mut draft = snapshot.clone();
        draft.description.time = Some(1799999999999);
        assert_eq!(diff_event(&snapshot, &draft), None);

        draft.description.blocks.push(Block::paragraph("Snacks provided"));
        let patch = diff_event(&snapshot, &draft).unwrap();
        assert_eq!(patch.changed_fields(), vec!["description"]);
    }

    #[test]
    fn test_schedule_change_strips_temporary_ids() {
        let snapshot = normalize_event(&event());
        let mut draft = snapshot.clone();
        draft.schedule.push(ScheduleEntry {
            id: ScheduleId::Temporary("temp-1736000000000".to_string()),
            description: "Day 2".to_string(),
            start_date: timestamp::parse("2025-09-16T10:00").unwrap(),
            end_date: timestamp::parse("2025-09-16T12:00").unwrap(),
        });

        let patch = diff_event(&snapshot, &draft).unwrap();
        let schedule = patch.event_schedule.unwrap();
        assert_eq!(schedule[0].id.as_deref(), Some(SERVER_ID));
        assert_eq!(schedule[1].id, None);
    }

    #[test]
    fn test_validate_event() {
        let errors = validate_event(&EventDraft::default());
        assert_eq!(errors.len(), 3);
        assert!(validate_event(&normalize_event(&event())).is_empty());
    }
}
