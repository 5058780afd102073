//! Event service calls.

use reqwest::Method;

use super::{ApiClient, FormBody};
use crate::diff::EventPatch;
use crate::errors::ClientError;
use crate::forms::EventDraft;
use crate::models::{Attachment, Event, HasImages, Page};

/// Multipart body for `POST /events`.
pub fn event_create_form(draft: &EventDraft) -> Result<FormBody, ClientError> {
    let mut body = FormBody::new();
    body.push_text("name", draft.name.trim());
    body.push_text("description", draft.description.to_wire()?);
    body.push_text("status", draft.status.as_str());
    body.push_json("eventSchedule", &draft.schedule_payload())?;
    if let Attachment::Upload(file) = &draft.thumbnail {
        body.push_file("thumbnail", file.clone());
    }
    Ok(body)
}

/// Multipart body for `PATCH /events/{id}`: only the patched fields.
pub fn event_patch_form(patch: &EventPatch) -> Result<FormBody, ClientError> {
    let mut body = FormBody::new();
    if let Some(name) = &patch.name {
        body.push_text("name", name.trim());
    }
    if let Some(description) = &patch.description {
        body.push_text("description", description.to_wire()?);
    }
    if let Some(status) = patch.status {
        body.push_text("status", status.as_str());
    }
    if let Some(schedule) = &patch.event_schedule {
        body.push_json("eventSchedule", schedule)?;
    }
    if let Some(thumbnail) = &patch.thumbnail {
        body.push_attachment("thumbnail", "removeThumbnail", thumbnail);
    }
    Ok(body)
}

impl ApiClient {
    /// GET /api/events - List all events with derived thumbnails.
    pub async fn list_events(&self) -> Result<Page<Event>, ClientError> {
        let mut page: Page<Event> = self.get_page("/events").await?;
        page.items.iter_mut().for_each(HasImages::resolve_thumbnail);
        Ok(page)
    }

    /// GET /api/events/:id - Get a single event.
    pub async fn get_event(&self, id: &str) -> Result<Event, ClientError> {
        let mut event: Event = self.get_one(&format!("/events/{}", id)).await?;
        event.resolve_thumbnail();
        Ok(event)
    }

    /// POST /api/events - Create an event with its schedule.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event, ClientError> {
        let mut event: Event = self
            .send_form(Method::POST, "/events", event_create_form(draft)?)
            .await?;
        event.resolve_thumbnail();
        tracing::info!("Created event {} ({})", event.id, event.name);
        Ok(event)
    }

    /// PATCH /api/events/:id - Send only the changed fields.
    pub async fn update_event(&self, id: &str, patch: &EventPatch) -> Result<Event, ClientError> {
        if patch.is_empty() {
            return Err(ClientError::NoChanges);
        }
        let mut event: Event = self
            .send_form(
                Method::PATCH,
                &format!("/events/{}", id),
                event_patch_form(patch)?,
            )
            .await?;
        event.resolve_thumbnail();
        tracing::info!("Updated event {}: {:?}", id, patch.changed_fields());
        Ok(event)
    }

    /// DELETE /api/events/:id - Delete an event and its schedule.
    pub async fn delete_event(&self, id: &str) -> Result<(), ClientError> {
        self.delete_at(&format!("/events/{}", id)).await?;
        tracing::info!("Deleted event {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BlockDocument, EventStatus};

    #[test]
    fn test_status_patch_has_single_field() {
        let patch = EventPatch {
            status: Some(EventStatus::Completed),
            ..EventPatch::default()
        };
        let body = event_patch_form(&patch).unwrap();
        assert_eq!(body.field_names(), vec!["status"]);
        assert_eq!(body.get_text("status"), Some("COMPLETED"));
    }

    #[test]
    fn test_create_form_serializes_description() {
        let draft = EventDraft {
            name: "Hack Night".to_string(),
            description: BlockDocument::paragraph("Bring a laptop"),
            ..EventDraft::default()
        };
        let body = event_create_form(&draft).unwrap();
        assert_eq!(
            body.field_names(),
            vec!["name", "description", "status", "eventSchedule"]
        );
        let description = BlockDocument::parse(body.get_text("description").unwrap());
        assert!(description.same_content(&draft.description));
        assert_eq!(body.get_text("eventSchedule"), Some("[]"));
    }
}
