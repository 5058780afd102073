//! Event form state.

use super::{
    add_schedule_entry, apply_validation, check_image, remove_schedule_entry, schedule_payload,
    update_schedule_entry, ScheduleInput,
};
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::diff::{normalize_event, validate_event};
use crate::errors::{ClientError, FieldErrors};
use crate::models::{
    Attachment, BlockDocument, Event, EventStatus, FileUpload, ScheduleEntry, SchedulePayload,
};

/// Editable event fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub description: BlockDocument,
    pub status: EventStatus,
    pub schedule: Vec<ScheduleEntry>,
    pub thumbnail: Attachment,
}

impl EventDraft {
    pub fn schedule_payload(&self) -> Vec<SchedulePayload> {
        schedule_payload(&self.schedule)
    }
}

#[derive(Debug, Clone)]
pub struct EventForm {
    draft: EventDraft,
    errors: FieldErrors,
    max_upload_bytes: usize,
}

impl Default for EventForm {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

impl EventForm {
    pub fn new(max_upload_bytes: usize) -> Self {
        Self {
            draft: EventDraft::default(),
            errors: FieldErrors::new(),
            max_upload_bytes,
        }
    }

    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
        self.errors.clear("name");
    }

    /// Store the editor's latest save.
    pub fn set_description(&mut self, description: BlockDocument) {
        self.draft.description = description;
        self.errors.clear("description");
    }

    pub fn set_status(&mut self, status: EventStatus) {
        self.draft.status = status;
        self.errors.clear("status");
    }

    /// Add a schedule entry; a rejected entry is reported on the
    /// `eventSchedule` field and the list is left as it was.
    pub fn add_schedule(&mut self, input: &ScheduleInput) -> Result<(), ClientError> {
        let added = add_schedule_entry(&mut self.draft.schedule, input).map(|_| ());
        match added {
            Ok(()) => {
                self.errors.clear("eventSchedule");
                Ok(())
            }
            Err(err) => Err(self.record(err)),
        }
    }

    pub fn update_schedule(
        &mut self,
        index: usize,
        input: &ScheduleInput,
    ) -> Result<(), ClientError> {
        update_schedule_entry(&mut self.draft.schedule, index, input).map_err(|err| self.record(err))
    }

    pub fn remove_schedule(&mut self, index: usize) -> Result<ScheduleEntry, ClientError> {
        remove_schedule_entry(&mut self.draft.schedule, index)
    }

    pub fn select_thumbnail(&mut self, file: FileUpload) -> bool {
        if let Err(message) = check_image(&file, self.max_upload_bytes) {
            self.errors.set("thumbnail", message);
            return false;
        }
        self.draft.thumbnail = Attachment::Upload(file);
        self.errors.clear("thumbnail");
        true
    }

    /// Drop a picked thumbnail without touching the stored one.
    pub fn discard_thumbnail(&mut self) {
        self.draft.thumbnail = Attachment::Keep;
    }

    /// Ask the backend to remove the stored thumbnail.
    pub fn clear_thumbnail(&mut self) {
        self.draft.thumbnail = Attachment::Clear;
    }

    pub fn validate(&mut self) -> bool {
        apply_validation(&mut self.errors, validate_event(&self.draft))
    }

    pub fn reset(&mut self) {
        self.draft = EventDraft::default();
        self.errors = FieldErrors::new();
    }

    /// Load a fetched event for editing.
    pub fn load(&mut self, event: &Event) {
        self.draft = normalize_event(event);
        self.errors = FieldErrors::new();
    }

    fn record(&mut self, err: ClientError) -> ClientError {
        if let Some(errors) = err.field_errors() {
            for (field, message) in errors.iter() {
                self.errors.set(field, message);
            }
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_schedule_sets_field_error() {
        let mut form = EventForm::default();
        let result = form.add_schedule(&ScheduleInput::new(
            "Opening",
            "2025-09-15T10:00",
            "2025-09-15T09:00",
        ));
        assert!(result.is_err());
        assert!(form.draft().schedule.is_empty());
        assert_eq!(
            form.errors().get("eventSchedule"),
            Some("End date must be after start date")
        );

        form.add_schedule(&ScheduleInput::new(
            "Opening",
            "2025-09-15T10:00",
            "2025-09-15T11:00",
        ))
        .unwrap();
        assert!(form.errors().get("eventSchedule").is_none());
        assert_eq!(form.draft().schedule.len(), 1);
    }

    #[test]
    fn test_validate_complete_draft() {
        let mut form = EventForm::default();
        assert!(!form.validate());

        form.set_name("Hack Night");
        form.set_description(BlockDocument::paragraph("Bring a laptop"));
        form.add_schedule(&ScheduleInput::new("Day 1", "2025-09-15", "2025-09-15"))
            .unwrap();
        assert!(form.validate());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_thumbnail_slots() {
        let mut form = EventForm::default();
        assert!(form.select_thumbnail(FileUpload::new("cover.jpg", "image/jpeg", vec![1, 2])));
        form.discard_thumbnail();
        assert_eq!(form.draft().thumbnail, Attachment::Keep);
        form.clear_thumbnail();
        assert_eq!(form.draft().thumbnail, Attachment::Clear);
    }
}
