//! Member form state.

use chrono::Utc;

use super::{apply_validation, check_image};
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::diff::{normalize_member, validate_member};
use crate::errors::FieldErrors;
use crate::models::{Attachment, FileUpload, Member, MemberStatus};

/// Editable member fields.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberDraft {
    pub name: String,
    pub role: String,
    pub status: MemberStatus,
    /// Join date, `YYYY-MM-DD`
    pub year: String,
    pub avatar: Attachment,
    /// Preview of the stored avatar; display only, never diffed
    pub avatar_url: Option<String>,
}

impl Default for MemberDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            status: MemberStatus::Active,
            year: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            avatar: Attachment::Keep,
            avatar_url: None,
        }
    }
}

/// Text inputs of the member form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberField {
    Name,
    Role,
    Year,
}

impl MemberField {
    pub fn key(&self) -> &'static str {
        match self {
            MemberField::Name => "name",
            MemberField::Role => "role",
            MemberField::Year => "year",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemberForm {
    draft: MemberDraft,
    errors: FieldErrors,
    max_upload_bytes: usize,
}

impl Default for MemberForm {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

impl MemberForm {
    pub fn new(max_upload_bytes: usize) -> Self {
        Self {
            draft: MemberDraft::default(),
            errors: FieldErrors::new(),
            max_upload_bytes,
        }
    }

    pub fn draft(&self) -> &MemberDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_text(&mut self, field: MemberField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MemberField::Name => self.draft.name = value,
            MemberField::Role => self.draft.role = value,
            MemberField::Year => self.draft.year = value,
        }
        self.errors.clear(field.key());
    }

    pub fn set_status(&mut self, status: MemberStatus) {
        self.draft.status = status;
        self.errors.clear("status");
    }

    /// Pick a new avatar. Non-images and oversized files are refused with an
    /// `avatar` field error and leave the draft untouched.
    pub fn select_avatar(&mut self, file: FileUpload) -> bool {
        if let Err(message) = check_image(&file, self.max_upload_bytes) {
            self.errors.set("avatar", message);
            return false;
        }
        self.draft.avatar = Attachment::Upload(file);
        self.errors.clear("avatar");
        true
    }

    /// Drop a picked avatar and its preview without touching the stored one.
    pub fn discard_avatar(&mut self) {
        self.draft.avatar = Attachment::Keep;
        self.draft.avatar_url = None;
    }

    /// Ask the backend to remove the stored avatar.
    pub fn clear_avatar(&mut self) {
        self.draft.avatar = Attachment::Clear;
        self.draft.avatar_url = None;
    }

    pub fn validate(&mut self) -> bool {
        apply_validation(&mut self.errors, validate_member(&self.draft))
    }

    pub fn reset(&mut self) {
        self.draft = MemberDraft::default();
        self.errors = FieldErrors::new();
    }

    /// Load a fetched member for editing.
    pub fn load(&mut self, member: &Member) {
        self.draft = normalize_member(member);
        self.errors = FieldErrors::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_text_clears_field_error() {
        let mut form = MemberForm::default();
        assert!(!form.validate());
        assert!(form.errors().get("name").is_some());

        form.set_text(MemberField::Name, "Jane Doe");
        assert!(form.errors().get("name").is_none());
        assert!(form.errors().get("role").is_some());
    }

    #[test]
    fn test_select_avatar_rejects_non_image() {
        let mut form = MemberForm::default();
        assert!(!form.select_avatar(FileUpload::new("cv.pdf", "application/pdf", vec![1])));
        assert_eq!(form.errors().get("avatar"), Some("Please select a valid image file"));
        assert_eq!(form.draft().avatar, Attachment::Keep);
    }

    #[test]
    fn test_select_avatar_rejects_oversized() {
        let mut form = MemberForm::new(4);
        assert!(!form.select_avatar(FileUpload::new("a.png", "image/png", vec![0u8; 5])));
        assert_eq!(form.errors().get("avatar"), Some("Image size should be less than 4 bytes"));
    }

    #[test]
    fn test_select_then_discard_avatar() {
        let mut form = MemberForm::default();
        assert!(form.select_avatar(FileUpload::new("a.png", "image/png", vec![0u8; 5])));
        assert!(form.draft().avatar.upload().is_some());
        form.discard_avatar();
        assert_eq!(form.draft().avatar, Attachment::Keep);
    }

    #[test]
    fn test_load_and_reset() {
        let mut form = MemberForm::default();
        form.load(&Member {
            id: "m1".to_string(),
            name: "Jane Doe".to_string(),
            role: "Designer".to_string(),
            status: MemberStatus::Inactive,
            year: "2023-05-02T00:00:00.000Z".to_string(),
            avatar_url: None,
        });
        assert_eq!(form.draft().year, "2023-05-02");
        assert!(form.validate());

        form.reset();
        assert_eq!(form.draft().name, "");
        assert_eq!(form.draft().status, MemberStatus::Active);
    }
}
