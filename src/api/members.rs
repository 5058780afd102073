//! Member service calls.

use reqwest::Method;

use super::{ApiClient, FormBody};
use crate::diff::{normalize_year, MemberPatch};
use crate::errors::ClientError;
use crate::forms::MemberDraft;
use crate::models::{timestamp, Attachment, Member, Page};

/// Join dates travel as a UTC-midnight timestamp.
fn year_to_wire(year: &str) -> String {
    timestamp::parse_date(year)
        .map(|date| format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")))
        .unwrap_or_else(|| normalize_year(year))
}

/// Multipart body for `POST /members`.
pub fn member_create_form(draft: &MemberDraft) -> FormBody {
    let mut body = FormBody::new();
    body.push_text("name", draft.name.trim());
    body.push_text("role", draft.role.trim());
    body.push_text("status", draft.status.as_str());
    body.push_text("year", year_to_wire(&draft.year));
    if let Attachment::Upload(file) = &draft.avatar {
        body.push_file("avatar", file.clone());
    }
    body
}

/// Multipart body for `PATCH /members/{id}`: only the patched fields.
pub fn member_patch_form(patch: &MemberPatch) -> FormBody {
    let mut body = FormBody::new();
    if let Some(name) = &patch.name {
        body.push_text("name", name.trim());
    }
    if let Some(role) = &patch.role {
        body.push_text("role", role.trim());
    }
    if let Some(status) = patch.status {
        body.push_text("status", status.as_str());
    }
    if let Some(year) = &patch.year {
        body.push_text("year", year_to_wire(year));
    }
    if let Some(avatar) = &patch.avatar {
        body.push_attachment("avatar", "removeAvatar", avatar);
    }
    body
}

impl ApiClient {
    /// GET /api/members - List all members.
    pub async fn list_members(&self) -> Result<Page<Member>, ClientError> {
        self.get_page("/members").await
    }

    /// GET /api/members/:id - Get a single member.
    pub async fn get_member(&self, id: &str) -> Result<Member, ClientError> {
        self.get_one(&format!("/members/{}", id)).await
    }

    /// POST /api/members - Create a member (multipart, optional avatar).
    pub async fn create_member(&self, draft: &MemberDraft) -> Result<Member, ClientError> {
        let member: Member = self
            .send_form(Method::POST, "/members", member_create_form(draft))
            .await?;
        tracing::info!("Created member {} ({})", member.id, member.name);
        Ok(member)
    }

    /// PATCH /api/members/:id - Send only the changed fields.
    pub async fn update_member(&self, id: &str, patch: &MemberPatch) -> Result<Member, ClientError> {
        if patch.is_empty() {
            return Err(ClientError::NoChanges);
        }
        let member: Member = self
            .send_form(
                Method::PATCH,
                &format!("/members/{}", id),
                member_patch_form(patch),
            )
            .await?;
        tracing::info!("Updated member {}: {:?}", id, patch.changed_fields());
        Ok(member)
    }

    /// DELETE /api/members/:id - Delete a member.
    pub async fn delete_member(&self, id: &str) -> Result<(), ClientError> {
        self.delete_at(&format!("/members/{}", id)).await?;
        tracing::info!("Deleted member {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttachmentChange, FileUpload, MemberStatus};

    #[test]
    fn test_create_form_without_avatar() {
        let draft = MemberDraft {
            name: "Jane Doe".to_string(),
            role: "Designer".to_string(),
            status: MemberStatus::Active,
            year: "2024-01-01".to_string(),
            ..MemberDraft::default()
        };

        let body = member_create_form(&draft);
        assert_eq!(body.field_names(), vec!["name", "role", "status", "year"]);
        assert_eq!(body.get_text("year"), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(body.get_text("status"), Some("ACTIVE"));
    }

    #[test]
    fn test_patch_form_only_patched_fields() {
        let patch = MemberPatch {
            role: Some("Lead".to_string()),
            avatar: Some(AttachmentChange::Upload(FileUpload::new(
                "a.png",
                "image/png",
                vec![1],
            ))),
            ..MemberPatch::default()
        };
        let body = member_patch_form(&patch);
        assert_eq!(body.field_names(), vec!["role", "avatar"]);
    }

    #[test]
    fn test_patch_form_clear_avatar() {
        let patch = MemberPatch {
            avatar: Some(AttachmentChange::Clear),
            ..MemberPatch::default()
        };
        let body = member_patch_form(&patch);
        assert_eq!(body.get_text("removeAvatar"), Some("true"));
    }
}
