//! Member normalization, validation and patch computation.

use super::{text_changed, when};
use crate::errors::FieldErrors;
use crate::forms::MemberDraft;
use crate::models::{timestamp, Attachment, AttachmentChange, Member, MemberStatus};

/// Changed member fields. Built only by [`diff_member`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub role: Option<String>,
    pub status: Option<MemberStatus>,
    /// Join date as `YYYY-MM-DD`
    pub year: Option<String>,
    pub avatar: Option<AttachmentChange>,
}

impl MemberPatch {
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Wire names of the fields present in this patch.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.role.is_some() {
            fields.push("role");
        }
        if self.status.is_some() {
            fields.push("status");
        }
        if self.year.is_some() {
            fields.push("year");
        }
        if self.avatar.is_some() {
            fields.push("avatar");
        }
        fields
    }
}

/// Reduce a join date to `YYYY-MM-DD`; unparseable input is kept as typed.
pub fn normalize_year(raw: &str) -> String {
    timestamp::parse_date(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

/// Reshape a fetched member into editable form.
pub fn normalize_member(member: &Member) -> MemberDraft {
    MemberDraft {
        name: member.name.clone(),
        role: member.role.clone(),
        status: member.status,
        year: normalize_year(&member.year),
        avatar: Attachment::Keep,
        avatar_url: member
            .avatar_url
            .clone()
            .filter(|url| !url.trim().is_empty()),
    }
}

/// Presence checks for a member draft.
pub fn validate_member(draft: &MemberDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.set("name", "Member name is required");
    }
    if draft.role.trim().is_empty() {
        errors.set("role", "Member role is required");
    }
    if draft.year.trim().is_empty() {
        errors.set("year", "Member year is required");
    } else if timestamp::parse_date(&draft.year).is_none() {
        errors.set("year", "Member year must be a date (YYYY-MM-DD)");
    }

    errors
}

/// Fields of `draft` that differ from `snapshot`, or `None` for a no-op.
pub fn diff_member(snapshot: &MemberDraft, draft: &MemberDraft) -> Option<MemberPatch> {
    let patch = MemberPatch {
        name: when(text_changed(Some(&snapshot.name), Some(&draft.name)), || {
            draft.name.clone()
        }),
        role: when(text_changed(Some(&snapshot.role), Some(&draft.role)), || {
            draft.role.clone()
        }),
        status: when(snapshot.status != draft.status, || draft.status),
        year: when(
            normalize_year(&snapshot.year) != normalize_year(&draft.year),
            || normalize_year(&draft.year),
        ),
        avatar: draft.avatar.change(),
    };

    if patch.is_empty() {
        None
    } else {
        Some(patch)
    }
}
