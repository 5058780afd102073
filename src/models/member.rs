//! Member model matching the backend member record.

use serde::{Deserialize, Serialize};

/// Whether a member is currently active in the organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberStatus {
    #[default]
    #[serde(alias = "active")]
    Active,
    #[serde(alias = "inactive")]
    Inactive,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "ACTIVE",
            MemberStatus::Inactive => "INACTIVE",
        }
    }
}

/// A member of the organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: MemberStatus,
    /// Join date as sent by the backend (ISO timestamp)
    #[serde(default)]
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_from_backend_json() {
        let member: Member = serde_json::from_str(
            r#"{"id":"m1","name":"Jane Doe","role":"Designer","status":"ACTIVE","year":"2024-01-01T00:00:00.000Z","avatarUrl":null}"#,
        )
        .unwrap();
        assert_eq!(member.status, MemberStatus::Active);
        assert!(member.avatar_url.is_none());
    }

    #[test]
    fn test_status_accepts_lowercase() {
        let status: MemberStatus = serde_json::from_str(r#""inactive""#).unwrap();
        assert_eq!(status, MemberStatus::Inactive);
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""INACTIVE""#);
    }
}
