//! Tag model matching the backend tag record.

use serde::{Deserialize, Serialize};

/// A reusable label for categorizing projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// Request body for creating a new tag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    pub name: String,
}

/// A project's tag as sent by the backend: a full tag or just its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagRef {
    Tag(Tag),
    Id(String),
}

impl TagRef {
    pub fn id(&self) -> &str {
        match self {
            TagRef::Tag(tag) => &tag.id,
            TagRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            TagRef::Tag(tag) => Some(&tag.name),
            TagRef::Id(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_refs_mixed() {
        let refs: Vec<TagRef> =
            serde_json::from_str(r#"[{"id":"t1","name":"Web"},"t2"]"#).unwrap();
        assert_eq!(refs[0].id(), "t1");
        assert_eq!(refs[0].name(), Some("Web"));
        assert_eq!(refs[1].id(), "t2");
        assert_eq!(refs[1].name(), None);
    }
}
