//! Project normalization, validation and patch computation.

use super::{list_changed, text_changed, when};
use crate::errors::FieldErrors;
use crate::forms::ProjectDraft;
use crate::models::{Attachment, AttachmentChange, BlockDocument, Project};

/// Changed project fields. Built only by [`diff_project`].
///
/// Contributors are managed by a separate workflow and have no slot here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<BlockDocument>,
    pub github_link: Option<String>,
    /// `Some("")` clears the demo link
    pub demo_link: Option<String>,
    pub tech_stacks: Option<Vec<String>>,
    /// Sent as `tagIds`
    pub tag_ids: Option<Vec<String>>,
    pub thumbnail: Option<AttachmentChange>,
}

impl ProjectPatch {
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
        if self.github_link.is_some() {
            fields.push("githubLink");
        }
        if self.demo_link.is_some() {
            fields.push("demoLink");
        }
        if self.tech_stacks.is_some() {
            fields.push("techStacks");
        }
        if self.tag_ids.is_some() {
            fields.push("tagIds");
        }
        if self.thumbnail.is_some() {
            fields.push("thumbnail");
        }
        fields
    }
}

/// Reshape a fetched project into editable form.
pub fn normalize_project(project: &Project) -> ProjectDraft {
    ProjectDraft {
        name: project.name.clone(),
        description: BlockDocument::parse(&project.description),
        github_link: project.github_link.clone(),
        demo_link: project.demo_link.clone().unwrap_or_default(),
        tech_stacks: project.tech_stacks.clone(),
        tags: project.tag_ids(),
        contributors: project.contributors.clone(),
        thumbnail: Attachment::Keep,
    }
}

/// Presence checks for a project draft.
pub fn validate_project(draft: &ProjectDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.set("name", "Project name is required");
    }
    if draft.github_link.trim().is_empty() {
        errors.set("githubLink", "GitHub link is required");
    }
    if draft.description.is_empty() {
        errors.set("description", "Please write description");
    }
    if draft.tech_stacks.is_empty() {
        errors.set("techStacks", "At least one tech stack is required");
    }
    if draft.tags.is_empty() {
        errors.set("tags", "At least one tag is required");
    }

    errors
}

/// Fields of `draft` that differ from `snapshot`, or `None` for a no-op.
pub fn diff_project(snapshot: &ProjectDraft, draft: &ProjectDraft) -> Option<ProjectPatch> {
    let patch = ProjectPatch {
        name: when(text_changed(Some(&snapshot.name), Some(&draft.name)), || {
            draft.name.clone()
        }),
        description: when(!snapshot.description.same_content(&draft.description), || {
            draft.description.clone()
        }),
        github_link: when(
            text_changed(Some(&snapshot.github_link), Some(&draft.github_link)),
            || draft.github_link.clone(),
        ),
        demo_link: when(
            text_changed(Some(&snapshot.demo_link), Some(&draft.demo_link)),
            || draft.demo_link.trim().to_string(),
        ),
        tech_stacks: when(list_changed(&snapshot.tech_stacks, &draft.tech_stacks), || {
            draft.tech_stacks.clone()
        }),
        tag_ids: when(list_changed(&snapshot.tags, &draft.tags), || draft.tags.clone()),
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
    use crate::models::{Contributor, FileUpload, Tag, TagRef};

    fn project() -> Project {
        Project {
            id: "p1".to_string(),
            name: "Site".to_string(),
            description: r#"{"time":1,"blocks":[{"type":"paragraph","data":{"text":"Our site"}}]}"#
                .to_string(),
            github_link: "https://github.com/org/site".to_string(),
            demo_link: None,
            thumbnail_url: None,
            images: Vec::new(),
            tech_stacks: vec!["React".to_string(), "Node".to_string()],
            tags: vec![
                TagRef::Tag(Tag {
                    id: "t1".to_string(),
                    name: "Web".to_string(),
                }),
                TagRef::Id("t2".to_string()),
            ],
            contributors: vec![Contributor {
                id: "c1".to_string(),
                name: "Ada".to_string(),
                github_username: "ada".to_string(),
                avatar_url: "https://cdn/ada.png".to_string(),
            }],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_unchanged_draft_is_noop() {
        let snapshot = normalize_project(&project());
        assert_eq!(diff_project(&snapshot, &snapshot.clone()), None);
    }

    #[test]
    fn test_reordered_tech_stacks_are_unchanged() {
        let snapshot = normalize_project(&project());
        let mut draft = snapshot.clone();
        draft.tech_stacks = vec!["Node".to_string(), "React".to_string()];
        draft.tags = vec!["t2".to_string(), "t1".to_string()];
        assert_eq!(diff_project(&snapshot, &draft), None);
    }

    #[test]
    fn test_tags_sent_as_tag_ids() {
        let snapshot = normalize_project(&project());
        let mut draft = snapshot.clone();
        draft.tags.push("t3".to_string());

        let patch = diff_project(&snapshot, &draft).unwrap();
        assert_eq!(patch.changed_fields(), vec!["tagIds"]);
        assert_eq!(patch.tag_ids.unwrap().len(), 3);
    }

    #[test]
    fn test_contributors_never_patched() {
        let snapshot = normalize_project(&project());
        let mut draft = snapshot.clone();
        draft.contributors.clear();
        assert_eq!(diff_project(&snapshot, &draft), None);
    }

    #[test]
    fn test_description_time_ignored() {
        let snapshot = normalize_project(&project());
        let mut draft = snapshot.clone();
        draft.description = BlockDocument::parse(
            r#"{"time":99,"blocks":[{"type":"paragraph","data":{"text":"Our site"}}]}"#,
        );
        assert_eq!(diff_project(&snapshot, &draft), None);
    }

    #[test]
    fn test_demo_link_null_vs_empty() {
        let snapshot = normalize_project(&project());
        let mut draft = snapshot.clone();
        draft.demo_link = "   ".to_string();
        assert_eq!(diff_project(&snapshot, &draft), None);

        draft.demo_link = "https://site.example".to_string();
        let patch = diff_project(&snapshot, &draft).unwrap();
        assert_eq!(patch.demo_link.as_deref(), Some("https://site.example"));
    }

    #[test]
    fn test_thumbnail_upload_included() {
        let snapshot = normalize_project(&project());
        let mut draft = snapshot.clone();
        draft.thumbnail = Attachment::Upload(FileUpload::new("t.png", "image/png", vec![0u8; 4]));
        let patch = diff_project(&snapshot, &draft).unwrap();
        assert_eq!(patch.changed_fields(), vec!["thumbnail"]);
    }

    #[test]
    fn test_validate_project_requires_stack_and_tag() {
        let mut draft = normalize_project(&project());
        draft.tech_stacks.clear();
        draft.tags.clear();
        let errors = validate_project(&draft);
        assert_eq!(errors.get("techStacks"), Some("At least one tech stack is required"));
        assert_eq!(errors.get("tags"), Some("At least one tag is required"));
        assert_eq!(errors.len(), 2);
    }
}
