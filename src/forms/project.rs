//! Project form state.

use super::{apply_validation, check_image};
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::diff::{normalize_project, validate_project};
use crate::errors::FieldErrors;
use crate::models::{Attachment, BlockDocument, Contributor, FileUpload, Project};

/// Editable project fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: BlockDocument,
    pub github_link: String,
    pub demo_link: String,
    pub tech_stacks: Vec<String>,
    /// Tag ids
    pub tags: Vec<String>,
    /// Read-only here; edited through a separate workflow
    pub contributors: Vec<Contributor>,
    pub thumbnail: Attachment,
}

/// Text inputs of the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    GithubLink,
    DemoLink,
}

impl ProjectField {
    pub fn key(&self) -> &'static str {
        match self {
            ProjectField::Name => "name",
            ProjectField::GithubLink => "githubLink",
            ProjectField::DemoLink => "demoLink",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectForm {
    draft: ProjectDraft,
    errors: FieldErrors,
    max_upload_bytes: usize,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

impl ProjectForm {
    pub fn new(max_upload_bytes: usize) -> Self {
        Self {
            draft: ProjectDraft::default(),
            errors: FieldErrors::new(),
            max_upload_bytes,
        }
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_text(&mut self, field: ProjectField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProjectField::Name => self.draft.name = value,
            ProjectField::GithubLink => self.draft.github_link = value,
            ProjectField::DemoLink => self.draft.demo_link = value,
        }
        self.errors.clear(field.key());
    }

    pub fn set_description(&mut self, description: BlockDocument) {
        self.draft.description = description;
        self.errors.clear("description");
    }

    /// Add a technology label. Blank and duplicate labels are ignored.
    pub fn add_tech_stack(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.draft.tech_stacks.iter().any(|s| s == label) {
            return false;
        }
        self.draft.tech_stacks.push(label.to_string());
        self.errors.clear("techStacks");
        true
    }

    pub fn remove_tech_stack(&mut self, label: &str) {
        self.draft.tech_stacks.retain(|s| s != label);
    }

    /// Add a tag by id. Duplicates are ignored.
    pub fn add_tag(&mut self, tag_id: &str) -> bool {
        if tag_id.is_empty() || self.draft.tags.iter().any(|t| t == tag_id) {
            return false;
        }
        self.draft.tags.push(tag_id.to_string());
        self.errors.clear("tags");
        true
    }

    pub fn remove_tag(&mut self, tag_id: &str) {
        self.draft.tags.retain(|t| t != tag_id);
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

    pub fn discard_thumbnail(&mut self) {
        self.draft.thumbnail = Attachment::Keep;
    }

    pub fn clear_thumbnail(&mut self) {
        self.draft.thumbnail = Attachment::Clear;
    }

    pub fn validate(&mut self) -> bool {
        apply_validation(&mut self.errors, validate_project(&self.draft))
    }

    pub fn reset(&mut self) {
        self.draft = ProjectDraft::default();
        self.errors = FieldErrors::new();
    }

    pub fn load(&mut self, project: &Project) {
        self.draft = normalize_project(project);
        self.errors = FieldErrors::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_stack_dedup() {
        let mut form = ProjectForm::default();
        assert!(form.add_tech_stack("React"));
        assert!(!form.add_tech_stack(" React "));
        assert!(!form.add_tech_stack("  "));
        assert!(form.add_tech_stack("Node.js"));
        form.remove_tech_stack("React");
        assert_eq!(form.draft().tech_stacks, vec!["Node.js".to_string()]);
    }

    #[test]
    fn test_tags_dedup_and_clear_error() {
        let mut form = ProjectForm::default();
        assert!(!form.validate());
        assert!(form.errors().get("tags").is_some());

        assert!(form.add_tag("t1"));
        assert!(!form.add_tag("t1"));
        assert!(form.errors().get("tags").is_none());
        form.remove_tag("t1");
        assert!(form.draft().tags.is_empty());
    }

    #[test]
    fn test_complete_draft_validates() {
        let mut form = ProjectForm::default();
        form.set_text(ProjectField::Name, "Site");
        form.set_text(ProjectField::GithubLink, "https://github.com/org/site");
        form.set_description(BlockDocument::paragraph("Our site"));
        form.add_tech_stack("React");
        form.add_tag("t1");
        assert!(form.validate());
    }
}
