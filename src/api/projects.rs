//! Project service calls.

use reqwest::Method;

use super::{ApiClient, FormBody};
use crate::diff::ProjectPatch;
use crate::errors::ClientError;
use crate::forms::ProjectDraft;
use crate::models::{Attachment, HasImages, Page, Project};

/// Multipart body for `POST /projects`.
pub fn project_create_form(draft: &ProjectDraft) -> Result<FormBody, ClientError> {
    let mut body = FormBody::new();
    body.push_text("name", draft.name.trim());
    body.push_text("description", draft.description.to_wire()?);
    body.push_text("githubLink", draft.github_link.trim());
    if !draft.demo_link.trim().is_empty() {
        body.push_text("demoLink", draft.demo_link.trim());
    }
    body.push_json("techStacks", &draft.tech_stacks)?;
    body.push_json("tagIds", &draft.tags)?;
    if let Attachment::Upload(file) = &draft.thumbnail {
        body.push_file("thumbnail", file.clone());
    }
    Ok(body)
}

/// Multipart body for `PATCH /projects/{id}`: only the patched fields.
pub fn project_patch_form(patch: &ProjectPatch) -> Result<FormBody, ClientError> {
    let mut body = FormBody::new();
    if let Some(name) = &patch.name {
        body.push_text("name", name.trim());
    }
    if let Some(description) = &patch.description {
        body.push_text("description", description.to_wire()?);
    }
    if let Some(link) = &patch.github_link {
        body.push_text("githubLink", link.trim());
    }
    if let Some(link) = &patch.demo_link {
        body.push_text("demoLink", link.trim());
    }
    if let Some(stacks) = &patch.tech_stacks {
        body.push_json("techStacks", stacks)?;
    }
    if let Some(tag_ids) = &patch.tag_ids {
        body.push_json("tagIds", tag_ids)?;
    }
    if let Some(thumbnail) = &patch.thumbnail {
        body.push_attachment("thumbnail", "removeThumbnail", thumbnail);
    }
    Ok(body)
}

impl ApiClient {
    /// GET /api/projects - List all projects with derived thumbnails.
    pub async fn list_projects(&self) -> Result<Page<Project>, ClientError> {
        let mut page: Page<Project> = self.get_page("/projects").await?;
        page.items.iter_mut().for_each(HasImages::resolve_thumbnail);
        Ok(page)
    }

    /// GET /api/projects/:id - Get a single project.
    pub async fn get_project(&self, id: &str) -> Result<Project, ClientError> {
        let mut project: Project = self.get_one(&format!("/projects/{}", id)).await?;
        project.resolve_thumbnail();
        Ok(project)
    }

    /// POST /api/projects - Create a project.
    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ClientError> {
        let mut project: Project = self
            .send_form(Method::POST, "/projects", project_create_form(draft)?)
            .await?;
        project.resolve_thumbnail();
        tracing::info!("Created project {} ({})", project.id, project.name);
        Ok(project)
    }

    /// PATCH /api/projects/:id - Send only the changed fields.
    pub async fn update_project(
        &self,
        id: &str,
        patch: &ProjectPatch,
    ) -> Result<Project, ClientError> {
        if patch.is_empty() {
            return Err(ClientError::NoChanges);
        }
        let mut project: Project = self
            .send_form(
                Method::PATCH,
                &format!("/projects/{}", id),
                project_patch_form(patch)?,
            )
            .await?;
        project.resolve_thumbnail();
        tracing::info!("Updated project {}: {:?}", id, patch.changed_fields());
        Ok(project)
    }

    /// DELETE /api/projects/:id - Delete a project.
    pub async fn delete_project(&self, id: &str) -> Result<(), ClientError> {
        self.delete_at(&format!("/projects/{}", id)).await?;
        tracing::info!("Deleted project {}", id);
        Ok(())
    }
}
