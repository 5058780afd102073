use super::{CollectionPage, EditorMode, PageContext};
use crate::diff::{diff_project, normalize_project};
use crate::errors::ClientError;
use crate::forms::{ProjectDraft, ProjectForm};
use crate::models::{Project, Tag};

/// Projects dashboard list.
#[derive(Debug)]
pub struct ProjectsPage {
    ctx: PageContext,
    list: CollectionPage<Project>,
}

impl ProjectsPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            list: CollectionPage::new(),
        }
    }

    pub fn list(&self) -> &CollectionPage<Project> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CollectionPage<Project> {
        &mut self.list
    }

    pub async fn load(&mut self) {
        self.list.begin_load();
        let result = self.ctx.client.list_projects().await;
        if !self.ctx.mount.is_mounted() {
            tracing::debug!("Projects page unmounted, dropping list result");
            return;
        }
        match result {
            Ok(page) => self.list.finish_load(Ok(page.items)),
            Err(err) => {
                self.ctx.report("Failed to fetch projects", &err);
                self.list.finish_load(Err(&err));
            }
        }
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        match self.ctx.client.delete_project(id).await {
            Ok(()) => {
                if self.ctx.mount.is_mounted() {
                    self.list.remove_where(|p| p.id == id);
                    self.ctx.notifier.success("Project deleted successfully");
                }
                Ok(())
            }
            Err(err) => {
                self.ctx.report("Failed to delete project", &err);
                Err(err)
            }
        }
    }
}

/// Full-page project editor, with the tag catalog for the tag picker.
#[derive(Debug)]
pub struct ProjectEditor {
    ctx: PageContext,
    mode: EditorMode,
    form: ProjectForm,
    snapshot: Option<ProjectDraft>,
    tags: Vec<Tag>,
    loading: bool,
}

impl ProjectEditor {
    pub fn create(ctx: PageContext, max_upload_bytes: usize) -> Self {
        Self::with_mode(ctx, EditorMode::Create, max_upload_bytes)
    }

    pub fn edit(ctx: PageContext, id: impl Into<String>, max_upload_bytes: usize) -> Self {
        Self::with_mode(ctx, EditorMode::Edit(id.into()), max_upload_bytes)
    }

    fn with_mode(ctx: PageContext, mode: EditorMode, max_upload_bytes: usize) -> Self {
        Self {
            ctx,
            mode,
            form: ProjectForm::new(max_upload_bytes),
            snapshot: None,
            tags: Vec::new(),
            loading: false,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn snapshot(&self) -> Option<&ProjectDraft> {
        self.snapshot.as_ref()
    }

    /// Fetch the tag catalog and, in edit mode, the project itself.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.loading = true;
        let tags = self.ctx.client.list_tags().await;
        let project = match self.mode.id() {
            Some(id) => Some(self.ctx.client.get_project(id).await),
            None => None,
        };
        if !self.ctx.mount.is_mounted() {
            return Ok(());
        }
        self.loading = false;

        match tags {
            Ok(page) => self.tags = page.items,
            Err(err) => self.ctx.report("Failed to load tags", &err),
        }
        match project {
            Some(Ok(project)) => {
                self.adopt(&project);
                Ok(())
            }
            Some(Err(err)) => {
                self.ctx.report("Failed to load project", &err);
                Err(err)
            }
            None => Ok(()),
        }
    }

    fn adopt(&mut self, project: &Project) {
        self.form.load(project);
        self.snapshot = Some(normalize_project(project));
    }

    /// Create a tag from the picker and select it.
    pub async fn create_tag(&mut self, name: &str) -> Result<Tag, ClientError> {
        match self.ctx.client.create_tag(name).await {
            Ok(tag) => {
                self.form.add_tag(&tag.id);
                self.tags.push(tag.clone());
                self.ctx.notifier.success("Tag created successfully");
                Ok(tag)
            }
            Err(err) => {
                self.ctx.report("Failed to create tag", &err);
                Err(err)
            }
        }
    }

    pub async fn submit(&mut self) -> Result<Project, ClientError> {
        let action = match self.mode {
            EditorMode::Create => "Failed to create project",
            EditorMode::Edit(_) => "Failed to update project",
        };
        if !self.form.validate() {
            let err = ClientError::Validation(self.form.errors().clone());
            self.ctx.report(action, &err);
            return Err(err);
        }

        self.loading = true;
        let result = match self.mode.clone() {
            EditorMode::Create => self.submit_create().await,
            EditorMode::Edit(id) => self.submit_update(&id).await,
        };
        self.loading = false;

        if let Err(err) = &result {
            self.ctx.report(action, err);
        }
        result
    }

    async fn submit_create(&mut self) -> Result<Project, ClientError> {
        let project = self.ctx.client.create_project(self.form.draft()).await?;
        if self.ctx.mount.is_mounted() {
            self.form.reset();
            self.ctx.notifier.success("Project created successfully!");
        }
        Ok(project)
    }

    async fn submit_update(&mut self, id: &str) -> Result<Project, ClientError> {
        let snapshot = match &self.snapshot {
            Some(snapshot) => snapshot,
            None => return Err(ClientError::NotFound(format!("Project {} is not loaded", id))),
        };
        let patch = diff_project(snapshot, self.form.draft()).ok_or(ClientError::NoChanges)?;
        tracing::debug!("Project {} patch: {:?}", id, patch.changed_fields());

        let updated = self.ctx.client.update_project(id, &patch).await?;
        // A failed re-fetch keeps the PATCH response as the snapshot.
        let project = match self.ctx.client.get_project(id).await {
            Ok(fresh) => fresh,
            Err(err) => {
                tracing::warn!("Re-fetching project {} after update failed: {}", id, err);
                updated
            }
        };
        if self.ctx.mount.is_mounted() {
            self.adopt(&project);
            self.ctx.notifier.success("Project updated successfully!");
        }
        Ok(project)
    }

    pub async fn delete(&mut self) -> Result<(), ClientError> {
        let Some(id) = self.mode.id().map(str::to_string) else {
            return Err(ClientError::NotFound("Unsaved project cannot be deleted".into()));
        };
        match self.ctx.client.delete_project(&id).await {
            Ok(()) => {
                if self.ctx.mount.is_mounted() {
                    self.ctx.notifier.success("Project deleted successfully!");
                }
                Ok(())
            }
            Err(err) => {
                self.ctx.report("Failed to delete project", &err);
                Err(err)
            }
        }
    }
}
