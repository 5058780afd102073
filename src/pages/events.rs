use super::{CollectionPage, PageContext};
use crate::diff::{diff_event, normalize_event};
use crate::errors::ClientError;
use crate::forms::{EventDraft, EventForm};
use crate::models::Event;

/// Whether an editor is creating a new record or editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(String),
}

impl EditorMode {
    pub fn id(&self) -> Option<&str> {
        match self {
            EditorMode::Create => None,
            EditorMode::Edit(id) => Some(id),
        }
    }
}

/// Events dashboard list.
#[derive(Debug)]
pub struct EventsPage {
    ctx: PageContext,
    list: CollectionPage<Event>,
}

impl EventsPage {
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            list: CollectionPage::new(),
        }
    }

    pub fn list(&self) -> &CollectionPage<Event> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CollectionPage<Event> {
        &mut self.list
    }

    pub async fn load(&mut self) {
        self.list.begin_load();
        let result = self.ctx.client.list_events().await;
        if !self.ctx.mount.is_mounted() {
            tracing::debug!("Events page unmounted, dropping list result");
            return;
        }
        match result {
            Ok(page) => self.list.finish_load(Ok(page.items)),
            Err(err) => {
                self.ctx.report("Failed to fetch events", &err);
                self.list.finish_load(Err(&err));
            }
        }
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        match self.ctx.client.delete_event(id).await {
            Ok(()) => {
                if self.ctx.mount.is_mounted() {
                    self.list.remove_where(|e| e.id == id);
                    self.ctx.notifier.success("Event deleted successfully");
                }
                Ok(())
            }
            Err(err) => {
                self.ctx.report("Failed to delete event", &err);
                Err(err)
            }
        }
    }
}

/// Full-page event editor.
///
/// In edit mode the fetched event is kept as a normalized snapshot; submit
/// sends only the fields that differ from it and then re-fetches the event.
#[derive(Debug)]
pub struct EventEditor {
    ctx: PageContext,
    mode: EditorMode,
    form: EventForm,
    snapshot: Option<EventDraft>,
    loading: bool,
}

impl EventEditor {
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
            form: EventForm::new(max_upload_bytes),
            snapshot: None,
            loading: false,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EventForm {
        &mut self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn snapshot(&self) -> Option<&EventDraft> {
        self.snapshot.as_ref()
    }

    /// Fetch the event being edited. A no-op in create mode.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let Some(id) = self.mode.id().map(str::to_string) else {
            return Ok(());
        };

        self.loading = true;
        let result = self.ctx.client.get_event(&id).await;
        if !self.ctx.mount.is_mounted() {
            return result.map(|_| ());
        }
        self.loading = false;

        match result {
            Ok(event) => {
                self.adopt(&event);
                Ok(())
            }
            Err(err) => {
                self.ctx.report("Failed to load event", &err);
                Err(err)
            }
        }
    }

    fn adopt(&mut self, event: &Event) {
        self.form.load(event);
        self.snapshot = Some(normalize_event(event));
    }

    pub async fn submit(&mut self) -> Result<Event, ClientError> {
        let action = match self.mode {
            EditorMode::Create => "Failed to create event",
            EditorMode::Edit(_) => "Failed to update event",
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

    async fn submit_create(&mut self) -> Result<Event, ClientError> {
        let event = self.ctx.client.create_event(self.form.draft()).await?;
        if self.ctx.mount.is_mounted() {
            self.form.reset();
            self.ctx.notifier.success("Event created successfully!");
        }
        Ok(event)
    }

    async fn submit_update(&mut self, id: &str) -> Result<Event, ClientError> {
        let snapshot = match &self.snapshot {
            Some(snapshot) => snapshot,
            None => return Err(ClientError::NotFound(format!("Event {} is not loaded", id))),
        };
        let patch = diff_event(snapshot, self.form.draft()).ok_or(ClientError::NoChanges)?;
        tracing::debug!("Event {} patch: {:?}", id, patch.changed_fields());

        let updated = self.ctx.client.update_event(id, &patch).await?;
        // A failed re-fetch keeps the PATCH response as the snapshot.
        let event = match self.ctx.client.get_event(id).await {
            Ok(fresh) => fresh,
            Err(err) => {
                tracing::warn!("Re-fetching event {} after update failed: {}", id, err);
                updated
            }
        };
        if self.ctx.mount.is_mounted() {
            self.adopt(&event);
            self.ctx.notifier.success("Event updated successfully!");
        }
        Ok(event)
    }

    pub async fn delete(&mut self) -> Result<(), ClientError> {
        let Some(id) = self.mode.id().map(str::to_string) else {
            return Err(ClientError::NotFound("Unsaved event cannot be deleted".into()));
        };
        match self.ctx.client.delete_event(&id).await {
            Ok(()) => {
                if self.ctx.mount.is_mounted() {
                    self.ctx.notifier.success("Event deleted successfully!");
                }
                Ok(())
            }
            Err(err) => {
                self.ctx.report("Failed to delete event", &err);
                Err(err)
            }
        }
    }
}
