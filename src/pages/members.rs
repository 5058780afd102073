use super::{CollectionPage, PageContext};
use crate::diff::{diff_member, normalize_member};
use crate::errors::ClientError;
use crate::forms::{MemberDraft, MemberForm};
use crate::models::Member;

/// Members dashboard: list, create dialog and edit dialog.
#[derive(Debug)]
pub struct MembersPage {
    ctx: PageContext,
    list: CollectionPage<Member>,
    form: MemberForm,
    editing: Option<(String, MemberDraft)>,
}

impl MembersPage {
    pub fn new(ctx: PageContext, max_upload_bytes: usize) -> Self {
        Self {
            ctx,
            list: CollectionPage::new(),
            form: MemberForm::new(max_upload_bytes),
            editing: None,
        }
    }

    pub fn list(&self) -> &CollectionPage<Member> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut CollectionPage<Member> {
        &mut self.list
    }

    pub fn form(&self) -> &MemberForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MemberForm {
        &mut self.form
    }

    /// Id of the member being edited, if the edit dialog is open.
    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|(id, _)| id.as_str())
    }

    pub async fn load(&mut self) {
        self.list.begin_load();
        let result = self.ctx.client.list_members().await;
        if !self.ctx.mount.is_mounted() {
            tracing::debug!("Members page unmounted, dropping list result");
            return;
        }
        match result {
            Ok(page) => {
                tracing::debug!("Loaded {} members", page.items.len());
                self.list.finish_load(Ok(page.items));
            }
            Err(err) => {
                self.ctx.report("Failed to fetch members", &err);
                self.list.finish_load(Err(&err));
            }
        }
    }

    pub fn start_create(&mut self) {
        self.editing = None;
        self.form.reset();
    }

    pub fn start_edit(&mut self, id: &str) -> Result<(), ClientError> {
        let member = self
            .list
            .items()
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("Member {} not found", id)))?;
        self.form.load(member);
        self.editing = Some((id.to_string(), normalize_member(member)));
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.editing = None;
        self.form.reset();
    }

    /// Create or update, depending on which dialog is open.
    pub async fn submit(&mut self) -> Result<Member, ClientError> {
        if self.editing.is_some() {
            self.update().await
        } else {
            self.create().await
        }
    }

    async fn create(&mut self) -> Result<Member, ClientError> {
        if !self.form.validate() {
            let err = ClientError::Validation(self.form.errors().clone());
            self.ctx.report("Failed to create member", &err);
            return Err(err);
        }

        match self.ctx.client.create_member(self.form.draft()).await {
            Ok(member) => {
                if self.ctx.mount.is_mounted() {
                    self.list.push(member.clone());
                    self.form.reset();
                    self.ctx.notifier.success("Member created successfully");
                }
                Ok(member)
            }
            Err(err) => {
                self.ctx.report("Failed to create member", &err);
                Err(err)
            }
        }
    }

    async fn update(&mut self) -> Result<Member, ClientError> {
        let Some((id, snapshot)) = self.editing.clone() else {
            return Err(ClientError::NotFound("No member is being edited".into()));
        };

        if !self.form.validate() {
            let err = ClientError::Validation(self.form.errors().clone());
            self.ctx.report("Failed to update member", &err);
            return Err(err);
        }
        let Some(patch) = diff_member(&snapshot, self.form.draft()) else {
            let err = ClientError::NoChanges;
            self.ctx.report("Failed to update member", &err);
            return Err(err);
        };

        match self.ctx.client.update_member(&id, &patch).await {
            Ok(member) => {
                if self.ctx.mount.is_mounted() {
                    self.list.replace_where(|m| m.id == id, member.clone());
                    self.editing = None;
                    self.form.reset();
                    self.ctx.notifier.success("Member updated successfully");
                }
                Ok(member)
            }
            Err(err) => {
                self.ctx.report("Failed to update member", &err);
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        match self.ctx.client.delete_member(id).await {
            Ok(()) => {
                if self.ctx.mount.is_mounted() {
                    self.list.remove_where(|m| m.id == id);
                    self.ctx.notifier.success("Member deleted successfully");
                }
                Ok(())
            }
            Err(err) => {
                self.ctx.report("Failed to delete member", &err);
                Err(err)
            }
        }
    }
}
