//! Tag service calls. Tags have no attachments and travel as JSON.

use reqwest::Method;

use super::ApiClient;
use crate::errors::{ClientError, FieldErrors};
use crate::models::{CreateTagRequest, Page, Tag};

impl ApiClient {
    /// GET /api/tags - List all tags.
    pub async fn list_tags(&self) -> Result<Page<Tag>, ClientError> {
        self.get_page("/tags").await
    }

    /// POST /api/tags - Create a new tag.
    pub async fn create_tag(&self, name: &str) -> Result<Tag, ClientError> {
        let name = name.trim();
        if name.is_empty() {
            let mut errors = FieldErrors::new();
            errors.set("name", "Tag name is required");
            return Err(ClientError::Validation(errors));
        }

        let request = CreateTagRequest {
            name: name.to_string(),
        };
        let tag: Tag = self.send_json(Method::POST, "/tags", &request).await?;
        tracing::info!("Created tag {} ({})", tag.id, tag.name);
        Ok(tag)
    }
}
