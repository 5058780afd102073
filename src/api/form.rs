//! Multipart request bodies for entities that carry file attachments.
//!
//! Scalars travel as text parts; lists and nested records as JSON-encoded text
//! parts; files as file parts.

use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::errors::ClientError;
use crate::models::{AttachmentChange, FileUpload};

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    File(FileUpload),
}

/// Ordered multipart fields, inspectable before sending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormBody {
    fields: Vec<(String, FormValue)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, name: &str, value: impl Into<String>) {
        self.fields
            .push((name.to_string(), FormValue::Text(value.into())));
    }

    pub fn push_json<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
    ) -> Result<(), ClientError> {
        self.push_text(name, serde_json::to_string(value)?);
        Ok(())
    }

    pub fn push_file(&mut self, name: &str, file: FileUpload) {
        self.fields.push((name.to_string(), FormValue::File(file)));
    }

    /// Upload under `name`, or send `remove_flag=true` to clear it.
    pub fn push_attachment(&mut self, name: &str, remove_flag: &str, change: &AttachmentChange) {
        match change {
            AttachmentChange::Upload(file) => self.push_file(name, file.clone()),
            AttachmentChange::Clear => self.push_text(remove_flag, "true"),
        }
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.fields.iter().find_map(|(field, value)| match value {
            FormValue::Text(text) if field == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn get_file(&self, name: &str) -> Option<&FileUpload> {
        self.fields.iter().find_map(|(field, value)| match value {
            FormValue::File(file) if field == name => Some(file),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn into_multipart(self) -> Result<Form, ClientError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = match value {
                FormValue::Text(text) => form.text(name, text),
                FormValue::File(file) => {
                    let part = Part::bytes(file.bytes)
                        .file_name(file.file_name)
                        .mime_str(&file.content_type)?;
                    form.part(name, part)
                }
            };
        }
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_order() {
        let mut body = FormBody::new();
        body.push_text("name", "Jane Doe");
        body.push_json("tagIds", &["t1", "t2"]).unwrap();
        body.push_file("avatar", FileUpload::new("a.png", "image/png", vec![1]));

        assert_eq!(body.field_names(), vec!["name", "tagIds", "avatar"]);
        assert_eq!(body.get_text("tagIds"), Some(r#"["t1","t2"]"#));
        assert_eq!(body.get_file("avatar").unwrap().file_name, "a.png");
        assert!(body.get_text("avatar").is_none());
    }

    #[test]
    fn test_clear_attachment_sends_flag() {
        let mut body = FormBody::new();
        body.push_attachment("thumbnail", "removeThumbnail", &AttachmentChange::Clear);
        assert_eq!(body.field_names(), vec!["removeThumbnail"]);
        assert_eq!(body.get_text("removeThumbnail"), Some("true"));
    }

    #[test]
    fn test_into_multipart_accepts_valid_mime() {
        let mut body = FormBody::new();
        body.push_file("avatar", FileUpload::new("a.png", "image/png", vec![1]));
        assert!(body.into_multipart().is_ok());
    }
}
