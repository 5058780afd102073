//! Binary attachments (member avatars, event and project thumbnails).

/// A file picked for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// State of an attachment slot in a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Attachment {
    /// Leave whatever the backend has
    #[default]
    Keep,
    /// Replace with a newly picked file
    Upload(FileUpload),
    /// Explicitly remove the stored file
    Clear,
}

impl Attachment {
    pub fn upload(&self) -> Option<&FileUpload> {
        match self {
            Attachment::Upload(file) => Some(file),
            _ => None,
        }
    }

    /// The change to transmit, if any. `Keep` never produces one.
    pub fn change(&self) -> Option<AttachmentChange> {
        match self {
            Attachment::Keep => None,
            Attachment::Upload(file) => Some(AttachmentChange::Upload(file.clone())),
            Attachment::Clear => Some(AttachmentChange::Clear),
        }
    }
}

/// An attachment change carried by a patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentChange {
    Upload(FileUpload),
    Clear,
}
