//! Error handling module for the admin client.
//!
//! Provides the client-side error taxonomy: transport failures, backend-reported
//! failures, client-side validation and no-op updates.

use std::collections::BTreeMap;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
    pub const API_ERROR: &str = "API_ERROR";
    pub const ENVELOPE_ERROR: &str = "ENVELOPE_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NO_CHANGES: &str = "NO_CHANGES";
    pub const NOT_FOUND: &str = "NOT_FOUND";
}

/// Per-field validation messages, keyed by the form field's wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field, replacing any previous one.
    pub fn set(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }

    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Convert into a result: `Ok(())` when no field failed.
    pub fn into_result(self) -> Result<(), ClientError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ClientError::Validation(self))
        }
    }
}

/// Client error type.
#[derive(Debug)]
pub enum ClientError {
    /// The request never produced a response (DNS, connect, TLS, body read)
    Transport(String),
    /// The backend answered with a non-2xx status
    Api { status: u16, message: String },
    /// The envelope reported `success: false` or was missing its payload
    Envelope { code: i64, message: String },
    /// The response body could not be decoded
    Decode(String),
    /// Client-side validation failed before any request was made
    Validation(FieldErrors),
    /// The edited draft is identical to the snapshot
    NoChanges,
    /// A positional edit referenced an entry that does not exist
    NotFound(String),
}

impl ClientError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => codes::TRANSPORT_ERROR,
            ClientError::Api { .. } => codes::API_ERROR,
            ClientError::Envelope { .. } => codes::ENVELOPE_ERROR,
            ClientError::Decode(_) => codes::DECODE_ERROR,
            ClientError::Validation(_) => codes::VALIDATION_ERROR,
            ClientError::NoChanges => codes::NO_CHANGES,
            ClientError::NotFound(_) => codes::NOT_FOUND,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ClientError::Transport(msg) => msg.clone(),
            ClientError::Api { status, message } => format!("HTTP {}: {}", status, message),
            ClientError::Envelope { message, .. } => message.clone(),
            ClientError::Decode(msg) => msg.clone(),
            ClientError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
                format!("Please fix validation errors: {}", fields.join(", "))
            }
            ClientError::NoChanges => "No changes detected to update".to_string(),
            ClientError::NotFound(msg) => msg.clone(),
        }
    }

    /// Whether the failure happened before anything was sent to the backend.
    pub fn is_client_side(&self) -> bool {
        matches!(
            self,
            ClientError::Validation(_) | ClientError::NoChanges | ClientError::NotFound(_)
        )
    }

    /// Field errors carried by a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ClientError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            tracing::error!("Response decode error: {:?}", err);
            return ClientError::Decode(format!("Response decode error: {}", err));
        }
        if let Some(status) = err.status() {
            tracing::error!("HTTP status error: {:?}", err);
            return ClientError::Api {
                status: status.as_u16(),
                message: err.to_string(),
            };
        }
        tracing::error!("Transport error: {:?}", err);
        ClientError::Transport(format!("Request failed: {}", err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ClientError::Decode(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_into_result() {
        let mut errors = FieldErrors::new();
        assert!(errors.clone().into_result().is_ok());

        errors.set("name", "Member name is required");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.error_code(), codes::VALIDATION_ERROR);
        assert_eq!(
            err.field_errors().unwrap().get("name"),
            Some("Member name is required")
        );
        assert!(err.is_client_side());
    }

    #[test]
    fn test_field_errors_clear() {
        let mut errors = FieldErrors::new();
        errors.set("role", "Member role is required");
        errors.clear("role");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_display_includes_code() {
        let err = ClientError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API_ERROR: HTTP 500: boom");
        assert!(!err.is_client_side());
        assert_eq!(
            ClientError::NoChanges.to_string(),
            "NO_CHANGES: No changes detected to update"
        );
    }
}
