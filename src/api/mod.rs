//! REST API client.
//!
//! Wraps the backend's `/api` endpoints with [`reqwest`], unwrapping the
//! `{ success, message, code, data, pagination }` envelope into bare records.

mod events;
mod form;
mod members;
mod projects;
mod tags;

pub use events::*;
pub use form::*;
pub use members::*;
pub use projects::*;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::errors::ClientError;
use crate::models::{Envelope, ListData, Page};

/// HTTP client for the organization site backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration, attaching the bearer token if set.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();

        if let Some(token) = &config.api_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| ClientError::Transport("API token is not a valid header".into()))?;
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, value);
            builder = builder.default_headers(headers);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ---- request helpers ----

    /// GET a single record.
    pub(crate) async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        Self::unwrap_data(Self::read_envelope(response).await?)
    }

    /// GET a collection, accepting flat or nested `data`.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Page<T>, ClientError> {
        tracing::debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        let envelope = Self::read_envelope::<ListData<T>>(response).await?;
        let pagination = envelope.pagination.clone();
        let list = Self::unwrap_data(envelope)?;
        Ok(Page::from_list(list, pagination))
    }

    /// Send a JSON body and unwrap the returned record.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("{} {} (json)", method, path);
        let response = self
            .http
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Self::unwrap_data(Self::read_envelope(response).await?)
    }

    /// Send a multipart body and unwrap the returned record.
    pub(crate) async fn send_form<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: FormBody,
    ) -> Result<T, ClientError> {
        tracing::debug!("{} {} (multipart: {:?})", method, path, form.field_names());
        let response = self
            .http
            .request(method, self.url(path))
            .multipart(form.into_multipart()?)
            .send()
            .await?;
        Self::unwrap_data(Self::read_envelope(response).await?)
    }

    /// DELETE a record; the envelope's `data` is ignored.
    pub(crate) async fn delete_at(&self, path: &str) -> Result<(), ClientError> {
        tracing::debug!("DELETE {}", path);
        let response = self.http.delete(self.url(path)).send().await?;
        Self::read_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    /// Check the HTTP status and the envelope's `success` flag.
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .map(|envelope| envelope.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| {
                    if body.trim().is_empty() {
                        status.canonical_reason().unwrap_or("request failed").to_string()
                    } else {
                        body.clone()
                    }
                });
            tracing::warn!("Backend returned {}: {}", status, message);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        if body.trim().is_empty() {
            return Ok(Envelope {
                success: true,
                message: String::new(),
                code: i64::from(status.as_u16()),
                data: None,
                pagination: None,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)?;
        if !envelope.success {
            tracing::warn!(
                "Backend reported failure (code {}): {}",
                envelope.code,
                envelope.message
            );
            return Err(ClientError::Envelope {
                code: envelope.code,
                message: if envelope.message.is_empty() {
                    "Request was not successful".to_string()
                } else {
                    envelope.message
                },
            });
        }

        Ok(envelope)
    }

    fn unwrap_data<T>(envelope: Envelope<T>) -> Result<T, ClientError> {
        let code = envelope.code;
        envelope.data.ok_or_else(|| ClientError::Envelope {
            code,
            message: "Response is missing data".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_base_url() {
        let client = ApiClient::new(&Config::with_base_url("http://localhost:3000/api/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
        assert_eq!(client.url("/members"), "http://localhost:3000/api/members");
    }

    #[test]
    fn test_new_rejects_bad_token() {
        let mut config = Config::default();
        config.api_token = Some("bad\ntoken".to_string());
        assert!(matches!(
            ApiClient::new(&config),
            Err(ClientError::Transport(_))
        ));
    }

    #[test]
    fn test_unwrap_data_missing() {
        let envelope: Envelope<String> = Envelope {
            success: true,
            message: String::new(),
            code: 200,
            data: None,
            pagination: None,
        };
        assert!(matches!(
            ApiClient::unwrap_data(envelope),
            Err(ClientError::Envelope { code: 200, .. })
        ));
    }
}
