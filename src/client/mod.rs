//! Persistence client: the editor's view of the backend store.
//!
//! Everything the editor persists goes through these five operations. The
//! client never exposes the backend's storage envelope; it speaks plain
//! `FormSchema` values.

use reqwest::StatusCode;
use serde::Serialize;

use crate::errors::ErrorResponse;
use crate::models::{DeleteFormResponse, FieldDefinition, FormSchema};

/// Failure taxonomy for persistence operations.
#[derive(Debug)]
pub enum ClientError {
    /// The server rejected the request body (missing title/fields).
    Validation(String),
    /// No form matches the requested id.
    NotFound(String),
    /// The server reported an unexpected fault.
    Server(String),
    /// The request never completed (transport failure).
    Network(String),
}

impl ClientError {
    pub fn message(&self) -> &str {
        match self {
            ClientError::Validation(msg)
            | ClientError::NotFound(msg)
            | ClientError::Server(msg)
            | ClientError::Network(msg) => msg,
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            ClientError::Validation(_) => "validation error",
            ClientError::NotFound(_) => "not found",
            ClientError::Server(_) => "server error",
            ClientError::Network(_) => "network error",
        };
        write!(f, "{}: {}", kind, self.message())
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

#[derive(Serialize)]
struct SaveFormBody<'a> {
    title: &'a str,
    fields: &'a [FieldDefinition],
}

/// HTTP client for the forms REST API.
#[derive(Debug, Clone)]
pub struct PersistenceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl PersistenceClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header(crate::auth::API_KEY_HEADER, key),
            None => builder,
        }
    }

    /// List all saved forms, most recently updated first.
    pub async fn list_forms(&self) -> Result<Vec<FormSchema>, ClientError> {
        let response = self.request(self.http.get(self.url("/forms"))).send().await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch a single form by id.
    pub async fn get_form(&self, id: &str) -> Result<FormSchema, ClientError> {
        let response = self
            .request(self.http.get(self.url(&format!("/forms/{id}"))))
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// Create a new form; the server assigns id and timestamps.
    pub async fn create_form(
        &self,
        title: &str,
        fields: &[FieldDefinition],
    ) -> Result<FormSchema, ClientError> {
        let response = self
            .request(self.http.post(self.url("/forms")))
            .json(&SaveFormBody { title, fields })
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// Replace an existing form; the server refreshes `updated_at`.
    pub async fn update_form(
        &self,
        id: &str,
        title: &str,
        fields: &[FieldDefinition],
    ) -> Result<FormSchema, ClientError> {
        let response = self
            .request(self.http.put(self.url(&format!("/forms/{id}"))))
            .json(&SaveFormBody { title, fields })
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }

    /// Delete a form, returning the server's confirmation message.
    pub async fn delete_form(&self, id: &str) -> Result<String, ClientError> {
        let response = self
            .request(self.http.delete(self.url(&format!("/forms/{id}"))))
            .send()
            .await?;
        let response = check(response).await?;
        let confirmation: DeleteFormResponse = response.json().await?;
        Ok(confirmation.message)
    }

    /// Save a schema: create when it has no id yet, update otherwise.
    pub async fn save(&self, schema: &FormSchema) -> Result<FormSchema, ClientError> {
        match &schema.id {
            Some(id) => self.update_form(id, &schema.title, &schema.fields).await,
            None => self.create_form(&schema.title, &schema.fields).await,
        }
    }
}

/// Map an error status to the client failure taxonomy, pulling the message
/// out of the server's error envelope when present.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string(),
    };

    Err(match status {
        StatusCode::BAD_REQUEST => ClientError::Validation(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(message),
        s if s.is_server_error() => ClientError::Server(message),
        _ => ClientError::Network(message),
    })
}
