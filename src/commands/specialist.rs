//! Specialist Commands
//!
//! HTTP bindings for the `/specialists` REST resource.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::SpecialistsApi;
use crate::error::ApiError;
use crate::models::{CreateSpecialistPayload, Specialist, UpdateSpecialistPayload};

/// Characters escaped in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// reqwest-backed client (fetch on wasm32)
#[derive(Clone)]
pub struct HttpSpecialistsApi {
    client: Client,
    base_url: String,
}

impl HttpSpecialistsApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/specialists", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), utf8_percent_encode(id, PATH_SEGMENT))
    }

    fn toggle_url(&self, id: &str) -> String {
        format!("{}/toggle-active", self.item_url(id))
    }
}

#[async_trait(?Send)]
impl SpecialistsApi for HttpSpecialistsApi {
    async fn list(&self) -> Result<Vec<Specialist>, ApiError> {
        let resp = self.client.get(self.collection_url()).send().await?;
        parse_json(resp).await
    }

    async fn get(&self, id: &str) -> Result<Specialist, ApiError> {
        let resp = self.client.get(self.item_url(id)).send().await?;
        parse_json(resp).await
    }

    async fn create(&self, payload: &CreateSpecialistPayload) -> Result<Specialist, ApiError> {
        let resp = self.client.post(self.collection_url()).json(payload).send().await?;
        parse_json(resp).await
    }

    async fn update(&self, id: &str, payload: &UpdateSpecialistPayload) -> Result<Specialist, ApiError> {
        let resp = self.client.patch(self.item_url(id)).json(payload).send().await?;
        parse_json(resp).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let resp = self.client.delete(self.item_url(id)).send().await?;
        check_status(resp).await.map(|_| ())
    }

    async fn toggle_active(&self, id: &str) -> Result<Specialist, ApiError> {
        let resp = self
            .client
            .patch(self.toggle_url(id))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        parse_json(resp).await
    }
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    // Body read failure just means no message
    let body = resp.text().await.unwrap_or_default();
    Err(server_error(status, &body))
}

async fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = check_status(resp).await?;
    let body = resp.text().await?;
    decode_body(&body)
}

/// Error for a non-2xx response, keeping the server's message when it sent one
pub(crate) fn server_error(status: StatusCode, body: &str) -> ApiError {
    ApiError::Server {
        status: status.as_u16(),
        message: extract_error_message(body),
    }
}

pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pull the human-readable `message` out of an error body.
///
/// Validation errors from the backend framework arrive as a list of strings;
/// those are joined into one line.
pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let message = match value.get("message")? {
        Value::String(text) => text.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    if message.is_empty() { None } else { Some(message) }
}
