//! Remote reminder service boundary.
//!
//! Pure adapter: each call is one network round trip, translated into typed
//! records or a typed failure. Caching, retries, and sequencing live in
//! [`sync`](crate::sync), not here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::models::{Reminder, ReminderDraft, ReminderId, ReminderPatch, ReminderTag, UserId};
use crate::{Error, Result};

/// Boundary to the remote reminder store.
#[async_trait]
pub trait ReminderGateway: Send + Sync {
    /// Create a reminder; the server assigns the id and initial
    /// `INCOMPLETE` status.
    async fn create(&self, user: &UserId, draft: &ReminderDraft) -> Result<Reminder>;

    /// Fetch one page of the user's collection, ordered by due timestamp.
    /// A short page (`len < page_size`) is the only end-of-collection
    /// signal; there is no total-count field.
    async fn fetch_page(
        &self,
        user: &UserId,
        page: u32,
        page_size: usize,
    ) -> Result<Vec<Reminder>>;

    /// Partially update a reminder, including status-only patches.
    async fn update(&self, id: &ReminderId, patch: &ReminderPatch) -> Result<Reminder>;

    /// Delete a reminder.
    async fn remove(&self, id: &ReminderId) -> Result<()>;
}

/// `ReminderGateway` over the reminder service's REST endpoints.
#[derive(Clone)]
pub struct HttpReminderGateway {
    base_url: String,
    client: reqwest::Client,
}

impl HttpReminderGateway {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            client: reqwest::Client::builder().build()?,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/reminders", self.base_url)
    }

    fn record_url(&self, id: &ReminderId) -> String {
        format!("{}/reminders/{}", self.base_url, id)
    }
}

#[async_trait]
impl ReminderGateway for HttpReminderGateway {
    async fn create(&self, user: &UserId, draft: &ReminderDraft) -> Result<Reminder> {
        let draft = draft.normalized()?;
        tracing::debug!(user = %user, title = %draft.title, "creating reminder");

        let response = self
            .client
            .post(self.collection_url())
            .json(&CreateReminderBody {
                user_id: user.as_str(),
                title: &draft.title,
                timestamp: draft.timestamp,
                description: draft.description.as_deref(),
                tags: &draft.tags,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, None).await);
        }
        decode_json(response).await
    }

    async fn fetch_page(
        &self,
        user: &UserId,
        page: u32,
        page_size: usize,
    ) -> Result<Vec<Reminder>> {
        tracing::debug!(user = %user, page, "fetching reminder page");

        let response = self
            .client
            .get(self.collection_url())
            .query(&[
                ("userId", user.as_str()),
                ("page", &page.to_string()),
                ("pageSize", &page_size.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, None).await);
        }
        decode_json(response).await
    }

    async fn update(&self, id: &ReminderId, patch: &ReminderPatch) -> Result<Reminder> {
        tracing::debug!(id = %id, "updating reminder");

        let response = self
            .client
            .put(self.record_url(id))
            .json(patch)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, Some(id)).await);
        }
        decode_json(response).await
    }

    async fn remove(&self, id: &ReminderId) -> Result<()> {
        tracing::debug!(id = %id, "deleting reminder");

        let response = self.client.delete(self.record_url(id)).send().await?;

        if !response.status().is_success() {
            return Err(error_from_response(response, Some(id)).await);
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateReminderBody<'a> {
    user_id: &'a str,
    title: &'a str,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    tags: &'a [ReminderTag],
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<String>,
    message: Option<String>,
}

async fn decode_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|err| Error::InvalidPayload(err.to_string()))
}

async fn error_from_response(response: reqwest::Response, id: Option<&ReminderId>) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::NOT_FOUND => {
            Error::NotFound(id.map_or_else(|| parse_api_error(status, &body), ToString::to_string))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            Error::Validation(parse_api_error(status, &body))
        }
        _ => Error::Api(parse_api_error(status, &body)),
    }
}

fn parse_api_error(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = payload.message.or(payload.error) {
            return format!("{} ({})", message.trim(), status.as_u16());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status.as_u16())
    } else {
        format!("{} ({})", trimmed, status.as_u16())
    }
}

fn normalize_base_url(raw: String) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("base URL must not be empty".to_string()));
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.trim_end_matches('/').to_string())
    } else {
        Err(Error::Validation(
            "base URL must include http:// or https://".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url(String::new()).is_err());
        assert!(normalize_base_url("api.example.com".to_string()).is_err());
    }

    #[test]
    fn normalize_base_url_strips_trailing_slash() {
        let url = normalize_base_url("https://api.example.com/".to_string()).unwrap();
        assert_eq!(url, "https://api.example.com");
    }

    #[test]
    fn parse_api_error_prefers_json_message() {
        let rendered = parse_api_error(
            StatusCode::BAD_REQUEST,
            r#"{"message": "title must not be blank"}"#,
        );
        assert_eq!(rendered, "title must not be blank (400)");
    }

    #[test]
    fn parse_api_error_falls_back_to_raw_body() {
        assert_eq!(
            parse_api_error(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            "boom (500)"
        );
        assert_eq!(
            parse_api_error(StatusCode::INTERNAL_SERVER_ERROR, "  "),
            "HTTP 500"
        );
    }
}
