// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the notification backend.
//!
//! Paths are resolved against the configured base URL, and every request
//! carries `Authorization: Bearer <token>` when a token is configured.

use crate::application::port::{ApiError, ApiResult, NotificationDirectory};
use crate::config::ApiConfig;
use crate::domain::notification::{NotificationId, NotificationItem, NotificationKind};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = concat!("FrontDesk/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct UnreadCountDto {
    count: i64,
}

#[derive(Debug, Deserialize)]
struct FeedDto {
    #[serde(default)]
    items: Vec<NotificationDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotificationDto {
    id: RawId,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    is_read: bool,
    #[serde(default)]
    sent_at: Option<String>,
}

/// Ids arrive as JSON numbers from most deployments, as strings from some.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn into_id(self) -> ApiResult<NotificationId> {
        match self {
            RawId::Number(value) => Ok(NotificationId::new(value)),
            RawId::Text(text) => text
                .trim()
                .parse::<u64>()
                .map(NotificationId::new)
                .map_err(|_| ApiError::Decode(format!("non-numeric notification id {text:?}"))),
        }
    }
}

impl NotificationDto {
    fn into_item(self) -> ApiResult<NotificationItem> {
        Ok(NotificationItem {
            id: self.id.into_id()?,
            kind: NotificationKind::from_tag(self.kind.as_deref().unwrap_or_default()),
            message: self.message.unwrap_or_default(),
            is_read: self.is_read,
            sent_at: self.sent_at.unwrap_or_default(),
        })
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decodes a `{ count }` body. Negative counts are treated as zero.
pub fn decode_unread_count(body: &[u8]) -> ApiResult<u32> {
    let dto: UnreadCountDto =
        serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(u32::try_from(dto.count.max(0)).unwrap_or(u32::MAX))
}

/// Decodes a `{ items: [...] }` body, preserving backend order.
pub fn decode_feed(body: &[u8]) -> ApiResult<Vec<NotificationItem>> {
    let dto: FeedDto = serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    dto.items.into_iter().map(NotificationDto::into_item).collect()
}

/// Maps an HTTP status to the port's error taxonomy.
pub fn check_status(status: StatusCode) -> ApiResult<()> {
    match status {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        s if s.is_success() => Ok(()),
        s => Err(ApiError::Status(s.as_u16())),
    }
}

// =============================================================================
// HttpDirectory
// =============================================================================

/// [`NotificationDirectory`] backed by the hotel-management REST API.
#[derive(Clone)]
pub struct HttpDirectory {
    client: reqwest::Client,
    base_url: Arc<str>,
    token: Option<Arc<str>>,
}

impl std::fmt::Debug for HttpDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDirectory")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl HttpDirectory {
    /// Builds a directory from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] if the base URL is empty or not
    /// http(s), or if the HTTP client cannot be built.
    pub fn new(api: &ApiConfig) -> ApiResult<Self> {
        Self::with_parts(&api.base_url, api.token.as_deref(), api.timeout())
    }

    pub fn with_parts(base_url: &str, token: Option<&str>, timeout: Duration) -> ApiResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidConfig(format!(
                "base URL must start with http:// or https://, got {base_url:?}"
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            base_url: Arc::from(base_url),
            token: token
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(Arc::from),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a request whose response body is ignored.
    fn send_empty(&self, method: Method, path: &str) -> BoxFuture<'static, ApiResult<()>> {
        let request = self.request(method, path);
        async move {
            let response = request.send().await.map_err(transport_error)?;
            check_status(response.status())
        }
        .boxed()
    }
}

fn transport_error(error: reqwest::Error) -> ApiError {
    // Drop the URL so query strings never end up in messages.
    ApiError::Transport(error.without_url().to_string())
}

impl NotificationDirectory for HttpDirectory {
    fn unread_count(&self) -> BoxFuture<'static, ApiResult<u32>> {
        let request = self.request(Method::GET, "notifications/unread-count");
        async move {
            let response = request.send().await.map_err(transport_error)?;
            check_status(response.status())?;
            let body = response.bytes().await.map_err(transport_error)?;
            decode_unread_count(&body)
        }
        .boxed()
    }

    fn list(&self, top: u32) -> BoxFuture<'static, ApiResult<Vec<NotificationItem>>> {
        let request = self
            .request(Method::GET, "notifications")
            .query(&[("top", top)]);
        async move {
            let response = request.send().await.map_err(transport_error)?;
            check_status(response.status())?;
            let body = response.bytes().await.map_err(transport_error)?;
            decode_feed(&body)
        }
        .boxed()
    }

    fn mark_read(&self, id: NotificationId) -> BoxFuture<'static, ApiResult<()>> {
        self.send_empty(Method::PUT, &format!("notifications/{id}/read"))
    }

    fn mark_all_read(&self) -> BoxFuture<'static, ApiResult<()>> {
        self.send_empty(Method::PUT, "notifications/read-all")
    }

    fn delete(&self, id: NotificationId) -> BoxFuture<'static, ApiResult<()>> {
        self.send_empty(Method::DELETE, &format!("notifications/{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory(base: &str) -> HttpDirectory {
        HttpDirectory::with_parts(base, Some("tok"), Duration::from_secs(5))
            .expect("valid base url")
    }

    #[test]
    fn url_joins_without_double_slashes() {
        let dir = directory("http://localhost:5000/api/");
        assert_eq!(
            dir.url("/notifications/read-all"),
            "http://localhost:5000/api/notifications/read-all"
        );
        assert_eq!(dir.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let result = HttpDirectory::with_parts("localhost:5000", None, Duration::from_secs(1));
        assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
    }

    #[test]
    fn debug_output_hides_token() {
        let rendered = format!("{:?}", directory("https://h.example/api"));
        assert!(!rendered.contains("tok\""));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn status_mapping_follows_error_taxonomy() {
        assert_eq!(check_status(StatusCode::OK), Ok(()));
        assert_eq!(check_status(StatusCode::NO_CONTENT), Ok(()));
        assert_eq!(
            check_status(StatusCode::UNAUTHORIZED),
            Err(ApiError::Unauthorized)
        );
        assert_eq!(check_status(StatusCode::NOT_FOUND), Err(ApiError::NotFound));
        assert_eq!(
            check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ApiError::Status(500))
        );
    }

    #[test]
    fn unread_count_decodes_and_clamps_negative() {
        assert_eq!(decode_unread_count(br#"{"count":4}"#), Ok(4));
        assert_eq!(decode_unread_count(br#"{"count":-2}"#), Ok(0));
        assert!(matches!(
            decode_unread_count(b"<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn feed_decodes_camel_case_items_in_order() {
        let body = br#"{"items":[
            {"id":9,"type":"BookingCreated","message":"New booking||bookingId=42","isRead":false,"sentAt":"2024-05-01T10:00:00Z"},
            {"id":"8","type":"mystery","message":null,"isRead":true,"sentAt":null}
        ]}"#;
        let items = decode_feed(body).expect("valid feed");

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, NotificationId::new(9));
        assert_eq!(items[0].kind, NotificationKind::BookingCreated);
        assert!(!items[0].is_read);
        assert_eq!(items[1].id, NotificationId::new(8));
        assert_eq!(items[1].kind, NotificationKind::Other("mystery".to_string()));
        assert_eq!(items[1].message, "");
        assert!(items[1].is_read);
    }

    #[test]
    fn feed_without_items_is_empty() {
        assert_eq!(decode_feed(b"{}"), Ok(Vec::new()));
    }

    #[test]
    fn feed_with_bad_id_is_a_decode_error() {
        let body = br#"{"items":[{"id":"abc","type":"x","message":"m","isRead":false,"sentAt":""}]}"#;
        assert!(matches!(decode_feed(body), Err(ApiError::Decode(_))));
    }
}
