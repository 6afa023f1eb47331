//! Shared HTTP plumbing for every service wrapper.
//!
//! [`ApiClient`] owns one `reqwest::Client` (cheap to clone, connection pool is
//! shared) and the configured base URL. Services build a request against a path,
//! optionally tag it with the acting user, and hand it to [`ApiClient::send_json`]
//! or [`ApiClient::send_empty`]. Each call is sent exactly once.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::ClientConfig;

use crate::error::{extract_message, ApiError};
use crate::models::UserId;

/// Header carrying the acting user's id on authorization-sensitive calls.
///
/// The server decides what that user may do; the client only reports who is asking.
pub const ACTING_USER_HEADER: &str = "userid";

/// Base URL + HTTP client shared by all services.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base_url(&config.api.base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`, which must start with `/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = check_status(request.send().await?).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and return the body as text.
    pub(crate) async fn send_text(&self, request: RequestBuilder) -> Result<String, ApiError> {
        let response = check_status(request.send().await?).await?;
        Ok(response.text().await?)
    }

    /// Send and ignore whatever body comes back.
    pub(crate) async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        check_status(request.send().await?).await?;
        Ok(())
    }
}

/// Tag a request with the acting user.
pub(crate) trait ActingUser {
    fn acting_as(self, user_id: UserId) -> Self;
}

impl ActingUser for RequestBuilder {
    fn acting_as(self, user_id: UserId) -> Self {
        self.header(ACTING_USER_HEADER, user_id.to_string())
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = extract_message(&body);
    tracing::debug!("{} -> {} {:?}", status, body.len(), message);
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::with_base_url("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/api/groups/5"), "http://localhost:8080/api/groups/5");
    }

    #[test]
    fn test_client_from_config() {
        let client = ApiClient::new(&ClientConfig::new("https://yummly.example"));
        assert_eq!(client.url("/api/v1/login"), "https://yummly.example/api/v1/login");
    }

    #[test]
    fn test_acting_user_header() {
        let client = ApiClient::with_base_url("http://localhost:8080");
        let request = client.get("/api/groups/1/is-admin").acting_as(42).build().unwrap();

        assert_eq!(request.headers().get(ACTING_USER_HEADER).unwrap(), "42");
        assert_eq!(request.url().path(), "/api/groups/1/is-admin");
    }
}
