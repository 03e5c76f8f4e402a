use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::api::error::{error_message, ApiError};
use crate::config::{ApiConfig, SecureString};

/// Header carrying the anonymous project key.
const API_KEY_HEADER: &str = "apikey";
/// Header carrying the per-request correlation id.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Thin JSON-over-HTTP client for one backend base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<SecureString>,
}

impl ApiClient {
    /// Build a client with the configured timeouts.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|source| ApiError::Client { source })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().map(SecureString::new),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request against `path` (relative to the base URL).
    pub(crate) fn call(&self, method: Method, path: &str) -> Call {
        let url = format!("{}{}", self.base_url, path);
        let request_id = Uuid::new_v4().to_string();
        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(REQUEST_ID_HEADER, &request_id);

        if let Some(key) = &self.api_key {
            builder = builder.header(API_KEY_HEADER, key.expose());
        }

        Call {
            builder,
            method,
            url,
            request_id,
        }
    }
}

/// One in-progress request.
pub(crate) struct Call {
    builder: RequestBuilder,
    method: Method,
    url: String,
    request_id: String,
}

impl Call {
    /// Attach the capability token.
    pub(crate) fn bearer(mut self, token: &SecureString) -> Self {
        self.builder = self.builder.bearer_auth(token.expose());
        self
    }

    pub(crate) fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        self.builder = self.builder.json(body);
        self
    }

    pub(crate) fn multipart(mut self, form: reqwest::multipart::Form) -> Self {
        self.builder = self.builder.multipart(form);
        self
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let url = self.url.clone();
        let body = self.execute().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::Decode { url, source })
    }

    /// Send and ignore the response body.
    pub(crate) async fn send_empty(self) -> Result<(), ApiError> {
        self.execute().await.map(|_| ())
    }

    async fn execute(self) -> Result<Vec<u8>, ApiError> {
        let Call {
            builder,
            method,
            url,
            request_id,
        } = self;

        tracing::debug!(request_id = %request_id, method = %method, url = %url, "Sending request");

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&url, e))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::from_reqwest(&url, e))?;

        if !status.is_success() {
            let message = error_message(&body);
            tracing::warn!(
                request_id = %request_id,
                status = status.as_u16(),
                url = %url,
                message = %message,
                "Backend returned error status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(request_id = %request_id, status = status.as_u16(), "Response received");
        Ok(body.to_vec())
    }
}

/// Validate an id before splicing it into a path.
pub(crate) fn path_segment<'a>(name: &str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.is_empty() || value.contains(['/', '?', '#']) {
        return Err(ApiError::InvalidRequest(format!(
            "{} must be a non-empty path segment, got '{}'",
            name, value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segment_rejects_empty_and_separators() {
        assert_eq!(path_segment("id", "abc-123").unwrap(), "abc-123");
        assert!(matches!(
            path_segment("id", ""),
            Err(ApiError::InvalidRequest(_))
        ));
        assert!(matches!(
            path_segment("id", "a/b"),
            Err(ApiError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig {
            base_url: "https://api.example.com/".to_string(),
            ..ApiConfig::default()
        };
        let client = ApiClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}
