use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::dto::{EmailRequestDto, EmailResponseDto};
use crate::api::error::ApiError;
use crate::config::{ApiConfig, EmailConfig};

/// Client for the third-party email reachability service.
#[derive(Clone)]
pub struct EmailService {
    http: ApiClient,
}

impl EmailService {
    /// Shares timeouts with the main API but never sends its key.
    pub fn from_config(api: &ApiConfig, email: &EmailConfig) -> Result<Self, ApiError> {
        let config = ApiConfig {
            base_url: email.base_url.clone(),
            api_key: None,
            ..api.clone()
        };
        Ok(Self {
            http: ApiClient::from_config(&config)?,
        })
    }

    pub async fn check_email(&self, body: &EmailRequestDto) -> Result<EmailResponseDto, ApiError> {
        self.http
            .call(Method::POST, "/v0/check_email")
            .json(body)
            .send()
            .await
    }
}
