use reqwest::Method;

use crate::api::client::{path_segment, ApiClient};
use crate::api::dto::{ClassResponseDto, JoinClassRequestDto};
use crate::api::error::ApiError;
use crate::config::SecureString;

impl ApiClient {
    pub async fn get_classes_by_owner_id(
        &self,
        token: &SecureString,
        owner_id: &str,
    ) -> Result<Vec<ClassResponseDto>, ApiError> {
        let path = format!("/class/owner/{}", path_segment("owner id", owner_id)?);
        self.call(Method::GET, &path).bearer(token).send().await
    }

    pub async fn join_class(
        &self,
        token: &SecureString,
        body: &JoinClassRequestDto,
    ) -> Result<ClassResponseDto, ApiError> {
        self.call(Method::POST, "/class/join")
            .bearer(token)
            .json(body)
            .send()
            .await
    }
}
