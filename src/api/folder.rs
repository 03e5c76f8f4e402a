use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::dto::{CreateFolderRequestDto, FolderResponseDto};
use crate::api::error::ApiError;
use crate::config::SecureString;

impl ApiClient {
    pub async fn create_folder(
        &self,
        token: &SecureString,
        body: &CreateFolderRequestDto,
    ) -> Result<FolderResponseDto, ApiError> {
        self.call(Method::POST, "/folder")
            .bearer(token)
            .json(body)
            .send()
            .await
    }
}
