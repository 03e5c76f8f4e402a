use reqwest::Method;

use crate::api::client::{path_segment, ApiClient};
use crate::api::dto::{
    CreateFlashCardRequestDto, EditFlashCardRequestDto, FlashCardResponseDto,
    UpdateFlipStatusRequestDto,
};
use crate::api::error::ApiError;
use crate::config::SecureString;

impl ApiClient {
    pub async fn create_flashcard(
        &self,
        token: &SecureString,
        body: &CreateFlashCardRequestDto,
    ) -> Result<FlashCardResponseDto, ApiError> {
        self.call(Method::POST, "/flashcard")
            .bearer(token)
            .json(body)
            .send()
            .await
    }

    pub async fn update_flashcard(
        &self,
        token: &SecureString,
        id: &str,
        body: &EditFlashCardRequestDto,
    ) -> Result<FlashCardResponseDto, ApiError> {
        let path = format!("/flashcard/{}", path_segment("flashcard id", id)?);
        self.call(Method::PUT, &path)
            .bearer(token)
            .json(body)
            .send()
            .await
    }

    pub async fn update_flip_status(
        &self,
        token: &SecureString,
        id: &str,
        body: &UpdateFlipStatusRequestDto,
    ) -> Result<FlashCardResponseDto, ApiError> {
        let path = format!("/flashcard/{}/flip-status", path_segment("flashcard id", id)?);
        self.call(Method::PATCH, &path)
            .bearer(token)
            .json(body)
            .send()
            .await
    }
}
