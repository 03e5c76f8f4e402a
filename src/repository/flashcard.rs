use crate::api::dto::{CreateFlashCardRequestDto, EditFlashCardRequestDto, UpdateFlipStatusRequestDto};
use crate::api::ApiClient;
use crate::config::SecureString;
use crate::domain::{
    CreateFlashCardRequest, EditFlashCardRequest, FlashCard, FlipCardStatus, UploadedImage,
};
use crate::resource::{resource_stream, ResourceStream};

pub trait FlashCardRepository: Send + Sync {
    fn create_flashcard(
        &self,
        token: SecureString,
        request: CreateFlashCardRequest,
    ) -> ResourceStream<FlashCard>;

    fn update_flashcard(
        &self,
        token: SecureString,
        id: String,
        request: EditFlashCardRequest,
    ) -> ResourceStream<FlashCard>;

    fn update_flip_status(
        &self,
        token: SecureString,
        id: String,
        status: FlipCardStatus,
    ) -> ResourceStream<FlashCard>;

    fn upload_image(
        &self,
        token: SecureString,
        file_name: String,
        bytes: Vec<u8>,
    ) -> ResourceStream<UploadedImage>;
}

pub struct RemoteFlashCardRepository {
    api: ApiClient,
}

impl RemoteFlashCardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl FlashCardRepository for RemoteFlashCardRepository {
    fn create_flashcard(
        &self,
        token: SecureString,
        request: CreateFlashCardRequest,
    ) -> ResourceStream<FlashCard> {
        let api = self.api.clone();
        resource_stream("create_flashcard", async move {
            let body = CreateFlashCardRequestDto::from(request);
            api.create_flashcard(&token, &body).await.map(FlashCard::from)
        })
    }

    fn update_flashcard(
        &self,
        token: SecureString,
        id: String,
        request: EditFlashCardRequest,
    ) -> ResourceStream<FlashCard> {
        let api = self.api.clone();
        resource_stream("update_flashcard", async move {
            let body = EditFlashCardRequestDto::from(request);
            api.update_flashcard(&token, &id, &body)
                .await
                .map(FlashCard::from)
        })
    }

    fn update_flip_status(
        &self,
        token: SecureString,
        id: String,
        status: FlipCardStatus,
    ) -> ResourceStream<FlashCard> {
        let api = self.api.clone();
        resource_stream("update_flip_status", async move {
            let body = UpdateFlipStatusRequestDto {
                flip_status: status.as_str().to_string(),
            };
            api.update_flip_status(&token, &id, &body)
                .await
                .map(FlashCard::from)
        })
    }

    fn upload_image(
        &self,
        token: SecureString,
        file_name: String,
        bytes: Vec<u8>,
    ) -> ResourceStream<UploadedImage> {
        let api = self.api.clone();
        resource_stream("upload_image", async move {
            api.upload_image(&token, &file_name, bytes)
                .await
                .map(UploadedImage::from)
        })
    }
}
