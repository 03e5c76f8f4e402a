use super::enums::{FlipCardStatus, Rating};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlashCard {
    pub id: String,
    pub term: String,
    pub definition: String,
    pub definition_image_url: Option<String>,
    pub hint: Option<String>,
    pub explanation: Option<String>,
    pub study_set_id: String,
    pub rating: Rating,
    pub flip_status: FlipCardStatus,
    pub is_starred: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFlashCardRequest {
    pub study_set_id: String,
    pub term: String,
    pub definition: String,
    pub definition_image_url: Option<String>,
    pub hint: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditFlashCardRequest {
    pub term: String,
    pub definition: String,
    pub definition_image_url: Option<String>,
    pub hint: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub url: String,
    pub id: String,
}
