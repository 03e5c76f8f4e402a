use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashCardResponseDto {
    pub id: String,
    pub term: String,
    pub definition: String,
    #[serde(rename = "definitionImageURL", default)]
    pub definition_image_url: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    pub study_set_id: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub flip_status: Option<String>,
    #[serde(default)]
    pub is_starred: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlashCardRequestDto {
    pub study_set_id: String,
    pub term: String,
    pub definition: String,
    #[serde(rename = "definitionImageURL", skip_serializing_if = "Option::is_none")]
    pub definition_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditFlashCardRequestDto {
    pub term: String,
    pub definition: String,
    #[serde(rename = "definitionImageURL")]
    pub definition_image_url: Option<String>,
    pub hint: Option<String>,
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlipStatusRequestDto {
    pub flip_status: String,
}
