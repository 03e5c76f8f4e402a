use serde::{Deserialize, Serialize};

use super::flashcard::FlashCardResponseDto;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorDto {
    pub id: i64,
    pub name: String,
    pub hex_value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubjectDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudySetRequestDto {
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub subject_id: i64,
    pub color_id: i64,
    pub owner_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudySetRequestDto {
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub subject_id: i64,
    pub color_id: i64,
    pub owner_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySetResponseDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_public: bool,
    pub owner_id: String,
    #[serde(default)]
    pub subject: Option<SubjectDto>,
    #[serde(default)]
    pub color: Option<ColorDto>,
    #[serde(default)]
    pub flashcard_count: u32,
    #[serde(default)]
    pub flashcards: Vec<FlashCardResponseDto>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetProgressRequestDto {
    pub reset_type: String,
}
