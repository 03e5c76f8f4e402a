use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UploadImageResponseDto {
    pub url: String,
    pub id: String,
}
