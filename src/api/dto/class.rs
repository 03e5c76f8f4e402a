use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassResponseDto {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub join_token: String,
    pub owner_id: String,
    #[serde(default)]
    pub allow_join: bool,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default)]
    pub study_set_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinClassRequestDto {
    pub join_token: String,
    pub user_id: String,
}
