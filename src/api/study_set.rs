use reqwest::Method;

use crate::api::client::{path_segment, ApiClient};
use crate::api::dto::{
    CreateStudySetRequestDto, ResetProgressRequestDto, StudySetResponseDto,
    UpdateStudySetRequestDto,
};
use crate::api::error::ApiError;
use crate::config::SecureString;

impl ApiClient {
    pub async fn create_study_set(
        &self,
        token: &SecureString,
        body: &CreateStudySetRequestDto,
    ) -> Result<StudySetResponseDto, ApiError> {
        self.call(Method::POST, "/study-set")
            .bearer(token)
            .json(body)
            .send()
            .await
    }

    pub async fn get_study_set_by_id(
        &self,
        token: &SecureString,
        id: &str,
    ) -> Result<StudySetResponseDto, ApiError> {
        let path = format!("/study-set/{}", path_segment("study set id", id)?);
        self.call(Method::GET, &path).bearer(token).send().await
    }

    pub async fn get_study_sets_by_owner_id(
        &self,
        token: &SecureString,
        owner_id: &str,
    ) -> Result<Vec<StudySetResponseDto>, ApiError> {
        let path = format!("/study-set/owner/{}", path_segment("owner id", owner_id)?);
        self.call(Method::GET, &path).bearer(token).send().await
    }

    pub async fn update_study_set(
        &self,
        token: &SecureString,
        id: &str,
        body: &UpdateStudySetRequestDto,
    ) -> Result<StudySetResponseDto, ApiError> {
        let path = format!("/study-set/{}", path_segment("study set id", id)?);
        self.call(Method::PATCH, &path)
            .bearer(token)
            .json(body)
            .send()
            .await
    }

    pub async fn delete_study_set(&self, token: &SecureString, id: &str) -> Result<(), ApiError> {
        let path = format!("/study-set/{}", path_segment("study set id", id)?);
        self.call(Method::DELETE, &path)
            .bearer(token)
            .send_empty()
            .await
    }

    pub async fn reset_progress(
        &self,
        token: &SecureString,
        id: &str,
        body: &ResetProgressRequestDto,
    ) -> Result<(), ApiError> {
        let path = format!("/study-set/{}/reset-progress", path_segment("study set id", id)?);
        self.call(Method::PATCH, &path)
            .bearer(token)
            .json(body)
            .send_empty()
            .await
    }
}
