use crate::api::dto::{CreateStudySetRequestDto, ResetProgressRequestDto, UpdateStudySetRequestDto};
use crate::api::ApiClient;
use crate::config::SecureString;
use crate::domain::{CreateStudySetRequest, ResetType, StudySet, UpdateStudySetRequest};
use crate::resource::{resource_stream, ResourceStream};

pub trait StudySetRepository: Send + Sync {
    fn create_study_set(
        &self,
        token: SecureString,
        request: CreateStudySetRequest,
    ) -> ResourceStream<StudySet>;

    fn get_study_set_by_id(&self, token: SecureString, id: String) -> ResourceStream<StudySet>;

    fn get_study_sets_by_owner_id(
        &self,
        token: SecureString,
        owner_id: String,
    ) -> ResourceStream<Vec<StudySet>>;

    fn update_study_set(
        &self,
        token: SecureString,
        id: String,
        request: UpdateStudySetRequest,
    ) -> ResourceStream<StudySet>;

    fn delete_study_set(&self, token: SecureString, id: String) -> ResourceStream<()>;

    fn reset_progress(
        &self,
        token: SecureString,
        id: String,
        reset_type: ResetType,
    ) -> ResourceStream<()>;
}

pub struct RemoteStudySetRepository {
    api: ApiClient,
}

impl RemoteStudySetRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl StudySetRepository for RemoteStudySetRepository {
    fn create_study_set(
        &self,
        token: SecureString,
        request: CreateStudySetRequest,
    ) -> ResourceStream<StudySet> {
        let api = self.api.clone();
        resource_stream("create_study_set", async move {
            let body = CreateStudySetRequestDto::from(request);
            api.create_study_set(&token, &body).await.map(StudySet::from)
        })
    }

    fn get_study_set_by_id(&self, token: SecureString, id: String) -> ResourceStream<StudySet> {
        let api = self.api.clone();
        resource_stream("get_study_set_by_id", async move {
            api.get_study_set_by_id(&token, &id)
                .await
                .map(StudySet::from)
        })
    }

    fn get_study_sets_by_owner_id(
        &self,
        token: SecureString,
        owner_id: String,
    ) -> ResourceStream<Vec<StudySet>> {
        let api = self.api.clone();
        resource_stream("get_study_sets_by_owner_id", async move {
            let sets = api.get_study_sets_by_owner_id(&token, &owner_id).await?;
            Ok(sets.into_iter().map(StudySet::from).collect())
        })
    }

    fn update_study_set(
        &self,
        token: SecureString,
        id: String,
        request: UpdateStudySetRequest,
    ) -> ResourceStream<StudySet> {
        let api = self.api.clone();
        resource_stream("update_study_set", async move {
            let body = UpdateStudySetRequestDto::from(request);
            api.update_study_set(&token, &id, &body)
                .await
                .map(StudySet::from)
        })
    }

    fn delete_study_set(&self, token: SecureString, id: String) -> ResourceStream<()> {
        let api = self.api.clone();
        resource_stream("delete_study_set", async move {
            api.delete_study_set(&token, &id).await
        })
    }

    fn reset_progress(
        &self,
        token: SecureString,
        id: String,
        reset_type: ResetType,
    ) -> ResourceStream<()> {
        let api = self.api.clone();
        resource_stream("reset_progress", async move {
            let body = ResetProgressRequestDto {
                reset_type: reset_type.as_str().to_string(),
            };
            api.reset_progress(&token, &id, &body).await
        })
    }
}
