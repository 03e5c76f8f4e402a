use crate::api::dto::JoinClassRequestDto;
use crate::api::ApiClient;
use crate::config::SecureString;
use crate::domain::{JoinClassRequest, StudyClass};
use crate::resource::{resource_stream, ResourceStream};

pub trait ClassRepository: Send + Sync {
    fn get_classes_by_owner_id(
        &self,
        token: SecureString,
        owner_id: String,
    ) -> ResourceStream<Vec<StudyClass>>;

    fn join_class(&self, token: SecureString, request: JoinClassRequest)
        -> ResourceStream<StudyClass>;
}

pub struct RemoteClassRepository {
    api: ApiClient,
}

impl RemoteClassRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl ClassRepository for RemoteClassRepository {
    fn get_classes_by_owner_id(
        &self,
        token: SecureString,
        owner_id: String,
    ) -> ResourceStream<Vec<StudyClass>> {
        let api = self.api.clone();
        resource_stream("get_classes_by_owner_id", async move {
            let classes = api.get_classes_by_owner_id(&token, &owner_id).await?;
            Ok(classes.into_iter().map(StudyClass::from).collect())
        })
    }

    fn join_class(
        &self,
        token: SecureString,
        request: JoinClassRequest,
    ) -> ResourceStream<StudyClass> {
        let api = self.api.clone();
        resource_stream("join_class", async move {
            let body = JoinClassRequestDto::from(request);
            api.join_class(&token, &body).await.map(StudyClass::from)
        })
    }
}
