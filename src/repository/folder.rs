use crate::api::dto::CreateFolderRequestDto;
use crate::api::ApiClient;
use crate::config::SecureString;
use crate::domain::{CreateFolderRequest, Folder};
use crate::resource::{resource_stream, ResourceStream};

pub trait FolderRepository: Send + Sync {
    fn create_folder(
        &self,
        token: SecureString,
        request: CreateFolderRequest,
    ) -> ResourceStream<Folder>;
}

pub struct RemoteFolderRepository {
    api: ApiClient,
}

impl RemoteFolderRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl FolderRepository for RemoteFolderRepository {
    fn create_folder(
        &self,
        token: SecureString,
        request: CreateFolderRequest,
    ) -> ResourceStream<Folder> {
        let api = self.api.clone();
        resource_stream("create_folder", async move {
            let body = CreateFolderRequestDto::from(request);
            api.create_folder(&token, &body).await.map(Folder::from)
        })
    }
}
