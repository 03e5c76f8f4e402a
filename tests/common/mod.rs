//! Shared fakes and helpers for the integration tests.

#![allow(dead_code)]

pub mod mock_backend;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use parking_lot::Mutex;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{broadcast, watch, Semaphore};

use quickmem::config::SecureString;
use quickmem::domain::{
    AuthResponse, CreateFlashCardRequest, CreateFolderRequest, CreateStudySetRequest,
    EditFlashCardRequest, FlashCard, FlipCardStatus, Folder, JoinClassRequest, LoginRequest,
    OtpResponse, ResetType, SignupRequest, SignupResponse, StudyClass, StudySet,
    UpdateFullNameRequest, UpdateFullNameResponse, UpdateStudySetRequest, UpdateUsernameRequest,
    UpdateUsernameResponse, UploadedImage, UserRole, VerifyEmailRequest, VerifyPasswordRequest,
};
use quickmem::repository::{
    AuthRepository, ClassRepository, FlashCardRepository, FolderRepository, StudySetRepository,
};
use quickmem::resource::{Resource, ResourceStream};
use quickmem::session::{AppManager, KeyValueStore, MemoryStore, Profile, TokenManager};

/// Upper bound for anything a test waits on.
pub const WAIT: Duration = Duration::from_secs(2);

// -- Scripted repository calls ------------------------------------------------

/// Queue of canned results for one repository method.
///
/// Requests are recorded when the returned stream is first polled, so a
/// launch that gets ignored never counts as a call.
pub struct Script<Req, T> {
    results: Arc<Mutex<VecDeque<Result<T, String>>>>,
    requests: Arc<Mutex<Vec<Req>>>,
    gate: Mutex<Option<Arc<Semaphore>>>,
}

impl<Req, T> Default for Script<Req, T> {
    fn default() -> Self {
        Self {
            results: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: Mutex::new(None),
        }
    }
}

impl<Req, T> Script<Req, T>
where
    Req: Clone + Send + 'static,
    T: Send + 'static,
{
    pub fn push_ok(&self, data: T) {
        self.results.lock().push_back(Ok(data));
    }

    pub fn push_err(&self, message: &str) {
        self.results.lock().push_back(Err(message.to_string()));
    }

    /// Hold terminal emissions until permits are added to the returned gate.
    pub fn hold(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.gate.lock() = Some(gate.clone());
        gate
    }

    pub fn requests(&self) -> Vec<Req> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn call(&self, request: Req) -> ResourceStream<T> {
        let results = self.results.clone();
        let requests = self.requests.clone();
        let gate = self.gate.lock().clone();

        let terminal = async move {
            requests.lock().push(request);
            let result = results
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err("unscripted call".to_string()));
            if let Some(gate) = gate {
                if let Ok(permit) = gate.acquire().await {
                    permit.forget();
                }
            }
            match result {
                Ok(data) => Resource::Success(data),
                Err(message) => Resource::Error(message),
            }
        };

        Box::pin(stream::once(async { Resource::Loading }).chain(stream::once(terminal)))
    }
}

// -- Fake repositories --------------------------------------------------------

#[derive(Default)]
pub struct FakeAuthRepository {
    pub check_email: Script<String, bool>,
    pub login: Script<LoginRequest, AuthResponse>,
    pub signup: Script<SignupRequest, SignupResponse>,
    pub verify_email: Script<VerifyEmailRequest, AuthResponse>,
    pub resend_otp: Script<String, OtpResponse>,
    pub verify_password: Script<VerifyPasswordRequest, bool>,
    pub update_full_name: Script<UpdateFullNameRequest, UpdateFullNameResponse>,
    pub update_username: Script<UpdateUsernameRequest, UpdateUsernameResponse>,
}

impl AuthRepository for FakeAuthRepository {
    fn check_email_validity(&self, email: String) -> ResourceStream<bool> {
        self.check_email.call(email)
    }

    fn login(&self, request: LoginRequest) -> ResourceStream<AuthResponse> {
        self.login.call(request)
    }

    fn signup(&self, request: SignupRequest) -> ResourceStream<SignupResponse> {
        self.signup.call(request)
    }

    fn verify_email(&self, request: VerifyEmailRequest) -> ResourceStream<AuthResponse> {
        self.verify_email.call(request)
    }

    fn resend_otp(&self, email: String) -> ResourceStream<OtpResponse> {
        self.resend_otp.call(email)
    }

    fn verify_password(
        &self,
        _token: SecureString,
        request: VerifyPasswordRequest,
    ) -> ResourceStream<bool> {
        self.verify_password.call(request)
    }

    fn update_full_name(
        &self,
        _token: SecureString,
        request: UpdateFullNameRequest,
    ) -> ResourceStream<UpdateFullNameResponse> {
        self.update_full_name.call(request)
    }

    fn update_username(
        &self,
        _token: SecureString,
        request: UpdateUsernameRequest,
    ) -> ResourceStream<UpdateUsernameResponse> {
        self.update_username.call(request)
    }
}

#[derive(Default)]
pub struct FakeStudySetRepository {
    pub create: Script<CreateStudySetRequest, StudySet>,
    pub get_by_id: Script<String, StudySet>,
    pub by_owner: Script<String, Vec<StudySet>>,
    pub update: Script<(String, UpdateStudySetRequest), StudySet>,
    pub delete: Script<String, ()>,
    pub reset: Script<(String, ResetType), ()>,
}

impl StudySetRepository for FakeStudySetRepository {
    fn create_study_set(
        &self,
        _token: SecureString,
        request: CreateStudySetRequest,
    ) -> ResourceStream<StudySet> {
        self.create.call(request)
    }

    fn get_study_set_by_id(&self, _token: SecureString, id: String) -> ResourceStream<StudySet> {
        self.get_by_id.call(id)
    }

    fn get_study_sets_by_owner_id(
        &self,
        _token: SecureString,
        owner_id: String,
    ) -> ResourceStream<Vec<StudySet>> {
        self.by_owner.call(owner_id)
    }

    fn update_study_set(
        &self,
        _token: SecureString,
        id: String,
        request: UpdateStudySetRequest,
    ) -> ResourceStream<StudySet> {
        self.update.call((id, request))
    }

    fn delete_study_set(&self, _token: SecureString, id: String) -> ResourceStream<()> {
        self.delete.call(id)
    }

    fn reset_progress(
        &self,
        _token: SecureString,
        id: String,
        reset_type: ResetType,
    ) -> ResourceStream<()> {
        self.reset.call((id, reset_type))
    }
}

#[derive(Default)]
pub struct FakeFlashCardRepository {
    pub create: Script<CreateFlashCardRequest, FlashCard>,
    pub update: Script<(String, EditFlashCardRequest), FlashCard>,
    pub flip_status: Script<(String, FlipCardStatus), FlashCard>,
    pub upload: Script<(String, Vec<u8>), UploadedImage>,
}

impl FlashCardRepository for FakeFlashCardRepository {
    fn create_flashcard(
        &self,
        _token: SecureString,
        request: CreateFlashCardRequest,
    ) -> ResourceStream<FlashCard> {
        self.create.call(request)
    }

    fn update_flashcard(
        &self,
        _token: SecureString,
        id: String,
        request: EditFlashCardRequest,
    ) -> ResourceStream<FlashCard> {
        self.update.call((id, request))
    }

    fn update_flip_status(
        &self,
        _token: SecureString,
        id: String,
        status: FlipCardStatus,
    ) -> ResourceStream<FlashCard> {
        self.flip_status.call((id, status))
    }

    fn upload_image(
        &self,
        _token: SecureString,
        file_name: String,
        bytes: Vec<u8>,
    ) -> ResourceStream<UploadedImage> {
        self.upload.call((file_name, bytes))
    }
}

#[derive(Default)]
pub struct FakeFolderRepository {
    pub create: Script<CreateFolderRequest, Folder>,
}

impl FolderRepository for FakeFolderRepository {
    fn create_folder(
        &self,
        _token: SecureString,
        request: CreateFolderRequest,
    ) -> ResourceStream<Folder> {
        self.create.call(request)
    }
}

#[derive(Default)]
pub struct FakeClassRepository {
    pub by_owner: Script<String, Vec<StudyClass>>,
    pub join: Script<JoinClassRequest, StudyClass>,
}

impl ClassRepository for FakeClassRepository {
    fn get_classes_by_owner_id(
        &self,
        _token: SecureString,
        owner_id: String,
    ) -> ResourceStream<Vec<StudyClass>> {
        self.by_owner.call(owner_id)
    }

    fn join_class(
        &self,
        _token: SecureString,
        request: JoinClassRequest,
    ) -> ResourceStream<StudyClass> {
        self.join.call(request)
    }
}

// -- Session ------------------------------------------------------------------

pub struct TestSession {
    pub tokens: TokenManager,
    pub app: AppManager,
}

pub fn session() -> TestSession {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    TestSession {
        tokens: TokenManager::new(store.clone()),
        app: AppManager::new(store),
    }
}

pub const USER_ID: &str = "user-1";

pub fn signed_in_session() -> TestSession {
    let session = session();
    session
        .tokens
        .save_tokens(&SecureString::new("access-1"), &SecureString::new("refresh-1"))
        .unwrap();
    session
        .app
        .save_profile(&Profile {
            id: USER_ID.into(),
            email: "jane@example.com".into(),
            username: "jane".into(),
            full_name: "Jane".into(),
            avatar_url: "3".into(),
            role: UserRole::Student,
            birthday: "2000-01-01".into(),
        })
        .unwrap();
    session.app.save_is_logged_in(true).unwrap();
    session
}

// -- Fixtures -----------------------------------------------------------------

pub fn auth_response() -> AuthResponse {
    AuthResponse {
        id: USER_ID.into(),
        email: "jane@example.com".into(),
        username: "jane".into(),
        full_name: "Jane Doe".into(),
        avatar_url: "12".into(),
        role: UserRole::Teacher,
        birthday: "1999-09-09".into(),
        access_token: SecureString::new("access-token"),
        refresh_token: SecureString::new("refresh-token"),
    }
}

pub fn flashcard(id: &str) -> FlashCard {
    FlashCard {
        id: id.into(),
        term: format!("term {id}"),
        definition: format!("definition {id}"),
        study_set_id: "set-1".into(),
        ..Default::default()
    }
}

pub fn study_set(id: &str, cards: Vec<FlashCard>) -> StudySet {
    StudySet {
        id: id.into(),
        title: "Cell biology".into(),
        description: String::new(),
        is_public: true,
        owner_id: USER_ID.into(),
        subject: None,
        color: None,
        flashcard_count: cards.len() as u32,
        flashcards: cards,
    }
}

pub fn study_class(id: &str) -> StudyClass {
    StudyClass {
        id: id.into(),
        title: format!("Class {id}"),
        description: String::new(),
        join_token: "JOIN-1".into(),
        owner_id: USER_ID.into(),
        allow_join: true,
        member_count: 1,
        study_set_count: 0,
    }
}

// -- Waiting ------------------------------------------------------------------

pub async fn next_event<E: Clone>(rx: &mut broadcast::Receiver<E>) -> E {
    tokio::time::timeout(WAIT, rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("event channel closed")
}

pub fn assert_no_event<E: Clone + std::fmt::Debug>(rx: &mut broadcast::Receiver<E>) {
    match rx.try_recv() {
        Err(TryRecvError::Empty) => {}
        other => panic!("expected no event, got {:?}", other),
    }
}

pub async fn wait_for<S: Clone>(rx: &mut watch::Receiver<S>, check: impl FnMut(&S) -> bool) -> S {
    let state = tokio::time::timeout(WAIT, rx.wait_for(check))
        .await
        .expect("timed out waiting for state")
        .expect("state channel closed");
    state.clone()
}
