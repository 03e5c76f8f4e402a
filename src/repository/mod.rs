//! Repositories: one method per use case, each returning a
//! [`ResourceStream`](crate::resource::ResourceStream).
//!
//! Traits sit at this seam so state holders can be driven by fakes; the
//! `Remote*` implementations forward to the [`ApiClient`](crate::api::ApiClient)
//! and map DTOs to domain models.

mod auth;
mod class;
mod flashcard;
mod folder;
mod mapper;
mod study_set;

pub use auth::{AuthRepository, RemoteAuthRepository};
pub use class::{ClassRepository, RemoteClassRepository};
pub use flashcard::{FlashCardRepository, RemoteFlashCardRepository};
pub use folder::{FolderRepository, RemoteFolderRepository};
pub use study_set::{RemoteStudySetRepository, StudySetRepository};
