//! Domain models the repositories hand to state holders.

mod auth;
mod class;
mod enums;
mod flashcard;
mod folder;
mod study_set;

pub use auth::{
    AuthResponse, LoginRequest, OtpResponse, SignupRequest, SignupResponse,
    UpdateFullNameRequest, UpdateFullNameResponse, UpdateUsernameRequest,
    UpdateUsernameResponse, VerifyEmailRequest, VerifyPasswordRequest,
};
pub use class::{JoinClassRequest, StudyClass};
pub use enums::{FlipCardStatus, LanguageCode, Rating, ResetType, UserRole};
pub use flashcard::{CreateFlashCardRequest, EditFlashCardRequest, FlashCard, UploadedImage};
pub use folder::{CreateFolderRequest, Folder};
pub use study_set::{Color, CreateStudySetRequest, StudySet, Subject, UpdateStudySetRequest};
