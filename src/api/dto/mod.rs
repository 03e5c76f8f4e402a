//! Wire shapes exchanged with the backend.

mod auth;
mod class;
mod email;
mod flashcard;
mod folder;
mod study_set;
mod upload;

pub use auth::{
    AuthResponseDto, LoginRequestDto, OtpResponseDto, ResendEmailRequestDto, SignupRequestDto,
    SignupResponseDto, UpdateFullNameRequestDto, UpdateFullNameResponseDto,
    UpdateUsernameRequestDto, UpdateUsernameResponseDto, VerifyEmailRequestDto,
    VerifyPasswordRequestDto, VerifyPasswordResponseDto,
};
pub use class::{ClassResponseDto, JoinClassRequestDto};
pub use email::{EmailRequestDto, EmailResponseDto};
pub use flashcard::{
    CreateFlashCardRequestDto, EditFlashCardRequestDto, FlashCardResponseDto,
    UpdateFlipStatusRequestDto,
};
pub use folder::{CreateFolderRequestDto, FolderResponseDto};
pub use study_set::{
    ColorDto, CreateStudySetRequestDto, ResetProgressRequestDto, StudySetResponseDto, SubjectDto,
    UpdateStudySetRequestDto,
};
pub use upload::UploadImageResponseDto;
