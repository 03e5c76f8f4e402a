//! DTO ↔ domain conversions.

use crate::api::dto::{
    AuthResponseDto, ClassResponseDto, ColorDto, CreateFlashCardRequestDto,
    CreateFolderRequestDto, CreateStudySetRequestDto, EditFlashCardRequestDto,
    FlashCardResponseDto, FolderResponseDto, JoinClassRequestDto, LoginRequestDto,
    OtpResponseDto, SignupRequestDto, SignupResponseDto, StudySetResponseDto, SubjectDto,
    UpdateFullNameRequestDto, UpdateFullNameResponseDto, UpdateStudySetRequestDto,
    UpdateUsernameRequestDto, UpdateUsernameResponseDto, UploadImageResponseDto,
    VerifyEmailRequestDto, VerifyPasswordRequestDto,
};
use crate::config::SecureString;
use crate::domain::{
    AuthResponse, Color, CreateFlashCardRequest, CreateFolderRequest, CreateStudySetRequest,
    EditFlashCardRequest, FlashCard, FlipCardStatus, Folder, JoinClassRequest, LoginRequest,
    OtpResponse, Rating, SignupRequest, SignupResponse, StudyClass, StudySet, Subject,
    UpdateFullNameRequest, UpdateFullNameResponse, UpdateStudySetRequest, UpdateUsernameRequest,
    UpdateUsernameResponse, UploadedImage, UserRole, VerifyEmailRequest, VerifyPasswordRequest,
};

/// Provider tag the backend expects for password logins.
const EMAIL_PROVIDER: &str = "EMAIL";

impl From<LoginRequest> for LoginRequestDto {
    fn from(model: LoginRequest) -> Self {
        Self {
            email: model.email,
            password: model.password,
            provider: EMAIL_PROVIDER.to_string(),
        }
    }
}

impl From<AuthResponseDto> for AuthResponse {
    fn from(dto: AuthResponseDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email,
            username: dto.username.unwrap_or_default(),
            full_name: dto.full_name.unwrap_or_default(),
            avatar_url: dto.avatar_url.unwrap_or_default(),
            role: dto.role.as_deref().map(UserRole::parse).unwrap_or_default(),
            birthday: dto.birthday.unwrap_or_default(),
            access_token: SecureString::new(dto.access_token),
            refresh_token: SecureString::new(dto.refresh_token),
        }
    }
}

impl From<SignupRequest> for SignupRequestDto {
    fn from(model: SignupRequest) -> Self {
        Self {
            avatar_url: model.avatar_url,
            email: model.email,
            username: model.username,
            full_name: model.full_name,
            role: model.role.as_str().to_string(),
            birthday: model.birthday,
            password: model.password,
        }
    }
}

impl From<SignupResponseDto> for SignupResponse {
    fn from(dto: SignupResponseDto) -> Self {
        Self {
            id: dto.id,
            email: dto.email,
            username: dto.username.unwrap_or_default(),
            full_name: dto.full_name.unwrap_or_default(),
            avatar_url: dto.avatar_url.unwrap_or_default(),
            role: dto.role.as_deref().map(UserRole::parse).unwrap_or_default(),
            birthday: dto.birthday.unwrap_or_default(),
            access_token: dto.access_token.map(SecureString::new),
            refresh_token: dto.refresh_token.map(SecureString::new),
            is_verified: dto.is_verified,
        }
    }
}

impl From<VerifyEmailRequest> for VerifyEmailRequestDto {
    fn from(model: VerifyEmailRequest) -> Self {
        Self {
            email: model.email,
            otp: model.otp,
        }
    }
}

impl From<OtpResponseDto> for OtpResponse {
    fn from(dto: OtpResponseDto) -> Self {
        Self {
            message: dto.message,
        }
    }
}

impl From<VerifyPasswordRequest> for VerifyPasswordRequestDto {
    fn from(model: VerifyPasswordRequest) -> Self {
        Self {
            user_id: model.user_id,
            password: model.password,
        }
    }
}

impl From<UpdateFullNameRequest> for UpdateFullNameRequestDto {
    fn from(model: UpdateFullNameRequest) -> Self {
        Self {
            user_id: model.user_id,
            fullname: model.full_name,
        }
    }
}

impl From<UpdateFullNameResponseDto> for UpdateFullNameResponse {
    fn from(dto: UpdateFullNameResponseDto) -> Self {
        Self {
            message: dto.message,
            full_name: dto.fullname,
        }
    }
}

impl From<UpdateUsernameRequest> for UpdateUsernameRequestDto {
    fn from(model: UpdateUsernameRequest) -> Self {
        Self {
            user_id: model.user_id,
            username: model.username,
        }
    }
}

impl From<UpdateUsernameResponseDto> for UpdateUsernameResponse {
    fn from(dto: UpdateUsernameResponseDto) -> Self {
        Self {
            message: dto.message,
            username: dto.username,
        }
    }
}

impl From<FlashCardResponseDto> for FlashCard {
    fn from(dto: FlashCardResponseDto) -> Self {
        Self {
            id: dto.id,
            term: dto.term,
            definition: dto.definition,
            definition_image_url: dto.definition_image_url.filter(|url| !url.is_empty()),
            hint: dto.hint,
            explanation: dto.explanation,
            study_set_id: dto.study_set_id,
            rating: dto.rating.as_deref().map(Rating::parse).unwrap_or_default(),
            flip_status: dto
                .flip_status
                .as_deref()
                .map(FlipCardStatus::parse)
                .unwrap_or_default(),
            is_starred: dto.is_starred,
        }
    }
}

impl From<CreateFlashCardRequest> for CreateFlashCardRequestDto {
    fn from(model: CreateFlashCardRequest) -> Self {
        Self {
            study_set_id: model.study_set_id,
            term: model.term,
            definition: model.definition,
            definition_image_url: model.definition_image_url,
            hint: model.hint,
            explanation: model.explanation,
        }
    }
}

impl From<EditFlashCardRequest> for EditFlashCardRequestDto {
    fn from(model: EditFlashCardRequest) -> Self {
        Self {
            term: model.term,
            definition: model.definition,
            definition_image_url: model.definition_image_url,
            hint: model.hint,
            explanation: model.explanation,
        }
    }
}

impl From<UploadImageResponseDto> for UploadedImage {
    fn from(dto: UploadImageResponseDto) -> Self {
        Self {
            url: dto.url,
            id: dto.id,
        }
    }
}

impl From<ColorDto> for Color {
    fn from(dto: ColorDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            hex_value: dto.hex_value,
        }
    }
}

impl From<SubjectDto> for Subject {
    fn from(dto: SubjectDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl From<StudySetResponseDto> for StudySet {
    fn from(dto: StudySetResponseDto) -> Self {
        let flashcards: Vec<FlashCard> = dto.flashcards.into_iter().map(FlashCard::from).collect();
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            is_public: dto.is_public,
            owner_id: dto.owner_id,
            subject: dto.subject.map(Subject::from),
            color: dto.color.map(Color::from),
            // Listing endpoints send only the count; detail sends the cards.
            flashcard_count: dto.flashcard_count.max(flashcards.len() as u32),
            flashcards,
        }
    }
}

impl From<CreateStudySetRequest> for CreateStudySetRequestDto {
    fn from(model: CreateStudySetRequest) -> Self {
        Self {
            title: model.title,
            description: model.description,
            is_public: model.is_public,
            subject_id: model.subject_id,
            color_id: model.color_id,
            owner_id: model.owner_id,
        }
    }
}

impl From<UpdateStudySetRequest> for UpdateStudySetRequestDto {
    fn from(model: UpdateStudySetRequest) -> Self {
        Self {
            title: model.title,
            description: model.description,
            is_public: model.is_public,
            subject_id: model.subject_id,
            color_id: model.color_id,
            owner_id: model.owner_id,
        }
    }
}

impl From<CreateFolderRequest> for CreateFolderRequestDto {
    fn from(model: CreateFolderRequest) -> Self {
        Self {
            title: model.title,
            description: model.description,
            is_public: model.is_public,
            owner_id: model.owner_id,
        }
    }
}

impl From<FolderResponseDto> for Folder {
    fn from(dto: FolderResponseDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            is_public: dto.is_public,
            owner_id: dto.owner_id,
            study_set_count: dto.study_set_count,
        }
    }
}

impl From<ClassResponseDto> for StudyClass {
    fn from(dto: ClassResponseDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            join_token: dto.join_token,
            owner_id: dto.owner_id,
            allow_join: dto.allow_join,
            member_count: dto.member_count,
            study_set_count: dto.study_set_count,
        }
    }
}

impl From<JoinClassRequest> for JoinClassRequestDto {
    fn from(model: JoinClassRequest) -> Self {
        Self {
            join_token: model.join_token,
            user_id: model.user_id,
        }
    }
}
