use crate::domain::{FlashCard, UploadedImage};
use crate::ui::flashcard_form::FormEdit;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CreateFlashCardAction {
    /// Navigation argument: the set the new card belongs to.
    Init { study_set_id: String },
    Form(FormEdit),
    UploadImage { file_name: String, bytes: Vec<u8> },
    SaveFlashCard,
    SaveStarted,
    SaveFinished(Result<FlashCard, String>),
    UploadStarted,
    UploadFinished(Result<UploadedImage, String>),
}

impl Intent for CreateFlashCardAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateFlashCardEvent {
    FlashCardSaved(FlashCard),
    FlashCardSaveError(String),
    ImageUploaded(String),
    ImageUploadError(String),
}
