use crate::domain::Folder;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CreateFolderAction {
    TitleChanged(String),
    DescriptionChanged(String),
    PublicChanged(bool),
    SaveClicked,
    SaveStarted,
    SaveFinished(Result<Folder, String>),
}

impl Intent for CreateFolderAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum CreateFolderEvent {
    FolderCreated { id: String },
    ShowError(String),
}
