use crate::domain::{ResetType, StudySet};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum StudySetDetailAction {
    Load { id: String },
    Delete,
    ResetProgress(ResetType),
    LoadStarted,
    Loaded(Result<StudySet, String>),
    /// A delete or reset is in flight.
    MutationStarted,
    MutationFinished(Result<(), String>),
}

impl Intent for StudySetDetailAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum StudySetDetailEvent {
    StudySetDeleted,
    ProgressReset(ResetType),
    ShowError(String),
}
