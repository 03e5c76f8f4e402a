use crate::domain::StudyClass;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ClassDetailAction {
    /// Navigation arguments.
    Init {
        code: String,
        id: String,
        title: String,
        description: String,
    },
    Refresh,
    JoinClassCodeChanged(String),
    JoinClassClicked,
    NavigateToWelcomeClicked,
    LoggedOut,
    ClassesStarted,
    ClassesLoaded(Result<Vec<StudyClass>, String>),
    JoinStarted,
    JoinFinished(Result<StudyClass, String>),
}

impl Intent for ClassDetailAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassDetailEvent {
    NavigateToWelcome,
    JoinedClass(StudyClass),
    ShowError(String),
}
