//! Closed value sets shared by models and screens.
//!
//! Each `as_str()` value goes over the wire or into the session store;
//! once published, do not rename.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Teacher => "TEACHER",
        }
    }

    /// Unknown values fall back to `Student`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "TEACHER" => Self::Teacher,
            _ => Self::Student,
        }
    }
}

/// Which study progress a reset clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetType {
    Rating,
    FlipStatus,
    QuizStatus,
    TrueFalseStatus,
    ResetAll,
}

impl ResetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::FlipStatus => "flipStatus",
            Self::QuizStatus => "quizStatus",
            Self::TrueFalseStatus => "trueFalseStatus",
            Self::ResetAll => "resetAll",
        }
    }

    pub fn all() -> &'static [ResetType] {
        &[
            Self::Rating,
            Self::FlipStatus,
            Self::QuizStatus,
            Self::TrueFalseStatus,
            Self::ResetAll,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rating {
    #[default]
    NotStudied,
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStudied => "NOT_STUDIED",
            Self::Again => "AGAIN",
            Self::Hard => "HARD",
            Self::Good => "GOOD",
            Self::Easy => "EASY",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "AGAIN" => Self::Again,
            "HARD" => Self::Hard,
            "GOOD" => Self::Good,
            "EASY" => Self::Easy,
            _ => Self::NotStudied,
        }
    }
}

/// Outcome of a card in flip-card study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FlipCardStatus {
    #[default]
    None,
    Know,
    StillLearning,
}

impl FlipCardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Know => "KNOW",
            Self::StillLearning => "STILL_LEARNING",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "KNOW" => Self::Know,
            "STILL_LEARNING" => Self::StillLearning,
            _ => Self::None,
        }
    }
}

/// Interface languages the client ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageCode {
    #[default]
    En,
    Vi,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Vi => "vi",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Self::En),
            "vi" => Some(Self::Vi),
            _ => None,
        }
    }
}
