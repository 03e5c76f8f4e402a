use super::flashcard::FlashCard;

#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    pub id: i64,
    pub name: String,
    pub hex_value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudySet {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub owner_id: String,
    pub subject: Option<Subject>,
    pub color: Option<Color>,
    pub flashcard_count: u32,
    pub flashcards: Vec<FlashCard>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateStudySetRequest {
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub subject_id: i64,
    pub color_id: i64,
    pub owner_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStudySetRequest {
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub subject_id: i64,
    pub color_id: i64,
    pub owner_id: String,
}
