#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub owner_id: String,
    pub study_set_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFolderRequest {
    pub title: String,
    pub description: String,
    pub is_public: bool,
    pub owner_id: String,
}
