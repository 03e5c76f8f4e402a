/// A class a teacher owns or a student joined.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyClass {
    pub id: String,
    pub title: String,
    pub description: String,
    pub join_token: String,
    pub owner_id: String,
    pub allow_join: bool,
    pub member_count: u32,
    pub study_set_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClassRequest {
    pub join_token: String,
    pub user_id: String,
}
