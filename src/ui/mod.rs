//! Screen state holders and the runtime they share.
//!
//! Each screen module follows the same layout: `state` (the snapshot),
//! `intent` (actions in, one-shot events out), `reducer` (pure transitions)
//! and `view_model` (task launching and side effects).

pub mod class_detail;
pub mod create_flashcard;
pub mod create_folder;
pub mod edit_flashcard;
pub mod flashcard_form;
pub mod flip_flashcard;
pub mod login;
pub mod mvi;
pub mod settings;
pub mod signup;
pub mod study_set_detail;
pub mod surface;
pub mod verify_email;

mod auth_session;
