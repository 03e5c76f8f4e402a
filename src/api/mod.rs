//! Remote gateway: one function per backend endpoint.
//!
//! Functions take request DTOs and return response DTOs or an [`ApiError`].
//! No retries happen here; the repository tier decides what to do with a
//! failure.

mod auth;
mod class;
mod client;
pub mod dto;
mod email;
mod error;
mod flashcard;
mod folder;
mod study_set;
mod upload;

pub use client::ApiClient;
pub use email::EmailService;
pub use error::ApiError;
