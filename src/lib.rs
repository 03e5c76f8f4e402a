//! Headless core of the QuickMem flashcard client.
//!
//! Layers, leaf first: [`api`] (remote gateway), [`repository`] (DTO mapping
//! and [`resource::Resource`] sequences), [`ui`] (per-screen state holders
//! built on the MVI primitives) and [`session`] (persisted tokens and
//! preferences).

pub mod api;
pub mod config;
pub mod domain;
pub mod logging;
pub mod repository;
pub mod resource;
pub mod session;
pub mod ui;
pub mod validation;
