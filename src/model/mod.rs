//! View-models and wire DTOs shared by the filter engine, services and components.

pub mod api;
pub mod comment;
pub mod event;
pub mod friend;
pub mod tag;
pub mod user;
pub mod validation;
