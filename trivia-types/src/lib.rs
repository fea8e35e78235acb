//! Core type definitions for the trivia engine.
//!
//! This crate defines the fundamental types shared by the store and the
//! service layer:
//! - Question and Category identifiers (store-assigned integers)
//! - The `Question` and `Category` entities with their wire renderings
//! - Typed request bodies, validated before any business logic runs
//!
//! Transport concerns (HTTP routing, headers, status codes) live outside
//! this workspace; these types describe fields, not wire bytes.

mod category;
mod ids;
mod question;
mod request;

pub use category::Category;
pub use ids::{CategoryId, QuestionId};
pub use question::{NewQuestion, Question};
pub use request::{
    CategorySelector, CreateQuestionRequest, QuizCategory, QuizRequest, SearchRequest,
};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid field: {0}")]
    InvalidField(&'static str),
}
