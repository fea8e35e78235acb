//! Query, quiz-selection, and mutation services for the trivia engine.
//!
//! This crate is the business core between the (external) HTTP layer and
//! the store:
//! - [`paginate`] — fixed-size slicing of ordered result sets
//! - [`query`] — listings, category filtering, substring search
//! - [`quiz`] — stateless uniformly-random not-yet-seen selection
//! - [`mutate`] — create/delete with validated request bodies
//! - [`error`] — the failure taxonomy and uniform error envelope
//!
//! Every operation takes an explicit [`trivia_store::TriviaStore`] handle
//! and runs as one synchronous logical operation; there is no caching, no
//! background work, and no state shared between calls.

pub mod error;
pub mod mutate;
pub mod paginate;
pub mod query;
pub mod quiz;

pub use error::{ApiError, ApiResult, EmptyCause, ErrorEnvelope};
pub use mutate::{QuestionCreated, QuestionDeleted, create_question, delete_question};
pub use paginate::{QUESTIONS_PER_PAGE, paginate};
pub use query::{
    CategoryListing, CategoryQuestionListing, QuestionListing, SearchResults, list_by_category,
    list_categories, list_questions, search_questions,
};
pub use quiz::{QuizResponse, next_question};
