//! Write operations: create and delete questions.

use serde::Serialize;
use tracing::{debug, warn};

use trivia_store::TriviaStore;
use trivia_types::{CreateQuestionRequest, Question, QuestionId};

use crate::error::{ApiError, ApiResult};
use crate::paginate::paginate;

/// Output of [`create_question`]: the new id plus the re-derived first
/// page of the full listing.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCreated {
    pub success: bool,
    pub question_created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Output of [`delete_question`].
#[derive(Debug, Clone, Serialize)]
pub struct QuestionDeleted {
    pub success: bool,
    pub deleted_id: QuestionId,
}

/// Validates and persists a new question.
///
/// All four fields are required and the text must be non-empty; violations
/// are rejected before anything touches the store. Persistence faults fail
/// closed as Unprocessable.
pub fn create_question(
    store: &TriviaStore,
    request: CreateQuestionRequest,
) -> ApiResult<QuestionCreated> {
    let question = request.validate()?;
    let id = store.insert_question(&question)?;
    let selection = store.all_questions()?;
    debug!(%id, total = selection.len(), "question created");
    Ok(QuestionCreated {
        success: true,
        question_created: id,
        questions: paginate(&selection, 1).to_vec(),
        total_questions: selection.len(),
    })
}

/// Removes a question by id.
///
/// A nonexistent id surfaces as Unprocessable rather than NotFound; the
/// deployed frontend depends on that code, so a second delete of the same
/// id reports 422.
pub fn delete_question(store: &TriviaStore, id: QuestionId) -> ApiResult<QuestionDeleted> {
    store.delete_question(id).map_err(|err| {
        warn!(%id, error = %err, "delete rejected");
        ApiError::Unprocessable
    })?;
    Ok(QuestionDeleted {
        success: true,
        deleted_id: id,
    })
}
