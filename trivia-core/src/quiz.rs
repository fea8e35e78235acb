//! Quiz session selection.
//!
//! Stateless: the client resubmits the full set of question ids it has
//! already been served, and every call evaluates eligibility fresh. No
//! session state survives between calls, so repeated calls with an
//! unchanged `seen` set may legitimately repeat a question.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use tracing::debug;

use trivia_store::TriviaStore;
use trivia_types::{CategorySelector, Question, QuizRequest};

use crate::error::ApiResult;

/// Output of [`next_question`]. A `null` question means the quiz is
/// exhausted: every eligible question has been seen. That is a success
/// outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Picks one not-yet-seen question uniformly at random.
///
/// The eligible set is the questions matching the request's category
/// selector minus the de-duplicated `seen` set. Every eligible question
/// has equal selection probability on a given call. The random source is
/// injected so tests can drive selection deterministically.
pub fn next_question<R: Rng + ?Sized>(
    store: &TriviaStore,
    request: &QuizRequest,
    rng: &mut R,
) -> ApiResult<QuizResponse> {
    let category = match request.selector()? {
        CategorySelector::All => None,
        CategorySelector::Category(id) => Some(id),
    };
    let seen = request.seen();
    let eligible = store.questions_excluding(category, &seen)?;
    debug!(
        category = ?category,
        seen = seen.len(),
        eligible = eligible.len(),
        "quiz selection"
    );
    Ok(QuizResponse {
        success: true,
        question: eligible.choose(rng).cloned(),
    })
}
