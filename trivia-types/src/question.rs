use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, QuestionId};

/// A trivia question as persisted by the store.
///
/// Rendered on the wire as `{id, question, answer, category, difficulty}`;
/// the text field carries the `question` name for compatibility with the
/// existing frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    /// Soft foreign key to a category; integrity is not enforced at write
    /// time, and the store compares it as text.
    pub category: CategoryId,
    /// Small positive integer; no range is enforced.
    pub difficulty: u32,
}

/// A question awaiting insertion. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: u32,
}
