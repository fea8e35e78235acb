//! Typed request bodies.
//!
//! Every mutating or quiz operation deserializes into one of these shapes
//! and validates it *before* any business logic runs. Field names mirror
//! the JSON the existing frontend sends, including its mixed naming
//! conventions.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ids::{CategoryId, QuestionId};
use crate::question::NewQuestion;
use crate::{Error, Result};

/// Body of a create-question request. All four fields are required; a
/// missing or null field is a validation error, never a panic downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(rename = "question")]
    pub text: Option<String>,
    pub answer: Option<String>,
    pub category: Option<CategoryId>,
    pub difficulty: Option<u32>,
}

impl CreateQuestionRequest {
    /// Validates the body into an insertable question.
    pub fn validate(self) -> Result<NewQuestion> {
        let text = self.text.ok_or(Error::MissingField("question"))?;
        if text.trim().is_empty() {
            return Err(Error::InvalidField("question"));
        }
        Ok(NewQuestion {
            text,
            answer: self.answer.ok_or(Error::MissingField("answer"))?,
            category: self.category.ok_or(Error::MissingField("category"))?,
            difficulty: self.difficulty.ok_or(Error::MissingField("difficulty"))?,
        })
    }
}

/// Body of a search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

impl SearchRequest {
    /// The trimmed term, or `None` when the field is missing or blank.
    /// The query layer reports an absent term the same way as zero matches.
    #[must_use]
    pub fn term(&self) -> Option<&str> {
        match self.search_term.as_deref().map(str::trim) {
            Some("") | None => None,
            other => other,
        }
    }
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    /// Every category. Encoded as category id `0` on the wire.
    All,
    /// A single category.
    Category(CategoryId),
}

/// The `quiz_category` object as the frontend sends it. The label is
/// accepted but ignored; only the id matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Body of a next-quiz-question request. Stateless: the client resubmits
/// the full set of question ids it has already been served.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<QuestionId>>,
}

impl QuizRequest {
    /// Resolves the category selector, rejecting a missing `quiz_category`.
    pub fn selector(&self) -> Result<CategorySelector> {
        let category = self
            .quiz_category
            .as_ref()
            .ok_or(Error::MissingField("quiz_category"))?;
        Ok(match category.id {
            0 => CategorySelector::All,
            id => CategorySelector::Category(CategoryId::from_raw(id)),
        })
    }

    /// De-duplicated set of already-served question ids. An absent list is
    /// treated as empty (first question of a session).
    #[must_use]
    pub fn seen(&self) -> HashSet<QuestionId> {
        self.previous_questions
            .as_deref()
            .unwrap_or_default()
            .iter()
            .copied()
            .collect()
    }
}
