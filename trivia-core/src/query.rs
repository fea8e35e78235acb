//! Read operations: category listing, question listing, category
//! filtering, and substring search.
//!
//! Pagination is applied uniformly after filtering and ordering, so page 1
//! always means the first ten matches regardless of query mode. Each
//! operation takes the store handle explicitly.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use trivia_store::TriviaStore;
use trivia_types::{Category, CategoryId, Question, SearchRequest};

use crate::error::{ApiError, ApiResult, EmptyCause};
use crate::paginate::paginate;

/// Label reported as `currentCategory` by the unfiltered listing. The
/// frontend displays but never interprets it; kept fixed for
/// compatibility.
const UNFILTERED_CATEGORY_LABEL: &str = "History";

/// Output of [`list_categories`].
#[derive(Debug, Clone, Serialize)]
pub struct CategoryListing {
    pub success: bool,
    pub categories: BTreeMap<CategoryId, String>,
    pub total_categories: usize,
}

/// Output of [`list_questions`].
#[derive(Debug, Clone, Serialize)]
pub struct QuestionListing {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub categories: BTreeMap<CategoryId, String>,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// Output of [`list_by_category`].
#[derive(Debug, Clone, Serialize)]
pub struct CategoryQuestionListing {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// Output of [`search_questions`].
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

fn category_map(categories: &[Category]) -> BTreeMap<CategoryId, String> {
    categories
        .iter()
        .map(|c| (c.id, c.label.clone()))
        .collect()
}

/// Lists every category as an id-to-label map.
pub fn list_categories(store: &TriviaStore) -> ApiResult<CategoryListing> {
    let categories = store.all_categories()?;
    if categories.is_empty() {
        return Err(ApiError::empty_result(EmptyCause::NoCategories));
    }
    Ok(CategoryListing {
        success: true,
        total_categories: categories.len(),
        categories: category_map(&categories),
    })
}

/// Lists all questions, paginated, with the category map alongside.
///
/// An empty page — whether because no questions exist or because `page`
/// runs past the end — is reported as an empty result.
pub fn list_questions(store: &TriviaStore, page: u32) -> ApiResult<QuestionListing> {
    let selection = store.all_questions()?;
    let current = paginate(&selection, page);
    if current.is_empty() {
        return Err(ApiError::empty_result(EmptyCause::PageOutOfRange));
    }
    let categories = store.all_categories()?;
    debug!(page, total = selection.len(), "question listing");
    Ok(QuestionListing {
        success: true,
        questions: current.to_vec(),
        total_questions: selection.len(),
        categories: category_map(&categories),
        current_category: UNFILTERED_CATEGORY_LABEL.to_string(),
    })
}

/// Lists the questions of one category, paginated.
///
/// A category with no questions is indistinguishable from an unknown
/// category id: both classify as an empty result. A page past the end of a
/// non-empty category is a valid empty page.
pub fn list_by_category(
    store: &TriviaStore,
    category: CategoryId,
    page: u32,
) -> ApiResult<CategoryQuestionListing> {
    let selection = store.questions_in_category(category)?;
    if selection.is_empty() {
        let cause = match store.category(category)? {
            Some(_) => EmptyCause::EmptyCategory,
            None => EmptyCause::UnknownCategory,
        };
        return Err(ApiError::empty_result(cause));
    }
    // Questions reference the category as a soft foreign key, so a
    // non-empty selection can still point at a missing category row.
    let label = store
        .category(category)?
        .map(|c| c.label)
        .ok_or(ApiError::Internal)?;
    debug!(%category, page, total = selection.len(), "category listing");
    Ok(CategoryQuestionListing {
        success: true,
        questions: paginate(&selection, page).to_vec(),
        total_questions: selection.len(),
        current_category: label,
    })
}

/// Case-insensitive substring search over question text, paginated.
///
/// A missing or blank term and a term with zero matches both classify as
/// empty results.
pub fn search_questions(
    store: &TriviaStore,
    request: &SearchRequest,
    page: u32,
) -> ApiResult<SearchResults> {
    let term = request
        .term()
        .ok_or_else(|| ApiError::empty_result(EmptyCause::MissingSearchTerm))?;
    let selection = store.search_questions(term)?;
    if selection.is_empty() {
        return Err(ApiError::empty_result(EmptyCause::NoSearchMatches));
    }
    Ok(SearchResults {
        success: true,
        questions: paginate(&selection, page).to_vec(),
        total_questions: selection.len(),
    })
}
