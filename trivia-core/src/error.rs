//! Error taxonomy and the uniform failure envelope.
//!
//! Several distinct conditions — an empty category, an unknown category id,
//! a missing search term, a page past the end of the listing — all surface
//! to callers as the same NotFound code. That conflation is part of the
//! public contract, so it is kept, but every such case is funneled through
//! [`ApiError::empty_result`] with its real cause. Splitting the causes
//! later means changing that one function, not the call sites.

use serde::Serialize;
use thiserror::Error;
use trivia_store::StoreError;

/// Result type for service operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure categories exposed to callers. Codes and messages match the
/// envelope the frontend already understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Malformed or missing required input.
    #[error("bad request")]
    BadInput,

    /// No matching entity or empty result set. Covers several real causes;
    /// see [`EmptyCause`].
    #[error("resource not found")]
    NotFound,

    /// Operation invoked against an unsupported path shape.
    #[error("method not allowed")]
    MethodNotSupported,

    /// Valid shape, but the store rejected the operation.
    #[error("unprocessable")]
    Unprocessable,

    /// Unexpected internal fault.
    #[error("internal server error")]
    Internal,
}

/// The real reason behind a NotFound response. All causes currently map to
/// the same code on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyCause {
    /// No categories exist at all.
    NoCategories,
    /// The requested page is past the end of the unfiltered listing.
    PageOutOfRange,
    /// The category exists but holds no questions.
    EmptyCategory,
    /// No category with the requested id exists.
    UnknownCategory,
    /// The search request carried no usable term.
    MissingSearchTerm,
    /// The search term matched nothing.
    NoSearchMatches,
}

impl ApiError {
    /// Classifies an empty result set. Every empty-result path goes through
    /// here so the cause-to-code mapping lives in exactly one place.
    #[must_use]
    pub fn empty_result(cause: EmptyCause) -> Self {
        match cause {
            EmptyCause::NoCategories
            | EmptyCause::PageOutOfRange
            | EmptyCause::EmptyCategory
            | EmptyCause::UnknownCategory
            | EmptyCause::MissingSearchTerm
            | EmptyCause::NoSearchMatches => Self::NotFound,
        }
    }

    /// Numeric code reported in the failure envelope.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::BadInput => 400,
            Self::NotFound => 404,
            Self::MethodNotSupported => 405,
            Self::Unprocessable => 422,
            Self::Internal => 500,
        }
    }

    /// The uniform failure envelope. No internal detail crosses this
    /// boundary.
    #[must_use]
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            success: false,
            error: self.code(),
            error_message: match self {
                Self::BadInput => "bad request",
                Self::NotFound => "resource not found",
                Self::MethodNotSupported => "method not allowed",
                Self::Unprocessable => "unprocessable",
                Self::Internal => "internal server error",
            },
        }
    }
}

/// Serialized shape of every failure: `{success, error, error_message}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: u16,
    pub error_message: &'static str,
}

impl From<StoreError> for ApiError {
    /// Store lookups that miss stay NotFound; any other persistence fault
    /// fails closed as Unprocessable.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound,
            other => {
                tracing::warn!(error = %other, "store operation failed");
                Self::Unprocessable
            }
        }
    }
}

impl From<trivia_types::Error> for ApiError {
    fn from(err: trivia_types::Error) -> Self {
        tracing::debug!(error = %err, "request body rejected");
        Self::BadInput
    }
}
