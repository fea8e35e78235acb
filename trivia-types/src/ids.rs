//! Identifier types for questions and categories.
//!
//! Both are store-assigned integers (SQLite rowids). The category reference
//! on a question is a soft foreign key: the store keeps it as text and never
//! enforces integrity at write time, so `CategoryId` normalizes to and from
//! its text form explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a question. Assigned by the store on insert,
/// immutable afterwards; listings are always ordered ascending by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    #[must_use]
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a category.
///
/// On the quiz wire format, id `0` is reserved to mean "all categories" and
/// is represented as [`crate::CategorySelector::All`], never as a
/// `CategoryId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i64);

impl CategoryId {
    #[must_use]
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// The text form used for soft-foreign-key comparison in the store.
    #[must_use]
    pub fn as_key(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}
