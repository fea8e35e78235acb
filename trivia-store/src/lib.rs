//! SQLite persistence for the trivia engine.
//!
//! Provides the relational store behind the query, quiz, and mutation
//! services: ordered scans, category filtering, id-set exclusion, and
//! case-insensitive substring search over question text.
//!
//! # Architecture
//!
//! - A [`TriviaStore`] wraps one `rusqlite` connection; callers own the
//!   handle and pass it into each operation explicitly (no process-wide
//!   singleton).
//! - The question's category column is a soft foreign key kept as text;
//!   comparisons normalize both sides to the text form.
//! - Every write commits independently; no multi-statement transaction
//!   spans an operation.

mod error;
mod store;

pub use error::{StoreError, StoreResult};
pub use store::TriviaStore;
