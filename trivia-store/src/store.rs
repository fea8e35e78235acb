use rusqlite::types::Type;
use rusqlite::{Connection, Row, params, params_from_iter};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use trivia_types::{Category, CategoryId, NewQuestion, Question, QuestionId};

use crate::error::{StoreError, StoreResult};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    question   TEXT NOT NULL,
    answer     TEXT NOT NULL,
    category   TEXT NOT NULL,
    difficulty INTEGER NOT NULL
);
";

/// Relational store for questions and categories.
///
/// Wraps a single SQLite connection. All listing queries return rows
/// ordered by ascending id so pagination stays deterministic between
/// calls absent concurrent mutation.
pub struct TriviaStore {
    conn: Connection,
}

impl TriviaStore {
    /// Opens (creating if needed) a store at the given path and ensures
    /// the schema exists.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Opens an in-memory store. Used by tests and throwaway sessions.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    // ── Questions: reads ──────────────────────────────────────────────

    /// Full scan of all questions, ordered by ascending id.
    pub fn all_questions(&self) -> StoreResult<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_question)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Total number of persisted questions.
    pub fn count_questions(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Questions whose category matches the given id, ordered by id.
    /// The category column is text, so both sides compare as text.
    pub fn questions_in_category(&self, category: CategoryId) -> StoreResult<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![category.as_key()], row_to_question)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Case-insensitive substring search over question text, ordered by id.
    /// Uses `instr` rather than `LIKE` so `%` and `_` in the term match
    /// literally.
    pub fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE instr(lower(question), lower(?1)) > 0 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![term], row_to_question)?;
        let matched = rows.collect::<Result<Vec<_>, _>>()?;
        debug!(term, matched = matched.len(), "question search");
        Ok(matched)
    }

    /// Questions outside the given id set, optionally restricted to one
    /// category, ordered by id. This is the quiz selector's eligible-set
    /// query.
    pub fn questions_excluding(
        &self,
        category: Option<CategoryId>,
        exclude: &HashSet<QuestionId>,
    ) -> StoreResult<Vec<Question>> {
        // SQLite rejects an empty `NOT IN ()`, so the clause is built only
        // when there is something to exclude.
        let mut clauses = Vec::new();
        if category.is_some() {
            clauses.push("category = ?".to_string());
        }
        if !exclude.is_empty() {
            let placeholders = vec!["?"; exclude.len()].join(", ");
            clauses.push(format!("id NOT IN ({placeholders})"));
        }
        let where_clause = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };
        let sql = format!(
            "SELECT id, question, answer, category, difficulty FROM questions\
             {where_clause} ORDER BY id"
        );

        let mut values: Vec<rusqlite::types::Value> = Vec::with_capacity(exclude.len() + 1);
        if let Some(category) = category {
            values.push(category.as_key().into());
        }
        values.extend(exclude.iter().map(|id| id.as_i64().into()));

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values), row_to_question)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    // ── Questions: writes ─────────────────────────────────────────────

    /// Persists a new question and returns its store-assigned id.
    pub fn insert_question(&self, question: &NewQuestion) -> StoreResult<QuestionId> {
        self.conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (?1, ?2, ?3, ?4)",
            params![
                question.text,
                question.answer,
                question.category.as_key(),
                question.difficulty,
            ],
        )?;
        let id = QuestionId::from_raw(self.conn.last_insert_rowid());
        debug!(%id, "question inserted");
        Ok(id)
    }

    /// Removes a question by id. `NotFound` when no row matched.
    pub fn delete_question(&self, id: QuestionId) -> StoreResult<()> {
        let removed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1", params![id.as_i64()])?;
        if removed == 0 {
            return Err(StoreError::NotFound(format!("question {id}")));
        }
        debug!(%id, "question deleted");
        Ok(())
    }

    // ── Categories ────────────────────────────────────────────────────

    /// All categories, ordered by ascending id.
    pub fn all_categories(&self) -> StoreResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: CategoryId::from_raw(row.get(0)?),
                label: row.get(1)?,
            })
        })?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Looks up one category by id.
    pub fn category(&self, id: CategoryId) -> StoreResult<Option<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories WHERE id = ?1")?;
        let mut rows = stmt.query_map(params![id.as_i64()], |row| {
            Ok(Category {
                id: CategoryId::from_raw(row.get(0)?),
                label: row.get(1)?,
            })
        })?;
        rows.next().transpose().map_err(StoreError::from)
    }

    /// Seeds a category. The engine never creates categories at runtime;
    /// this exists for initial data loads and tests.
    pub fn insert_category(&self, label: &str) -> StoreResult<CategoryId> {
        self.conn
            .execute("INSERT INTO categories (type) VALUES (?1)", params![label])?;
        Ok(CategoryId::from_raw(self.conn.last_insert_rowid()))
    }
}

fn row_to_question(row: &Row<'_>) -> rusqlite::Result<Question> {
    let category: String = row.get(3)?;
    let category = category.parse::<CategoryId>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
    })?;
    Ok(Question {
        id: QuestionId::from_raw(row.get(0)?),
        text: row.get(1)?,
        answer: row.get(2)?,
        category,
        difficulty: row.get(4)?,
    })
}
