use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// A question category. Read-only from the engine's perspective; the store
/// only exposes seeding for setup and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Human-readable label, e.g. "History". Named `type` on the wire.
    #[serde(rename = "type")]
    pub label: String,
}
