use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::{NoContext, Timestamp, Uuid};

/// Opaque document identifier, assigned by the store on insert and never
/// mutated or reused afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Generates a fresh identifier (UUIDv7, so ids stay roughly insert-ordered).
    pub fn generate() -> Self {
        let timestamp = Timestamp::now(NoContext);
        Self(Uuid::new_v7(timestamp).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocumentId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for DocumentId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
