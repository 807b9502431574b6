use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failures surfaced to callers.
///
/// `UniqueViolation` is the one error callers are expected to branch on; the
/// rest propagate to the generic request error handler.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated on {collection}.{field}")]
    UniqueViolation {
        collection: &'static str,
        field: &'static str,
    },

    #[error("store '{collection}' unavailable: {reason}")]
    Unavailable {
        collection: &'static str,
        reason: String,
    },
}

impl StoreError {
    pub fn unique_violation(collection: &'static str, field: &'static str) -> Self {
        Self::UniqueViolation { collection, field }
    }

    pub fn unavailable(collection: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            collection,
            reason: reason.into(),
        }
    }
}
