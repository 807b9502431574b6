//! Shared store handles injected into modules.

use std::sync::Arc;

use crate::modules::books::store::{BookStore, MemoryBookStore};
use crate::modules::genres::store::{GenreStore, MemoryGenreStore};

/// Store handles shared across modules. Cloning is cheap; every field is an
/// `Arc`.
#[derive(Clone)]
pub struct Stores {
    pub genres: Arc<dyn GenreStore>,
    pub books: Arc<dyn BookStore>,
}

impl Stores {
    /// Memory-backed stores for the single-process deployment.
    pub fn in_memory() -> Self {
        Self {
            genres: Arc::new(MemoryGenreStore::new()),
            books: Arc::new(MemoryBookStore::new()),
        }
    }
}
