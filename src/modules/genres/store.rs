use async_trait::async_trait;
use folio_db::{Collection, DocumentId, StoreError, StoreResult};

use super::models::Genre;

/// Ordering for genre listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrder {
    Ascending,
    Descending,
}

/// Persistence interface for genres. Injected into the controller so tests
/// can substitute fakes.
#[async_trait]
pub trait GenreStore: Send + Sync {
    /// All genres, ordered by name (byte-lexicographic, locale-independent).
    async fn find_all(&self, order: NameOrder) -> StoreResult<Vec<Genre>>;

    async fn find_by_id(&self, id: &DocumentId) -> StoreResult<Option<Genre>>;

    /// Exact, case-sensitive name lookup.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Genre>>;

    /// Inserts a genre under a fresh id. Name uniqueness is enforced inside
    /// the store; a duplicate fails with [`StoreError::UniqueViolation`].
    async fn insert(&self, name: &str) -> StoreResult<Genre>;

    /// Full replacement of the record under `id`, which is preserved.
    /// Returns `None` without writing when `id` is absent.
    async fn update_by_id(&self, id: &DocumentId, name: &str) -> StoreResult<Option<Genre>>;

    /// Idempotent: deleting an absent id succeeds.
    async fn delete_by_id(&self, id: &DocumentId) -> StoreResult<()>;
}

/// Memory-backed genre store.
pub struct MemoryGenreStore {
    genres: Collection<Genre>,
}

impl MemoryGenreStore {
    pub fn new() -> Self {
        Self {
            genres: Collection::new("genre"),
        }
    }
}

impl Default for MemoryGenreStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenreStore for MemoryGenreStore {
    async fn find_all(&self, order: NameOrder) -> StoreResult<Vec<Genre>> {
        let mut genres = self.genres.all().await;
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        if order == NameOrder::Descending {
            genres.reverse();
        }
        Ok(genres)
    }

    async fn find_by_id(&self, id: &DocumentId) -> StoreResult<Option<Genre>> {
        Ok(self.genres.get(id).await)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Genre>> {
        Ok(self.genres.find_one(|genre| genre.name == name).await)
    }

    async fn insert(&self, name: &str) -> StoreResult<Genre> {
        self.genres
            .insert_unique(
                |genre| genre.name == name,
                |id| Genre {
                    id,
                    name: name.to_string(),
                },
            )
            .await
            .map_err(|_existing| StoreError::unique_violation("genre", "name"))
    }

    async fn update_by_id(&self, id: &DocumentId, name: &str) -> StoreResult<Option<Genre>> {
        Ok(self
            .genres
            .replace(
                id,
                Genre {
                    id: id.clone(),
                    name: name.to_string(),
                },
            )
            .await)
    }

    async fn delete_by_id(&self, id: &DocumentId) -> StoreResult<()> {
        self.genres.remove(id).await;
        Ok(())
    }
}
