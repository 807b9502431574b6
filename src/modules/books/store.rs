use async_trait::async_trait;
use folio_db::{Collection, DocumentId, StoreResult};

use super::models::{Book, NewBook};

/// Persistence interface for books, read-only from the genre module's
/// perspective. `insert` exists for seeding and tests.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All books, ordered by title ascending.
    async fn find_all(&self) -> StoreResult<Vec<Book>>;

    /// Books whose `genre` references include `genre_id`.
    async fn find_by_genre_id(&self, genre_id: &DocumentId) -> StoreResult<Vec<Book>>;

    async fn insert(&self, book: NewBook) -> StoreResult<Book>;
}

/// Memory-backed book store.
pub struct MemoryBookStore {
    books: Collection<Book>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self {
            books: Collection::new("book"),
        }
    }

    /// Removes a book. Not part of [`BookStore`]; the write side of the book
    /// catalog lives elsewhere, but fixtures need to retract references.
    pub async fn remove(&self, id: &DocumentId) -> bool {
        self.books.remove(id).await
    }
}

impl Default for MemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn find_all(&self) -> StoreResult<Vec<Book>> {
        let mut books = self.books.all().await;
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books)
    }

    async fn find_by_genre_id(&self, genre_id: &DocumentId) -> StoreResult<Vec<Book>> {
        Ok(self.books.find(|book| book.genre.contains(genre_id)).await)
    }

    async fn insert(&self, book: NewBook) -> StoreResult<Book> {
        Ok(self
            .books
            .insert(|id| Book {
                id,
                title: book.title,
                author: book.author,
                genre: book.genre,
            })
            .await)
    }
}
