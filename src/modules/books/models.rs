use folio_db::DocumentId;
use serde::{Deserialize, Serialize};

/// A catalog book. The write side of the book catalog is managed elsewhere;
/// this service reads books to resolve genre references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: DocumentId,
    pub title: String,
    pub author: String,
    /// Genres this book belongs to (many-to-many).
    #[serde(default)]
    pub genre: Vec<DocumentId>,
}

/// Fields for inserting a book, used by seeding and tests.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub genre: Vec<DocumentId>,
}
