use folio_db::DocumentId;
use serde::{Deserialize, Serialize};

use crate::modules::books::models::Book;

/// Mount point for genre routes; also the redirect target after a deletion.
pub const GENRE_BASE_PATH: &str = "/catalog/genre";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: DocumentId,
    pub name: String,
}

impl Genre {
    /// Link to this genre's detail page. Derived from the id on every read,
    /// never stored.
    pub fn url(&self) -> String {
        format!("{GENRE_BASE_PATH}/{}", self.id)
    }
}

/// Form candidate echoed back when validation fails. `id` is present on
/// update, absent on create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreForm {
    pub id: Option<DocumentId>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub const NAME_REQUIRED: Self = Self {
        field: "name",
        message: "Genre name required",
    };

    pub const NAME_TOO_SHORT: Self = Self {
        field: "name",
        message: "Genre name must contain at least 3 characters",
    };
}

/// Render context handed to the presentation layer: the `view` tag names the
/// template, the remaining fields are its data.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum GenrePage {
    GenreList {
        title: &'static str,
        genre_list: Vec<Genre>,
    },
    GenreDetail {
        title: &'static str,
        genre: Genre,
        genre_books: Vec<Book>,
    },
    GenreForm {
        title: &'static str,
        genre: Option<GenreForm>,
        errors: Vec<ValidationError>,
    },
    /// Delete confirmation. `genre` may be empty when only dangling book
    /// references remain for an already-removed id.
    GenreDelete {
        title: &'static str,
        genre: Option<Genre>,
        genre_books: Vec<Book>,
    },
}
