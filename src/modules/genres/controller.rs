//! Genre request handling: list, detail, create, update, delete.
//!
//! Operations take injected store handles and return typed outcomes; mapping
//! those to responses is the route layer's job.

use std::sync::Arc;

use folio_db::{DocumentId, StoreError};
use folio_http::error::AppError;
use thiserror::Error;

use crate::modules::books::store::BookStore;
use crate::utils::escape_html;

use super::models::{GenreForm, GenrePage, ValidationError, GENRE_BASE_PATH};
use super::store::{GenreStore, NameOrder};

const LIST_TITLE: &str = "Genre List";
const DETAIL_TITLE: &str = "Genre Detail";
const CREATE_TITLE: &str = "Create Genre";
const UPDATE_TITLE: &str = "Update Genre";
const DELETE_TITLE: &str = "Delete Genre";

const UPDATE_NAME_MIN_CHARS: usize = 3;

/// Errors terminal for the request. The route layer maps them to statuses;
/// nothing is recovered locally and no rollback is needed (no operation
/// spans more than one mutating store call).
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Genre not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ControllerError> for AppError {
    fn from(err: ControllerError) -> Self {
        match err {
            ControllerError::NotFound => AppError::not_found("Genre not found"),
            ControllerError::Store(err @ StoreError::UniqueViolation { .. }) => {
                AppError::conflict(err.to_string())
            }
            ControllerError::Store(err) => AppError::Internal(err.into()),
        }
    }
}

/// Outcome of a create or update submission.
#[derive(Debug)]
pub enum FormOutcome {
    /// Input accepted; the caller should redirect here.
    Redirect(String),
    /// Input rejected; re-display the form with the sanitized candidate and
    /// its errors. Nothing was written.
    Invalid(GenrePage),
}

/// Outcome of a delete submission.
#[derive(Debug)]
pub enum DeleteOutcome {
    Redirect(String),
    /// Referencing books block the deletion; show them instead of deleting.
    Blocked(GenrePage),
}

pub struct GenreController {
    genres: Arc<dyn GenreStore>,
    books: Arc<dyn BookStore>,
}

impl GenreController {
    pub fn new(genres: Arc<dyn GenreStore>, books: Arc<dyn BookStore>) -> Self {
        Self { genres, books }
    }

    pub async fn list(&self) -> Result<GenrePage, ControllerError> {
        let genre_list = self.genres.find_all(NameOrder::Ascending).await?;
        Ok(GenrePage::GenreList {
            title: LIST_TITLE,
            genre_list,
        })
    }

    /// Detail page: the genre and every book referencing it, fetched
    /// concurrently. Both reads must succeed before anything is shown.
    pub async fn detail(&self, id: &DocumentId) -> Result<GenrePage, ControllerError> {
        let (genre, genre_books) = tokio::try_join!(
            self.genres.find_by_id(id),
            self.books.find_by_genre_id(id),
        )?;
        let genre = genre.ok_or(ControllerError::NotFound)?;
        Ok(GenrePage::GenreDetail {
            title: DETAIL_TITLE,
            genre,
            genre_books,
        })
    }

    pub fn create_form(&self) -> GenrePage {
        GenrePage::GenreForm {
            title: CREATE_TITLE,
            genre: None,
            errors: Vec::new(),
        }
    }

    pub async fn create_submit(&self, raw_name: &str) -> Result<FormOutcome, ControllerError> {
        let trimmed = raw_name.trim();
        let name = escape_html(trimmed);

        if trimmed.is_empty() {
            return Ok(FormOutcome::Invalid(GenrePage::GenreForm {
                title: CREATE_TITLE,
                genre: Some(GenreForm { id: None, name }),
                errors: vec![ValidationError::NAME_REQUIRED],
            }));
        }

        if let Some(existing) = self.genres.find_by_name(&name).await? {
            // Already catalogued under this exact name: resolve to the
            // existing record instead of duplicating it.
            return Ok(FormOutcome::Redirect(existing.url()));
        }

        match self.genres.insert(&name).await {
            Ok(created) => Ok(FormOutcome::Redirect(created.url())),
            Err(StoreError::UniqueViolation { .. }) => {
                // Lost an insert race; the winner's record is the one to show.
                match self.genres.find_by_name(&name).await? {
                    Some(existing) => Ok(FormOutcome::Redirect(existing.url())),
                    None => Err(StoreError::unique_violation("genre", "name").into()),
                }
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn update_form(&self, id: &DocumentId) -> Result<GenrePage, ControllerError> {
        let genre = self
            .genres
            .find_by_id(id)
            .await?
            .ok_or(ControllerError::NotFound)?;
        Ok(GenrePage::GenreForm {
            title: UPDATE_TITLE,
            genre: Some(GenreForm {
                id: Some(genre.id.clone()),
                name: genre.name,
            }),
            errors: Vec::new(),
        })
    }

    pub async fn update_submit(
        &self,
        id: &DocumentId,
        raw_name: &str,
    ) -> Result<FormOutcome, ControllerError> {
        let trimmed = raw_name.trim();
        let name = escape_html(trimmed);

        // Length is judged on the trimmed value, before escaping, so "&"
        // counts as one character.
        if trimmed.chars().count() < UPDATE_NAME_MIN_CHARS {
            return Ok(FormOutcome::Invalid(GenrePage::GenreForm {
                title: UPDATE_TITLE,
                genre: Some(GenreForm {
                    id: Some(id.clone()),
                    name,
                }),
                errors: vec![ValidationError::NAME_TOO_SHORT],
            }));
        }

        match self.genres.update_by_id(id, &name).await? {
            Some(updated) => Ok(FormOutcome::Redirect(updated.url())),
            None => Err(ControllerError::NotFound),
        }
    }

    /// Delete confirmation page: the genre plus the books that would block
    /// its deletion.
    pub async fn delete_form(&self, id: &DocumentId) -> Result<GenrePage, ControllerError> {
        let (genre, genre_books) = tokio::try_join!(
            self.genres.find_by_id(id),
            self.books.find_by_genre_id(id),
        )?;
        let genre = genre.ok_or(ControllerError::NotFound)?;
        Ok(GenrePage::GenreDelete {
            title: DELETE_TITLE,
            genre: Some(genre),
            genre_books,
        })
    }

    pub async fn delete_submit(&self, id: &DocumentId) -> Result<DeleteOutcome, ControllerError> {
        let (genre, genre_books) = tokio::try_join!(
            self.genres.find_by_id(id),
            self.books.find_by_genre_id(id),
        )?;

        if !genre_books.is_empty() {
            // Referential-integrity gate. The genre slot may be empty when
            // only dangling references remain for an already-removed id.
            return Ok(DeleteOutcome::Blocked(GenrePage::GenreDelete {
                title: DELETE_TITLE,
                genre,
                genre_books,
            }));
        }

        // No existence check: deleting an absent id is a success.
        self.genres.delete_by_id(id).await?;
        Ok(DeleteOutcome::Redirect(GENRE_BASE_PATH.to_string()))
    }
}
