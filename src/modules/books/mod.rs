pub mod models;
pub mod store;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use axum::{extract::State, routing::get, Json, Router};
use folio_kernel::{InitCtx, Module};

use folio_http::error::AppError;

use crate::modules::genres::store::GenreStore;
use crate::state::Stores;
use models::{Book, NewBook};
use store::BookStore;

/// Books module. Only the read side lives here; cataloguing books is out of
/// scope for this service, but genre pages need their references resolved.
pub struct BooksModule {
    books: Arc<dyn BookStore>,
    genres: Arc<dyn GenreStore>,
}

impl BooksModule {
    pub fn new(stores: &Stores) -> Self {
        Self {
            books: stores.books.clone(),
            genres: stores.genres.clone(),
        }
    }

    async fn seed(&self) -> anyhow::Result<()> {
        if !self.books.find_all().await?.is_empty() {
            return Ok(());
        }

        // Genres are seeded before books; tolerate their absence anyway.
        let fantasy_refs = self
            .genres
            .find_by_name("Fantasy")
            .await?
            .map(|genre| vec![genre.id])
            .unwrap_or_default();

        for (title, author) in [
            ("The Name of the Wind", "Patrick Rothfuss"),
            ("The Wise Man's Fear", "Patrick Rothfuss"),
        ] {
            self.books
                .insert(NewBook {
                    title: title.to_string(),
                    author: author.to_string(),
                    genre: fantasy_refs.clone(),
                })
                .await?;
        }
        tracing::info!(module = "books", "seeded demo books");
        Ok(())
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    fn base_path(&self) -> &'static str {
        "/catalog/book"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if ctx.settings.store.seed_demo {
            self.seed().await.context("failed to seed demo books")?;
        }
        tracing::info!(module = self.name(), "books module initialized");
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(list_books))
            .with_state(self.books.clone())
    }
}

/// Read-only book listing, ordered by title.
async fn list_books(
    State(books): State<Arc<dyn BookStore>>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = books
        .find_all()
        .await
        .map_err(|err| AppError::Internal(err.into()))?;
    Ok(Json(books))
}

/// Create a new instance of the books module.
pub fn create_module(stores: &Stores) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(stores))
}
