pub mod controller;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use axum::Router;
use folio_kernel::{InitCtx, Module};

use crate::state::Stores;
use controller::GenreController;
use models::GENRE_BASE_PATH;
use store::{GenreStore, NameOrder};

/// Demo fixtures, kept alphabetical so a seeded listing reads naturally.
const DEMO_GENRES: [&str; 3] = ["Fantasy", "French Poetry", "Science Fiction"];

/// Genres module: the full CRUD surface of the catalog's genre resource.
pub struct GenresModule {
    controller: Arc<GenreController>,
    store: Arc<dyn GenreStore>,
}

impl GenresModule {
    pub fn new(stores: &Stores) -> Self {
        Self {
            controller: Arc::new(GenreController::new(
                stores.genres.clone(),
                stores.books.clone(),
            )),
            store: stores.genres.clone(),
        }
    }

    async fn seed(&self) -> anyhow::Result<()> {
        if !self.store.find_all(NameOrder::Ascending).await?.is_empty() {
            return Ok(());
        }
        for name in DEMO_GENRES {
            self.store.insert(name).await?;
        }
        tracing::info!(
            module = "genres",
            count = DEMO_GENRES.len(),
            "seeded demo genres"
        );
        Ok(())
    }
}

#[async_trait]
impl Module for GenresModule {
    fn name(&self) -> &'static str {
        "genres"
    }

    fn base_path(&self) -> &'static str {
        GENRE_BASE_PATH
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if ctx.settings.store.seed_demo {
            self.seed().await.context("failed to seed demo genres")?;
        }
        tracing::info!(module = self.name(), "genres module initialized");
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.controller.clone())
    }
}

/// Create a new instance of the genres module.
pub fn create_module(stores: &Stores) -> Arc<dyn Module> {
    Arc::new(GenresModule::new(stores))
}
