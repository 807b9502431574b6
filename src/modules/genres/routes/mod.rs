//! HTTP routes for the genres module.
//!
//! Handlers translate controller outcomes into responses: render contexts
//! become JSON view-model documents for the template layer, accepted
//! submissions become redirects.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;

use folio_db::DocumentId;
use folio_http::error::AppError;

use super::controller::{DeleteOutcome, FormOutcome, GenreController};

pub fn router(controller: Arc<GenreController>) -> Router {
    Router::new()
        .route("/", get(genre_list))
        .route("/create", get(genre_create_get).post(genre_create_post))
        .route("/{id}", get(genre_detail))
        .route("/{id}/update", get(genre_update_get).post(genre_update_post))
        .route("/{id}/delete", get(genre_delete_get).post(genre_delete_post))
        .with_state(controller)
}

#[derive(Debug, Deserialize)]
struct GenreInput {
    #[serde(default)]
    name: String,
}

async fn genre_list(
    State(controller): State<Arc<GenreController>>,
) -> Result<Response, AppError> {
    let page = controller.list().await?;
    Ok(Json(page).into_response())
}

async fn genre_detail(
    State(controller): State<Arc<GenreController>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let page = controller.detail(&DocumentId::from(id)).await?;
    Ok(Json(page).into_response())
}

async fn genre_create_get(State(controller): State<Arc<GenreController>>) -> Response {
    Json(controller.create_form()).into_response()
}

async fn genre_create_post(
    State(controller): State<Arc<GenreController>>,
    Form(input): Form<GenreInput>,
) -> Result<Response, AppError> {
    Ok(form_response(controller.create_submit(&input.name).await?))
}

async fn genre_update_get(
    State(controller): State<Arc<GenreController>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let page = controller.update_form(&DocumentId::from(id)).await?;
    Ok(Json(page).into_response())
}

async fn genre_update_post(
    State(controller): State<Arc<GenreController>>,
    Path(id): Path<String>,
    Form(input): Form<GenreInput>,
) -> Result<Response, AppError> {
    let outcome = controller
        .update_submit(&DocumentId::from(id), &input.name)
        .await?;
    Ok(form_response(outcome))
}

async fn genre_delete_get(
    State(controller): State<Arc<GenreController>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let page = controller.delete_form(&DocumentId::from(id)).await?;
    Ok(Json(page).into_response())
}

async fn genre_delete_post(
    State(controller): State<Arc<GenreController>>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    match controller.delete_submit(&DocumentId::from(id)).await? {
        DeleteOutcome::Redirect(url) => Ok(Redirect::to(&url).into_response()),
        // A blocked deletion is a normal confirmation page, not an error.
        DeleteOutcome::Blocked(page) => Ok(Json(page).into_response()),
    }
}

fn form_response(outcome: FormOutcome) -> Response {
    match outcome {
        FormOutcome::Redirect(url) => Redirect::to(&url).into_response(),
        FormOutcome::Invalid(page) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(page)).into_response()
        }
    }
}
