//! End-to-end genre flows driven through the full router.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response, StatusCode},
    Router,
};
use tower::ServiceExt;

use folio_app::modules;
use folio_app::modules::books::models::NewBook;
use folio_app::modules::books::store::{BookStore, MemoryBookStore};
use folio_app::modules::genres::store::{GenreStore, MemoryGenreStore, NameOrder};
use folio_app::state::Stores;
use folio_db::DocumentId;
use folio_kernel::settings::Settings;
use folio_kernel::ModuleRegistry;

struct TestApp {
    router: Router,
    genres: Arc<MemoryGenreStore>,
    books: Arc<MemoryBookStore>,
}

fn test_app() -> TestApp {
    let genres = Arc::new(MemoryGenreStore::new());
    let books = Arc::new(MemoryBookStore::new());
    let stores = Stores {
        genres: genres.clone(),
        books: books.clone(),
    };

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &stores);

    let settings = Settings::default();
    TestApp {
        router: folio_http::build_router(&registry, &settings),
        genres,
        books,
    }
}

async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    app.router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &TestApp, uri: &str, body: &str) -> Response<Body> {
    app.router
        .clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect carries a location")
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn healthz_responds_ok() {
    let app = test_app();
    let response = get(&app, "/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn genre_list_renders_sorted_view() {
    let app = test_app();
    for name in ["Science Fiction", "Fantasy"] {
        app.genres.insert(name).await.unwrap();
    }

    let response = get(&app, "/catalog/genre").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["view"], "genre_list");
    let names: Vec<&str> = body["genre_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Fantasy", "Science Fiction"]);
}

#[tokio::test]
async fn create_flow_redirects_and_is_idempotent() {
    let app = test_app();

    let form = get(&app, "/catalog/genre/create").await;
    assert_eq!(form.status(), StatusCode::OK);
    assert_eq!(json_body(form).await["view"], "genre_form");

    let first = post_form(&app, "/catalog/genre/create", "name=Fantasy").await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    let target = location(&first);

    let second = post_form(&app, "/catalog/genre/create", "name=Fantasy").await;
    assert_eq!(location(&second), target);
    assert_eq!(
        app.genres.find_all(NameOrder::Ascending).await.unwrap().len(),
        1
    );

    // The redirect target resolves to the detail page.
    let detail = get(&app, &target).await;
    assert_eq!(detail.status(), StatusCode::OK);
    let body = json_body(detail).await;
    assert_eq!(body["view"], "genre_detail");
    assert_eq!(body["genre"]["name"], "Fantasy");
}

#[tokio::test]
async fn create_with_blank_name_redisplays_form() {
    let app = test_app();

    let response = post_form(&app, "/catalog/genre/create", "name=+++").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response).await;
    assert_eq!(body["view"], "genre_form");
    assert_eq!(body["errors"][0]["message"], "Genre name required");
    assert!(app
        .genres
        .find_all(NameOrder::Ascending)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn detail_of_unknown_genre_is_404() {
    let app = test_app();

    let response = get(&app, "/catalog/genre/does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn update_flow_validates_then_replaces() {
    let app = test_app();
    let fantasy = app.genres.insert("Fantasy").await.unwrap();
    let update_uri = format!("/catalog/genre/{}/update", fantasy.id);

    let rejected = post_form(&app, &update_uri, "name=ab").await;
    assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(rejected).await;
    assert_eq!(body["genre"]["name"], "ab");
    assert_eq!(
        body["errors"][0]["message"],
        "Genre name must contain at least 3 characters"
    );

    let accepted = post_form(&app, &update_uri, "name=High+Fantasy").await;
    assert_eq!(accepted.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&accepted), fantasy.url());

    let updated = app.genres.find_by_id(&fantasy.id).await.unwrap().unwrap();
    assert_eq!(updated.name, "High Fantasy");
}

#[tokio::test]
async fn delete_flow_blocks_until_references_are_gone() {
    let app = test_app();
    let horror = app.genres.insert("Horror").await.unwrap();
    let dracula = app
        .books
        .insert(NewBook {
            title: "Dracula".to_string(),
            author: "Bram Stoker".to_string(),
            genre: vec![horror.id.clone()],
        })
        .await
        .unwrap();
    let delete_uri = format!("/catalog/genre/{}/delete", horror.id);

    let confirm = get(&app, &delete_uri).await;
    assert_eq!(confirm.status(), StatusCode::OK);
    assert_eq!(json_body(confirm).await["view"], "genre_delete");

    let blocked = post_form(&app, &delete_uri, "").await;
    assert_eq!(blocked.status(), StatusCode::OK);
    let body = json_body(blocked).await;
    assert_eq!(body["view"], "genre_delete");
    assert_eq!(body["genre_books"][0]["title"], "Dracula");
    assert!(app.genres.find_by_id(&horror.id).await.unwrap().is_some());

    app.books.remove(&dracula.id).await;

    let allowed = post_form(&app, &delete_uri, "").await;
    assert_eq!(allowed.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&allowed), "/catalog/genre");
    assert!(app.genres.find_by_id(&horror.id).await.unwrap().is_none());
}

#[tokio::test]
async fn deleting_an_absent_genre_still_redirects_to_the_listing() {
    let app = test_app();
    let uri = format!("/catalog/genre/{}/delete", DocumentId::generate());

    let response = post_form(&app, &uri, "").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/catalog/genre");
}

#[tokio::test]
async fn book_listing_is_read_only_and_sorted() {
    let app = test_app();
    for title in ["Beowulf", "Aeneid"] {
        app.books
            .insert(NewBook {
                title: title.to_string(),
                author: "Anonymous".to_string(),
                genre: vec![],
            })
            .await
            .unwrap();
    }

    let response = get(&app, "/catalog/book").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Aeneid", "Beowulf"]);
}
