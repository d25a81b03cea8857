use std::{path::Path, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use game_guides::{
    build_router,
    config::AppConfig,
    dao::{game_store::json_file::JsonFileStore, models::GameEntity},
    state::{AppState, catalog::Catalog, overlay::Overlay},
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(overlay_path: &Path) -> Router {
    let catalog = Catalog::new(vec![
        GameEntity {
            id: 1,
            title: "Stardew Valley".into(),
            description: "Farming".into(),
            image: "stardew.jpg".into(),
            guide: Some("Plant parsnips".into()),
        },
        GameEntity {
            id: 2,
            title: "Celeste".into(),
            description: "Climbing".into(),
            image: "celeste.jpg".into(),
            guide: None,
        },
    ]);
    let config = AppConfig {
        overlay_path: overlay_path.to_path_buf(),
        ..AppConfig::default()
    };
    let state = AppState::new(
        config,
        Arc::new(JsonFileStore::new(overlay_path)),
        catalog,
        Overlay::default(),
    );
    build_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn lists_catalog_games() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("user_games.json"));

    let (status, body) = send(&app, get("/games")).await;
    assert_eq!(status, StatusCode::OK);
    let games = body.as_array().unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["title"], "Stardew Valley");
    assert!(games[1].get("guide").is_none());
}

#[tokio::test]
async fn create_then_list_shows_new_game_first() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("user_games.json"));

    let (status, body) = send(
        &app,
        with_json(
            "POST",
            "/games",
            json!({"title": "Hades", "description": "Roguelike", "guide": "Max out Mirror"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["game"]["id"], 3);
    assert_eq!(body["game"]["image"], "placeholder.jpg");
    assert_eq!(body["message"], "Game \"Hades\" added successfully!");

    let (_, listed) = send(&app, get("/games")).await;
    assert_eq!(listed[0]["title"], "Hades");
    assert_eq!(listed.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn blank_or_missing_fields_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_games.json");
    let app = app(&path);

    let (status, _) = send(
        &app,
        with_json(
            "POST",
            "/games",
            json!({"title": "  ", "description": "D", "guide": "G"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, with_json("POST", "/games", json!({"title": "T"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(!path.exists());
}

#[tokio::test]
async fn rejected_bodies_carry_a_message() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("user_games.json"));

    let (status, body) = send(
        &app,
        with_json(
            "PUT",
            "/games/1",
            json!({"title": "", "description": "D", "guide": "G"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("bad request: validation failed")
    );

    let malformed = Request::builder()
        .method("POST")
        .uri("/games")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let (status, body) = send(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("user_games.json");
    let app = app(&path);

    for request in [
        get("/games/abc/guide"),
        get("/games/abc/edit"),
        with_json(
            "PUT",
            "/games/abc",
            json!({"title": "T", "description": "D", "guide": "G"}),
        ),
    ] {
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["message"].as_str().unwrap().starts_with("not found:"));
    }

    assert!(!path.exists());
}

#[tokio::test]
async fn edit_update_and_read_guide() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("user_games.json"));

    let (status, body) = send(&app, get("/games/2/edit")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["materialized"], true);
    assert_eq!(body["game"]["guide"], "Guide coming soon.");

    let (_, body) = send(&app, get("/games/2/edit")).await;
    assert_eq!(body["materialized"], false);

    let (status, body) = send(
        &app,
        with_json(
            "PUT",
            "/games/2",
            json!({"title": "Celeste", "description": "Climb", "guide": "Dash twice"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Changes saved successfully!");

    let (status, body) = send(&app, get("/games/2/guide")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guide"], "Dash twice");
    assert_eq!(body["image"], "celeste.jpg");
}

#[tokio::test]
async fn unknown_game_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = app(&dir.path().join("user_games.json"));

    let (status, body) = send(&app, get("/games/999999/guide")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "not found: game `999999` not found");

    let (status, _) = send(&app, get("/games/999999/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthcheck_reports_degraded_after_failed_save() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "plain file").unwrap();
    let app = app(&blocker.join("user_games.json"));

    let (status, body) = send(&app, get("/healthcheck")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["catalog_games"], 2);

    let (status, _) = send(
        &app,
        with_json(
            "POST",
            "/games",
            json!({"title": "T", "description": "D", "guide": "G"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (_, body) = send(&app, get("/healthcheck")).await;
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["overlay_games"], 1);
}
