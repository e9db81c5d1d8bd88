#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, header},
    response::Response,
};
use http_body_util::BodyExt;
use rostrum::{config::RuntimeConfiguration, routes, state::RostrumState};
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;

pub async fn test_state() -> (TempDir, RostrumState) {
    let dir = TempDir::new().unwrap();
    let config = RuntimeConfiguration::with_db_file(dir.path().join("instance/evaluations.db"));
    let state = RostrumState::new(SqlitePoolOptions::new().max_connections(5), config)
        .await
        .unwrap();

    (dir, state)
}

pub fn app(state: &RostrumState) -> Router {
    routes::router(state.clone())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
