use crate::{
    routes::{
        evaluations::{get_add_evaluation_form, post_add_evaluation, post_delete_evaluation},
        index::{get_index_route, post_delete_student, post_new_student},
        student_in_detail::get_student,
    },
    state::RostrumState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer, cookie::time::Duration};

pub mod evaluations;
pub mod index;
pub mod student_in_detail;

pub fn router(state: RostrumState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(30)));

    Router::new()
        .route("/", get(get_index_route).post(post_new_student))
        .route("/student/{id}", get(get_student))
        .route(
            "/student/{id}/add_evaluation",
            get(get_add_evaluation_form).post(post_add_evaluation),
        )
        .route("/student/{id}/delete", post(post_delete_student))
        .route("/evaluation/{id}/delete", post(post_delete_evaluation))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
