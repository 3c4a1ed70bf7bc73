use axum::{routing::post, Router};

use crate::{handlers, state::AppState};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/upload",
            post(handlers::upload).fallback(handlers::method_not_allowed),
        )
        .route(
            "/uploadName/:name",
            post(handlers::upload_named).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::unknown_route)
        .with_state(state)
}
