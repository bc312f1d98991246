use axum::{http::Uri, routing::get, Router};

use crate::{asset::static_handler, error::ApiError, index::index};

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/assets/*file", get(static_handler))
        .fallback(fallback)
}

async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found().message(format!("No route for {}", uri.path()))
}
