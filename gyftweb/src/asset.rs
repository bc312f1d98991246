use axum::{
    http::{header, Uri},
    response::{IntoResponse, Response},
};
use gyft_core::assets::{Asset, ASSET_PREFIX};
use tracing::debug;

use crate::error::{ApiError, ApiResult};

/// Serves the embedded stylesheets. Routed with a wildcard ("/assets/*file"),
/// so the path still carries the "assets/" prefix. The fingerprint travels in
/// the query string and is ignored here.
pub async fn static_handler(uri: Uri) -> ApiResult<Response> {
    let path = uri.path().trim_start_matches('/');
    let path = path.strip_prefix(ASSET_PREFIX).unwrap_or(path);

    let Some(file) = Asset::get(path) else {
        debug!("No embedded asset named {path}");
        return Err(ApiError::not_found().message(format!("No asset named '{path}'")));
    };

    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Ok(([(header::CONTENT_TYPE, mime.as_ref())], file.data).into_response())
}
