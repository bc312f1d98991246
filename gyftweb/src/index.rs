use gyft_core::site::render_home;
use maud::{Markup, PreEscaped};
use tracing::instrument;

/// The landing page. The document is rendered by the core crate; we only hand
/// it to axum.
#[instrument]
pub async fn index() -> Markup {
    PreEscaped(render_home())
}
