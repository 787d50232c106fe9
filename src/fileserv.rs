use axum::{
    body::Body,
    extract::{DefaultBodyLimit, State},
    http::{Request, Response, StatusCode, Uri},
    response::{IntoResponse, Response as AxumResponse},
    Router,
};
use leptos::*;
use tower::ServiceExt;
use tower_http::{limit::RequestBodyLimitLayer, services::ServeDir};

use crate::app::App;
use crate::config::MAX_BODY_BYTES;

/// Caps every request body at [`MAX_BODY_BYTES`]. Server function handlers
/// read the raw body, so axum's extractor limit is swapped for one on the body
/// itself.
pub fn limit_request_bodies<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}

/// Serves files from the site root, and renders the app (its 404 page) for
/// anything that isn't a file.
pub async fn file_and_error_handler(
    uri: Uri,
    State(options): State<LeptosOptions>,
    req: Request<Body>,
) -> AxumResponse {
    match get_static_file(uri, &options.site_root).await {
        Ok(res) if res.status() == StatusCode::OK => res.into_response(),
        Ok(_) => {
            let handler = leptos_axum::render_app_to_stream(options.to_owned(), App);
            handler(req).await.into_response()
        }
        Err((status, message)) => (status, message).into_response(),
    }
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response<Body>, (StatusCode, String)> {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    match ServeDir::new(root).oneshot(req).await {
        Ok(res) => Ok(res.into_response()),
        Err(err) => {
            tracing::error!(%err, "static file lookup failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Something went wrong: {err}"),
            ))
        }
    }
}

#[cfg(test)]
#[path = "fileserv_test.rs"]
mod fileserv_test;
