use super::*;

use axum::routing::post;

/// Reads the raw body the way server function handlers do.
async fn body_len(req: Request<Body>) -> Result<String, StatusCode> {
    axum::body::to_bytes(req.into_body(), usize::MAX)
        .await
        .map(|bytes| bytes.len().to_string())
        .map_err(|_| StatusCode::PAYLOAD_TOO_LARGE)
}

fn router() -> Router {
    limit_request_bodies(Router::new().route("/api/upload_image", post(body_len)))
}

fn upload(len: usize, declare_length: bool) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/api/upload_image");
    if declare_length {
        builder = builder.header("content-length", len.to_string());
    }
    builder.body(Body::from(vec![0u8; len])).unwrap()
}

#[tokio::test]
async fn bodies_under_the_cap_reach_the_handler() {
    let len = 6 * 1024 * 1024;
    let res = router().oneshot(upload(len, true)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(body, len.to_string());
}

#[tokio::test]
async fn declared_oversized_bodies_are_refused() {
    let res = router().oneshot(upload(MAX_BODY_BYTES + 1, true)).await.unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn undeclared_oversized_bodies_are_cut_off() {
    let res = router().oneshot(upload(MAX_BODY_BYTES + 1, false)).await.unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
