//! Shared helpers for integration tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;

/// An axum fallback that answers "404 Not Found" to everything.
pub fn not_found_router() -> Router {
    Router::new().fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
}

/// A GET request for the given path.
pub fn request(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

/// Collect a response body into a string.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
