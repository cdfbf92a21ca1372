//! HTTP route handlers for the catalog server.

pub mod items;

use axum::http::StatusCode;

/// Default entry of the handler table: any request that matches no
/// registered route gets an empty 404.
pub async fn fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}
