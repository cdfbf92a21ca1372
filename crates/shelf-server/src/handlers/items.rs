//! Item listing handler.

use axum::Json;
use shelf_core::{items, Item};

/// GET / - returns the fixed three-item catalog.
///
/// Takes no extractors, so query strings and request bodies are ignored;
/// every call produces the same array.
pub async fn list() -> Json<Vec<Item>> {
    Json(items())
}
