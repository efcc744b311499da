//! Item Collection Module
//!
//! Implements the item CRUD resource: an in-memory collection owned by a
//! single [`store::ItemStore`], exposed over five HTTP operations.
//!
//! ## Core Concepts
//! - **State**: `ItemStore` holds the live items for the process lifetime;
//!   it is injected into handlers via `Extension` rather than accessed as a
//!   global.
//! - **Protocol**: `protocol` pins the endpoint paths and JSON bodies the
//!   test suite asserts on.
//! - **Handlers**: thin axum functions mapping store outcomes to statuses.

pub mod handlers;
pub mod protocol;
pub mod store;
pub mod types;


use axum::{Router, extract::Extension, routing::get};
use std::sync::Arc;

use self::handlers::{
    handle_create_item, handle_delete_item, handle_get_item, handle_list_items,
    handle_update_item,
};
use self::protocol::{ENDPOINT_ITEM, ENDPOINT_ITEMS};

/// Builds the item API router over the given store.
///
/// Shared between `main` and the integration tests so both serve the exact
/// same route table.
pub fn router(store: Arc<store::ItemStore>) -> Router {
    Router::new()
        .route(ENDPOINT_ITEMS, get(handle_list_items).post(handle_create_item))
        .route(
            ENDPOINT_ITEM,
            get(handle_get_item)
                .put(handle_update_item)
                .delete(handle_delete_item),
        )
        .layer(Extension(store))
}
