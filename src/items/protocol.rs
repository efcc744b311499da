//! Item API Protocol
//!
//! Defines the endpoint paths and Data Transfer Objects (DTOs) for the item
//! collection API.
//!
//! These structures are serialized as JSON over HTTP. The response bodies and
//! error messages here are pinned by the integration test suite.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Collection endpoint (list, create).
pub const ENDPOINT_ITEMS: &str = "/api/items";
/// Single-item endpoint (get, update, delete); takes the item id as the last segment.
pub const ENDPOINT_ITEM: &str = "/api/items/:id";

// --- Data Transfer Objects ---

/// Payload for creating a new item.
///
/// The `name` field is required; it is modeled as an `Option` so that an
/// absent field deserializes instead of failing at the framework level,
/// letting the handler reject it with the pinned validation message.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
}

/// Payload for replacing an existing item's name.
///
/// Same shape as [`CreateItemRequest`]; a missing or empty `name` is a
/// validation error, not a partial update.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    pub name: Option<String>,
}

/// Human-readable outcome carried by every failure response, and by the
/// delete confirmation.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
