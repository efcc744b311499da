//! In-Memory Item Collection
//!
//! Implements the item collection as a single owned state object.
//!
//! ## Core Concepts
//! - **Ownership**: One `ItemStore` is constructed at process start and shared
//!   with the handlers; nothing else touches the collection.
//! - **Ordering**: Items are kept in insertion order in a `Vec`.
//! - **Id assignment**: A dedicated counter hands out monotonically increasing
//!   ids. Deleting an item never frees its id for reuse.
//! - **Failure**: Operations return [`ItemError`] on the two terminal failure
//!   modes; the collection is left untouched on every failure path.

use super::types::Item;

use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;

/// Terminal failure modes of the collection.
///
/// The display strings are the exact messages the API surfaces to clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Item not found")]
    NotFound,
    #[error("Name field is required")]
    MissingName,
}

/// The central component owning the item collection.
pub struct ItemStore {
    /// Live items in insertion order.
    items: RwLock<Vec<Item>>,
    /// Next id to hand out. Monotonic for the process lifetime.
    next_id: AtomicU64,
}

impl ItemStore {
    /// Creates an empty store whose first created item gets id 1.
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Creates a store pre-populated with the two well-known seed items, so
    /// the first create yields id 3.
    pub fn seeded() -> Self {
        Self {
            items: RwLock::new(vec![
                Item {
                    id: 1,
                    name: "Item 1".to_string(),
                },
                Item {
                    id: 2,
                    name: "Item 2".to_string(),
                },
            ]),
            next_id: AtomicU64::new(3),
        }
    }

    /// Returns a snapshot of all live items in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// Looks up a single item by id.
    pub async fn get(&self, id: u64) -> Result<Item, ItemError> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(ItemError::NotFound)
    }

    /// Creates a new item with a freshly assigned id.
    ///
    /// Rejects a missing or empty `name`, consistent with [`Self::update`].
    pub async fn create(&self, name: Option<String>) -> Result<Item, ItemError> {
        let name = require_name(name)?;
        let item = Item {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name,
        };
        self.items.write().await.push(item.clone());

        tracing::info!("Created item {} ({:?})", item.id, item.name);
        Ok(item)
    }

    /// Replaces the name of an existing item, returning the full updated record.
    ///
    /// Field validation runs before the existence check: a request missing the
    /// `name` is rejected as `MissingName` even when `id` matches nothing.
    pub async fn update(&self, id: u64, name: Option<String>) -> Result<Item, ItemError> {
        let name = require_name(name)?;

        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ItemError::NotFound)?;
        item.name = name;

        tracing::info!("Updated item {} ({:?})", item.id, item.name);
        Ok(item.clone())
    }

    /// Removes an item permanently, returning the removed record.
    pub async fn delete(&self, id: u64) -> Result<Item, ItemError> {
        let mut items = self.items.write().await;
        let position = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(ItemError::NotFound)?;
        let item = items.remove(position);

        tracing::info!("Deleted item {}", item.id);
        Ok(item)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The single required-field check: present and non-empty.
fn require_name(name: Option<String>) -> Result<String, ItemError> {
    match name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ItemError::MissingName),
    }
}
