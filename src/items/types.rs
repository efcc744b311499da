use serde::{Deserialize, Serialize};

/// A single record in the collection.
///
/// The `id` is assigned by the store at creation time and never reused,
/// even after the item is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}
