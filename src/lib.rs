//! Item Collection Service Library
//!
//! This library crate defines the core module behind the binary executable
//! (`main.rs`): an in-memory CRUD API over a single `Item` resource.
//!
//! ## Architecture Modules
//! - **`items`**: the item collection itself. Holds the store, the HTTP
//!   protocol (paths, DTOs, pinned messages), and the axum handlers wiring
//!   the two together.

pub mod items;
