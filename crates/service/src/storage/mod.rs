//! Storage backends for the service layer.
//!
//! Only the in-memory store exists today; anything implementing
//! [`crate::cars::repository::CarStore`] can be plugged in instead.

pub mod memory_store;

pub use memory_store::InMemoryCarStore;
