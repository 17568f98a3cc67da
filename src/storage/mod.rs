//! Storage - the shared key-value container
//!
//! The engine never talks to a concrete settings store directly; it goes
//! through the [`Storage`] trait so tests substitute an in-memory container
//! and platforms plug in whatever shared namespace they have (the app-group
//! container in the original deployment). One container instance is shared
//! between the writing store and the read-only widget queries, so the trait
//! takes `&self` and implementations carry their own interior mutability.

mod codec;
mod memory;

pub use codec::{decode_items, encode_items};
pub use memory::MemoryStorage;

/// Storage key for the pending collection
pub const PENDING_KEY: &str = "items";

/// Storage key for the purchased collection
pub const PURCHASED_KEY: &str = "purchasedItems";

/// Shared key-value container
///
/// Writes are whole-value overwrites; a concurrent reader observes either the
/// old or the new bytes for a key, never a mix.
pub trait Storage: Send + Sync {
    /// Read the bytes stored under `key`, if any
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Overwrite the bytes stored under `key`
    fn set(&self, key: &str, bytes: Vec<u8>);

    /// Drop the entry under `key`, if present
    fn remove(&self, key: &str);
}
