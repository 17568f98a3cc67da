//! CartKit Core - Shopping-list engine for local-first apps
//!
//! This is the storage-backed core of CartKit, free of any UI toolkit.
//! It implements:
//! - Item model with category and optional purchase date
//! - Pending/purchased collections mirrored to key-value storage
//! - Checked-state toggling that moves items between collections
//! - Change notification for independent list consumers
//! - Read-only widget queries over the shared storage container
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use cartkit_core::{Category, ChangeNotifier, Item, ItemStore, MemoryStorage};
//!
//! let storage = Arc::new(MemoryStorage::new());
//! let mut store = ItemStore::load(storage, ChangeNotifier::new());
//! store.add(Item::new("Milk".to_string(), Category::Dairy, None));
//! assert_eq!(store.pending().len(), 1);
//! ```

pub mod error;
pub mod events;
pub mod model;
pub mod storage;
pub mod store;
pub mod widget;

// Re-exports for convenience
pub use error::{ListError, Result};
pub use events::ChangeNotifier;
pub use model::{Category, FormError, FormMode, Item, ItemForm};
pub use storage::{MemoryStorage, Storage};
pub use store::{ItemStore, SortKey};
pub use widget::WidgetSource;

/// Item identifier type
pub type ItemId = uuid::Uuid;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_import() {
        // Smoke test that modules compile
        let item = Item::new("Bread".to_string(), Category::Bakery, None);
        let _id: ItemId = item.id;
    }
}
