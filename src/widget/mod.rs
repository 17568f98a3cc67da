//! Widget queries - read-only views over the shared container
//!
//! The widget process shares the storage namespace with the app but never
//! writes, so the single-writer assumption holds across processes. Queries
//! decode straight from storage on every call; a missing or malformed entry
//! reads as an empty list, matching the store's load policy.

use crate::model::{start_of_day, Item};
use crate::storage::{decode_items, Storage, PENDING_KEY, PURCHASED_KEY};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Read-only handle over the shared storage container
#[derive(Clone)]
pub struct WidgetSource {
    storage: Arc<dyn Storage>,
}

impl WidgetSource {
    /// Wrap a shared container
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Pending items due today or earlier, plus undated items, stored order
    ///
    /// "Today" is the start of `now`'s UTC day; an item with no planned date
    /// always counts as due.
    pub fn due_items(&self, now: DateTime<Utc>) -> Vec<Item> {
        let today = start_of_day(now);
        self.read(PENDING_KEY)
            .into_iter()
            .filter(|item| item.purchase_date.unwrap_or(today) <= today)
            .collect()
    }

    /// Count of due items, for the compact summary view
    pub fn pending_count(&self, now: DateTime<Utc>) -> usize {
        self.due_items(now).len()
    }

    /// The purchased collection, stored order
    pub fn purchased_items(&self) -> Vec<Item> {
        self.read(PURCHASED_KEY)
    }

    fn read(&self, key: &str) -> Vec<Item> {
        let Some(bytes) = self.storage.get(key) else {
            return Vec::new();
        };
        match decode_items(&bytes) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("widget read of {key:?} failed, showing empty list: {e}");
                Vec::new()
            }
        }
    }
}

impl std::fmt::Debug for WidgetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetSource").finish()
    }
}
