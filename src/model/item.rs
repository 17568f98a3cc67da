//! Item: the unit entry of a shopping list
//!
//! Items are plain values identified by a stable UUID assigned at creation.
//! De-duplication anywhere in the engine is by `id` only: two items may share
//! name, category, and date and still be distinct entities.
//!
//! The serde field names (`isChecked`, `purchaseDate`) match the persisted
//! wire form so existing stored lists decode unchanged.

use crate::model::Category;
use crate::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identity, never reassigned across edits
    pub id: ItemId,

    /// Display name (non-empty, enforced at the form boundary)
    pub name: String,

    /// True once the item has been purchased
    #[serde(rename = "isChecked")]
    pub is_checked: bool,

    /// Category label from the fixed list
    pub category: Category,

    /// Planned purchase date; `None` means no planned date
    #[serde(rename = "purchaseDate")]
    pub purchase_date: Option<DateTime<Utc>>,
}

impl Item {
    /// Create a new pending item with a fresh id
    ///
    /// The purchase date, when given, is normalized to midnight UTC.
    pub fn new(name: String, category: Category, purchase_date: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            is_checked: false,
            category,
            purchase_date: purchase_date.map(start_of_day),
        }
    }

    /// Flip the checked flag
    ///
    /// Collection membership is the store's concern; this only mutates the
    /// flag itself.
    pub fn toggle_checked(&mut self) {
        self.is_checked = !self.is_checked;
    }

    /// True if both items share a name, category, and purchase date
    ///
    /// Used by the form's duplicate check; identity (`id`) is ignored.
    pub fn same_content(&self, other: &Item) -> bool {
        self.name == other.name
            && self.category == other.category
            && self.purchase_date == other.purchase_date
    }
}

/// Truncate a timestamp to midnight of its UTC day
pub fn start_of_day(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or(ts)
}
