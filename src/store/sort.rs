//! Display-order sorting
//!
//! Sorts are recomputed on each request and never persisted; stored order is
//! always insertion order. All sorts are stable, so ties keep their stored
//! relative order.

use crate::model::Item;
use std::cmp::Ordering;

/// Which field a list view is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Earliest planned date first; undated items last
    PurchaseDate,
    /// Category label, ties broken by name
    Category,
    /// Case-insensitive name
    Name,
}

/// Sort a collection in place by the given key
pub fn sort_items(items: &mut [Item], key: SortKey) {
    match key {
        SortKey::PurchaseDate => items.sort_by(compare_by_date),
        SortKey::Category => items.sort_by(|a, b| {
            (a.category.label(), name_key(a)).cmp(&(b.category.label(), name_key(b)))
        }),
        SortKey::Name => items.sort_by(|a, b| name_key(a).cmp(&name_key(b))),
    }
}

fn compare_by_date(a: &Item, b: &Item) -> Ordering {
    match (a.purchase_date, b.purchase_date) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn name_key(item: &Item) -> String {
    item.name.to_lowercase()
}
