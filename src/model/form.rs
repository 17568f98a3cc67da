//! Add/edit form logic
//!
//! The form is the single validation boundary in front of the store: it turns
//! raw user input into a well-formed [`Item`] or rejects it with a
//! user-facing [`FormError`]. The mode carries the edited entity directly, so
//! add and edit are dispatched by exhaustive match rather than by mode
//! strings.

use crate::model::{start_of_day, Category, Item};
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Maximum accepted item-name length, in characters
pub const MAX_NAME_LEN: usize = 30;

/// Whether the form creates a new item or rewrites an existing one
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    /// Create a fresh pending item
    Add,
    /// Rewrite the carried item's fields, preserving id and checked state
    Edit(Item),
}

/// Validation failures, phrased for direct display to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Please enter an item name.")]
    EmptyName,

    #[error("Item names are limited to {MAX_NAME_LEN} characters.")]
    NameTooLong,

    #[error("An item with the same name, category, and date already exists.")]
    Duplicate,
}

/// A filled-in add/edit form, ready to submit
#[derive(Debug, Clone)]
pub struct ItemForm {
    pub mode: FormMode,
    pub name: String,
    pub category: Category,
    pub purchase_date: Option<DateTime<Utc>>,
}

impl ItemForm {
    /// Start an empty add form
    pub fn add(name: String, category: Category, purchase_date: Option<DateTime<Utc>>) -> Self {
        Self {
            mode: FormMode::Add,
            name,
            category,
            purchase_date,
        }
    }

    /// Start an edit form pre-filled from an existing item
    pub fn edit(item: Item) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category,
            purchase_date: item.purchase_date,
            mode: FormMode::Edit(item),
        }
    }

    /// Validate and produce the finished item
    ///
    /// `existing` is the pending collection the duplicate check runs
    /// against. In edit mode the edited entity itself is exempt from that
    /// check, so saving without changes is not rejected as a duplicate.
    pub fn submit(&self, existing: &[Item]) -> Result<Item, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(FormError::NameTooLong);
        }

        let candidate = self.build_item(name.to_string());
        let duplicate = existing
            .iter()
            .any(|item| item.id != candidate.id && item.same_content(&candidate));
        if duplicate {
            return Err(FormError::Duplicate);
        }

        Ok(candidate)
    }

    fn build_item(&self, name: String) -> Item {
        match &self.mode {
            FormMode::Add => Item::new(name, self.category, self.purchase_date),
            FormMode::Edit(original) => Item {
                id: original.id,
                name,
                is_checked: original.is_checked,
                category: self.category,
                purchase_date: self.purchase_date.map(start_of_day),
            },
        }
    }
}
