//! Data model - Items, categories, and the add/edit form
//!
//! Everything a list holds is an [`Item`]: a named entry in one of the fixed
//! grocery [`Category`] labels, optionally planned for a purchase date.
//! [`ItemForm`] is the validation boundary that turns raw user input into a
//! well-formed item (or a user-facing [`FormError`]).

mod category;
mod form;
mod item;

pub use category::Category;
pub use form::{FormError, FormMode, ItemForm, MAX_NAME_LEN};
pub use item::{start_of_day, Item};
