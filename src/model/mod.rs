//! Model Module
//!
//! Value types shared by the store, the codec and the CLI.
//!
//! ## Responsibilities
//! - `Item`: one recorded expense with a stable identity
//! - `Category`: the labels offered by the add form
//! - `Collection`: the two lists and their fixed persistence keys
//!
//! ## Persisted Item Shape
//! ```text
//! {
//!   "id":    "6f1c…",     opaque UUID, kept across round trips
//!   "name":  "Coffee",
//!   "type":  "Personal",  category label, not validated
//!   "price": 3.5
//! }
//! ```

mod item;
mod kind;

pub use item::Item;
pub use kind::{Category, Collection};
