//! Item list codec
//!
//! Encodes a collection as a JSON array of item objects.
//!
//! ```text
//! [
//!   {"id":"…","name":"Coffee","type":"Personal","price":3.5},
//!   {"id":"…","name":"Train","type":"Personal","price":12.0}
//! ]
//! ```

use crate::error::{CashError, Result};
use crate::model::Item;

/// Encode an ordered item list
///
/// Fails on non-finite prices: JSON has no NaN or infinity.
pub fn encode_items(items: &[Item]) -> Result<Vec<u8>> {
    if let Some(item) = items.iter().find(|item| !item.price().is_finite()) {
        return Err(CashError::Serialization(format!(
            "price of '{}' is not a finite number",
            item.name()
        )));
    }
    Ok(serde_json::to_vec(items)?)
}

/// Decode an ordered item list
///
/// Order and ids are preserved exactly as encoded.
pub fn decode_items(bytes: &[u8]) -> Result<Vec<Item>> {
    Ok(serde_json::from_slice(bytes)?)
}
