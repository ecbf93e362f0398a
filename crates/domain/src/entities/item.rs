//! Carried equipment.

use serde::{Deserialize, Serialize};

/// Marker the builder puts in the third slot of invested items.
pub const INVESTED_MARKER: &str = "Invested";

/// One line of the equipment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub name: String,
    pub qty: i64,
    /// Whether the item is invested (counts against the investiture limit)
    pub invested: bool,
}

impl ItemEntry {
    pub fn new(name: impl Into<String>, qty: i64, invested: bool) -> Self {
        Self {
            name: name.into(),
            qty,
            invested,
        }
    }
}
