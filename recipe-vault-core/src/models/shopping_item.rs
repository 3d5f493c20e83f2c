use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::new_id;

/// One line of the shopping checklist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub checked: bool,
}

impl ShoppingItem {
    /// Create an unchecked item with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            checked: false,
        }
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.checked { "[x]" } else { "[ ]" };
        write!(f, "{} {}", check, self.name)
    }
}

/// A persisted shopping-list entry.
///
/// Older versions stored bare names; those upgrade to unchecked items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StoredShoppingEntry {
    Legacy(String),
    Item(ShoppingItem),
}

impl StoredShoppingEntry {
    pub fn into_item(self) -> ShoppingItem {
        match self {
            StoredShoppingEntry::Legacy(name) => ShoppingItem::new(name),
            StoredShoppingEntry::Item(item) => item,
        }
    }
}
