//! The Item entity
//!
//! The only domain type: a store-assigned integer id and a title.

use serde::{Deserialize, Serialize};

/// A stored item.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
}

impl Item {
    /// Creates a new Item
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_wire_shape() {
        let json = serde_json::to_value(Item::new(3, "milk")).unwrap();
        assert_eq!(json, serde_json::json!({"id": 3, "title": "milk"}));
    }
}
