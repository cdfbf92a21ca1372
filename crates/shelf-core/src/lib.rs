//! Item catalog data model for the shelf server.

use serde::{Deserialize, Serialize};

/// A single catalog entry returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Decimal-looking identifier, stored as a string and never parsed.
    pub id: String,
    /// Display title.
    pub title: String,
}

/// Returns the catalog: three fixed items with ids `"1"` through `"3"`.
///
/// Built fresh on every call; nothing is cached or shared between requests.
pub fn items() -> Vec<Item> {
    vec![
        Item {
            id: "1".into(),
            title: "title1".into(),
        },
        Item {
            id: "2".into(),
            title: "title2".into(),
        },
        Item {
            id: "3".into(),
            title: "title3".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_fixed_contents() {
        let items = items();
        assert_eq!(items.len(), 3);
        for (i, item) in items.iter().enumerate() {
            let n = i + 1;
            assert_eq!(item.id, n.to_string());
            assert_eq!(item.title, format!("title{}", n));
        }
    }

    #[test]
    fn test_items_serialization() {
        let json = serde_json::to_string(&items()).unwrap();
        assert_eq!(
            json,
            r#"[{"id":"1","title":"title1"},{"id":"2","title":"title2"},{"id":"3","title":"title3"}]"#
        );
    }

    #[test]
    fn test_items_identical_across_calls() {
        assert_eq!(items(), items());
    }
}
