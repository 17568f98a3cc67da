//! Persistence codec - item collections to/from stored bytes
//!
//! Collections are persisted as JSON arrays of field-tagged items with
//! ISO-8601 dates, the same layout the original stored lists use. The
//! helpers here are fallible; the store decides policy (decode failure is
//! treated as an absent collection, encode failure is logged and skipped).

use crate::error::{ListError, Result};
use crate::model::Item;

/// Serialize a collection for storage
pub fn encode_items(items: &[Item]) -> Result<Vec<u8>> {
    serde_json::to_vec(items).map_err(|e| ListError::Encode(e.to_string()))
}

/// Deserialize a stored collection
pub fn decode_items(bytes: &[u8]) -> Result<Vec<Item>> {
    serde_json::from_slice(bytes).map_err(|e| ListError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_round_trip() {
        let items = vec![
            Item::new(
                "Milk".to_string(),
                Category::Dairy,
                Some(Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap()),
            ),
            Item::new("Bread".to_string(), Category::Bakery, None),
        ];

        let bytes = encode_items(&items).unwrap();
        let decoded = decode_items(&bytes).unwrap();

        assert_eq!(decoded, items);
    }

    #[test]
    fn test_empty_collection() {
        let bytes = encode_items(&[]).unwrap();
        assert_eq!(bytes, b"[]");
        assert!(decode_items(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_bytes_fail_to_decode() {
        let err = decode_items(b"not json at all").unwrap_err();
        assert!(matches!(err, ListError::Decode(_)));
    }

    #[test]
    fn test_decodes_wire_form_with_iso_dates() {
        let json = br#"[{
            "id": "8c4b38a8-22cc-4cbd-b432-6711d07c2b54",
            "name": "Eggs",
            "isChecked": true,
            "category": "Poultry",
            "purchaseDate": "2024-09-25T00:00:00Z"
        }]"#;

        let items = decode_items(json).unwrap();
        assert_eq!(items.len(), 1);
        assert!(items[0].is_checked);
        assert_eq!(items[0].category, Category::Poultry);
        assert_eq!(
            items[0].purchase_date,
            Some(Utc.with_ymd_and_hms(2024, 9, 25, 0, 0, 0).unwrap())
        );
    }
}
