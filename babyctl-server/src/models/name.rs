//! Baby name records

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted baby name row from `baby_names`.
///
/// `id` is assigned by the database on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct NameRecord {
    pub id: i32,
    pub name: String,
    pub meaning: String,
    pub language: String,
}

/// Body for create and update requests.
///
/// An `id` field in the incoming JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewName {
    pub name: String,
    pub meaning: String,
    pub language: String,
}

impl NewName {
    /// Attach a storage-assigned id.
    pub fn with_id(self, id: i32) -> NameRecord {
        NameRecord {
            id,
            name: self.name,
            meaning: self.meaning,
            language: self.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_plain_field_names() {
        let record = NameRecord {
            id: 1,
            name: "Mina".into(),
            meaning: "love".into(),
            language: "Japanese".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Mina",
                "meaning": "love",
                "language": "Japanese"
            })
        );
    }

    #[test]
    fn new_name_ignores_client_supplied_id() {
        let body: NewName = serde_json::from_str(
            r#"{"id": 99, "name": "Ada", "meaning": "noble", "language": "German"}"#,
        )
        .unwrap();
        assert_eq!(body.name, "Ada");
        assert_eq!(body.with_id(4).id, 4);
    }

    #[test]
    fn new_name_requires_all_fields() {
        let result = serde_json::from_str::<NewName>(r#"{"name": "Ada"}"#);
        assert!(result.is_err());
    }
}
