use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize string or number as u32
///
/// Tableau sends pagination counters as JSON strings.
pub fn string_or_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};

    struct StringOrInt;

    impl<'de> Visitor<'de> for StringOrInt {
        type Value = u32;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("string or unsigned integer")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            u32::try_from(v).map_err(de::Error::custom)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            u32::try_from(v).map_err(de::Error::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.trim().parse().map_err(de::Error::custom)
        }
    }

    deserializer.deserialize_any(StringOrInt)
}

/// Pagination block from list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(deserialize_with = "string_or_u32")]
    pub page_number: u32,
    #[serde(deserialize_with = "string_or_u32")]
    pub page_size: u32,
    #[serde(deserialize_with = "string_or_u32")]
    pub total_available: u32,
}

impl Pagination {
    /// True once this page reaches the end of the collection
    pub fn is_last_page(&self) -> bool {
        u64::from(self.page_number) * u64::from(self.page_size) >= u64::from(self.total_available)
    }
}

/// A paged list response, already unwrapped from its envelope
pub trait Paged: Sized {
    type Item;

    fn pagination(&self) -> Option<&Pagination>;

    fn into_items(self) -> Vec<Self::Item>;
}

/// Bare id reference (`{"id": "..."}`) used for owners, users and groups
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_from_strings() {
        let p: Pagination = serde_json::from_str(
            r#"{"pageNumber": "2", "pageSize": "25", "totalAvailable": "50"}"#,
        )
        .unwrap();
        assert_eq!(p.page_number, 2);
        assert!(p.is_last_page());
    }

    #[test]
    fn test_pagination_from_numbers() {
        let p: Pagination =
            serde_json::from_str(r#"{"pageNumber": 1, "pageSize": 25, "totalAvailable": 26}"#)
                .unwrap();
        assert!(!p.is_last_page());
    }

    #[test]
    fn test_pagination_rejects_garbage() {
        let p: Result<Pagination, _> = serde_json::from_str(
            r#"{"pageNumber": "one", "pageSize": "25", "totalAvailable": "1"}"#,
        );
        assert!(p.is_err());
    }
}
