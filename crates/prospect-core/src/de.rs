//! Deserialization helpers for loosely typed upstream payloads.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

/// Deserializes a field that upstreams send either as a JSON string or a number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Unsigned(n) => n.to_string(),
        StringOrNumber::Signed(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    })
}

/// Like [`string_or_number`], for optional fields; `null` becomes `None`.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "string_or_number")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(s)| s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "opt_string_or_number")]
        code: Option<String>,
    }

    #[test]
    fn test_accepts_strings_and_numbers() {
        let row: Row = serde_json::from_str(r#"{"id": 411503498, "code": "5331"}"#).unwrap();
        assert_eq!(row.id, "411503498");
        assert_eq!(row.code.as_deref(), Some("5331"));

        let row: Row = serde_json::from_str(r#"{"id": "27419", "code": null}"#).unwrap();
        assert_eq!(row.id, "27419");
        assert!(row.code.is_none());

        let row: Row = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert!(row.code.is_none());
    }
}
