//! Custom serde helpers for Gemini's wire formats.

use std::fmt;

use serde::{Deserialize, Deserializer, Serializer, de};

/// Serialize a `bool` as the query flag `"1"` / `"0"`.
///
/// Deserialization accepts the flag strings as well as JSON booleans.
///
/// # Example
///
/// ```rust
/// use serde::{Serialize, Deserialize};
/// use gemini_api_client::types::serde_helpers::bool_flag;
///
/// #[derive(Serialize, Deserialize, Debug)]
/// struct Request {
///     #[serde(with = "bool_flag")]
///     include_breaks: bool,
/// }
///
/// let query = serde_urlencoded::to_string(&Request { include_breaks: true }).unwrap();
/// assert_eq!(query, "include_breaks=1");
/// ```
pub mod bool_flag {
    use super::*;

    /// Serialize as `"1"` or `"0"`.
    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "1" } else { "0" })
    }

    /// Deserialize from `"1"`, `"0"`, `"true"`, `"false"` or a boolean.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagVisitor;

        impl de::Visitor<'_> for FlagVisitor {
            type Value = bool;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean or a \"1\"/\"0\" flag")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match v {
                    "1" | "true" => Ok(true),
                    "0" | "false" => Ok(false),
                    other => Err(de::Error::custom(format!("invalid flag: {other}"))),
                }
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// Gemini echoes an unset `client_order_id` as `""` on some endpoints.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use gemini_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     client_order_id: Option<String>,
/// }
///
/// let json = r#"{"client_order_id":""}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert!(response.client_order_id.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
