//! The attribute value record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A typed attribute value.
///
/// Mirrors the DynamoDB wire record: each field is one variant, and a well
/// formed value sets exactly one of them. Numbers travel as decimal strings
/// so no precision is lost in transit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Number, as its decimal string.
    #[serde(rename = "N", default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,

    /// String.
    #[serde(rename = "S", default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,

    /// Binary, base64 in JSON.
    #[serde(
        rename = "B",
        default,
        skip_serializing_if = "Option::is_none",
        with = "base64_bytes"
    )]
    pub b: Option<Vec<u8>>,

    /// Boolean.
    #[serde(rename = "BOOL", default, skip_serializing_if = "Option::is_none")]
    pub bool: Option<bool>,

    /// Null marker.
    #[serde(rename = "NULL", default, skip_serializing_if = "Option::is_none")]
    pub null: Option<bool>,

    /// List of values.
    #[serde(rename = "L", default, skip_serializing_if = "Option::is_none")]
    pub l: Option<Vec<AttributeValue>>,

    /// Map of values.
    #[serde(rename = "M", default, skip_serializing_if = "Option::is_none")]
    pub m: Option<HashMap<String, AttributeValue>>,

    /// Number set.
    #[serde(rename = "NS", default, skip_serializing_if = "Option::is_none")]
    pub ns: Option<Vec<String>>,

    /// String set.
    #[serde(rename = "SS", default, skip_serializing_if = "Option::is_none")]
    pub ss: Option<Vec<String>>,
}

impl AttributeValue {
    /// Creates a number value from its decimal string.
    pub fn number(n: impl Into<String>) -> Self {
        Self {
            n: Some(n.into()),
            ..Default::default()
        }
    }

    /// Creates a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Self {
            s: Some(s.into()),
            ..Default::default()
        }
    }

    /// Creates a binary value.
    pub fn binary(b: impl Into<Vec<u8>>) -> Self {
        Self {
            b: Some(b.into()),
            ..Default::default()
        }
    }

    /// Creates a boolean value.
    pub fn bool(v: bool) -> Self {
        Self {
            bool: Some(v),
            ..Default::default()
        }
    }

    /// Creates a null value.
    pub fn null() -> Self {
        Self {
            null: Some(true),
            ..Default::default()
        }
    }

    /// Creates a map value.
    pub fn map(m: HashMap<String, AttributeValue>) -> Self {
        Self {
            m: Some(m),
            ..Default::default()
        }
    }

    /// Returns the number field, if set.
    pub fn as_n(&self) -> Option<&str> {
        self.n.as_deref()
    }

    /// Returns the string field, if set.
    pub fn as_s(&self) -> Option<&str> {
        self.s.as_deref()
    }

    /// Returns the binary field, if set.
    pub fn as_b(&self) -> Option<&[u8]> {
        self.b.as_deref()
    }

    /// Returns the map field, if set.
    pub fn as_m(&self) -> Option<&HashMap<String, AttributeValue>> {
        self.m.as_ref()
    }

    /// Reports whether this is the null marker.
    pub fn is_null(&self) -> bool {
        self.null == Some(true)
    }
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match v {
            Some(b) => serializer.serialize_str(&STANDARD.encode(b)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        let s = Option::<String>::deserialize(deserializer)?;
        s.map(|s| STANDARD.decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
