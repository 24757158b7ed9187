//! The response envelope shared by every endpoint.
//!
//! The server wraps each response in `{success, errorCode, errorMessage,
//! data}`. Two fields are deliberately loose and the decoder mirrors the
//! quirks instead of fighting them:
//!
//! - `errorMessage` is sometimes one flat string and sometimes a
//!   per-field validation map,
//! - `data` is sometimes a plain string placeholder where the documented
//!   payload should be.
//!
//! Both behaviors vary per endpoint and error state, so the tolerant
//! decode here is load-bearing for wire compatibility.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decoded response envelope with payload type `T`.
///
/// `data` is only meaningful when `success` is true, and even then may be
/// absent (the server sends a string placeholder for "no data").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(default, rename = "errorCode")]
    pub error_code: Option<i64>,

    #[serde(default, rename = "errorMessage")]
    pub error_message: Option<ErrorMessage>,

    #[serde(
        default = "Option::default",
        deserialize_with = "lenient_payload",
        bound(deserialize = "T: DeserializeOwned")
    )]
    pub data: Option<T>,
}

/// The two shapes the server uses for `errorMessage`.
///
/// Decode order is significant and must stay single-before-multiple: a
/// flat string is attempted first, the per-field validation map second.
/// Untagged serde enums try variants in declaration order, which encodes
/// exactly that.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Multiple(BTreeMap<String, Vec<String>>),
}

impl ErrorMessage {
    /// One display string for the front-end: the flat message, or the
    /// first message of the first field for the validation map.
    ///
    /// "First field" is the lowest key in the ordered map; the server
    /// sends JSON objects with no reliable field order.
    pub fn first_message(&self) -> Option<&str> {
        match self {
            ErrorMessage::Single(message) => Some(message.as_str()),
            ErrorMessage::Multiple(fields) => fields
                .values()
                .next()
                .and_then(|messages| messages.first())
                .map(String::as_str),
        }
    }
}

fn lenient_payload<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    decode_payload(raw).map_err(serde::de::Error::custom)
}

/// Ordered decode chain for the `data` field.
///
/// 1. absent or `null` decodes as no payload,
/// 2. otherwise the documented payload type `T` is attempted,
/// 3. on failure a plain string is accepted as the server's "no data"
///    sentinel and treated as absent,
/// 4. anything else fails the whole envelope decode.
pub(crate) fn decode_payload<T>(raw: Option<Value>) -> Result<Option<T>, String>
where
    T: DeserializeOwned,
{
    let Some(value) = raw else {
        return Ok(None);
    };
    if value.is_null() {
        return Ok(None);
    }

    let is_string_sentinel = value.is_string();
    match serde_json::from_value::<T>(value) {
        Ok(payload) => Ok(Some(payload)),
        Err(_) if is_string_sentinel => Ok(None),
        Err(error) => Err(format!(
            "data field matched neither the expected payload nor the string sentinel: {error}"
        )),
    }
}
