pub mod campaign;
pub mod contact;
pub mod table;
pub mod user;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// Accepts identifiers sent either as JSON strings or as integers.
pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

/// Reads a string that the backend may send as `null`.
pub(crate) fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One item of a listed collection, decoded on its own so a malformed item
/// does not reject the whole list.
#[derive(Debug, Clone, PartialEq)]
pub enum Lenient<T> {
    Valid(T),
    Invalid(String),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Lenient<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match serde_json::from_value(value) {
            Ok(item) => Self::Valid(item),
            Err(e) => Self::Invalid(e.to_string()),
        })
    }
}

/// Separates decoded items from the errors of the ones that did not decode.
pub fn split_valid<T>(items: Vec<Lenient<T>>) -> (Vec<T>, Vec<String>) {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();
    for item in items {
        match item {
            Lenient::Valid(item) => valid.push(item),
            Lenient::Invalid(reason) => invalid.push(reason),
        }
    }
    (valid, invalid)
}
