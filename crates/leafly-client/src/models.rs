//! Records returned by the Leafly API. Every field may be absent or null; both decode to the field's default.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Feature flags arrive as booleans, 0/1 or strings. Zero, empty and null are false; anything else is true.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    })
}

/// `{ "Name": ... }` entry used for tags, negative effects and symptoms.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NamedItem {
    #[serde(rename = "Name", default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl NamedItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StrainRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// 0–10.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<NamedItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub negative_effects: Vec<NamedItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symptoms: Vec<NamedItem>,
    #[serde(rename = "permalink", default, deserialize_with = "null_as_default")]
    pub permalink: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours: String,
    #[serde(default, deserialize_with = "truthy")]
    pub delivery: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub storefront: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub credit_cards: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub atm: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub medical: bool,
}

/// Body of a successful `POST /strains`. A body without `Strains` is malformed.
#[derive(Debug, Clone, Deserialize)]
pub struct StrainsResponse {
    #[serde(rename = "Strains", deserialize_with = "null_as_default")]
    pub strains: Vec<StrainRecord>,
}

/// Body of a successful `POST /locations`. A missing `stores` key means no stores.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub stores: Vec<StoreRecord>,
}
