//! Content records managed by the portfolio store.
//!
//! # Responsibility
//! - Define the persisted shape of projects, certifications, skills and
//!   resume links, plus the read-only profile content.
//! - Define typed partial-update structs per record kind.
//!
//! # Invariants
//! - Identifiers (project/certification `id`, skill `name`) are never part of
//!   a patch, so an update can not rewrite them.
//! - Persisted JSON uses camelCase field names; unknown fields survive a
//!   load/save cycle through each record's `extra` map.

pub mod certification;
pub mod profile;
pub mod project;
pub mod resume;
pub mod skill;

/// Unrecognized JSON fields carried verbatim through a load/save cycle.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Field decoders that degrade an off-type value to the field default, so one
/// odd field never invalidates a whole persisted collection.
pub(crate) mod lenient {
    use super::skill::clamp_proficiency;
    use serde::de::{DeserializeOwned, Deserializer};
    use serde::Deserialize;
    use serde_json::Value;

    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).unwrap_or_default())
    }

    /// Keeps the string entries of an array; anything else yields an empty list.
    pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items = match Value::deserialize(deserializer)? {
            Value::Array(items) => items,
            _ => return Ok(Vec::new()),
        };
        Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect())
    }

    /// Rounds and clamps numbers (or numeric strings) into `0..=100`.
    pub fn proficiency<'de, D>(deserializer: D) -> Result<u8, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = match Value::deserialize(deserializer)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(raw
            .filter(|value| value.is_finite())
            .map_or(0, |value| clamp_proficiency(value.round() as i64)))
    }
}
