//! Serde helpers for sparse change maps
//!
//! Change maps travel as objects keyed by measure index, e.g.
//! `{"0": ["S", "A"], "5": ["S"]}`. JSON object keys are always strings,
//! so keys are parsed back into indices on the way in.

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use super::doc_info::ChangeMap;

impl<T: Serialize> Serialize for ChangeMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (at, value) in self.iter() {
            map.serialize_entry(&at.to_string(), value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ChangeMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: BTreeMap<String, T> = BTreeMap::deserialize(deserializer)?;

        let entries = raw
            .into_iter()
            .map(|(key, value)| {
                key.trim()
                    .parse::<u32>()
                    .map(|at| (at, value))
                    .map_err(|_| D::Error::custom(format!("invalid measure index '{}'", key)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        ChangeMap::from_entries(entries)
            .ok_or_else(|| D::Error::custom("change map needs at least one entry"))
    }
}
