//! Document metadata consumed by the resolver
//!
//! A `DocInfo` describes the structure of a music document: how many
//! measures it has, and from which measure onward a given staff layout
//! or time signature applies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::EmaError;

/// Sparse `measure index → value` map, read as "effective from this index onward".
///
/// Entries are kept sorted by index, unique, and never empty. Serialized as
/// an object keyed by the measure index (see `serde_helpers`).
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeMap<T> {
    entries: Vec<(u32, T)>,
}

impl<T> ChangeMap<T> {
    /// Map with only the baseline entry at index 0
    pub fn new(baseline: T) -> Self {
        Self {
            entries: vec![(0, baseline)],
        }
    }

    /// Build from arbitrary entries; `None` if there are none.
    /// A later duplicate index replaces an earlier one.
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, T)>) -> Option<Self> {
        let mut map: Option<Self> = None;
        for (at, value) in entries {
            match map.as_mut() {
                Some(existing) => existing.insert(at, value),
                None => {
                    map = Some(Self {
                        entries: vec![(at, value)],
                    })
                }
            }
        }
        map
    }

    /// Record a change effective from `at` onward
    pub fn insert(&mut self, at: u32, value: T) {
        match self.entries.binary_search_by_key(&at, |(key, _)| *key) {
            Ok(pos) => self.entries[pos].1 = value,
            Err(pos) => self.entries.insert(pos, (at, value)),
        }
    }

    /// Value of the greatest key not exceeding `index`, or the baseline
    pub fn effective_at(&self, index: u32) -> &T {
        let pos = self.entries.partition_point(|(key, _)| *key <= index);
        &self.entries[pos.saturating_sub(1)].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.entries.iter().map(|(at, value)| (*at, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Time signature effective for a span of measures
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSignature {
    /// Beats per measure
    pub count: u32,
    /// Note value of one beat
    #[serde(default = "default_beat_unit")]
    pub unit: u32,
}

fn default_beat_unit() -> u32 {
    4
}

impl TimeSignature {
    pub fn new(count: u32, unit: u32) -> Self {
        Self { count, unit }
    }
}

/// How the edges of a selection should be rendered
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Completeness {
    Raw,
    Signature,
    Nospace,
    Cut,
    Highlight,
}

impl FromStr for Completeness {
    type Err = EmaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Completeness::Raw),
            "signature" => Ok(Completeness::Signature),
            "nospace" => Ok(Completeness::Nospace),
            "cut" => Ok(Completeness::Cut),
            "highlight" => Ok(Completeness::Highlight),
            _ => Err(EmaError::bad_request(format!("unknown completeness '{}'", s))),
        }
    }
}

impl fmt::Display for Completeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Completeness::Raw => "raw",
            Completeness::Signature => "signature",
            Completeness::Nospace => "nospace",
            Completeness::Cut => "cut",
            Completeness::Highlight => "highlight",
        };
        write!(f, "{}", text)
    }
}

/// Structural metadata of a music document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocInfo {
    /// Total number of measures
    pub measures: u32,

    /// Optional display label per measure (index 0 is measure 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure_labels: Option<Vec<String>>,

    /// Staff names, effective from a 0-based measure index onward
    pub staves: ChangeMap<Vec<String>>,

    /// Time signature, effective from a 0-based measure index onward
    pub beats: ChangeMap<TimeSignature>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completeness: Option<Completeness>,
}

impl DocInfo {
    pub fn new(measures: u32, staves: Vec<String>, time_signature: TimeSignature) -> Self {
        Self {
            measures,
            measure_labels: None,
            staves: ChangeMap::new(staves),
            beats: ChangeMap::new(time_signature),
            completeness: None,
        }
    }

    /// Parse document metadata from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_staff_change(mut self, at: u32, staves: Vec<String>) -> Self {
        self.staves.insert(at, staves);
        self
    }

    pub fn with_beat_change(mut self, at: u32, time_signature: TimeSignature) -> Self {
        self.beats.insert(at, time_signature);
        self
    }

    pub fn with_measure_labels(mut self, labels: Vec<String>) -> Self {
        self.measure_labels = Some(labels);
        self
    }

    pub fn with_completeness(mut self, completeness: Completeness) -> Self {
        self.completeness = Some(completeness);
        self
    }

    /// Staff names in effect at a 1-based measure
    pub fn staves_at(&self, measure: u32) -> &[String] {
        self.staves.effective_at(measure.saturating_sub(1))
    }

    /// Number of staves in effect at a 1-based measure
    pub fn staff_count_at(&self, measure: u32) -> u32 {
        self.staves_at(measure).len() as u32
    }

    /// Time signature in effect at a 1-based measure
    pub fn time_signature_at(&self, measure: u32) -> TimeSignature {
        *self.beats.effective_at(measure.saturating_sub(1))
    }

    /// Beat count in effect at a 1-based measure
    pub fn beat_count_at(&self, measure: u32) -> u32 {
        self.time_signature_at(measure).count
    }

    /// Label of a 1-based measure, if labels were supplied
    pub fn measure_label(&self, measure: u32) -> Option<&str> {
        let index = measure.checked_sub(1)? as usize;
        self.measure_labels
            .as_ref()
            .and_then(|labels| labels.get(index))
            .map(String::as_str)
    }
}
