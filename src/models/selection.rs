//! Resolved EMA selections
//!
//! A selection is an ordered list of measures, each holding an ordered
//! list of staves, each holding the beat ranges addressed on that staff.
//! Indices are unique within each level, so lookups scan linearly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A beat range with shorthands already resolved
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BeatRange {
    pub start: f64,
    pub end: f64,
}

impl BeatRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for BeatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.start, self.end)
    }
}

/// Beat ranges selected on one staff of a measure
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StaffSelection {
    /// 1-based staff index
    pub staff: u32,
    pub beats: Vec<BeatRange>,
}

impl StaffSelection {
    pub fn new(staff: u32, beats: Vec<BeatRange>) -> Self {
        Self { staff, beats }
    }
}

/// Staves selected in one measure
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MeasureSelection {
    /// 1-based measure index
    pub measure: u32,
    pub staves: Vec<StaffSelection>,
}

impl MeasureSelection {
    pub fn new(measure: u32, staves: Vec<StaffSelection>) -> Self {
        Self { measure, staves }
    }

    /// Beat ranges of a staff, or `None` if the staff is not selected
    pub fn get_staff(&self, staff: u32) -> Option<&[BeatRange]> {
        self.staves
            .iter()
            .find(|s| s.staff == staff)
            .map(|s| s.beats.as_slice())
    }

    pub fn staff_indices(&self) -> Vec<u32> {
        self.staves.iter().map(|s| s.staff).collect()
    }
}

/// The full result of resolving an EMA address
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Selection {
    pub measures: Vec<MeasureSelection>,
}

impl Selection {
    pub fn new(measures: Vec<MeasureSelection>) -> Self {
        Self { measures }
    }

    /// Selected staves of a measure, or `None` if the measure is not selected
    pub fn get_measure(&self, measure: u32) -> Option<&MeasureSelection> {
        self.measures.iter().find(|m| m.measure == measure)
    }

    /// Shortcut for `get_measure(m)?.get_staff(s)`
    pub fn get_staff(&self, measure: u32, staff: u32) -> Option<&[BeatRange]> {
        self.get_measure(measure)?.get_staff(staff)
    }

    pub fn measure_indices(&self) -> Vec<u32> {
        self.measures.iter().map(|m| m.measure).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MeasureSelection> {
        self.measures.iter()
    }

    pub fn len(&self) -> usize {
        self.measures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a MeasureSelection;
    type IntoIter = std::slice::Iter<'a, MeasureSelection>;

    fn into_iter(self) -> Self::IntoIter {
        self.measures.iter()
    }
}
