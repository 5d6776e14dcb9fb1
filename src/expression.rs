//! EMA expressions
//!
//! An [`EmaExpression`] is an address resolved against a document. It keeps
//! the raw address components and the document metadata alongside the
//! resolved [`Selection`], so callers get everything back in one value.

use serde::Serialize;

use crate::errors::EmaError;
use crate::models::{Completeness, DocInfo, Selection};
use crate::parse::{split_address, ParsedAddress};
use crate::resolver::resolve_selection;

/// An EMA address resolved against a document
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EmaExpression {
    doc_info: DocInfo,
    measures: String,
    staves: String,
    beats: String,
    completeness: Option<String>,
    selection: Selection,
}

impl EmaExpression {
    /// Parse and resolve a full address such as `"1-4/1-2/@all/cut"`
    pub fn parse(doc_info: DocInfo, address: &str) -> Result<Self, EmaError> {
        let parts = split_address(address)?;
        Self::from_parts(doc_info, parts.measures, parts.staves, parts.beats, parts.completeness)
    }

    /// Resolve already-split address components
    pub fn from_parts(
        doc_info: DocInfo,
        measures: &str,
        staves: &str,
        beats: &str,
        completeness: Option<&str>,
    ) -> Result<Self, EmaError> {
        let completeness = completeness.filter(|c| !c.is_empty());
        if let Some(raw) = completeness {
            raw.parse::<Completeness>()?;
        }

        let parsed = ParsedAddress::parse(measures, staves, beats)?;
        let selection = resolve_selection(&doc_info, &parsed).map_err(|err| {
            log::warn!("{}", err.detail());
            err
        })?;

        Ok(Self {
            doc_info,
            measures: measures.to_string(),
            staves: staves.to_string(),
            beats: beats.to_string(),
            completeness: completeness.map(str::to_string),
            selection,
        })
    }

    pub fn doc_info(&self) -> &DocInfo {
        &self.doc_info
    }

    pub fn measures(&self) -> &str {
        &self.measures
    }

    pub fn staves(&self) -> &str {
        &self.staves
    }

    pub fn beats(&self) -> &str {
        &self.beats
    }

    /// Raw completeness component, if one was given
    pub fn completeness(&self) -> Option<&str> {
        self.completeness.as_deref()
    }

    /// Completeness as a typed value (validated at construction)
    pub fn completeness_mode(&self) -> Option<Completeness> {
        self.completeness.as_deref().and_then(|raw| raw.parse().ok())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn into_selection(self) -> Selection {
        self.selection
    }
}

/// Resolve an address to a selection without keeping the inputs
pub fn resolve_address(doc_info: &DocInfo, address: &str) -> Result<Selection, EmaError> {
    let parts = split_address(address)?;
    if let Some(raw) = parts.completeness {
        raw.parse::<Completeness>()?;
    }
    let parsed = ParsedAddress::parse(parts.measures, parts.staves, parts.beats)?;
    resolve_selection(doc_info, &parsed)
}
