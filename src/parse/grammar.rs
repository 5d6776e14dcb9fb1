//! EMA address grammar
//!
//! An address has the form `measures/staves/beats[/completeness]`:
//! 1. `measures` - comma-separated measure ranges
//! 2. `staves` - comma-separated groups (one per measure, or one for all),
//!    each a `+`-separated list of staff ranges
//! 3. `beats` - comma-separated groups (one per measure, or one for all),
//!    each a `+`-separated list of per-staff entries, each entry an
//!    `@`-prefixed list of beat ranges (`@1-2@4`)
//! 4. `completeness` - optional rendering tag
//!
//! Leading slashes and runs of slashes collapse to a single separator.

use crate::errors::EmaError;
use super::range::{BeatSpec, MeasureRange, StaffRange};

/// Staff ranges that apply together to one measure
pub type StaffGroup = Vec<StaffRange>;

/// Beat ranges for one staff
pub type StaffBeats = Vec<BeatSpec>;

/// Per-staff beat entries that apply to one measure
pub type BeatGroup = Vec<StaffBeats>;

/// The raw slash-delimited components of an address
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressParts<'a> {
    pub measures: &'a str,
    pub staves: &'a str,
    pub beats: &'a str,
    pub completeness: Option<&'a str>,
}

/// Fully tokenized address, not yet resolved against a document
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedAddress {
    pub measures: Vec<MeasureRange>,
    pub staves: Vec<StaffGroup>,
    pub beats: Vec<BeatGroup>,
}

impl ParsedAddress {
    pub fn parse(measures: &str, staves: &str, beats: &str) -> Result<Self, EmaError> {
        Ok(Self {
            measures: parse_measures(measures)?,
            staves: parse_staves(staves)?,
            beats: parse_beats(beats)?,
        })
    }
}

/// Split an address into its components
pub fn split_address(address: &str) -> Result<AddressParts<'_>, EmaError> {
    let components: Vec<&str> = address.split('/').filter(|part| !part.is_empty()).collect();

    match components[..] {
        [measures, staves, beats] => Ok(AddressParts {
            measures,
            staves,
            beats,
            completeness: None,
        }),
        [measures, staves, beats, completeness] => Ok(AddressParts {
            measures,
            staves,
            beats,
            completeness: Some(completeness),
        }),
        _ => Err(EmaError::bad_request(format!(
            "expected measures/staves/beats[/completeness], got {} components in '{}'",
            components.len(),
            address
        ))),
    }
}

/// `1,3-end` → one range per comma item
pub fn parse_measures(text: &str) -> Result<Vec<MeasureRange>, EmaError> {
    text.split(',').map(MeasureRange::parse).collect()
}

/// `1-2,2+4` → one staff group per comma item
pub fn parse_staves(text: &str) -> Result<Vec<StaffGroup>, EmaError> {
    text.split(',')
        .map(|group| group.split('+').map(StaffRange::parse).collect())
        .collect()
}

/// `@1-2+@3,@all` → one beat group per comma item
pub fn parse_beats(text: &str) -> Result<Vec<BeatGroup>, EmaError> {
    text.split(',')
        .map(|group| group.split('+').map(parse_staff_beats).collect())
        .collect()
}

fn parse_staff_beats(entry: &str) -> Result<StaffBeats, EmaError> {
    let ranges = entry.strip_prefix('@').ok_or_else(|| {
        EmaError::bad_request(format!("beat entry '{}' must start with '@'", entry))
    })?;

    ranges.split('@').map(BeatSpec::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::tokens::RangeToken;

    #[test]
    fn test_split_simple_address() {
        let parts = split_address("1/2/@3/cut").unwrap();
        assert_eq!(parts.measures, "1");
        assert_eq!(parts.staves, "2");
        assert_eq!(parts.beats, "@3");
        assert_eq!(parts.completeness, Some("cut"));
    }

    #[test]
    fn test_split_without_completeness() {
        let parts = split_address("1-8/all/@all").unwrap();
        assert_eq!(parts.beats, "@all");
        assert_eq!(parts.completeness, None);
    }

    #[test]
    fn test_split_normalizes_slashes() {
        let parts = split_address("//1/2/@3//").unwrap();
        assert_eq!(parts.measures, "1");
        assert_eq!(parts.staves, "2");
        assert_eq!(parts.beats, "@3");
        assert_eq!(parts.completeness, None);

        let parts = split_address("1//2///@3/raw").unwrap();
        assert_eq!(parts.completeness, Some("raw"));
    }

    #[test]
    fn test_split_wrong_component_count() {
        assert!(split_address("1/2").unwrap_err().is_bad_request());
        assert!(split_address("1/2/@3/cut/extra").unwrap_err().is_bad_request());
        assert!(split_address("").unwrap_err().is_bad_request());
    }

    #[test]
    fn test_parse_measure_list() {
        let measures = parse_measures("1,3-end").unwrap();
        assert_eq!(measures.len(), 2);
        assert_eq!(measures[1].end, RangeToken::End);
    }

    #[test]
    fn test_parse_staff_groups() {
        let staves = parse_staves("1-2,2+4").unwrap();
        assert_eq!(staves.len(), 2);
        assert_eq!(staves[0].len(), 1);
        assert_eq!(staves[1].len(), 2);
        assert_eq!(staves[1][1].start, RangeToken::Number(4));
    }

    #[test]
    fn test_parse_beat_groups() {
        let beats = parse_beats("@1-2+@1-2,@2-3+@2-3,@1-2@4").unwrap();
        assert_eq!(beats.len(), 3);
        assert_eq!(beats[0].len(), 2);
        assert_eq!(beats[2].len(), 1);
        assert_eq!(beats[2][0].len(), 2);
        assert_eq!(beats[2][0][1].start, RangeToken::Number(4.0));
    }

    #[test]
    fn test_beat_entries_need_at_prefix() {
        assert!(parse_beats("3").unwrap_err().is_bad_request());
        assert!(parse_beats("@").unwrap_err().is_bad_request());
        assert!(parse_beats("@1@@2").unwrap_err().is_bad_request());
    }

    #[test]
    fn test_parsed_address() {
        let parsed = ParsedAddress::parse("2-end", "start-2", "@all").unwrap();
        assert_eq!(parsed.measures.len(), 1);
        assert_eq!(parsed.staves.len(), 1);
        assert_eq!(parsed.beats[0][0][0].end, RangeToken::All);
    }
}
