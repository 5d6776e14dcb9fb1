//! Selection resolver
//!
//! Expands parsed range lists into a concrete [`Selection`] against a
//! document's metadata. Staff and beat groups broadcast: a single group
//! applies to every measure (or staff), otherwise there must be exactly
//! one group per measure (or staff), matched by position.

use std::collections::BTreeSet;

use crate::errors::{EmaError, RangeKind};
use crate::models::{DocInfo, MeasureSelection, Selection, StaffSelection};
use crate::parse::{BeatGroup, EmaRange, ParsedAddress, StaffBeats, StaffGroup};

/// Resolve a parsed address into a selection
pub fn resolve_selection(
    doc_info: &DocInfo,
    address: &ParsedAddress,
) -> Result<Selection, EmaError> {
    let measures = expand_indices(&address.measures, doc_info.measures, RangeKind::Measure)?;
    log::debug!("resolving {} measure(s): {:?}", measures.len(), measures);

    let selected = measures
        .iter()
        .enumerate()
        .map(|(measure_idx, &measure)| {
            let staff_group: &StaffGroup =
                select_group(&address.staves, measure_idx, measures.len(), RangeKind::Staff)?;
            let beat_group: &BeatGroup =
                select_group(&address.beats, measure_idx, measures.len(), RangeKind::Beat)?;
            resolve_measure(doc_info, measure, staff_group, beat_group)
        })
        .collect::<Result<Vec<_>, EmaError>>()?;

    Ok(Selection::new(selected))
}

fn resolve_measure(
    doc_info: &DocInfo,
    measure: u32,
    staff_group: &StaffGroup,
    beat_group: &BeatGroup,
) -> Result<MeasureSelection, EmaError> {
    let staff_count = doc_info.staff_count_at(measure);
    let beat_count = doc_info.beat_count_at(measure);
    let staves = expand_indices(staff_group, staff_count, RangeKind::Staff)?;

    log::debug!(
        "measure {}: {} of {} staves, {} beats",
        measure,
        staves.len(),
        staff_count,
        beat_count
    );

    let selected = staves
        .iter()
        .enumerate()
        .map(|(staff_idx, &staff)| -> Result<StaffSelection, EmaError> {
            let ranges: &StaffBeats =
                select_group(beat_group, staff_idx, staves.len(), RangeKind::Beat)?;
            let beats = ranges
                .iter()
                .map(|range| range.resolve(beat_count))
                .collect::<Result<Vec<_>, EmaError>>()?;
            Ok(StaffSelection::new(staff, beats))
        })
        .collect::<Result<Vec<_>, EmaError>>()?;

    Ok(MeasureSelection::new(measure, selected))
}

/// Flatten ranges into sorted, deduplicated indices
fn expand_indices(ranges: &[EmaRange<u32>], total: u32, kind: RangeKind) -> Result<Vec<u32>, EmaError> {
    let mut indices = BTreeSet::new();
    for range in ranges {
        indices.extend(range.to_indices(total, kind)?);
    }
    Ok(indices.into_iter().collect())
}

/// Pick the group for the item at `position` out of `item_count` items.
///
/// One group broadcasts to every item; otherwise groups align one-to-one.
fn select_group<T>(
    groups: &[T],
    position: usize,
    item_count: usize,
    kind: RangeKind,
) -> Result<&T, EmaError> {
    let index = if groups.len() == 1 { 0 } else { position };

    if groups.len() != 1 && groups.len() != item_count {
        return Err(EmaError::bad_request(format!(
            "{} {} group(s) cannot align with {} selected item(s)",
            groups.len(),
            kind,
            item_count
        )));
    }

    groups.get(index).ok_or_else(|| {
        EmaError::bad_request(format!("no {} group at position {}", kind, index))
    })
}
