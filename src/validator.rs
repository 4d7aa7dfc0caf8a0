//! Structural validation of a canonical list before it reaches the renderer.
//!
//! Failures are data, not errors: the editor highlights the reported item.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::CanonicalRecord;
use crate::schema::{self, CoordKey, InputKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidReason {
    /// The variant has no natural graph type and none was picked.
    GraphTypeNotChosen,
    MissingInput(InputKey),
    MissingCoord(CoordKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidItem {
    pub index: usize,
    pub reason: InvalidReason,
}

/// Finds the first structurally incomplete record.
///
/// Checks run as three passes over the whole list, in this order: graph type
/// picked where the variant requires it, required inputs non-blank, required
/// coordinates filled. The first pass that finds a record reports it, so a
/// later record failing an earlier pass wins over an earlier record failing a
/// later pass.
#[must_use]
pub fn first_invalid(records: &[CanonicalRecord]) -> Option<InvalidItem> {
    let found = records
        .iter()
        .position(graph_type_missing)
        .map(|index| InvalidItem {
            index,
            reason: InvalidReason::GraphTypeNotChosen,
        })
        .or_else(|| {
            records.iter().enumerate().find_map(|(index, record)| {
                missing_input(record).map(|key| InvalidItem {
                    index,
                    reason: InvalidReason::MissingInput(key),
                })
            })
        })
        .or_else(|| {
            records.iter().enumerate().find_map(|(index, record)| {
                missing_coord(record).map(|key| InvalidItem {
                    index,
                    reason: InvalidReason::MissingCoord(key),
                })
            })
        });
    if let Some(item) = found {
        debug!(index = item.index, reason = ?item.reason, "invalid plot item");
    }
    found
}

/// Legacy contract: index of the first invalid record, `0` when none is.
///
/// `0` is ambiguous between "the first record is invalid" and "every record
/// is valid". Prefer [`first_invalid`].
#[must_use]
pub fn legacy_error_index(records: &[CanonicalRecord]) -> usize {
    first_invalid(records).map_or(0, |item| item.index)
}

fn graph_type_missing(record: &CanonicalRecord) -> bool {
    record.graph_type.is_none() && schema::schema(record.variant()).graph_type_choice_required
}

fn missing_input(record: &CanonicalRecord) -> Option<InputKey> {
    schema::schema(record.variant())
        .inputs
        .iter()
        .map(|field| field.key)
        .find(|&key| record.input(key).is_none_or(|value| value.trim().is_empty()))
}

// A blank form box parses to NaN.
fn missing_coord(record: &CanonicalRecord) -> Option<CoordKey> {
    schema::schema(record.variant())
        .coords
        .iter()
        .filter(|field| !field.optional)
        .map(|field| field.key)
        .find(|&key| {
            record
                .coord(key)
                .is_none_or(|[first, second]| first.is_nan() || second.is_nan())
        })
}
