//! Import/export between the sparse external shape and canonical records.
//!
//! Both directions read from a borrowed input and build a freshly owned output,
//! so nothing reachable from the caller's value is shared with or mutated by
//! the result.

mod export;
mod import;

pub use export::{ExportTarget, canonicalize, export_record, hidden_placeholder};
pub use import::{classify, denormalize, denormalize_all, denormalize_value};
