//! plot-items: canonical/external normalization for plot-item editors.
//!
//! An editor keeps every item as a complete [`CanonicalRecord`]. Renderers and
//! save/share flows exchange the sparse [`ExternalRecord`] shape, where absent
//! fields mean "use the variant default". This crate owns the static variant
//! schema, the structural validator and the import/export pair between the two.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod normalize;
pub mod schema;
pub mod telemetry;
pub mod validator;

pub use api::{PlotDocument, PlotSession, SessionConfig};
pub use core::{
    CanonicalRecord, ExternalRecord, GraphType, ItemKey, KeyAllocator, Pair, RecordShape, Variant,
};
pub use error::{PlotError, PlotResult};
pub use normalize::{ExportTarget, canonicalize, denormalize, denormalize_all, denormalize_value};
pub use validator::{InvalidItem, InvalidReason, first_invalid, legacy_error_index};
