use thiserror::Error;

use crate::core::Variant;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    /// Schema lookup with a tag outside the fixed variant enumeration.
    #[error("unknown variant tag `{0}`")]
    UnknownVariant(String),

    /// Import of a record whose explicit `fnType` names no known variant.
    #[error("unrecognized variant `{tag}` in external record")]
    UnrecognizedVariant { tag: String },

    /// A rendering sub-type outside the variant's allowed set.
    #[error("graph type `{graph_type}` is not allowed for variant `{variant}`")]
    SchemaViolation {
        variant: Variant,
        graph_type: String,
    },

    /// The session key counter has handed out its last value.
    #[error("item keys exhausted")]
    KeysExhausted,

    #[error("invalid data: {0}")]
    InvalidData(String),
}
