use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered pair used for ranges, offsets, locations and point coordinates.
pub type Pair = [f64; 2];

/// The seven mutually exclusive plot-item shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Linear,
    Implicit,
    Parametric,
    Polar,
    Points,
    Vector,
    Text,
}

impl Variant {
    /// Variant assumed when an external record carries no `fnType`.
    pub const DEFAULT: Self = Self::Linear;

    pub const ALL: [Self; 7] = [
        Self::Linear,
        Self::Implicit,
        Self::Parametric,
        Self::Polar,
        Self::Points,
        Self::Vector,
        Self::Text,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Implicit => "implicit",
            Self::Parametric => "parametric",
            Self::Polar => "polar",
            Self::Points => "points",
            Self::Vector => "vector",
            Self::Text => "text",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.as_str() == tag)
    }

    /// Position in [`Variant::ALL`], which is also the schema table order.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering sub-type of a record (`graphType` on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    Interval,
    Polyline,
    Scatter,
    Text,
}

impl GraphType {
    pub const ALL: [Self; 4] = [Self::Interval, Self::Polyline, Self::Scatter, Self::Text];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Interval => "interval",
            Self::Polyline => "polyline",
            Self::Scatter => "scatter",
            Self::Text => "text",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|graph_type| graph_type.as_str() == tag)
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
