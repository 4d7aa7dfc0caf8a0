//! Static variant schema.
//!
//! One immutable [`VariantSchema`] per [`Variant`], in [`Variant::ALL`] order.
//! Form builders read it to lay out widgets; the validator and both normalizer
//! directions read it for required fields, defaults and allowed graph types.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::{GraphType, Pair, Variant};
use crate::error::{PlotError, PlotResult};

/// Required string inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKey {
    Fn,
    X,
    Y,
    R,
    Text,
}

impl InputKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fn => "fn",
            Self::X => "x",
            Self::Y => "y",
            Self::R => "r",
            Self::Text => "text",
        }
    }
}

/// Paired-number fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordKey {
    Range,
    Vector,
    Offset,
    Location,
}

impl CoordKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Range => "range",
            Self::Vector => "vector",
            Self::Offset => "offset",
            Self::Location => "location",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchKey {
    Closed,
}

impl SwitchKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptInputKey {
    Color,
    NSamples,
}

impl OptInputKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::NSamples => "nSamples",
        }
    }
}

/// Widget kind for an optional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptInputKind {
    Text,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputField {
    pub key: InputKey,
    /// Prefix shown before the input box, e.g. `y=`.
    pub title: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordField {
    pub key: CoordKey,
    pub optional: bool,
    /// Value filled on import and elided on export.
    pub default: Pair,
    /// Collapsed behind the "more" toggle in the form.
    pub folded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchField {
    pub key: SwitchKey,
    pub folded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptInputField {
    pub key: OptInputKey,
    pub kind: OptInputKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantSchema {
    pub variant: Variant,
    pub inputs: &'static [InputField],
    pub coords: &'static [CoordField],
    /// Whether the variant edits a variable-length point list.
    pub coord_list: bool,
    pub switches: &'static [SwitchField],
    pub opt_inputs: &'static [OptInputField],
    pub graph_types: &'static [GraphType],
    /// Graph type filled in on import when the external record omits `graphType`.
    pub implicit_graph_type: GraphType,
    /// The renderer reads a missing `graphType` as this variant's implicit one,
    /// so export may leave it out. Only true where that is `interval`.
    pub graph_type_elided: bool,
    /// The form must not preselect a graph type; the user picks one.
    pub graph_type_choice_required: bool,
}

impl VariantSchema {
    #[must_use]
    pub fn allows(&self, graph_type: GraphType) -> bool {
        self.graph_types.contains(&graph_type)
    }

    #[must_use]
    pub fn coord(&self, key: CoordKey) -> Option<&'static CoordField> {
        self.coords.iter().find(|field| field.key == key)
    }

    #[must_use]
    pub fn default_range(&self) -> Option<Pair> {
        self.coord(CoordKey::Range).map(|field| field.default)
    }

    /// Whether export can omit `graph_type` for this variant.
    #[must_use]
    pub fn elides_graph_type(&self, graph_type: GraphType) -> bool {
        self.graph_type_elided && graph_type == self.implicit_graph_type
    }

    /// Graph type a freshly created editor record starts with.
    #[must_use]
    pub fn initial_graph_type(&self) -> Option<GraphType> {
        (!self.graph_type_choice_required).then_some(self.implicit_graph_type)
    }
}

pub const LINEAR_DEFAULT_RANGE: Pair = [f64::NEG_INFINITY, f64::INFINITY];
pub const PARAMETRIC_DEFAULT_RANGE: Pair = [0.0, 2.0 * PI];
pub const POLAR_DEFAULT_RANGE: Pair = [-PI, PI];
pub const ORIGIN: Pair = [0.0, 0.0];
pub const DEFAULT_VECTOR: Pair = [1.0, 1.0];

const CLOSED: &[SwitchField] = &[SwitchField {
    key: SwitchKey::Closed,
    folded: true,
}];

const COLOR: OptInputField = OptInputField {
    key: OptInputKey::Color,
    kind: OptInputKind::Text,
};

const COLOR_AND_SAMPLES: &[OptInputField] = &[
    COLOR,
    OptInputField {
        key: OptInputKey::NSamples,
        kind: OptInputKind::Number,
    },
];

const fn range(default: Pair) -> CoordField {
    CoordField {
        key: CoordKey::Range,
        optional: true,
        default,
        folded: true,
    }
}

static SCHEMAS: [VariantSchema; 7] = [
    VariantSchema {
        variant: Variant::Linear,
        inputs: &[InputField {
            key: InputKey::Fn,
            title: "y=",
            placeholder: "f(x)",
        }],
        coords: &[range(LINEAR_DEFAULT_RANGE)],
        coord_list: false,
        switches: CLOSED,
        opt_inputs: COLOR_AND_SAMPLES,
        graph_types: &[GraphType::Polyline, GraphType::Interval, GraphType::Scatter],
        implicit_graph_type: GraphType::Interval,
        graph_type_elided: true,
        graph_type_choice_required: false,
    },
    VariantSchema {
        variant: Variant::Implicit,
        inputs: &[InputField {
            key: InputKey::Fn,
            title: "0=",
            placeholder: "f(x, y)",
        }],
        coords: &[],
        coord_list: false,
        switches: CLOSED,
        opt_inputs: COLOR_AND_SAMPLES,
        graph_types: &[GraphType::Interval],
        implicit_graph_type: GraphType::Interval,
        graph_type_elided: true,
        graph_type_choice_required: false,
    },
    VariantSchema {
        variant: Variant::Parametric,
        inputs: &[
            InputField {
                key: InputKey::X,
                title: "x=",
                placeholder: "f(t)",
            },
            InputField {
                key: InputKey::Y,
                title: "y=",
                placeholder: "g(t)",
            },
        ],
        coords: &[range(PARAMETRIC_DEFAULT_RANGE)],
        coord_list: false,
        switches: CLOSED,
        opt_inputs: COLOR_AND_SAMPLES,
        graph_types: &[GraphType::Polyline, GraphType::Scatter],
        implicit_graph_type: GraphType::Polyline,
        graph_type_elided: false,
        graph_type_choice_required: true,
    },
    VariantSchema {
        variant: Variant::Polar,
        inputs: &[InputField {
            key: InputKey::R,
            title: "ρ=",
            placeholder: "f(theta)",
        }],
        coords: &[range(POLAR_DEFAULT_RANGE)],
        coord_list: false,
        switches: CLOSED,
        opt_inputs: COLOR_AND_SAMPLES,
        graph_types: &[GraphType::Polyline, GraphType::Scatter],
        implicit_graph_type: GraphType::Polyline,
        graph_type_elided: false,
        graph_type_choice_required: true,
    },
    VariantSchema {
        variant: Variant::Points,
        inputs: &[],
        coords: &[],
        coord_list: true,
        switches: CLOSED,
        opt_inputs: &[COLOR],
        graph_types: &[GraphType::Polyline, GraphType::Scatter],
        implicit_graph_type: GraphType::Polyline,
        graph_type_elided: false,
        graph_type_choice_required: true,
    },
    VariantSchema {
        variant: Variant::Vector,
        inputs: &[],
        coords: &[
            CoordField {
                key: CoordKey::Vector,
                optional: false,
                default: DEFAULT_VECTOR,
                folded: false,
            },
            CoordField {
                key: CoordKey::Offset,
                optional: true,
                default: ORIGIN,
                folded: true,
            },
        ],
        coord_list: false,
        switches: &[],
        opt_inputs: &[COLOR],
        graph_types: &[GraphType::Polyline, GraphType::Scatter],
        implicit_graph_type: GraphType::Polyline,
        graph_type_elided: false,
        graph_type_choice_required: true,
    },
    VariantSchema {
        variant: Variant::Text,
        inputs: &[InputField {
            key: InputKey::Text,
            title: "s=",
            placeholder: "Lorem ipsum dolor",
        }],
        coords: &[CoordField {
            key: CoordKey::Location,
            optional: false,
            default: ORIGIN,
            folded: false,
        }],
        coord_list: false,
        switches: &[],
        opt_inputs: &[COLOR],
        graph_types: &[GraphType::Text],
        implicit_graph_type: GraphType::Text,
        graph_type_elided: false,
        graph_type_choice_required: false,
    },
];

/// Schema entry for a known variant.
#[must_use]
pub fn schema(variant: Variant) -> &'static VariantSchema {
    &SCHEMAS[variant.ordinal()]
}

/// Schema entry by wire tag. Callers are expected to pass tags drawn from
/// [`Variant::ALL`]; anything else is reported as [`PlotError::UnknownVariant`].
pub fn lookup(tag: &str) -> PlotResult<&'static VariantSchema> {
    Variant::from_tag(tag)
        .map(schema)
        .ok_or_else(|| PlotError::UnknownVariant(tag.to_owned()))
}

#[must_use]
pub fn all() -> &'static [VariantSchema] {
    &SCHEMAS
}
