use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::schema::{self, CoordKey, DEFAULT_VECTOR, InputKey, ORIGIN};

use super::{GraphType, Pair, Variant};

/// In-session identity of an editor item.
///
/// Keys are only meaningful inside the session whose [`KeyAllocator`] issued
/// them. They are never written to the external form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemKey(u64);

impl ItemKey {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Monotonic key source for one editing session.
///
/// Never issues the same key twice: once `u64::MAX` has been handed out,
/// every later call fails with [`PlotError::KeysExhausted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAllocator {
    /// `None` after the last key was issued.
    next: Option<u64>,
}

impl Default for KeyAllocator {
    fn default() -> Self {
        Self::starting_at(0)
    }
}

impl KeyAllocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: Some(first) }
    }

    pub fn next_key(&mut self) -> PlotResult<ItemKey> {
        let raw = self.next.ok_or(PlotError::KeysExhausted)?;
        self.next = raw.checked_add(1);
        Ok(ItemKey(raw))
    }
}

/// Secant overlay on a linear function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Secant {
    pub x0: f64,
    /// Second anchor; tracks the pointer while `update_on_mouse_move` is set.
    pub x1: f64,
    pub update_on_mouse_move: bool,
}

impl Default for Secant {
    fn default() -> Self {
        Self {
            x0: 0.0,
            x1: 1.0,
            update_on_mouse_move: false,
        }
    }
}

/// Derivative overlay on a linear function.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Derivative {
    pub fn_expr: String,
    /// Tangent anchor; tracks the pointer while `update_on_mouse_move` is set.
    pub x0: f64,
    pub update_on_mouse_move: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearShape {
    pub fn_expr: String,
    pub range: Pair,
    pub closed: bool,
    pub n_samples: Option<u32>,
    pub skip_tip: bool,
    pub secants: Vec<Secant>,
    pub derivative: Option<Derivative>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplicitShape {
    pub fn_expr: String,
    pub closed: bool,
    pub n_samples: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametricShape {
    pub x: String,
    pub y: String,
    pub range: Pair,
    pub closed: bool,
    pub n_samples: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarShape {
    pub r: String,
    pub range: Pair,
    pub closed: bool,
    pub n_samples: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsShape {
    pub points: Vec<Pair>,
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorShape {
    pub vector: Pair,
    pub offset: Pair,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextShape {
    pub text: String,
    pub location: Pair,
}

/// Variant-specific field set of a canonical record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RecordShape {
    Linear(LinearShape),
    Implicit(ImplicitShape),
    Parametric(ParametricShape),
    Polar(PolarShape),
    Points(PointsShape),
    Vector(VectorShape),
    Text(TextShape),
}

impl RecordShape {
    /// Field set with every schema default filled in.
    #[must_use]
    pub fn defaults(variant: Variant) -> Self {
        let range = || schema::schema(variant).default_range().unwrap_or(ORIGIN);
        match variant {
            Variant::Linear => Self::Linear(LinearShape {
                fn_expr: String::new(),
                range: range(),
                closed: false,
                n_samples: None,
                skip_tip: false,
                secants: Vec::new(),
                derivative: None,
            }),
            Variant::Implicit => Self::Implicit(ImplicitShape {
                fn_expr: String::new(),
                closed: false,
                n_samples: None,
            }),
            Variant::Parametric => Self::Parametric(ParametricShape {
                x: String::new(),
                y: String::new(),
                range: range(),
                closed: false,
                n_samples: None,
            }),
            Variant::Polar => Self::Polar(PolarShape {
                r: String::new(),
                range: range(),
                closed: false,
                n_samples: None,
            }),
            Variant::Points => Self::Points(PointsShape {
                points: Vec::new(),
                closed: false,
            }),
            Variant::Vector => Self::Vector(VectorShape {
                vector: DEFAULT_VECTOR,
                offset: ORIGIN,
            }),
            Variant::Text => Self::Text(TextShape {
                text: String::new(),
                location: ORIGIN,
            }),
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        match self {
            Self::Linear(_) => Variant::Linear,
            Self::Implicit(_) => Variant::Implicit,
            Self::Parametric(_) => Variant::Parametric,
            Self::Polar(_) => Variant::Polar,
            Self::Points(_) => Variant::Points,
            Self::Vector(_) => Variant::Vector,
            Self::Text(_) => Variant::Text,
        }
    }
}

/// Complete editor-side form of a plot item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub key: ItemKey,
    /// Soft-delete marker: kept in the list, skipped by rendering and export.
    pub hidden: bool,
    /// `None` until the user picks a graph type for variants that require one.
    pub graph_type: Option<GraphType>,
    /// Unset is `None`, never `Some("")`; write through [`Self::set_color`].
    pub color: Option<String>,
    pub shape: RecordShape,
}

impl CanonicalRecord {
    /// New editor item of `variant` with every field at its default.
    #[must_use]
    pub fn blank(variant: Variant, key: ItemKey) -> Self {
        Self {
            key,
            hidden: false,
            graph_type: schema::schema(variant).initial_graph_type(),
            color: None,
            shape: RecordShape::defaults(variant),
        }
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.shape.variant()
    }

    /// Sets the color, clearing it when `color` is empty.
    pub fn set_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        self.color = (!color.is_empty()).then_some(color);
    }

    /// Value of a required string input, if this variant has it.
    #[must_use]
    pub fn input(&self, key: InputKey) -> Option<&str> {
        let value = match (&self.shape, key) {
            (RecordShape::Linear(shape), InputKey::Fn) => &shape.fn_expr,
            (RecordShape::Implicit(shape), InputKey::Fn) => &shape.fn_expr,
            (RecordShape::Parametric(shape), InputKey::X) => &shape.x,
            (RecordShape::Parametric(shape), InputKey::Y) => &shape.y,
            (RecordShape::Polar(shape), InputKey::R) => &shape.r,
            (RecordShape::Text(shape), InputKey::Text) => &shape.text,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Value of a coordinate pair field, if this variant has it.
    #[must_use]
    pub fn coord(&self, key: CoordKey) -> Option<Pair> {
        match (&self.shape, key) {
            (RecordShape::Linear(shape), CoordKey::Range) => Some(shape.range),
            (RecordShape::Parametric(shape), CoordKey::Range) => Some(shape.range),
            (RecordShape::Polar(shape), CoordKey::Range) => Some(shape.range),
            (RecordShape::Vector(shape), CoordKey::Vector) => Some(shape.vector),
            (RecordShape::Vector(shape), CoordKey::Offset) => Some(shape.offset),
            (RecordShape::Text(shape), CoordKey::Location) => Some(shape.location),
            _ => None,
        }
    }
}
