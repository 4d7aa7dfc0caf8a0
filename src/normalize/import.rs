use serde::Deserialize;
use tracing::{debug, trace};

use crate::core::{
    CanonicalRecord, Derivative, ExternalDerivative, ExternalRecord, ExternalSecant, GraphType,
    ImplicitShape, KeyAllocator, LinearShape, Pair, ParametricShape, PointsShape, PolarShape,
    RecordShape, Secant, TextShape, VectorShape, Variant,
};
use crate::error::{PlotError, PlotResult};
use crate::schema::{self, CoordKey, VariantSchema};

/// Picks the variant an external record describes.
///
/// Policy: an explicit `fnType` wins and must name a known variant. Without
/// one, a record that carries `text` (or `graphType: "text"`) is a text label;
/// anything else is the default variant. This is a shape heuristic, not a
/// strict schema match.
pub fn classify(input: &ExternalRecord) -> PlotResult<Variant> {
    match input.fn_type.as_deref() {
        Some(tag) => Variant::from_tag(tag).ok_or_else(|| PlotError::UnrecognizedVariant {
            tag: tag.to_owned(),
        }),
        None if input.text.is_some()
            || input.graph_type.as_deref() == Some(GraphType::Text.as_str()) =>
        {
            Ok(Variant::Text)
        }
        None => Ok(Variant::DEFAULT),
    }
}

/// Builds a complete canonical record from a sparse external one.
///
/// Absent fields take the variant defaults, the record gets a fresh key from
/// `keys` and starts visible.
pub fn denormalize(input: &ExternalRecord, keys: &mut KeyAllocator) -> PlotResult<CanonicalRecord> {
    let variant = classify(input)?;
    let entry = schema::schema(variant);
    let graph_type = resolve_graph_type(entry, input.graph_type.as_deref())?;
    let shape = match variant {
        Variant::Linear => RecordShape::Linear(LinearShape {
            fn_expr: text_or_default(&input.fn_expr),
            range: coord_or_default(entry, CoordKey::Range, input.range),
            closed: input.closed.unwrap_or(false),
            n_samples: input.n_samples,
            skip_tip: input.skip_tip.unwrap_or(false),
            secants: input
                .secants
                .iter()
                .flatten()
                .map(import_secant)
                .collect(),
            derivative: input.derivative.as_ref().map(import_derivative),
        }),
        Variant::Implicit => RecordShape::Implicit(ImplicitShape {
            fn_expr: text_or_default(&input.fn_expr),
            closed: input.closed.unwrap_or(false),
            n_samples: input.n_samples,
        }),
        Variant::Parametric => RecordShape::Parametric(ParametricShape {
            x: text_or_default(&input.x),
            y: text_or_default(&input.y),
            range: coord_or_default(entry, CoordKey::Range, input.range),
            closed: input.closed.unwrap_or(false),
            n_samples: input.n_samples,
        }),
        Variant::Polar => RecordShape::Polar(PolarShape {
            r: text_or_default(&input.r),
            range: coord_or_default(entry, CoordKey::Range, input.range),
            closed: input.closed.unwrap_or(false),
            n_samples: input.n_samples,
        }),
        Variant::Points => RecordShape::Points(PointsShape {
            points: input.points.clone().unwrap_or_default(),
            closed: input.closed.unwrap_or(false),
        }),
        Variant::Vector => RecordShape::Vector(VectorShape {
            vector: coord_or_default(entry, CoordKey::Vector, input.vector),
            offset: coord_or_default(entry, CoordKey::Offset, input.offset),
        }),
        Variant::Text => RecordShape::Text(TextShape {
            text: text_or_default(&input.text),
            location: coord_or_default(entry, CoordKey::Location, input.location),
        }),
    };

    let record = CanonicalRecord {
        key: keys.next_key()?,
        hidden: false,
        graph_type: Some(graph_type),
        color: input.color.clone().filter(|color| !color.is_empty()),
        shape,
    };
    trace!(
        variant = %variant,
        graph_type = %graph_type,
        key = record.key.raw(),
        "denormalized external record"
    );
    Ok(record)
}

/// Imports an untyped JSON object.
pub fn denormalize_value(
    input: &serde_json::Value,
    keys: &mut KeyAllocator,
) -> PlotResult<CanonicalRecord> {
    let record = ExternalRecord::deserialize(input)
        .map_err(|e| PlotError::InvalidData(format!("malformed external record: {e}")))?;
    denormalize(&record, keys)
}

/// Imports a whole list, stopping at the first record that fails.
pub fn denormalize_all(
    inputs: &[ExternalRecord],
    keys: &mut KeyAllocator,
) -> PlotResult<Vec<CanonicalRecord>> {
    let records = inputs
        .iter()
        .map(|input| denormalize(input, keys))
        .collect::<PlotResult<Vec<_>>>()?;
    debug!(count = records.len(), "denormalized external records");
    Ok(records)
}

fn resolve_graph_type(entry: &VariantSchema, tag: Option<&str>) -> PlotResult<GraphType> {
    let Some(tag) = tag else {
        return Ok(entry.implicit_graph_type);
    };
    match GraphType::from_tag(tag) {
        Some(graph_type) if entry.allows(graph_type) => Ok(graph_type),
        _ => Err(PlotError::SchemaViolation {
            variant: entry.variant,
            graph_type: tag.to_owned(),
        }),
    }
}

fn text_or_default(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn coord_or_default(entry: &VariantSchema, key: CoordKey, value: Option<Pair>) -> Pair {
    value.unwrap_or_else(|| {
        entry
            .coord(key)
            .map_or(schema::ORIGIN, |field| field.default)
    })
}

fn import_secant(input: &ExternalSecant) -> Secant {
    let defaults = Secant::default();
    Secant {
        x0: input.x0.unwrap_or(defaults.x0),
        x1: input.x1.unwrap_or(defaults.x1),
        update_on_mouse_move: input.update_on_mouse_move.unwrap_or(false),
    }
}

fn import_derivative(input: &ExternalDerivative) -> Derivative {
    Derivative {
        fn_expr: text_or_default(&input.fn_expr),
        x0: input.x0.unwrap_or(0.0),
        update_on_mouse_move: input.update_on_mouse_move.unwrap_or(false),
    }
}
