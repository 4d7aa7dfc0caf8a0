use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    CanonicalRecord, Derivative, ExternalDerivative, ExternalRecord, ExternalSecant, GraphType,
    Pair, RecordShape, Secant, Variant,
};
use crate::error::{PlotError, PlotResult};
use crate::schema::{self, CoordKey, VariantSchema};

/// Where exported records go, which decides the fate of hidden records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportTarget {
    /// Save/share/export: hidden records are dropped.
    #[default]
    Final,
    /// Live preview inside the session: hidden records become an empty
    /// `points` placeholder so list positions stay stable.
    Materialize,
}

/// Exports canonical records in list order.
///
/// Internal bookkeeping is stripped and default-valued fields are elided. The
/// output never carries explicit absence markers: unset fields are `None` and
/// are skipped on serialization.
pub fn canonicalize(
    records: &[CanonicalRecord],
    target: ExportTarget,
) -> PlotResult<Vec<ExternalRecord>> {
    let mut output = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.hidden {
            trace!(index, ?target, "exporting hidden record");
            if target == ExportTarget::Materialize {
                output.push(hidden_placeholder());
            }
            continue;
        }
        output.push(export_record(record)?);
    }
    debug!(
        input_count = records.len(),
        output_count = output.len(),
        ?target,
        "canonicalized records"
    );
    Ok(output)
}

/// Visible-but-empty stand-in for a hidden record, drawn as a polyline.
#[must_use]
pub fn hidden_placeholder() -> ExternalRecord {
    ExternalRecord {
        fn_type: Some(Variant::Points.as_str().to_owned()),
        graph_type: Some(GraphType::Polyline.as_str().to_owned()),
        points: Some(Vec::new()),
        ..ExternalRecord::default()
    }
}

/// Exports one record regardless of its hidden flag.
pub fn export_record(record: &CanonicalRecord) -> PlotResult<ExternalRecord> {
    let variant = record.variant();
    let entry = schema::schema(variant);

    let graph_type = match record.graph_type {
        Some(graph_type) if !entry.allows(graph_type) => {
            return Err(PlotError::SchemaViolation {
                variant,
                graph_type: graph_type.as_str().to_owned(),
            });
        }
        Some(graph_type) if entry.elides_graph_type(graph_type) => None,
        Some(graph_type) => Some(graph_type.as_str().to_owned()),
        None => {
            debug!(
                variant = %variant,
                key = record.key.raw(),
                "exporting record without a picked graph type"
            );
            None
        }
    };

    let mut external = ExternalRecord {
        fn_type: (variant != Variant::DEFAULT).then(|| variant.as_str().to_owned()),
        graph_type,
        color: record.color.clone().filter(|color| !color.is_empty()),
        ..ExternalRecord::default()
    };

    match &record.shape {
        RecordShape::Linear(shape) => {
            external.fn_expr = Some(shape.fn_expr.clone());
            external.range = non_default_coord(entry, CoordKey::Range, shape.range);
            external.closed = flag(shape.closed);
            external.n_samples = shape.n_samples;
            external.skip_tip = flag(shape.skip_tip);
            external.secants = (!shape.secants.is_empty())
                .then(|| shape.secants.iter().map(export_secant).collect());
            external.derivative = shape.derivative.as_ref().map(export_derivative);
        }
        RecordShape::Implicit(shape) => {
            external.fn_expr = Some(shape.fn_expr.clone());
            external.closed = flag(shape.closed);
            external.n_samples = shape.n_samples;
        }
        RecordShape::Parametric(shape) => {
            external.x = Some(shape.x.clone());
            external.y = Some(shape.y.clone());
            external.range = non_default_coord(entry, CoordKey::Range, shape.range);
            external.closed = flag(shape.closed);
            external.n_samples = shape.n_samples;
        }
        RecordShape::Polar(shape) => {
            external.r = Some(shape.r.clone());
            external.range = non_default_coord(entry, CoordKey::Range, shape.range);
            external.closed = flag(shape.closed);
            external.n_samples = shape.n_samples;
        }
        RecordShape::Points(shape) => {
            external.points = Some(shape.points.clone());
            external.closed = flag(shape.closed);
        }
        RecordShape::Vector(shape) => {
            external.vector = Some(shape.vector);
            external.offset = non_default_coord(entry, CoordKey::Offset, shape.offset);
        }
        RecordShape::Text(shape) => {
            external.text = Some(shape.text.clone());
            external.location = non_default_coord(entry, CoordKey::Location, shape.location);
        }
    }

    Ok(external)
}

fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}

fn non_default_coord(entry: &VariantSchema, key: CoordKey, value: Pair) -> Option<Pair> {
    match entry.coord(key) {
        Some(field) if field.default == value => None,
        _ => Some(value),
    }
}

// While following the pointer the second anchor is recomputed by the renderer.
fn export_secant(secant: &Secant) -> ExternalSecant {
    ExternalSecant {
        x0: Some(secant.x0),
        x1: (!secant.update_on_mouse_move).then_some(secant.x1),
        update_on_mouse_move: flag(secant.update_on_mouse_move),
    }
}

fn export_derivative(derivative: &Derivative) -> ExternalDerivative {
    ExternalDerivative {
        fn_expr: Some(derivative.fn_expr.clone()),
        x0: (!derivative.update_on_mouse_move).then_some(derivative.x0),
        update_on_mouse_move: flag(derivative.update_on_mouse_move),
    }
}
