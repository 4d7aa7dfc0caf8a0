use std::f64::consts::PI;

use plot_items::core::{
    CanonicalRecord, Derivative, ExternalRecord, GraphType, ItemKey, KeyAllocator, RecordShape,
    Secant, Variant,
};
use plot_items::error::PlotError;
use plot_items::normalize::{ExportTarget, canonicalize, hidden_placeholder};

fn blank(variant: Variant, raw_key: u64) -> CanonicalRecord {
    CanonicalRecord::blank(variant, ItemKey::new(raw_key))
}

fn linear(fn_expr: &str) -> CanonicalRecord {
    let mut record = blank(Variant::Linear, 1);
    if let RecordShape::Linear(shape) = &mut record.shape {
        shape.fn_expr = fn_expr.to_owned();
    }
    record
}

fn export_one(record: CanonicalRecord) -> ExternalRecord {
    let mut exported = canonicalize(&[record], ExportTarget::Final).expect("export");
    assert_eq!(exported.len(), 1);
    exported.remove(0)
}

#[test]
fn default_linear_exports_only_its_expression() {
    let exported = export_one(linear("x^2"));
    assert_eq!(
        exported,
        ExternalRecord {
            fn_expr: Some("x^2".to_owned()),
            ..ExternalRecord::default()
        }
    );
    let json = serde_json::to_value(&exported).expect("json");
    assert_eq!(json, serde_json::json!({ "fn": "x^2" }));
}

#[test]
fn non_default_graph_type_and_range_are_kept() {
    let mut record = linear("x");
    record.graph_type = Some(GraphType::Polyline);
    if let RecordShape::Linear(shape) = &mut record.shape {
        shape.range = [-1.0, f64::INFINITY];
        shape.closed = true;
        shape.n_samples = Some(400);
    }
    let exported = export_one(record);
    assert_eq!(exported.graph_type.as_deref(), Some("polyline"));
    assert_eq!(exported.range, Some([-1.0, f64::INFINITY]));
    assert_eq!(exported.closed, Some(true));
    assert_eq!(exported.n_samples, Some(400));
    assert_eq!(exported.fn_type, None);
}

#[test]
fn parametric_default_range_is_elided() {
    let mut record = blank(Variant::Parametric, 2);
    record.graph_type = Some(GraphType::Polyline);
    if let RecordShape::Parametric(shape) = &mut record.shape {
        shape.x = "cos(t)".to_owned();
        shape.y = "sin(t)".to_owned();
        shape.range = [0.0, 2.0 * PI];
    }
    let exported = export_one(record);
    assert_eq!(exported.fn_type.as_deref(), Some("parametric"));
    assert_eq!(exported.graph_type.as_deref(), Some("polyline"));
    assert_eq!(exported.range, None);
    assert_eq!(exported.x.as_deref(), Some("cos(t)"));
}

#[test]
fn vector_offset_elided_only_at_origin() {
    let mut record = blank(Variant::Vector, 3);
    record.graph_type = Some(GraphType::Scatter);
    let exported = export_one(record.clone());
    assert_eq!(exported.vector, Some([1.0, 1.0]));
    assert_eq!(exported.offset, None);
    assert_eq!(exported.graph_type.as_deref(), Some("scatter"));

    if let RecordShape::Vector(shape) = &mut record.shape {
        shape.offset = [2.0, -1.0];
    }
    assert_eq!(export_one(record).offset, Some([2.0, -1.0]));
}

#[test]
fn text_keeps_its_tag_and_drops_default_location() {
    let mut record = blank(Variant::Text, 4);
    if let RecordShape::Text(shape) = &mut record.shape {
        shape.text = "vertex".to_owned();
    }
    let exported = export_one(record);
    assert_eq!(exported.fn_type.as_deref(), Some("text"));
    assert_eq!(exported.graph_type.as_deref(), Some("text"));
    assert_eq!(exported.text.as_deref(), Some("vertex"));
    assert_eq!(exported.location, None);
}

#[test]
fn points_list_is_always_present() {
    let mut record = blank(Variant::Points, 5);
    record.graph_type = Some(GraphType::Polyline);
    let exported = export_one(record);
    assert_eq!(exported.points, Some(Vec::new()));
}

#[test]
fn hidden_record_dropped_for_final_export() {
    let mut hidden = linear("x^3");
    hidden.hidden = true;
    let records = vec![linear("x"), hidden, linear("x^2")];

    let exported = canonicalize(&records, ExportTarget::Final).expect("export");
    assert_eq!(exported.len(), records.len() - 1);
    assert_eq!(exported[1].fn_expr.as_deref(), Some("x^2"));
}

#[test]
fn hidden_record_becomes_placeholder_when_materialized() {
    let mut hidden = linear("x^3");
    hidden.hidden = true;
    let records = vec![linear("x"), hidden, linear("x^2")];

    let exported = canonicalize(&records, ExportTarget::Materialize).expect("export");
    assert_eq!(exported.len(), records.len());
    assert_eq!(exported[1], hidden_placeholder());
    assert_eq!(exported[1].fn_type.as_deref(), Some("points"));
    assert_eq!(exported[1].points, Some(Vec::new()));
    assert_eq!(exported[1].graph_type.as_deref(), Some("polyline"));
}

#[test]
fn graph_type_written_unless_the_renderer_defaults_to_interval() {
    let mut parametric = blank(Variant::Parametric, 9);
    parametric.graph_type = Some(GraphType::Polyline);
    if let RecordShape::Parametric(shape) = &mut parametric.shape {
        shape.x = "t".to_owned();
        shape.y = "t".to_owned();
    }
    let mut text = blank(Variant::Text, 10);
    if let RecordShape::Text(shape) = &mut text.shape {
        shape.text = "label".to_owned();
    }
    let mut hidden = linear("x");
    hidden.hidden = true;

    let exported = canonicalize(
        &[parametric, text, hidden, linear("x"), blank(Variant::Implicit, 11)],
        ExportTarget::Materialize,
    )
    .expect("export");
    let tags: Vec<_> = exported
        .iter()
        .map(|record| serde_json::to_value(record).expect("json")["graphType"].clone())
        .collect();
    assert_eq!(
        tags,
        vec![
            serde_json::json!("polyline"),
            serde_json::json!("text"),
            serde_json::json!("polyline"),
            serde_json::Value::Null,
            serde_json::Value::Null,
        ]
    );
}

#[test]
fn graph_type_outside_allowed_set_is_schema_violation() {
    let mut record = blank(Variant::Text, 6);
    record.graph_type = Some(GraphType::Polyline);
    let err = canonicalize(&[record], ExportTarget::Final).expect_err("violation");
    assert_eq!(
        err,
        PlotError::SchemaViolation {
            variant: Variant::Text,
            graph_type: "polyline".to_owned()
        }
    );
}

#[test]
fn hidden_corrupt_record_does_not_fail_export() {
    let mut record = blank(Variant::Text, 7);
    record.graph_type = Some(GraphType::Interval);
    record.hidden = true;
    let exported = canonicalize(&[record], ExportTarget::Final).expect("export");
    assert!(exported.is_empty());
}

#[test]
fn mouse_following_overlays_drop_their_anchor() {
    let mut record = linear("x^2");
    if let RecordShape::Linear(shape) = &mut record.shape {
        shape.secants = vec![
            Secant {
                x0: 1.0,
                x1: 3.0,
                update_on_mouse_move: true,
            },
            Secant {
                x0: 0.5,
                x1: 2.0,
                update_on_mouse_move: false,
            },
        ];
        shape.derivative = Some(Derivative {
            fn_expr: "2*x".to_owned(),
            x0: 4.0,
            update_on_mouse_move: true,
        });
    }
    let json = serde_json::to_value(export_one(record)).expect("json");
    assert_eq!(
        json,
        serde_json::json!({
            "fn": "x^2",
            "secants": [
                { "x0": 1.0, "updateOnMouseMove": true },
                { "x0": 0.5, "x1": 2.0 }
            ],
            "derivative": { "fn": "2*x", "updateOnMouseMove": true }
        })
    );
}

#[test]
fn identity_and_hidden_never_reach_the_wire() {
    let mut keys = KeyAllocator::starting_at(99);
    let record = CanonicalRecord::blank(Variant::Implicit, keys.next_key().expect("key"));
    let json = serde_json::to_string(&export_one(record)).expect("json");
    assert!(!json.contains("key"));
    assert!(!json.contains("hidden"));
    assert_eq!(json, r#"{"fnType":"implicit","fn":""}"#);
}

#[test]
fn empty_color_is_elided() {
    let mut record = linear("x");
    record.color = Some(String::new());
    assert_eq!(export_one(record).color, None);
}

#[test]
fn unpicked_graph_type_exports_without_graph_type() {
    let record = blank(Variant::Vector, 8);
    assert_eq!(record.graph_type, None);
    let exported = export_one(record);
    assert_eq!(exported.graph_type, None);
    assert_eq!(exported.fn_type.as_deref(), Some("vector"));
}

#[test]
fn export_is_stable_across_calls() {
    let mut keys = KeyAllocator::new();
    let mut polar = CanonicalRecord::blank(Variant::Polar, keys.next_key().expect("key"));
    polar.graph_type = Some(GraphType::Scatter);
    let records = vec![
        CanonicalRecord::blank(Variant::Linear, keys.next_key().expect("key")),
        polar,
        CanonicalRecord::blank(Variant::Text, keys.next_key().expect("key")),
    ];
    let first = canonicalize(&records, ExportTarget::Final).expect("first");
    let second = canonicalize(&records, ExportTarget::Final).expect("second");
    assert_eq!(first, second);
}
