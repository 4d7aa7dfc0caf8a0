use plot_items::core::{
    CanonicalRecord, Derivative, ExternalRecord, ImplicitShape, ItemKey, KeyAllocator,
    LinearShape, Pair, ParametricShape, PointsShape, PolarShape, RecordShape, Secant, TextShape,
    VectorShape, Variant,
};
use plot_items::normalize::{ExportTarget, canonicalize, denormalize, hidden_placeholder};
use plot_items::schema;
use proptest::prelude::*;

fn expr_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9^*+()/ ]{0,16}"
}

// Quarter steps survive a JSON round trip bit-for-bit.
fn finite_strategy() -> impl Strategy<Value = f64> {
    (-400_000i32..400_000).prop_map(|value| f64::from(value) / 4.0)
}

fn pair_strategy() -> impl Strategy<Value = Pair> {
    (finite_strategy(), finite_strategy()).prop_map(|(first, second)| [first, second])
}

fn range_strategy(variant: Variant) -> BoxedStrategy<Pair> {
    let default = schema::schema(variant)
        .default_range()
        .unwrap_or([0.0, 0.0]);
    prop_oneof![
        Just(default),
        pair_strategy(),
        finite_strategy().prop_map(|high| [f64::NEG_INFINITY, high]),
    ]
    .boxed()
}

fn samples_strategy() -> impl Strategy<Value = Option<u32>> {
    proptest::option::of(1u32..5_000)
}

// Anchors that follow the pointer are not exported, so they sit at the import default.
fn secant_strategy() -> impl Strategy<Value = Secant> {
    (finite_strategy(), finite_strategy(), any::<bool>()).prop_map(|(x0, x1, follow)| Secant {
        x0,
        x1: if follow { Secant::default().x1 } else { x1 },
        update_on_mouse_move: follow,
    })
}

fn derivative_strategy() -> impl Strategy<Value = Derivative> {
    (expr_strategy(), finite_strategy(), any::<bool>()).prop_map(|(fn_expr, x0, follow)| {
        Derivative {
            fn_expr,
            x0: if follow { 0.0 } else { x0 },
            update_on_mouse_move: follow,
        }
    })
}

fn shape_strategy() -> impl Strategy<Value = RecordShape> {
    prop_oneof![
        (
            expr_strategy(),
            range_strategy(Variant::Linear),
            any::<bool>(),
            samples_strategy(),
            any::<bool>(),
            prop::collection::vec(secant_strategy(), 0..3),
            proptest::option::of(derivative_strategy()),
        )
            .prop_map(
                |(fn_expr, range, closed, n_samples, skip_tip, secants, derivative)| {
                    RecordShape::Linear(LinearShape {
                        fn_expr,
                        range,
                        closed,
                        n_samples,
                        skip_tip,
                        secants,
                        derivative,
                    })
                }
            ),
        (expr_strategy(), any::<bool>(), samples_strategy()).prop_map(
            |(fn_expr, closed, n_samples)| RecordShape::Implicit(ImplicitShape {
                fn_expr,
                closed,
                n_samples,
            })
        ),
        (
            expr_strategy(),
            expr_strategy(),
            range_strategy(Variant::Parametric),
            any::<bool>(),
            samples_strategy(),
        )
            .prop_map(|(x, y, range, closed, n_samples)| {
                RecordShape::Parametric(ParametricShape {
                    x,
                    y,
                    range,
                    closed,
                    n_samples,
                })
            }),
        (
            expr_strategy(),
            range_strategy(Variant::Polar),
            any::<bool>(),
            samples_strategy(),
        )
            .prop_map(|(r, range, closed, n_samples)| RecordShape::Polar(PolarShape {
                r,
                range,
                closed,
                n_samples,
            })),
        (prop::collection::vec(pair_strategy(), 0..6), any::<bool>())
            .prop_map(|(points, closed)| RecordShape::Points(PointsShape { points, closed })),
        (
            pair_strategy(),
            prop_oneof![Just([0.0, 0.0]), pair_strategy()]
        )
            .prop_map(|(vector, offset)| RecordShape::Vector(VectorShape { vector, offset })),
        (
            "[ -~]{0,24}",
            prop_oneof![Just([0.0, 0.0]), pair_strategy()]
        )
            .prop_map(|(text, location)| RecordShape::Text(TextShape { text, location })),
    ]
}

fn record_strategy() -> impl Strategy<Value = CanonicalRecord> {
    shape_strategy().prop_flat_map(|shape| {
        let allowed = schema::schema(shape.variant()).graph_types.to_vec();
        (
            Just(shape),
            prop::sample::select(allowed),
            proptest::option::of("#[0-9a-f]{6}"),
            any::<u64>(),
        )
            .prop_map(|(shape, graph_type, color, key)| CanonicalRecord {
                key: ItemKey::new(key),
                hidden: false,
                graph_type: Some(graph_type),
                color,
                shape,
            })
    })
}

proptest! {
    #[test]
    fn export_then_import_reconstructs_the_record(record in record_strategy()) {
        let exported = canonicalize(std::slice::from_ref(&record), ExportTarget::Final)
            .expect("export");
        prop_assert_eq!(exported.len(), 1);

        let mut keys = KeyAllocator::new();
        let mut reimported = denormalize(&exported[0], &mut keys).expect("import");
        reimported.key = record.key;
        prop_assert_eq!(reimported, record);
    }

    #[test]
    fn export_is_a_fixed_point_through_json(
        records in prop::collection::vec(record_strategy(), 0..6)
    ) {
        let first = canonicalize(&records, ExportTarget::Final).expect("export");
        prop_assert_eq!(&canonicalize(&records, ExportTarget::Final).expect("export"), &first);

        let json = serde_json::to_string(&first).expect("serialize");
        let parsed: Vec<ExternalRecord> = serde_json::from_str(&json).expect("parse");
        let mut keys = KeyAllocator::new();
        let reimported = parsed
            .iter()
            .map(|record| denormalize(record, &mut keys))
            .collect::<Result<Vec<_>, _>>()
            .expect("import");
        let second = canonicalize(&reimported, ExportTarget::Final).expect("export");
        prop_assert_eq!(second, first);
    }

    #[test]
    fn hidden_records_follow_export_target(
        records in prop::collection::vec((record_strategy(), any::<bool>()), 0..8)
    ) {
        let records: Vec<CanonicalRecord> = records
            .into_iter()
            .map(|(mut record, hidden)| {
                record.hidden = hidden;
                record
            })
            .collect();
        let visible = records.iter().filter(|record| !record.hidden).count();

        let saved = canonicalize(&records, ExportTarget::Final).expect("final");
        prop_assert_eq!(saved.len(), visible);

        let preview = canonicalize(&records, ExportTarget::Materialize).expect("materialize");
        prop_assert_eq!(preview.len(), records.len());
        for (record, exported) in records.iter().zip(&preview) {
            if record.hidden {
                prop_assert_eq!(exported, &hidden_placeholder());
            }
        }
    }
}
