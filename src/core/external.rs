use serde::{Deserialize, Serialize};

use super::Pair;

/// Secant as exchanged with the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalSecant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x0: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_on_mouse_move: Option<bool>,
}

/// Derivative overlay as exchanged with the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalDerivative {
    #[serde(rename = "fn", default, skip_serializing_if = "Option::is_none")]
    pub fn_expr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x0: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_on_mouse_move: Option<bool>,
}

/// Sparse plot item consumed by the renderer and by save/share flows.
///
/// Every field is optional; absence means "use the variant default". Tags stay
/// raw strings so import can name an unrecognized one in its error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fn_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_type: Option<String>,
    #[serde(rename = "fn", default, skip_serializing_if = "Option::is_none")]
    pub fn_expr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "super::wire_number")]
    pub range: Option<Pair>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "super::wire_number::list"
    )]
    pub points: Option<Vec<Pair>>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "super::wire_number")]
    pub vector: Option<Pair>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "super::wire_number")]
    pub offset: Option<Pair>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "super::wire_number")]
    pub location: Option<Pair>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n_samples: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_tip: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secants: Option<Vec<ExternalSecant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derivative: Option<ExternalDerivative>,
}

#[cfg(test)]
mod tests {
    use super::ExternalRecord;

    #[test]
    fn absent_fields_are_not_serialized() {
        let record = ExternalRecord {
            fn_expr: Some("x^2".to_owned()),
            ..ExternalRecord::default()
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"fn":"x^2"}"#);
    }

    #[test]
    fn infinite_bounds_travel_as_named_numbers() {
        let record = ExternalRecord {
            range: Some([f64::NEG_INFINITY, 3.5]),
            ..ExternalRecord::default()
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"range":["-Infinity",3.5]}"#);

        let parsed: ExternalRecord = serde_json::from_str(&json).expect("parse");
        assert_eq!(parsed, record);
    }

    #[test]
    fn non_finite_points_survive_json() {
        let record = ExternalRecord {
            points: Some(vec![[f64::NAN, 1.0], [f64::INFINITY, 2.0]]),
            ..ExternalRecord::default()
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"points":[["NaN",1.0],["Infinity",2.0]]}"#);

        let parsed: ExternalRecord = serde_json::from_str(&json).expect("parse");
        let points = parsed.points.expect("points");
        assert!(points[0][0].is_nan());
        assert_eq!(points[0][1], 1.0);
        assert_eq!(points[1], [f64::INFINITY, 2.0]);
    }

    #[test]
    fn unknown_named_number_is_rejected() {
        let parsed = serde_json::from_str::<ExternalRecord>(r#"{"range":["lots",1]}"#);
        assert!(parsed.is_err());
    }
}
