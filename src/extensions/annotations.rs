use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ItemKey, KeyAllocator};
use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationAxis {
    X,
    Y,
}

/// Editor-side annotation line. `value` keeps the raw form text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub key: ItemKey,
    pub axis: AnnotationAxis,
    pub value: String,
    pub text: String,
}

/// Renderer-side annotation: exactly one of `x`/`y` is expected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalAnnotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Imports annotations; an item without an `x` value is read as a `y` line.
pub fn import_annotations(
    items: &[ExternalAnnotation],
    keys: &mut KeyAllocator,
) -> PlotResult<Vec<Annotation>> {
    items
        .iter()
        .map(|item| -> PlotResult<Annotation> {
            let (axis, value) = match item.x {
                Some(x) => (AnnotationAxis::X, x),
                None => (AnnotationAxis::Y, item.y.unwrap_or(0.0)),
            };
            Ok(Annotation {
                key: keys.next_key()?,
                axis,
                value: value.to_string(),
                text: item.text.clone().unwrap_or_default(),
            })
        })
        .collect()
}

pub fn export_annotations(items: &[Annotation]) -> PlotResult<Vec<ExternalAnnotation>> {
    let exported = items
        .iter()
        .map(|item| {
            let value = item.value.trim().parse::<f64>().map_err(|_| {
                PlotError::InvalidData(format!(
                    "annotation value `{}` is not a number",
                    item.value
                ))
            })?;
            let (x, y) = match item.axis {
                AnnotationAxis::X => (Some(value), None),
                AnnotationAxis::Y => (None, Some(value)),
            };
            Ok(ExternalAnnotation {
                x,
                y,
                text: (!item.text.is_empty()).then(|| item.text.clone()),
            })
        })
        .collect::<PlotResult<Vec<_>>>()?;
    debug!(count = exported.len(), "exported annotations");
    Ok(exported)
}
