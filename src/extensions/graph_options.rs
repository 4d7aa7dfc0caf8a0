use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisOptions {
    pub invert: bool,
    pub label: String,
    pub scale: AxisScale,
}

/// Complete editor-side graph options.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphOptions {
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    pub grid: bool,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExternalAxisOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invert: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<AxisScale>,
}

impl ExternalAxisOptions {
    fn is_empty(&self) -> bool {
        self.invert.is_none() && self.label.is_none() && self.scale.is_none()
    }
}

/// Sparse graph options as exchanged with the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalGraphOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<ExternalAxisOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<ExternalAxisOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl GraphOptions {
    #[must_use]
    pub fn from_external(options: &ExternalGraphOptions) -> Self {
        Self {
            x_axis: import_axis(options.x_axis.as_ref()),
            y_axis: import_axis(options.y_axis.as_ref()),
            grid: options.grid.unwrap_or(false),
            title: options.title.clone().unwrap_or_default(),
        }
    }

    /// Sparse form: default fields are dropped, and so is an all-default axis.
    #[must_use]
    pub fn to_external(&self) -> ExternalGraphOptions {
        ExternalGraphOptions {
            x_axis: export_axis(&self.x_axis),
            y_axis: export_axis(&self.y_axis),
            grid: self.grid.then_some(true),
            title: non_empty(&self.title),
        }
    }
}

fn import_axis(axis: Option<&ExternalAxisOptions>) -> AxisOptions {
    let Some(axis) = axis else {
        return AxisOptions::default();
    };
    AxisOptions {
        invert: axis.invert.unwrap_or(false),
        label: axis.label.clone().unwrap_or_default(),
        scale: axis.scale.unwrap_or_default(),
    }
}

fn export_axis(axis: &AxisOptions) -> Option<ExternalAxisOptions> {
    let exported = ExternalAxisOptions {
        invert: axis.invert.then_some(true),
        label: non_empty(&axis.label),
        scale: (axis.scale != AxisScale::default()).then_some(axis.scale),
    };
    (!exported.is_empty()).then_some(exported)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
