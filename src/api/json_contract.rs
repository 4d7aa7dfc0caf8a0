use serde::{Deserialize, Serialize};

use crate::core::ExternalRecord;
use crate::error::{PlotError, PlotResult};
use crate::extensions::{ExternalAnnotation, ExternalGraphOptions};

pub const PLOT_DOCUMENT_JSON_SCHEMA_V1: u32 = 1;

/// Everything a save/share flow carries, in external form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotDocument {
    #[serde(default)]
    pub data: Vec<ExternalRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<ExternalAnnotation>,
    #[serde(default)]
    pub options: ExternalGraphOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDocumentJsonContractV1 {
    pub schema_version: u32,
    pub document: PlotDocument,
}

impl PlotDocument {
    #[must_use]
    pub fn from_data(data: Vec<ExternalRecord>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = PlotDocumentJsonContractV1 {
            schema_version: PLOT_DOCUMENT_JSON_SCHEMA_V1,
            document: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize plot document contract v1: {e}"))
        })
    }

    /// Accepts the versioned envelope or a bare list of external records.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(data) = serde_json::from_str::<Vec<ExternalRecord>>(input) {
            return Ok(Self::from_data(data));
        }
        let payload: PlotDocumentJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse plot document json payload: {e}"))
        })?;
        if payload.schema_version != PLOT_DOCUMENT_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported plot document schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.document)
    }
}
