use serde::{Deserialize, Serialize};

use crate::normalize::ExportTarget;

/// Editing-session bootstrap configuration.
///
/// Serializable so hosts can persist it next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// First identity key handed out; lets a host keep keys disjoint from
    /// ones it already issued.
    #[serde(default)]
    pub first_key: u64,
    /// Destination used by [`PlotSession::export`](super::PlotSession::export).
    #[serde(default)]
    pub export_target: ExportTarget,
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_first_key(mut self, first_key: u64) -> Self {
        self.first_key = first_key;
        self
    }

    #[must_use]
    pub fn with_export_target(mut self, export_target: ExportTarget) -> Self {
        self.export_target = export_target;
        self
    }
}
