mod json_contract;
mod session;
mod session_config;

pub use json_contract::{PLOT_DOCUMENT_JSON_SCHEMA_V1, PlotDocument, PlotDocumentJsonContractV1};
pub use session::PlotSession;
pub use session_config::SessionConfig;
