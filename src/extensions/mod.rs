//! Sibling normalizers for the rest of a plot document.

pub mod annotations;
pub mod graph_options;

pub use annotations::{
    Annotation, AnnotationAxis, ExternalAnnotation, export_annotations, import_annotations,
};
pub use graph_options::{
    AxisOptions, AxisScale, ExternalAxisOptions, ExternalGraphOptions, GraphOptions,
};
