pub mod external;
pub mod record;
pub mod variant;
mod wire_number;

pub use external::{ExternalDerivative, ExternalRecord, ExternalSecant};
pub use record::{
    CanonicalRecord, Derivative, ImplicitShape, ItemKey, KeyAllocator, LinearShape,
    ParametricShape, PointsShape, PolarShape, RecordShape, Secant, TextShape, VectorShape,
};
pub use variant::{GraphType, Pair, Variant};
