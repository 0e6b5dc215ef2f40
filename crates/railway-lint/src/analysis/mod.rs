//! Type classification shared by the lint rules

pub mod result_type;
pub mod signature;

pub use result_type::{ResultClassifier, ResultShape};
pub use signature::{CallableClassifier, SignatureKind};
