//! Resolved-type model
//!
//! [`TypeTable`] stores the types an upstream checker resolved, and
//! [`TypeChecker`] is the query surface the lint rules are written against.

pub mod checker;
pub mod table;
pub mod ty;

pub use checker::TypeChecker;
pub use table::TypeTable;
pub use ty::{
    LiteralType, ObjectType, Parameter, PrimitiveType, PropertySignature, Signature, Type, TypeId,
    TypeParameter,
};
