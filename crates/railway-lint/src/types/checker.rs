//! The type-checker collaborator interface
//!
//! Parsing and type resolution happen upstream. The lint engine only reads
//! what the checker already computed, through this trait. Every query is
//! total: missing information is reported as `None`, an empty list, or the
//! `unknown` type, never as an error.

use crate::syntax::NodeId;

use super::ty::{Signature, TypeId};

/// Read-only view of the resolved types of one typed syntax tree
pub trait TypeChecker {
    /// Type of an expression or declaration node (`unknown` when unresolved)
    fn type_at(&self, node: NodeId) -> TypeId;

    /// Type the node is expected to satisfy, where the position provides one
    fn contextual_type(&self, node: NodeId) -> Option<TypeId>;

    /// Widened, generic-resolved form of `ty`
    fn apparent_type(&self, ty: TypeId) -> TypeId;

    /// Flattened union members of `ty`; a non-union is its own single member
    fn union_members(&self, ty: TypeId) -> Vec<TypeId>;

    /// Type of the property `name` on `ty`
    fn property(&self, ty: TypeId, name: &str) -> Option<TypeId>;

    fn call_signatures(&self, ty: TypeId) -> Vec<Signature>;

    fn construct_signatures(&self, ty: TypeId) -> Vec<Signature>;

    /// Value of a string literal type
    fn string_literal_value(&self, ty: TypeId) -> Option<&str>;

    /// Whether `ty` is exactly `void`
    fn is_void(&self, ty: TypeId) -> bool;

    fn is_array(&self, ty: TypeId) -> bool;

    fn is_tuple(&self, ty: TypeId) -> bool;

    /// Element type of an array or element types of a tuple
    fn type_arguments(&self, ty: TypeId) -> Vec<TypeId>;

    /// Display name used in diagnostics
    fn type_to_string(&self, ty: TypeId) -> String;
}
