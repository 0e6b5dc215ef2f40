//! A typed syntax tree together with its type table
//!
//! [`Program`] is the bundled [`TypeChecker`] implementation. Hosts either
//! build one with [`ProgramBuilder`](crate::syntax::ProgramBuilder) or hand
//! over the JSON interchange form:
//!
//! ```json
//! {
//!   "types": [{ "type": "primitive", "primitive": "any" }, ...],
//!   "tree": { "root": 4, "nodes": [{ "kind": "identifier", "name": "f", "ty": 12 }, ...] }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ProgramError;
use crate::syntax::{NodeId, SyntaxTree};
use crate::types::{PrimitiveType, Signature, Type, TypeChecker, TypeId, TypeTable};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    types: TypeTable,
    tree: SyntaxTree,
}

impl Program {
    pub fn new(tree: SyntaxTree, types: TypeTable) -> Self {
        Self { types, tree }
    }

    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Parse and validate the JSON interchange form
    pub fn from_json_str(source: &str) -> Result<Self, ProgramError> {
        let program: Program = serde_json::from_str(source)?;
        program.validate()?;
        Ok(program)
    }

    pub fn to_json_string(&self) -> Result<String, ProgramError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check that every id the program refers to resolves
    ///
    /// Children must precede their parents, which also rules out cycles.
    pub fn validate(&self) -> Result<(), ProgramError> {
        for primitive in PrimitiveType::ALL {
            let id = primitive.type_id();
            match self.types.get(id) {
                Some(Type::Primitive { primitive: p }) if *p == primitive => {}
                _ => return Err(ProgramError::PrimitiveMismatch(id)),
            }
        }

        for (id, ty) in self.types.iter() {
            for referenced in ty.referenced_types() {
                if !self.types.contains(referenced) {
                    return Err(ProgramError::MissingType {
                        owner: format!("type {}", id.0),
                        ty: referenced,
                    });
                }
            }
        }

        if self.tree.get(self.tree.root()).is_none() {
            return Err(ProgramError::MissingRoot(self.tree.root()));
        }

        let len = self.tree.len();
        for (id, node) in self.tree.iter() {
            for child in node.kind.children() {
                if child.index() >= len {
                    return Err(ProgramError::MissingNode { node: id, child });
                }
                if child >= id {
                    return Err(ProgramError::ChildOrder { node: id, child });
                }
            }
            for ty in node.ty.iter().chain(node.contextual_type.iter()) {
                if !self.types.contains(*ty) {
                    return Err(ProgramError::MissingType {
                        owner: format!("node {}", id),
                        ty: *ty,
                    });
                }
            }
        }

        Ok(())
    }
}

impl TypeChecker for Program {
    fn type_at(&self, node: NodeId) -> TypeId {
        self.tree
            .get(node)
            .and_then(|n| n.ty)
            .unwrap_or(TypeId::UNKNOWN)
    }

    fn contextual_type(&self, node: NodeId) -> Option<TypeId> {
        self.tree.get(node).and_then(|n| n.contextual_type)
    }

    fn apparent_type(&self, ty: TypeId) -> TypeId {
        self.types.apparent_type(ty)
    }

    fn union_members(&self, ty: TypeId) -> Vec<TypeId> {
        self.types.union_members(ty)
    }

    fn property(&self, ty: TypeId, name: &str) -> Option<TypeId> {
        self.types.property(ty, name)
    }

    fn call_signatures(&self, ty: TypeId) -> Vec<Signature> {
        self.types.call_signatures(ty).to_vec()
    }

    fn construct_signatures(&self, ty: TypeId) -> Vec<Signature> {
        self.types.construct_signatures(ty).to_vec()
    }

    fn string_literal_value(&self, ty: TypeId) -> Option<&str> {
        self.types.string_literal_value(ty)
    }

    fn is_void(&self, ty: TypeId) -> bool {
        self.types.is_void(ty)
    }

    fn is_array(&self, ty: TypeId) -> bool {
        self.types.is_array(ty)
    }

    fn is_tuple(&self, ty: TypeId) -> bool {
        self.types.is_tuple(ty)
    }

    fn type_arguments(&self, ty: TypeId) -> Vec<TypeId> {
        self.types.type_arguments(ty)
    }

    fn type_to_string(&self, ty: TypeId) -> String {
        self.types.display(ty)
    }
}
