//! Type table: arena storage and structural queries for resolved types

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::ty::{
    LiteralType, ObjectType, Parameter, PrimitiveType, Signature, Type, TypeId, TypeParameter,
};

/// Arena of resolved types
///
/// Identical types are interned to the same [`TypeId`]. Primitives live at the
/// fixed ids exposed as constants on `TypeId`. Lookups with an id that is not
/// in the table behave as if the id named `unknown`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "Vec<Type>", into = "Vec<Type>")]
pub struct TypeTable {
    /// Storage for all types, indexed by TypeId
    types: Vec<Type>,

    /// Reverse mapping from Type to TypeId for interning
    type_to_id: FxHashMap<Type, TypeId>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Type>> for TypeTable {
    fn from(types: Vec<Type>) -> Self {
        let type_to_id = types
            .iter()
            .enumerate()
            .map(|(i, ty)| (ty.clone(), TypeId(i as u32)))
            .collect();
        TypeTable { types, type_to_id }
    }
}

impl From<TypeTable> for Vec<Type> {
    fn from(table: TypeTable) -> Self {
        table.types
    }
}

static UNKNOWN: Type = Type::Primitive {
    primitive: PrimitiveType::Unknown,
};

impl TypeTable {
    /// Create a table holding only the pre-interned primitives
    pub fn new() -> Self {
        let mut table = TypeTable {
            types: Vec::new(),
            type_to_id: FxHashMap::default(),
        };
        for primitive in PrimitiveType::ALL {
            table.intern(Type::Primitive { primitive });
        }
        table
    }

    /// Intern a type, returning its TypeId
    pub fn intern(&mut self, ty: Type) -> TypeId {
        if let Some(&id) = self.type_to_id.get(&ty) {
            return id;
        }

        let id = TypeId(self.types.len() as u32);
        self.types.push(ty.clone());
        self.type_to_id.insert(ty, id);
        id
    }

    /// Get a type by its TypeId
    pub fn get(&self, id: TypeId) -> Option<&Type> {
        self.types.get(id.index())
    }

    /// Get a type by its TypeId, treating unknown ids as `unknown`
    pub fn resolve(&self, id: TypeId) -> &Type {
        self.get(id).unwrap_or(&UNKNOWN)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, id: TypeId) -> bool {
        id.index() < self.types.len()
    }

    /// Iterate over all `(id, type)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &Type)> {
        self.types
            .iter()
            .enumerate()
            .map(|(i, ty)| (TypeId(i as u32), ty))
    }

    // ── Constructors ───────────────────────────────────────────────────────

    pub fn string_literal(&mut self, value: impl Into<String>) -> TypeId {
        self.intern(Type::Literal {
            literal: LiteralType::String(value.into()),
        })
    }

    pub fn number_literal(&mut self, value: f64) -> TypeId {
        self.intern(Type::Literal {
            literal: LiteralType::Number(value.to_string()),
        })
    }

    pub fn boolean_literal(&mut self, value: bool) -> TypeId {
        self.intern(Type::Literal {
            literal: LiteralType::Boolean(value),
        })
    }

    pub fn object(&mut self, object: ObjectType) -> TypeId {
        self.intern(Type::Object(object))
    }

    /// Union of `members`; a single member is returned unchanged
    pub fn union(&mut self, members: Vec<TypeId>) -> TypeId {
        if members.len() == 1 {
            return members[0];
        }
        self.intern(Type::Union { members })
    }

    pub fn array(&mut self, element: TypeId) -> TypeId {
        self.intern(Type::Array { element })
    }

    pub fn tuple(&mut self, elements: Vec<TypeId>) -> TypeId {
        self.intern(Type::Tuple { elements })
    }

    /// Anonymous function type with a single call signature
    pub fn function(&mut self, params: Vec<Parameter>, return_type: TypeId) -> TypeId {
        self.object(ObjectType::new().with_call_signature(Signature::new(params, return_type)))
    }

    /// Overloaded function type: one call signature per entry
    pub fn overloaded(&mut self, signatures: Vec<Signature>) -> TypeId {
        self.object(ObjectType {
            call_signatures: signatures,
            ..ObjectType::default()
        })
    }

    pub fn type_parameter(
        &mut self,
        name: impl Into<String>,
        constraint: Option<TypeId>,
    ) -> TypeId {
        self.intern(Type::TypeParameter(TypeParameter {
            name: name.into(),
            constraint,
        }))
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Resolve type parameters through their constraints
    ///
    /// Unconstrained parameters (and constraint cycles) become `unknown`.
    pub fn apparent_type(&self, id: TypeId) -> TypeId {
        let mut current = id;
        let mut seen = FxHashSet::default();
        loop {
            match self.get(current) {
                Some(Type::TypeParameter(tp)) => {
                    if !seen.insert(current) {
                        return TypeId::UNKNOWN;
                    }
                    match tp.constraint {
                        Some(constraint) => current = constraint,
                        None => return TypeId::UNKNOWN,
                    }
                }
                Some(_) => return current,
                None => return TypeId::UNKNOWN,
            }
        }
    }

    /// Flattened union members; a non-union type is its own single member
    pub fn union_members(&self, id: TypeId) -> Vec<TypeId> {
        let mut out = Vec::new();
        let mut seen = FxHashSet::default();
        self.collect_union_members(id, &mut out, &mut seen);
        out
    }

    fn collect_union_members(
        &self,
        id: TypeId,
        out: &mut Vec<TypeId>,
        seen: &mut FxHashSet<TypeId>,
    ) {
        match self.get(id) {
            Some(Type::Union { members }) => {
                if !seen.insert(id) {
                    return;
                }
                for &member in members {
                    self.collect_union_members(member, out, seen);
                }
            }
            _ => out.push(id),
        }
    }

    pub fn property(&self, id: TypeId, name: &str) -> Option<TypeId> {
        self.resolve(id).as_object()?.property(name)
    }

    pub fn call_signatures(&self, id: TypeId) -> &[Signature] {
        match self.resolve(id) {
            Type::Object(o) => &o.call_signatures,
            _ => &[],
        }
    }

    pub fn construct_signatures(&self, id: TypeId) -> &[Signature] {
        match self.resolve(id) {
            Type::Object(o) => &o.construct_signatures,
            _ => &[],
        }
    }

    pub fn string_literal_value(&self, id: TypeId) -> Option<&str> {
        match self.resolve(id) {
            Type::Literal {
                literal: LiteralType::String(s),
            } => Some(s),
            _ => None,
        }
    }

    pub fn is_void(&self, id: TypeId) -> bool {
        self.resolve(id).as_primitive() == Some(PrimitiveType::Void)
    }

    pub fn is_array(&self, id: TypeId) -> bool {
        matches!(self.resolve(id), Type::Array { .. })
    }

    pub fn is_tuple(&self, id: TypeId) -> bool {
        matches!(self.resolve(id), Type::Tuple { .. })
    }

    /// Element type of an array, element types of a tuple, empty otherwise
    pub fn type_arguments(&self, id: TypeId) -> Vec<TypeId> {
        match self.resolve(id) {
            Type::Array { element } => vec![*element],
            Type::Tuple { elements } => elements.clone(),
            _ => vec![],
        }
    }

    /// Render a type for diagnostics
    ///
    /// Named object types print their name; anonymous ones print their shape.
    pub fn display(&self, id: TypeId) -> String {
        let mut out = String::new();
        self.write_type(id, &mut out, 0);
        out
    }

    fn write_type(&self, id: TypeId, out: &mut String, depth: usize) {
        // Shapes can be self-referential through their properties.
        if depth > 8 {
            out.push_str("...");
            return;
        }
        match self.resolve(id) {
            Type::Primitive { primitive } => out.push_str(&primitive.to_string()),
            Type::Literal { literal } => out.push_str(&literal.to_string()),
            Type::Object(o) => {
                if let Some(name) = &o.name {
                    out.push_str(name);
                } else if o.properties.is_empty() && o.call_signatures.len() == 1 {
                    self.write_signature(&o.call_signatures[0], out, depth);
                } else {
                    self.write_object(o, out, depth);
                }
            }
            Type::Union { members } => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        out.push_str(" | ");
                    }
                    self.write_type(*member, out, depth + 1);
                }
            }
            Type::Array { element } => {
                let needs_parens = self.resolve(*element).is_union();
                if needs_parens {
                    out.push('(');
                }
                self.write_type(*element, out, depth + 1);
                if needs_parens {
                    out.push(')');
                }
                out.push_str("[]");
            }
            Type::Tuple { elements } => {
                out.push('[');
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_type(*element, out, depth + 1);
                }
                out.push(']');
            }
            Type::TypeParameter(tp) => out.push_str(&tp.name),
        }
    }

    fn write_object(&self, o: &ObjectType, out: &mut String, depth: usize) {
        out.push_str("{ ");
        for (i, prop) in o.properties.iter().enumerate() {
            if i > 0 {
                out.push_str("; ");
            }
            out.push_str(&prop.name);
            out.push_str(": ");
            self.write_type(prop.ty, out, depth + 1);
        }
        for (i, sig) in o.call_signatures.iter().enumerate() {
            if i > 0 || !o.properties.is_empty() {
                out.push_str("; ");
            }
            self.write_signature(sig, out, depth);
        }
        out.push_str(" }");
    }

    fn write_signature(&self, sig: &Signature, out: &mut String, depth: usize) {
        out.push('(');
        for (i, param) in sig.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if param.rest {
                out.push_str("...");
            }
            out.push_str(&param.name);
            out.push_str(": ");
            self.write_type(param.ty, out, depth + 1);
        }
        out.push_str(") => ");
        self.write_type(sig.return_type, out, depth + 1);
    }
}
