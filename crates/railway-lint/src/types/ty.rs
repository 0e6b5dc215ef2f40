//! Core type definitions for the resolved-type model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a type in a [`TypeTable`](super::TypeTable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    /// `any`
    pub const ANY: TypeId = TypeId(0);
    /// `unknown`
    pub const UNKNOWN: TypeId = TypeId(1);
    /// `never`
    pub const NEVER: TypeId = TypeId(2);
    /// `void`
    pub const VOID: TypeId = TypeId(3);
    /// `undefined`
    pub const UNDEFINED: TypeId = TypeId(4);
    /// `null`
    pub const NULL: TypeId = TypeId(5);
    /// `boolean`
    pub const BOOLEAN: TypeId = TypeId(6);
    /// `number`
    pub const NUMBER: TypeId = TypeId(7);
    /// `string`
    pub const STRING: TypeId = TypeId(8);

    /// Number of pre-interned primitive ids.
    pub const PRIMITIVE_COUNT: u32 = 9;

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Primitive (intrinsic) types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Any,
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
}

impl PrimitiveType {
    /// The well-known id this primitive is pre-interned at.
    pub fn type_id(self) -> TypeId {
        match self {
            PrimitiveType::Any => TypeId::ANY,
            PrimitiveType::Unknown => TypeId::UNKNOWN,
            PrimitiveType::Never => TypeId::NEVER,
            PrimitiveType::Void => TypeId::VOID,
            PrimitiveType::Undefined => TypeId::UNDEFINED,
            PrimitiveType::Null => TypeId::NULL,
            PrimitiveType::Boolean => TypeId::BOOLEAN,
            PrimitiveType::Number => TypeId::NUMBER,
            PrimitiveType::String => TypeId::STRING,
        }
    }

    /// All primitives in pre-interning order.
    pub const ALL: [PrimitiveType; 9] = [
        PrimitiveType::Any,
        PrimitiveType::Unknown,
        PrimitiveType::Never,
        PrimitiveType::Void,
        PrimitiveType::Undefined,
        PrimitiveType::Null,
        PrimitiveType::Boolean,
        PrimitiveType::Number,
        PrimitiveType::String,
    ];
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveType::Any => "any",
            PrimitiveType::Unknown => "unknown",
            PrimitiveType::Never => "never",
            PrimitiveType::Void => "void",
            PrimitiveType::Undefined => "undefined",
            PrimitiveType::Null => "null",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Number => "number",
            PrimitiveType::String => "string",
        };
        f.write_str(name)
    }
}

/// Literal types: `'success'`, `42`, `true`
///
/// Number literals keep their source text so the type stays hashable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum LiteralType {
    String(String),
    Number(String),
    Boolean(bool),
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralType::String(s) => write!(f, "\"{}\"", s),
            LiteralType::Number(n) => f.write_str(n),
            LiteralType::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// A single parameter of a call or construct signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name (display only)
    pub name: String,
    /// Declared parameter type; for a rest parameter this is the array or tuple type
    pub ty: TypeId,
    /// Whether this is a `...rest` parameter (only ever the last one)
    #[serde(default)]
    pub rest: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            rest: false,
        }
    }

    pub fn rest(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            rest: true,
        }
    }
}

/// Call or construct signature: `(a: A, ...rest: B[]) => R`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    /// Parameters in declaration order
    pub params: Vec<Parameter>,
    /// Return type
    pub return_type: TypeId,
}

impl Signature {
    pub fn new(params: Vec<Parameter>, return_type: TypeId) -> Self {
        Self {
            params,
            return_type,
        }
    }
}

/// Object property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertySignature {
    /// Property name
    pub name: String,
    /// Property type
    pub ty: TypeId,
}

/// Object type: `{ tag: 'success'; success: T }`, a class instance, an interface
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    /// Display name for named shapes (classes, interfaces, aliases)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Properties in declaration order
    #[serde(default)]
    pub properties: Vec<PropertySignature>,
    /// Call signatures (overloads in declaration order)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub call_signatures: Vec<Signature>,
    /// Construct signatures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub construct_signatures: Vec<Signature>,
}

impl ObjectType {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, ty: TypeId) -> Self {
        self.properties.push(PropertySignature {
            name: name.into(),
            ty,
        });
        self
    }

    pub fn with_call_signature(mut self, signature: Signature) -> Self {
        self.call_signatures.push(signature);
        self
    }

    pub fn with_construct_signature(mut self, signature: Signature) -> Self {
        self.construct_signatures.push(signature);
        self
    }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<TypeId> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.ty)
    }
}

/// Type parameter: `T extends C`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeParameter {
    /// Type variable name
    pub name: String,
    /// Constraint: `T extends C`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<TypeId>,
}

/// A resolved static type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Type {
    /// Intrinsic type
    Primitive { primitive: PrimitiveType },

    /// Literal type
    Literal { literal: LiteralType },

    /// Object type (also functions and classes, via signatures)
    Object(ObjectType),

    /// Union type: T1 | T2 | ... | Tn
    Union { members: Vec<TypeId> },

    /// Array type: T[]
    Array { element: TypeId },

    /// Tuple type: [T1, T2, ..., Tn]
    Tuple { elements: Vec<TypeId> },

    /// Unresolved generic: T
    TypeParameter(TypeParameter),
}

impl Type {
    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            Type::Primitive { primitive } => Some(*primitive),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            Type::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn is_union(&self) -> bool {
        matches!(self, Type::Union { .. })
    }

    /// Ids of the types this type refers to directly.
    pub fn referenced_types(&self) -> Vec<TypeId> {
        match self {
            Type::Primitive { .. } | Type::Literal { .. } => vec![],
            Type::Object(o) => {
                let mut ids: Vec<TypeId> = o.properties.iter().map(|p| p.ty).collect();
                for sig in o.call_signatures.iter().chain(&o.construct_signatures) {
                    ids.extend(sig.params.iter().map(|p| p.ty));
                    ids.push(sig.return_type);
                }
                ids
            }
            Type::Union { members } => members.clone(),
            Type::Array { element } => vec![*element],
            Type::Tuple { elements } => elements.clone(),
            Type::TypeParameter(tp) => tp.constraint.into_iter().collect(),
        }
    }
}
