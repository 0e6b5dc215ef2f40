//! Typed syntax tree
//!
//! An arena of nodes addressed by [`NodeId`]. The tree is produced upstream,
//! already typed: each node carries its resolved type and, where the position
//! provides one, its contextual type. The lint engine never mutates it.
//!
//! The set of node kinds is closed. Rules match on [`NodeKind`] exhaustively
//! or fall through to a conservative default.

pub mod builder;
pub mod visitor;

pub use builder::ProgramBuilder;
pub use visitor::{walk_node, Visitor};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::TypeId;

/// Index of a node in its [`SyntaxTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source location of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnaryOp {
    /// `void x`
    Void,
    /// `!x`
    Not,
    /// `~x`
    BitNot,
    /// `-x`
    Minus,
    /// `+x`
    Plus,
    /// `typeof x`
    Typeof,
    /// `delete x`
    Delete,
}

/// Logical operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogicalOp {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `??`
    NullishCoalescing,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
            LogicalOp::NullishCoalescing => "??",
        })
    }
}

/// Key of a member access, object property or class member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKey {
    /// `obj.name`, `{ name: v }`
    Name(String),
    /// `obj[expr]`, `{ [expr]: v }`
    Computed(NodeId),
}

impl PropertyKey {
    pub fn name(&self) -> Option<&str> {
        match self {
            PropertyKey::Name(name) => Some(name),
            PropertyKey::Computed(_) => None,
        }
    }
}

/// How an object literal property was written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    /// `{ key: value }`
    Init,
    /// `{ key }`
    Shorthand,
    /// `{ key() {} }`
    Method,
}

/// Kind of a class or interface member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberKind {
    /// Method definition with a body
    Method,
    /// Property definition, optionally initialised
    Property,
    /// Interface or abstract method signature
    Signature,
}

/// Function flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionKind {
    Declaration,
    Expression,
    Arrow,
}

/// Literal value of a literal expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
}

/// The closed set of syntax kinds the engine understands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum NodeKind {
    // ── Structure ──────────────────────────────────────────────────────────
    Program { body: Vec<NodeId> },
    Block { body: Vec<NodeId> },

    // ── Statements ─────────────────────────────────────────────────────────
    ExpressionStatement { expression: NodeId },
    If { test: NodeId, consequent: NodeId, alternate: Option<NodeId> },
    While { test: NodeId, body: NodeId },
    DoWhile { body: NodeId, test: NodeId },
    For {
        init: Option<NodeId>,
        test: Option<NodeId>,
        update: Option<NodeId>,
        body: NodeId,
    },
    Return { argument: Option<NodeId> },
    VariableDeclaration { declarators: Vec<NodeId> },
    VariableDeclarator { id: NodeId, init: Option<NodeId> },

    // ── Declarations ───────────────────────────────────────────────────────
    Function {
        function: FunctionKind,
        name: Option<String>,
        params: Vec<NodeId>,
        body: NodeId,
    },
    ClassDeclaration {
        name: String,
        heritage: Vec<NodeId>,
        members: Vec<NodeId>,
    },
    InterfaceDeclaration {
        name: String,
        heritage: Vec<NodeId>,
        members: Vec<NodeId>,
    },
    ClassMember {
        key: PropertyKey,
        member: MemberKind,
        value: Option<NodeId>,
        #[serde(default)]
        is_static: bool,
    },

    // ── Expressions ────────────────────────────────────────────────────────
    Sequence { expressions: Vec<NodeId> },
    Unary { operator: UnaryOp, argument: NodeId },
    Binary { operator: String, left: NodeId, right: NodeId },
    Logical { operator: LogicalOp, left: NodeId, right: NodeId },
    Conditional { test: NodeId, consequent: NodeId, alternate: NodeId },
    Assignment { operator: String, left: NodeId, right: NodeId },
    Call {
        callee: NodeId,
        arguments: Vec<NodeId>,
        #[serde(default)]
        optional: bool,
    },
    New { callee: NodeId, arguments: Option<Vec<NodeId>> },
    Member {
        object: NodeId,
        property: PropertyKey,
        #[serde(default)]
        optional: bool,
    },
    /// Optional chain wrapper: `a?.b`
    Chain { expression: NodeId },
    Identifier { name: String },
    Literal { value: LiteralValue },
    ObjectLiteral { properties: Vec<NodeId> },
    Property { key: PropertyKey, value: NodeId, property: PropertyKind },
    ArrayLiteral { elements: Vec<NodeId> },
    Spread { argument: NodeId },
    /// JSX-like element: `<Button onClick={handler} />`
    Element { name: String, attributes: Vec<NodeId>, children: Vec<NodeId> },
    /// Named attribute bound to an expression
    Attribute { name: String, value: Option<NodeId> },
}

/// Which rule hook a node is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    Statement,
    Expression,
    /// Sub-parts of a parent node (declarators, properties, members, ...)
    Other,
}

impl NodeKind {
    /// Direct children in source order
    pub fn children(&self) -> Vec<NodeId> {
        fn key_child(key: &PropertyKey) -> Option<NodeId> {
            match key {
                PropertyKey::Computed(id) => Some(*id),
                PropertyKey::Name(_) => None,
            }
        }

        match self {
            NodeKind::Program { body } | NodeKind::Block { body } => body.clone(),
            NodeKind::ExpressionStatement { expression } => vec![*expression],
            NodeKind::If {
                test,
                consequent,
                alternate,
            } => {
                let mut out = vec![*test, *consequent];
                out.extend(*alternate);
                out
            }
            NodeKind::While { test, body } => vec![*test, *body],
            NodeKind::DoWhile { body, test } => vec![*body, *test],
            NodeKind::For {
                init,
                test,
                update,
                body,
            } => {
                let mut out: Vec<NodeId> = [*init, *test, *update].into_iter().flatten().collect();
                out.push(*body);
                out
            }
            NodeKind::Return { argument } => argument.iter().copied().collect(),
            NodeKind::VariableDeclaration { declarators } => declarators.clone(),
            NodeKind::VariableDeclarator { id, init } => {
                let mut out = vec![*id];
                out.extend(*init);
                out
            }
            NodeKind::Function { params, body, .. } => {
                let mut out = params.clone();
                out.push(*body);
                out
            }
            NodeKind::ClassDeclaration {
                heritage, members, ..
            }
            | NodeKind::InterfaceDeclaration {
                heritage, members, ..
            } => heritage.iter().chain(members).copied().collect(),
            NodeKind::ClassMember { key, value, .. } => {
                key_child(key).into_iter().chain(*value).collect()
            }
            NodeKind::Sequence { expressions } => expressions.clone(),
            NodeKind::Unary { argument, .. } => vec![*argument],
            NodeKind::Binary { left, right, .. }
            | NodeKind::Logical { left, right, .. }
            | NodeKind::Assignment { left, right, .. } => vec![*left, *right],
            NodeKind::Conditional {
                test,
                consequent,
                alternate,
            } => vec![*test, *consequent, *alternate],
            NodeKind::Call {
                callee, arguments, ..
            } => {
                let mut out = vec![*callee];
                out.extend(arguments);
                out
            }
            NodeKind::New { callee, arguments } => {
                let mut out = vec![*callee];
                if let Some(arguments) = arguments {
                    out.extend(arguments);
                }
                out
            }
            NodeKind::Member {
                object, property, ..
            } => {
                let mut out = vec![*object];
                out.extend(key_child(property));
                out
            }
            NodeKind::Chain { expression } => vec![*expression],
            NodeKind::Identifier { .. } | NodeKind::Literal { .. } => vec![],
            NodeKind::ObjectLiteral { properties } => properties.clone(),
            NodeKind::Property { key, value, .. } => {
                key_child(key).into_iter().chain(Some(*value)).collect()
            }
            NodeKind::ArrayLiteral { elements } => elements.clone(),
            NodeKind::Spread { argument } => vec![*argument],
            NodeKind::Element {
                attributes,
                children,
                ..
            } => attributes.iter().chain(children).copied().collect(),
            NodeKind::Attribute { value, .. } => value.iter().copied().collect(),
        }
    }

    pub fn category(&self) -> NodeCategory {
        match self {
            NodeKind::Block { .. }
            | NodeKind::ExpressionStatement { .. }
            | NodeKind::If { .. }
            | NodeKind::While { .. }
            | NodeKind::DoWhile { .. }
            | NodeKind::For { .. }
            | NodeKind::Return { .. }
            | NodeKind::VariableDeclaration { .. }
            | NodeKind::ClassDeclaration { .. }
            | NodeKind::InterfaceDeclaration { .. }
            | NodeKind::Function {
                function: FunctionKind::Declaration,
                ..
            } => NodeCategory::Statement,

            NodeKind::Function { .. }
            | NodeKind::Sequence { .. }
            | NodeKind::Unary { .. }
            | NodeKind::Binary { .. }
            | NodeKind::Logical { .. }
            | NodeKind::Conditional { .. }
            | NodeKind::Assignment { .. }
            | NodeKind::Call { .. }
            | NodeKind::New { .. }
            | NodeKind::Member { .. }
            | NodeKind::Chain { .. }
            | NodeKind::Identifier { .. }
            | NodeKind::Literal { .. }
            | NodeKind::ObjectLiteral { .. }
            | NodeKind::ArrayLiteral { .. }
            | NodeKind::Element { .. } => NodeCategory::Expression,

            NodeKind::Program { .. }
            | NodeKind::VariableDeclarator { .. }
            | NodeKind::ClassMember { .. }
            | NodeKind::Property { .. }
            | NodeKind::Spread { .. }
            | NodeKind::Attribute { .. } => NodeCategory::Other,
        }
    }

    /// Heritage clauses and members of a class or interface declaration
    pub fn class_like(&self) -> Option<(&[NodeId], &[NodeId])> {
        match self {
            NodeKind::ClassDeclaration {
                heritage, members, ..
            }
            | NodeKind::InterfaceDeclaration {
                heritage, members, ..
            } => Some((heritage.as_slice(), members.as_slice())),
            _ => None,
        }
    }
}

/// A single typed node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(flatten)]
    pub kind: NodeKind,
    #[serde(default)]
    pub span: Span,
    /// Resolved type of the node, if the checker assigned one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeId>,
    /// Expected type at this position, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contextual_type: Option<TypeId>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            span: Span::default(),
            ty: None,
            contextual_type: None,
        }
    }
}

/// Arena-backed typed syntax tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SyntaxTree {
    pub fn new(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(|n| &n.kind)
    }

    /// Span of a node; unknown ids get an empty span
    pub fn span(&self, id: NodeId) -> Span {
        self.get(id).map(|n| n.span).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Strip optional-chain wrappers: `a?.b` → `a.b`
    pub fn skip_chain(&self, mut id: NodeId) -> NodeId {
        while let Some(NodeKind::Chain { expression }) = self.kind(id) {
            id = *expression;
        }
        id
    }
}
