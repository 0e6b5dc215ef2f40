//! Programmatic construction of typed trees
//!
//! Children must be built before their parents, so ids handed out by the
//! builder always satisfy the arena ordering [`Program`] relies on.
//!
//! ```ignore
//! let mut b = ProgramBuilder::new();
//! let result = b.result_type(TypeId::NUMBER, TypeId::STRING);
//! let make = b.types_mut().function(vec![], result);
//! let callee = b.ident("makeResult", make);
//! let call = b.call(callee, vec![], result);
//! let stmt = b.expr_stmt(call);
//! let program = b.finish(vec![stmt]);
//! ```

use crate::analysis::ResultShape;
use crate::program::Program;
use crate::types::{ObjectType, TypeId, TypeTable};

use super::{
    FunctionKind, LiteralValue, LogicalOp, MemberKind, Node, NodeId, NodeKind, PropertyKey,
    PropertyKind, Span, SyntaxTree, UnaryOp,
};

/// Incremental builder for a [`Program`]
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    types: TypeTable,
    nodes: Vec<Node>,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeTable {
        &mut self.types
    }

    /// Append a node and return its id
    pub fn node(&mut self, kind: NodeKind, ty: Option<TypeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let mut node = Node::new(kind);
        node.ty = ty;
        self.nodes.push(node);
        id
    }

    /// Type previously assigned to `id` (`unknown` if none)
    pub fn type_of(&self, id: NodeId) -> TypeId {
        self.nodes
            .get(id.index())
            .and_then(|n| n.ty)
            .unwrap_or(TypeId::UNKNOWN)
    }

    pub fn set_type(&mut self, id: NodeId, ty: TypeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.ty = Some(ty);
        }
    }

    pub fn set_contextual_type(&mut self, id: NodeId, ty: TypeId) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.contextual_type = Some(ty);
        }
    }

    pub fn set_span(&mut self, id: NodeId, span: Span) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.span = span;
        }
    }

    /// Place `id` on `line` (column 1) and hand the id back
    pub fn at_line(&mut self, id: NodeId, line: u32) -> NodeId {
        let start = self.nodes.get(id.index()).map(|n| n.span.start).unwrap_or(0);
        self.set_span(id, Span::new(start, start, line, 1));
        id
    }

    // ── Result types ───────────────────────────────────────────────────────

    /// One arm of a Result-like union: `{ tag: 'success'; success: T }`
    pub fn result_variant(&mut self, shape: &ResultShape, marker: &str, value: TypeId) -> TypeId {
        let tag = self.types.string_literal(marker);
        self.types.object(
            ObjectType::new()
                .with_property(shape.discriminant.as_str(), tag)
                .with_property(marker, value),
        )
    }

    /// Result-like union using the default shape
    pub fn result_type(&mut self, success: TypeId, failure: TypeId) -> TypeId {
        self.result_type_with(&ResultShape::default(), success, failure)
    }

    pub fn result_type_with(
        &mut self,
        shape: &ResultShape,
        success: TypeId,
        failure: TypeId,
    ) -> TypeId {
        let ok = self.result_variant(shape, &shape.success, success);
        let err = self.result_variant(shape, &shape.failure, failure);
        self.types.union(vec![ok, err])
    }

    // ── Expressions ────────────────────────────────────────────────────────

    pub fn ident(&mut self, name: &str, ty: TypeId) -> NodeId {
        self.node(
            NodeKind::Identifier {
                name: name.to_string(),
            },
            Some(ty),
        )
    }

    pub fn literal(&mut self, value: LiteralValue, ty: TypeId) -> NodeId {
        self.node(NodeKind::Literal { value }, Some(ty))
    }

    pub fn string(&mut self, value: &str) -> NodeId {
        let ty = self.types.string_literal(value);
        self.literal(LiteralValue::String(value.to_string()), ty)
    }

    pub fn number(&mut self, value: f64) -> NodeId {
        let ty = self.types.number_literal(value);
        self.literal(LiteralValue::Number(value), ty)
    }

    pub fn boolean(&mut self, value: bool) -> NodeId {
        let ty = self.types.boolean_literal(value);
        self.literal(LiteralValue::Boolean(value), ty)
    }

    pub fn call(&mut self, callee: NodeId, arguments: Vec<NodeId>, ty: TypeId) -> NodeId {
        self.node(
            NodeKind::Call {
                callee,
                arguments,
                optional: false,
            },
            Some(ty),
        )
    }

    pub fn optional_call(&mut self, callee: NodeId, arguments: Vec<NodeId>, ty: TypeId) -> NodeId {
        self.node(
            NodeKind::Call {
                callee,
                arguments,
                optional: true,
            },
            Some(ty),
        )
    }

    pub fn new_expr(
        &mut self,
        callee: NodeId,
        arguments: Option<Vec<NodeId>>,
        ty: TypeId,
    ) -> NodeId {
        self.node(NodeKind::New { callee, arguments }, Some(ty))
    }

    pub fn member(&mut self, object: NodeId, name: &str, ty: TypeId) -> NodeId {
        self.node(
            NodeKind::Member {
                object,
                property: PropertyKey::Name(name.to_string()),
                optional: false,
            },
            Some(ty),
        )
    }

    pub fn optional_member(&mut self, object: NodeId, name: &str, ty: TypeId) -> NodeId {
        self.node(
            NodeKind::Member {
                object,
                property: PropertyKey::Name(name.to_string()),
                optional: true,
            },
            Some(ty),
        )
    }

    pub fn computed_member(&mut self, object: NodeId, key: NodeId, ty: TypeId) -> NodeId {
        self.node(
            NodeKind::Member {
                object,
                property: PropertyKey::Computed(key),
                optional: false,
            },
            Some(ty),
        )
    }

    /// Optional-chain wrapper carrying the type of `expression`
    pub fn chain(&mut self, expression: NodeId) -> NodeId {
        let ty = self.type_of(expression);
        self.node(NodeKind::Chain { expression }, Some(ty))
    }

    /// Comma expression typed as its last operand
    pub fn sequence(&mut self, expressions: Vec<NodeId>) -> NodeId {
        let ty = expressions
            .last()
            .map(|&e| self.type_of(e))
            .unwrap_or(TypeId::UNDEFINED);
        self.node(NodeKind::Sequence { expressions }, Some(ty))
    }

    pub fn unary(&mut self, operator: UnaryOp, argument: NodeId, ty: TypeId) -> NodeId {
        self.node(NodeKind::Unary { operator, argument }, Some(ty))
    }

    pub fn void_expr(&mut self, argument: NodeId) -> NodeId {
        self.unary(UnaryOp::Void, argument, TypeId::UNDEFINED)
    }

    pub fn not(&mut self, argument: NodeId) -> NodeId {
        self.unary(UnaryOp::Not, argument, TypeId::BOOLEAN)
    }

    pub fn binary(&mut self, operator: &str, left: NodeId, right: NodeId, ty: TypeId) -> NodeId {
        self.node(
            NodeKind::Binary {
                operator: operator.to_string(),
                left,
                right,
            },
            Some(ty),
        )
    }

    pub fn logical(
        &mut self,
        operator: LogicalOp,
        left: NodeId,
        right: NodeId,
        ty: TypeId,
    ) -> NodeId {
        self.node(
            NodeKind::Logical {
                operator,
                left,
                right,
            },
            Some(ty),
        )
    }

    pub fn conditional(
        &mut self,
        test: NodeId,
        consequent: NodeId,
        alternate: NodeId,
        ty: TypeId,
    ) -> NodeId {
        self.node(
            NodeKind::Conditional {
                test,
                consequent,
                alternate,
            },
            Some(ty),
        )
    }

    /// `left = right`, typed as the right-hand side
    pub fn assign(&mut self, left: NodeId, right: NodeId) -> NodeId {
        let ty = self.type_of(right);
        self.node(
            NodeKind::Assignment {
                operator: "=".to_string(),
                left,
                right,
            },
            Some(ty),
        )
    }

    pub fn object(&mut self, properties: Vec<NodeId>, ty: TypeId) -> NodeId {
        self.node(NodeKind::ObjectLiteral { properties }, Some(ty))
    }

    pub fn property(&mut self, name: &str, value: NodeId) -> NodeId {
        self.node(
            NodeKind::Property {
                key: PropertyKey::Name(name.to_string()),
                value,
                property: PropertyKind::Init,
            },
            None,
        )
    }

    pub fn computed_property(
        &mut self,
        key: NodeId,
        value: NodeId,
        property: PropertyKind,
    ) -> NodeId {
        self.node(
            NodeKind::Property {
                key: PropertyKey::Computed(key),
                value,
                property,
            },
            None,
        )
    }

    /// `{ name }`; `value` is the identifier the shorthand reads
    pub fn shorthand(&mut self, name: &str, value: NodeId) -> NodeId {
        self.node(
            NodeKind::Property {
                key: PropertyKey::Name(name.to_string()),
                value,
                property: PropertyKind::Shorthand,
            },
            None,
        )
    }

    /// `{ name() { ... } }`; `function` is the method's function node
    pub fn method(&mut self, name: &str, function: NodeId) -> NodeId {
        let ty = self.type_of(function);
        self.node(
            NodeKind::Property {
                key: PropertyKey::Name(name.to_string()),
                value: function,
                property: PropertyKind::Method,
            },
            Some(ty),
        )
    }

    pub fn array(&mut self, elements: Vec<NodeId>, ty: TypeId) -> NodeId {
        self.node(NodeKind::ArrayLiteral { elements }, Some(ty))
    }

    pub fn spread(&mut self, argument: NodeId) -> NodeId {
        let ty = self.type_of(argument);
        self.node(NodeKind::Spread { argument }, Some(ty))
    }

    pub fn arrow(&mut self, params: Vec<NodeId>, body: NodeId, ty: TypeId) -> NodeId {
        self.node(
            NodeKind::Function {
                function: FunctionKind::Arrow,
                name: None,
                params,
                body,
            },
            Some(ty),
        )
    }

    pub fn function_expr(&mut self, params: Vec<NodeId>, body: NodeId, ty: TypeId) -> NodeId {
        self.node(
            NodeKind::Function {
                function: FunctionKind::Expression,
                name: None,
                params,
                body,
            },
            Some(ty),
        )
    }

    pub fn element(
        &mut self,
        name: &str,
        attributes: Vec<NodeId>,
        children: Vec<NodeId>,
    ) -> NodeId {
        self.node(
            NodeKind::Element {
                name: name.to_string(),
                attributes,
                children,
            },
            None,
        )
    }

    pub fn attribute(&mut self, name: &str, value: Option<NodeId>) -> NodeId {
        self.node(
            NodeKind::Attribute {
                name: name.to_string(),
                value,
            },
            None,
        )
    }

    // ── Statements ─────────────────────────────────────────────────────────

    pub fn expr_stmt(&mut self, expression: NodeId) -> NodeId {
        self.node(NodeKind::ExpressionStatement { expression }, None)
    }

    pub fn block(&mut self, body: Vec<NodeId>) -> NodeId {
        self.node(NodeKind::Block { body }, None)
    }

    pub fn if_stmt(
        &mut self,
        test: NodeId,
        consequent: NodeId,
        alternate: Option<NodeId>,
    ) -> NodeId {
        self.node(
            NodeKind::If {
                test,
                consequent,
                alternate,
            },
            None,
        )
    }

    pub fn while_stmt(&mut self, test: NodeId, body: NodeId) -> NodeId {
        self.node(NodeKind::While { test, body }, None)
    }

    pub fn do_while(&mut self, body: NodeId, test: NodeId) -> NodeId {
        self.node(NodeKind::DoWhile { body, test }, None)
    }

    pub fn for_stmt(
        &mut self,
        init: Option<NodeId>,
        test: Option<NodeId>,
        update: Option<NodeId>,
        body: NodeId,
    ) -> NodeId {
        self.node(
            NodeKind::For {
                init,
                test,
                update,
                body,
            },
            None,
        )
    }

    pub fn ret(&mut self, argument: Option<NodeId>) -> NodeId {
        self.node(NodeKind::Return { argument }, None)
    }

    pub fn var_decl(&mut self, declarators: Vec<NodeId>) -> NodeId {
        self.node(NodeKind::VariableDeclaration { declarators }, None)
    }

    /// `id = init`; the declarator carries the declared type of `id`
    pub fn declarator(&mut self, id: NodeId, init: Option<NodeId>) -> NodeId {
        let ty = self.type_of(id);
        self.node(NodeKind::VariableDeclarator { id, init }, Some(ty))
    }

    pub fn function_decl(
        &mut self,
        name: &str,
        params: Vec<NodeId>,
        body: NodeId,
        ty: TypeId,
    ) -> NodeId {
        self.node(
            NodeKind::Function {
                function: FunctionKind::Declaration,
                name: Some(name.to_string()),
                params,
                body,
            },
            Some(ty),
        )
    }

    /// Class declaration; `heritage` holds the extends/implements expressions
    pub fn class_decl(
        &mut self,
        name: &str,
        heritage: Vec<NodeId>,
        members: Vec<NodeId>,
        ty: TypeId,
    ) -> NodeId {
        self.node(
            NodeKind::ClassDeclaration {
                name: name.to_string(),
                heritage,
                members,
            },
            Some(ty),
        )
    }

    pub fn interface_decl(
        &mut self,
        name: &str,
        heritage: Vec<NodeId>,
        members: Vec<NodeId>,
        ty: TypeId,
    ) -> NodeId {
        self.node(
            NodeKind::InterfaceDeclaration {
                name: name.to_string(),
                heritage,
                members,
            },
            Some(ty),
        )
    }

    /// Class or interface member typed as `ty`
    pub fn class_member(
        &mut self,
        key: PropertyKey,
        member: MemberKind,
        value: Option<NodeId>,
        is_static: bool,
        ty: TypeId,
    ) -> NodeId {
        self.node(
            NodeKind::ClassMember {
                key,
                member,
                value,
                is_static,
            },
            Some(ty),
        )
    }

    pub fn method_member(&mut self, name: &str, function: NodeId) -> NodeId {
        let ty = self.type_of(function);
        self.class_member(
            PropertyKey::Name(name.to_string()),
            MemberKind::Method,
            Some(function),
            false,
            ty,
        )
    }

    pub fn signature_member(&mut self, name: &str, ty: TypeId) -> NodeId {
        self.class_member(
            PropertyKey::Name(name.to_string()),
            MemberKind::Signature,
            None,
            false,
            ty,
        )
    }

    /// Wrap `body` in a program node and finish the tree
    pub fn finish(mut self, body: Vec<NodeId>) -> Program {
        let root = self.node(NodeKind::Program { body }, None);
        Program::new(SyntaxTree::new(self.nodes, root), self.types)
    }
}
