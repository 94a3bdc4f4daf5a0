//! Expression nodes.
//!
//! `Node` is the closed node family. Arrow functions get their own struct
//! because both the evaluator and the code generator treat them specially:
//! the evaluator turns them into callables and the code generator into a
//! closure definition.

use std::sync::Arc;

use crate::{BinaryOp, Literal, Name, UnaryOp};

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Literal constant: `1`, `"a"`, `true`, `null`.
    Constant(Literal),
    /// Variable reference.
    Name(NameNode),
    /// Prefix operator application.
    Unary { op: UnaryOp, operand: Box<Node> },
    /// Infix operator application.
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Call to a function resolved in the function registry.
    Function { name: Name, arguments: Vec<Node> },
    /// List literal: `[a, b, c]`.
    Array(Vec<Node>),
    /// Anonymous function literal: `(x, y) -> { x + y }`.
    ArrowFunc(ArrowFunc),
}

impl Node {
    pub fn constant(value: impl Into<Literal>) -> Self {
        Node::Constant(value.into())
    }

    pub fn null() -> Self {
        Node::Constant(Literal::Null)
    }

    pub fn name(name: impl Into<Name>) -> Self {
        Node::Name(NameNode::new(name))
    }

    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        Node::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn function(name: impl Into<Name>, arguments: Vec<Node>) -> Self {
        Node::Function {
            name: name.into(),
            arguments,
        }
    }

    pub fn array(items: Vec<Node>) -> Self {
        Node::Array(items)
    }

    pub fn arrow(parameters: ParameterList, body: Option<Node>) -> Self {
        Node::ArrowFunc(ArrowFunc::new(parameters, body))
    }
}

/// A reference to a variable by name.
///
/// Also used for the parameters of an arrow function, so that a parameter
/// compiles exactly like a variable reference does.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameNode {
    name: Name,
}

impl NameNode {
    pub fn new(name: impl Into<Name>) -> Self {
        NameNode { name: name.into() }
    }

    /// The canonical identifier token of this node.
    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }
}

/// Ordered parameter names of an arrow function.
///
/// Uniqueness is not enforced: when a name repeats, the later position wins
/// at binding time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterList(Vec<NameNode>);

impl ParameterList {
    pub fn new(parameters: Vec<NameNode>) -> Self {
        ParameterList(parameters)
    }

    /// Build a parameter list straight from identifier texts.
    pub fn from_names<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Name>,
    {
        names.into_iter().map(NameNode::new).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NameNode> {
        self.0.iter()
    }

    /// Parameter names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &Name> + '_ {
        self.0.iter().map(NameNode::name)
    }
}

impl FromIterator<NameNode> for ParameterList {
    fn from_iter<T: IntoIterator<Item = NameNode>>(iter: T) -> Self {
        ParameterList(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a NameNode;
    type IntoIter = std::slice::Iter<'a, NameNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Anonymous function literal.
///
/// Immutable once built by the parser. The body is behind an `Arc` so that
/// callables produced by evaluation can outlive the evaluation call without
/// copying the subtree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArrowFunc {
    parameters: ParameterList,
    body: Option<Arc<Node>>,
}

impl ArrowFunc {
    pub fn new(parameters: ParameterList, body: Option<Node>) -> Self {
        ArrowFunc {
            parameters,
            body: body.map(Arc::new),
        }
    }

    #[inline]
    pub fn parameters(&self) -> &ParameterList {
        &self.parameters
    }

    #[inline]
    pub fn body(&self) -> Option<&Node> {
        self.body.as_deref()
    }

    /// The body as a shared handle, for closures that must keep it alive.
    #[inline]
    pub fn shared_body(&self) -> Option<&Arc<Node>> {
        self.body.as_ref()
    }
}
