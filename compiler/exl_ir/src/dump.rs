//! Debug form of nodes.
//!
//! `to_array` flattens a node into text fragments and child nodes, and
//! `dump` renders that sequence recursively. This is for diagnostics only;
//! it is never evaluated and is unrelated to generated target code.

use std::borrow::Cow;

use crate::{ArrowFunc, NameNode, Node};

/// One element of a node's debug form.
#[derive(Clone, Debug, PartialEq)]
pub enum DumpPart<'a> {
    Text(Cow<'a, str>),
    Node(&'a Node),
    Name(&'a NameNode),
}

impl<'a> DumpPart<'a> {
    #[inline]
    pub fn text(text: &'a str) -> Self {
        DumpPart::Text(Cow::Borrowed(text))
    }

    fn dump_into(&self, out: &mut String) {
        match self {
            DumpPart::Text(text) => out.push_str(text),
            DumpPart::Node(node) => node.dump_into(out),
            DumpPart::Name(name) => name.dump_into(out),
        }
    }
}

/// Push `items` separated by `", "`.
fn push_list<'a>(parts: &mut Vec<DumpPart<'a>>, items: impl Iterator<Item = DumpPart<'a>>) {
    for (i, item) in items.enumerate() {
        if i > 0 {
            parts.push(DumpPart::text(", "));
        }
        parts.push(item);
    }
}

fn render(parts: &[DumpPart<'_>]) -> String {
    let mut out = String::new();
    for part in parts {
        part.dump_into(&mut out);
    }
    out
}

impl NameNode {
    pub fn to_array(&self) -> Vec<DumpPart<'_>> {
        vec![DumpPart::text(self.name().as_str())]
    }

    pub fn dump(&self) -> String {
        render(&self.to_array())
    }

    fn dump_into(&self, out: &mut String) {
        out.push_str(self.name().as_str());
    }
}

impl ArrowFunc {
    /// `(`, parameters separated by `", "`, `) -> {`, the body if any, `}`.
    pub fn to_array(&self) -> Vec<DumpPart<'_>> {
        let mut parts = Vec::with_capacity(self.parameters().len() * 2 + 3);
        parts.push(DumpPart::text("("));
        push_list(&mut parts, self.parameters().iter().map(DumpPart::Name));
        parts.push(DumpPart::text(") -> {"));
        if let Some(body) = self.body() {
            parts.push(DumpPart::Node(body));
        }
        parts.push(DumpPart::text("}"));
        parts
    }

    pub fn dump(&self) -> String {
        render(&self.to_array())
    }
}

impl Node {
    pub fn to_array(&self) -> Vec<DumpPart<'_>> {
        match self {
            Node::Constant(literal) => vec![DumpPart::Text(Cow::Owned(literal.to_string()))],
            Node::Name(name) => name.to_array(),
            Node::Unary { op, operand } => vec![
                DumpPart::text("("),
                DumpPart::Text(Cow::Owned(format!("{} ", op.as_symbol()))),
                DumpPart::Node(operand),
                DumpPart::text(")"),
            ],
            Node::Binary { op, left, right } => vec![
                DumpPart::text("("),
                DumpPart::Node(left),
                DumpPart::Text(Cow::Owned(format!(" {} ", op.as_symbol()))),
                DumpPart::Node(right),
                DumpPart::text(")"),
            ],
            Node::Function { name, arguments } => {
                let mut parts = vec![DumpPart::text(name.as_str()), DumpPart::text("(")];
                push_list(&mut parts, arguments.iter().map(DumpPart::Node));
                parts.push(DumpPart::text(")"));
                parts
            }
            Node::Array(items) => {
                let mut parts = vec![DumpPart::text("[")];
                push_list(&mut parts, items.iter().map(DumpPart::Node));
                parts.push(DumpPart::text("]"));
                parts
            }
            Node::ArrowFunc(arrow) => arrow.to_array(),
        }
    }

    /// Human-readable rendering of the debug form.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out);
        out
    }

    fn dump_into(&self, out: &mut String) {
        for part in self.to_array() {
            part.dump_into(out);
        }
    }
}
