//! `Compile` for every node type.

use exl_ir::{ArrowFunc, BinaryOp, NameNode, Node, UnaryOp};

use crate::{Compile, Compiler};

/// Target spelling of a binary operator.
fn binary_symbol(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
        BinaryOp::Concat => ".",
        other => other.as_symbol(),
    }
}

/// Target spelling of a unary operator.
fn unary_symbol(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::Not => "!",
        other => other.as_symbol(),
    }
}

fn subcompile_all(compiler: &mut Compiler, nodes: &[Node]) -> Vec<String> {
    nodes.iter().map(|node| compiler.subcompile(node)).collect()
}

impl Compile for Node {
    fn compile(&self, compiler: &mut Compiler) {
        match self {
            Node::Constant(literal) => {
                compiler.repr(literal);
            }
            Node::Name(name) => name.compile(compiler),
            Node::Unary { op, operand } => {
                compiler
                    .raw("(")
                    .raw(unary_symbol(*op))
                    .compile(operand.as_ref())
                    .raw(")");
            }
            Node::Binary { op, left, right } => {
                compiler
                    .raw("(")
                    .compile(left.as_ref())
                    .raw(" ")
                    .raw(binary_symbol(*op))
                    .raw(" ")
                    .compile(right.as_ref())
                    .raw(")");
            }
            Node::Function { name, arguments } => {
                let args = subcompile_all(compiler, arguments);
                let code = match compiler.function(name.as_str()) {
                    Some(function) => function.compile(&args),
                    None => {
                        tracing::warn!(function = %name, "compiling call to unregistered function");
                        format!("{name}({})", args.join(", "))
                    }
                };
                compiler.raw(&code);
            }
            Node::Array(items) => {
                let items = subcompile_all(compiler, items);
                compiler.raw("[").raw(&items.join(", ")).raw("]");
            }
            Node::ArrowFunc(arrow) => arrow.compile(compiler),
        }
    }
}

impl Compile for NameNode {
    fn compile(&self, compiler: &mut Compiler) {
        compiler.raw("$").raw(self.name().as_str());
    }
}

impl Compile for ArrowFunc {
    /// Emits `function (<params>) { return <body>; }`, with `null` as the
    /// body when there is none. Each parameter goes through `subcompile`,
    /// so it is decorated exactly like a variable reference.
    fn compile(&self, compiler: &mut Compiler) {
        let parameters: Vec<String> = self
            .parameters()
            .iter()
            .map(|parameter| compiler.subcompile(parameter))
            .collect();
        let body = match self.body() {
            Some(body) => compiler.subcompile(body),
            None => "null".to_string(),
        };
        compiler.raw(&format!(
            "function ({}) {{ return {}; }}",
            parameters.join(", "),
            body
        ));
    }
}
