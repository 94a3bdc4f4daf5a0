//! Node evaluation.

use exl_ir::{BinaryOp, Name, NameNode, Node};
use exl_value::errors::{undefined_function, undefined_variable};
use exl_value::{EvalResult, Scope, SharedFunctionRegistry, Value};

use crate::operators::{evaluate_binary, evaluate_unary};
use crate::stack::ensure_sufficient_stack;

/// Interpret a node against a function registry and a binding environment.
pub trait Evaluate {
    type Output;

    fn evaluate(&self, functions: &SharedFunctionRegistry, values: &Scope) -> Self::Output;
}

impl Evaluate for Node {
    type Output = EvalResult;

    fn evaluate(&self, functions: &SharedFunctionRegistry, values: &Scope) -> EvalResult {
        ensure_sufficient_stack(|| match self {
            Node::Constant(literal) => Ok(Value::from(literal)),
            Node::Name(name) => name.evaluate(functions, values),
            Node::Unary { op, operand } => {
                let operand = operand.evaluate(functions, values)?;
                evaluate_unary(*op, operand)
            }
            Node::Binary { op, left, right } => {
                let left = left.evaluate(functions, values)?;
                // `and` stops on a false left side, `or` on a true one.
                if op.is_short_circuit() && left.is_truthy() == (*op == BinaryOp::Or) {
                    return Ok(Value::Bool(left.is_truthy()));
                }
                let right = right.evaluate(functions, values)?;
                evaluate_binary(*op, left, right)
            }
            Node::Function { name, arguments } => {
                eval_function_call(name, arguments, functions, values)
            }
            Node::Array(items) => Ok(Value::List(eval_all(items, functions, values)?)),
            Node::ArrowFunc(arrow) => Ok(Value::Callable(arrow.evaluate(functions, values))),
        })
    }
}

impl Evaluate for NameNode {
    type Output = EvalResult;

    fn evaluate(&self, _functions: &SharedFunctionRegistry, values: &Scope) -> EvalResult {
        let name = self.name().as_str();
        values
            .lookup(name)
            .cloned()
            .ok_or_else(|| undefined_variable(name))
    }
}

fn eval_all(
    nodes: &[Node],
    functions: &SharedFunctionRegistry,
    values: &Scope,
) -> Result<Vec<Value>, exl_value::EvalError> {
    nodes
        .iter()
        .map(|node| node.evaluate(functions, values))
        .collect()
}

/// Resolve `name` in the registry at call time and run its evaluator.
///
/// The registry lock is released before the evaluator runs, so host
/// functions may call back into closures that read the registry again.
#[tracing::instrument(level = "trace", skip(arguments, functions, values))]
fn eval_function_call(
    name: &Name,
    arguments: &[Node],
    functions: &SharedFunctionRegistry,
    values: &Scope,
) -> EvalResult {
    let function = functions
        .read()
        .get(name.as_str())
        .cloned()
        .ok_or_else(|| undefined_function(name.as_str()))?;
    let args = eval_all(arguments, functions, values)?;
    function.evaluate(values, &args)
}
