//! Functions registered by default.

use exl_eval::evaluate_binary;
use exl_ir::BinaryOp;
use exl_value::{EvalError, EvalResult, ExpressionFunction, Value};

pub(crate) fn all() -> Vec<ExpressionFunction> {
    vec![
        ExpressionFunction::from_host_fn("min", |args| extremum(args, BinaryOp::Lt, "min")),
        ExpressionFunction::from_host_fn("max", |args| extremum(args, BinaryOp::Gt, "max")),
        ExpressionFunction::new(
            "map",
            |args: &[String]| match args {
                [list, callable] => format!("array_map({callable}, {list})"),
                _ => format!("array_map({})", args.join(", ")),
            },
            |_values, args| map(args),
        ),
    ]
}

/// The argument that wins every `op` comparison against the others.
fn extremum(args: &[Value], op: BinaryOp, name: &str) -> EvalResult {
    let Some((first, rest)) = args.split_first() else {
        return Err(EvalError::new(format!("{name} expects at least 1 argument")));
    };
    let mut best = first.clone();
    for candidate in rest {
        if evaluate_binary(op, candidate.clone(), best.clone())?.is_truthy() {
            best = candidate.clone();
        }
    }
    Ok(best)
}

/// `map(list, fn)`: call `fn` with each item.
///
/// The callable is invoked through `SafeCallable::call_array`, the same way
/// any host function must.
fn map(args: &[Value]) -> EvalResult {
    match args {
        [Value::List(items), Value::Callable(f)] => items
            .iter()
            .map(|item| f.call_array(std::slice::from_ref(item)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        [list, callable] => Err(EvalError::new(format!(
            "map expects a list and a callable, got {} and {}",
            list.type_name(),
            callable.type_name()
        ))),
        _ => Err(EvalError::new(format!(
            "map expects 2 arguments, got {}",
            args.len()
        ))),
    }
}
