//! Evaluation of arrow functions into callables.

use std::sync::{Arc, OnceLock};

use smallvec::SmallVec;

use exl_ir::{ArrowFunc, Name, Node};
use exl_value::errors::arity_mismatch;
use exl_value::{EvalResult, SafeCallable, Scope, SharedFunctionRegistry, Value};

use crate::Evaluate;

/// Parameter names captured by a closure; most arrow functions take few.
type ParamNames = SmallVec<[Name; 4]>;

/// Callable shared by every arrow function without a body.
static NOOP_CALLABLE: OnceLock<SafeCallable> = OnceLock::new();

fn noop_callable() -> &'static SafeCallable {
    NOOP_CALLABLE.get_or_init(|| SafeCallable::new(|_| Ok(Value::Null)))
}

impl Evaluate for ArrowFunc {
    type Output = SafeCallable;

    /// Build the callable for this arrow function.
    ///
    /// Without a body this is the shared no-op callable, identical across
    /// nodes. With a body it is a fresh closure capturing the registry
    /// handle (not a snapshot), the parameter names and the body. The
    /// caller's bindings are not captured.
    fn evaluate(&self, functions: &SharedFunctionRegistry, _values: &Scope) -> SafeCallable {
        let Some(body) = self.shared_body() else {
            return noop_callable().clone();
        };

        let params: ParamNames = self.parameters().names().cloned().collect();
        let body = Arc::clone(body);
        let functions = functions.clone();
        tracing::debug!(params = params.len(), "built arrow function closure");

        SafeCallable::new(move |args| call_arrow(&functions, &params, &body, args))
    }
}

/// Bind `args` to `params` in a fresh scope and evaluate `body` in it.
///
/// Fewer arguments than parameters is an error; extra arguments are
/// ignored.
fn call_arrow(
    functions: &SharedFunctionRegistry,
    params: &[Name],
    body: &Node,
    args: &[Value],
) -> EvalResult {
    tracing::trace!(params = params.len(), args = args.len(), "calling arrow function");
    if params.len() > args.len() {
        return Err(arity_mismatch(params.len(), args.len()));
    }

    let mut scope = Scope::with_capacity(params.len());
    for (name, arg) in params.iter().zip(args) {
        scope.define(name.clone(), arg.clone());
    }
    body.evaluate(functions, &scope)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
