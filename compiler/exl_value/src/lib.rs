//! Exl Value - runtime side of the exl expression language.
//!
//! This crate provides:
//! - Runtime values (`Value`)
//! - The invocation wrapper for user closures (`SafeCallable`)
//! - Evaluation errors (`EvalError`, `EvalErrorKind`, `EvalResult`)
//! - The binding environment (`Scope`)
//! - Host functions and their registry (`ExpressionFunction`, `FunctionRegistry`)
//!
//! # Callables
//!
//! Closures produced by evaluating an arrow function are only ever handed
//! out wrapped in a `SafeCallable`. The wrapper implements no `Fn` trait and
//! `Value::invoke`, the one generic "call whatever this is" path, refuses
//! it. Host code must opt in through `SafeCallable::callback`, `call` or
//! `call_array`.

pub mod errors;
mod functions;
mod safe_callable;
mod scope;
mod shared;
mod value;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use functions::{CompilerFn, EvaluatorFn, ExpressionFunction, FunctionRegistry};
pub use safe_callable::{Callback, SafeCallable};
pub use scope::Scope;
pub use shared::SharedMutableRegistry;
pub use value::Value;

// Re-export error constructors for convenience (canonical path is exl_value::errors::*)
pub use errors::{
    // Arrow function errors
    arity_mismatch, invocation_forbidden,
    // Operator errors
    binary_type_mismatch, division_by_zero, integer_overflow, modulo_by_zero,
    unary_type_mismatch,
    // Variable and function errors
    not_callable, undefined_function, undefined_variable,
};

/// Registry handle shared between the engine and every closure it creates.
pub type SharedFunctionRegistry = SharedMutableRegistry<FunctionRegistry>;

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
