//! Exl Eval - tree-walking evaluator for the exl expression language.
//!
//! Every node evaluates against two inputs: the shared function registry
//! and the binding environment (`Scope`). The `Evaluate` trait is the
//! capability; `Node` dispatches on its variant directly.
//!
//! Arrow functions evaluate to a `SafeCallable` rather than a value
//! computed on the spot. The closure inside keeps a handle on the registry
//! and the body, and evaluates the body against a fresh scope built from
//! its call arguments each time it is invoked.

mod arrow;
mod evaluate;
mod operators;
mod stack;

pub use evaluate::Evaluate;
pub use operators::{evaluate_binary, evaluate_unary};
pub use stack::ensure_sufficient_stack;

// Re-export runtime types for convenience
pub use exl_value::{
    EvalError, EvalErrorKind, EvalResult, SafeCallable, Scope, SharedFunctionRegistry, Value,
};
