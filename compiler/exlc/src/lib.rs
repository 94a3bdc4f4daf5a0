//! Exlc - the embeddable face of the exl expression engine.
//!
//! An [`ExpressionLanguage`] owns the function registry and offers the two
//! execution strategies over the same expression tree: [`compile`] to
//! target source text and [`evaluate`] to a [`Value`]. Arrow functions
//! evaluate to a [`SafeCallable`]; hosts call it through
//! [`SafeCallable::call`], [`SafeCallable::call_array`] or
//! [`SafeCallable::callback`], never generically.
//!
//! ```
//! use exlc::{BinaryOp, ExpressionLanguage, Node, ParameterList, Scope, Value};
//!
//! let language = ExpressionLanguage::new();
//! let node = Node::arrow(
//!     ParameterList::from_names(["x", "y"]),
//!     Some(Node::binary(BinaryOp::Add, Node::name("x"), Node::name("y"))),
//! );
//!
//! assert_eq!(language.compile(&node), "function ($x, $y) { return ($x + $y); }");
//!
//! let value = language.evaluate(&node, &Scope::new()).ok();
//! let sum = value.as_ref().and_then(Value::as_callable);
//! assert_eq!(sum.and_then(|f| f.call([2, 3]).ok()), Some(Value::Int(5)));
//! ```
//!
//! [`compile`]: ExpressionLanguage::compile
//! [`evaluate`]: ExpressionLanguage::evaluate

mod builtins;
mod language;

use std::sync::Once;

pub use language::{ExpressionLanguage, ExpressionLanguageBuilder};

pub use exl_codegen::{Compile, Compiler};
pub use exl_eval::Evaluate;
pub use exl_ir::{ArrowFunc, BinaryOp, Literal, Name, NameNode, Node, ParameterList, UnaryOp};
pub use exl_value::{
    Callback, EvalError, EvalErrorKind, EvalResult, ExpressionFunction, FunctionRegistry,
    SafeCallable, Scope, SharedFunctionRegistry, Value,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=exl_eval=debug` to log closure construction or
/// `RUST_LOG=exl_eval=trace` to also log every closure call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
