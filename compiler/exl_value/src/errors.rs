//! Error types for evaluation.
//!
//! `EvalErrorKind` gives every failure a typed category; the factory
//! functions below are the public way to build an `EvalError`.

use thiserror::Error;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Arrow functions
    /// A closure was called with fewer arguments than it declares.
    #[error("invalid arrow function call: expected at least {expected} argument(s), got {got}")]
    ArityMismatch { expected: usize, got: usize },
    /// A `SafeCallable` was invoked as if it were a plain function.
    #[error("callback wrapper cannot be invoked, use `SafeCallable::callback()` instead")]
    InvocationForbidden,

    // Access
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("undefined function: {name}")]
    UndefinedFunction { name: String },
    #[error("value of type {type_name} is not callable")]
    NotCallable { type_name: String },

    // Operators
    #[error("invalid operands for `{op}`: {left} and {right}")]
    BinaryTypeMismatch {
        op: String,
        left: String,
        right: String,
    },
    #[error("invalid operand for `{op}`: {operand}")]
    UnaryTypeMismatch { op: String, operand: String },
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: String },

    /// Errors raised by host functions.
    #[error("{message}")]
    Custom { message: String },
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    kind: EvalErrorKind,
}

impl EvalError {
    /// Create an uncategorized error, for host functions.
    pub fn new(message: impl Into<String>) -> Self {
        EvalErrorKind::Custom {
            message: message.into(),
        }
        .into()
    }

    #[inline]
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> EvalErrorKind {
        self.kind
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError { kind }
    }
}

// Arrow Function Errors

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch { expected, got }.into()
}

#[cold]
pub fn invocation_forbidden() -> EvalError {
    EvalErrorKind::InvocationForbidden.into()
}

// Variable and Function Errors

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn undefined_function(name: &str) -> EvalError {
    EvalErrorKind::UndefinedFunction {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn not_callable(type_name: &str) -> EvalError {
    EvalErrorKind::NotCallable {
        type_name: type_name.to_string(),
    }
    .into()
}

// Operator Errors

#[cold]
pub fn binary_type_mismatch(op: &str, left: &str, right: &str) -> EvalError {
    EvalErrorKind::BinaryTypeMismatch {
        op: op.to_string(),
        left: left.to_string(),
        right: right.to_string(),
    }
    .into()
}

#[cold]
pub fn unary_type_mismatch(op: &str, operand: &str) -> EvalError {
    EvalErrorKind::UnaryTypeMismatch {
        op: op.to_string(),
        operand: operand.to_string(),
    }
    .into()
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalErrorKind::ModuloByZero.into()
}

#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    }
    .into()
}
