//! Exl IR - AST types for the exl expression language.
//!
//! This crate contains the node family produced by the parser:
//! - `Name` for identifiers
//! - `Literal` for constant values
//! - `BinaryOp` / `UnaryOp` for operators
//! - `Node`, the closed set of expression nodes
//! - `ArrowFunc` and its `ParameterList` for anonymous functions
//!
//! Evaluation lives in `exl_eval` and code generation in `exl_codegen`; both
//! dispatch on `Node` directly. This crate only knows how to render a node
//! into its debug form (`to_array` / `dump`).
//!
//! # Ownership
//!
//! Nodes form a tree. The only shared pointer is the body of an arrow
//! function, which closures built from it keep alive after evaluation.

mod dump;
mod literal;
mod name;
mod node;
mod operators;

pub use dump::DumpPart;
pub use literal::Literal;
pub use name::Name;
pub use node::{ArrowFunc, NameNode, Node, ParameterList};
pub use operators::{BinaryOp, UnaryOp};
