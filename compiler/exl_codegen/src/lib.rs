//! Exl Codegen - turns expression trees into target source text.
//!
//! The `Compiler` owns the output buffer and drives the walk; each node
//! type implements `Compile` and writes itself through the compiler's
//! primitives (`raw`, `string`, `repr`, `subcompile`). Nothing is evaluated
//! here: an arrow function becomes a closure definition whose body is the
//! compiled body, and binding happens when the target code runs.

mod compiler;
mod nodes;

pub use compiler::{Compile, Compiler};
