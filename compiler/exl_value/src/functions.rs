//! Host functions callable from expressions.
//!
//! Each function carries two implementations, mirroring the two execution
//! strategies of the engine: a compiler that turns already compiled
//! argument texts into target code, and an evaluator that computes the
//! result from argument values.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use exl_ir::Name;

use crate::{EvalResult, Scope, Value};

/// Produces target code from compiled argument texts.
pub type CompilerFn = Arc<dyn Fn(&[String]) -> String + Send + Sync>;

/// Computes a result from the caller's bindings and the argument values.
pub type EvaluatorFn = Arc<dyn Fn(&Scope, &[Value]) -> EvalResult + Send + Sync>;

/// A function registered with the engine.
#[derive(Clone)]
pub struct ExpressionFunction {
    name: Name,
    compiler: CompilerFn,
    evaluator: EvaluatorFn,
}

impl ExpressionFunction {
    pub fn new<C, E>(name: impl Into<Name>, compiler: C, evaluator: E) -> Self
    where
        C: Fn(&[String]) -> String + Send + Sync + 'static,
        E: Fn(&Scope, &[Value]) -> EvalResult + Send + Sync + 'static,
    {
        ExpressionFunction {
            name: name.into(),
            compiler: Arc::new(compiler),
            evaluator: Arc::new(evaluator),
        }
    }

    /// A function that ignores the caller's bindings and compiles to a
    /// target-code call of the same name.
    pub fn from_host_fn<F>(name: impl Into<Name>, f: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        let name = name.into();
        let target = name.clone();
        ExpressionFunction {
            name,
            compiler: Arc::new(move |args: &[String]| format!("{target}({})", args.join(", "))),
            evaluator: Arc::new(move |_values: &Scope, args: &[Value]| f(args)),
        }
    }

    #[inline]
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn compile(&self, args: &[String]) -> String {
        (self.compiler)(args)
    }

    pub fn evaluate(&self, values: &Scope, args: &[Value]) -> EvalResult {
        (self.evaluator)(values, args)
    }
}

impl fmt::Debug for ExpressionFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Functions available to expressions, by name.
#[derive(Clone, Debug, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<Name, ExpressionFunction>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        FunctionRegistry::default()
    }

    /// Register `function`, returning the one it replaces, if any.
    pub fn register(&mut self, function: ExpressionFunction) -> Option<ExpressionFunction> {
        self.functions.insert(function.name().clone(), function)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&ExpressionFunction> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&Name> {
        let mut names: Vec<&Name> = self.functions.keys().collect();
        names.sort();
        names
    }
}

impl Extend<ExpressionFunction> for FunctionRegistry {
    fn extend<T: IntoIterator<Item = ExpressionFunction>>(&mut self, iter: T) {
        for function in iter {
            self.register(function);
        }
    }
}
