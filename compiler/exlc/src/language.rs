//! `ExpressionLanguage` and its builder.

use exl_codegen::Compiler;
use exl_eval::Evaluate;
use exl_ir::Node;
use exl_value::{
    EvalResult, ExpressionFunction, FunctionRegistry, Scope, SharedFunctionRegistry,
};

use crate::builtins;

/// An expression engine: a function registry plus the compile and
/// evaluate entry points.
///
/// Cloning is cheap and clones share the registry.
#[derive(Clone, Debug)]
pub struct ExpressionLanguage {
    functions: SharedFunctionRegistry,
}

impl ExpressionLanguage {
    /// An engine with the built-in functions (`min`, `max`, `map`).
    pub fn new() -> Self {
        ExpressionLanguage::builder().build()
    }

    pub fn builder() -> ExpressionLanguageBuilder {
        ExpressionLanguageBuilder::default()
    }

    /// Register a function.
    ///
    /// Closures already produced by [`evaluate`](Self::evaluate) see it
    /// too, since they resolve functions when they run.
    pub fn register(&self, function: ExpressionFunction) {
        tracing::debug!(function = %function.name(), "registering function");
        self.functions.write().register(function);
    }

    /// The shared registry handle.
    pub fn functions(&self) -> &SharedFunctionRegistry {
        &self.functions
    }

    /// Compile `node` to target source text.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn compile(&self, node: &Node) -> String {
        let mut compiler = Compiler::new(self.functions.clone());
        compiler.compile(node);
        compiler.into_source()
    }

    /// Evaluate `node` against `values`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&self, node: &Node, values: &Scope) -> EvalResult {
        node.evaluate(&self.functions, values)
    }
}

impl Default for ExpressionLanguage {
    fn default() -> Self {
        Self::new()
    }
}

/// Configures an [`ExpressionLanguage`].
pub struct ExpressionLanguageBuilder {
    functions: Vec<ExpressionFunction>,
    builtins: bool,
}

impl Default for ExpressionLanguageBuilder {
    fn default() -> Self {
        ExpressionLanguageBuilder {
            functions: Vec::new(),
            builtins: true,
        }
    }
}

impl ExpressionLanguageBuilder {
    /// Add one function. Functions added here win over built-ins of the
    /// same name.
    #[must_use]
    pub fn function(mut self, function: ExpressionFunction) -> Self {
        self.functions.push(function);
        self
    }

    /// Add several functions.
    #[must_use]
    pub fn functions(mut self, functions: impl IntoIterator<Item = ExpressionFunction>) -> Self {
        self.functions.extend(functions);
        self
    }

    /// Whether to register `min`, `max` and `map`. Default: yes.
    #[must_use]
    pub fn with_builtins(mut self, enabled: bool) -> Self {
        self.builtins = enabled;
        self
    }

    pub fn build(self) -> ExpressionLanguage {
        let mut registry = FunctionRegistry::new();
        if self.builtins {
            registry.extend(builtins::all());
        }
        registry.extend(self.functions);
        ExpressionLanguage {
            functions: SharedFunctionRegistry::new(registry),
        }
    }
}
