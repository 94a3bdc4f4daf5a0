//! The code generation driver.

use exl_ir::Literal;
use exl_value::{ExpressionFunction, SharedFunctionRegistry};

/// Something that can write itself as target code.
pub trait Compile {
    fn compile(&self, compiler: &mut Compiler);
}

/// Accumulates target source text.
///
/// Holds the same registry handle as the evaluator, so registered functions
/// compile with their own compiler callbacks.
#[derive(Debug)]
pub struct Compiler {
    source: String,
    functions: SharedFunctionRegistry,
}

impl Compiler {
    pub fn new(functions: SharedFunctionRegistry) -> Self {
        Compiler {
            source: String::new(),
            functions,
        }
    }

    /// Output produced so far.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    /// Clear the output buffer.
    pub fn reset(&mut self) -> &mut Self {
        self.source.clear();
        self
    }

    /// Append the code for `node` to the output.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn compile<N: Compile + ?Sized>(&mut self, node: &N) -> &mut Self {
        node.compile(self);
        self
    }

    /// Compile `node` on its own and return the text, leaving the output
    /// buffer as it was.
    pub fn subcompile<N: Compile + ?Sized>(&mut self, node: &N) -> String {
        let outer = std::mem::take(&mut self.source);
        node.compile(self);
        std::mem::replace(&mut self.source, outer)
    }

    /// Append `text` verbatim.
    #[inline]
    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.source.push_str(text);
        self
    }

    /// Append `value` as a double-quoted target string literal.
    ///
    /// Escapes `\0`, `\t`, `"`, `$` and `\`.
    pub fn string(&mut self, value: &str) -> &mut Self {
        self.source.reserve(value.len() + 2);
        self.source.push('"');
        for c in value.chars() {
            match c {
                '\0' => self.source.push_str("\\0"),
                '\t' => self.source.push_str("\\t"),
                '"' | '$' | '\\' => {
                    self.source.push('\\');
                    self.source.push(c);
                }
                c => self.source.push(c),
            }
        }
        self.source.push('"');
        self
    }

    /// Append the target representation of a constant.
    pub fn repr(&mut self, literal: &Literal) -> &mut Self {
        match literal {
            Literal::Null => self.raw("null"),
            Literal::Bool(b) => self.raw(if *b { "true" } else { "false" }),
            Literal::Int(n) => self.raw(&n.to_string()),
            Literal::Float(x) if x.is_nan() => self.raw("NAN"),
            Literal::Float(x) if x.is_infinite() => {
                self.raw(if x.is_sign_negative() { "-INF" } else { "INF" })
            }
            // `{:?}` keeps the `.0`, so the target still sees a float.
            Literal::Float(x) => self.raw(&format!("{x:?}")),
            Literal::Str(s) => self.string(s),
        }
    }

    /// Look up a registered function by name.
    pub fn function(&self, name: &str) -> Option<ExpressionFunction> {
        self.functions.read().get(name).cloned()
    }
}
