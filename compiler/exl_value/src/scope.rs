//! Binding environment passed to evaluation.

use rustc_hash::FxHashMap;

use exl_ir::Name;

use crate::Value;

/// Variable bindings visible to an expression.
///
/// Flat by design of the language: an arrow function body sees a fresh
/// scope holding only its parameters, never the scope it was created in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
}

impl Scope {
    /// Create a new empty scope.
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Scope {
            bindings: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Bind `name`, replacing any previous binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<Name>, value: impl Into<Value>) {
        self.bindings.insert(name.into(), value.into());
    }

    /// Look up a variable by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.bindings.iter()
    }
}

impl<N: Into<Name>, V: Into<Value>> FromIterator<(N, V)> for Scope {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut scope = Scope::new();
        for (name, value) in iter {
            scope.define(name, value);
        }
        scope
    }
}
