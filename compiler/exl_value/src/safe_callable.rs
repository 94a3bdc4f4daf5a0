//! Invocation wrapper for closures produced by expression evaluation.

use std::fmt;
use std::sync::Arc;

use crate::{EvalResult, Value};

/// The wrapped invokable: takes the ordered argument list.
pub type Callback = Arc<dyn Fn(&[Value]) -> EvalResult + Send + Sync>;

/// A closure handed out by the engine.
///
/// Values returned from evaluation must not be callable by convention:
/// otherwise a host that generically "calls whatever came back" could be
/// steered into invoking arbitrary code. `SafeCallable` therefore
/// implements no `Fn` trait, and `Value::invoke` rejects it with
/// `EvalErrorKind::InvocationForbidden`. The only ways in are the named
/// methods below.
///
/// The callback is set once at construction. Cloning shares it, so clones
/// compare equal under [`SafeCallable::ptr_eq`].
///
/// ```compile_fail
/// use exl_value::{SafeCallable, Value};
///
/// let wrapper = SafeCallable::new(|_| Ok(Value::Null));
/// let _ = wrapper(&[]);
/// ```
#[derive(Clone)]
pub struct SafeCallable {
    callback: Callback,
}

impl SafeCallable {
    /// Wrap `callback`. Its signature is not validated in any way.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&[Value]) -> EvalResult + Send + Sync + 'static,
    {
        SafeCallable {
            callback: Arc::new(callback),
        }
    }

    /// Wrap an already shared callback without re-allocating.
    pub fn from_callback(callback: Callback) -> Self {
        SafeCallable { callback }
    }

    /// Unmediated access to the wrapped callback.
    ///
    /// This is the sanctioned escape hatch: whoever calls this takes
    /// responsibility for invoking the closure.
    #[inline]
    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Call with each item of `args` as one positional argument.
    ///
    /// ```
    /// use exl_value::{SafeCallable, Value};
    ///
    /// let len = SafeCallable::new(|args| Ok(Value::from(args.len())));
    /// assert_eq!(len.call([1, 2, 3]).ok(), Some(Value::Int(3)));
    /// ```
    pub fn call<I>(&self, args: I) -> EvalResult
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        self.call_array(&args)
    }

    /// Call with an ordered argument slice; an empty slice is a call with no
    /// arguments.
    #[inline]
    pub fn call_array(&self, args: &[Value]) -> EvalResult {
        (self.callback)(args)
    }

    /// Whether both wrappers share the same callback.
    #[inline]
    pub fn ptr_eq(&self, other: &SafeCallable) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.callback), Arc::as_ptr(&other.callback))
    }
}

impl PartialEq for SafeCallable {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for SafeCallable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SafeCallable({:p})", Arc::as_ptr(&self.callback))
    }
}
