//! Runtime values.

use std::fmt;

use exl_ir::Literal;

use crate::errors::{invocation_forbidden, not_callable};
use crate::{EvalResult, SafeCallable};

/// Runtime value produced by evaluation.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    /// A closure built from an arrow function, always wrapped.
    Callable(SafeCallable),
}

impl Value {
    /// Get the type name of this value, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Callable(_) => "callable",
        }
    }

    /// Truthiness used by `and`, `or` and `not`, matching the compiled
    /// `&&`, `||` and `!`: `""` and `"0"` are both false, NaN is true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::Str(s) => !s.is_empty() && s != "0",
            Value::List(items) => !items.is_empty(),
            Value::Callable(_) => true,
        }
    }

    /// The string this value becomes under `~`, matching the compiled `.`.
    ///
    /// `null` and `false` are empty, `true` is `"1"`, and floats print with
    /// 14 significant digits (`2.0` is `"2"`). Lists and callables have no
    /// string form.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Null | Value::Bool(false) => Some(String::new()),
            Value::Bool(true) => Some("1".to_string()),
            Value::Int(n) => Some(n.to_string()),
            Value::Float(x) => Some(float_text(*x)),
            Value::Str(s) => Some(s.clone()),
            Value::List(_) | Value::Callable(_) => None,
        }
    }

    pub fn as_callable(&self) -> Option<&SafeCallable> {
        match self {
            Value::Callable(c) => Some(c),
            _ => None,
        }
    }

    /// The generic "call this value" path.
    ///
    /// No value is invokable this way. Wrapped closures are refused with
    /// `InvocationForbidden` regardless of what they wrap; go through
    /// [`SafeCallable::callback`], [`SafeCallable::call`] or
    /// [`SafeCallable::call_array`] instead. Everything else is
    /// `NotCallable`.
    pub fn invoke(&self, _args: &[Value]) -> EvalResult {
        match self {
            Value::Callable(_) => Err(invocation_forbidden()),
            other => Err(not_callable(other.type_name())),
        }
    }
}

/// Significant digits kept when a float becomes a string.
const FLOAT_PRECISION: usize = 14;

/// Format `x` like `%.14G`, except that a one-digit mantissa in exponent
/// form keeps `.0` (`1.0E+20`) and non-finite values are `NAN` / `INF`.
fn float_text(x: f64) -> String {
    if x.is_nan() {
        return "NAN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "INF" } else { "-INF" }.to_string();
    }
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if x == 0.0 {
        return format!("{sign}0");
    }

    // `d.ddddddddddddde<exp>`, already rounded to FLOAT_PRECISION digits.
    let sci = format!("{:.*e}", FLOAT_PRECISION - 1, x.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');
    let (lead, rest) = digits.split_at(1);

    let body = match usize::try_from(exp) {
        Ok(e) if e < FLOAT_PRECISION => {
            if digits.len() > e + 1 {
                format!("{}.{}", &digits[..=e], &digits[e + 1..])
            } else {
                format!("{digits:0<width$}", width = e + 1)
            }
        }
        Err(_) if exp >= -4 => {
            let zeros = "0".repeat(usize::try_from(-exp - 1).unwrap_or(0));
            format!("0.{zeros}{digits}")
        }
        _ => {
            let rest = if rest.is_empty() { "0" } else { rest };
            let exp_sign = if exp < 0 { '-' } else { '+' };
            format!("{lead}.{rest}E{exp_sign}{}", exp.unsigned_abs())
        }
    };
    format!("{sign}{body}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Callable(_) => f.write_str("<callable>"),
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Null => Value::Null,
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Int(n) => Value::Int(*n),
            Literal::Float(x) => Value::Float(*x),
            Literal::Str(s) => Value::Str(s.clone()),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

/// Saturates at `i64::MAX`; lengths never get there in practice.
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<SafeCallable> for Value {
    fn from(callable: SafeCallable) -> Self {
        Value::Callable(callable)
    }
}
