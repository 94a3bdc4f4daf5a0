use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;

fn summing() -> SafeCallable {
    SafeCallable::new(|args| {
        let mut total = 0;
        for arg in args {
            match arg {
                Value::Int(n) => total += n,
                other => return Err(EvalError::new(format!("not an int: {other}"))),
            }
        }
        Ok(Value::Int(total))
    })
}

mod safe_callable {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn call_forwards_arguments() {
        assert_eq!(summing().call([2, 3, 4]).unwrap(), Value::Int(9));
    }

    #[test]
    fn call_array_forwards_arguments() {
        let args = [Value::Int(2), Value::Int(3)];
        assert_eq!(summing().call_array(&args).unwrap(), Value::Int(5));
    }

    #[test]
    fn empty_call_has_no_arguments() {
        let count = SafeCallable::new(|args| Ok(Value::from(args.len())));
        assert_eq!(count.call(Vec::<Value>::new()).unwrap(), Value::Int(0));
        assert_eq!(count.call_array(&[]).unwrap(), Value::Int(0));
    }

    #[test]
    fn callback_round_trips() {
        let wrapper = summing();
        let callback = Arc::clone(wrapper.callback());
        let args = [Value::Int(1), Value::Int(2)];

        let direct = callback(&args).unwrap();
        assert_eq!(direct, wrapper.call_array(&args).unwrap());
        assert_eq!(direct, wrapper.call([1, 2]).unwrap());
    }

    #[test]
    fn callback_errors_pass_through_unchanged() {
        let err = summing().call(["nope"]).unwrap_err();
        assert_eq!(err.to_string(), "not an int: nope");
    }

    #[test]
    fn clones_share_identity() {
        let a = summing();
        let b = a.clone();
        let c = summing();
        assert!(a.ptr_eq(&b));
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&c));
        assert_ne!(a, c);
    }

    #[test]
    fn from_callback_keeps_identity() {
        let a = summing();
        let b = SafeCallable::from_callback(Arc::clone(a.callback()));
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn each_call_runs_the_callback_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let wrapper = SafeCallable::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Null)
        });
        wrapper.call([1]).unwrap();
        wrapper.call_array(&[]).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}

mod invoke {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrapper_cannot_be_invoked_generically() {
        let value = Value::Callable(summing());
        let err = value.invoke(&[Value::Int(1)]).unwrap_err();
        assert_eq!(err.kind(), &EvalErrorKind::InvocationForbidden);
        assert!(err.to_string().contains("SafeCallable::callback()"));
    }

    #[test]
    fn refusal_does_not_run_the_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let value = Value::Callable(SafeCallable::new(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(Value::Null)
        }));
        for args in [vec![], vec![Value::Null], vec![Value::Int(1); 8]] {
            assert!(value.invoke(&args).is_err());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn plain_values_are_not_callable() {
        // Names of host functions must not resolve to calls either.
        let err = Value::from("system").invoke(&[]).unwrap_err();
        assert_eq!(
            err.kind(),
            &EvalErrorKind::NotCallable {
                type_name: "string".to_string()
            }
        );
        let list = Value::List(vec![Value::from("Some\\Class"), Value::from("method")]);
        assert!(matches!(
            list.invoke(&[]).unwrap_err().kind(),
            EvalErrorKind::NotCallable { .. }
        ));
    }
}

mod conversions {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(value: impl Into<Value>) -> String {
        value.into().to_text().unwrap()
    }

    #[test]
    fn scalars_to_text() {
        assert_eq!(text(()), "");
        assert_eq!(text(true), "1");
        assert_eq!(text(false), "");
        assert_eq!(text(-42), "-42");
        assert_eq!(text("as is"), "as is");
    }

    #[test]
    fn floats_to_text() {
        assert_eq!(text(2.0), "2");
        assert_eq!(text(-2.5), "-2.5");
        assert_eq!(text(100.0), "100");
        assert_eq!(text(0.1 + 0.2), "0.3");
        assert_eq!(text(0.000_25), "0.00025");
        assert_eq!(text(1e-5), "1.0E-5");
        assert_eq!(text(1e20), "1.0E+20");
        assert_eq!(text(1.5e15), "1.5E+15");
        assert_eq!(text(0.0), "0");
        assert_eq!(text(f64::NAN), "NAN");
        assert_eq!(text(f64::NEG_INFINITY), "-INF");
    }

    #[test]
    fn lists_and_callables_have_no_text() {
        assert_eq!(Value::List(vec![]).to_text(), None);
        assert_eq!(Value::Callable(summing()).to_text(), None);
    }

    #[test]
    fn truthiness() {
        for falsy in [
            Value::Null,
            Value::Bool(false),
            Value::Int(0),
            Value::Float(0.0),
            Value::from(""),
            Value::from("0"),
            Value::List(vec![]),
        ] {
            assert!(!falsy.is_truthy(), "{falsy:?} should be false");
        }
        for truthy in [
            Value::Int(-1),
            Value::Float(f64::NAN),
            Value::from("0.0"),
            Value::from(" "),
            Value::List(vec![Value::Null]),
            Value::Callable(summing()),
        ] {
            assert!(truthy.is_truthy(), "{truthy:?} should be true");
        }
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arity_message() {
        assert_eq!(
            arity_mismatch(2, 1).to_string(),
            "invalid arrow function call: expected at least 2 argument(s), got 1"
        );
    }

    #[test]
    fn kind_round_trip() {
        let err: EvalError = EvalErrorKind::DivisionByZero.into();
        assert_eq!(err, division_by_zero());
        assert_eq!(err.into_kind(), EvalErrorKind::DivisionByZero);
    }
}

mod scope {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn define_replaces_previous_binding() {
        let mut scope = Scope::new();
        scope.define("x", 1);
        scope.define("x", 2);
        assert_eq!(scope.lookup("x"), Some(&Value::Int(2)));
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn collects_from_pairs() {
        let scope: Scope = [("a", Value::Int(1)), ("b", Value::Bool(true))]
            .into_iter()
            .collect();
        assert!(scope.contains("a"));
        assert!(scope.contains("b"));
        assert!(!scope.contains("c"));
    }
}

mod registry {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn host_fn_compiles_to_call() {
        let f = ExpressionFunction::from_host_fn("max", |_| Ok(Value::Null));
        assert_eq!(f.compile(&["$a".to_string(), "2".to_string()]), "max($a, 2)");
    }

    #[test]
    fn register_replaces_by_name() {
        let mut registry = FunctionRegistry::new();
        assert!(registry
            .register(ExpressionFunction::from_host_fn("f", |_| Ok(Value::Int(1))))
            .is_none());
        assert!(registry
            .register(ExpressionFunction::from_host_fn("f", |_| Ok(Value::Int(2))))
            .is_some());
        let f = registry.get("f").unwrap();
        assert_eq!(f.evaluate(&Scope::new(), &[]).unwrap(), Value::Int(2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = FunctionRegistry::new();
        registry.extend(
            ["b", "c", "a"]
                .into_iter()
                .map(|n| ExpressionFunction::from_host_fn(n, |_| Ok(Value::Null))),
        );
        let names: Vec<&str> = registry.names().into_iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn shared_handles_see_each_others_writes() {
        let shared = SharedFunctionRegistry::default();
        let other = shared.clone();
        other
            .write()
            .register(ExpressionFunction::from_host_fn("late", |_| Ok(Value::Null)));
        assert!(shared.read().contains("late"));
        assert!(shared.ptr_eq(&other));
    }
}

#[test]
fn wrapper_and_values_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SafeCallable>();
    assert_send_sync::<Value>();
    assert_send_sync::<SharedFunctionRegistry>();
}
