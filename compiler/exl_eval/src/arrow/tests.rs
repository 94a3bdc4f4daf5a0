use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use exl_ir::{BinaryOp, Node, ParameterList};
use exl_value::{EvalErrorKind, ExpressionFunction, FunctionRegistry};

use super::*;

fn sum_xy() -> ArrowFunc {
    ArrowFunc::new(
        ParameterList::from_names(["x", "y"]),
        Some(Node::binary(BinaryOp::Add, Node::name("x"), Node::name("y"))),
    )
}

fn empty_registry() -> SharedFunctionRegistry {
    SharedFunctionRegistry::new(FunctionRegistry::new())
}

mod binding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_arguments() {
        let callable = sum_xy().evaluate(&empty_registry(), &Scope::new());
        assert_eq!(callable.call([2, 3]).unwrap(), Value::Int(5));
    }

    #[test]
    fn too_few_arguments_is_an_arity_error() {
        let callable = sum_xy().evaluate(&empty_registry(), &Scope::new());
        let err = callable.call([2]).unwrap_err();
        assert_eq!(
            err.kind(),
            &EvalErrorKind::ArityMismatch {
                expected: 2,
                got: 1
            }
        );
        assert!(matches!(
            callable.call_array(&[]).unwrap_err().kind(),
            EvalErrorKind::ArityMismatch { expected: 2, got: 0 }
        ));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let callable = sum_xy().evaluate(&empty_registry(), &Scope::new());
        assert_eq!(callable.call([2, 3, 4]).unwrap(), Value::Int(5));
        assert_eq!(callable.call([2, 3, 4, 5, 6]).unwrap(), Value::Int(5));
    }

    #[test]
    fn arguments_bind_positionally() {
        let arrow = ArrowFunc::new(
            ParameterList::from_names(["a", "b"]),
            Some(Node::binary(BinaryOp::Sub, Node::name("a"), Node::name("b"))),
        );
        let callable = arrow.evaluate(&empty_registry(), &Scope::new());
        assert_eq!(callable.call([10, 4]).unwrap(), Value::Int(6));
        assert_eq!(callable.call([4, 10]).unwrap(), Value::Int(-6));
    }

    #[test]
    fn repeated_parameter_takes_last_position() {
        let arrow = ArrowFunc::new(ParameterList::from_names(["x", "x"]), Some(Node::name("x")));
        let callable = arrow.evaluate(&empty_registry(), &Scope::new());
        assert_eq!(callable.call([1, 2]).unwrap(), Value::Int(2));
    }

    #[test]
    fn outer_bindings_are_not_visible() {
        let arrow = ArrowFunc::new(
            ParameterList::from_names(["x"]),
            Some(Node::binary(BinaryOp::Add, Node::name("x"), Node::name("outer"))),
        );
        let outer: Scope = [("outer", 100)].into_iter().collect();
        let callable = arrow.evaluate(&empty_registry(), &outer);
        let err = callable.call([1]).unwrap_err();
        assert_eq!(
            err.kind(),
            &EvalErrorKind::UndefinedVariable {
                name: "outer".to_string()
            }
        );
    }

    #[test]
    fn parameter_shadows_nothing_from_the_caller() {
        let arrow = ArrowFunc::new(ParameterList::from_names(["x"]), Some(Node::name("x")));
        let outer: Scope = [("x", 100)].into_iter().collect();
        let callable = arrow.evaluate(&empty_registry(), &outer);
        assert_eq!(callable.call([7]).unwrap(), Value::Int(7));
    }

    #[test]
    fn zero_parameter_closure_accepts_anything() {
        let arrow = ArrowFunc::new(ParameterList::default(), Some(Node::constant(42)));
        let callable = arrow.evaluate(&empty_registry(), &Scope::new());
        assert_eq!(callable.call_array(&[]).unwrap(), Value::Int(42));
        assert_eq!(callable.call([1, 2, 3]).unwrap(), Value::Int(42));
    }

    #[test]
    fn body_result_is_returned_unchanged() {
        let arrow = ArrowFunc::new(ParameterList::from_names(["v"]), Some(Node::name("v")));
        let callable = arrow.evaluate(&empty_registry(), &Scope::new());
        let list = Value::List(vec![Value::Null, Value::from("s")]);
        assert_eq!(callable.call_array(&[list.clone()]).unwrap(), list);
    }
}

mod noop {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bodyless(params: &[&str]) -> ArrowFunc {
        ArrowFunc::new(ParameterList::from_names(params.iter().copied()), None)
    }

    #[test]
    fn bodyless_returns_shared_singleton() {
        let registry = empty_registry();
        let first = bodyless(&[]).evaluate(&registry, &Scope::new());
        let second = bodyless(&[]).evaluate(&registry, &Scope::new());
        let other_node = bodyless(&["a", "b"]).evaluate(&empty_registry(), &Scope::new());
        assert!(first.ptr_eq(&second));
        assert!(first.ptr_eq(&other_node));
        assert!(first.ptr_eq(noop_callable()));
    }

    #[test]
    fn singleton_returns_null_for_any_arity() {
        let callable = bodyless(&["a", "b"]).evaluate(&empty_registry(), &Scope::new());
        assert_eq!(callable.call_array(&[]).unwrap(), Value::Null);
        assert_eq!(callable.call([1]).unwrap(), Value::Null);
        assert_eq!(callable.call([1, 2, 3, 4]).unwrap(), Value::Null);
    }

    #[test]
    fn bodied_closures_are_fresh() {
        let registry = empty_registry();
        let arrow = sum_xy();
        let a = arrow.evaluate(&registry, &Scope::new());
        let b = arrow.evaluate(&registry, &Scope::new());
        assert!(!a.ptr_eq(&b));
        assert!(!a.ptr_eq(noop_callable()));
    }

    #[test]
    fn singleton_is_shared_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| bodyless(&["x"]).evaluate(&empty_registry(), &Scope::new()))
            })
            .collect();
        for handle in handles {
            let callable = handle.join().unwrap();
            assert!(callable.ptr_eq(noop_callable()));
        }
    }
}

mod late_binding {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn functions_registered_after_evaluation_are_visible() {
        let registry = empty_registry();
        let arrow = ArrowFunc::new(
            ParameterList::from_names(["x"]),
            Some(Node::function("double", vec![Node::name("x")])),
        );
        let callable = arrow.evaluate(&registry, &Scope::new());

        let err = callable.call([4]).unwrap_err();
        assert!(matches!(err.kind(), EvalErrorKind::UndefinedFunction { .. }));

        registry
            .write()
            .register(ExpressionFunction::from_host_fn("double", |args| match args {
                [Value::Int(n)] => Ok(Value::Int(n * 2)),
                _ => Ok(Value::Null),
            }));
        assert_eq!(callable.call([4]).unwrap(), Value::Int(8));
    }

    #[test]
    fn closure_outlives_the_node() {
        let registry = empty_registry();
        let callable = {
            let arrow = sum_xy();
            arrow.evaluate(&registry, &Scope::new())
        };
        assert_eq!(callable.call([20, 22]).unwrap(), Value::Int(42));
    }

    #[test]
    fn closure_can_be_called_from_a_host_function() {
        let registry = empty_registry();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        registry
            .write()
            .register(ExpressionFunction::from_host_fn("apply", move |args| {
                seen.fetch_add(1, Ordering::SeqCst);
                match args {
                    [Value::Callable(f), rest @ ..] => f.call_array(rest),
                    _ => Ok(Value::Null),
                }
            }));

        let node = Node::function(
            "apply",
            vec![
                Node::ArrowFunc(sum_xy()),
                Node::constant(1),
                Node::constant(2),
            ],
        );
        assert_eq!(node.evaluate(&registry, &Scope::new()).unwrap(), Value::Int(3));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
