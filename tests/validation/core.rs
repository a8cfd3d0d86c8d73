use field_rail::{ErrorMessage, Path, Validation};
use std::cell::Cell;

#[test]
fn valid_and_invalid_helpers_behave_as_expected() {
    let valid = Validation::valid(5);
    assert!(valid.is_valid());
    assert!(valid.errors().is_empty());
    assert_eq!(valid.value(), Some(&5));
    assert_eq!(valid.into_value(), Some(5));

    let invalid = Validation::<i32>::invalid_message("missing");
    assert!(invalid.is_invalid());
    assert_eq!(invalid.value(), None);
    let errors = invalid.into_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "missing");
    assert_eq!(errors[0].paths().count(), 0);
}

#[test]
fn empty_invalid_is_still_invalid() {
    let empty = Validation::<i32>::invalid_many([]);
    assert!(!empty.is_valid());
    assert!(empty.is_invalid());
    assert!(empty.errors().is_empty());
}

#[test]
fn map_and_and_then_chain_success_values() {
    let result = Validation::valid(4).map(|x| x * 2).and_then(|x| {
        if x == 8 {
            Validation::valid(x + 1)
        } else {
            Validation::invalid_message("unexpected")
        }
    });

    assert_eq!(result.into_value(), Some(9));
}

#[test]
fn map_never_touches_errors() {
    let original = Validation::<i32>::invalid_many([
        ErrorMessage::of("e1").prepend(Path::named("a")),
        ErrorMessage::of("e2"),
    ]);
    let calls = Cell::new(0);

    let mapped = original.clone().map(|x| {
        calls.set(calls.get() + 1);
        x.to_string()
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(mapped.errors(), original.errors());
}

#[test]
fn and_then_skips_function_when_invalid() {
    let calls = Cell::new(0);
    let result = Validation::<i32>::invalid_message("first").and_then(|x| {
        calls.set(calls.get() + 1);
        Validation::valid(x)
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(result.rendered_errors(), vec!["first"]);
}

#[test]
fn and_then_returns_inner_failure() {
    let result = Validation::valid(3).and_then(|_| Validation::<u8>::invalid_message("inner"));
    assert_eq!(result.rendered_errors(), vec!["inner"]);
}

#[test]
fn identity_round_trip_through_fold() {
    for x in [-1, 0, 42] {
        let back = Validation::valid(x).map(|v| v).fold(|_| unreachable!(), |v| v);
        assert_eq!(back, x);
    }
}

#[test]
fn fold_runs_exactly_one_branch() {
    let invalid_calls = Cell::new(0);
    let valid_calls = Cell::new(0);

    Validation::<i32>::invalid_message("x").fold(
        |errors| {
            invalid_calls.set(invalid_calls.get() + 1);
            assert_eq!(errors.len(), 1);
        },
        |_| valid_calls.set(valid_calls.get() + 1),
    );

    assert_eq!((invalid_calls.get(), valid_calls.get()), (1, 0));
}

#[test]
fn map_errors_is_identity_on_valid() {
    let v = Validation::valid(1).map_errors(|_| unreachable!());
    assert_eq!(v, Validation::valid(1));
}

#[test]
fn map_errors_replaces_error_list() {
    let v = Validation::<i32>::invalid_message("a")
        .map_errors(|errors| errors.into_iter().chain([ErrorMessage::of("b")]).collect());
    assert_eq!(v.rendered_errors(), vec!["a", "b"]);
}

#[test]
fn at_prefixes_field_name() {
    let v = Validation::<String>::invalid_message("must.not.be.null").at("field");
    assert_eq!(v.rendered_errors(), vec!["field.must.not.be.null"]);
}

#[test]
fn at_composes_outermost_last() {
    let v = Validation::<String>::invalid_message("must.not.be.null").at("nested").at("root");
    assert_eq!(v.rendered_errors(), vec!["root.nested.must.not.be.null"]);
}

#[test]
fn at_is_noop_on_valid() {
    assert_eq!(Validation::valid("x").at("field"), Validation::valid("x"));
}

#[test]
fn at_applies_to_every_error() {
    let v = Validation::<()>::invalid_many([ErrorMessage::of("a"), ErrorMessage::of("b")]).at("f");
    assert_eq!(v.rendered_errors(), vec!["f.a", "f.b"]);
}

#[test]
fn zip_accumulates_both_sides() {
    let v = Validation::<i32>::invalid_message("error1")
        .zip(Validation::<String>::invalid_message("error2"));
    assert_eq!(v.rendered_errors(), vec!["error1", "error2"]);

    let v = Validation::valid(1).zip(Validation::valid("a"));
    assert_eq!(v.into_value(), Some((1, "a")));
}

#[test]
fn narrow_converts_value_only() {
    let wide: Validation<i64> = Validation::valid(7_i32).narrow();
    assert_eq!(wide, Validation::valid(7_i64));

    let failed: Validation<i64> = Validation::<i32>::invalid_message("bad").at("n").narrow();
    assert_eq!(failed.rendered_errors(), vec!["n.bad"]);
}

#[test]
fn result_conversions() {
    let ok = Validation::from_result(Ok::<_, ErrorMessage>(42));
    assert_eq!(ok.to_result().ok(), Some(42));

    let err = Validation::<i32>::from_result(Err(ErrorMessage::of("boom")));
    assert_eq!(err.clone().to_result().unwrap_err().len(), 1);

    let as_result: Result<i32, field_rail::ValidationError> = err.into();
    assert_eq!(as_result.unwrap_err().to_string(), "boom");
}

#[test]
fn from_impls_build_invalid() {
    let single: Validation<u8> = ErrorMessage::of("one").into();
    assert_eq!(single.rendered_errors(), vec!["one"]);

    let many: Validation<u8> =
        Validation::<u8>::from_errors([ErrorMessage::of("a"), ErrorMessage::of("b")].into_iter().collect());
    assert_eq!(many.errors().len(), 2);
}
