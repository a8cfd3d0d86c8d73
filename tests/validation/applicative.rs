use field_rail::validation::applicative::*;
use field_rail::Validation;

fn ok(n: u32) -> Validation<u32> {
    Validation::valid(n)
}

fn err(message: &str) -> Validation<u32> {
    Validation::invalid_message(message)
}

#[test]
fn map_all_valid_combines_values() {
    assert_eq!(map2(ok(1), ok(2), |a, b| a + b).into_value(), Some(3));
    assert_eq!(map3(ok(1), ok(2), ok(3), |a, b, c| a + b + c).into_value(), Some(6));
    assert_eq!(
        map4(ok(1), ok(2), ok(3), ok(4), |a, b, c, d| a + b + c + d).into_value(),
        Some(10)
    );
    assert_eq!(
        map5(ok(1), ok(2), ok(3), ok(4), ok(5), |a, b, c, d, e| a + b + c + d + e).into_value(),
        Some(15)
    );
    assert_eq!(
        map6(ok(1), ok(2), ok(3), ok(4), ok(5), ok(6), |a, b, c, d, e, f| {
            a + b + c + d + e + f
        })
        .into_value(),
        Some(21)
    );
    assert_eq!(
        map7(ok(1), ok(2), ok(3), ok(4), ok(5), ok(6), ok(7), |a, b, c, d, e, f, g| {
            a + b + c + d + e + f + g
        })
        .into_value(),
        Some(28)
    );
    assert_eq!(
        map8(ok(1), ok(2), ok(3), ok(4), ok(5), ok(6), ok(7), ok(8), |a, b, c, d, e, f, g, h| {
            a + b + c + d + e + f + g + h
        })
        .into_value(),
        Some(36)
    );
}

#[test]
fn map_all_invalid_keeps_every_error_in_order() {
    let v = map2(err("e1"), err("e2"), |_, _| ());
    assert_eq!(v.rendered_errors(), vec!["e1", "e2"]);

    let v = map3(err("e1"), err("e2"), err("e3"), |_, _, _| ());
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3"]);

    let v = map4(err("e1"), err("e2"), err("e3"), err("e4"), |_, _, _, _| ());
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3", "e4"]);

    let v = map5(err("e1"), err("e2"), err("e3"), err("e4"), err("e5"), |_, _, _, _, _| ());
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3", "e4", "e5"]);

    let v = map6(
        err("e1"),
        err("e2"),
        err("e3"),
        err("e4"),
        err("e5"),
        err("e6"),
        |_, _, _, _, _, _| (),
    );
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3", "e4", "e5", "e6"]);

    let v = map7(
        err("e1"),
        err("e2"),
        err("e3"),
        err("e4"),
        err("e5"),
        err("e6"),
        err("e7"),
        |_, _, _, _, _, _, _| (),
    );
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3", "e4", "e5", "e6", "e7"]);

    let v = map8(
        err("e1"),
        err("e2"),
        err("e3"),
        err("e4"),
        err("e5"),
        err("e6"),
        err("e7"),
        err("e8"),
        |_, _, _, _, _, _, _, _| (),
    );
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3", "e4", "e5", "e6", "e7", "e8"]);
}

#[test]
fn map_mixed_skips_valid_arguments() {
    let v = map4(ok(1), err("e2"), ok(3), err("e4"), |_, _, _, _| ());
    assert_eq!(v.rendered_errors(), vec!["e2", "e4"]);
}

#[test]
fn map_does_not_call_function_on_failure() {
    let mut called = false;
    let v = map2(ok(1), err("e2"), |_, _| called = true);
    assert!(v.is_invalid());
    assert!(!called);
}

#[test]
fn map_accepts_heterogeneous_types() {
    let v = map3(
        Validation::valid("hugh".to_string()),
        Validation::valid(30_u8),
        Validation::valid(true),
        |name, age, active| format!("{name}:{age}:{active}"),
    );
    assert_eq!(v.into_value().as_deref(), Some("hugh:30:true"));
}

#[test]
fn map_keeps_field_paths() {
    let v = map2(err("must.be.positive").at("age"), err("too.short").at("name"), |a, b| a + b);
    assert_eq!(v.rendered_errors(), vec!["age.must.be.positive", "name.too.short"]);
}

#[test]
fn flat_map_all_valid_returns_function_result_unwrapped() {
    let sum = flat_map2(ok(1), ok(2), |a, b| ok(a + b));
    assert_eq!(sum.into_value(), Some(3));

    let rejected = flat_map3(ok(1), ok(2), ok(3), |_, _, _| err("sum.too.small"));
    assert_eq!(rejected.rendered_errors(), vec!["sum.too.small"]);

    let v = flat_map8(ok(1), ok(2), ok(3), ok(4), ok(5), ok(6), ok(7), ok(8), |a, _, _, _, _, _, _, h| {
        ok(a * h)
    });
    assert_eq!(v.into_value(), Some(8));
}

#[test]
fn flat_map_all_invalid_keeps_every_error_in_order() {
    let v = flat_map2(err("e1"), err("e2"), |_, _| ok(0));
    assert_eq!(v.rendered_errors(), vec!["e1", "e2"]);

    let v = flat_map3(err("e1"), err("e2"), err("e3"), |_, _, _| ok(0));
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3"]);

    let v = flat_map4(err("e1"), err("e2"), err("e3"), err("e4"), |_, _, _, _| ok(0));
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3", "e4"]);

    let v = flat_map5(err("e1"), err("e2"), err("e3"), err("e4"), err("e5"), |_, _, _, _, _| {
        ok(0)
    });
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3", "e4", "e5"]);

    let v = flat_map6(
        err("e1"),
        err("e2"),
        err("e3"),
        err("e4"),
        err("e5"),
        err("e6"),
        |_, _, _, _, _, _| ok(0),
    );
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3", "e4", "e5", "e6"]);

    let v = flat_map7(
        err("e1"),
        err("e2"),
        err("e3"),
        err("e4"),
        err("e5"),
        err("e6"),
        err("e7"),
        |_, _, _, _, _, _, _| ok(0),
    );
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3", "e4", "e5", "e6", "e7"]);

    let v = flat_map8(
        err("e1"),
        err("e2"),
        err("e3"),
        err("e4"),
        err("e5"),
        err("e6"),
        err("e7"),
        err("e8"),
        |_, _, _, _, _, _, _, _| ok(0),
    );
    assert_eq!(v.rendered_errors(), vec!["e1", "e2", "e3", "e4", "e5", "e6", "e7", "e8"]);
}

#[test]
fn multiple_errors_per_argument_stay_grouped() {
    let first = Validation::sequence(vec![err("a"), err("b")]);
    let second = err("c").at("other");
    let v = map2(first, second, |_, _| ());
    assert_eq!(v.rendered_errors(), vec!["[0].a", "[1].b", "other.c"]);
}
