use field_rail::{ErrorMessage, Validation};

#[test]
fn iter_valid_yields_single_value_and_len_updates() {
    let v = Validation::valid(7);
    let mut iter = v.iter();

    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&7));
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_invalid_is_empty() {
    let v = Validation::<i32>::invalid_message("error");
    assert_eq!(v.iter().len(), 0);
    assert_eq!(v.iter().next(), None);
}

#[test]
fn iter_mut_allows_editing_value() {
    let mut valid = Validation::valid(3);
    if let Some(value) = valid.iter_mut().next() {
        *value = 4;
    }
    assert_eq!(valid.into_value(), Some(4));

    let mut invalid = Validation::<i32>::invalid_message("x");
    assert!(invalid.iter_mut().next().is_none());
}

#[test]
fn iter_errors_exposes_all_errors_in_order() {
    let v = Validation::<i32>::invalid_many([
        ErrorMessage::of("a"),
        ErrorMessage::of("b"),
        ErrorMessage::of("c"),
    ]);
    let mut iter = v.iter_errors();

    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next().map(ErrorMessage::message), Some("a"));
    let rest: Vec<_> = iter.map(ErrorMessage::message).collect();
    assert_eq!(rest, vec!["b", "c"]);

    assert_eq!(Validation::valid(1).iter_errors().count(), 0);
}

#[test]
fn for_loops_over_references() {
    let v = Validation::valid(String::from("x"));
    let mut seen = Vec::new();
    for value in &v {
        seen.push(value.clone());
    }
    assert_eq!(seen, vec!["x".to_string()]);
}
