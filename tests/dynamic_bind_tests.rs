#![cfg(all(feature = "typeclass", feature = "data"))]
//! Tests for the runtime-checked bind on erased continuations.

#![allow(clippy::unwrap_used)]

use monadic_do::data::List;
use monadic_do::typeclass::{DynamicBind, MonadError, MonadKind, Value};
use rstest::rstest;

#[rstest]
fn option_returning_result_is_wrong_kind() {
    let error = Some(1)
        .bind_dynamic::<i32, _>(|n| Value::from(Ok::<i32, String>(n)))
        .unwrap_err();
    assert!(matches!(
        error,
        MonadError::WrongMonadKind {
            expected: MonadKind::Option,
            ..
        }
    ));
    assert!(
        error
            .to_string()
            .starts_with("Option.bind: function must return an Option, got ")
    );
}

#[rstest]
#[case(Value::plain(3), "i32")]
#[case(Value::plain("three"), "&str")]
fn result_returning_plain_value_is_wrong_kind(#[case] returned: Value, #[case] found: &str) {
    let mut returned = Some(returned);
    let error = Ok::<i32, String>(1)
        .bind_dynamic::<i32, _>(|_| returned.take().unwrap())
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        format!("Result.bind: function must return a Result, got {found}")
    );
}

#[rstest]
fn list_returning_option_is_wrong_kind() {
    let error = List::from([1, 2])
        .bind_dynamic::<i32, _>(|n| Value::from(Some(n)))
        .unwrap_err();
    assert!(
        error
            .to_string()
            .starts_with("List.bind: function must return a List, got ")
    );
}

#[rstest]
fn list_checks_every_element() {
    let result = List::from([1, 2, 3]).bind_dynamic::<i32, _>(|n| {
        if n < 3 {
            Value::from(List::singleton(n))
        } else {
            Value::plain(n)
        }
    });
    assert!(matches!(result, Err(MonadError::WrongMonadKind { .. })));
}

#[rstest]
fn short_circuits_skip_the_check() {
    let none: Option<i32> = None;
    assert_eq!(
        none.bind_dynamic::<i32, _>(|_| Value::plain("never")),
        Ok(None)
    );

    let failed: Result<i32, String> = Err("boom".to_string());
    assert_eq!(
        failed.bind_dynamic::<i32, _>(|_| Value::plain("never")),
        Ok(Err("boom".to_string()))
    );

    let empty: List<i32> = List::new();
    assert_eq!(
        empty.bind_dynamic::<i32, _>(|_| Value::plain("never")),
        Ok(List::new())
    );
}

#[rstest]
fn matching_kind_with_other_element_type_is_mismatch() {
    let result = Some(1).bind_dynamic::<i32, _>(|n| Value::from(Some(n.to_string())));
    assert!(matches!(result, Err(MonadError::TypeMismatch { .. })));
}
