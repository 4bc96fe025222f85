//! The checking operations themselves.
//!
//! Each operation either returns `Ok(())` with no observable side effect or
//! fails with an [`AttestError`] built at the violation site. Default
//! messages are exact contracts; a caller-supplied message replaces them
//! verbatim, except for the two fixed [`AttestError::BadChoice`] templates.

use std::any::Any;

use crate::allowed::Allowed;
use crate::errors::AttestError;
use crate::subject::Subject;

fn or_default(message: Option<&str>, default: impl FnOnce() -> String) -> String {
    match message {
        Some(message) => message.to_owned(),
        None => default(),
    }
}

/// Checks that the value is truthy (neither nil nor `false`).
pub fn assert<V>(value: &V, message: Option<&str>) -> Result<(), AttestError>
where
    V: Subject + ?Sized,
{
    if value.truthy() {
        return Ok(());
    }
    Err(AttestError::failure(or_default(message, || {
        format!("Expected {} to be truthy.", value.inspect())
    })))
}

/// Checks two values for equality by value.
///
/// Expecting nil is a misuse: the dedicated nil check produces the clearer
/// message, so a nil `expected` fails with the fixed redirect template no
/// matter what `actual` is and no matter what message was supplied.
pub fn assert_equal<T>(expected: &T, actual: &T, message: Option<&str>) -> Result<(), AttestError>
where
    T: Subject + PartialEq,
{
    if expected.is_nil() {
        return Err(AttestError::bad_choice("Use assert_nil when expecting nil"));
    }
    if expected == actual {
        return Ok(());
    }
    Err(AttestError::failure(or_default(message, || {
        format!(
            "Expected: {}\nActual: {}",
            expected.inspect(),
            actual.inspect()
        )
    })))
}

/// Checks that the value is one of the allowed candidates.
///
/// The container must be an ordered list-like sequence; anything else is a
/// misuse and fails with the fixed redirect template before membership is
/// evaluated. The failure message joins plain display forms, not debug
/// forms.
pub fn assert_includes<T, C>(
    ok_values: &C,
    value: &T,
    message: Option<&str>,
) -> Result<(), AttestError>
where
    T: Subject + PartialEq,
    C: Allowed<T> + ?Sized,
{
    let Some(list) = ok_values.as_list() else {
        return Err(AttestError::bad_choice(
            "Use assert_equal if checking equality",
        ));
    };
    if list.iter().any(|candidate| candidate == value) {
        return Ok(());
    }
    Err(AttestError::failure(or_default(message, || {
        let joined: Vec<String> = list.iter().map(Subject::as_display).collect();
        format!(
            "{} is not included in {}",
            value.as_display(),
            joined.join(",")
        )
    })))
}

/// Checks that the object's runtime type is `K`.
pub fn assert_kind_of<K, V>(object: &V, message: Option<&str>) -> Result<(), AttestError>
where
    K: Any,
    V: Subject + Any,
{
    if <dyn Any>::is::<K>(object) {
        return Ok(());
    }
    Err(AttestError::failure(or_default(message, || {
        format!(
            "Expected {} to be a {}. But it was not.",
            object.inspect(),
            std::any::type_name::<K>()
        )
    })))
}

/// Checks that the value is exactly nil.
pub fn assert_nil<V>(value: &V, message: Option<&str>) -> Result<(), AttestError>
where
    V: Subject + ?Sized,
{
    if value.is_nil() {
        return Ok(());
    }
    Err(AttestError::failure(or_default(message, || {
        format!("Expected {} to be nil.", value.inspect())
    })))
}

/// Checks that the value is falsy (nil or `false`).
pub fn refute<V>(value: &V, message: Option<&str>) -> Result<(), AttestError>
where
    V: Subject + ?Sized,
{
    if !value.truthy() {
        return Ok(());
    }
    Err(AttestError::failure(or_default(message, || {
        format!("Expected {} to be falsy.", value.inspect())
    })))
}

/// Checks two values for inequality by value.
pub fn refute_equal<T>(expected: &T, actual: &T, message: Option<&str>) -> Result<(), AttestError>
where
    T: Subject + PartialEq,
{
    if expected != actual {
        return Ok(());
    }
    Err(AttestError::failure(or_default(message, || {
        format!(
            "Expected {} to not be equal to {}.",
            actual.inspect(),
            expected.inspect()
        )
    })))
}
