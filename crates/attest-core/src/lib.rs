#![deny(missing_docs)]
//! Assertion primitives for declaring runtime invariants inside arbitrary
//! types. Checks either pass silently or fail with a descriptive,
//! overridable message; misusing the vocabulary itself is a distinct error
//! kind so callers can tell "my data broke an invariant" from "my code
//! called the wrong check".

use std::any::Any;

pub mod checks;
pub mod errors;

mod allowed;
mod subject;

pub use allowed::Allowed;
pub use errors::AttestError;
pub use subject::Subject;

/// Mixin seam giving any adopting type the full checking vocabulary.
///
/// Adoption is an empty impl block:
///
/// ```
/// use attest_core::{Assertable, AttestError};
///
/// struct Dispenser {
///     units: Option<u32>,
/// }
///
/// impl Assertable for Dispenser {}
///
/// impl Dispenser {
///     fn dispense(&mut self) -> Result<(), AttestError> {
///         self.refute_equal(&Some(0), &self.units, None)?;
///         self.units = self.units.map(|units| units - 1);
///         Ok(())
///     }
/// }
/// ```
///
/// Every method forwards to the free functions in [`checks`]; the toolkit
/// holds no state of its own, so repeated passing checks cannot drift.
pub trait Assertable {
    /// Checks that a named zero-argument capability on this instance yields
    /// a truthy result.
    ///
    /// Delegates to the truthy check's raising, but the message always names
    /// the capability instead of describing the raw value:
    /// `Expected :<name> to not be falsy, but it was.`
    fn assert_probe<R>(
        &self,
        name: &str,
        probe: impl FnOnce(&Self) -> R,
    ) -> Result<(), AttestError>
    where
        R: Subject,
    {
        let outcome = probe(self);
        let template = format!("Expected :{name} to not be falsy, but it was.");
        checks::assert(&outcome, Some(template.as_str()))
    }

    /// Checks that the value is truthy (neither nil nor `false`).
    fn assert<V>(&self, value: &V, message: Option<&str>) -> Result<(), AttestError>
    where
        V: Subject + ?Sized,
    {
        checks::assert(value, message)
    }

    /// Checks two values for equality; expecting nil is a misuse.
    fn assert_equal<T>(
        &self,
        expected: &T,
        actual: &T,
        message: Option<&str>,
    ) -> Result<(), AttestError>
    where
        T: Subject + PartialEq,
    {
        checks::assert_equal(expected, actual, message)
    }

    /// Checks that the value is one of the allowed candidates; a
    /// non-sequence container is a misuse.
    fn assert_includes<T, C>(
        &self,
        ok_values: &C,
        value: &T,
        message: Option<&str>,
    ) -> Result<(), AttestError>
    where
        T: Subject + PartialEq,
        C: Allowed<T> + ?Sized,
    {
        checks::assert_includes(ok_values, value, message)
    }

    /// Checks that the object's runtime type is `K`.
    fn assert_kind_of<K, V>(&self, object: &V, message: Option<&str>) -> Result<(), AttestError>
    where
        K: Any,
        V: Subject + Any,
    {
        checks::assert_kind_of::<K, V>(object, message)
    }

    /// Checks that the value is exactly nil.
    fn assert_nil<V>(&self, value: &V, message: Option<&str>) -> Result<(), AttestError>
    where
        V: Subject + ?Sized,
    {
        checks::assert_nil(value, message)
    }

    /// Checks that the value is falsy (nil or `false`).
    fn refute<V>(&self, value: &V, message: Option<&str>) -> Result<(), AttestError>
    where
        V: Subject + ?Sized,
    {
        checks::refute(value, message)
    }

    /// Checks two values for inequality.
    fn refute_equal<T>(
        &self,
        expected: &T,
        actual: &T,
        message: Option<&str>,
    ) -> Result<(), AttestError>
    where
        T: Subject + PartialEq,
    {
        checks::refute_equal(expected, actual, message)
    }
}
