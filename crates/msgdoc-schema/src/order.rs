// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Field ordering policy seam.

use std::cmp::Ordering;

/// Relative order of two field names.
///
/// Implementations are expected to be a total order over the names they are asked about.
/// Consumers must tolerate a policy that is not: the result is then an unspecified order,
/// never a panic.
///
/// Any `Fn(&str, &str) -> Ordering` closure is a policy:
///
/// ```
/// use msgdoc_schema::FieldOrder;
/// use std::cmp::Ordering;
///
/// let reversed = |a: &str, b: &str| b.cmp(a);
/// assert_eq!(reversed.compare("a", "b"), Ordering::Greater);
/// ```
pub trait FieldOrder {
    /// Order `a` relative to `b`.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> FieldOrder for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Plain ordinal (byte-wise) ordering of field names.
///
/// Equivalent to a schema in which every field is declared on the same type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordinal;

impl FieldOrder for Ordinal {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}
