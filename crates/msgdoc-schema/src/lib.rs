// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Message schemas and field ordering policies.
//!
//! A protocol message is flattened into an unordered bag of `name → value` pairs before it
//! reaches `msgdoc-core`. Reconstructing a derived message type from that bag requires the
//! children to appear in the order a sequential object mapper enumerates fields:
//!
//! 1. fields declared on a more-base type precede fields declared on a more-derived type;
//! 2. within one declaring type, fields are ordered ordinally by name.
//!
//! This crate owns that rule. [`FieldOrder`] is the comparator seam the adapter consumes;
//! [`MessageSchema`] is the declarative description of a type chain and the policy that
//! implements the rule above. The adapter never looks at type metadata itself.

mod order;
mod schema;

pub use order::{FieldOrder, Ordinal};
pub use schema::{DeclaredType, MessageSchema, SchemaError};
