// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Serde bridge between typed messages and ordered documents.
//!
//! [`to_fields`] flattens a `Serialize` struct into the scalar field map `msgdoc-core`
//! consumes; [`from_reader`] rebuilds a `Deserialize` type from a document reader.
//! [`from_reader_ordered`] reads the way a sequential object mapper does and reports a
//! field that arrives out of schema order instead of silently mis-assigning it.

mod de;
mod error;
mod ser;

pub use de::{from_reader, from_reader_ordered};
pub use error::Error;
pub use ser::{to_document, to_fields};
