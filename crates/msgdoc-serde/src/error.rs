// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type for typed flattening and reconstruction.

use std::fmt::Display;

use msgdoc_core::{AdapterError, DocumentError};
use thiserror::Error;

/// Errors raised while flattening or reconstructing a typed message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The document was malformed or not a flat message.
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// Building the document failed.
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    /// The message could not be captured as a value tree.
    #[error("flatten failed: {0}")]
    Flatten(String),
    /// The top-level value is not a struct or map with string keys.
    #[error("value is not a message: expected a struct with named fields")]
    NotAMessage,
    /// A field holds a sequence, map or bytes; only scalars flatten.
    #[error("field `{field}` is not a scalar")]
    NestedValue {
        /// Offending field.
        field: String,
    },
    /// A field's text does not parse as the type the target requested.
    #[error("field `{field}`: expected {expected}")]
    InvalidValue {
        /// Offending field.
        field: String,
        /// Requested type.
        expected: &'static str,
    },
    /// A field arrived after one the schema orders behind it.
    #[error("field `{field}` appears after `{after}`, which the schema orders after it")]
    OutOfOrder {
        /// The field that arrived late.
        field: String,
        /// The field it should have preceded.
        after: String,
    },
    /// Message from a `Deserialize` impl.
    #[error("{0}")]
    Custom(String),
}

impl serde::de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

impl From<serde_value::SerializerError> for Error {
    fn from(err: serde_value::SerializerError) -> Self {
        Self::Flatten(err.to_string())
    }
}
