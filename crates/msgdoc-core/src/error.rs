// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for document construction and reading.

use thiserror::Error;

use crate::NodeKind;

/// Errors raised by the adapter entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// A required input was absent or unusable. Raised before any work begins.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Name of the offending input.
        argument: &'static str,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// The staged event sequence was malformed.
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl AdapterError {
    pub(crate) fn missing(argument: &'static str) -> Self {
        Self::InvalidArgument {
            argument,
            reason: "required argument not supplied",
        }
    }
}

/// Shape errors in an event sequence or while walking a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// An end event was written with no element open.
    #[error("end element with no open element")]
    UnbalancedEnd,
    /// The sequence finished with elements still open.
    #[error("{open} element(s) left open")]
    UnclosedElements {
        /// Number of elements still open.
        open: usize,
    },
    /// A value event was written with no element open.
    #[error("value written outside any element")]
    ValueOutsideElement,
    /// The reader found a node of the wrong kind.
    #[error("expected {expected}, found {found}")]
    UnexpectedNode {
        /// What the caller was looking for.
        expected: &'static str,
        /// What the reader was positioned on.
        found: NodeKind,
    },
    /// The document ended before the requested node.
    #[error("unexpected end of document")]
    UnexpectedEnd,
    /// A field element contained another element.
    #[error("element `{child}` nested inside field `{parent}`")]
    NestedElement {
        /// The field element.
        parent: String,
        /// The element found inside it.
        child: String,
    },
    /// A field name appeared twice under one root.
    #[error("field `{field}` appears more than once")]
    DuplicateField {
        /// The repeated field name.
        field: String,
    },
    /// The XML writer failed.
    #[error("xml rendering failed: {0}")]
    Render(String),
}
