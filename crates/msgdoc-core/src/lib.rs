// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ordered document adapter.
//!
//! A flattened protocol message arrives as an unordered [`FieldMap`]. Sequential object
//! mappers reconstruct a message by walking its children in a fixed order, so the map has
//! to be presented as a document whose children already follow that order. This crate:
//!
//! - sorts the map's entries with a caller-supplied [`FieldOrder`](msgdoc_schema::FieldOrder)
//!   policy ([`OrderedDocument`]);
//! - stages the result as a single-root, flat-children event sequence ([`EventWriter`]);
//! - exposes it through a forward-only pull reader ([`DocumentReader`]).
//!
//! [`build`] is the one-call entry point; [`Adapter`] adds a configured namespace and
//! trace logging; [`read_fields`] walks a reader back into a map.
//!
//! The adapter never inspects values. A value is carried verbatim into the text of its
//! child element, and the input map is never modified.

mod adapter;
mod config;
mod document;
mod error;
mod event;
mod flatten;
mod name;
mod reader;
mod xml;

use std::collections::HashMap;

pub use adapter::{build, Adapter, DocumentBuilder};
pub use config::{AdapterConfig, ConfigError};
pub use document::{FieldEntry, OrderedDocument};
pub use error::{AdapterError, DocumentError};
pub use event::{Event, EventWriter, NodeKind};
pub use flatten::{read_fields, FlatMessage};
pub use name::ElementName;
pub use reader::DocumentReader;

/// A flattened message: field name to scalar value, in no particular order.
pub type FieldMap = HashMap<String, String>;
