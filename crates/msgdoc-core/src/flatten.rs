// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Walking a document back into a flat field map.

use std::collections::hash_map::Entry;

use crate::{DocumentError, DocumentReader, ElementName, FieldEntry, FieldMap};

/// A root name and the fields found under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatMessage {
    /// Root element name.
    pub root: ElementName,
    /// Field values keyed by name.
    pub fields: FieldMap,
}

/// Read a whole single-root, flat-children document into a [`FlatMessage`].
///
/// Fails on nested elements, repeated field names, or anything after the root closes.
pub fn read_fields(reader: &mut DocumentReader) -> Result<FlatMessage, DocumentError> {
    let root = reader.read_root()?;
    let mut fields = FieldMap::new();
    while let Some(FieldEntry { name, value }) = reader.read_field()? {
        match fields.entry(name) {
            Entry::Occupied(slot) => {
                return Err(DocumentError::DuplicateField {
                    field: slot.key().clone(),
                })
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    if reader.read() {
        return Err(DocumentError::UnexpectedNode {
            expected: "end of document",
            found: reader.node_kind(),
        });
    }
    Ok(FlatMessage { root, fields })
}
