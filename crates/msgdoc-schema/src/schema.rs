// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Declarative message type chains.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use thiserror::Error;

use crate::FieldOrder;

/// Errors raised while declaring a [`MessageSchema`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A type level was declared without a name.
    #[error("declared type name must not be empty")]
    EmptyTypeName,
    /// A type level declared a field without a name.
    #[error("type `{type_name}` declares a field with an empty name")]
    EmptyFieldName {
        /// Type that declared the empty field.
        type_name: String,
    },
    /// The same field name was declared twice in one chain.
    #[error("field `{field}` declared on both `{first}` and `{second}`")]
    DuplicateField {
        /// The offending field name.
        field: String,
        /// Type that declared the field first.
        first: String,
        /// Type that declared it again.
        second: String,
    },
}

/// One level of a message type chain: a type and the fields it declares itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredType {
    name: String,
    fields: Vec<String>,
}

impl DeclaredType {
    /// Type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields declared on this level, in ordinal order.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(String::as_str)
    }
}

/// A message type and its ancestors, most-base type first.
///
/// The schema is also the ordering policy for its message: [`FieldOrder::compare`] ranks a
/// field by the depth of its declaring type (base = 0), then ordinally by name. Names the
/// schema does not declare rank after every declared field, ordinally among themselves, so
/// the policy stays total over arbitrary input.
///
/// ```
/// use msgdoc_schema::MessageSchema;
///
/// let schema = MessageSchema::base("TestBaseMessage", ["Name", "Age"])?
///     .derive("TestDerivedMessage", ["TheFirstDerivedElement", "SecondDerivedElement"])?;
///
/// assert_eq!(
///     schema.ordered_fields(),
///     ["Age", "Name", "SecondDerivedElement", "TheFirstDerivedElement"]
/// );
/// # Ok::<(), msgdoc_schema::SchemaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageSchema {
    types: Vec<DeclaredType>,
    depths: BTreeMap<String, usize>,
}

impl MessageSchema {
    /// Start a chain with its most-base type.
    pub fn base<I, S>(name: impl Into<String>, fields: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: Vec::new(),
            depths: BTreeMap::new(),
        }
        .push_level(name.into(), fields)
    }

    /// Extend the chain with a type derived from the current most-derived type.
    pub fn derive<I, S>(self, name: impl Into<String>, fields: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_level(name.into(), fields)
    }

    fn push_level<I, S>(mut self, name: String, fields: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if name.is_empty() {
            return Err(SchemaError::EmptyTypeName);
        }
        let depth = self.types.len();
        let mut declared = Vec::new();
        for field in fields {
            let field = field.into();
            if field.is_empty() {
                return Err(SchemaError::EmptyFieldName { type_name: name });
            }
            if let Some(&first) = self.depths.get(&field) {
                // A repeat within the level being declared has no `types` entry yet.
                let first = self
                    .types
                    .get(first)
                    .map_or_else(|| name.clone(), |t| t.name.clone());
                return Err(SchemaError::DuplicateField {
                    field,
                    first,
                    second: name,
                });
            }
            self.depths.insert(field.clone(), depth);
            declared.push(field);
        }
        declared.sort_unstable();
        self.types.push(DeclaredType {
            name,
            fields: declared,
        });
        Ok(self)
    }

    /// Name of the most-derived type.
    pub fn name(&self) -> &str {
        self.types.last().map_or("", |t| t.name.as_str())
    }

    /// Type levels, most-base first.
    pub fn types(&self) -> impl Iterator<Item = &DeclaredType> + '_ {
        self.types.iter()
    }

    /// Number of fields declared across the whole chain.
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    /// Returns `true` if no level declares any field.
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Returns `true` if some level declares `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.depths.contains_key(field)
    }

    /// Depth of the type declaring `field` (0 for the most-base type).
    pub fn depth_of(&self, field: &str) -> Option<usize> {
        self.depths.get(field).copied()
    }

    /// Name of the type declaring `field`.
    pub fn declaring_type(&self, field: &str) -> Option<&str> {
        self.depth_of(field)
            .and_then(|depth| self.types.get(depth))
            .map(DeclaredType::name)
    }

    /// Every declared field in the order a sequential mapper enumerates them.
    pub fn ordered_fields(&self) -> Vec<&str> {
        self.types.iter().flat_map(DeclaredType::fields).collect()
    }
}

impl FieldOrder for MessageSchema {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let rank = |field: &str| self.depth_of(field).unwrap_or(usize::MAX);
        rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
    }
}
