// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Namespace-qualified element names.

use std::fmt;

use crate::AdapterError;

/// A `(local name, namespace)` pair naming a document element.
///
/// The root identifier of every document is an `ElementName`; field children reuse the
/// root's namespace. An empty namespace means "no namespace".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementName {
    local: String,
    namespace: String,
}

impl ElementName {
    /// Create a name. The local name must not be empty.
    pub fn new(
        local: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, AdapterError> {
        let local = local.into();
        if local.is_empty() {
            return Err(AdapterError::InvalidArgument {
                argument: "root",
                reason: "local name must not be empty",
            });
        }
        Ok(Self {
            local,
            namespace: namespace.into(),
        })
    }

    /// Name for a child element in this name's namespace.
    pub(crate) fn child(&self, local: &str) -> Self {
        Self {
            local: local.to_owned(),
            namespace: self.namespace.clone(),
        }
    }

    /// Local part of the name.
    pub fn local_name(&self) -> &str {
        &self.local
    }

    /// Namespace URI (empty when unqualified).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl fmt::Display for ElementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.local)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local)
        }
    }
}
