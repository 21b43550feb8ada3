// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Entry points that turn a field map into a readable document.

use msgdoc_schema::FieldOrder;
use tracing::{debug, instrument, trace, warn, Level};

use crate::{AdapterConfig, AdapterError, DocumentReader, ElementName, FieldMap, OrderedDocument};

/// Build a pull document for `fields` under `root`, children ordered by `order`.
///
/// Every map entry becomes exactly one child element; an empty map yields a root with no
/// children. The input map is only read. Calling this twice with equal inputs yields
/// readers over identical event sequences.
#[instrument(level = "debug", skip_all, fields(root = %root, fields = fields.len()))]
pub fn build<O>(
    root: &ElementName,
    order: &O,
    fields: &FieldMap,
) -> Result<DocumentReader, AdapterError>
where
    O: FieldOrder + ?Sized,
{
    let reader = assemble(root.clone(), order, fields)?;
    trace_document(&reader);
    Ok(reader)
}

fn assemble<O>(
    root: ElementName,
    order: &O,
    fields: &FieldMap,
) -> Result<DocumentReader, AdapterError>
where
    O: FieldOrder + ?Sized,
{
    let document = OrderedDocument::new(root, order, fields);
    debug!(children = document.len(), "document ordered");
    Ok(document.into_reader()?)
}

fn trace_document(reader: &DocumentReader) {
    if !tracing::enabled!(Level::TRACE) {
        return;
    }
    match reader.to_xml() {
        Ok(xml) => trace!(%xml, "built document"),
        Err(err) => warn!(error = %err, "could not render document for tracing"),
    }
}

/// Builder form of [`build`] where each input may be left unset.
///
/// [`build`](DocumentBuilder::build) fails with [`AdapterError::InvalidArgument`] naming
/// the first missing input (`root`, `ordering`, then `fields`) before any work is done.
#[derive(Default)]
pub struct DocumentBuilder<'a> {
    root: Option<ElementName>,
    order: Option<&'a dyn FieldOrder>,
    fields: Option<&'a FieldMap>,
}

impl<'a> DocumentBuilder<'a> {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root element name.
    #[must_use]
    pub fn root(mut self, root: ElementName) -> Self {
        self.root = Some(root);
        self
    }

    /// Set the ordering policy.
    #[must_use]
    pub fn ordering(mut self, order: &'a dyn FieldOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Set the field map.
    #[must_use]
    pub fn fields(mut self, fields: &'a FieldMap) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Validate inputs and build the document.
    pub fn build(self) -> Result<DocumentReader, AdapterError> {
        let root = self.root.ok_or_else(|| AdapterError::missing("root"))?;
        let order = self.order.ok_or_else(|| AdapterError::missing("ordering"))?;
        let fields = self.fields.ok_or_else(|| AdapterError::missing("fields"))?;
        build(&root, order, fields)
    }
}

/// A configured adapter: fixes the namespace and tracing behaviour for every build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adapter {
    config: AdapterConfig,
}

impl Adapter {
    /// Adapter using `config`.
    pub fn new(config: AdapterConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Root name with the configured namespace.
    pub fn root(&self, local_name: &str) -> Result<ElementName, AdapterError> {
        ElementName::new(local_name, self.config.namespace.as_str())
    }

    /// Build a document rooted at `local_name` in the configured namespace.
    #[instrument(
        level = "debug",
        skip_all,
        fields(root = local_name, namespace = %self.config.namespace, fields = fields.len())
    )]
    pub fn build<O>(
        &self,
        local_name: &str,
        order: &O,
        fields: &FieldMap,
    ) -> Result<DocumentReader, AdapterError>
    where
        O: FieldOrder + ?Sized,
    {
        let reader = assemble(self.root(local_name)?, order, fields)?;
        if self.config.trace_documents {
            trace_document(&reader);
        }
        Ok(reader)
    }
}
