// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The ordered field list behind every document.

use std::cmp::Ordering;

use msgdoc_schema::FieldOrder;

use crate::{xml, DocumentError, DocumentReader, ElementName, Event, EventWriter, FieldMap};

/// One `name → value` pair of a flattened message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldEntry {
    /// Field name; becomes the child element's local name.
    pub name: String,
    /// Opaque scalar value, carried verbatim.
    pub value: String,
}

impl FieldEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A root name plus its fields in policy order.
///
/// This is the typed form of the document; [`events`](OrderedDocument::events) and
/// [`into_reader`](OrderedDocument::into_reader) expose it as a pull document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedDocument {
    root: ElementName,
    fields: Vec<FieldEntry>,
}

impl OrderedDocument {
    /// Order `fields` with `order` under `root`.
    ///
    /// Entries are arranged ordinally before the policy sort, so map iteration order never
    /// reaches the output and policy ties resolve ordinally. A policy that is not a total
    /// order yields some deterministic order, never a panic.
    pub fn new<O>(root: ElementName, order: &O, fields: &FieldMap) -> Self
    where
        O: FieldOrder + ?Sized,
    {
        let mut entries: Vec<FieldEntry> = fields
            .iter()
            .map(|(name, value)| FieldEntry::new(name.as_str(), value.as_str()))
            .collect();
        entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        let fields = merge_sort(entries, &|a: &FieldEntry, b: &FieldEntry| {
            order.compare(&a.name, &b.name)
        });
        Self { root, fields }
    }

    /// Root element name.
    pub fn root(&self) -> &ElementName {
        &self.root
    }

    /// Fields in document order.
    pub fn fields(&self) -> &[FieldEntry] {
        &self.fields
    }

    /// Field names in document order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Number of child elements.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` for a root with no children.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stage the document: root start, then start/value/end per field, then root end.
    pub fn write_events(&self, writer: &mut EventWriter) -> Result<(), DocumentError> {
        writer.write_start_element(self.root.clone());
        for field in &self.fields {
            writer.write_start_element(self.root.child(&field.name));
            writer.write_value(&field.value)?;
            writer.write_end_element()?;
        }
        writer.write_end_element()
    }

    /// The staged event sequence.
    pub fn events(&self) -> Result<Vec<Event>, DocumentError> {
        let mut writer = EventWriter::with_capacity(2 + 3 * self.fields.len());
        self.write_events(&mut writer)?;
        writer.finish()
    }

    /// Materialize the events into a reader positioned before the root.
    pub fn into_reader(self) -> Result<DocumentReader, DocumentError> {
        Ok(DocumentReader::from_staged(self.events()?))
    }

    /// Render the document as XML text.
    pub fn to_xml(&self) -> Result<String, DocumentError> {
        xml::render(&self.events()?)
    }
}

// `slice::sort_by` may panic when the comparator is not a total order.
fn merge_sort<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let mut left = merge_sort(items, compare).into_iter().peekable();
    let mut right = merge_sort(right, compare).into_iter().peekable();
    let mut merged = Vec::with_capacity(left.len() + right.len());
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}
