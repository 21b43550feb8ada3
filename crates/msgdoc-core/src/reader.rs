// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Forward-only pull reader over a staged document.

use crate::{xml, DocumentError, ElementName, Event, EventWriter, FieldEntry, NodeKind};

/// Forward-only, single-pass reader over an owned event buffer.
///
/// The reader starts positioned before the first node ([`NodeKind::None`]). Each
/// [`read`](DocumentReader::read) advances one node; reading past the last node returns
/// `false` and leaves the reader at end of document, which is not an error.
///
/// Depth follows the usual pull-reader convention: the root element is at depth 0, its
/// field elements at depth 1, and field text at depth 2.
///
/// The reader owns its buffer and holds no reference to whatever built it. `Clone` copies
/// the buffer together with the current position, giving an independent reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentReader {
    events: Vec<Event>,
    next: usize,
    current: Option<usize>,
    open: usize,
    depth: usize,
    eof: bool,
}

impl DocumentReader {
    /// Wrap a validated event sequence.
    ///
    /// End events are renamed after the element they close, matching what
    /// [`EventWriter`] would have staged.
    pub fn from_events(events: Vec<Event>) -> Result<Self, DocumentError> {
        let mut writer = EventWriter::with_capacity(events.len());
        for event in events {
            match event {
                Event::StartElement(name) => writer.write_start_element(name),
                Event::Text(text) => writer.write_value(&text)?,
                Event::EndElement(_) => writer.write_end_element()?,
            }
        }
        Ok(Self::from_staged(writer.finish()?))
    }

    pub(crate) fn from_staged(events: Vec<Event>) -> Self {
        Self {
            events,
            next: 0,
            current: None,
            open: 0,
            depth: 0,
            eof: false,
        }
    }

    /// Advance to the next node. Returns `false` at end of document.
    pub fn read(&mut self) -> bool {
        let Some(event) = self.events.get(self.next) else {
            self.current = None;
            self.depth = 0;
            self.eof = true;
            return false;
        };
        match event {
            Event::StartElement(_) => {
                self.depth = self.open;
                self.open += 1;
            }
            Event::Text(_) => self.depth = self.open,
            Event::EndElement(_) => {
                self.open = self.open.saturating_sub(1);
                self.depth = self.open;
            }
        }
        self.current = Some(self.next);
        self.next += 1;
        true
    }

    fn current_event(&self) -> Option<&Event> {
        self.current.and_then(|i| self.events.get(i))
    }

    /// Kind of the current node.
    pub fn node_kind(&self) -> NodeKind {
        self.current_event().map_or(NodeKind::None, Event::kind)
    }

    /// Name of the current element start or end.
    pub fn name(&self) -> Option<&ElementName> {
        match self.current_event()? {
            Event::StartElement(name) | Event::EndElement(name) => Some(name),
            Event::Text(_) => None,
        }
    }

    /// Local name of the current element, or `""` on other nodes.
    pub fn local_name(&self) -> &str {
        self.name().map_or("", ElementName::local_name)
    }

    /// Namespace of the current element, or `""` on other nodes.
    pub fn namespace(&self) -> &str {
        self.name().map_or("", ElementName::namespace)
    }

    /// Text of the current node, or `""` when it is not text.
    pub fn value(&self) -> &str {
        match self.current_event() {
            Some(Event::Text(text)) => text,
            _ => "",
        }
    }

    /// Depth of the current node.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` once a read has run past the last node.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// The whole backing buffer, independent of the read position.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Render the whole backing buffer as XML text.
    pub fn to_xml(&self) -> Result<String, DocumentError> {
        xml::render(&self.events)
    }

    /// Read the root element start and return its name.
    pub fn read_root(&mut self) -> Result<ElementName, DocumentError> {
        if !self.read() {
            return Err(DocumentError::UnexpectedEnd);
        }
        match self.current_event() {
            Some(Event::StartElement(name)) if self.depth == 0 => Ok(name.clone()),
            _ => Err(DocumentError::UnexpectedNode {
                expected: "root element",
                found: self.node_kind(),
            }),
        }
    }

    /// Read the next field child of the root.
    ///
    /// Returns `None` after consuming the root end (or at end of document). Text split
    /// across several events is concatenated; a field with no text has an empty value.
    pub fn read_field(&mut self) -> Result<Option<FieldEntry>, DocumentError> {
        if !self.read() {
            return Ok(None);
        }
        let name = match self.current_event() {
            Some(Event::EndElement(_)) if self.depth == 0 => return Ok(None),
            Some(Event::StartElement(name)) => name.local_name().to_owned(),
            _ => {
                return Err(DocumentError::UnexpectedNode {
                    expected: "field element",
                    found: self.node_kind(),
                })
            }
        };
        let mut value = String::new();
        loop {
            if !self.read() {
                return Err(DocumentError::UnexpectedEnd);
            }
            match self.current_event() {
                Some(Event::Text(text)) => value.push_str(text),
                Some(Event::EndElement(_)) => break,
                Some(Event::StartElement(child)) => {
                    return Err(DocumentError::NestedElement {
                        parent: name,
                        child: child.local_name().to_owned(),
                    })
                }
                None => return Err(DocumentError::UnexpectedEnd),
            }
        }
        Ok(Some(FieldEntry { name, value }))
    }
}
