// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Document events and the staging writer.

use std::fmt;

use crate::{DocumentError, ElementName};

/// One node of a staged document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// An element opens.
    StartElement(ElementName),
    /// Text content of the innermost open element.
    Text(String),
    /// The innermost open element closes.
    EndElement(ElementName),
}

impl Event {
    /// Node kind a reader reports while positioned on this event.
    pub fn kind(&self) -> NodeKind {
        match self {
            Event::StartElement(_) => NodeKind::Element,
            Event::Text(_) => NodeKind::Text,
            Event::EndElement(_) => NodeKind::EndElement,
        }
    }
}

/// Kind of node a [`DocumentReader`](crate::DocumentReader) is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Not on a node: before the first read or past the end.
    None,
    /// Element start.
    Element,
    /// Element text content.
    Text,
    /// Element end.
    EndElement,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeKind::None => "no node",
            NodeKind::Element => "element start",
            NodeKind::Text => "text",
            NodeKind::EndElement => "element end",
        })
    }
}

/// Stages a well-formed event sequence.
///
/// End events take their name from the element being closed, so a finished sequence is
/// always balanced.
#[derive(Debug, Default)]
pub struct EventWriter {
    events: Vec<Event>,
    open: Vec<ElementName>,
}

impl EventWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Vec::with_capacity(capacity),
            open: Vec::new(),
        }
    }

    /// Open an element.
    pub fn write_start_element(&mut self, name: ElementName) {
        self.events.push(Event::StartElement(name.clone()));
        self.open.push(name);
    }

    /// Write text content into the innermost open element, verbatim.
    pub fn write_value(&mut self, value: &str) -> Result<(), DocumentError> {
        if self.open.is_empty() {
            return Err(DocumentError::ValueOutsideElement);
        }
        self.events.push(Event::Text(value.to_owned()));
        Ok(())
    }

    /// Close the innermost open element.
    pub fn write_end_element(&mut self) -> Result<(), DocumentError> {
        let name = self.open.pop().ok_or(DocumentError::UnbalancedEnd)?;
        self.events.push(Event::EndElement(name));
        Ok(())
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Consume the writer and return the staged events.
    pub fn finish(self) -> Result<Vec<Event>, DocumentError> {
        if !self.open.is_empty() {
            return Err(DocumentError::UnclosedElements {
                open: self.open.len(),
            });
        }
        Ok(self.events)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn name(local: &str) -> ElementName {
        ElementName::new(local, "urn:test").unwrap()
    }

    #[test]
    fn balanced_sequence_finishes() {
        let mut w = EventWriter::new();
        w.write_start_element(name("root"));
        w.write_start_element(name("Age"));
        w.write_value("30").unwrap();
        assert_eq!(w.depth(), 2);
        w.write_end_element().unwrap();
        w.write_end_element().unwrap();
        let events = w.finish().unwrap();
        assert_eq!(
            events,
            vec![
                Event::StartElement(name("root")),
                Event::StartElement(name("Age")),
                Event::Text("30".into()),
                Event::EndElement(name("Age")),
                Event::EndElement(name("root")),
            ]
        );
    }

    #[test]
    fn end_without_start_is_rejected() {
        let mut w = EventWriter::new();
        assert_eq!(w.write_end_element(), Err(DocumentError::UnbalancedEnd));
    }

    #[test]
    fn value_outside_element_is_rejected() {
        let mut w = EventWriter::new();
        assert_eq!(w.write_value("x"), Err(DocumentError::ValueOutsideElement));
    }

    #[test]
    fn unclosed_elements_fail_finish() {
        let mut w = EventWriter::with_capacity(4);
        w.write_start_element(name("root"));
        w.write_start_element(name("Age"));
        assert_eq!(
            w.finish(),
            Err(DocumentError::UnclosedElements { open: 2 })
        );
    }

    #[test]
    fn node_kinds() {
        assert_eq!(Event::StartElement(name("a")).kind(), NodeKind::Element);
        assert_eq!(Event::Text(String::new()).kind(), NodeKind::Text);
        assert_eq!(Event::EndElement(name("a")).kind(), NodeKind::EndElement);
        assert_eq!(NodeKind::EndElement.to_string(), "element end");
    }
}
