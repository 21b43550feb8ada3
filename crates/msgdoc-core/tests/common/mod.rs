// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code, clippy::unwrap_used)]

use msgdoc_core::{DocumentReader, FieldMap, NodeKind};
use msgdoc_schema::MessageSchema;

pub fn field_map(pairs: &[(&str, &str)]) -> FieldMap {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

/// `Message` declares `BaseField`; `DerivedMessage` adds two fields.
pub fn derived_schema() -> MessageSchema {
    MessageSchema::base("Message", ["BaseField"])
        .unwrap()
        .derive(
            "DerivedMessage",
            ["TheFirstDerivedElement", "SecondDerivedElement"],
        )
        .unwrap()
}

/// One node as seen by the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Start(String, usize),
    Text(String, usize),
    End(String, usize),
}

/// Read `reader` to the end, recording every node.
pub fn drain(mut reader: DocumentReader) -> Vec<Node> {
    let mut nodes = Vec::new();
    while reader.read() {
        let depth = reader.depth();
        nodes.push(match reader.node_kind() {
            NodeKind::Element => Node::Start(reader.local_name().to_owned(), depth),
            NodeKind::Text => Node::Text(reader.value().to_owned(), depth),
            NodeKind::EndElement => Node::End(reader.local_name().to_owned(), depth),
            NodeKind::None => unreachable!("read() returned true with no node"),
        });
    }
    assert!(reader.is_eof());
    nodes
}

/// Names of the field children, in document order.
pub fn child_names(reader: DocumentReader) -> Vec<String> {
    drain(reader)
        .into_iter()
        .filter_map(|node| match node {
            Node::Start(name, 1) => Some(name),
            _ => None,
        })
        .collect()
}
