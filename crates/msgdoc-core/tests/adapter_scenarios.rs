// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! End-to-end scenarios for building and reading ordered documents.
#![allow(clippy::unwrap_used, clippy::panic)]

mod common;

use std::cmp::Ordering;
use std::io;
use std::sync::{Arc, Mutex};

use common::{child_names, derived_schema, drain, field_map, Node};
use msgdoc_core::{
    build, read_fields, Adapter, AdapterConfig, AdapterError, DocumentBuilder, DocumentError,
    ElementName, FieldMap,
};
use msgdoc_schema::Ordinal;
use tracing::Level;

fn person() -> ElementName {
    ElementName::new("person", "").unwrap()
}

#[test]
fn alphabetical_policy_orders_children() {
    let fields = field_map(&[("Name", "Ann"), ("Age", "30")]);
    let reader = build(&person(), &Ordinal, &fields).unwrap();
    assert_eq!(
        drain(reader),
        vec![
            Node::Start("person".into(), 0),
            Node::Start("Age".into(), 1),
            Node::Text("30".into(), 2),
            Node::End("Age".into(), 1),
            Node::Start("Name".into(), 1),
            Node::Text("Ann".into(), 2),
            Node::End("Name".into(), 1),
            Node::End("person".into(), 0),
        ]
    );
}

#[test]
fn base_fields_precede_derived_fields() {
    let fields = field_map(&[
        ("TheFirstDerivedElement", "1"),
        ("SecondDerivedElement", "2"),
        ("BaseField", "0"),
    ]);
    let root = ElementName::new("DerivedMessage", "").unwrap();
    let reader = build(&root, &derived_schema(), &fields).unwrap();
    assert_eq!(
        child_names(reader),
        ["BaseField", "SecondDerivedElement", "TheFirstDerivedElement"]
    );
}

#[test]
fn empty_map_yields_bare_root() {
    let reader = build(&person(), &Ordinal, &FieldMap::new()).unwrap();
    assert_eq!(
        drain(reader),
        vec![Node::Start("person".into(), 0), Node::End("person".into(), 0)]
    );
}

#[test]
fn each_missing_input_is_an_invalid_argument() {
    let fields = field_map(&[("Age", "30")]);
    let cases = [
        DocumentBuilder::new().ordering(&Ordinal).fields(&fields),
        DocumentBuilder::new().root(person()).fields(&fields),
        DocumentBuilder::new().root(person()).ordering(&Ordinal),
    ];
    let expected = ["root", "ordering", "fields"];
    for (builder, argument) in cases.into_iter().zip(expected) {
        match builder.build() {
            Err(AdapterError::InvalidArgument { argument: got, .. }) => assert_eq!(got, argument),
            other => panic!("expected InvalidArgument for {argument}, got {other:?}"),
        }
    }
}

#[test]
fn empty_root_name_is_an_invalid_argument() {
    assert!(matches!(
        ElementName::new("", "urn:example"),
        Err(AdapterError::InvalidArgument { argument: "root", .. })
    ));
}

#[test]
fn building_twice_is_identical() {
    let fields = field_map(&[("b", "2"), ("a", "1"), ("c", "3")]);
    let first = build(&person(), &Ordinal, &fields).unwrap();
    let second = build(&person(), &Ordinal, &fields).unwrap();
    assert_eq!(first.events(), second.events());
    assert_eq!(first.to_xml().unwrap(), second.to_xml().unwrap());
}

#[test]
fn readers_are_independent() {
    let fields = field_map(&[("a", "1")]);
    let mut first = build(&person(), &Ordinal, &fields).unwrap();
    let second = first.clone();
    while first.read() {}
    assert!(first.is_eof());
    assert_eq!(drain(second).len(), 5);
}

#[test]
fn inconsistent_policy_is_safe() {
    // Claims every pair is ordered "less", in both directions.
    let always_less = |_: &str, _: &str| Ordering::Less;
    let fields = field_map(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4"), ("e", "5")]);
    let first = build(&person(), &always_less, &fields).unwrap();
    let second = build(&person(), &always_less, &fields).unwrap();
    assert_eq!(first.events(), second.events());

    let mut names = child_names(first);
    names.sort();
    assert_eq!(names, ["a", "b", "c", "d", "e"]);
}

#[test]
fn xml_text_matches_document_order() {
    let fields = field_map(&[("Name", "Ann"), ("Age", "30")]);
    let reader = build(&person(), &Ordinal, &fields).unwrap();
    assert_eq!(
        reader.to_xml().unwrap(),
        "<person><Age>30</Age><Name>Ann</Name></person>"
    );
}

#[test]
fn configured_namespace_reaches_root_and_children() {
    let config = AdapterConfig::from_json_slice(br#"{"namespace":"urn:example:v1"}"#).unwrap();
    let adapter = Adapter::new(config);
    let fields = field_map(&[("Name", "Ann"), ("Age", "30")]);
    let reader = adapter.build("person", &Ordinal, &fields).unwrap();
    assert_eq!(
        reader.to_xml().unwrap(),
        r#"<person xmlns="urn:example:v1"><Age>30</Age><Name>Ann</Name></person>"#
    );
}

#[test]
fn document_reads_back_into_the_same_map() {
    let fields = field_map(&[("Name", "Ann"), ("Age", "30"), ("Nick", "")]);
    let mut reader = build(&person(), &derived_schema(), &fields).unwrap();
    let flat = read_fields(&mut reader).unwrap();
    assert_eq!(flat.root, person());
    assert_eq!(flat.fields, fields);
}

#[test]
fn unwritable_names_fail_to_render() {
    let fields = field_map(&[("a b", "1"), ("x:y", "\u{1}")]);
    let reader = build(&person(), &Ordinal, &fields).unwrap();
    assert!(matches!(reader.to_xml(), Err(DocumentError::Render(_))));
    // The pull view does not depend on XML naming rules.
    assert_eq!(child_names(reader), ["a b", "x:y"]);
}

/// Subscriber output collected in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn traced_build(config: AdapterConfig) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let fields = field_map(&[("Age", "30")]);
        let reader = Adapter::new(config).build("person", &Ordinal, &fields).unwrap();
        assert_eq!(child_names(reader), ["Age"]);
    });
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn built_document_is_traced_by_default() {
    let output = traced_build(AdapterConfig::default());
    assert!(output.contains("built document"), "{output}");
    assert!(output.contains("<person><Age>30</Age></person>"), "{output}");
}

#[test]
fn trace_documents_off_suppresses_the_xml() {
    let output = traced_build(AdapterConfig {
        trace_documents: false,
        ..AdapterConfig::default()
    });
    assert!(output.contains("document ordered"), "{output}");
    assert!(!output.contains("built document"), "{output}");
    assert!(!output.contains("<person>"), "{output}");
}
