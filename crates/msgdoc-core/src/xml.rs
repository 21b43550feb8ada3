// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! XML text rendering of a staged event sequence.

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event as XmlEvent};
use quick_xml::Writer;

use crate::{DocumentError, Event};

/// Render `events` as XML text.
///
/// An element declares a default `xmlns` only where its namespace differs from the one in
/// scope, so field children inherit the root's declaration. Text escaping is left to the
/// writer. Element names must be XML names without a prefix, and text and namespaces may
/// only hold XML 1.0 characters; anything else fails with [`DocumentError::Render`].
pub(crate) fn render(events: &[Event]) -> Result<String, DocumentError> {
    let mut writer = Writer::new(Vec::new());
    let mut scope: Vec<&str> = Vec::new();
    for event in events {
        let xml = match event {
            Event::StartElement(name) => {
                check_name(name.local_name())?;
                check_chars("namespace", name.namespace())?;
                let mut start = BytesStart::new(name.local_name());
                if scope.last().copied().unwrap_or_default() != name.namespace() {
                    start.push_attribute(("xmlns", name.namespace()));
                }
                scope.push(name.namespace());
                XmlEvent::Start(start)
            }
            Event::Text(text) => {
                check_chars("text", text)?;
                XmlEvent::Text(BytesText::new(text))
            }
            Event::EndElement(name) => {
                scope.pop();
                XmlEvent::End(BytesEnd::new(name.local_name()))
            }
        };
        writer
            .write_event(xml)
            .map_err(|err| DocumentError::Render(err.to_string()))?;
    }
    String::from_utf8(writer.into_inner()).map_err(|err| DocumentError::Render(err.to_string()))
}

// NCName: the XML `Name` production minus `:`.
fn check_name(name: &str) -> Result<(), DocumentError> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(is_name_start_char) && chars.all(is_name_char);
    if valid {
        Ok(())
    } else {
        Err(DocumentError::Render(format!(
            "`{}` is not a valid element name",
            name.escape_debug()
        )))
    }
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

// XML 1.0 `Char`; surrogates cannot occur in a `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | ' '..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
        && !matches!(c, '\u{FFFE}' | '\u{FFFF}')
}

fn check_chars(what: &str, text: &str) -> Result<(), DocumentError> {
    match text.chars().find(|&c| !is_xml_char(c)) {
        None => Ok(()),
        Some(c) => Err(DocumentError::Render(format!(
            "{what} contains U+{:04X}, which XML 1.0 does not allow",
            u32::from(c)
        ))),
    }
}
