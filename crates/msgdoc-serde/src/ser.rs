// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Flattening typed messages into field maps.

use msgdoc_core::{build, DocumentReader, ElementName, FieldMap};
use msgdoc_schema::FieldOrder;
use serde::Serialize;
use serde_value::Value;
use tracing::{debug, instrument};

use crate::Error;

/// Flatten `message` into `name → value` strings.
///
/// Scalars render with `Display`; `None` and unit fields are left out; `Some` and newtype
/// wrappers are unwrapped. Unit enum variants render as the variant name.
#[instrument(level = "debug", skip_all, fields(ty = std::any::type_name::<T>()))]
pub fn to_fields<T>(message: &T) -> Result<FieldMap, Error>
where
    T: Serialize + ?Sized,
{
    let Value::Map(entries) = serde_value::to_value(message)? else {
        return Err(Error::NotAMessage);
    };
    let mut fields = FieldMap::with_capacity(entries.len());
    for (key, value) in entries {
        let Value::String(name) = key else {
            return Err(Error::NotAMessage);
        };
        if let Some(text) = scalar_text(&name, value)? {
            fields.insert(name, text);
        }
    }
    debug!(fields = fields.len(), "message flattened");
    Ok(fields)
}

/// Flatten `message` and build its ordered document under `root`.
pub fn to_document<T, O>(root: &ElementName, order: &O, message: &T) -> Result<DocumentReader, Error>
where
    T: Serialize + ?Sized,
    O: FieldOrder + ?Sized,
{
    let fields = to_fields(message)?;
    Ok(build(root, order, &fields)?)
}

fn scalar_text(field: &str, value: Value) -> Result<Option<String>, Error> {
    let text = match value {
        Value::Bool(v) => v.to_string(),
        Value::U8(v) => v.to_string(),
        Value::U16(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::I8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::Char(v) => v.to_string(),
        Value::String(v) => v,
        Value::Unit | Value::Option(None) => return Ok(None),
        Value::Option(Some(inner)) | Value::Newtype(inner) => return scalar_text(field, *inner),
        Value::Seq(_) | Value::Map(_) | Value::Bytes(_) => {
            return Err(Error::NestedValue {
                field: field.to_owned(),
            })
        }
    };
    Ok(Some(text))
}
