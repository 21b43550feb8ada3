// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Rebuilding typed messages from ordered documents.

use msgdoc_core::{DocumentError, DocumentReader, FieldEntry};
use msgdoc_schema::{FieldOrder, MessageSchema};
use serde::de::value::{StrDeserializer, StringDeserializer};
use serde::de::{self, DeserializeOwned, DeserializeSeed, MapAccess, Visitor};
use serde::forward_to_deserialize_any;
use tracing::instrument;

use crate::Error;

/// Rebuild a `T` from the children of `reader`, in document order.
///
/// Field text is parsed to whatever type `T` asks for. Children `T` does not know are
/// handed to its `Deserialize` impl like any other key.
#[instrument(level = "debug", skip_all, fields(ty = std::any::type_name::<T>()))]
pub fn from_reader<T: DeserializeOwned>(mut reader: DocumentReader) -> Result<T, Error> {
    T::deserialize(MessageDeserializer {
        reader: &mut reader,
        schema: None,
    })
}

/// Like [`from_reader`], but reads the way a sequential mapper does: every field `schema`
/// declares must arrive in schema order.
///
/// A declared field arriving after one the schema orders behind it fails with
/// [`Error::OutOfOrder`]. Undeclared names are not checked.
#[instrument(level = "debug", skip_all, fields(ty = std::any::type_name::<T>(), schema = schema.name()))]
pub fn from_reader_ordered<T: DeserializeOwned>(
    mut reader: DocumentReader,
    schema: &MessageSchema,
) -> Result<T, Error> {
    T::deserialize(MessageDeserializer {
        reader: &mut reader,
        schema: Some(schema),
    })
}

struct MessageDeserializer<'r, 's> {
    reader: &'r mut DocumentReader,
    schema: Option<&'s MessageSchema>,
}

impl<'de> de::Deserializer<'de> for MessageDeserializer<'_, '_> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        self.reader.read_root()?;
        let mut fields = FieldAccess {
            reader: &mut *self.reader,
            schema: self.schema,
            last_declared: None,
            pending: None,
            finished: false,
        };
        let value = visitor.visit_map(&mut fields)?;
        // The visitor may stop early; skip what it left up to the root end.
        if !fields.finished {
            while fields.reader.read_field()?.is_some() {}
        }
        if self.reader.read() {
            return Err(DocumentError::UnexpectedNode {
                expected: "end of document",
                found: self.reader.node_kind(),
            }
            .into());
        }
        Ok(value)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct FieldAccess<'r, 's> {
    reader: &'r mut DocumentReader,
    schema: Option<&'s MessageSchema>,
    last_declared: Option<String>,
    pending: Option<FieldEntry>,
    finished: bool,
}

impl FieldAccess<'_, '_> {
    fn check_order(&mut self, field: &str) -> Result<(), Error> {
        let Some(schema) = self.schema else {
            return Ok(());
        };
        if !schema.contains(field) {
            return Ok(());
        }
        if let Some(last) = &self.last_declared {
            if schema.compare(last, field).is_gt() {
                return Err(Error::OutOfOrder {
                    field: field.to_owned(),
                    after: last.clone(),
                });
            }
        }
        self.last_declared = Some(field.to_owned());
        Ok(())
    }
}

impl<'de> MapAccess<'de> for FieldAccess<'_, '_> {
    type Error = Error;

    fn next_key_seed<K: DeserializeSeed<'de>>(&mut self, seed: K) -> Result<Option<K::Value>, Error> {
        let Some(entry) = self.reader.read_field()? else {
            self.finished = true;
            return Ok(None);
        };
        self.check_order(&entry.name)?;
        let key = seed.deserialize(StrDeserializer::<Error>::new(&entry.name))?;
        self.pending = Some(entry);
        Ok(Some(key))
    }

    fn next_value_seed<V: DeserializeSeed<'de>>(&mut self, seed: V) -> Result<V::Value, Error> {
        let FieldEntry { name, value } = self
            .pending
            .take()
            .ok_or_else(|| Error::Custom("field value requested before its name".into()))?;
        seed.deserialize(FieldValue { field: name, value })
    }
}

/// Text of one field, parsed on demand.
struct FieldValue {
    field: String,
    value: String,
}

impl FieldValue {
    fn parse<T: std::str::FromStr>(&self, expected: &'static str) -> Result<T, Error> {
        self.value.parse().map_err(|_| Error::InvalidValue {
            field: self.field.clone(),
            expected,
        })
    }

    fn nested(self) -> Error {
        Error::NestedValue { field: self.field }
    }
}

macro_rules! parse_scalar {
    ($($method:ident => $visit:ident : $ty:ty),* $(,)?) => {
        $(
            fn $method<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
                visitor.$visit(self.parse::<$ty>(stringify!($ty))?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for FieldValue {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_string(self.value)
    }

    parse_scalar! {
        deserialize_bool => visit_bool: bool,
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_i128 => visit_i128: i128,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
        deserialize_u128 => visit_u128: u128,
        deserialize_f32 => visit_f32: f32,
        deserialize_f64 => visit_f64: f64,
        deserialize_char => visit_char: char,
    }

    fn deserialize_str<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_string(self.value)
    }

    fn deserialize_string<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_string(self.value)
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_byte_buf(self.value.into_bytes())
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_byte_buf(self.value.into_bytes())
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Error> {
        Err(self.nested())
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, _len: usize, _visitor: V) -> Result<V::Value, Error> {
        Err(self.nested())
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> Result<V::Value, Error> {
        Err(self.nested())
    }

    fn deserialize_map<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Error> {
        Err(self.nested())
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Error> {
        Err(self.nested())
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Error> {
        visitor.visit_enum(StringDeserializer::<Error>::new(self.value))
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_string(self.value)
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Error> {
        visitor.visit_unit()
    }
}
