use crate::{
    error::ValueError,
    value::{Number, Value},
};
use indexmap::IndexMap;
use serde::de::{
    self,
    value::{MapDeserializer, SeqDeserializer, StringDeserializer},
    IntoDeserializer, Unexpected,
};
use std::fmt::Display;

impl de::Error for ValueError {
    fn custom<T: Display>(message: T) -> Self {
        ValueError::Custom(message.to_string())
    }
}

impl IntoDeserializer<'_, ValueError> for Value {
    type Deserializer = Deserializer;

    fn into_deserializer(self) -> Deserializer {
        Deserializer { value: self }
    }
}

/// Deserialize from [Value] to any type that implements
/// [Deserialize](serde::Deserialize)
pub struct Deserializer {
    value: Value,
}

impl Deserializer {
    /// Create a new deserializer to convert from the given value
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl<'de> serde::Deserializer<'de> for Deserializer {
    type Error = ValueError;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            // Undefined => (), null => None
            Value::Undefined => visitor.visit_unit(),
            Value::Null => visitor.visit_none(),
            Value::Boolean(b) => visitor.visit_bool(b),
            Value::Number(Number::Int(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::String(string) => visitor.visit_str(&string),
            Value::Array(array) => {
                SeqDeserializer::new(array.into_iter())
                    .deserialize_any(visitor)
            }
            Value::Object(object) => {
                let properties = IndexMap::from(object);
                MapDeserializer::new(properties.into_iter())
                    .deserialize_any(visitor)
            }
            // There's nothing to rebuild a function from, so it degrades
            // the same way it serializes
            Value::Function(_) => visitor.visit_unit(),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Undefined | Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Object(object) => {
                // An externally tagged enum is a map with exactly one
                // {variant: value} entry
                let mut map: IndexMap<_, _> = object.into();
                let len = map.len();
                match map.pop() {
                    Some((variant, value)) if len == 1 => {
                        visitor.visit_enum(EnumDeserializer {
                            variant,
                            value: Some(value),
                        })
                    }
                    _ => Err(de::Error::invalid_length(
                        len,
                        &"map of length 1 for an externally tagged enum",
                    )),
                }
            }
            Value::String(variant) => visitor.visit_enum(EnumDeserializer {
                variant: variant.into(),
                value: None,
            }),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"string or object",
            )),
        }
    }

    serde::forward_to_deserialize_any! {
        unit bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str
        string bytes byte_buf identifier ignored_any unit_struct
        newtype_struct struct map seq tuple tuple_struct
    }
}

/// Describe a value for a serde type error
fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Undefined => Unexpected::Other("undefined"),
        Value::Null => Unexpected::Unit,
        Value::Boolean(b) => Unexpected::Bool(*b),
        Value::Number(Number::Int(i)) => Unexpected::Signed(*i),
        Value::Number(Number::Float(f)) => Unexpected::Float(*f),
        Value::String(string) => Unexpected::Str(string),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
        Value::Function(_) => Unexpected::Other("function"),
    }
}

/// Deserialize an enum
struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = ValueError;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(
        self,
        seed: V,
    ) -> Result<(V::Value, Self::Variant), Self::Error>
    where
        V: de::DeserializeSeed<'de>,
    {
        let key = seed.deserialize(StringDeserializer::<Self::Error>::new(
            self.variant,
        ))?;
        Ok((key, VariantDeserializer { value: self.value }))
    }
}

/// Deserialize an enum variant value
struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = ValueError;

    fn unit_variant(self) -> Result<(), Self::Error> {
        match self.value {
            Some(_) => Err(de::Error::invalid_type(
                de::Unexpected::NewtypeVariant,
                &"unit variant",
            )),
            None => Ok(()),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value, Self::Error>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(value.into_deserializer()),
            None => Err(de::Error::invalid_type(
                de::Unexpected::UnitVariant,
                &"newtype variant",
            )),
        }
    }

    fn tuple_variant<V>(
        self,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(value) => serde::Deserializer::deserialize_seq(
                value.into_deserializer(),
                visitor,
            ),
            None => Err(de::Error::invalid_type(
                de::Unexpected::UnitVariant,
                &"tuple variant",
            )),
        }
    }

    fn struct_variant<V>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(value) => serde::Deserializer::deserialize_map(
                value.into_deserializer(),
                visitor,
            ),
            None => Err(de::Error::invalid_type(
                de::Unexpected::UnitVariant,
                &"struct variant",
            )),
        }
    }
}
