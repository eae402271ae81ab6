//! Serde implementations for value types. These define how values map onto
//! the serde data model; the [serde module](crate::serde) provides the
//! complementary `Serializer`/`Deserializer` that map the data model back
//! onto values.

use crate::{Array, Number, Object, Value};
use indexmap::IndexMap;
use serde::{de, Deserialize};
use std::fmt;

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::Undefined => serializer.serialize_unit(),
            Value::Null => serializer.serialize_none(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(string) => serializer.serialize_str(string),
            Value::Array(array) => array.serialize(serializer),
            Value::Object(object) => object.serialize(serializer),
            // A closure can't cross a serialization boundary, so functions
            // degrade to the unit value
            Value::Function(_) => serializer.serialize_unit(),
        }
    }
}

impl serde::Serialize for Array {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.to_vec())
    }
}

impl serde::Serialize for Object {
    /// Serialize the object's *own* properties. Anything served through the
    /// prototype chain is identity-dependent and is deliberately left out
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.to_map())
    }
}

impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> de::Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("any valid value")
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Undefined)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(
                self,
                deserializer: D,
            ) -> Result<Self::Value, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                Value::deserialize(deserializer)
            }

            fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
                // Fall back to a float if the value doesn't fit in an int
                let number = match i64::try_from(v) {
                    Ok(i) => Number::Int(i),
                    Err(_) => Number::Float(v as f64),
                };
                Ok(number.into())
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
                Ok(v.into())
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut elements =
                    Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(element) = seq.next_element()? {
                    elements.push(element);
                }
                Ok(elements.into())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut properties = IndexMap::with_capacity(
                    map.size_hint().unwrap_or(0),
                );
                while let Some((key, value)) =
                    map.next_entry::<String, Value>()?
                {
                    properties.insert(key, value);
                }
                Ok(properties.into())
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> serde::Deserialize<'de> for Array {
    /// Deserialized arrays have no prototype. Parent one onto a realm by
    /// building it through [Realm::new_array](crate::Realm::new_array) and
    /// pushing the elements instead
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = Vec::<Value>::deserialize(deserializer)?;
        Ok(elements.into())
    }
}

impl<'de> serde::Deserialize<'de> for Object {
    /// Deserialized objects have no prototype. Parent one onto a realm by
    /// building it through [Realm::new_object](crate::Realm::new_object) and
    /// inserting the properties instead
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let properties = IndexMap::<String, Value>::deserialize(deserializer)?;
        Ok(properties.into())
    }
}
