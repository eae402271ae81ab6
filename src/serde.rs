//! Serialization and deserialization
//!
//! This module is designed to imitate a Serde data format crate, and thus
//! follows [the conventions laid out by Serde](https://serde.rs/conventions.html),
//! with the exception of the `Error` and `Result` types: we use
//! [ValueError] instead.
//!
//! Values built here are *bare*: deserialized objects and arrays carry no
//! prototype, and functions can't cross the boundary at all.

mod de;
mod ser;

pub use de::Deserializer;
pub use ser::Serializer;

use crate::{error::ValueError, Value};
use serde::{Deserialize, Serialize};

/// Serialize an instance of type `T` into a value
pub fn to_value<T: Serialize>(data: &T) -> Result<Value, ValueError> {
    data.serialize(&Serializer)
}

/// Deserialize an instance of type `T` from a value
pub fn from_value<'de, T: Deserialize<'de>>(
    value: Value,
) -> Result<T, ValueError> {
    T::deserialize(Deserializer::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Array, Function, Object};
    use indexmap::indexmap;
    use test_case::test_case;

    /// Serializing a `Value` to a `Value`, and deserializing back, should
    /// yield the same value each time. This is for the case when someone is
    /// serializing from or deserializing into a struct that stores a `Value`
    /// somewhere within.
    #[test_case(Value::Undefined; "undefined")]
    #[test_case(Value::Null; "null")]
    #[test_case(true; "bool_true")]
    #[test_case(false; "bool_false")]
    #[test_case(32; "int")]
    #[test_case(5.67; "float")]
    #[test_case(Value::String("hello".into()); "string")]
    #[test_case(
        vec![Value::Null, Value::Undefined, 32.into(), false.into()]; "array"
    )]
    #[test_case(indexmap! {
        "null".to_owned() => Value::Null,
        "undefined".to_owned() => Value::Undefined,
        "b".to_owned() => 32.into(),
        "c".to_owned() => indexmap! {"d".to_owned() => true.into()}.into()
    }; "object")]
    fn identity(value: impl Into<Value>) {
        let value = value.into();
        let deserialized: Value = from_value(value.clone()).unwrap();
        assert_eq!(deserialized, value, "Deserialization did not match");
        let serialized = to_value(&value).unwrap();
        assert_eq!(serialized, value, "Serialization did not match");
    }

    /// Functions can't be rebuilt from serialized data, so they come out
    /// the other side as undefined
    #[test]
    fn function_degrades() {
        let noop = Function::native("noop", |_| Ok(Value::Undefined));
        let value = Value::Function(noop);
        assert_eq!(to_value(&value).unwrap(), Value::Undefined);
        let deserialized: Value = from_value(value).unwrap();
        assert_eq!(deserialized, Value::Undefined);
    }

    #[test]
    fn structs() {
        #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        struct Dog {
            name: String,
            age: u32,
            tricks: Vec<String>,
            owner: Option<String>,
        }

        let dog = Dog {
            name: "Rex".to_owned(),
            age: 3,
            tricks: vec!["sit".to_owned(), "stay".to_owned()],
            owner: None,
        };
        let value = to_value(&dog).unwrap();
        let object = value.clone().try_into_object().unwrap();
        assert_eq!(object.get_own("name"), "Rex".into());
        assert_eq!(object.get_own("age"), 3.into());
        assert_eq!(object.get_own("owner"), Value::Null);
        // Serialized objects are bare
        assert!(object.prototype().is_none());

        let roundtripped: Dog = from_value(value).unwrap();
        assert_eq!(roundtripped, dog);
    }

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    enum Shape {
        Point,
        Circle(f64),
        Segment(f64, f64),
        Rect { width: f64, height: f64 },
    }

    #[test_case(Shape::Point; "unit_variant")]
    #[test_case(Shape::Circle(1.5); "newtype_variant")]
    #[test_case(Shape::Segment(0.0, 2.0); "tuple_variant")]
    #[test_case(Shape::Rect { width: 3.0, height: 4.0 }; "struct_variant")]
    fn enums(shape: Shape) {
        let value = to_value(&shape).unwrap();
        let roundtripped: Shape = from_value(value).unwrap();
        assert_eq!(roundtripped, shape);
    }

    /// Enum variants are externally tagged, like serde's derived JSON
    /// representation
    #[test]
    fn enum_representation() {
        assert_eq!(to_value(&Shape::Point).unwrap(), "Point".into());

        let value = to_value(&Shape::Circle(1.5)).unwrap();
        let object = value.try_into_object().unwrap();
        assert_eq!(object.keys(), vec!["Circle".to_owned()]);
        assert_eq!(object.get_own("Circle"), 1.5.into());

        let value = to_value(&Shape::Rect {
            width: 3.0,
            height: 4.0,
        })
        .unwrap();
        let object = value.try_into_object().unwrap();
        let inner = object.get_own("Rect").try_into_object().unwrap();
        assert_eq!(inner.get_own("width"), 3.0.into());
        assert_eq!(inner.get_own("height"), 4.0.into());
    }

    /// Objects and arrays deserialize into plain values with no prototype
    #[test]
    fn deserialized_values_are_bare() {
        let object: Object =
            from_value(indexmap! {"a".to_owned() => 1.into()}.into())
                .unwrap();
        assert_eq!(object.get_own("a"), 1.into());
        assert!(object.prototype().is_none());

        let array: Array =
            from_value(vec![Value::from(1), 2.into()].into()).unwrap();
        assert_eq!(array.len(), 2);
        assert!(array.prototype().is_none());
    }
}
