//! Runtime values

mod array;
#[cfg(feature = "serde")]
mod cereal;
mod function;
mod macros;
mod number;
mod object;
mod string;

pub use array::Array;
pub use function::Function;
pub use number::Number;
pub use object::Object;
pub use string::ProtoString;

use crate::{
    error::ValueError,
    value::macros::{ensure_type, impl_value_conversions, impl_value_from},
};
use indexmap::IndexMap;
use std::fmt::{self, Display};

/// Any value that can live in an object graph. Compound values (arrays,
/// objects, functions) are reference-counted handles, so cloning a `Value`
/// is always cheap and clones of a compound value share identity with the
/// original.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The absence of a value, e.g. a property that isn't present
    ///
    /// This value serializes as the unit value: `()`
    #[default]
    Undefined,
    /// The deliberate absence of a value
    ///
    /// This value serializes as `None`
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// A float or integer
    Number(Number),
    /// A string of UTF-8 characters
    String(ProtoString),
    /// An ordered list
    Array(Array),
    /// An ordered key-value mapping
    Object(Object),
    /// A callable value
    Function(Function),
}

#[cfg(test)]
static_assertions::assert_impl_all!(Value: Send, Sync);

impl Value {
    /// Is this value one of the types that carries a prototype? Objects,
    /// arrays and functions do; primitives and the two no-value markers
    /// don't
    pub fn is_object_like(&self) -> bool {
        matches!(self, Self::Object(_) | Self::Array(_) | Self::Function(_))
    }

    /// If this value is a string, get the inner string. Otherwise return a
    /// type error.
    pub fn try_into_string(self) -> Result<ProtoString, ValueError> {
        if let Self::String(string) = self {
            Ok(string)
        } else {
            Err(ValueError::Type {
                expected: ValueType::String,
                actual: self.type_of(),
            })
        }
    }

    /// If this value is an array, get the inner array. Otherwise return a
    /// type error.
    pub fn try_into_array(self) -> Result<Array, ValueError> {
        if let Self::Array(array) = self {
            Ok(array)
        } else {
            Err(ValueError::Type {
                expected: ValueType::Array,
                actual: self.type_of(),
            })
        }
    }

    /// If this value is an object, get the inner object. Otherwise return a
    /// type error.
    pub fn try_into_object(self) -> Result<Object, ValueError> {
        if let Self::Object(object) = self {
            Ok(object)
        } else {
            Err(ValueError::Type {
                expected: ValueType::Object,
                actual: self.type_of(),
            })
        }
    }

    /// If this value is a function, get the inner function. Otherwise return
    /// a type error.
    pub fn try_into_function(self) -> Result<Function, ValueError> {
        if let Self::Function(function) = self {
            Ok(function)
        } else {
            Err(ValueError::Type {
                expected: ValueType::Function,
                actual: self.type_of(),
            })
        }
    }

    /// Get the type of this value
    pub fn type_of(&self) -> ValueType {
        match self {
            Self::Undefined => ValueType::Undefined,
            Self::Null => ValueType::Null,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Number(_) => ValueType::Number,
            Self::String(_) => ValueType::String,
            Self::Array(_) => ValueType::Array,
            Self::Object(_) => ValueType::Object,
            Self::Function(_) => ValueType::Function,
        }
    }

    /// Convert this value into an arbitrary type, using the type's
    /// [FromValue] implementation
    pub fn convert<T: FromValue>(self) -> Result<T, ValueError> {
        T::from_value(self)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::String(string) => write!(f, "{string}"),
            Self::Array(array) => write!(f, "{array}"),
            Self::Object(object) => write!(f, "{object}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

// Two-way conversions: `From<T> for Value` and `FromValue for T`
impl_value_conversions!(bool, Boolean);
impl_value_conversions!(Number, Number);
impl_value_conversions!(i8, Number, to: infallible, from: fallible);
impl_value_conversions!(u8, Number, to: infallible, from: fallible);
impl_value_conversions!(i16, Number, to: infallible, from: fallible);
impl_value_conversions!(u16, Number, to: infallible, from: fallible);
impl_value_conversions!(i32, Number, to: infallible, from: fallible);
impl_value_conversions!(u32, Number, to: infallible, from: fallible);
impl_value_conversions!(i64, Number, to: infallible, from: fallible);
impl_value_conversions!(u64, Number, to: fallible, from: fallible);
impl_value_conversions!(i128, Number, to: fallible, from: fallible);
impl_value_conversions!(u128, Number, to: fallible, from: fallible);
impl_value_conversions!(f64, Number, to: infallible, from: infallible);
impl_value_conversions!(String, String);
impl_value_conversions!(ProtoString, String);
impl_value_conversions!(Array, Array);
impl_value_conversions!(Object, Object);
impl_value_conversions!(IndexMap<String, Value>, Object);
impl_value_conversions!(Function, Function);

// One-way conversions: `From<T> for Value`
impl_value_from!(&str, String);
impl_value_from!(char, String);
impl_value_from!(f32, Number);
impl_value_from!(Vec<Value>, Array);
impl_value_from!(IndexMap<&str, Value>, Object);

/// Possible types for a value
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ValueType {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Function,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Boolean => write!(f, "boolean"),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Array => write!(f, "array"),
            Self::Object => write!(f, "object"),
            Self::Function => write!(f, "function"),
        }
    }
}

/// Trait for converting values into [Value]
pub trait IntoValue {
    fn into_value(self) -> Result<Value, ValueError>;
}

impl<T: Into<Value>> IntoValue for T {
    fn into_value(self) -> Result<Value, ValueError> {
        Ok(self.into())
    }
}

impl IntoValue for () {
    fn into_value(self) -> Result<Value, ValueError> {
        Ok(Value::Undefined)
    }
}

/// Trait for converting values from [Value]
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl<T: From<Value>> FromValue for T {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value.into())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        let array = ensure_type!(value, Array, Array);
        array.into_iter().map(T::from_value).collect()
    }
}
