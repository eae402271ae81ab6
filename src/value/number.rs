use crate::error::ValueError;
use std::fmt::{self, Display};

/// A numeric value: either an integer or a float. The distinction is an
/// internal detail; a `Number` is just a number, and the two variants
/// compare as such.
#[derive(Copy, Clone, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(lhs), Self::Int(rhs)) => lhs == rhs,
            (Self::Float(lhs), Self::Float(rhs)) => lhs == rhs,
            // Mixed comparison happens in float space. Ints beyond 2^53
            // lose precision in the cast
            (Self::Int(lhs), Self::Float(rhs)) => (*lhs as f64) == *rhs,
            (Self::Float(lhs), Self::Int(rhs)) => *lhs == (*rhs as f64),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Self::Int(value.into())
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Self::Int(value.into())
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Self::Int(value.into())
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Self::Int(value.into())
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl TryFrom<u64> for Number {
    type Error = ValueError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Self::Int)
            .map_err(|_| ValueError::Number {
                value: value.to_string(),
                target: "number",
            })
    }
}

impl TryFrom<i128> for Number {
    type Error = ValueError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Self::Int)
            .map_err(|_| ValueError::Number {
                value: value.to_string(),
                target: "number",
            })
    }
}

impl TryFrom<u128> for Number {
    type Error = ValueError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        i64::try_from(value)
            .map(Self::Int)
            .map_err(|_| ValueError::Number {
                value: value.to_string(),
                target: "number",
            })
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/// Implement an exact integer conversion out of [Number]. Only the `Int`
/// variant converts, and only when the value is in range for the target;
/// floats never convert implicitly, even when their value is integral.
macro_rules! impl_try_from_number {
    ($type:ty) => {
        impl TryFrom<Number> for $type {
            type Error = ValueError;

            fn try_from(number: Number) -> Result<Self, Self::Error> {
                let out_of_range = || ValueError::Number {
                    value: number.to_string(),
                    target: stringify!($type),
                };
                match number {
                    Number::Int(i) => i.try_into().map_err(|_| out_of_range()),
                    Number::Float(_) => Err(out_of_range()),
                }
            }
        }
    };
}

impl_try_from_number!(i8);
impl_try_from_number!(u8);
impl_try_from_number!(i16);
impl_try_from_number!(u16);
impl_try_from_number!(i32);
impl_try_from_number!(u32);
impl_try_from_number!(i64);
impl_try_from_number!(u64);
impl_try_from_number!(i128);
impl_try_from_number!(u128);

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Number::Int(42), "42"; "int")]
    #[test_case(Number::Int(-3), "-3"; "negative_int")]
    #[test_case(Number::Float(42.5), "42.5"; "float")]
    #[test_case(Number::Float(f64::NAN), "NaN"; "nan")]
    fn display(number: Number, expected: &str) {
        assert_eq!(number.to_string(), expected);
    }

    #[test]
    fn mixed_equality() {
        assert_eq!(Number::Int(3), Number::Float(3.0));
        assert_eq!(Number::Float(-1.0), Number::Int(-1));
        assert_ne!(Number::Int(3), Number::Float(3.5));
    }

    #[test_case(Number::Int(300), "u8"; "out_of_range")]
    #[test_case(Number::Int(-1), "u8"; "negative")]
    #[test_case(Number::Float(3.0), "u8"; "float_never_converts")]
    fn exact_conversion_error(number: Number, target: &str) {
        let error = u8::try_from(number).unwrap_err();
        match error {
            ValueError::Number { value, target: t } => {
                assert_eq!(value, number.to_string());
                assert_eq!(t, target);
            }
            other => panic!("Expected number error, got {other}"),
        }
    }

    #[test]
    fn exact_conversion() {
        assert_eq!(
            u8::try_from(Number::Int(300)).unwrap_err().to_string(),
            "Cannot represent 300 as u8"
        );
        // In-range values convert, including at the bound
        assert_eq!(u8::try_from(Number::Int(200)).unwrap(), 200);
        assert_eq!(u8::try_from(Number::Int(255)).unwrap(), 255);
        assert_eq!(i64::try_from(Number::Int(-7)).unwrap(), -7);
        assert_eq!(u64::try_from(Number::Int(7)).unwrap(), 7);
        assert!(Number::try_from(u64::MAX).is_err());
        assert_eq!(Number::try_from(17u64).unwrap(), Number::Int(17));
    }
}
