//! Macros for implementing traits on various types

/// Implement `From<T>` for `Value`, where `T` is convertible to a particular
/// `Value` variant.
macro_rules! impl_value_from {
    ($type:ty, $variant:ident) => {
        impl From<$type> for $crate::Value {
            fn from(value: $type) -> Self {
                Self::$variant(value.into())
            }
        }
    };
}

/// Implement `IntoValue` for a type `T`, where `T` is fallibly convertible to
/// a particular variant. This is only useful for fallible conversions;
/// infallible conversions are already covered by a blanket implementation of
/// `IntoValue`
macro_rules! impl_into_value {
    ($type:ty, $variant:ident) => {
        impl IntoValue for $type {
            fn into_value(self) -> Result<Value, ValueError> {
                Ok(Value::$variant(self.try_into()?))
            }
        }
    };
}

/// Unpack a `Value` that's expected to be of a particular variant, returning
/// a type error if it's anything else
macro_rules! ensure_type {
    ($value:expr, $variant:ident, $type_variant:ident) => {
        if let $crate::Value::$variant(value) = $value {
            value
        } else {
            return Err($crate::error::ValueError::Type {
                expected: $crate::ValueType::$type_variant,
                actual: $value.type_of(),
            });
        }
    };
}

/// Implement `FromValue` for a type `T` that maps to a single variant. The
/// variant is narrowed first, then its contents are converted with either
/// `From` (infallible) or `TryFrom` (fallible)
macro_rules! impl_from_value {
    ($type:ty, $variant:ident, infallible) => {
        impl $crate::FromValue for $type {
            fn from_value(
                value: $crate::Value,
            ) -> Result<Self, $crate::error::ValueError> {
                let value = $crate::value::macros::ensure_type!(
                    value, $variant, $variant
                );
                Ok(value.into())
            }
        }
    };
    ($type:ty, $variant:ident, fallible) => {
        impl $crate::FromValue for $type {
            fn from_value(
                value: $crate::Value,
            ) -> Result<Self, $crate::error::ValueError> {
                // Fallible in two ways: wrong type, or value conversion fails
                let value = $crate::value::macros::ensure_type!(
                    value, $variant, $variant
                );
                value.try_into()
            }
        }
    };
}

/// Implement two complementary traits for a type `T`, where `T` is convertible
/// to a particular variant (e.g. the `String` type and the `String` variant).
/// - `From<T> for Value` (infallible) OR `IntoValue for T` (fallible)
/// - `FromValue for T` - Ensure the value is of the expected variant, then use
///   either an infallible (`From`) or fallible (`TryFrom`) conversion to
///   convert the variant of `Value` into `T`.
///
/// Note: from_value being infallible just means the _value_ conversion is
/// infallible. FromValue can always fail if the value has the wrong type.
/// Fallibility here just refers to whether we should use `From` or `TryFrom`
/// to convert the contained value, after narrowing the type of the `Value`
macro_rules! impl_value_conversions {
    ($type:ty, $variant:ident) => {
        $crate::value::macros::impl_value_from!($type, $variant);
        $crate::value::macros::impl_from_value!($type, $variant, infallible);
    };
    ($type:ty, $variant:ident, to: infallible, from: infallible) => {
        $crate::value::macros::impl_value_from!($type, $variant);
        $crate::value::macros::impl_from_value!($type, $variant, infallible);
    };
    ($type:ty, $variant:ident, to: infallible, from: fallible) => {
        $crate::value::macros::impl_value_from!($type, $variant);
        $crate::value::macros::impl_from_value!($type, $variant, fallible);
    };
    // Note: there are no cases of fallible/infallible, so it's not supported
    ($type:ty, $variant:ident, to: fallible, from: fallible) => {
        $crate::value::macros::impl_into_value!($type, $variant);
        $crate::value::macros::impl_from_value!($type, $variant, fallible);
    };
}

pub(crate) use ensure_type;
pub(crate) use impl_from_value;
pub(crate) use impl_into_value;
pub(crate) use impl_value_conversions;
pub(crate) use impl_value_from;
