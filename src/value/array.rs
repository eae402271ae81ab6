use crate::value::{Object, Value};
use parking_lot::RwLock;
use std::{
    fmt::{self, Display},
    sync::Arc,
};

/// An ordered sequence of values with an optional prototype.
///
/// Like [Object](crate::Object), an array is a handle to shared state:
/// cloning is cheap and every clone refers to the same array. Property
/// lookups on an array value delegate to its prototype, but the elements
/// themselves are always the array's own.
#[derive(Clone, Debug, Default)]
pub struct Array(Arc<ArrayInner>);

#[derive(Debug, Default)]
struct ArrayInner {
    prototype: Option<Object>,
    elements: RwLock<Vec<Value>>,
}

impl Array {
    /// Create an empty array with no prototype
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty array with the given prototype
    pub fn create(prototype: impl Into<Option<Object>>) -> Self {
        Self(Arc::new(ArrayInner {
            prototype: prototype.into(),
            elements: RwLock::default(),
        }))
    }

    /// The object this array delegates property lookups to, if any
    pub fn prototype(&self) -> Option<Object> {
        self.0.prototype.clone()
    }

    /// Are these two handles for the same array?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Append a value to the end of the array
    pub fn push(&self, value: impl Into<Value>) {
        self.0.elements.write().push(value.into());
    }

    /// Get the element at the given index, or undefined if the index is
    /// out of bounds
    pub fn get(&self, index: usize) -> Value {
        self.0.elements.read().get(index).cloned().unwrap_or_default()
    }

    /// Number of elements in the array
    pub fn len(&self) -> usize {
        self.0.elements.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.elements.read().is_empty()
    }

    /// Copy the array's elements out into a `Vec`
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.elements.read().clone()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        let same_prototype = match (&self.0.prototype, &other.0.prototype) {
            (Some(lhs), Some(rhs)) => lhs.ptr_eq(rhs),
            (None, None) => true,
            _ => false,
        };
        same_prototype
            && *self.0.elements.read() == *other.0.elements.read()
    }
}

impl Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.0.elements.read().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}

impl<T: Into<Value>> From<Vec<T>> for Array {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().map(T::into).collect()
    }
}

impl From<Array> for Vec<Value> {
    fn from(array: Array) -> Self {
        match Arc::try_unwrap(array.0) {
            // We hold the only handle, so we can reclaim the elements
            Ok(inner) => inner.elements.into_inner(),
            Err(arc) => arc.elements.read().clone(),
        }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self(Arc::new(ArrayInner {
            prototype: None,
            elements: RwLock::new(iter.into_iter().collect()),
        }))
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self).into_iter()
    }
}
