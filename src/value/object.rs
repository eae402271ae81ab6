use crate::value::Value;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::{
    fmt::{self, Display},
    sync::Arc,
};

/// A key-value mapping with an optional parent object to delegate to.
///
/// Objects are cheaply cloneable; a clone is a second handle to the *same*
/// object, not a copy. Two handles to the same object are identical under
/// [Self::ptr_eq], which is the notion of equality the prototype chain
/// operates on. Properties can be added through any handle and are visible
/// through all of them.
///
/// The parent link is fixed when the object is created and never changes,
/// so a chain can never loop back on itself. Property *values* are not
/// restricted the same way: an object stored as its own property forms a
/// cyclic graph, which can't be displayed, compared structurally, or
/// serialized.
#[derive(Clone, Debug, Default)]
pub struct Object(Arc<ObjectInner>);

#[derive(Debug, Default)]
struct ObjectInner {
    prototype: Option<Object>,
    properties: RwLock<IndexMap<String, Value>>,
}

impl Object {
    /// Create an empty object with no prototype. Lookups on this object
    /// never delegate anywhere
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object that delegates failed property lookups to
    /// the given prototype
    pub fn create(prototype: impl Into<Option<Object>>) -> Self {
        Self(Arc::new(ObjectInner {
            prototype: prototype.into(),
            properties: RwLock::default(),
        }))
    }

    /// The object this one delegates to, if any. The returned handle refers
    /// to the same object for the entire life of `self`
    pub fn prototype(&self) -> Option<Object> {
        self.0.prototype.clone()
    }

    /// Are these two handles for the same object? This is identity, not
    /// equivalence: two objects with identical contents are still distinct
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Get a property value by name, delegating to the prototype chain if
    /// this object doesn't have it. Return undefined if no object in the
    /// chain has the property
    pub fn get(&self, name: &str) -> Value {
        let mut cursor = self;
        loop {
            if let Some(value) = cursor.0.properties.read().get(name) {
                return value.clone();
            }
            match &cursor.0.prototype {
                Some(parent) => cursor = parent,
                None => return Value::Undefined,
            }
        }
    }

    /// Get one of the object's *own* properties by name, ignoring the
    /// prototype chain. Return undefined if not present
    pub fn get_own(&self, name: &str) -> Value {
        self.0.properties.read().get(name).cloned().unwrap_or_default()
    }

    /// Does this object, or any object in its prototype chain, have a
    /// property with the given name?
    pub fn has(&self, name: &str) -> bool {
        let mut cursor = self;
        loop {
            if cursor.0.properties.read().contains_key(name) {
                return true;
            }
            match &cursor.0.prototype {
                Some(parent) => cursor = parent,
                None => return false,
            }
        }
    }

    /// Does this object have its *own* property with the given name?
    pub fn has_own(&self, name: &str) -> bool {
        self.0.properties.read().contains_key(name)
    }

    /// Set a property on this object. Existing properties keep their
    /// insertion position; new ones go at the end. Properties of the
    /// prototype are never touched, even when they share the name
    pub fn insert(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.properties.write().insert(name.into(), value.into());
    }

    /// Number of *own* properties in this object
    pub fn len(&self) -> usize {
        self.0.properties.read().len()
    }

    /// Does this object have no *own* properties? An empty object can still
    /// serve properties through its prototype
    pub fn is_empty(&self) -> bool {
        self.0.properties.read().is_empty()
    }

    /// Names of the object's own properties, in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.0.properties.read().keys().cloned().collect()
    }

    /// Copy the object's own properties out into a map
    pub fn to_map(&self) -> IndexMap<String, Value> {
        self.0.properties.read().clone()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }
        // Distinct objects are equivalent when their own properties match
        // and they delegate to the *same* prototype
        let same_prototype = match (&self.0.prototype, &other.0.prototype) {
            (Some(lhs), Some(rhs)) => lhs.ptr_eq(rhs),
            (None, None) => true,
            _ => false,
        };
        same_prototype
            && *self.0.properties.read() == *other.0.properties.read()
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.0.properties.read().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl From<IndexMap<String, Value>> for Object {
    fn from(properties: IndexMap<String, Value>) -> Self {
        Self(Arc::new(ObjectInner {
            prototype: None,
            properties: RwLock::new(properties),
        }))
    }
}

impl From<IndexMap<&str, Value>> for Object {
    fn from(properties: IndexMap<&str, Value>) -> Self {
        properties
            .into_iter()
            .map(|(key, value)| (key.to_owned(), value))
            .collect()
    }
}

impl From<Object> for IndexMap<String, Value> {
    fn from(object: Object) -> Self {
        match Arc::try_unwrap(object.0) {
            // We hold the only handle, so we can reclaim the map
            Ok(inner) => inner.properties.into_inner(),
            Err(arc) => arc.properties.read().clone(),
        }
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self::from(iter.into_iter().collect::<IndexMap<_, _>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_properties() {
        let object = Object::new();
        assert!(object.is_empty());
        object.insert("name", "rex");
        object.insert("age", 3);
        assert_eq!(object.len(), 2);
        assert_eq!(object.get_own("name"), "rex".into());
        assert_eq!(object.get_own("missing"), Value::Undefined);
        assert!(object.has_own("age"));
        assert!(!object.has_own("missing"));
        assert_eq!(object.keys(), vec!["name".to_owned(), "age".to_owned()]);
    }

    #[test]
    fn delegated_lookup() {
        let base = Object::new();
        base.insert("kind", "animal");
        let middle = Object::create(base.clone());
        middle.insert("legs", 4);
        let leaf = Object::create(middle.clone());
        leaf.insert("name", "rex");

        // Own property
        assert_eq!(leaf.get("name"), "rex".into());
        // One and two levels up
        assert_eq!(leaf.get("legs"), 4.into());
        assert_eq!(leaf.get("kind"), "animal".into());
        assert_eq!(leaf.get("missing"), Value::Undefined);
        assert!(leaf.has("kind"));
        assert!(!leaf.has_own("kind"));

        // Shadowing: the leaf's own property wins, the base is unchanged
        leaf.insert("kind", "pet");
        assert_eq!(leaf.get("kind"), "pet".into());
        assert_eq!(base.get("kind"), "animal".into());
    }

    #[test]
    fn clone_is_same_object() {
        let object = Object::new();
        let alias = object.clone();
        alias.insert("shared", true);
        assert!(object.ptr_eq(&alias));
        assert_eq!(object.get_own("shared"), true.into());
    }

    #[test]
    fn equivalence_vs_identity() {
        let prototype = Object::new();
        let first = Object::create(prototype.clone());
        first.insert("a", 1);
        let second = Object::create(prototype.clone());
        second.insert("a", 1);

        // Same contents and same prototype: equivalent but not identical
        assert_eq!(first, second);
        assert!(!first.ptr_eq(&second));

        // Same contents, different (but equivalent) prototypes
        let third = Object::create(Object::new());
        third.insert("a", 1);
        assert_ne!(first, third);
    }

    #[test]
    fn display() {
        let object = Object::new();
        object.insert("name", "rex");
        object.insert("age", 3);
        assert_eq!(object.to_string(), "{name: rex, age: 3}");
        assert_eq!(Object::new().to_string(), "{}");
    }
}
