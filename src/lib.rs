#![forbid(unsafe_code)]
#![deny(clippy::all)]

mod chain;
pub mod error;
#[cfg(feature = "serde")]
pub mod serde;
mod value;

pub use crate::{
    error::{RuntimeError, RuntimeResult, ValueError},
    value::{
        Array, FromValue, Function, IntoValue, Number, Object, ProtoString,
        Value, ValueType,
    },
};

/// The main entrypoint for building object graphs. A realm owns the root
/// prototypes that every object, array and function created through it
/// delegates to, mirroring how a JavaScript realm owns `Object.prototype`
/// and friends. Realms are independent: an object from one realm never has
/// another realm's roots in its prototype chain.
///
/// ```
/// use prototypal::{Object, Realm, Value};
///
/// let realm = Realm::new();
/// let animal = realm.new_object();
/// let dog = Object::create(animal.clone());
///
/// let animal = Value::Object(animal);
/// let dog = Value::Object(dog);
/// assert!(animal.is_prototype_of(&dog)?);
/// let root = Value::Object(realm.object_prototype().clone());
/// assert!(root.is_prototype_of(&dog)?);
/// # Ok::<(), prototypal::RuntimeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Realm {
    /// Root of every chain in this realm. This object has no prototype
    object_prototype: Object,
    /// Prototype of functions created through [Self::function]; delegates
    /// to the object prototype
    function_prototype: Object,
    /// Prototype of arrays created through [Self::new_array]; delegates to
    /// the object prototype
    array_prototype: Object,
}

#[cfg(test)]
static_assertions::assert_impl_all!(Realm: Send, Sync);

impl Realm {
    /// Initialize a new realm with its root prototypes wired together
    pub fn new() -> Self {
        let object_prototype = Object::new();
        let function_prototype = Object::create(object_prototype.clone());
        let array_prototype = Object::create(object_prototype.clone());
        Self {
            object_prototype,
            function_prototype,
            array_prototype,
        }
    }

    /// The object at the root of every chain in this realm
    pub fn object_prototype(&self) -> &Object {
        &self.object_prototype
    }

    /// The prototype shared by this realm's functions
    pub fn function_prototype(&self) -> &Object {
        &self.function_prototype
    }

    /// The prototype shared by this realm's arrays
    pub fn array_prototype(&self) -> &Object {
        &self.array_prototype
    }

    /// Create an empty object whose prototype is this realm's object
    /// prototype. Use [Object::create] instead to parent an object onto
    /// another object
    pub fn new_object(&self) -> Object {
        Object::create(self.object_prototype.clone())
    }

    /// Create an empty array whose prototype is this realm's array
    /// prototype
    pub fn new_array(&self) -> Array {
        Array::create(self.array_prototype.clone())
    }

    /// Define a named native function whose prototype is this realm's
    /// function prototype
    pub fn function(
        &self,
        name: impl Into<String>,
        body: impl Fn(&[Value]) -> RuntimeResult<Value>
            + Send
            + Sync
            + 'static,
    ) -> Function {
        Function::new(
            Some(name.into()),
            Some(self.function_prototype.clone()),
            body,
        )
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}
