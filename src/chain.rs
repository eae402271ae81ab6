//! Prototype chain reflection: walking a value's delegation chain and
//! asking whether one value sits in another's chain

use crate::{
    error::{RuntimeError, RuntimeResult},
    value::Value,
    Object,
};

impl Value {
    /// Get the object this value delegates property lookups to, if any.
    /// Objects, arrays and functions each carry a prototype slot; every
    /// other value has no prototype, so walking a chain from it ends
    /// immediately
    pub fn prototype(&self) -> Option<Object> {
        match self {
            Self::Object(object) => object.prototype(),
            Self::Array(array) => array.prototype(),
            Self::Function(function) => function.prototype(),
            _ => None,
        }
    }

    /// Is this value a link in `target`'s prototype chain?
    ///
    /// The chain is walked by identity: a link matches only if it is the
    /// *same* object as `self`, never one that merely has equal contents.
    /// The target's own identity is not part of its chain, so
    /// `v.is_prototype_of(&v)` is false.
    ///
    /// Targets that can't carry a prototype (primitives, `undefined`,
    /// `null`) have no chain and always return `Ok(false)`. The walk is
    /// iterative, so arbitrarily long chains don't grow the stack, and
    /// chains can't cycle because a prototype slot is fixed before any
    /// object can delegate to it.
    ///
    /// Equivalent to JavaScript's
    /// [`Object.prototype.isPrototypeOf`](https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Global_Objects/Object/isPrototypeOf).
    ///
    /// ## Errors
    ///
    /// Returns [RuntimeError::Nullish] if `self` is `undefined` or `null`.
    /// An absent value has no place in a chain, and asking about one is
    /// reported as an error rather than a `false`
    pub fn is_prototype_of(&self, target: &Value) -> RuntimeResult<bool> {
        let candidate = match self {
            Self::Undefined | Self::Null => {
                return Err(RuntimeError::Nullish {
                    property: "isPrototypeOf",
                    value: self.type_of(),
                })
            }
            Self::Object(object) => Some(object),
            // Non-nullish primitives are legal candidates; they just can't
            // appear in any chain
            _ => None,
        };
        if !target.is_object_like() {
            return Ok(false);
        }
        let mut parent = target.prototype();
        while let Some(object) = parent {
            if candidate.is_some_and(|candidate| candidate.ptr_eq(&object)) {
                return Ok(true);
            }
            parent = object.prototype();
        }
        Ok(false)
    }
}
