use crate::{
    error::RuntimeResult,
    value::{Object, Value},
};
use std::{
    fmt::{self, Debug, Display},
    sync::Arc,
};

/// A callable value backed by a native Rust closure.
///
/// Functions clone cheaply and compare by identity: a function is only ever
/// equal to itself, regardless of name or behavior. Like objects, a function
/// carries an optional prototype fixed at construction.
#[derive(Clone)]
pub struct Function(Arc<FunctionInner>);

struct FunctionInner {
    name: Option<String>,
    prototype: Option<Object>,
    body: Box<dyn Fn(&[Value]) -> RuntimeResult<Value> + Send + Sync>,
}

impl Function {
    pub(crate) fn new(
        name: Option<String>,
        prototype: Option<Object>,
        body: impl Fn(&[Value]) -> RuntimeResult<Value>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self(Arc::new(FunctionInner {
            name,
            prototype,
            body: Box::new(body),
        }))
    }

    /// Create a named function with no prototype. Use
    /// [Realm::function](crate::Realm::function) instead to get a function
    /// wired into a realm's chain
    pub fn native(
        name: impl Into<String>,
        body: impl Fn(&[Value]) -> RuntimeResult<Value>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self::new(Some(name.into()), None, body)
    }

    /// The name this function was defined with, if any
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// The object this function delegates property lookups to, if any
    pub fn prototype(&self) -> Option<Object> {
        self.0.prototype.clone()
    }

    /// Are these two handles for the same function?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Call the function with the given arguments
    pub fn call(&self, arguments: &[Value]) -> RuntimeResult<Value> {
        (self.0.body)(arguments)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.0.name)
            .field("prototype", &self.0.prototype)
            .field("body", &"...")
            .finish()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.0.name.as_deref().unwrap_or("(anonymous)");
        write!(f, "[Function: {name}]")
    }
}
