use std::{
    fmt::{self, Display},
    ops::Deref,
    sync::Arc,
};

/// A reference-counted immutable string
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtoString(Arc<str>);

impl ProtoString {
    /// Extract a string slice containing the entire string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for ProtoString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ProtoString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<char> for ProtoString {
    fn from(value: char) -> Self {
        Self(value.to_string().into())
    }
}

impl From<&str> for ProtoString {
    fn from(value: &str) -> Self {
        Self(value.into())
    }
}

impl From<String> for ProtoString {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<ProtoString> for String {
    fn from(string: ProtoString) -> Self {
        // str is unsized, so there's no way to reclaim the allocation even
        // when we hold the last copy of the Arc
        string.as_str().to_owned()
    }
}
