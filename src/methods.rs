use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

mod error;
mod method_flag;
mod registry;

pub use error::UnknownMethod;
pub use method_flag::MethodSet;
pub use registry::resolve;

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Method {
    /// Submits data to be handled by the target resource.
    Post = 0,
    /// Retrieves a resource.
    Get = 1,
    /// Adds or replaces data on the target resource.
    Put = 2,
    /// Applies a partial modification to the target resource.
    Patch = 3,
    /// Retrieves only the headers a `GET` would return.
    Head = 4,
    /// Deletes the target resource.
    Delete = 5,
}

impl Method {
    /// Every method, in declaration order.
    pub const ALL: [Method; 6] = [
        Method::Post,
        Method::Get,
        Method::Put,
        Method::Patch,
        Method::Head,
        Method::Delete,
    ];

    /// Returns the canonical uppercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "POST",
            Method::Get => "GET",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
            Method::Delete => "DELETE",
        }
    }

    /// Whether a payload is expected for this method.
    ///
    /// `HEAD` is the only method whose response never carries an entity.
    pub const fn has_body(&self) -> bool {
        !matches!(self, Method::Head)
    }

    pub const fn is_safe(&self) -> bool {
        matches!(self, Method::Get | Method::Head)
    }

    pub const fn is_idempotent(&self) -> bool {
        matches!(
            self,
            Method::Get | Method::Head | Method::Put | Method::Delete
        )
    }

    pub fn iter() -> impl Iterator<Item = Method> {
        Self::ALL.into_iter()
    }

    /// Resolves a method name, ignoring case and any whitespace.
    ///
    /// See [`resolve`].
    pub fn from_name(name: &str) -> Option<Self> {
        resolve(name)
    }

    pub(crate) const fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// Free-function form of [`Method::has_body`].
pub const fn has_body(method: Method) -> bool {
    method.has_body()
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s).ok_or_else(|| UnknownMethod::new(s))
    }
}

impl TryFrom<&str> for Method {
    type Error = UnknownMethod;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for hyper::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Post => hyper::Method::POST,
            Method::Get => hyper::Method::GET,
            Method::Put => hyper::Method::PUT,
            Method::Patch => hyper::Method::PATCH,
            Method::Head => hyper::Method::HEAD,
            Method::Delete => hyper::Method::DELETE,
        }
    }
}

impl TryFrom<&hyper::Method> for Method {
    type Error = UnknownMethod;

    fn try_from(method: &hyper::Method) -> Result<Self, Self::Error> {
        match method {
            &hyper::Method::POST => Ok(Method::Post),
            &hyper::Method::GET => Ok(Method::Get),
            &hyper::Method::PUT => Ok(Method::Put),
            &hyper::Method::PATCH => Ok(Method::Patch),
            &hyper::Method::HEAD => Ok(Method::Head),
            &hyper::Method::DELETE => Ok(Method::Delete),
            _ => Err(UnknownMethod::new(method.as_str())),
        }
    }
}

impl TryFrom<hyper::Method> for Method {
    type Error = UnknownMethod;

    fn try_from(method: hyper::Method) -> Result<Self, Self::Error> {
        Method::try_from(&method)
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Method {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
