use thiserror::Error;

/// A method name that matches none of the known [`Method`](super::Method)s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method: {0:?}")]
pub struct UnknownMethod(String);

impl UnknownMethod {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The rejected input, exactly as it was given.
    pub fn name(&self) -> &str {
        &self.0
    }
}
