use std::borrow::Cow;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Classifies an engine failure so the HTTP layer can pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied an unusable payload.
    InvalidInput,
    /// The ML backend was reachable but returned an error or unparsable body.
    Backend,
    Internal,
}

#[derive(Debug, Clone)]
pub struct EngineError {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl EngineError {
    pub fn new<T>(message: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            kind: ErrorKind::Internal,
            message: message.into(),
        }
    }

    pub fn invalid_input<T>(message: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            kind: ErrorKind::InvalidInput,
            message: message.into(),
        }
    }

    pub fn backend<T>(message: T) -> Self
    where
        T: Into<Cow<'static, str>>,
    {
        Self {
            kind: ErrorKind::Backend,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for EngineError {}

pub type EngineResult<T> = Result<T, EngineError>;
