use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgumentKind {
    /// A required object or field was not supplied.
    Missing,
    /// The value collides with an existing record.
    Duplicate,
    /// The referenced record does not exist.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("invalid argument: {message}")]
    InvalidArgument {
        kind: InvalidArgumentKind,
        message: String,
    },
    #[error("validation failed: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn missing(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind: InvalidArgumentKind::Missing,
            message: message.into(),
        }
    }

    pub fn duplicate(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind: InvalidArgumentKind::Duplicate,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind: InvalidArgumentKind::NotFound,
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ServiceError::InvalidArgument { .. })
    }

    pub fn invalid_argument_kind(&self) -> Option<InvalidArgumentKind> {
        match self {
            ServiceError::InvalidArgument { kind, .. } => Some(*kind),
            ServiceError::Validation(_) => None,
        }
    }
}
