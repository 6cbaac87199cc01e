//! Error types for directory lookups and authority mapping

use thiserror::Error;

/// Result type for directory lookups
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Result type for authority operations
pub type AuthorityResult<T> = Result<T, AuthorityError>;

/// Classified failure of a directory group lookup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The directory denied access to the membership listing (HTTP 403)
    #[error("Directory access forbidden: {message}")]
    Forbidden { message: String },

    /// The access token was rejected (HTTP 401)
    #[error("Access token rejected: {message}")]
    Unauthorized { message: String },

    /// Transport failure talking to the directory
    #[error("Network error: {0}")]
    Network(String),

    /// The directory answered with something that is not a membership listing
    #[error("Malformed directory response: {0}")]
    MalformedResponse(String),

    /// Any other non-success status
    #[error("Unexpected directory response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The client could not be built from its configuration.
    ///
    /// Only raised while constructing a client; `lookup_groups` never
    /// returns it.
    #[error("Directory client configuration error: {0}")]
    Configuration(String),
}

impl DirectoryError {
    /// Create a new forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Classify a non-success HTTP status returned by the directory
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            403 => Self::Forbidden { message: body },
            401 => Self::Unauthorized { message: body },
            _ => Self::UnexpectedStatus { status, body },
        }
    }

    /// Check if the directory denied access
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden { .. })
    }
}

/// Errors surfaced by authority mapping
#[derive(Error, Debug)]
pub enum AuthorityError {
    /// Directory lookup failed with a non-recoverable error
    #[error("Directory lookup failed: {0}")]
    Directory(#[from] DirectoryError),
}

impl AuthorityError {
    /// The directory error behind this failure
    pub fn directory_error(&self) -> &DirectoryError {
        match self {
            Self::Directory(err) => err,
        }
    }
}
