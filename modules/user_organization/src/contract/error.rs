//! Contract error types for organization management
//!
//! The client/server split is carried by the variant, so callers decide the
//! HTTP status with a `match` instead of a runtime type test.

use super::catalog::ErrorMessage;

/// Code, message and already-resolved description of a domain error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    pub description: String,
}

impl ErrorDetails {
    /// Code and message must be non-empty; debug builds assert it
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let details = Self {
            code: code.into(),
            message: message.into(),
            description: description.into(),
        };
        debug_assert!(!details.code.is_empty(), "error details without a code");
        debug_assert!(!details.message.is_empty(), "error details without a message");
        details
    }
}

impl From<ErrorMessage> for ErrorDetails {
    fn from(entry: ErrorMessage) -> Self {
        entry.resolve(&[]).into()
    }
}

impl From<super::catalog::ResolvedError> for ErrorDetails {
    fn from(resolved: super::catalog::ResolvedError) -> Self {
        Self {
            code: resolved.code,
            message: resolved.message,
            description: resolved.description,
        }
    }
}

/// Organization management domain errors
#[derive(Debug, thiserror::Error)]
pub enum OrganizationManagementError {
    /// The caller's request was invalid
    #[error("{}", .0.message)]
    Client(ErrorDetails),

    /// The server failed to serve a valid request
    #[error("{}", .details.message)]
    Server {
        details: ErrorDetails,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl OrganizationManagementError {
    /// Client fault built from a catalog entry
    pub fn client(entry: ErrorMessage, data: &[&str]) -> Self {
        Self::Client(entry.resolve(data).into())
    }

    /// Server fault built from a catalog entry
    pub fn server(entry: ErrorMessage, data: &[&str]) -> Self {
        Self::Server {
            details: entry.resolve(data).into(),
            source: None,
        }
    }

    /// Attach an underlying cause. Client errors carry no cause and are returned unchanged.
    pub fn with_source(self, cause: impl Into<anyhow::Error>) -> Self {
        match self {
            Self::Server { details, .. } => Self::Server {
                details,
                source: Some(cause.into()),
            },
            client @ Self::Client(_) => client,
        }
    }

    pub fn details(&self) -> &ErrorDetails {
        match self {
            Self::Client(details) => details,
            Self::Server { details, .. } => details,
        }
    }

    pub fn code(&self) -> &str {
        &self.details().code
    }

    pub fn message(&self) -> &str {
        &self.details().message
    }

    pub fn description(&self) -> &str {
        &self.details().description
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Client(_))
    }
}
