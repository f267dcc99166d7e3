//! Translation of organization management errors into HTTP error payloads

use super::dto::ErrorDto;
use crate::contract::{ErrorMessage, OrganizationManagementError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error body written by [`ApiError`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub description: String,

    /// Correlation id of the request that failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl ErrorResponse {
    pub fn builder() -> ErrorResponseBuilder {
        ErrorResponseBuilder::default()
    }
}

#[derive(Debug, Default)]
#[must_use]
pub struct ErrorResponseBuilder {
    code: String,
    message: String,
    description: String,
    trace_id: Option<String>,
}

impl ErrorResponseBuilder {
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Build without logging.
    ///
    /// Code and message must be set; debug builds assert it.
    pub fn build(self) -> ErrorResponse {
        debug_assert!(!self.code.is_empty(), "error response without a code");
        debug_assert!(!self.message.is_empty(), "error response without a message");
        ErrorResponse {
            code: self.code,
            message: self.message,
            description: self.description,
            trace_id: self.trace_id,
        }
    }

    /// Build and log the error at debug level, without a cause
    pub fn build_logged(self, description: &str) -> ErrorResponse {
        tracing::debug!(
            code = %self.code,
            message = %self.message,
            trace_id = ?self.trace_id,
            "{}",
            description
        );
        self.build()
    }

    /// Build and log the error together with the cause that triggered it
    pub fn build_with_cause(
        self,
        cause: &(dyn std::error::Error + 'static),
        description: &str,
    ) -> ErrorResponse {
        tracing::error!(
            code = %self.code,
            message = %self.message,
            trace_id = ?self.trace_id,
            error = %cause,
            causes = ?source_chain(cause),
            "{}",
            description
        );
        self.build()
    }
}

fn source_chain(cause: &(dyn std::error::Error + 'static)) -> Vec<String> {
    std::iter::successors(cause.source(), |e| e.source())
        .map(ToString::to_string)
        .collect()
}

/// An error response paired with the HTTP status it is served with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, response: ErrorResponse) -> Self {
        Self { status, response }
    }

    /// Attach the request correlation id if the response has none yet
    pub fn with_trace_id(mut self, trace_id: Option<&str>) -> Self {
        if self.response.trace_id.is_none() {
            self.response.trace_id = trace_id.map(str::to_string);
        }
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.status.as_u16(),
            self.response.code,
            self.response.message
        )
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<OrganizationManagementError> for ApiError {
    fn from(error: OrganizationManagementError) -> Self {
        handle_exception(&error)
    }
}

/// Build an error body from a catalog entry, substituting `data` into its description
pub fn build_error(entry: ErrorMessage, data: &[&str]) -> ErrorDto {
    let resolved = entry.resolve(data);
    ErrorDto {
        code: resolved.code,
        message: resolved.message,
        description: resolved.description,
    }
}

/// Build an error body from a domain error; its description is already resolved
pub fn build_error_from_exception(error: &OrganizationManagementError) -> ErrorDto {
    ErrorDto {
        code: error.code().to_string(),
        message: error.message().to_string(),
        description: error.description().to_string(),
    }
}

/// Map a domain error to 400 for client faults and 500 for everything else.
///
/// Client faults are logged by description only; server faults are logged with the error itself.
pub fn handle_exception(error: &OrganizationManagementError) -> ApiError {
    handle_exception_with_trace_id(error, None)
}

/// [`handle_exception`] for a request with a correlation id, which is logged and written as `traceId`
pub fn handle_exception_with_trace_id(
    error: &OrganizationManagementError,
    trace_id: Option<&str>,
) -> ApiError {
    let mut builder = error_builder(error);
    if let Some(trace_id) = trace_id {
        builder = builder.with_trace_id(trace_id);
    }
    match error {
        OrganizationManagementError::Client(_) => ApiError::new(
            StatusCode::BAD_REQUEST,
            builder.build_logged(error.description()),
        ),
        OrganizationManagementError::Server { .. } => ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            builder.build_with_cause(error, error.description()),
        ),
    }
}

/// Pair a catalog entry, taken verbatim, with a caller-chosen status
pub fn handle_error(status: StatusCode, entry: ErrorMessage) -> ApiError {
    let response = ErrorResponse::builder()
        .with_code(entry.code())
        .with_message(entry.message())
        .with_description(entry.description())
        .build();
    ApiError::new(status, response)
}

/// 500 for failures while assembling a response, logged with the triggering cause
pub(crate) fn build_internal_server_error(
    cause: &(dyn std::error::Error + 'static),
    description: &str,
    trace_id: Option<&str>,
) -> ApiError {
    let mut builder = ErrorResponse::builder()
        .with_code(ErrorMessage::UnexpectedServerError.code())
        .with_message("Error while building response.")
        .with_description(description);
    if let Some(trace_id) = trace_id {
        builder = builder.with_trace_id(trace_id);
    }
    let response = builder.build_with_cause(cause, description);
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, response)
}

fn error_builder(error: &OrganizationManagementError) -> ErrorResponseBuilder {
    ErrorResponse::builder()
        .with_code(error.code())
        .with_message(error.message())
        .with_description(error.description())
}
