//! Axum extractor for the tenant routing context

use super::error::{handle_error, ApiError};
use crate::contract::{ErrorMessage, TenantRoutingContext};
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};

/// The context is inserted into request extensions by the host's authentication layer.
impl<S> FromRequestParts<S> for TenantRoutingContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TenantRoutingContext>()
            .cloned()
            .ok_or_else(|| {
                tracing::error!(
                    path = %parts.uri.path(),
                    "TenantRoutingContext not found - routing middleware not configured"
                );
                handle_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorMessage::UnexpectedServerError,
                )
            })
    }
}
