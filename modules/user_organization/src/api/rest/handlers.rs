//! HTTP request handlers - thin layer that delegates to the organization manager

use super::{
    dto::*,
    error::{handle_error, handle_exception_with_trace_id, ApiError},
    url::ResponseUrls,
};
use crate::contract::{
    ErrorMessage, OrganizationManagementError, OrganizationManager, TenantRoutingContext,
};
use axum::{
    extract::{rejection::JsonRejection, Path},
    http::{header, StatusCode},
    Json,
};
use std::sync::Arc;

/// Shared state of the organization endpoints
#[derive(Clone)]
pub struct ApiState {
    pub manager: Arc<dyn OrganizationManager>,
    pub urls: ResponseUrls,
}

fn map_domain_error(
    ctx: &TenantRoutingContext,
) -> impl Fn(OrganizationManagementError) -> ApiError + '_ {
    move |error| handle_exception_with_trace_id(&error, ctx.correlation_id.as_deref())
}

/// Get a single organization
pub async fn get_organization(
    state: Arc<ApiState>,
    ctx: TenantRoutingContext,
    Path(organization_id): Path<String>,
) -> Result<Json<OrganizationDto>, ApiError> {
    let organization = state
        .manager
        .get_organization(&ctx, &organization_id)
        .await
        .map_err(map_domain_error(&ctx))?;

    let ref_url = state.urls.organization_get_url(&ctx, &organization.id)?;
    Ok(Json(OrganizationDto::from_model(organization, &ref_url)))
}

/// Create an organization
pub async fn create_organization(
    state: Arc<ApiState>,
    ctx: TenantRoutingContext,
    payload: Result<Json<CreateOrganizationRequest>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<OrganizationDto>), ApiError> {
    let invalid_body = || {
        handle_error(StatusCode::BAD_REQUEST, ErrorMessage::InvalidRequestBody)
            .with_trace_id(ctx.correlation_id.as_deref())
    };

    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected organization request body");
        invalid_body()
    })?;
    if req.name.trim().is_empty() {
        return Err(invalid_body());
    }

    let organization = state
        .manager
        .add_organization(&ctx, req.into())
        .await
        .map_err(map_domain_error(&ctx))?;

    let ref_url = state.urls.organization_get_url(&ctx, &organization.id)?;
    tracing::info!(organization_id = %organization.id, location = %ref_url, "Organization created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, ref_url.to_string())],
        Json(OrganizationDto::from_model(organization, &ref_url)),
    ))
}
