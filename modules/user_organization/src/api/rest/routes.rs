//! Route registration for the organization endpoints

use super::{dto::*, error::ApiError, handlers, handlers::ApiState};
use crate::contract::TenantRoutingContext;
use axum::{
    extract::{rejection::JsonRejection, Path},
    http::{header::HeaderName, StatusCode},
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;

/// Register all REST routes
pub fn register_routes(router: Router, state: Arc<ApiState>) -> anyhow::Result<Router> {
    let router = router
        .route("/v1/organizations", post(create_organization_handler))
        .route("/v1/organizations/{organization_id}", get(get_organization_handler))
        .layer(Extension(state));

    Ok(router)
}

// ===== Handler wrappers that extract state from Extension =====

async fn get_organization_handler(
    Extension(state): Extension<Arc<ApiState>>,
    ctx: TenantRoutingContext,
    path: Path<String>,
) -> Result<Json<OrganizationDto>, ApiError> {
    handlers::get_organization(state, ctx, path).await
}

async fn create_organization_handler(
    Extension(state): Extension<Arc<ApiState>>,
    ctx: TenantRoutingContext,
    payload: Result<Json<CreateOrganizationRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<OrganizationDto>), ApiError> {
    handlers::create_organization(state, ctx, payload).await
}
