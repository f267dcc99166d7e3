//! Common test utilities: router wiring and routing contexts

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{body::Body, http::Request, Extension, Router};
use std::sync::Arc;
use user_organization::api::rest::{handlers::ApiState, routes::register_routes};
use user_organization::domain::InMemoryOrganizationManager;
use user_organization::{
    Config, ErrorMessage, NewOrganization, Organization, OrganizationManagementError,
    OrganizationManager, ResponseUrls, TenantRoutingContext,
};

pub const TENANT: &str = "acme";
pub const ROOT_TENANT: &str = "root.example";
pub const CORRELATION_ID: &str = "corr-7f3a";

/// Router with `ctx` inserted into every request, as the authentication layer would
pub fn router(
    manager: Arc<dyn OrganizationManager>,
    urls: ResponseUrls,
    ctx: TenantRoutingContext,
) -> Router {
    let state = Arc::new(ApiState { manager, urls });
    register_routes(Router::new(), state)
        .unwrap()
        .layer(Extension(ctx))
}

/// Router without a routing context layer
pub fn router_without_context(manager: Arc<dyn OrganizationManager>) -> Router {
    let state = Arc::new(ApiState {
        manager,
        urls: ResponseUrls::from_config(&Config::default()),
    });
    register_routes(Router::new(), state).unwrap()
}

pub fn default_router(manager: Arc<InMemoryOrganizationManager>) -> Router {
    router(
        manager,
        ResponseUrls::from_config(&Config::default()),
        tenant_context(),
    )
}

pub fn tenant_context() -> TenantRoutingContext {
    TenantRoutingContext::new(TENANT).with_correlation_id(CORRELATION_ID)
}

pub fn organization_scoped_context() -> TenantRoutingContext {
    TenantRoutingContext::new(TENANT)
        .with_tenant_qualified_urls(true)
        .with_organization("org-parent")
        .with_root_tenant_domain(ROOT_TENANT)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Manager whose backend is down
pub struct UnavailableManager;

#[async_trait]
impl OrganizationManager for UnavailableManager {
    async fn get_organization(
        &self,
        _ctx: &TenantRoutingContext,
        organization_id: &str,
    ) -> Result<Organization, OrganizationManagementError> {
        Err(OrganizationManagementError::server(
            ErrorMessage::ErrorRetrievingOrganization,
            &[organization_id],
        )
        .with_source(anyhow::anyhow!("connection refused")))
    }

    async fn add_organization(
        &self,
        _ctx: &TenantRoutingContext,
        _organization: NewOrganization,
    ) -> Result<Organization, OrganizationManagementError> {
        Err(OrganizationManagementError::server(
            ErrorMessage::ErrorAddingOrganization,
            &[],
        ))
    }
}
