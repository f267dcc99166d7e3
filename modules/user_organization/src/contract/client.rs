//! Organization management API consumed by the REST layer
//!
//! The platform's organization-management service sits behind this trait.

use super::{
    context::TenantRoutingContext,
    error::OrganizationManagementError,
    model::{NewOrganization, Organization},
};
use async_trait::async_trait;

#[async_trait]
pub trait OrganizationManager: Send + Sync {
    /// Get an organization by id within the caller's tenant
    async fn get_organization(
        &self,
        ctx: &TenantRoutingContext,
        organization_id: &str,
    ) -> Result<Organization, OrganizationManagementError>;

    /// Create an organization within the caller's tenant
    async fn add_organization(
        &self,
        ctx: &TenantRoutingContext,
        organization: NewOrganization,
    ) -> Result<Organization, OrganizationManagementError>;
}
