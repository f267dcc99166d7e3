//! In-memory organization manager
//!
//! Stores organizations per tenant domain. Used when no platform backend is
//! wired and in tests.

use crate::contract::{
    ErrorMessage, NewOrganization, Organization, OrganizationManagementError,
    OrganizationManager, OrganizationStatus, TenantRoutingContext,
};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// (tenant_domain, organization_id)
type OrgKey = (String, String);

#[derive(Clone, Default)]
pub struct InMemoryOrganizationManager {
    organizations: Arc<RwLock<HashMap<OrgKey, Organization>>>,
}

impl InMemoryOrganizationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of organizations across all tenants
    pub fn organization_count(&self) -> usize {
        self.organizations.read().len()
    }
}

#[async_trait]
impl OrganizationManager for InMemoryOrganizationManager {
    async fn get_organization(
        &self,
        ctx: &TenantRoutingContext,
        organization_id: &str,
    ) -> Result<Organization, OrganizationManagementError> {
        self.organizations
            .read()
            .get(&(ctx.tenant_domain.clone(), organization_id.to_string()))
            .cloned()
            .ok_or_else(|| {
                OrganizationManagementError::client(
                    ErrorMessage::InvalidOrganization,
                    &[organization_id],
                )
            })
    }

    async fn add_organization(
        &self,
        ctx: &TenantRoutingContext,
        organization: NewOrganization,
    ) -> Result<Organization, OrganizationManagementError> {
        let mut organizations = self.organizations.write();

        if tenant_organizations(&organizations, &ctx.tenant_domain)
            .any(|org| org.name == organization.name)
        {
            return Err(OrganizationManagementError::client(
                ErrorMessage::OrganizationNameConflict,
                &[organization.name.as_str()],
            ));
        }

        if let Some(parent_id) = organization.parent_id.as_deref() {
            if !tenant_organizations(&organizations, &ctx.tenant_domain)
                .any(|org| org.id == parent_id)
            {
                return Err(OrganizationManagementError::client(
                    ErrorMessage::InvalidParentOrganization,
                    &[parent_id],
                ));
            }
        }

        let created = Organization {
            id: Uuid::new_v4().to_string(),
            name: organization.name,
            description: organization.description,
            parent_id: organization.parent_id,
            status: OrganizationStatus::Active,
            created: chrono::Utc::now(),
        };

        organizations.insert(
            (ctx.tenant_domain.clone(), created.id.clone()),
            created.clone(),
        );
        tracing::debug!(
            organization_id = %created.id,
            tenant = %ctx.tenant_domain,
            "Organization created"
        );
        Ok(created)
    }
}

fn tenant_organizations<'a>(
    organizations: &'a HashMap<OrgKey, Organization>,
    tenant_domain: &'a str,
) -> impl Iterator<Item = &'a Organization> + 'a {
    organizations
        .iter()
        .filter(move |((tenant, _), _)| tenant == tenant_domain)
        .map(|(_, org)| org)
}
