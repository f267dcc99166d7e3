//! Per-request tenant routing context

/// Routing information for the request being served.
///
/// Built once per request by the host's authentication layer and passed
/// explicitly to everything that needs it. Nothing in this crate mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantRoutingContext {
    /// Tenant domain the request resolved to; empty means the default tenant
    pub tenant_domain: String,
    /// Organization the request is scoped to, if any
    pub organization_id: Option<String>,
    /// Root tenant domain of the organization hierarchy (set for organization-scoped requests)
    pub root_tenant_domain: Option<String>,
    /// Whether resource URLs are tenant-qualified (`/t/{tenant}/...`)
    pub tenant_qualified_urls_enabled: bool,
    /// Correlation id propagated into error bodies and logs
    pub correlation_id: Option<String>,
}

impl TenantRoutingContext {
    pub fn new(tenant_domain: impl Into<String>) -> Self {
        Self {
            tenant_domain: tenant_domain.into(),
            ..Self::default()
        }
    }

    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    pub fn with_root_tenant_domain(mut self, root_tenant_domain: impl Into<String>) -> Self {
        self.root_tenant_domain = Some(root_tenant_domain.into());
        self
    }

    pub fn with_tenant_qualified_urls(mut self, enabled: bool) -> Self {
        self.tenant_qualified_urls_enabled = enabled;
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Organization id when the request is organization-scoped; empty ids count as unscoped
    pub fn current_organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref().filter(|id| !id.is_empty())
    }
}
