//! Conversions between REST DTOs and contract models

use super::dto::*;
use crate::contract;
use http::Uri;

// ===== Organization conversions =====

impl OrganizationDto {
    /// Response DTO for an organization served at `ref_url`
    pub fn from_model(organization: contract::Organization, ref_url: &Uri) -> Self {
        Self {
            id: organization.id,
            name: organization.name,
            description: organization.description,
            parent_id: organization.parent_id,
            status: organization.status.as_str().to_string(),
            created: organization.created,
            ref_url: ref_url.to_string(),
        }
    }
}

impl From<CreateOrganizationRequest> for contract::NewOrganization {
    fn from(req: CreateOrganizationRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            description: req.description,
            parent_id: req.parent_id.filter(|id| !id.is_empty()),
        }
    }
}
