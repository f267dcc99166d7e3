//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Error DTOs =====

/// Error body returned by the organization endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// Machine-readable error code
    #[schema(example = "ORG-60004")]
    pub code: String,

    /// Short summary of the error
    #[schema(example = "Invalid organization.")]
    pub message: String,

    /// Description specific to this occurrence
    #[schema(example = "Organization with id: 8b2c0e4a does not exist.")]
    pub description: String,
}

// ===== Organization DTOs =====

/// Organization response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDto {
    /// Organization ID
    pub id: String,

    /// Organization name
    #[schema(example = "Sales")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parent organization ID, absent for top-level organizations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[schema(example = "ACTIVE")]
    pub status: String,

    /// Creation timestamp
    pub created: chrono::DateTime<chrono::Utc>,

    /// Relative URL of this organization
    #[serde(rename = "ref")]
    #[schema(example = "/t/acme/api/users/v1/organizations/8b2c0e4a")]
    pub ref_url: String,
}

/// Create organization request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationRequest {
    #[schema(example = "Sales")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Parent organization ID (optional)
    #[serde(default)]
    pub parent_id: Option<String>,
}
