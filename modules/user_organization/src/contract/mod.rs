//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models, the error catalog and the
//! organization manager trait.
//! NO serde derives on models - these are pure domain types.

pub mod catalog;
pub mod client;
pub mod context;
pub mod error;
pub mod model;

pub use catalog::{ErrorMessage, ResolvedError};
pub use client::OrganizationManager;
pub use context::TenantRoutingContext;
pub use error::{ErrorDetails, OrganizationManagementError};
pub use model::{NewOrganization, Organization, OrganizationStatus};
