//! User Organization Module
//!
//! REST surface for organizations within a multi-tenant identity platform.
//! Translates organization management errors into HTTP error payloads and
//! builds response URLs that follow the tenant/organization routing of the
//! request.

// Public exports
pub mod contract;
pub use contract::{
    ErrorMessage, NewOrganization, Organization, OrganizationManagementError,
    OrganizationManager, OrganizationStatus, TenantRoutingContext,
};

pub mod module;
pub use module::UserOrganizationModule;

pub mod api;
pub use api::rest::error::{
    build_error, build_error_from_exception, handle_error, handle_exception,
    handle_exception_with_trace_id, ApiError, ErrorResponse,
};
pub use api::rest::url::{ResponseUrls, ServiceUrlBuilder, UrlBuildError};

pub mod config;
pub use config::Config;

#[doc(hidden)]
pub mod domain;
