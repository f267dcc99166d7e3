//! Error message catalog for organization management
//!
//! Every known error condition is a variant carrying a static code, a short
//! message and a description template with positional `{}` placeholders.

/// Prefix shared by all organization management error codes
pub const ERROR_CODE_PREFIX: &str = "ORG-";

/// Known organization management error conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorMessage {
    // ===== Client errors =====
    InvalidRequestBody,
    OrganizationNameConflict,
    InvalidParentOrganization,
    InvalidOrganization,
    UserNotAuthorizedToCreateOrganization,
    InvalidPaginationParameter,
    UnsupportedFilterAttribute,

    // ===== Server errors =====
    ErrorRetrievingOrganization,
    ErrorAddingOrganization,
    UnexpectedServerError,
}

impl ErrorMessage {
    /// All catalog entries, in declaration order
    pub const ALL: [ErrorMessage; 10] = [
        ErrorMessage::InvalidRequestBody,
        ErrorMessage::OrganizationNameConflict,
        ErrorMessage::InvalidParentOrganization,
        ErrorMessage::InvalidOrganization,
        ErrorMessage::UserNotAuthorizedToCreateOrganization,
        ErrorMessage::InvalidPaginationParameter,
        ErrorMessage::UnsupportedFilterAttribute,
        ErrorMessage::ErrorRetrievingOrganization,
        ErrorMessage::ErrorAddingOrganization,
        ErrorMessage::UnexpectedServerError,
    ];

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequestBody => "ORG-60001",
            Self::OrganizationNameConflict => "ORG-60002",
            Self::InvalidParentOrganization => "ORG-60003",
            Self::InvalidOrganization => "ORG-60004",
            Self::UserNotAuthorizedToCreateOrganization => "ORG-60005",
            Self::InvalidPaginationParameter => "ORG-60006",
            Self::UnsupportedFilterAttribute => "ORG-60007",
            Self::ErrorRetrievingOrganization => "ORG-65001",
            Self::ErrorAddingOrganization => "ORG-65002",
            Self::UnexpectedServerError => "SE-50000",
        }
    }

    /// Short, human-readable summary
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidRequestBody => "Invalid request.",
            Self::OrganizationNameConflict => "Organization name unavailable.",
            Self::InvalidParentOrganization => "Invalid parent organization.",
            Self::InvalidOrganization => "Invalid organization.",
            Self::UserNotAuthorizedToCreateOrganization => "Unable to create the organization.",
            Self::InvalidPaginationParameter => "Invalid pagination parameters.",
            Self::UnsupportedFilterAttribute => "Unsupported filter attribute.",
            Self::ErrorRetrievingOrganization => "Unable to retrieve the organization.",
            Self::ErrorAddingOrganization => "Unable to create the organization.",
            Self::UnexpectedServerError => "Unexpected Server Error.",
        }
    }

    /// Description template; `{}` marks a positional placeholder
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidRequestBody => {
                "Provided request body content is not in the expected format."
            }
            Self::OrganizationNameConflict => "Organization name {} is already taken.",
            Self::InvalidParentOrganization => "Parent organization with id {} does not exist.",
            Self::InvalidOrganization => "Organization with id: {} does not exist.",
            Self::UserNotAuthorizedToCreateOrganization => {
                "Unauthorized request to add an organization to parent organization with id: {}."
            }
            Self::InvalidPaginationParameter => "Limit should not be negative: {}.",
            Self::UnsupportedFilterAttribute => "The filter attribute '{}' is not supported.",
            Self::ErrorRetrievingOrganization => {
                "Server encountered an error while retrieving organization with id: {}."
            }
            Self::ErrorAddingOrganization => {
                "Server encountered an error while creating the organization."
            }
            Self::UnexpectedServerError => {
                "Server encountered an error while serving the request."
            }
        }
    }

    /// Resolve the description template against positional data
    pub fn resolve(&self, data: &[&str]) -> ResolvedError {
        ResolvedError {
            code: self.code().to_string(),
            message: self.message().to_string(),
            description: format_description(self.description(), data),
        }
    }
}

/// Catalog entry with its description fully resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedError {
    pub code: String,
    pub message: String,
    pub description: String,
}

/// Substitute `data` into the `{}` placeholders of `template`, left to right.
///
/// Empty `data` returns the template unchanged. Surplus items are ignored and
/// placeholders without a matching item are kept as-is.
pub fn format_description(template: &str, data: &[&str]) -> String {
    if data.is_empty() {
        return template.to_string();
    }

    let extra: usize = data.iter().map(|d| d.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut values = data.iter();
    let mut rest = template;
    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        match values.next() {
            Some(value) => out.push_str(value),
            None => out.push_str("{}"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}
