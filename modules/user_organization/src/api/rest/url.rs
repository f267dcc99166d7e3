//! Relative response URLs that follow the tenant/organization routing of the request

use super::error::{build_internal_server_error, ApiError};
use crate::config::Config;
use crate::contract::{catalog::format_description, TenantRoutingContext};
use http::Uri;
use std::sync::Arc;

pub const PATH_SEPARATOR: &str = "/";
pub const V1_API_PATH_COMPONENT: &str = "/v1";
pub const ORGANIZATION_PATH: &str = "organizations";
pub const SERVER_API_PATH_COMPONENT: &str = "/api/server";
pub const USER_API_PATH_COMPONENT: &str = "/api/users";
/// Tenant path template, `{}` is the tenant domain
pub const TENANT_CONTEXT_PATH_COMPONENT: &str = "/t/{}";
pub const ORGANIZATION_CONTEXT_PATH_COMPONENT: &str = "/o";

const PLACEHOLDER: &str = "{}";
const URL_BUILD_ERROR_DESCRIPTION: &str =
    "Server encountered an error while building URL for response body.";

/// Resolves a path into a relative public URL
#[derive(Debug, thiserror::Error)]
pub enum UrlBuildError {
    #[error("root tenant domain is not set for organization '{organization_id}'")]
    MissingRootTenantDomain { organization_id: String },

    #[error("unresolved placeholder in path '{0}'")]
    UnresolvedPlaceholder(String),

    #[error("path template '{0}' must contain exactly one placeholder")]
    InvalidTemplate(String),

    #[error("path '{0}' must not contain whitespace, query or fragment")]
    MalformedPath(String),

    #[error("invalid URI '{url}'")]
    InvalidUri {
        url: String,
        #[source]
        source: http::uri::InvalidUri,
    },
}

/// Platform URL builder seam
pub trait ServiceUrlBuilder: Send + Sync {
    /// Build the relative public URL for an absolute server path
    fn build_relative_public_url(&self, path: &str) -> Result<String, UrlBuildError>;
}

/// Default builder: proxy context path + path, with duplicate separators collapsed.
///
/// Segments are kept literally; `.` and `..` are not resolved.
#[derive(Debug, Clone, Default)]
pub struct RelativeUrlBuilder {
    proxy_context_path: Option<String>,
}

impl RelativeUrlBuilder {
    pub fn new(proxy_context_path: Option<String>) -> Self {
        Self { proxy_context_path }
    }
}

impl ServiceUrlBuilder for RelativeUrlBuilder {
    fn build_relative_public_url(&self, path: &str) -> Result<String, UrlBuildError> {
        if path.contains(PLACEHOLDER) {
            return Err(UrlBuildError::UnresolvedPlaceholder(path.to_string()));
        }
        if path
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '?' || c == '#')
        {
            return Err(UrlBuildError::MalformedPath(path.to_string()));
        }

        let joined = format!(
            "{}{}",
            self.proxy_context_path.as_deref().unwrap_or_default(),
            path
        );
        let collapsed = joined
            .split(PATH_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR);

        Ok(format!("{PATH_SEPARATOR}{collapsed}"))
    }
}

/// Builds the URLs placed in `Location` headers and `ref` fields
#[derive(Clone)]
pub struct ResponseUrls {
    builder: Arc<dyn ServiceUrlBuilder>,
    default_tenant_domain: String,
    tenant_qualified_urls: bool,
}

impl ResponseUrls {
    pub fn new(builder: Arc<dyn ServiceUrlBuilder>, default_tenant_domain: impl Into<String>) -> Self {
        Self {
            builder,
            default_tenant_domain: default_tenant_domain.into(),
            tenant_qualified_urls: false,
        }
    }

    /// Deployment-wide tenant-qualified URL mode; a request context can still enable it on its own
    pub fn with_tenant_qualified_urls(mut self, enabled: bool) -> Self {
        self.tenant_qualified_urls = enabled;
        self
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Arc::new(RelativeUrlBuilder::new(cfg.proxy_context_path.clone())),
            cfg.default_tenant_domain.clone(),
        )
        .with_tenant_qualified_urls(cfg.tenant_qualified_urls)
    }

    /// Relative URL of a single organization.
    ///
    /// The id is percent-encoded as one path segment. A URL that cannot be
    /// built is reported as a 500 [`ApiError`]; the caller should return it
    /// instead of the success response.
    pub fn organization_get_url(
        &self,
        ctx: &TenantRoutingContext,
        organization_id: &str,
    ) -> Result<Uri, ApiError> {
        let endpoint = format!(
            "{V1_API_PATH_COMPONENT}{PATH_SEPARATOR}{ORGANIZATION_PATH}{PATH_SEPARATOR}{}",
            encode_segment(organization_id)
        );
        self.build_uri_for_body(ctx, &endpoint)
    }

    fn build_uri_for_body(&self, ctx: &TenantRoutingContext, endpoint: &str) -> Result<Uri, ApiError> {
        self.context_path(ctx, endpoint)
            .and_then(|path| self.builder.build_relative_public_url(&path))
            .and_then(|url| {
                url.parse::<Uri>()
                    .map_err(|source| UrlBuildError::InvalidUri { url, source })
            })
            .map_err(|e| {
                build_internal_server_error(
                    &e,
                    URL_BUILD_ERROR_DESCRIPTION,
                    ctx.correlation_id.as_deref(),
                )
            })
    }

    /// Prefix `endpoint` with the routing segments of the request.
    ///
    /// Organization scope only applies to tenant-qualified URLs.
    fn context_path(&self, ctx: &TenantRoutingContext, endpoint: &str) -> Result<String, UrlBuildError> {
        if !(self.tenant_qualified_urls || ctx.tenant_qualified_urls_enabled) {
            let tenant_domain = self.resolve_tenant_domain(ctx);
            return Ok(format!(
                "{}{USER_API_PATH_COMPONENT}{endpoint}",
                tenant_path(tenant_domain)?
            ));
        }

        let context = format!("{SERVER_API_PATH_COMPONENT}{endpoint}");
        match ctx.current_organization_id() {
            None => Ok(context),
            Some(organization_id) => {
                let root_tenant_domain = ctx
                    .root_tenant_domain
                    .as_deref()
                    .filter(|domain| !domain.is_empty())
                    .ok_or_else(|| UrlBuildError::MissingRootTenantDomain {
                        organization_id: organization_id.to_string(),
                    })?;
                Ok(format!(
                    "{}{ORGANIZATION_CONTEXT_PATH_COMPONENT}{context}",
                    tenant_path(root_tenant_domain)?
                ))
            }
        }
    }

    fn resolve_tenant_domain<'a>(&'a self, ctx: &'a TenantRoutingContext) -> &'a str {
        if ctx.tenant_domain.is_empty() {
            &self.default_tenant_domain
        } else {
            &ctx.tenant_domain
        }
    }
}

/// Resolve the tenant template; the template is checked before the domain is substituted
fn tenant_path(tenant_domain: &str) -> Result<String, UrlBuildError> {
    if TENANT_CONTEXT_PATH_COMPONENT.matches(PLACEHOLDER).count() != 1 {
        return Err(UrlBuildError::InvalidTemplate(
            TENANT_CONTEXT_PATH_COMPONENT.to_string(),
        ));
    }
    Ok(format_description(
        TENANT_CONTEXT_PATH_COMPONENT,
        &[&encode_segment(tenant_domain)],
    ))
}

/// Percent-encode `value` as a single path segment, dot segments included
fn encode_segment(value: &str) -> String {
    let encoded = urlencoding::encode(value);
    if encoded.chars().all(|c| c == '.') {
        encoded.replace('.', "%2E")
    } else {
        encoded.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tracing_test::traced_test;

    struct FailingBuilder;

    impl ServiceUrlBuilder for FailingBuilder {
        fn build_relative_public_url(&self, path: &str) -> Result<String, UrlBuildError> {
            Err(UrlBuildError::UnresolvedPlaceholder(path.to_string()))
        }
    }

    fn urls() -> ResponseUrls {
        ResponseUrls::from_config(&Config::default())
    }

    #[test]
    fn test_disabled_uses_current_tenant_and_user_api() {
        let ctx = TenantRoutingContext::new("acme");
        let uri = urls().organization_get_url(&ctx, "org-123").unwrap();
        assert_eq!(uri.path(), "/t/acme/api/users/v1/organizations/org-123");
    }

    #[test]
    fn test_disabled_ignores_organization_scope() {
        let ctx = TenantRoutingContext::new("acme")
            .with_organization("org-parent")
            .with_root_tenant_domain("root.com");
        let uri = urls().organization_get_url(&ctx, "org-123").unwrap();
        assert_eq!(uri.path(), "/t/acme/api/users/v1/organizations/org-123");
    }

    #[test]
    fn test_disabled_empty_tenant_falls_back_to_default() {
        let ctx = TenantRoutingContext::default();
        let uri = urls().organization_get_url(&ctx, "org-123").unwrap();
        assert_eq!(uri.path(), "/t/carbon.super/api/users/v1/organizations/org-123");
    }

    #[test]
    fn test_enabled_without_organization_uses_server_api() {
        let ctx = TenantRoutingContext::new("acme").with_tenant_qualified_urls(true);
        let uri = urls().organization_get_url(&ctx, "org-123").unwrap();
        assert_eq!(uri.path(), "/api/server/v1/organizations/org-123");
    }

    #[test]
    fn test_enabled_with_empty_organization_is_unscoped() {
        let ctx = TenantRoutingContext::new("acme")
            .with_tenant_qualified_urls(true)
            .with_organization("");
        let uri = urls().organization_get_url(&ctx, "org-123").unwrap();
        assert_eq!(uri.path(), "/api/server/v1/organizations/org-123");
    }

    #[test]
    fn test_enabled_with_organization_uses_root_tenant() {
        let ctx = TenantRoutingContext::new("sub-org-tenant")
            .with_tenant_qualified_urls(true)
            .with_organization("org-parent")
            .with_root_tenant_domain("root.com");
        let uri = urls().organization_get_url(&ctx, "org-123").unwrap();
        assert_eq!(uri.path(), "/t/root.com/o/api/server/v1/organizations/org-123");
    }

    #[test]
    fn test_enabled_with_organization_without_root_tenant_fails() {
        let ctx = TenantRoutingContext::new("acme")
            .with_tenant_qualified_urls(true)
            .with_organization("org-parent")
            .with_correlation_id("corr-1");
        let err = urls().organization_get_url(&ctx, "org-123").unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.response.trace_id.as_deref(), Some("corr-1"));
    }

    #[test]
    fn test_proxy_context_path_is_prefixed() {
        let cfg = Config {
            proxy_context_path: Some("/identity/".to_string()),
            ..Config::default()
        };
        let ctx = TenantRoutingContext::new("acme");
        let uri = ResponseUrls::from_config(&cfg)
            .organization_get_url(&ctx, "org-123")
            .unwrap();
        assert_eq!(uri.path(), "/identity/t/acme/api/users/v1/organizations/org-123");
    }

    #[test]
    fn test_builder_failure_becomes_internal_server_error() {
        let urls = ResponseUrls::new(Arc::new(FailingBuilder), "carbon.super");
        let ctx = TenantRoutingContext::new("acme");
        let err = urls.organization_get_url(&ctx, "org-123").unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.response.code, "SE-50000");
        assert_eq!(err.response.message, "Error while building response.");
        assert_eq!(err.response.description, URL_BUILD_ERROR_DESCRIPTION);
    }

    #[test]
    fn test_config_flag_enables_tenant_qualified_urls() {
        let cfg = Config {
            tenant_qualified_urls: true,
            ..Config::default()
        };
        let ctx = TenantRoutingContext::new("acme");
        let uri = ResponseUrls::from_config(&cfg)
            .organization_get_url(&ctx, "org-123")
            .unwrap();
        assert_eq!(uri.path(), "/api/server/v1/organizations/org-123");
    }

    #[test]
    fn test_config_flag_with_organization_scope() {
        let cfg = Config {
            tenant_qualified_urls: true,
            ..Config::default()
        };
        let ctx = TenantRoutingContext::new("acme")
            .with_organization("org-parent")
            .with_root_tenant_domain("root.com");
        let uri = ResponseUrls::from_config(&cfg)
            .organization_get_url(&ctx, "org-123")
            .unwrap();
        assert_eq!(uri.path(), "/t/root.com/o/api/server/v1/organizations/org-123");
    }

    #[test]
    fn test_dot_segment_ids_are_kept_literally() {
        let ctx = TenantRoutingContext::new("acme");
        let base = "/t/acme/api/users/v1/organizations";

        let uri = urls().organization_get_url(&ctx, "..").unwrap();
        assert_eq!(uri.path(), format!("{base}/%2E%2E"));

        let uri = urls().organization_get_url(&ctx, ".").unwrap();
        assert_eq!(uri.path(), format!("{base}/%2E"));

        let uri = urls().organization_get_url(&ctx, "%2e%2e").unwrap();
        assert_eq!(uri.path(), format!("{base}/%252e%252e"));
    }

    #[test]
    fn test_id_with_separator_stays_one_segment() {
        let ctx = TenantRoutingContext::new("acme");
        let uri = urls().organization_get_url(&ctx, "a/b").unwrap();
        assert_eq!(uri.path(), "/t/acme/api/users/v1/organizations/a%2Fb");
    }

    #[test]
    fn test_id_with_whitespace_is_encoded() {
        let ctx = TenantRoutingContext::new("acme");
        let uri = urls().organization_get_url(&ctx, "org 123").unwrap();
        assert_eq!(uri.path(), "/t/acme/api/users/v1/organizations/org%20123");
    }

    #[test]
    fn test_braces_in_data_are_not_placeholders() {
        let ctx = TenantRoutingContext::new("ac{}me");
        let uri = urls().organization_get_url(&ctx, "x{}y").unwrap();
        assert_eq!(
            uri.path(),
            "/t/ac%7B%7Dme/api/users/v1/organizations/x%7B%7Dy"
        );
    }

    #[test]
    fn test_relative_builder_rejects_whitespace() {
        let builder = RelativeUrlBuilder::default();
        assert!(matches!(
            builder.build_relative_public_url("/api/a b"),
            Err(UrlBuildError::MalformedPath(_))
        ));
    }

    #[traced_test]
    #[test]
    fn test_build_failure_is_logged_with_cause_and_trace_id() {
        let urls = ResponseUrls::new(Arc::new(FailingBuilder), "carbon.super");
        let ctx = TenantRoutingContext::new("acme").with_correlation_id("corr-9");
        let err = urls.organization_get_url(&ctx, "org-123").unwrap_err();

        assert_eq!(err.response.trace_id.as_deref(), Some("corr-9"));
        logs_assert(|lines: &[&str]| {
            let line = lines
                .iter()
                .find(|line| line.contains(URL_BUILD_ERROR_DESCRIPTION))
                .ok_or("no log entry for the build failure")?;
            if !line.contains("ERROR") {
                return Err(format!("expected ERROR level: {line}"));
            }
            if !line.contains("error=unresolved placeholder in path") {
                return Err(format!("missing cause: {line}"));
            }
            if !line.contains("corr-9") {
                return Err(format!("missing trace id: {line}"));
            }
            Ok(())
        });
    }

    #[test]
    fn test_relative_builder_rejects_placeholders() {
        let builder = RelativeUrlBuilder::default();
        assert!(matches!(
            builder.build_relative_public_url("/t/{}/api"),
            Err(UrlBuildError::UnresolvedPlaceholder(_))
        ));
    }

    #[test]
    fn test_relative_builder_collapses_separators() {
        let builder = RelativeUrlBuilder::new(Some("proxy/".to_string()));
        assert_eq!(
            builder.build_relative_public_url("//api//server").unwrap(),
            "/proxy/api/server"
        );
    }
}
