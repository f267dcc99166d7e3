//! Configuration for the user organization module

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix; nested keys are separated by `__`
pub const ENV_PREFIX: &str = "USER_ORG__";

/// User organization module configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Whether resource URLs carry the tenant (and organization) path prefix
    #[serde(default)]
    pub tenant_qualified_urls: bool,

    /// Tenant domain used when a request resolves to no tenant
    #[serde(default = "default_tenant_domain")]
    pub default_tenant_domain: String,

    /// Context path of the reverse proxy in front of the server, e.g. `/identity`
    #[serde(default)]
    pub proxy_context_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tenant_qualified_urls: false,
            default_tenant_domain: default_tenant_domain(),
            proxy_context_path: None,
        }
    }
}

fn default_tenant_domain() -> String {
    "carbon.super".to_string()
}

impl Config {
    /// Load configuration from defaults, an optional YAML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__")).extract()
    }
}
