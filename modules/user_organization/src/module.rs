//! Module declaration and lifecycle

use crate::api::rest::{handlers::ApiState, url::ResponseUrls};
use crate::config::Config;
use crate::contract::OrganizationManager;
use crate::domain::InMemoryOrganizationManager;
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;

/// User organization module
pub struct UserOrganizationModule {
    config: RwLock<Config>,
    state: RwLock<Option<Arc<ApiState>>>,
}

impl Default for UserOrganizationModule {
    fn default() -> Self {
        Self {
            config: RwLock::new(Config::default()),
            state: RwLock::new(None),
        }
    }
}

impl UserOrganizationModule {
    /// Wire the module with its configuration and organization backend.
    ///
    /// Without a backend the in-memory manager is used.
    pub fn init(&self, cfg: Config, manager: Option<Arc<dyn OrganizationManager>>) -> Result<()> {
        let manager = match manager {
            Some(manager) => manager,
            None => {
                tracing::warn!("No organization backend configured, using in-memory manager");
                Arc::new(InMemoryOrganizationManager::new()) as Arc<dyn OrganizationManager>
            }
        };

        let urls = ResponseUrls::from_config(&cfg);
        *self.state.write() = Some(Arc::new(ApiState { manager, urls }));

        tracing::info!(
            tenant_qualified_urls = cfg.tenant_qualified_urls,
            default_tenant_domain = %cfg.default_tenant_domain,
            "User organization module initialized"
        );
        *self.config.write() = cfg;
        Ok(())
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    /// Register the REST routes of this module on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let state = self
            .state
            .read()
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Module not initialized"))?
            .clone();

        tracing::info!("Registering user organization REST routes");
        crate::api::rest::routes::register_routes(router, state)
    }
}
