use async_trait::async_trait;
use axum::Router;

/// Context provided to modules during initialization and startup.
pub struct InitCtx<'a> {
    pub settings: &'a crate::settings::Settings,
}

/// Lifecycle trait implemented by every folio module.
///
/// Modules own their store handles; the registry only drives the lifecycle
/// and the HTTP facade only mounts the routers.
#[async_trait]
pub trait Module: Send + Sync {
    /// Unique name, used in logs and registry lookups.
    fn name(&self) -> &'static str;

    /// Absolute path the module's router is mounted under.
    fn base_path(&self) -> &'static str;

    /// Called once during application startup, before the server binds.
    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Router for this module's routes, mounted under [`Module::base_path`].
    fn routes(&self) -> Router {
        Router::new()
    }

    /// Start background work. Called after every module has initialized.
    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    /// Stop the module and release resources, during shutdown.
    async fn stop(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
