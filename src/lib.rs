//! folio application library: library-catalog modules and bootstrap.

pub mod modules;
pub mod state;
pub mod utils;

use folio_kernel::settings::Settings;
use folio_kernel::{InitCtx, ModuleRegistry};

use state::Stores;

/// Wires stores and modules together and serves HTTP until shutdown.
pub async fn run(settings: Settings) -> anyhow::Result<()> {
    let stores = Stores::in_memory();

    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, &stores);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    folio_http::start_server(&registry, &settings).await?;

    registry.stop_modules().await
}
