use tracing::info;

use crate::config::ServicesConfig;
use crate::container::{ServiceCollection, ServiceProvider};
use crate::error::Result;
use crate::registration::{DefinitionScanner, ServiceRegistrar, TypeCatalog};

/// Runs the registration pass for `config` and builds the container the
/// application resolves from. Any failure here is meant to stop startup.
pub fn build_services(config: &ServicesConfig, catalog: &TypeCatalog) -> Result<ServiceProvider> {
    let mut services = ServiceCollection::new();
    let mut registrar = ServiceRegistrar::with_scanner(catalog, DefinitionScanner::new(config.file_name.as_str()));
    registrar.register_from_dir(&config.root, &mut services)?;

    info!(bindings = services.len(), "Service container built");
    Ok(services.build())
}
