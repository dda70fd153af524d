use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::catalog::TypeCatalog;
use super::definition::ServiceDefinition;
use super::parser::parse_definitions;
use super::scanner::DefinitionScanner;
use crate::container::{ServiceCollection, ServiceDescriptor};
use crate::error::{DefinitionField, RegistrationError, TypeRole};

/// Turns service definitions into container bindings.
///
/// Remembers everything it has registered; names and classes must stay
/// unique for the life of the registrar. There is no reset, so handing the
/// same definitions to the same registrar twice fails the second time.
pub struct ServiceRegistrar<'a> {
    catalog: &'a TypeCatalog,
    scanner: DefinitionScanner,
    registered: Vec<ServiceDefinition>,
}

impl<'a> ServiceRegistrar<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self::with_scanner(catalog, DefinitionScanner::default())
    }

    pub fn with_scanner(catalog: &'a TypeCatalog, scanner: DefinitionScanner) -> Self {
        Self {
            catalog,
            scanner,
            registered: Vec::new(),
        }
    }

    /// Definitions registered so far, in registration order.
    pub fn registered(&self) -> &[ServiceDefinition] {
        &self.registered
    }

    /// Scans `root` for definition files and registers every service they
    /// define. Returns how many bindings were added.
    pub fn register_from_dir(
        &mut self,
        root: &Path,
        services: &mut ServiceCollection,
    ) -> Result<usize, RegistrationError> {
        let files = self.scanner.scan(root)?;
        info!(
            root = %root.display(),
            file_name = self.scanner.file_name(),
            files = files.len(),
            "Registering services from definition files"
        );

        let mut added = 0;
        for path in files {
            let content = fs::read_to_string(&path).map_err(|source| RegistrationError::Read {
                path: path.clone(),
                source,
            })?;
            let definitions = parse_definitions(&content)?
                .into_iter()
                .map(|definition| definition.with_source(&path));
            added += self.register_all(definitions, services)?;
        }

        info!(added, total = self.registered.len(), "Service registration finished");
        Ok(added)
    }

    pub fn register_all(
        &mut self,
        definitions: impl IntoIterator<Item = ServiceDefinition>,
        services: &mut ServiceCollection,
    ) -> Result<usize, RegistrationError> {
        let mut added = 0;
        for definition in definitions {
            self.register(definition, services)?;
            added += 1;
        }
        Ok(added)
    }

    pub fn register(
        &mut self,
        definition: ServiceDefinition,
        services: &mut ServiceCollection,
    ) -> Result<(), RegistrationError> {
        // Uniqueness is checked before any name is resolved.
        self.ensure_unique(&definition)?;

        let interface = self.catalog.interface(&definition.interface).ok_or_else(|| {
            debug!(known = ?self.catalog.interface_names(), "Unknown service interface");
            RegistrationError::UnresolvedType {
                role: TypeRole::Interface,
                name: definition.interface.clone(),
            }
        })?;
        let class = self.catalog.class(&definition.class).ok_or_else(|| {
            debug!(known = ?self.catalog.class_names(), "Unknown service class");
            RegistrationError::UnresolvedType {
                role: TypeRole::Class,
                name: definition.class.clone(),
            }
        })?;
        let factory = class
            .factory_for(&interface)
            .ok_or_else(|| RegistrationError::NotAssignable {
                class: definition.class.clone(),
                interface: definition.interface.clone(),
            })?;

        let lifetime = definition.lifetime_policy();
        services.add(ServiceDescriptor::new(
            interface.name,
            definition.class.as_str(),
            lifetime,
            factory,
        ));

        let source = definition
            .source
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        info!(
            service = %definition.name,
            interface = %definition.interface,
            class = %definition.class,
            %lifetime,
            %source,
            "Registered service"
        );

        self.registered.push(definition);
        Ok(())
    }

    fn ensure_unique(&self, definition: &ServiceDefinition) -> Result<(), RegistrationError> {
        if self.registered.iter().any(|r| r.name == definition.name) {
            debug!(service = %definition.name, "Duplicate service name");
            return Err(RegistrationError::DuplicateDefinition {
                field: DefinitionField::Name,
                value: definition.name.clone(),
            });
        }

        // Several services may share an interface, but never a class.
        if self.registered.iter().any(|r| r.class == definition.class) {
            debug!(class = %definition.class, "Duplicate service class");
            return Err(RegistrationError::DuplicateDefinition {
                field: DefinitionField::Class,
                value: definition.class.clone(),
            });
        }

        Ok(())
    }
}
