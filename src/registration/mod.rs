//! Startup service registration driven by `services.yml` files.
//!
//! The scanner finds definition files below a root directory, the parser
//! turns each into [`ServiceDefinition`]s, and the [`ServiceRegistrar`]
//! resolves their type names through a [`TypeCatalog`] and adds the
//! resulting bindings to a [`ServiceCollection`](crate::container::ServiceCollection).

pub mod catalog;
pub mod definition;
pub mod parser;
pub mod registrar;
pub mod scanner;

pub use catalog::{ClassType, InterfaceType, TypeCatalog};
pub use definition::{Lifetime, ServiceDefinition};
pub use parser::parse_definitions;
pub use registrar::ServiceRegistrar;
pub use scanner::DefinitionScanner;
