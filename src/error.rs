use std::path::PathBuf;
use thiserror::Error;

/// Which field of a service definition collided with an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionField {
    Name,
    Class,
}

impl std::fmt::Display for DefinitionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionField::Name => f.write_str("name"),
            DefinitionField::Class => f.write_str("class"),
        }
    }
}

/// Which side of a binding a type name was looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRole {
    Interface,
    Class,
}

impl std::fmt::Display for TypeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRole::Interface => f.write_str("interface"),
            TypeRole::Class => f.write_str("class"),
        }
    }
}

/// Failures of the startup registration pass. All of them abort startup.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Service root directory '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to walk service root: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read service configuration file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid service configuration: {0}")]
    Parse(String),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("Service with {field} '{value}' already exists")]
    DuplicateDefinition { field: DefinitionField, value: String },

    #[error("Service {role} type '{name}' does not exist")]
    UnresolvedType { role: TypeRole, name: String },

    #[error("Service class '{class}' does not implement interface '{interface}'")]
    NotAssignable { class: String, interface: String },
}

/// Failures resolving a service out of a built container.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No service registered for '{0}'")]
    NotRegistered(String),

    #[error("Service '{service_type}' produced an instance of an unexpected type")]
    TypeMismatch { service_type: String },
}

#[derive(Error, Debug)]
pub enum PartyError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PartyError>;
