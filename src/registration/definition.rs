use serde::Serialize;
use std::path::PathBuf;

/// How many instances of a binding's implementation get created and shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lifetime {
    /// A fresh instance on every resolution.
    Transient,
    /// One instance per service scope.
    Scoped,
    /// One instance for the life of the provider.
    Singleton,
}

impl Lifetime {
    /// Maps a lifetime name, ignoring case. Anything unrecognized, the empty
    /// string included, is a singleton.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "transient" => Lifetime::Transient,
            "scoped" => Lifetime::Scoped,
            "singleton" => Lifetime::Singleton,
            _ => Lifetime::Singleton,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Lifetime::Transient => "Transient",
            Lifetime::Scoped => "Scoped",
            Lifetime::Singleton => "Singleton",
        }
    }
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One named entry under `services:` in a definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDefinition {
    pub name: String,
    pub class: String,
    pub interface: String,
    /// Raw lifetime text as written; see [`ServiceDefinition::lifetime_policy`].
    pub lifetime: String,
    /// File the entry was read from, if it came from disk.
    pub source: Option<PathBuf>,
}

impl ServiceDefinition {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        interface: impl Into<String>,
        lifetime: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
            interface: interface.into(),
            lifetime: lifetime.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn lifetime_policy(&self) -> Lifetime {
        Lifetime::from_name(&self.lifetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_mapping_ignores_case() {
        assert_eq!(Lifetime::from_name("Transient"), Lifetime::Transient);
        assert_eq!(Lifetime::from_name("SCOPED"), Lifetime::Scoped);
        assert_eq!(Lifetime::from_name("singleton"), Lifetime::Singleton);
    }

    #[test]
    fn test_lifetime_mapping_defaults_to_singleton() {
        assert_eq!(Lifetime::from_name(""), Lifetime::Singleton);
        assert_eq!(Lifetime::from_name("per-request"), Lifetime::Singleton);
        assert_eq!(Lifetime::from_name("transient-ish"), Lifetime::Singleton);
    }

    #[test]
    fn test_definition_exposes_policy() {
        let def = ServiceDefinition::new("clock", "Clock", "IClock", "Transient");
        assert_eq!(def.lifetime_policy(), Lifetime::Transient);
        assert!(def.source.is_none());

        let def = def.with_source("src/services.yml");
        assert_eq!(def.source.as_deref(), Some(std::path::Path::new("src/services.yml")));
    }
}
