use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{
    CONFIG_FILE, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SERVICES_ROOT, DEFINITION_FILE_NAME, ENV_ENVIRONMENT, ENV_HOST,
    ENV_PORT, ENV_SERVICES_ROOT,
};
use crate::error::{PartyError, Result};

/// Hosting environment. Diagnostics pages are only served outside
/// production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Environment {
    Development,
    Staging,
    #[default]
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "Development",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
        }
    }
}

impl FromStr for Environment {
    type Err = PartyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(PartyError::Config(format!("Unknown environment '{}'", other))),
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = PartyError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub services: ServicesConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServicesConfig {
    /// Directory scanned recursively for definition files.
    pub root: PathBuf,
    pub file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            services: ServicesConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_SERVICES_ROOT),
            file_name: DEFINITION_FILE_NAME.to_string(),
        }
    }
}

impl Config {
    /// Loads `path` (or `config.toml` when not given), then applies
    /// environment variable overrides. A missing default file is fine; a
    /// missing explicit file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(CONFIG_FILE).exists() => Self::from_file(Path::new(CONFIG_FILE))?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PartyError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overrides fields from variables looked up through `var`.
    pub fn apply_env<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(environment) = var(ENV_ENVIRONMENT) {
            self.environment = environment.parse()?;
        }
        if let Some(host) = var(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = var(ENV_PORT) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| PartyError::Config(format!("{} must be a port number, got '{}'", ENV_PORT, port)))?;
        }
        if let Some(root) = var(ENV_SERVICES_ROOT) {
            self.services.root = PathBuf::from(root);
        }
        Ok(())
    }
}
