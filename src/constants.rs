//! Names shared between definition files, configuration and code.

// Service definition files
pub const DEFINITION_FILE_NAME: &str = "services.yml";
pub const SERVICES_KEY: &str = "services";

// Type names definition files refer to
pub const CLOCK_INTERFACE: &str = "party_invites::domain::clock::Clock";
pub const SYSTEM_CLOCK_CLASS: &str = "party_invites::domain::clock::SystemClock";
pub const HELLO_WORLD_INTERFACE: &str = "party_invites::domain::hello_world::HelloWorld";
pub const ENGLISH_HELLO_WORLD_CLASS: &str = "party_invites::domain::hello_world::EnglishHelloWorld";
pub const UPTIME_INTERFACE: &str = "party_invites::domain::uptime::UptimeService";
pub const STOPWATCH_UPTIME_CLASS: &str = "party_invites::domain::uptime::StopwatchUptimeService";
pub const RESPONSE_REPOSITORY_INTERFACE: &str = "party_invites::attendees::ResponseRepository";
pub const IN_MEMORY_RESPONSES_CLASS: &str = "party_invites::attendees::InMemoryResponseRepository";

// Configuration
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SERVICES_ROOT: &str = ".";

// Environment variable overrides
pub const ENV_ENVIRONMENT: &str = "PARTY_INVITES_ENV";
pub const ENV_HOST: &str = "PARTY_INVITES_HOST";
pub const ENV_PORT: &str = "PARTY_INVITES_PORT";
pub const ENV_SERVICES_ROOT: &str = "PARTY_INVITES_SERVICES_ROOT";
