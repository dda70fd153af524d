use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use party_invites::config::{Config, Environment};
use party_invites::container::ServiceProvider;
use party_invites::logging;
use party_invites::registration::TypeCatalog;
use party_invites::startup::build_services;
use party_invites::web::{self, AppState};

#[derive(Parser)]
#[command(name = "party_invites")]
#[command(about = "Party RSVP web app")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory scanned for services.yml files
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register services and start the web server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
        #[arg(long)]
        host: Option<String>,
        /// Development, Staging or Production
        #[arg(long)]
        env: Option<Environment>,
    },
    /// Register services and print the resulting bindings
    Services {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenv::dotenv().ok();
    let _log_guard = logging::init_logging();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(root) = cli.root {
        config.services.root = root;
    }

    let catalog = TypeCatalog::builtin();

    match cli.command {
        Commands::Serve { port, host, env } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(env) = env {
                config.environment = env;
            }

            info!(environment = %config.environment, root = %config.services.root.display(), "Starting party invites");
            let services = register(&config, &catalog)?;

            let state = AppState {
                services,
                environment: config.environment,
            };
            web::start_server(state, &config.server.host, config.server.port).await?;
        }
        Commands::Services { json } => {
            let services = register(&config, &catalog)?;
            let bindings: Vec<_> = services.descriptors().iter().map(|d| d.summary()).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&bindings)?);
            } else {
                println!("{:<55} {:<10} {}", "Type", "Lifetime", "Instance");
                for binding in &bindings {
                    println!(
                        "{:<55} {:<10} {}",
                        binding.service_type, binding.lifetime, binding.implementation_type
                    );
                }
                println!("\n📦 {} binding(s)", bindings.len());
            }
        }
    }

    Ok(())
}

fn register(config: &Config, catalog: &TypeCatalog) -> anyhow::Result<ServiceProvider> {
    build_services(&config.services, catalog).map_err(|e| {
        error!("Service registration failed: {}", e);
        anyhow::Error::from(e)
    })
}
