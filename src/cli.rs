use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{print_categories, serve};
use crate::config::ServerConfig;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Storefront web server and catalog tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    ///
    /// Settings are read from the optional config file, then from
    /// STOREFRONT_* environment variables (e.g. STOREFRONT_BIND_ADDRESS);
    /// flags given here take precedence over both.
    Serve {
        /// Configuration file (TOML, YAML or JSON)
        #[arg(short, long, env = "STOREFRONT_CONFIG")]
        config: Option<PathBuf>,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory containing the built frontend
        #[arg(short, long)]
        static_dir: Option<PathBuf>,

        /// Catalog JSON file to serve instead of the bundled catalog
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print the landing page categories with their product counts as JSON
    Categories {
        /// Catalog JSON file to read instead of the bundled catalog
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { config, bind_address, static_dir, catalog } => {
                let mut settings = ServerConfig::load(config.as_deref())?;
                if let Some(bind_address) = bind_address {
                    settings.bind_address = bind_address;
                }
                if let Some(static_dir) = static_dir {
                    settings.static_dir = static_dir;
                }
                if catalog.is_some() {
                    settings.catalog_path = catalog;
                }
                serve(settings).await?;
            }
            Commands::Categories { catalog } => {
                print_categories(catalog.as_deref())?;
            }
        }
        Ok(())
    }
}
