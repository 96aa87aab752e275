//! CLI module for StudyHub
//!
//! Command-line parsing for the studyhub-server binary, plus the handlers for
//! the inspection subcommands. Uses clap for argument parsing and owo-colors
//! for colored terminal output.

pub mod output;

use crate::utils::config::{ConfigError, StudyHubConfig};
use clap::{Parser, Subcommand};
use output::Output;
use std::path::PathBuf;

/// StudyHub server
///
/// Serves the course catalog categories used by the storefront navigation
/// and routes chatbot requests to the configured chatbot service.
#[derive(Parser, Debug)]
#[command(
    name = "studyhub-server",
    version,
    about = "StudyHub - catalog and chatbot routing server",
    after_help = "EXAMPLES:\n    \
                  studyhub-server                        # Start the server (reads studyhub.toml)\n    \
                  studyhub-server --config my.toml       # Use a custom config file\n    \
                  studyhub-server config --validate      # Check the configuration and exit\n    \
                  studyhub-server categories             # List the catalog categories"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(
        short,
        long,
        default_value = "studyhub.toml",
        env = "STUDYHUB_CONFIG",
        global = true
    )]
    pub config: PathBuf,

    /// Override the bind host from the configuration
    #[arg(long)]
    pub host: Option<String>,

    /// Override the bind port from the configuration
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show configuration information
    Config {
        /// Only validate the configuration file
        #[arg(long)]
        validate: bool,
    },

    /// List the catalog categories and the storefront paths they map to
    Categories,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn output(&self) -> Output {
        if self.no_color {
            Output::no_color()
        } else {
            Output::new()
        }
    }
}

/// Handle `studyhub-server config`
pub fn show_config(cli: &Cli, validate_only: bool) -> Result<(), ConfigError> {
    let out = cli.output();
    let config = StudyHubConfig::load(&cli.config)?;

    if validate_only {
        out.success(&format!("{} is valid", cli.config.display()));
        for warning in config.warnings() {
            out.warning(&warning);
        }
        return Ok(());
    }

    out.header("Configuration");
    out.kv("File", &cli.config.display().to_string());

    out.subheader("Server");
    out.kv("Host", &config.server.host);
    out.kv("Port", &config.server.port.to_string());
    out.kv("Log level", &config.server.log_level);
    if config.server.cors_origins.is_empty() {
        out.kv("CORS", "any origin");
    } else {
        out.kv("CORS", &config.server.cors_origins.join(", "));
    }

    out.subheader("Chatbot");
    out.kv(
        "Upstream",
        config
            .chatbot
            .upstream_url_env
            .as_deref()
            .unwrap_or("(not configured)"),
    );
    out.kv("Timeout", &format!("{}s", config.chatbot.timeout_secs));
    out.kv("Max body", &format!("{} bytes", config.chatbot.max_body_bytes));

    out.subheader("Catalog");
    out.kv("Categories", &config.catalog.categories.len().to_string());

    for warning in config.warnings() {
        out.warning(&warning);
    }

    Ok(())
}

/// Handle `studyhub-server categories`
pub fn list_categories(cli: &Cli) -> Result<(), ConfigError> {
    let out = cli.output();
    let config = StudyHubConfig::load(&cli.config)?;

    out.header("Catalog categories");
    if config.catalog.categories.is_empty() {
        out.info("No categories configured");
        return Ok(());
    }

    for category in &config.catalog.categories {
        out.list_item(&format!("{} -> /catalog/{}", category.name, category.slug()));
        if cli.verbose {
            if let Some(ref description) = category.description {
                out.kv("description", description);
            }
        }
    }

    Ok(())
}
