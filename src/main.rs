use anyhow::Context;
use owo_colors::OwoColorize;
use std::sync::Arc;
use studyhub::{
    AppState, ConfigManager,
    api::routes::build_app,
    chatbot,
    cli::{self, Cli, Commands},
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse_args();

    match &cli.command {
        Some(Commands::Config { validate }) => return Ok(cli::show_config(&cli, *validate)?),
        Some(Commands::Categories) => return Ok(cli::list_categories(&cli)?),
        None => {}
    }

    let config_manager = ConfigManager::new(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let config = config_manager.config();

    init_tracing(&config.server.log_level, cli.json_logs);

    for warning in config.warnings() {
        warn!("{}", warning);
    }

    if let Err(e) = config_manager.start_watching() {
        warn!("Config hot reload disabled: {}", e);
    }

    let chatbot = chatbot::controller_from_config(&config)?;
    let config_manager = Arc::new(config_manager);
    let state = AppState {
        config_manager: Arc::clone(&config_manager),
        chatbot,
    };

    let host = cli.host.clone().unwrap_or_else(|| config.server.host.clone());
    let port = cli.port.unwrap_or(config.server.port);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    cli.output().banner(&addr);
    info!(%addr, "StudyHub server listening");

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    config_manager.stop_watching();
    info!("StudyHub server stopped");
    Ok(())
}

fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "studyhub={level},studyhub_server={level},tower_http={level}"
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
