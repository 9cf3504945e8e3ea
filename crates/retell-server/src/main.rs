//! Retell — reconstructs informal text fragments and attaches
//! contextual web sources.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use retell_server::state::AppState;
use retell_server::{console, routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "console" => {
                let config = retell_core::RetellConfig::from_env()?;
                return console::run(config).await;
            }
            "--help" | "-h" | "help" => {
                println!("Retell — text reconstruction service");
                println!();
                println!("Usage: retell [command]");
                println!();
                println!("Commands:");
                println!("  (none)      Start the HTTP API server");
                println!("  console     Reconstruct one fragment interactively");
                println!("  help        Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'retell help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    // Missing secrets are fatal here, before the listener binds.
    let config = retell_core::RetellConfig::from_env()?;

    let state = Arc::new(AppState::new(config));
    let port = state.config.port;
    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Retell server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
