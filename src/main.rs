//! Web app manifest service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app_manifest::api::{create_router, AppState};
use app_manifest::config::Config;
use app_manifest::error::ServerError;
use app_manifest::manifest::ManifestDocument;
use app_manifest::metrics;
use app_manifest::utils::shutdown_signal;

/// Web app manifest service.
#[derive(Parser, Debug)]
#[command(name = "app-manifest")]
#[command(about = "Serves a web app manifest at /manifest.json")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// IP address to bind, overrides HOST.
        #[arg(long)]
        host: Option<String>,

        /// HTTP server port, overrides PORT.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the manifest served for a name without starting a server.
    Render {
        /// Application name.
        #[arg(short, long, default_value = "")]
        name: String,

        /// Indent the JSON output.
        #[arg(long)]
        pretty: bool,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    let config = Config::load().map_err(ServerError::from);
    let defaults = Config::default();
    let effective = config.as_ref().unwrap_or(&defaults);

    init_tracing(
        args.verbose || effective.verbose,
        effective.log_json,
        &effective.rust_log,
    );

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(config),
        Some(Command::Render { name, pretty }) => cmd_render(name, pretty),
        Some(Command::Serve { host, port }) => cmd_serve(config?, host, port).await,
        None => cmd_serve(config?, None, None).await,
    }
}

/// Initialize the global tracing subscriber.
fn init_tracing(verbose: bool, json: bool, level: &str) {
    let filter = if verbose {
        EnvFilter::new("app_manifest=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Check configuration validity.
fn cmd_check_config(config: Result<Config, ServerError>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("APP MANIFEST - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match config {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => {
            println!("OK");
            println!("\nEffective settings:");
            println!("  Listen address: {}:{}", config.host, config.port);
            println!("  Log level:      {}", config.rust_log);
            println!("  JSON logs:      {}", config.log_json);
            println!("  Metrics:        {}", config.metrics);
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    Ok(())
}

/// Print a manifest document to stdout.
fn cmd_render(name: String, pretty: bool) -> anyhow::Result<()> {
    let document = ManifestDocument::new(name);

    let json = if pretty {
        document.to_json_pretty()
    } else {
        document.to_json()
    }
    .map_err(ServerError::from)?;

    println!("{}", json);
    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let config = config.with_overrides(host, port);
    config.validate()?;
    let addr = config.socket_addr()?;

    let app_state = if config.metrics {
        AppState::with_metrics(metrics::install_recorder()?)
    } else {
        AppState::new()
    };

    let listener = TcpListener::bind(addr).await.map_err(ServerError::from)?;
    info!(
        "HTTP server listening on {}",
        listener.local_addr().map_err(ServerError::from)?
    );

    axum::serve(listener, create_router(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::from)?;

    info!("HTTP server stopped");
    Ok(())
}
