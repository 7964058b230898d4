//! Review Lag CLI
//!
//! - `report`: run one pass and print the result
//! - `serve`: serve the report page
//! - `config`: print a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use review_lag::config::{generate_default_config, Config, LoggingConfig};
use review_lag::{
    run_pass, serve, AppState, ModrinthClient, ModrinthConfig, OutputFormat, Presenter,
    SampleAggregator, SampleSize, Theme,
};

#[derive(Parser)]
#[command(name = "review-lag")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "How long do new Modrinth mods wait for approval?")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sample the newest mods and print the report
    Report {
        /// Number of newest mods to analyze (1-500, otherwise 50)
        #[arg(short, long)]
        sample: Option<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
        /// Theme for HTML output (default: from config)
        #[arg(short, long, value_enum)]
        theme: Option<Theme>,
        /// Output file (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Serve the report page
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    match cli.command {
        Commands::Report {
            sample,
            output,
            theme,
            out,
        } => {
            let size = SampleSize::resolve(sample.as_deref());
            if let Some(raw) = sample.as_deref() {
                if raw.trim() != size.to_string() {
                    tracing::warn!("Sample size {:?} resolved to {}", raw, size);
                }
            }

            let aggregator = SampleAggregator::new(build_client(&config)?);
            let view = run_pass(&aggregator, size).await;

            let presenter = Presenter::new(theme.unwrap_or(config.display.theme));
            let rendered = presenter.render(&view, output)?;

            match out {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Report written to {}", path.display());
                }
                None => print!("{}", rendered),
            }

            if view.is_failed() {
                std::process::exit(1);
            }
        }

        Commands::Serve { host, port } => {
            let mut server_config = config.server.clone();
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }

            tracing::info!("Review Lag v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Modrinth API: {}", config.api.base_url);

            let aggregator = Arc::new(SampleAggregator::new(build_client(&config)?));
            let state = AppState::new(aggregator, config.display.theme);

            serve(state, &server_config)
                .await
                .with_context(|| format!("Server on {} failed", server_config.addr()))?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn build_client(config: &Config) -> anyhow::Result<Arc<ModrinthClient>> {
    let client = ModrinthClient::new(ModrinthConfig::from(&config.api))
        .context("Failed to create HTTP client")?;
    Ok(Arc::new(client))
}

/// Logs go to stderr so report output on stdout stays clean
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("review_lag={},tower_http=info", config.level))
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
