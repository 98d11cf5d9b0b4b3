/// Reel Server - playlist backend for the save control
use clap::{Parser, Subcommand};
use reel_core::UserId;
use reel_server::{
    config::ServerConfig,
    services::{AuthService, PlaylistRegistry},
    state::AppState,
};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reel-server")]
#[command(about = "Reel playlist server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Mint a bearer token for a user (sign-in lives elsewhere)
    IssueToken {
        /// User ID the token is issued for
        #[arg(short, long)]
        user: String,
        /// Token lifetime in hours
        #[arg(long, default_value_t = 24)]
        hours: u64,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reel_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::IssueToken {
            user,
            hours,
            config,
        } => {
            issue_token(&user, hours, config.as_deref())?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> anyhow::Result<ServerConfig> {
    let config = match path {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Reel Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    ));
    let registry = Arc::new(PlaylistRegistry::new());
    tracing::info!("In-memory playlist registry ready");

    let app = reel_server::router(AppState::new(registry, auth_service));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn issue_token(user: &str, hours: u64, config_path: Option<&str>) -> anyhow::Result<()> {
    if user.trim().is_empty() {
        anyhow::bail!("User ID cannot be empty");
    }

    let config = load_config(config_path)?;
    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
    );

    let token = auth_service.issue_token(&UserId::new(user), hours)?;
    tracing::info!(user_id = %user, hours, "Issued access token");
    println!("{}", token);

    Ok(())
}
