//! Main Reel server client.

use crate::error::{Result, ServerClientError};
use crate::playlists::PlaylistClient;
use crate::types::{ClientConfig, ServerInfo};
use reel_core::Credential;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Main client for interacting with a Reel server.
///
/// The client owns the HTTP connection pool. It holds no credential of its
/// own: callers pass one to [`playlists`](Self::playlists), or to each
/// [`PlaylistService`](reel_core::PlaylistService) call.
///
/// # Example
///
/// ```ignore
/// use reel_core::Credential;
/// use reel_server_client::{ClientConfig, ReelServerClient};
///
/// let client = ReelServerClient::new(ClientConfig::new("https://reel.example.com"))?;
/// let credential = Credential::bearer(token);
///
/// let playlists = client.playlists(&credential).my_playlists().await?;
/// println!("Found {} playlists", playlists.len());
/// ```
#[derive(Debug, Clone)]
pub struct ReelServerClient {
    http: Client,
    url: String,
}

impl ReelServerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(format!("Reel/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self { http, url })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Test the connection to the server.
    ///
    /// This does not require authentication.
    pub async fn test_connection(&self) -> Result<ServerInfo> {
        let url = format!("{}/api/health", self.url);
        debug!(url = %url, "Testing server connection");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ServerClientError::from_send)?;

        let status = response.status();

        if status.is_success() {
            let info: ServerInfo = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse server info: {}", e))
            })?;

            info!(
                status = %info.status,
                version = %info.version,
                "Connected to server"
            );

            Ok(info)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Get a playlist client bound to `credential`.
    pub fn playlists<'a>(&'a self, credential: &'a Credential) -> PlaylistClient<'a> {
        PlaylistClient::new(&self.http, &self.url, credential)
    }
}
