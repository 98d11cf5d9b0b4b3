/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "REEL";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,

    #[serde(default = "default_jwt_expiration_hours")]
    pub jwt_expiration_hours: u64,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        Self::build(PathBuf::from("config.toml"), false)
    }

    /// Load configuration from an explicit file, then environment.
    ///
    /// Unlike [`ServerConfig::load`], the file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(path.as_ref().to_path_buf(), true)
    }

    fn build(path: PathBuf, required: bool) -> Result<Self> {
        let mut settings = config::Config::builder();

        if required || path.exists() {
            settings = settings.add_source(config::File::from(path).required(required));
        }

        // Override with environment variables (REEL_SERVER__PORT, REEL_AUTH__JWT_SECRET, ...)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(ServerError::Config(
                "JWT secret is required (set REEL_AUTH__JWT_SECRET)".to_string(),
            ));
        }

        if self.auth.jwt_expiration_hours == 0 {
            return Err(ServerError::Config(
                "JWT expiration must be at least one hour".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        jwt_secret: String::new(),
        jwt_expiration_hours: default_jwt_expiration_hours(),
    }
}

fn default_jwt_expiration_hours() -> u64 {
    24
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            auth: default_auth(),
        }
    }
}
