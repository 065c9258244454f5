//! Configuration management
//!
//! Loaded once at startup from `.env` plus the process environment, then
//! passed by value into the components that need it.

use bioapi_common::{BioApiError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::sources::{pdb, uniprot};

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

pub const DEFAULT_SERVER_PORT: u16 = 8000;

pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Applies to each upstream request individually
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "*";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        }
    }
}

/// Settings for the outbound transport and the two source clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub pdb_base_url: String,
    pub uniprot_base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            pdb_base_url: pdb::DEFAULT_BASE_URL.to_string(),
            uniprot_base_url: uniprot::DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            user_agent: format!("BioAPI/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsConfig {
    /// An empty list or a `*` entry opens the API to every origin
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()],
            allow_credentials: false,
        }
    }
}

impl Config {
    /// Load configuration from `.env`, the environment and defaults
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let text = |key: &str, default: String| lookup(key).unwrap_or(default);

        let config = Config {
            server: ServerConfig {
                host: text("BIOAPI_HOST", defaults.server.host),
                port: parsed(&lookup, "BIOAPI_PORT", defaults.server.port)?,
                shutdown_timeout_secs: parsed(
                    &lookup,
                    "BIOAPI_SHUTDOWN_TIMEOUT",
                    defaults.server.shutdown_timeout_secs,
                )?,
            },
            upstream: UpstreamConfig {
                pdb_base_url: text("PDB_BASE_URL", defaults.upstream.pdb_base_url),
                uniprot_base_url: text("UNIPROT_BASE_URL", defaults.upstream.uniprot_base_url),
                timeout_secs: parsed(&lookup, "UPSTREAM_TIMEOUT", defaults.upstream.timeout_secs)?,
                user_agent: text("UPSTREAM_USER_AGENT", defaults.upstream.user_agent),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or(defaults.cors.allowed_origins),
                allow_credentials: parsed(
                    &lookup,
                    "CORS_ALLOW_CREDENTIALS",
                    defaults.cors.allow_credentials,
                )?,
            },
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(BioApiError::Config("Server port must be greater than 0".to_string()));
        }

        for (name, url) in [
            ("PDB_BASE_URL", &self.upstream.pdb_base_url),
            ("UNIPROT_BASE_URL", &self.upstream.uniprot_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(BioApiError::invalid_setting(name, url.as_str()));
            }
        }

        if self.upstream.timeout_secs == 0 {
            return Err(BioApiError::Config(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        if self.cors.allowed_origins.is_empty() {
            tracing::warn!("No CORS origins configured - all origins will be allowed");
        }

        if self.cors.allows_any_origin() && self.cors.allow_credentials {
            tracing::warn!("CORS credentials are ignored when any origin is allowed");
        }

        Ok(())
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| BioApiError::invalid_setting(key, raw)),
        None => Ok(default),
    }
}
