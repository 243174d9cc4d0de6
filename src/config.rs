//! Client configuration resolved at build time, plus the SSR host's runtime
//! settings.
//!
//! The WASM bundle has no process environment at runtime, so overrides are
//! baked in through `option_env!` when the crate is compiled:
//! - `IMGJOB_API_BASE`: backend API prefix, default `/api`
//! - `IMGJOB_TOKEN_KEY`: durable-storage key for the session token, default `token`
//!
//! The SSR server reads `PORT` (default 3000) from its process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";

pub const API_BASE_VAR: &str = "IMGJOB_API_BASE";
pub const TOKEN_KEY_VAR: &str = "IMGJOB_TOKEN_KEY";

pub const DEFAULT_PORT: u16 = 3000;
pub const PORT_VAR: &str = "PORT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {PORT_VAR}: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for backend endpoints, without a trailing slash.
    pub api_base: String,
    /// Storage key the session token is persisted under.
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_owned(), token_key: DEFAULT_TOKEN_KEY.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from variables captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| match name {
            API_BASE_VAR => option_env!("IMGJOB_API_BASE").map(str::to_owned),
            TOKEN_KEY_VAR => option_env!("IMGJOB_TOKEN_KEY").map(str::to_owned),
            _ => None,
        })
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// Blank values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = non_blank(lookup(API_BASE_VAR))
            .map_or_else(|| DEFAULT_API_BASE.to_owned(), |v| normalize_api_base(&v));
        let token_key = non_blank(lookup(TOKEN_KEY_VAR)).unwrap_or_else(|| DEFAULT_TOKEN_KEY.to_owned());
        Self { api_base, token_key }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Strip trailing slashes; a bare `/` becomes the empty prefix.
fn normalize_api_base(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

/// Runtime settings for the SSR host binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Read `PORT` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var_os(name).map(|v| v.to_string_lossy().into_owned()))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set but not a port.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = non_blank(lookup(PORT_VAR)) else {
            return Ok(Self::default());
        };
        let port = raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?;
        Ok(Self { port })
    }

    /// Socket address the listener binds, on all interfaces.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
