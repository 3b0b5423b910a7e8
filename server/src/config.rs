//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` (where the built `/pkg` assets live).
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: Leptos site root override
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is not a port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("PORT").ok().as_deref(), std::env::var("SITE_ROOT").ok().as_deref())
    }

    fn from_values(port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let site_root = site_root.map(str::trim).filter(|s| !s.is_empty()).map(PathBuf::from);
        Ok(Self { port, site_root })
    }

    /// Leptos options from the workspace metadata, with `site_root` applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Leptos`] when the workspace Leptos metadata is
    /// missing or malformed.
    pub fn leptos_options(&self) -> Result<leptos::config::LeptosOptions, ConfigError> {
        let conf = leptos::config::get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let mut options = conf.leptos_options;
        if let Some(root) = &self.site_root {
            options.site_root = root.to_string_lossy().as_ref().into();
        }
        Ok(options)
    }
}

/// A `.env` load error worth reporting. A missing file is normal outside
/// local development and yields `None`.
pub fn dotenv_failure(result: &Result<PathBuf, dotenvy::Error>) -> Option<&dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
