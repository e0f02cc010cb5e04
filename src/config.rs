use std::env;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Value of `NODE_ENV` that marks an in-process test run.
pub const TEST_ENVIRONMENT: &str = "test";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a port number between 0 and 65535, got {0:?}")]
    InvalidPort(String),
}

/// # Service Configuration
///
/// Runtime settings read from the process environment. A `.env` file in the
/// working directory is loaded first (see [`Config::from_env`]), so values set
/// there behave exactly like exported variables.
///
/// ## Variables
/// - `PORT`: listening port, defaults to `3000`
/// - `HOST`: interface to bind, defaults to `0.0.0.0`
/// - `NODE_ENV`: when `test`, the binary does not open a listener
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let host = lookup("HOST")
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self {
            host,
            port,
            environment: lookup("NODE_ENV"),
        })
    }

    pub fn is_test(&self) -> bool {
        self.environment.as_deref() == Some(TEST_ENVIRONMENT)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: None,
        }
    }
}
