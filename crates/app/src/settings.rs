//! Handles settings for the application. Configuration is read from
//! `settings.toml` (optional) and `CARTEIRA_*` environment variables, then
//! overridden by command line flags.
//!
//! See `settings.example.toml` for the configuration.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_SETTINGS_PATH: &str = "settings";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Store {
    /// Updating a user empties its transaction list.
    pub clear_transactions_on_update: bool,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            clear_transactions_on_update: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub store: Store,
}

#[derive(Debug, Parser)]
#[command(name = "carteira", about = "In-memory users and transactions API")]
struct Args {
    /// Settings file path, extension optional.
    #[arg(long, env = "CARTEIRA_CONFIG")]
    config: Option<String>,
    /// Override listen address.
    #[arg(long)]
    bind: Option<String>,
    /// Override listen port.
    #[arg(long)]
    port: Option<u16>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();

        let path = args.config.as_deref().unwrap_or(DEFAULT_SETTINGS_PATH);
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("CARTEIRA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Some(bind) = args.bind {
            settings.server.bind = bind;
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }

        Ok(settings)
    }

    /// Parse settings from TOML text only.
    #[cfg(test)]
    fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
