use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::PathBuf};
use url::Url;

/// Open-Meteo historical weather archive.
pub const DEFAULT_ARCHIVE_URL: &str = "https://archive-api.open-meteo.com/v1/archive";

/// Runtime configuration, resolved once at startup and handed to the server.
///
/// Sources, lowest precedence first:
/// - built-in defaults
/// - environment variables prefixed with `DASHBOARD_` (e.g. `DASHBOARD_DATABASE_PATH`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite file holding the e-commerce tables. Opened read-only.
    pub database_path: PathBuf,
    /// Append-only log destination.
    pub log_file: PathBuf,
    pub loglevel: String,
    pub archive_url: Url,
    pub listen_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("CCL_ecommerce.db"),
            log_file: PathBuf::from("App.log"),
            loglevel: "debug".to_string(),
            archive_url: Url::parse(DEFAULT_ARCHIVE_URL).expect("default archive url is valid"),
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("DASHBOARD_"))
    }
}
