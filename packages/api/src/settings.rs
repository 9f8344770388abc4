//! Server settings: defaults, then `signup.toml`, then `SIGNUP_*` environment variables.
//!
//! Nested keys use `__` in the environment, e.g. `SIGNUP_ROSTER__CAPACITY=30` or
//! `SIGNUP_STORAGE__DATA_DIR=/var/lib/signup`.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use store::RosterConfig;

#[derive(Debug, Deserialize)]
pub struct Storage {
    /// Directory holding the file-backed roster.
    pub data_dir: String,
    /// Create an empty roster document on first start.
    pub create_missing: bool,
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            data_dir: "data".into(),
            create_missing: true,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub storage: Storage,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .set_default("storage.data_dir", "data")?
            .set_default("storage.create_missing", true)?
            .add_source(
                File::with_name("signup.toml")
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("SIGNUP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
