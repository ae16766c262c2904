use config::{Config, ConfigError, Environment, File, Map};
use dotenvy::dotenv;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub log_level: String,
}

impl Settings {
    /// Defaults, then `splitter.toml` (or `config_file`), then `SPLITTER_*` env vars.
    pub fn new(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::load(config_file, None)
    }

    /// `env` replaces the process environment when given.
    fn load(config_file: Option<&Path>, env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name("splitter").required(false),
        };

        let builder = Config::builder()
            .set_default("output_dir", ".")?
            .set_default("log_level", "warn")?
            .add_source(file)
            .add_source(
                Environment::with_prefix("SPLITTER")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            );

        builder.build()?.try_deserialize()
    }
}
