//! Runtime configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file in the
//! user's config directory, then `POKEDEX_*` environment variables.
//! - Linux: ~/.config/pokedex/config.toml
//! - macOS: ~/Library/Application Support/pokedex/config.toml
//! - Windows: %APPDATA%\pokedex\config.toml

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Default upper bound on simultaneous outbound requests
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 16;

const ENV_PREFIX: &str = "POKEDEX";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the catalog API, without a trailing slash
    pub api_base_url: String,
    /// Fan-out limit for detail and sprite requests
    pub max_concurrent_requests: usize,
    /// Total timeout for a single request
    pub request_timeout_secs: u64,
    /// Directory holding `img/pokedexlogo.png` and `img/TypeIcons/*.png`
    pub asset_dir: PathBuf,
    /// Where downloaded sprites are cached (defaults to the user cache dir)
    pub sprite_cache_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            request_timeout_secs: 30,
            asset_dir: PathBuf::from("assets"),
            sprite_cache_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from the default config file location and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(default_config_path().as_deref())
    }

    /// Load settings from an explicit (optional) file and the environment
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings: Settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(settings.normalized())
    }

    /// Fan-out limit, never below one
    pub fn concurrency_limit(&self) -> usize {
        self.max_concurrent_requests.max(1)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolved sprite cache directory
    pub fn sprite_cache_dir(&self) -> PathBuf {
        match &self.sprite_cache_dir {
            Some(dir) => dir.clone(),
            None => {
                let mut path = dirs::cache_dir()
                    .or_else(dirs::home_dir)
                    .unwrap_or_else(std::env::temp_dir);
                path.push("pokedex");
                path.push("sprites");
                path
            }
        }
    }

    fn normalized(mut self) -> Self {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        self.max_concurrent_requests = self.concurrency_limit();
        self
    }
}

/// Get the path where the config file is expected
fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("pokedex");
    path.push("config.toml");
    Some(path)
}
