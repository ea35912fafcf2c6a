//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "smarthealth-assistant";
const PROJECT_FILES: [&str; 2] = ["assistant.toml", ".assistant.toml"];

/// Environment variables understood by the server deployment, mapped
/// onto config keys.
pub const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("FUSEKI_URL", "fuseki.url"),
    ("FUSEKI_USER", "fuseki.username"),
    ("FUSEKI_PASSWORD", "fuseki.password"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `FUSEKI_URL`, `FUSEKI_USER`, `FUSEKI_PASSWORD`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./assistant.toml` or `./.assistant.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/smarthealth-assistant/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::merge_env(figment, |name| std::env::var(name).ok())
            .extract()
            .map_err(Box::new)
    }

    /// Load a single file over the defaults, ignoring every other source
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Layer the endpoint environment variables found by `lookup`.
    ///
    /// Values are merged as strings so a numeric password stays a string.
    pub fn merge_env(mut figment: Figment, lookup: impl Fn(&str) -> Option<String>) -> Figment {
        for (name, key) in ENV_OVERRIDES {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }
        figment
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        for (name, _) in ENV_OVERRIDES {
            let state = if std::env::var(name).is_ok() { "SET  " } else { "     " };
            println!("  [{}] Env:     {}", state, name);
        }

        if let Some(path) = config_path {
            let state = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", state, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./assistant.toml or ./.assistant.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let state = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", state, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}
