mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable overriding `tmdb.api_key`
pub const TMDB_API_KEY_ENV: &str = "POSTFORGE_TMDB_API_KEY";
/// Environment variable overriding `drive.api_key`
pub const DRIVE_API_KEY_ENV: &str = "POSTFORGE_DRIVE_API_KEY";

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./postforge.toml",
        "~/.config/postforge/config.toml",
        "/etc/postforge/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    // Return default config if no file found
    let mut config = Config::default();
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Replace API keys with non-empty environment values
pub fn apply_env_overrides(config: &mut Config) {
    if let Some(key) = env_value(TMDB_API_KEY_ENV) {
        config.tmdb.api_key = key;
    }
    if let Some(key) = env_value(DRIVE_API_KEY_ENV) {
        config.drive.api_key = key;
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.drive.timeout_secs == 0 {
        anyhow::bail!("Drive timeout cannot be 0");
    }

    if config.post.season == 0 {
        anyhow::bail!("Season number must be at least 1");
    }

    // Missing keys only matter for commands that go online
    if config.tmdb.api_key.is_empty() {
        tracing::warn!("No TMDB API key configured; title lookups will fail");
    }
    if config.drive.api_key.is_empty() {
        tracing::warn!("No Drive API key configured; link lookups will fail");
    }

    Ok(())
}
